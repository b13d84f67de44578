//! Machine-readable validation error kinds.

use std::fmt;

use serde::Serialize;

/// Minimum number of points a request must carry.
pub const MIN_POINTS: usize = 1;

/// Why a field failed validation. Serialises as the `type` tag of an
/// error detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required field is absent.
    Missing,
    /// `points` is present but not an array.
    ListType,
    /// `points` has fewer than [`MIN_POINTS`] elements.
    TooShort,
    /// A value that must be an object is something else.
    ModelAttributesType,
    /// A coordinate is a string that does not parse as a number.
    FloatParsing,
    /// A coordinate is neither a number nor a string.
    FloatType,
    /// A coordinate parsed to infinity or NaN.
    FiniteNumber,
    /// The request body is not well-formed JSON.
    JsonInvalid,
}

impl IssueKind {
    /// Wire tag, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::ListType => "list_type",
            Self::TooShort => "too_short",
            Self::ModelAttributesType => "model_attributes_type",
            Self::FloatParsing => "float_parsing",
            Self::FloatType => "float_type",
            Self::FiniteNumber => "finite_number",
            Self::JsonInvalid => "json_invalid",
        }
    }

    /// Message used when no location-specific template applies.
    pub fn default_message(&self) -> String {
        match self {
            Self::Missing => "Field required".to_string(),
            Self::ListType => "Input should be a valid list".to_string(),
            Self::TooShort => {
                format!("List should have at least {MIN_POINTS} item after validation, not 0")
            }
            Self::ModelAttributesType => {
                "Input should be a valid dictionary or object to extract fields from".to_string()
            }
            Self::FloatParsing => {
                "Input should be a valid number, unable to parse string as a number".to_string()
            }
            Self::FloatType => "Input should be a valid number".to_string(),
            Self::FiniteNumber => "Input should be a finite number".to_string(),
            Self::JsonInvalid => "JSON decode error".to_string(),
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
