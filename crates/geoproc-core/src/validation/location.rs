//! Location paths identifying where in the request an issue was found.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Root segment of every location path.
pub const BODY: &str = "body";

/// One step of a location path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(Cow<'static, str>),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Ordered path from the request body down to the offending value.
///
/// Serialises as a JSON array of strings and integers, e.g.
/// `["body", "points", 0, "lat"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Location(Vec<PathSegment>);

impl Location {
    /// `["body"]`.
    pub fn body() -> Self {
        Self(vec![PathSegment::Key(Cow::Borrowed(BODY))])
    }

    /// Returns a new path extended with an object key.
    pub fn key(&self, key: impl Into<Cow<'static, str>>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.into()));
        Self(segments)
    }

    /// Returns a new path extended with an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    /// Last segment.
    pub fn leaf(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    /// Second-to-last segment: the container holding the leaf.
    pub fn parent(&self) -> Option<&PathSegment> {
        self.0.len().checked_sub(2).map(|i| &self.0[i])
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
