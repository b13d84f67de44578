//! Integration tests for `POST /api/points`.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{POINTS_URL, TestApp};

#[tokio::test]
async fn test_valid_points() {
    let app = TestApp::new();

    let response = app
        .post_points(json!({"points": [{"lat": 0.0, "lng": 0.0}, {"lat": -45.2, "lng": 80.5}]}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["centroid"]["lat"], json!(-22.6));
    assert_eq!(response.body["centroid"]["lng"], json!(40.25));
    assert_eq!(response.body["bounds"]["north"], json!(0.0));
    assert_eq!(response.body["bounds"]["south"], json!(-45.2));
    assert_eq!(response.body["bounds"]["east"], json!(80.5));
    assert_eq!(response.body["bounds"]["west"], json!(0.0));
}

#[tokio::test]
async fn test_single_point() {
    let app = TestApp::new();

    let response = app
        .post_points(json!({"points": [{"lat": 48.858844, "lng": 2.294351}]}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "centroid": {"lat": 48.8588, "lng": 2.2944},
            "bounds": {"north": 48.8588, "south": 48.8588, "east": 2.2944, "west": 2.2944}
        })
    );
}

#[tokio::test]
async fn test_numeric_strings_accepted() {
    let app = TestApp::new();

    let response = app
        .post_points(json!({"points": [{"lat": "10", "lng": 20}, {"lat": 30, "lng": "40.5"}]}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["centroid"], json!({"lat": 20.0, "lng": 30.25}));
}

#[tokio::test]
async fn test_empty_points() {
    let app = TestApp::new();

    let response = app.post_points(json!({"points": []})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.first_error();
    assert_eq!(error["type"], "too_short");
    assert_eq!(
        error["msg"],
        "List should have at least 1 item after validation, not 0"
    );
    assert_eq!(error["loc"], json!(["body", "points"]));
}

#[tokio::test]
async fn test_no_points() {
    let app = TestApp::new();

    let response = app.post_points(json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.first_error();
    assert_eq!(error["type"], "missing");
    assert_eq!(error["msg"], "Body does not include the required 'points' value");
}

#[tokio::test]
async fn test_invalid_type_points() {
    let app = TestApp::new();

    let response = app.post_points(json!({"points": "not a list"})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.first_error();
    assert_eq!(error["type"], "list_type");
    assert_eq!(error["msg"], "Input should be a valid list");
}

#[tokio::test]
async fn test_not_dict_points() {
    let app = TestApp::new();

    let response = app.post_points(json!({"points": ["not an object"]})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.first_error();
    assert_eq!(error["type"], "model_attributes_type");
    assert_eq!(
        error["msg"],
        "Input should be a valid dictionary or object to extract fields from"
    );
    assert_eq!(error["loc"], json!(["body", "points", 0]));
}

#[tokio::test]
async fn test_invalid_points() {
    let app = TestApp::new();

    for payload in [
        json!({"points": [{"lat": "abc", "lng": 56.78}]}),
        json!({"points": [{"lat": 12.34, "lng": "xyz"}]}),
        json!({"points": [{"lat": 10, "lng": 20}, {"lat": "bad", "lng": 30}]}),
    ] {
        let response = app.post_points(payload).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let error = response.first_error();
        assert_eq!(error["type"], "float_parsing");
        assert_eq!(
            error["msg"],
            "Input should be a valid number, unable to parse string as a number"
        );
    }
}

#[tokio::test]
async fn test_missing_latitude() {
    let app = TestApp::new();

    let response = app.post_points(json!({"points": [{"lng": 56.78}]})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.first_error();
    assert_eq!(error["type"], "missing");
    assert_eq!(
        error["msg"],
        "Point 0 does not include the required 'latitude' value"
    );
    assert_eq!(error["loc"], json!(["body", "points", 0, "lat"]));
}

#[tokio::test]
async fn test_missing_longitude() {
    let app = TestApp::new();

    let response = app.post_points(json!({"points": [{"lat": 12.34}]})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.first_error();
    assert_eq!(error["type"], "missing");
    assert_eq!(
        error["msg"],
        "Point 0 does not include the required 'longitude' value"
    );
}

#[tokio::test]
async fn test_all_errors_reported_in_order() {
    let app = TestApp::new();

    let response = app
        .post_points(json!({"points": [
            {"lat": 1, "lng": 2},
            {"lat": "north"},
            [],
        ]}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({"detail": [
            {
                "loc": ["body", "points", 1, "lat"],
                "msg": "Input should be a valid number, unable to parse string as a number",
                "type": "float_parsing",
            },
            {
                "loc": ["body", "points", 1, "lng"],
                "msg": "Point 1 does not include the required 'longitude' value",
                "type": "missing",
            },
            {
                "loc": ["body", "points", 2],
                "msg": "Input should be a valid dictionary or object to extract fields from",
                "type": "model_attributes_type",
            },
        ]})
    );
}

#[tokio::test]
async fn test_null_coordinate() {
    let app = TestApp::new();

    let response = app
        .post_points(json!({"points": [{"lat": null, "lng": 1}]}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.first_error();
    assert_eq!(error["type"], "float_type");
    assert_eq!(error["msg"], "Input should be a valid number");
}

#[tokio::test]
async fn test_malformed_json() {
    let app = TestApp::new();

    let response = app
        .send("POST", POINTS_URL, "{\"points\": [", &[("Content-Type", "application/json")])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.first_error();
    assert_eq!(error["type"], "json_invalid");
    assert_eq!(error["msg"], "JSON decode error");
    assert_eq!(error["loc"][0], "body");
    assert!(error["loc"][1].is_u64());
}

#[tokio::test]
async fn test_empty_body() {
    let app = TestApp::new();

    let response = app.send("POST", POINTS_URL, "", &[]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.first_error();
    assert_eq!(error["type"], "missing");
    assert_eq!(error["loc"], json!(["body"]));
}

#[tokio::test]
async fn test_body_not_an_object() {
    let app = TestApp::new();

    let response = app.post_points(json!([{"lat": 1, "lng": 2}])).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.first_error();
    assert_eq!(error["type"], "model_attributes_type");
    assert_eq!(error["loc"], json!(["body"]));
}

#[tokio::test]
async fn test_content_type_not_required() {
    let app = TestApp::new();

    let response = app
        .send(
            "POST",
            POINTS_URL,
            r#"{"points":[{"lat":1,"lng":2}]}"#,
            &[("Content-Type", "text/plain")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["centroid"], json!({"lat": 1.0, "lng": 2.0}));
}

#[tokio::test]
async fn test_repeated_requests_identical() {
    let app = TestApp::new();
    let payload = json!({"points": [{"lat": 1.1, "lng": 2.2}, {"lat": 3.3, "lng": 4.4}, {"lat": 5.5, "lng": 6.6}]});

    let first = app.post_points(payload.clone()).await;
    let second = app.post_points(payload).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_large_coordinates_serialize_as_numbers() {
    let app = TestApp::new();

    let response = app
        .post_points(json!({"points": [{"lat": 1e305, "lng": 2}]}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "centroid": {"lat": 1e305, "lng": 2.0},
            "bounds": {"north": 1e305, "south": 1e305, "east": 2.0, "west": 2.0}
        })
    );
}

#[tokio::test]
async fn test_five_decimal_halfway_literals() {
    let app = TestApp::new();

    let response = app
        .post_points(json!({"points": [{"lat": 0.12345, "lng": -100.16965}]}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["centroid"], json!({"lat": 0.1235, "lng": -100.1697}));
}
