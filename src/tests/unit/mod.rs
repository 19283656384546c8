//! Unit tests for configuration and error handling

use crate::{
    error::AppError,
    models::{FieldError, ValidationErrorBody},
    tests::config,
};
use validator::Validate;
use warp::http::StatusCode;

#[test]
fn default_config_passes_its_own_validation() {
    config::init();
    let cfg = config::test_config();
    assert!(cfg.validate().is_ok());
}

#[test]
fn server_address_joins_bind_address_and_port() {
    let mut cfg = config::test_config();
    cfg.server.port = 8080;
    assert_eq!(cfg.server_address(), "127.0.0.1:8080");
}

#[test]
fn config_rejects_out_of_range_request_size() {
    let mut cfg = config::test_config();
    cfg.server.max_request_size = 16; // below the 1KB floor
    assert!(cfg.validate().is_err());
}

#[test]
fn errors_map_onto_client_and_server_statuses() {
    assert_eq!(
        AppError::Validation("boom".to_string()).http_status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::Config("boom".to_string()).http_status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn validation_error_body_serializes_as_field_message_pairs() {
    let body = ValidationErrorBody::new(vec![
        FieldError::new("name", "field is required"),
        FieldError::new("evenNumber", "value is not an even number"),
    ]);
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "errors": [
                {"field": "name", "message": "field is required"},
                {"field": "evenNumber", "message": "value is not an even number"}
            ]
        })
    );
}
