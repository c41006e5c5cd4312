//! Uniform response envelope
//!
//! Every handler outcome, success or failure, is wrapped in the same body:
//! `{"message": ..., "status": "Success"|"Error", "data": ...}`. The HTTP
//! status code rides alongside the body (200 read/update, 201 create,
//! 204 delete, 400 for every failure) and is not serialized into it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

/// Outcome marker serialized into the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The `{message, status, data}` envelope plus its HTTP status code
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    /// Human-readable operation outcome, e.g. "Create category successfully!"
    pub message: String,

    /// "Success" or "Error"
    pub status: ResponseStatus,

    /// Record, list, field error map, message string, or null
    pub data: Value,

    /// HTTP status code carried out of band
    #[serde(skip)]
    pub code: StatusCode,
}

impl ApiResponse {
    /// Successful outcome with the given status code
    pub fn success(message: impl Into<String>, data: Value, code: StatusCode) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Success,
            data,
            code,
        }
    }

    /// Failed outcome; all failures are 400 by contract
    pub fn error(message: impl Into<String>, data: Value) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Error,
            data,
            code: StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let code = self.code;
        (code, Json(self)).into_response()
    }
}

/// Serialize any value into envelope data, falling back to null
pub fn to_data<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(
            "Get all categories successfully!",
            json!([{"id": 1}]),
            StatusCode::OK,
        );

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["message"], "Get all categories successfully!");
        assert_eq!(body["status"], "Success");
        assert_eq!(body["data"][0]["id"], 1);
        // code stays out of the serialized body
        assert!(body.get("code").is_none());
    }

    #[test]
    fn test_error_envelope_is_bad_request() {
        let response = ApiResponse::error("Create category failed", json!({"name": "This field is required."}));
        assert_eq!(response.code, StatusCode::BAD_REQUEST);

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["status"], "Error");
        assert_eq!(body["data"]["name"], "This field is required.");
    }

    #[test]
    fn test_to_data_serializes_records() {
        #[derive(Serialize)]
        struct Row {
            id: i64,
        }
        assert_eq!(to_data(&Row { id: 3 }), json!({"id": 3}));
    }
}
