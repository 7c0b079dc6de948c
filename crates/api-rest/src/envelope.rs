//! Uniform response envelope.
//!
//! Every `/api` response carries `{success, data?, error?, message?}`.
//! Success responses hold their payload in `data`; failures carry a short
//! `error` string and no payload; mutation acknowledgements add `message`.

use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> (StatusCode, Json<Self>) {
        (
            StatusCode::OK,
            Json(Self {
                success: true,
                data: Some(data),
                error: None,
                message: None,
            }),
        )
    }

    pub fn ok_with_message(data: T, message: &str) -> (StatusCode, Json<Self>) {
        (
            StatusCode::OK,
            Json(Self {
                success: true,
                data: Some(data),
                error: None,
                message: Some(message.to_string()),
            }),
        )
    }

    pub fn failure(status: StatusCode, error: &str) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                success: false,
                data: None,
                error: Some(error.to_string()),
                message: None,
            }),
        )
    }
}
