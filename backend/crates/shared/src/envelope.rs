//! Response Envelope
//!
//! Every response body has the shape `{message?, data?, error?}`.
//! Successful handlers return [`ApiResponse`]; failures go through
//! `AppError`'s `IntoResponse`, which fills only `error`.

use std::borrow::Cow;

use serde::Serialize;

/// JSON envelope shared by all endpoints
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Cow<'static, str>>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<Cow<'static, str>>, data: Option<T>) -> Self {
        Self {
            message: Some(message.into()),
            data,
            error: None,
        }
    }

    pub fn failure(error: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Successful response: HTTP status plus envelope
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: u16,
    body: Envelope<T>,
}

impl<T> ApiResponse<T> {
    /// 200 OK with data
    pub fn ok(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            status: 200,
            body: Envelope::success(message, Some(data)),
        }
    }

    /// 201 Created with data
    pub fn created(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            status: 201,
            body: Envelope::success(message, Some(data)),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Envelope<T> {
        &self.body
    }
}

impl ApiResponse<()> {
    /// 200 OK with a message only
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: 200,
            body: Envelope::success(message, None),
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status)
            .unwrap_or(axum::http::StatusCode::OK);
        (status, axum::Json(self.body)).into_response()
    }
}
