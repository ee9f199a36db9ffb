use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::{AppError, ErrorResponse};
use thiserror::Error;

pub const NOT_FOUND_REASON: &str = "The item you requested could not be found";
pub const TERMINAL_REASON: &str = "An unexpected error occurred when processing your request";

/// The only two failures a client of the foo endpoints ever sees.
#[derive(Debug, Error)]
pub enum FooApiError {
    #[error("{}", NOT_FOUND_REASON)]
    NotFound,

    #[error("{}", TERMINAL_REASON)]
    Terminal,
}

impl FooApiError {
    /// Keeps `NotFound`; anything else becomes `Terminal` after logging the cause.
    pub fn from_lookup(err: AppError) -> Self {
        if err.is_not_found() {
            FooApiError::NotFound
        } else {
            FooApiError::terminal(err)
        }
    }

    pub fn terminal(err: AppError) -> Self {
        tracing::error!(error = %err, "Unexpected error while handling foo request");
        FooApiError::Terminal
    }

    pub fn status(&self) -> StatusCode {
        match self {
            FooApiError::NotFound => StatusCode::NOT_FOUND,
            FooApiError::Terminal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FooApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}
