use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    ConfigurationError(String),

    /// Non-success status from the generation endpoint, or a request that
    /// never got a response (`status` is `None` then).
    #[error("{message}")]
    TransportError { status: Option<u16>, message: String },

    #[error("Unexpected response from generation API: {0}")]
    ParseError(String),

    #[error("{0}")]
    Busy(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::TransportError { .. } => "TRANSPORT_ERROR",
            AppError::ParseError(_) => "PARSE_ERROR",
            AppError::Busy(_) => "BUSY",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn upstream_status(status: u16, status_text: &str) -> Self {
        AppError::TransportError {
            status: Some(status),
            message: format!("API Error: {} - {}", status, status_text),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TransportError { .. } => StatusCode::BAD_GATEWAY,
            AppError::ParseError(_) => StatusCode::BAD_GATEWAY,
            AppError::Busy(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let message = err
            .field_errors()
            .into_values()
            .flatten()
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| err.to_string());
        AppError::ValidationError(message)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::TransportError {
            status: err.status().map(|s| s.as_u16()),
            message: format!("Request to generation API failed: {}", err),
        }
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::InternalError(format!("Template error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
