use crate::bonus::LineItemError;
use crate::config::ConfigError;
use crate::feedback::FeedbackError;
use crate::quiz::QuizError;
use crate::scoring::{AllocationError, RerollError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Allocation(AllocationError),
    Reroll(RerollError),
    LineItem(LineItemError),
    Quiz(QuizError),
    Feedback(FeedbackError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Allocation(err) => write!(f, "allocation error: {}", err),
            AppError::Reroll(err) => write!(f, "reroll error: {}", err),
            AppError::LineItem(err) => write!(f, "bonus error: {}", err),
            AppError::Quiz(err) => write!(f, "quiz error: {}", err),
            AppError::Feedback(err) => write!(f, "feedback error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Allocation(err) => Some(err),
            AppError::Reroll(err) => Some(err),
            AppError::LineItem(err) => Some(err),
            AppError::Quiz(err) => Some(err),
            AppError::Feedback(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Allocation(_)
            | AppError::Reroll(_)
            | AppError::LineItem(_)
            | AppError::Quiz(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Feedback(FeedbackError::MissingField) => StatusCode::BAD_REQUEST,
            AppError::Feedback(FeedbackError::Repository(_))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AllocationError> for AppError {
    fn from(value: AllocationError) -> Self {
        Self::Allocation(value)
    }
}

impl From<RerollError> for AppError {
    fn from(value: RerollError) -> Self {
        Self::Reroll(value)
    }
}

impl From<LineItemError> for AppError {
    fn from(value: LineItemError) -> Self {
        Self::LineItem(value)
    }
}

impl From<QuizError> for AppError {
    fn from(value: QuizError) -> Self {
        Self::Quiz(value)
    }
}

impl From<FeedbackError> for AppError {
    fn from(value: FeedbackError) -> Self {
        Self::Feedback(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::TOTAL_BUDGET;

    #[test]
    fn domain_errors_are_unprocessable() {
        let err = AppError::from(AllocationError::Incomplete {
            allocated: 60,
            budget: TOTAL_BUDGET,
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            AppError::from(QuizError::Incomplete { missing: vec![20] }).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn infrastructure_errors_are_internal() {
        let err = AppError::from(ConfigError::InvalidPort);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("configuration error"));
    }
}
