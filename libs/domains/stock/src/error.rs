use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::SqlErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StockError {
    #[error("Stock item not found: {0}")]
    NotFound(Uuid),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type StockResult<T> = Result<T, StockError>;

/// Convert StockError to AppError for standardized error responses
impl From<StockError> for AppError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::NotFound(id) => AppError::NotFound(format!("Stock item {} not found", id)),
            StockError::Conflict(msg) => AppError::Conflict(msg),
            StockError::Validation(msg) => AppError::BadRequest(msg),
            StockError::Database(msg) => AppError::InternalServerError(msg),
            StockError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for StockError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for StockError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => StockError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => StockError::Validation(msg),
            _ => StockError::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_app_not_found() {
        let id = Uuid::now_v7();
        let app: AppError = StockError::NotFound(id).into();
        assert!(matches!(app, AppError::NotFound(_)));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let app: AppError = StockError::Validation("name is required".to_string()).into();
        match app {
            AppError::BadRequest(msg) => assert_eq!(msg, "name is required"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_database_maps_to_internal() {
        let app: AppError = StockError::Database("connection reset".to_string()).into();
        assert!(matches!(app, AppError::InternalServerError(_)));
    }
}
