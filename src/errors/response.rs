use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use crate::errors::{AppError, StoreError};

// Converts AppError into a plain-text HTTP response with a matching status.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Validation error: {}", messages.join("; "))
            ).into_response(),

            AppError::Store(err) => convert_store_error(err),

            AppError::File(e) => {
                tracing::error!("File error while handling request: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("File error: {}", e)
                ).into_response()
            }

            AppError::Seed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Seed error: {}", msg)
            ).into_response(),

            AppError::Json(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("JSON error: {}", e)
            ).into_response(),

            AppError::Chart(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Chart error: {}", msg)
            ).into_response(),
        }
    }
}

fn convert_store_error(err: StoreError) -> Response {
    match err {
        StoreError::ProjectNotFound(_) => (
            StatusCode::NOT_FOUND,
            err.to_string()
        ).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = AppError::from(StoreError::ProjectNotFound("42".into())).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = AppError::validation("Project name is required").into_response();
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let seed = AppError::Seed("duplicate id".into()).into_response();
        assert_eq!(seed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
