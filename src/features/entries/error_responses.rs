use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use crate::data::models::EntryError;

impl EntryError {
    pub fn status(&self) -> StatusCode {
        match self {
            EntryError::NotFound(_) => StatusCode::NOT_FOUND,
            EntryError::MissingPayload => StatusCode::BAD_REQUEST,
            EntryError::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            EntryError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            EntryError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            EntryError::Repository(_) | EntryError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for EntryError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            EntryError::Repository(e) => format!("Storage error: {}", e),
            other => other.to_string(),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_kind() {
        assert_eq!(EntryError::NotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(EntryError::MissingPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            EntryError::InvalidPayload("unknown field".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            EntryError::UnsupportedMediaType.status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn not_found_response_carries_status_in_body() {
        let response = EntryError::NotFound(9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
