use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ItemError::NameEmpty
            | ItemError::InvalidName
            | ItemError::InvalidPrice
            | ItemError::InvalidPage => (StatusCode::BAD_REQUEST, "ValidationError"),
            ItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ItemError::NotModified => (StatusCode::NOT_MODIFIED, "NotModified"),
            ItemError::DeleteViaPatch | ItemError::InvalidField(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UnprocessableEntity")
            }
            ItemError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
