use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::NotFound | CartError::ItemNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CartError::InvalidPage => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_distinguish_missing_cart_from_missing_item() {
        let (status, json) = CartError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "cart.not_found");

        let (status, json) = CartError::ItemNotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "cart.item_not_found");
    }

    #[test]
    fn should_map_invalid_page_to_bad_request() {
        assert_eq!(
            CartError::InvalidPage.into_error_response().0,
            StatusCode::BAD_REQUEST
        );
    }
}
