use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::review::errors::ReviewError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReviewError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ReviewError::Configuration => {
                (StatusCode::INTERNAL_SERVER_ERROR, "ConfigurationError")
            }
            ReviewError::Authentication => (StatusCode::BAD_GATEWAY, "AuthenticationError"),
            ReviewError::RemoteService => (StatusCode::BAD_GATEWAY, "RemoteServiceError"),
            ReviewError::MalformedResponse => (StatusCode::BAD_GATEWAY, "MalformedResponseError"),
            ReviewError::Blocked => (StatusCode::UNPROCESSABLE_ENTITY, "BlockedError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
