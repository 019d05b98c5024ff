use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// JSON body returned for failed requests.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error family, e.g. "RemoteServiceError"
    pub name: String,
    /// Code-style identifier of the domain error
    pub message: String,
}

/// Maps a domain error to an HTTP status and body.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
