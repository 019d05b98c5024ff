/// Failures of review generation.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review.configuration")]
    Configuration,
    #[error("review.authentication")]
    Authentication,
    #[error("review.remote_service")]
    RemoteService,
    #[error("review.malformed_response")]
    MalformedResponse,
    #[error("review.blocked")]
    Blocked,
}
