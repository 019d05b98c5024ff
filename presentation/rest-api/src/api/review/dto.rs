use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct GetReviewRequest {
    /// Source code to review
    pub code: Option<String>,
}
