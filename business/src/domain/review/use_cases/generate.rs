use async_trait::async_trait;

use crate::domain::review::errors::ReviewError;

pub struct GenerateReviewParams {
    pub prompt: String,
}

#[async_trait]
pub trait GenerateReviewUseCase: Send + Sync {
    async fn execute(&self, params: GenerateReviewParams) -> Result<String, ReviewError>;
}
