use async_trait::async_trait;

use super::errors::ReviewError;

/// Service port for turning a prompt into review text with a remote model.
///
/// Implementations hold immutable configuration only, so a single instance
/// can serve concurrent calls.
#[async_trait]
pub trait ReviewGeneratorService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ReviewError>;
}
