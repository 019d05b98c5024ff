use std::sync::Arc;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::code_reviewer::CodeReviewerGemini;

use business::application::review::generate::GenerateReviewUseCaseImpl;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub review_api: crate::api::review::routes::ReviewApi,
}

impl DependencyContainer {
    /// Builds every adapter once; fails if the Gemini credential is absent.
    pub fn new(gemini_config: GeminiConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let gemini_client = GeminiClient::new(gemini_config.api_key)?;
        let code_reviewer = Arc::new(CodeReviewerGemini::new(gemini_client));

        // Review use cases
        let generate_review_use_case = Arc::new(GenerateReviewUseCaseImpl {
            generator: code_reviewer,
            logger,
        });

        let review_api = crate::api::review::routes::ReviewApi::new(generate_review_use_case);

        Ok(Self {
            health_api,
            review_api,
        })
    }
}
