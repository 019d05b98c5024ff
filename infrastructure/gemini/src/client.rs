use reqwest::Client;

use business::domain::review::errors::ReviewError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl GeminiClient {
    /// Builds a client bound to `api_key`.
    ///
    /// No timeout is configured; callers own their cancellation policy.
    pub fn new(api_key: String) -> Result<Self, ReviewError> {
        if api_key.trim().is_empty() {
            return Err(ReviewError::Configuration);
        }

        let client = Client::builder()
            .build()
            .map_err(|_| ReviewError::Configuration)?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Points the client at another deployment of the API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the generateContent endpoint URL for `model`.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}
