use business::domain::review::errors::ReviewError;

/// Configuration for Gemini API access.
pub struct GeminiConfig {
    pub api_key: String,
}

impl GeminiConfig {
    /// Environment variables:
    /// - GOOGLE_GEMINI_KEY: API key for the Gemini service (required)
    pub fn from_env() -> Result<Self, ReviewError> {
        Self::from_key(std::env::var("GOOGLE_GEMINI_KEY").ok())
    }

    fn from_key(api_key: Option<String>) -> Result<Self, ReviewError> {
        match api_key {
            Some(api_key) if !api_key.trim().is_empty() => Ok(Self { api_key }),
            _ => Err(ReviewError::Configuration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fail_when_key_is_missing() {
        let result = GeminiConfig::from_key(None);

        assert!(matches!(result, Err(ReviewError::Configuration)));
    }

    #[test]
    fn should_fail_when_key_is_blank() {
        let result = GeminiConfig::from_key(Some("  ".to_string()));

        assert!(matches!(result, Err(ReviewError::Configuration)));
    }

    #[test]
    fn should_keep_key_when_present() {
        let config = GeminiConfig::from_key(Some("AIza-test".to_string())).unwrap();

        assert_eq!(config.api_key, "AIza-test");
    }
}
