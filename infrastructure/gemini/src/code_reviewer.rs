use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use business::domain::review::errors::ReviewError;
use business::domain::review::services::ReviewGeneratorService;

use crate::client::GeminiClient;

const MODEL: &str = "gemini-2.0-flash";

const SYSTEM_INSTRUCTION: &str = r#"You are an expert code reviewer with deep expertise in software development. Your role is to analyze the provided code, identify potential issues, and suggest improvements to enhance efficiency, readability, and maintainability.

Your approach to code review should include:
- Detecting logical errors, performance bottlenecks, and security vulnerabilities.
- Ensuring best coding practices, including modularity, scalability, and maintainability.
- Suggesting optimized solutions while keeping the code clean, efficient, and easy to understand.
- Providing constructive feedback with clear explanations and alternative approaches if necessary.
- Following industry standards, such as DRY (Don't Repeat Yourself), SOLID principles, and appropriate error handling.
- Considering modern programming techniques, frameworks, and language-specific best practices.

Your feedback should be:
- Precise and to the point, focusing on actionable improvements.
- Well-structured, including issue identification, explanation, and suggested fixes.
- Encouraging, helping the developer grow while maintaining a high-quality codebase."#;

/// Finish reasons for which the service withholds the candidate text.
const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "RECITATION", "LANGUAGE"];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    status: Option<String>,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}

/// Code reviewer backed by the Gemini `generateContent` endpoint.
pub struct CodeReviewerGemini {
    client: GeminiClient,
}

impl CodeReviewerGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn classify_failure(status: StatusCode, body: &str) -> ReviewError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return ReviewError::Authentication;
        }

        let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
            return ReviewError::RemoteService;
        };

        let rejected_key = envelope
            .error
            .details
            .iter()
            .any(|d| d.reason.as_deref() == Some("API_KEY_INVALID"));
        let unauthenticated = matches!(
            envelope.error.status.as_deref(),
            Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED")
        );

        if rejected_key || unauthenticated {
            ReviewError::Authentication
        } else {
            ReviewError::RemoteService
        }
    }

    fn parse_response(body: &str) -> Result<String, ReviewError> {
        let response: GenerateContentResponse =
            serde_json::from_str(body).map_err(|_| ReviewError::MalformedResponse)?;

        let Some(candidate) = response.candidates.first() else {
            return match response.prompt_feedback.and_then(|f| f.block_reason) {
                Some(_) => Err(ReviewError::Blocked),
                None => Err(ReviewError::MalformedResponse),
            };
        };

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if BLOCKING_FINISH_REASONS.contains(&reason) {
                return Err(ReviewError::Blocked);
            }
        }

        let texts: Vec<&str> = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();

        if texts.is_empty() {
            return Err(ReviewError::MalformedResponse);
        }

        Ok(texts.concat())
    }
}

#[async_trait]
impl ReviewGeneratorService for CodeReviewerGemini {
    async fn generate(&self, prompt: &str) -> Result<String, ReviewError> {
        let body = json!({
            "system_instruction": {
                "parts": [{"text": SYSTEM_INSTRUCTION}],
            },
            "contents": [
                {"role": "user", "parts": [{"text": prompt}]},
            ],
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url(MODEL))
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|_| ReviewError::RemoteService)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|_| ReviewError::RemoteService)?;

        if !status.is_success() {
            return Err(Self::classify_failure(status, &text));
        }

        Self::parse_response(&text)
    }
}
