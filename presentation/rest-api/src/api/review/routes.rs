use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    payload::{Json, PlainText},
};

use business::domain::review::use_cases::generate::{GenerateReviewParams, GenerateReviewUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::review::dto::GetReviewRequest;
use crate::api::tags::ApiTags;

pub struct ReviewApi {
    generate_use_case: Arc<dyn GenerateReviewUseCase>,
}

impl ReviewApi {
    pub fn new(generate_use_case: Arc<dyn GenerateReviewUseCase>) -> Self {
        Self { generate_use_case }
    }
}

/// Review API
///
/// Endpoints for AI-generated code reviews.
#[OpenApi]
impl ReviewApi {
    /// Review a piece of code
    ///
    /// Sends the submitted code to the reviewer model and returns its
    /// feedback as plain text.
    #[oai(path = "/ai/get-review", method = "post", tag = "ApiTags::Reviews")]
    async fn get_review(&self, body: Json<GetReviewRequest>) -> GetReviewResponse {
        let Some(code) = body.0.code.filter(|code| !code.is_empty()) else {
            return GetReviewResponse::BadRequest(PlainText("Prompt is required".to_string()));
        };

        match self
            .generate_use_case
            .execute(GenerateReviewParams { prompt: code })
            .await
        {
            Ok(review) => GetReviewResponse::Ok(PlainText(review)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    StatusCode::UNPROCESSABLE_ENTITY => GetReviewResponse::Blocked(json),
                    StatusCode::BAD_GATEWAY => GetReviewResponse::BadGateway(json),
                    _ => GetReviewResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetReviewResponse {
    #[oai(status = 200)]
    Ok(PlainText<String>),
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 422)]
    Blocked(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
