use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::services::ReviewGeneratorService;
use crate::domain::review::use_cases::generate::{GenerateReviewParams, GenerateReviewUseCase};

pub struct GenerateReviewUseCaseImpl {
    pub generator: Arc<dyn ReviewGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateReviewUseCase for GenerateReviewUseCaseImpl {
    async fn execute(&self, params: GenerateReviewParams) -> Result<String, ReviewError> {
        self.logger.info(&format!(
            "Generating review for prompt of {} characters",
            params.prompt.chars().count()
        ));

        match self.generator.generate(&params.prompt).await {
            Ok(review) => {
                self.logger.info(&format!(
                    "Generated review of {} characters",
                    review.chars().count()
                ));
                Ok(review)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Review generation failed: {}", err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub ReviewGenerator {}

        #[async_trait]
        impl ReviewGeneratorService for ReviewGenerator {
            async fn generate(&self, prompt: &str) -> Result<String, ReviewError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_review_from_generator() {
        let mut mock_generator = MockReviewGenerator::new();
        mock_generator
            .expect_generate()
            .withf(|prompt| prompt.to_string() == "function add(a,b){return a+b}".to_string())
            .times(1)
            .returning(|_| Ok("Looks correct; consider adding input validation.".to_string()));

        let use_case = GenerateReviewUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateReviewParams {
                prompt: "function add(a,b){return a+b}".to_string(),
            })
            .await;

        assert_eq!(
            result.unwrap(),
            "Looks correct; consider adding input validation."
        );
    }

    #[tokio::test]
    async fn should_forward_empty_prompt_without_validation() {
        let mut mock_generator = MockReviewGenerator::new();
        mock_generator
            .expect_generate()
            .withf(|prompt| prompt.is_empty())
            .times(1)
            .returning(|_| Err(ReviewError::RemoteService));

        let use_case = GenerateReviewUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateReviewParams {
                prompt: String::new(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReviewError::RemoteService));
    }

    #[tokio::test]
    async fn should_propagate_authentication_error_unchanged() {
        let mut mock_generator = MockReviewGenerator::new();
        mock_generator
            .expect_generate()
            .returning(|_| Err(ReviewError::Authentication));

        let use_case = GenerateReviewUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateReviewParams {
                prompt: "fn main() {}".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReviewError::Authentication));
    }

    #[tokio::test]
    async fn should_log_error_when_generation_fails() {
        let mut mock_generator = MockReviewGenerator::new();
        mock_generator
            .expect_generate()
            .returning(|_| Err(ReviewError::MalformedResponse));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("review.malformed_response"))
            .times(1)
            .returning(|_| ());

        let use_case = GenerateReviewUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(GenerateReviewParams {
                prompt: "SELECT * FROM users".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ReviewError::MalformedResponse
        ));
    }

    proptest! {
        #[test]
        fn should_return_generator_text_for_any_prompt(prompt in ".*") {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            let mut mock_generator = MockReviewGenerator::new();
            mock_generator
                .expect_generate()
                .returning(|p| Ok(format!("review of: {}", p)));

            let use_case = GenerateReviewUseCaseImpl {
                generator: Arc::new(mock_generator),
                logger: mock_logger(),
            };

            let result = runtime.block_on(use_case.execute(GenerateReviewParams {
                prompt: prompt.clone(),
            }));

            prop_assert_eq!(result.unwrap(), format!("review of: {}", prompt));
        }
    }
}
