use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::localization::{translate, Lang};
use crate::modules::outreach::application::domain::PLANNER_SYSTEM_PROMPT;
use crate::modules::outreach::application::ports::incoming::use_cases::{
    GeneratePlanError, GeneratePlanUseCase,
};
use crate::modules::outreach::application::ports::outgoing::TextGenerator;

pub struct IdeaPlannerService<G>
where
    G: TextGenerator,
{
    generator: G,
}

impl<G> IdeaPlannerService<G>
where
    G: TextGenerator,
{
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl<G> GeneratePlanUseCase for IdeaPlannerService<G>
where
    G: TextGenerator + Send + Sync,
{
    async fn execute(&self, idea: &str, lang: Lang) -> Result<String, GeneratePlanError> {
        if idea.trim().is_empty() {
            return Err(GeneratePlanError::EmptyIdea(
                translate("generator_error_empty", lang).to_string(),
            ));
        }

        match self.generator.generate(PLANNER_SYSTEM_PROMPT, idea).await {
            Ok(plan) => {
                info!(chars = plan.len(), "project plan generated");
                Ok(plan)
            }
            Err(e) => {
                warn!(error = %e, "project plan generation failed");
                Err(GeneratePlanError::Failed(
                    translate("generator_error_failed", lang).to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::outreach::application::ports::outgoing::GenerationError;

    mockall::mock! {
        pub Generator {}

        #[async_trait]
        impl TextGenerator for Generator {
            async fn generate(
                &self,
                system_prompt: &str,
                input: &str,
            ) -> Result<String, GenerationError>;
        }
    }

    #[tokio::test]
    async fn test_plan_is_returned_verbatim() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt, input| prompt == PLANNER_SYSTEM_PROMPT && input == "A recipe app")
            .returning(|_, _| Ok("## MVP\n- recipes".to_string()));
        let service = IdeaPlannerService::new(generator);

        let plan = service.execute("A recipe app", Lang::En).await.unwrap();

        assert_eq!(plan, "## MVP\n- recipes");
    }

    #[tokio::test]
    async fn test_blank_idea_is_rejected_without_a_call() {
        let mut generator = MockGenerator::new();
        generator.expect_generate().times(0);
        let service = IdeaPlannerService::new(generator);

        let err = service.execute("   ", Lang::De).await.unwrap_err();

        assert_eq!(
            err,
            GeneratePlanError::EmptyIdea("Bitte beschreiben Sie zuerst Ihre Idee.".into())
        );
    }

    #[tokio::test]
    async fn test_failure_maps_to_localized_message() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Err(GenerationError::EmptyReply));
        let service = IdeaPlannerService::new(generator);

        let err = service.execute("idea", Lang::En).await.unwrap_err();

        assert_eq!(
            err,
            GeneratePlanError::Failed("Could not generate a plan, please try again later.".into())
        );
    }
}
