use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::localization::Lang;
use crate::modules::outreach::application::ports::incoming::use_cases::GeneratePlanError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct IdeaRequestDto {
    #[schema(example = "A marketplace for second-hand bikes")]
    pub idea: String,
    /// Language of the error messages. Defaults to the site language.
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PlanBody {
    /// Markdown, as returned by the generator.
    pub plan: String,
}

/// Turn a project idea into a first plan
#[utoipa::path(
    post,
    path = "/api/public/ideas",
    tag = "public",
    request_body = IdeaRequestDto,
    responses(
        (status = 200, description = "Generated plan", body = inline(SuccessResponse<PlanBody>)),
        (status = 400, description = "Empty idea", body = ErrorResponse),
        (status = 502, description = "Generator failed", body = ErrorResponse),
    )
)]
#[post("/api/public/ideas")]
pub async fn ideas_handler(
    body: web::Json<IdeaRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let requested = body.lang.as_deref().and_then(Lang::parse);
    let lang = data.public_site.active_lang(requested).await;

    match data.outreach.ideas.execute(&body.idea, lang).await {
        Ok(plan) => ApiResponse::success(PlanBody { plan }),
        Err(GeneratePlanError::EmptyIdea(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(GeneratePlanError::Failed(msg)) => ApiResponse::bad_gateway("GENERATION_FAILED", &msg),
    }
}
