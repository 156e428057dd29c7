use actix_web::{post, web, Responder};
use email_address::EmailAddress;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::{IdentityError, SignedIn};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin sign-in form
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "correct-horse-battery-staple")]
    pub password: String,
}

impl LoginRequestDto {
    fn validate(&self) -> Result<(), &'static str> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email cannot be empty");
        }
        if !EmailAddress::is_valid(email) {
            return Err("Invalid email format");
        }
        if self.password.is_empty() {
            return Err("Password cannot be empty");
        }
        Ok(())
    }
}

/// Admin sign-in
///
/// Exchanges the admin email and password for a bearer access token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<SignedIn>)),
        (status = 400, description = "Malformed form", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    if let Err(msg) = dto.validate() {
        return ApiResponse::bad_request("VALIDATION_ERROR", msg);
    }

    info!(email = %dto.email, "Admin sign-in attempt");

    match data.identity.sign_in(dto.email.trim(), &dto.password).await {
        Ok(signed_in) => ApiResponse::success(signed_in),
        Err(IdentityError::InvalidCredentials) => {
            warn!("Admin sign-in failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(e) => {
            error!(error = %e, "Admin sign-in failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{test_identity, TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD};
    use actix_web::{test, App};

    async fn post_login(body: serde_json::Value) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_identity(test_identity())
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_login_success() {
        let (status, body) = post_login(serde_json::json!({
            "email": TEST_ADMIN_EMAIL,
            "password": TEST_ADMIN_PASSWORD
        }))
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert!(body["data"]["accessToken"].as_str().unwrap().len() > 20);
        assert_eq!(body["data"]["session"]["email"], TEST_ADMIN_EMAIL);
    }

    #[actix_web::test]
    async fn test_login_wrong_password() {
        let (status, body) = post_login(serde_json::json!({
            "email": TEST_ADMIN_EMAIL,
            "password": "wrong"
        }))
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_invalid_email_format() {
        let (status, body) = post_login(serde_json::json!({
            "email": "not-an-email",
            "password": "whatever"
        }))
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_login_empty_password() {
        let (status, _) = post_login(serde_json::json!({
            "email": TEST_ADMIN_EMAIL,
            "password": ""
        }))
        .await;

        assert_eq!(status, 400);
    }
}
