use axum::Json;

use crate::core::error::Result;
use crate::features::auth::dto::MeResponseDto;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;

/// Get the signed-in user's display data
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Signed-in user", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn get_me(user: AuthenticatedUser) -> Result<Json<ApiResponse<MeResponseDto>>> {
    Ok(Json(ApiResponse::success(Some(user.into()), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::with_test_auth;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_get_me_returns_injected_identity() {
        let app = with_test_auth(Router::new().route("/api/auth/me", get(get_me)));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/auth/me").await;
        response.assert_status_ok();

        let body: ApiResponse<MeResponseDto> = response.json();
        assert!(body.success);
        assert_eq!(body.data.unwrap().sub, "test-staff");
    }

    #[tokio::test]
    async fn test_get_me_requires_identity() {
        let app = Router::new().route("/api/auth/me", get(get_me));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/auth/me").await;
        response.assert_status_unauthorized();
    }
}
