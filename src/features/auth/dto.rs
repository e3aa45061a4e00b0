use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::auth::model::AuthenticatedUser;

/// Response DTO for the signed-in user's display data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeResponseDto {
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

impl From<AuthenticatedUser> for MeResponseDto {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            sub: user.sub,
            name: user.name,
            email: user.email,
            picture: user.picture,
        }
    }
}
