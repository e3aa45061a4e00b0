use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Verified identity of the signed-in staff member, inserted into request
/// extensions by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Subject claim of the token
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Avatar URL supplied by the identity provider
    pub picture: Option<String>,
}
