use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;

/// Token claims issued by the identity provider
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub exp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Validates HS256 bearer tokens against the configured secret, issuer and
/// audience.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.leeway = config.jwt_leeway.as_secs();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        let claims = token_data.claims;
        Ok(AuthenticatedUser {
            sub: claims.sub,
            name: claims.name,
            email: claims.email,
            picture: claims.picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            issuer: "https://auth.test".to_string(),
            audience: "urban-glow".to_string(),
            jwt_leeway: Duration::from_secs(0),
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn valid_claims() -> Claims {
        Claims {
            sub: "staff-1".to_string(),
            iss: "https://auth.test".to_string(),
            aud: "urban-glow".to_string(),
            exp: now_secs() + 3600,
            name: Some("Laura Gómez".to_string()),
            email: Some("laura@urbanglow.co".to_string()),
            picture: None,
        }
    }

    #[test]
    fn test_accepts_valid_token() {
        let validator = JwtValidator::new(&test_config());
        let token = sign(&valid_claims(), "test-secret");

        let user = validator.validate_token(&token).unwrap();
        assert_eq!(user.sub, "staff-1");
        assert_eq!(user.name.as_deref(), Some("Laura Gómez"));
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let validator = JwtValidator::new(&test_config());
        let token = sign(&valid_claims(), "other-secret");

        assert!(matches!(
            validator.validate_token(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_audience() {
        let validator = JwtValidator::new(&test_config());
        let mut claims = valid_claims();
        claims.aud = "another-app".to_string();
        let token = sign(&claims, "test-secret");

        assert!(validator.validate_token(&token).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let validator = JwtValidator::new(&test_config());
        let mut claims = valid_claims();
        claims.exp = now_secs() - 120;
        let token = sign(&claims, "test-secret");

        assert!(validator.validate_token(&token).is_err());
    }
}
