//! HS256 access-token verification.

use domains::{AccessTokenVerifier, DomainError, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Claims carried by an access token. `id` is the user id used as owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub id: String,
    pub exp: usize,
}

pub struct JwtAccessTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtAccessTokenVerifier {
    pub fn new(secret: &SecretString) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl AccessTokenVerifier for JwtAccessTokenVerifier {
    fn verify(&self, token: &str) -> Result<String> {
        let data = decode::<AccessClaims>(token, &self.key, &self.validation).map_err(|e| {
            debug!(error = %e, "rejected access token");
            DomainError::Authentication("access token tidak valid".to_string())
        })?;
        Ok(data.claims.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "unit-test-access-key";

    fn token(secret: &str, id: &str, ttl: Duration) -> String {
        let claims = AccessClaims {
            id: id.to_string(),
            exp: (Utc::now() + ttl).timestamp() as usize,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    fn verifier() -> JwtAccessTokenVerifier {
        JwtAccessTokenVerifier::new(&SecretString::from(SECRET.to_string()))
    }

    #[test]
    fn valid_token_yields_user_id() {
        let user = verifier().verify(&token(SECRET, "user-123", Duration::hours(1))).unwrap();
        assert_eq!(user, "user-123");
    }

    #[test]
    fn token_signed_with_other_key_is_rejected() {
        let err = verifier()
            .verify(&token("another-key", "user-123", Duration::hours(1)))
            .unwrap_err();
        assert!(matches!(err, DomainError::Authentication(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let err = verifier()
            .verify(&token(SECRET, "user-123", Duration::hours(-2)))
            .unwrap_err();
        assert!(matches!(err, DomainError::Authentication(_)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verifier().verify("not-a-jwt").is_err());
    }
}
