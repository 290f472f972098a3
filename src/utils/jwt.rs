use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{Claims, User};
use crate::utils::errors::AppError;

pub fn create_token(user: &User, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        iat: now,
        exp: now + jwt_config.access_token_expiry as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or missing token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn test_user() -> User {
        User {
            id: 42,
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config();
        let token = create_token(&test_user(), &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(claims.name, "Jane");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = test_config();
        let mut token = create_token(&test_user(), &config).unwrap();
        token.push('x');

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let token = create_token(&test_user(), &config).unwrap();

        let other = JwtConfig {
            secret: "other-secret".to_string(),
            access_token_expiry: 3600,
        };
        assert!(verify_token(&token, &other).is_err());
    }
}
