use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::auth::application::ports::outgoing::token_provider::{
    IssuedToken, SessionClaims, TokenError, TokenProvider,
};

use super::session_token_config::SessionTokenConfig;

/// Allowed clock skew for tokens stamped slightly ahead of our clock.
const MAX_FUTURE_SKEW_SECONDS: i64 = 30;

/// HS256 bearer tokens for the admin session.
///
/// A token is valid while `now - iat < ttl`. The check is done here rather
/// than through the library's `exp` handling so it can be driven by an
/// explicit clock in tests.
#[derive(Clone)]
pub struct SessionTokenService {
    config: SessionTokenConfig,
    admin_username: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for SessionTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("issuer", &self.config.issuer)
            .field("ttl_seconds", &self.config.ttl_seconds)
            .finish()
    }
}

impl SessionTokenService {
    pub fn new(config: SessionTokenConfig, admin_username: impl Into<String>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            admin_username: admin_username.into(),
            encoding_key,
            decoding_key,
        }
    }

    pub fn issue_token_at(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let expires_at = now + Duration::seconds(self.config.ttl_seconds);
        let claims = SessionClaims {
            sub: subject.to_string(),
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    pub fn verify_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "iat"]);
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let claims = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?
            .claims;

        if claims.sub != self.admin_username {
            return Err(TokenError::WrongSubject);
        }

        let age = now.timestamp() - claims.iat;
        if age < -MAX_FUTURE_SKEW_SECONDS {
            return Err(TokenError::IssuedInFuture);
        }
        if age >= self.config.ttl_seconds {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl TokenProvider for SessionTokenService {
    fn issue_token(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        self.issue_token_at(subject, Utc::now())
    }

    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.verify_token_at(token, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config() -> SessionTokenConfig {
        SessionTokenConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "portfolio-cms".to_string(),
            ttl_seconds: 86_400,
        }
    }

    fn service() -> SessionTokenService {
        SessionTokenService::new(config(), "admin")
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let service = service();
        let issued = service.issue_token_at("admin", t0()).unwrap();

        let claims = service.verify_token_at(&issued.token, t0()).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iat, t0().timestamp());
        assert_eq!(issued.expires_at, t0() + Duration::hours(24));
    }

    #[test]
    fn test_token_valid_until_just_before_24h() {
        let service = service();
        let issued = service.issue_token_at("admin", t0()).unwrap();

        let almost = t0() + Duration::hours(24) - Duration::seconds(1);
        assert!(service.verify_token_at(&issued.token, almost).is_ok());

        let exactly = t0() + Duration::hours(24);
        assert_eq!(
            service.verify_token_at(&issued.token, exactly),
            Err(TokenError::Expired)
        );

        let later = t0() + Duration::hours(25);
        assert_eq!(
            service.verify_token_at(&issued.token, later),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_token_from_the_future_is_rejected() {
        let service = service();
        let issued = service
            .issue_token_at("admin", t0() + Duration::minutes(5))
            .unwrap();

        assert_eq!(
            service.verify_token_at(&issued.token, t0()),
            Err(TokenError::IssuedInFuture)
        );
    }

    #[test]
    fn test_other_subject_is_rejected() {
        let service = service();
        let issued = service.issue_token_at("mallory", t0()).unwrap();

        assert_eq!(
            service.verify_token_at(&issued.token, t0()),
            Err(TokenError::WrongSubject)
        );
    }

    #[test]
    fn test_token_signed_with_other_key_is_rejected() {
        let other = SessionTokenService::new(
            SessionTokenConfig {
                secret_key: "another_secret_key_that_is_long_enough".to_string(),
                ..config()
            },
            "admin",
        );
        let issued = other.issue_token_at("admin", t0()).unwrap();

        assert_eq!(
            service().verify_token_at(&issued.token, t0()),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(
            service().verify_token_at("not.a.token", t0()),
            Err(TokenError::Malformed)
        );
    }
}
