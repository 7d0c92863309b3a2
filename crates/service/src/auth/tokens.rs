use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use tracing::{debug, warn};

use super::domain::{Claims, Session};
use super::errors::AuthError;

/// HS256 signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys").finish_non_exhaustive()
    }
}

impl SessionKeys {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a token for `subject` valid for `ttl`.
    ///
    /// # Examples
    /// ```
    /// use service::auth::SessionKeys;
    /// let keys = SessionKeys::new("secret");
    /// let token = keys.issue("alice", chrono::Duration::hours(1)).unwrap();
    /// assert_eq!(keys.verify(&token).unwrap().subject, "alice");
    /// ```
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims { sub: subject.to_string(), exp: (now + ttl).timestamp(), iat: now.timestamp() };
        encode(&JwtHeader::default(), &claims, &self.encoding).map_err(|e| AuthError::TokenError(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Session, AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::MissingToken);
        }
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| Session::from(data.claims))
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Resolve an optional raw token into an optional session. Bad tokens are logged
    /// and treated as absent; only protected operations turn that into a rejection.
    pub fn session_for(&self, token: Option<&str>) -> Option<Session> {
        let token = token?;
        match self.verify(token) {
            Ok(session) => {
                debug!(subject = %session.subject, "session verified");
                Some(session)
            }
            Err(e) => {
                warn!(err = %e, "token validation failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let keys = SessionKeys::new("test-secret");
        let token = keys.issue("bob", Duration::minutes(5)).unwrap();
        let session = keys.verify(&token).unwrap();
        assert_eq!(session.subject, "bob");
        assert!(session.expires_at > Utc::now().timestamp());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = SessionKeys::new("one").issue("bob", Duration::minutes(5)).unwrap();
        assert!(matches!(SessionKeys::new("two").verify(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = SessionKeys::new("test-secret");
        // well past the default 60s leeway
        let token = keys.issue("bob", Duration::hours(-2)).unwrap();
        assert!(matches!(keys.verify(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn garbage_and_empty_tokens() {
        let keys = SessionKeys::new("test-secret");
        assert!(matches!(keys.verify(""), Err(AuthError::MissingToken)));
        assert!(matches!(keys.verify("not.a.jwt"), Err(AuthError::InvalidToken(_))));
        assert!(keys.session_for(Some("not.a.jwt")).is_none());
        assert!(keys.session_for(None).is_none());
    }
}
