use serde::{Deserialize, Serialize};

/// JWT claims issued and accepted by this service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
}

/// Verified caller identity attached to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub subject: String,
    pub expires_at: i64,
}

impl From<Claims> for Session {
    fn from(c: Claims) -> Self {
        Self { subject: c.sub, expires_at: c.exp }
    }
}
