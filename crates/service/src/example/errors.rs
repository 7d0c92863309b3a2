use serde::Serialize;
use thiserror::Error;

/// Which bound an id broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthViolation {
    TooShort,
    TooLong,
}

impl std::fmt::Display for LengthViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthViolation::TooShort => write!(f, "id must be 3 or more characters of length"),
            LengthViolation::TooLong => write!(f, "id must not be more than 5 characters of length"),
        }
    }
}

/// Business errors for the record operations. `kind()` is the stable discriminant
/// exposed to callers next to the code and message.
#[derive(Debug, Error)]
pub enum ExampleError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    InvalidLength(LengthViolation),
    #[error("id already exist")]
    AlreadyExists,
    #[error("unauthorized")]
    Unauthorized,
    #[error("store error: {0}")]
    Store(String),
}

/// Transport-neutral error code; each transport maps it onto its own status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadRequest,
    Conflict,
    Unauthorized,
    InternalServerError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::BadRequest => 400,
            ErrorCode::Conflict => 409,
            ErrorCode::Unauthorized => 401,
            ErrorCode::InternalServerError => 500,
        }
    }
}

impl ExampleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExampleError::InvalidInput(_) | ExampleError::AlreadyExists => ErrorCode::BadRequest,
            ExampleError::InvalidLength(_) => ErrorCode::Conflict,
            ExampleError::Unauthorized => ErrorCode::Unauthorized,
            ExampleError::Store(_) => ErrorCode::InternalServerError,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ExampleError::InvalidInput(_) => "invalid_input",
            ExampleError::InvalidLength(_) => "invalid_length",
            ExampleError::AlreadyExists => "already_exists",
            ExampleError::Unauthorized => "unauthorized",
            ExampleError::Store(_) => "store",
        }
    }

    /// Message shown to callers. Store details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ExampleError::Store(_) => "internal server error".to_string(),
            ExampleError::InvalidInput(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_router_mapping() {
        assert_eq!(ExampleError::AlreadyExists.code(), ErrorCode::BadRequest);
        assert_eq!(ExampleError::InvalidInput("x".into()).code(), ErrorCode::BadRequest);
        assert_eq!(ExampleError::InvalidLength(LengthViolation::TooShort).code(), ErrorCode::Conflict);
        assert_eq!(ExampleError::Unauthorized.code(), ErrorCode::Unauthorized);
        assert_eq!(ExampleError::Store("boom".into()).code().http_status(), 500);
    }

    #[test]
    fn length_messages() {
        assert_eq!(
            ExampleError::InvalidLength(LengthViolation::TooShort).to_string(),
            "id must be 3 or more characters of length"
        );
        assert_eq!(
            ExampleError::InvalidLength(LengthViolation::TooLong).to_string(),
            "id must not be more than 5 characters of length"
        );
        assert_eq!(ExampleError::AlreadyExists.to_string(), "id already exist");
    }

    #[test]
    fn store_details_are_not_public() {
        let e = ExampleError::Store("connection refused at 10.0.0.3".into());
        assert_eq!(e.public_message(), "internal server error");
        assert_eq!(e.kind(), "store");
    }

    #[test]
    fn code_serializes_screaming_snake() {
        assert_eq!(serde_json::to_value(ErrorCode::BadRequest).unwrap(), "BAD_REQUEST");
        assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
    }
}
