//! Session verification for protected operations.
//!
//! Tokens are HS256 JWTs; a request either carries a valid one or has no session.

pub mod domain;
pub mod errors;
pub mod tokens;

pub use domain::Session;
pub use tokens::SessionKeys;
