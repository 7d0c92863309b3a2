//! Service layer: the record store abstraction and the request handlers built on it.
//! - `example` holds the record operations, written once and shared by every transport.
//! - `auth` turns bearer tokens into sessions for protected operations.

pub mod errors;
pub mod auth;
pub mod example;
#[cfg(test)]
pub mod test_support;
