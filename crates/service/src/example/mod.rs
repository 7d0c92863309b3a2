//! Record operations: domain types, store abstraction, and the handler set.
//!
//! Every operation is implemented once in [`service::ExampleService`]; transports only
//! decode input, call it, and encode the result.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;

pub use errors::{ErrorCode, ExampleError, LengthViolation};
pub use repository::{ExampleRepository, SeaOrmExampleRepository};
pub use service::ExampleService;
