pub mod routes;
pub mod startup;
pub mod rpc;
pub mod errors;
pub mod openapi;

pub use startup::{run, build_app};
