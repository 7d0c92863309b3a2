use serde::{Deserialize, Serialize};

/// Persisted record, exactly as the store returns it.
pub type Record = models::example::Model;

/// Returned by both secret operations.
pub const SECRET_MESSAGE: &str = "you can now see this secret message!";

pub const ID_MIN_LEN: usize = 3;
pub const ID_MAX_LEN: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub greeting: String,
}

/// `{ status, message, data }` wrapper around the record list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllEnvelope {
    pub status: u16,
    pub message: String,
    pub data: Vec<Record>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushedId {
    pub id: String,
}

/// `{ code: "OK", message: "success", data: { id } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushOutput {
    pub code: String,
    pub message: String,
    pub data: PushedId,
}

impl PushOutput {
    pub fn ok(id: String) -> Self {
        Self { code: "OK".into(), message: "success".into(), data: PushedId { id } }
    }
}
