//! Typed RPC surface.
//!
//! A call arrives as `{ "method": <procedure>, "params": <input> }`. The method name
//! selects a [`Procedure`], whose payload is decoded into that procedure's input type
//! before anything runs; the handler is then the same `ExampleService` call the REST
//! routes use.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use service::auth::Session;
use service::example::domain::{AllEnvelope, Greeting, HelloInput, PushInput, PushOutput, Record};
use service::example::{ExampleError, ExampleRepository, ExampleService};

#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Serialize)]
pub struct RpcSuccess {
    pub result: RpcOutput,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RpcOutput {
    Greeting(Greeting),
    Records(Vec<Record>),
    Envelope(AllEnvelope),
    Message(&'static str),
    Pushed(PushOutput),
}

#[derive(Debug, Clone)]
pub enum Procedure {
    Hello(HelloInput),
    HelloApi(HelloInput),
    GetAll,
    GetAllApi,
    GetAllEnveloped,
    GetSecretMessage,
    GetSecretMessageApi,
    PushExample(PushInput),
}

impl Procedure {
    pub const NAMES: [&'static str; 8] = [
        "example.hello",
        "example.helloApi",
        "example.getAll",
        "example.getAllApi",
        "example.getAllAPI",
        "example.getSecretMessage",
        "example.getSecretMessageApi",
        "example.pushExampleAPI",
    ];

    /// Decode a method name and its params into a typed procedure.
    pub fn parse(method: &str, params: Value) -> Result<Self, ExampleError> {
        match method {
            "example.hello" => Ok(Procedure::Hello(input(params)?)),
            "example.helloApi" => Ok(Procedure::HelloApi(input(params)?)),
            "example.getAll" => Ok(Procedure::GetAll),
            "example.getAllApi" => Ok(Procedure::GetAllApi),
            "example.getAllAPI" => void_input(params).map(|_| Procedure::GetAllEnveloped),
            "example.getSecretMessage" => Ok(Procedure::GetSecretMessage),
            "example.getSecretMessageApi" => void_input(params).map(|_| Procedure::GetSecretMessageApi),
            "example.pushExampleAPI" => Ok(Procedure::PushExample(input(params)?)),
            other => Err(ExampleError::InvalidInput(format!("unknown procedure: {other}"))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Procedure::Hello(_) => "example.hello",
            Procedure::HelloApi(_) => "example.helloApi",
            Procedure::GetAll => "example.getAll",
            Procedure::GetAllApi => "example.getAllApi",
            Procedure::GetAllEnveloped => "example.getAllAPI",
            Procedure::GetSecretMessage => "example.getSecretMessage",
            Procedure::GetSecretMessageApi => "example.getSecretMessageApi",
            Procedure::PushExample(_) => "example.pushExampleAPI",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Procedure::GetSecretMessage)
    }
}

fn input<T: DeserializeOwned>(params: Value) -> Result<T, ExampleError> {
    serde_json::from_value(params).map_err(|e| ExampleError::InvalidInput(format!("invalid params: {e}")))
}

// Procedures declared with a void input accept nothing but an absent/null payload.
fn void_input(params: Value) -> Result<(), ExampleError> {
    if params.is_null() {
        Ok(())
    } else {
        Err(ExampleError::InvalidInput("invalid params: procedure takes no input".into()))
    }
}

/// Run a decoded procedure.
pub async fn dispatch(
    svc: &ExampleService<dyn ExampleRepository>,
    session: Option<&Session>,
    procedure: Procedure,
) -> Result<RpcOutput, ExampleError> {
    let out = match procedure {
        Procedure::Hello(i) | Procedure::HelloApi(i) => RpcOutput::Greeting(svc.greet(i)),
        Procedure::GetAll | Procedure::GetAllApi => RpcOutput::Records(svc.list_all().await?),
        Procedure::GetAllEnveloped => RpcOutput::Envelope(svc.list_all_enveloped().await?),
        Procedure::GetSecretMessage => RpcOutput::Message(svc.get_secret(session)?),
        Procedure::GetSecretMessageApi => RpcOutput::Message(svc.get_secret_public()),
        Procedure::PushExample(i) => RpcOutput::Pushed(svc.create_record(i).await?),
    };
    Ok(out)
}
