use axum::{extract::{rejection::JsonRejection, State}, Json};
use tracing::{debug, instrument};

use service::example::ExampleError;

use crate::errors::{invalid_input, RpcFault};
use crate::routes::auth::{MaybeSession, ServerState};
use crate::rpc::{self, Procedure, RpcRequest, RpcSuccess};

/// `POST /rpc`: decode the envelope, resolve the procedure, run it.
#[instrument(skip_all)]
pub async fn call(
    State(state): State<ServerState>,
    MaybeSession(session): MaybeSession,
    payload: Result<Json<RpcRequest>, JsonRejection>,
) -> Result<Json<RpcSuccess>, RpcFault> {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(r) => {
            common::metrics::record_rpc_call("unknown", "error");
            return Err(invalid_input(r).into());
        }
    };

    let procedure = match Procedure::parse(&req.method, req.params) {
        Ok(p) => p,
        Err(e) => {
            let label = if Procedure::NAMES.contains(&req.method.as_str()) { req.method.as_str() } else { "unknown" };
            common::metrics::record_rpc_call(label, "error");
            return Err(e.into());
        }
    };
    let name = procedure.name();
    debug!(procedure = name, has_session = session.is_some(), "rpc call");

    if procedure.is_protected() && session.is_none() {
        common::metrics::record_rpc_call(name, "error");
        return Err(ExampleError::Unauthorized.into());
    }

    match rpc::dispatch(&state.examples, session.as_ref(), procedure).await {
        Ok(result) => {
            common::metrics::record_rpc_call(name, "ok");
            Ok(Json(RpcSuccess { result }))
        }
        Err(e) => {
            common::metrics::record_rpc_call(name, "error");
            Err(e.into())
        }
    }
}
