//! Procedure call handlers.
//!
//! Queries are served over `GET /trpc/:procedure?input=<json>`, mutations
//! over `POST /trpc/:procedure` with the JSON input as the body.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::{debug, warn};

use chatrpc_proto::{Procedure, ProcedureKind, RpcError, SuccessEnvelope};

use crate::http::responses::{RpcFailure, RpcQuery};
use crate::metrics::Outcome;
use crate::service::ChatService;
use crate::state::AppState;

type RpcResult = Result<Json<SuccessEnvelope<Value>>, RpcFailure>;

/// Query endpoint.
///
/// A query string that does not decode is reported as a parse error, but
/// only once the procedure itself has resolved.
pub async fn rpc_query(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: Result<Query<RpcQuery>, QueryRejection>,
) -> RpcResult {
    let procedure = resolve(&name, ProcedureKind::Query)?;
    let input = query
        .map_err(|rejection| RpcError::parse_error(rejection.body_text()))
        .and_then(|Query(query)| {
            query
                .input
                .as_deref()
                .map(|raw| serde_json::from_str::<Value>(raw))
                .transpose()
                .map_err(RpcError::parse_error)
        });
    execute(&state, procedure, input)
}

/// Mutation endpoint. An empty body means no input.
pub async fn rpc_mutation(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Bytes,
) -> RpcResult {
    let procedure = resolve(&name, ProcedureKind::Mutation)?;
    let input = if body.iter().all(u8::is_ascii_whitespace) {
        Ok(None)
    } else {
        serde_json::from_slice::<Value>(&body)
            .map(Some)
            .map_err(RpcError::parse_error)
    };
    execute(&state, procedure, input)
}

/// Look up a procedure and check it is served by this HTTP method.
fn resolve(name: &str, kind: ProcedureKind) -> Result<Procedure, RpcFailure> {
    let procedure = name.parse::<Procedure>().map_err(|e| {
        warn!(procedure = %name, "Unknown procedure");
        RpcError::from(e)
    })?;

    if procedure.kind() != kind {
        warn!(procedure = %procedure, called_as = %kind, "Procedure called with wrong method");
        return Err(RpcError::method_not_supported(procedure).into());
    }

    Ok(procedure)
}

fn execute(
    state: &Arc<AppState>,
    procedure: Procedure,
    input: Result<Option<Value>, RpcError>,
) -> RpcResult {
    let result = input.and_then(|input| {
        ChatService::new(state.clone()).call(procedure, input.as_ref())
    });

    match result {
        Ok(data) => {
            debug!(procedure = %procedure, "Procedure call succeeded");
            state.metrics.record(procedure, Outcome::Ok);
            Ok(Json(SuccessEnvelope::new(data)))
        }
        Err(err) => {
            let err = err.with_path(procedure.name());
            warn!(procedure = %procedure, code = ?err.code, error = %err, "Procedure call rejected");
            state.metrics.record(procedure, Outcome::Error);
            Err(err.into())
        }
    }
}
