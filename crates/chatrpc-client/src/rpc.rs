//! Typed client for the chat procedures.

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use chatrpc_core::ChatMessage;
use chatrpc_proto::{AddMessageResponse, Envelope, GreetingResponse, Procedure};

use crate::error::ClientError;
use crate::http::{HttpClient, RawResponse};

/// Client for the `/trpc` procedures.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: HttpClient,
}

impl RpcClient {
    /// Create a client for the server rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }

    /// Check if the server is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        self.http.health().await
    }

    /// `greeting` query.
    pub async fn greeting(&self) -> Result<GreetingResponse, ClientError> {
        self.query(Procedure::Greeting, None).await
    }

    /// `getMessages` query. `None` lets the server apply its default limit.
    pub async fn get_messages(&self, limit: Option<i64>) -> Result<Vec<ChatMessage>, ClientError> {
        self.query(Procedure::GetMessages, limit.map(|l| json!(l)))
            .await
    }

    /// `addMessage` mutation.
    pub async fn add_message(
        &self,
        user: &str,
        message: &str,
    ) -> Result<AddMessageResponse, ClientError> {
        self.mutate(
            Procedure::AddMessage,
            json!({ "user": user, "message": message }),
        )
        .await
    }

    async fn query<T: DeserializeOwned>(
        &self,
        procedure: Procedure,
        input: Option<serde_json::Value>,
    ) -> Result<T, ClientError> {
        let query = match input {
            Some(input) => vec![("input", input.to_string())],
            None => Vec::new(),
        };
        debug!(procedure = %procedure, "Calling query");
        let raw = self.http.get(&procedure_path(procedure), &query).await?;
        decode(raw)
    }

    async fn mutate<T: DeserializeOwned>(
        &self,
        procedure: Procedure,
        input: serde_json::Value,
    ) -> Result<T, ClientError> {
        debug!(procedure = %procedure, "Calling mutation");
        let raw = self.http.post_json(&procedure_path(procedure), &input).await?;
        decode(raw)
    }
}

fn procedure_path(procedure: Procedure) -> String {
    format!("/trpc/{}", procedure.name())
}

fn decode<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ClientError> {
    decode_envelope(raw.status, &raw.body)
}

/// Decode a procedure response body into its output or error.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ClientError> {
    match serde_json::from_slice::<Envelope<T>>(body) {
        Ok(envelope) => envelope.into_result().map_err(ClientError::from),
        Err(e) if (200..300).contains(&status) => Err(ClientError::Serialization(e.to_string())),
        Err(_) => Err(ClientError::Serialization(format!(
            "HTTP {}: response is not an RPC envelope",
            status
        ))),
    }
}

#[cfg(test)]
mod tests {
    use chatrpc_proto::{RpcError, RpcErrorCode, SuccessEnvelope, ValidationIssue};

    use super::*;

    #[test]
    fn test_decode_success() {
        let body = serde_json::to_vec(&SuccessEnvelope::new(json!([
            { "id": "1", "user": "A", "message": "hi" }
        ])))
        .unwrap();
        let messages: Vec<ChatMessage> = decode_envelope(200, &body).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id.as_str(), "1");
    }

    #[test]
    fn test_decode_error_envelope() {
        let validation = chatrpc_proto::validate_add_message(Some(&json!({ "user": "A" })))
            .unwrap_err();
        let envelope = RpcError::from(validation)
            .with_path("addMessage")
            .into_envelope();
        let body = serde_json::to_vec(&envelope).unwrap();

        let err = decode_envelope::<AddMessageResponse>(400, &body).unwrap_err();
        match err {
            ClientError::Rpc {
                code,
                message,
                path,
                issues,
            } => {
                assert_eq!(code, RpcErrorCode::BadRequest);
                assert_eq!(message, "message: Required");
                assert_eq!(path.as_deref(), Some("addMessage"));
                assert_eq!(issues, vec![ValidationIssue::field("message", "Required")]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_non_envelope() {
        let err = decode_envelope::<GreetingResponse>(502, b"Bad Gateway").unwrap_err();
        assert!(matches!(err, ClientError::Serialization(msg) if msg.starts_with("HTTP 502")));
    }

    #[test]
    fn test_procedure_path() {
        assert_eq!(procedure_path(Procedure::GetMessages), "/trpc/getMessages");
    }
}
