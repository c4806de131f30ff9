//! ChatService implementation - the three chat procedures over the store.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use chatrpc_core::ChatMessage;
use chatrpc_proto::{
    validate_add_message, validate_get_messages, AddMessageInput, AddMessageResponse,
    GetMessagesInput, GreetingResponse, Procedure, RpcError, RpcErrorCode, GREETING,
};

use crate::state::AppState;

/// Procedure implementations bound to shared state.
#[derive(Clone)]
pub struct ChatService {
    state: Arc<AppState>,
}

impl ChatService {
    /// Create a new ChatService.
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Static greeting. Never touches the store.
    pub fn greeting(&self) -> GreetingResponse {
        GreetingResponse::default()
    }

    /// Trailing window of the history, oldest first.
    pub fn get_messages(&self, input: GetMessagesInput) -> Vec<ChatMessage> {
        let messages = self.state.store.tail(input.limit);
        debug!(limit = input.limit, returned = messages.len(), "Listing messages");
        messages
    }

    /// Append a message and echo the accepted payload.
    pub fn add_message(&self, input: AddMessageInput) -> AddMessageResponse {
        let stored = self.state.store.append(&input.user, &input.message);
        info!(
            message_id = %stored.id,
            user = %stored.user,
            "Message added"
        );
        input.into()
    }

    /// Validate raw input for `procedure` and invoke it.
    ///
    /// Input is validated before the store is touched, so a rejected call
    /// leaves no trace.
    pub fn call(&self, procedure: Procedure, input: Option<&Value>) -> Result<Value, RpcError> {
        self.dispatch(procedure, input)
            .map_err(|e| e.with_path(procedure.name()))
    }

    fn dispatch(&self, procedure: Procedure, input: Option<&Value>) -> Result<Value, RpcError> {
        match procedure {
            Procedure::Hello => to_output(GREETING),
            Procedure::Greeting => to_output(self.greeting()),
            Procedure::GetMessages => {
                let input = validate_get_messages(input)?;
                to_output(self.get_messages(input))
            }
            Procedure::AddMessage => {
                let input = validate_add_message(input)?;
                to_output(self.add_message(input))
            }
        }
    }
}

fn to_output<T: Serialize>(value: T) -> Result<Value, RpcError> {
    serde_json::to_value(value)
        .map_err(|e| RpcError::new(RpcErrorCode::InternalServerError, e.to_string()))
}
