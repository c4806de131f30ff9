//! Procedure catalogue.

use std::fmt;
use std::str::FromStr;

use chatrpc_core::CoreError;
use serde::{Deserialize, Serialize};

/// Whether a procedure reads or mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureKind {
    /// Read-only, served over GET.
    Query,
    /// Mutating, served over POST.
    Mutation,
}

impl fmt::Display for ProcedureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Mutation => write!(f, "mutation"),
        }
    }
}

/// Every externally callable procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    /// Legacy greeting that returns the bare string.
    Hello,
    /// Static greeting object.
    Greeting,
    /// Trailing slice of the message history.
    GetMessages,
    /// Append a message.
    AddMessage,
}

impl Procedure {
    /// All procedures, in registration order.
    pub const ALL: [Procedure; 4] = [
        Procedure::Hello,
        Procedure::Greeting,
        Procedure::GetMessages,
        Procedure::AddMessage,
    ];

    /// Wire name used in the URL path.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Greeting => "greeting",
            Self::GetMessages => "getMessages",
            Self::AddMessage => "addMessage",
        }
    }

    /// Query or mutation.
    pub fn kind(&self) -> ProcedureKind {
        match self {
            Self::Hello | Self::Greeting | Self::GetMessages => ProcedureKind::Query,
            Self::AddMessage => ProcedureKind::Mutation,
        }
    }

    /// Returns true if calling this procedure changes server state.
    pub fn is_mutation(&self) -> bool {
        self.kind() == ProcedureKind::Mutation
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Procedure {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| CoreError::UnknownProcedure(s.to_string()))
    }
}
