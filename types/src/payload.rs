//! Proposal payloads: what a passed proposal executes.
//!
//! A payload is either a single content object or an ordered list of
//! messages. Both carry a `kind` routing key resolved to a handler by the
//! executor's router; the core never interprets the opaque `data` bytes.

use serde::{Deserialize, Serialize};

/// A single executable content object (e.g. a parameter change).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Routing key resolved to a handler.
    pub kind: String,
    pub title: String,
    pub description: String,
    /// Opaque bytes interpreted by the handler.
    pub data: Vec<u8>,
}

/// One message of a message-list payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Msg {
    /// Routing key resolved to a handler.
    pub kind: String,
    /// Opaque bytes interpreted by the handler.
    pub data: Vec<u8>,
}

/// What a proposal executes when it passes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalPayload {
    /// A single content object dispatched to one handler.
    Content(Content),
    /// An ordered message list; execution halts at the first failure.
    Messages(Vec<Msg>),
}

impl ProposalPayload {
    /// Title for logging. Message-list payloads have none.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Content(c) => Some(&c.title),
            Self::Messages(_) => None,
        }
    }
}
