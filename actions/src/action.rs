//! Tagged deferred actions and their byte encoding.

use serde::{Deserialize, Serialize};

use agora_types::Address;

use crate::error::ActionError;

/// Request to release a jailed validator, queued until the next block
/// boundary. The address is kept raw and validated at execution time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnjailRequest {
    pub validator_addr: String,
}

/// An infraction recorded for deferred punishment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashEvent {
    pub validator: Address,
    /// Slash fraction recorded at detection time (basis points).
    pub fraction_bps: u32,
}

/// A queued action, dispatched by tag to its own handler.
///
/// Stored in the FIFO as opaque bytes; the queue owns an action exclusively
/// until it is executed, at which point it is deleted regardless of outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredAction {
    Unjail(UnjailRequest),
    Slash(SlashEvent),
}

impl DeferredAction {
    /// Short tag for logging.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Unjail(_) => "unjail",
            Self::Slash(_) => "slash",
        }
    }

    /// Encode for FIFO storage (bincode).
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).expect("deferred action serialization should not fail")
    }

    /// Decode a stored action.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ActionError> {
        bincode::deserialize(bytes).map_err(|e| ActionError::Decode(e.to_string()))
    }
}
