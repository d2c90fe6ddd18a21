//! Payload execution: one scope per payload, all-or-nothing.

use agora_store::KvState;
use agora_types::{Event, ProposalPayload};

use crate::error::ExecError;
use crate::router::Router;
use crate::scope::StateScope;

/// Execute a proposal payload inside a fresh [`StateScope`].
///
/// A content payload dispatches to its single handler. A message-list
/// payload dispatches each message strictly in list order inside the same
/// scope; the first failure halts the remaining messages and surfaces the
/// failing index, and nothing from any message is applied.
///
/// On success every buffered write is merged into `base` and the scope's
/// events are appended to `sink`; on failure the scope is dropped and `base`
/// is left byte-for-byte unchanged.
pub fn execute_payload(
    router: &Router,
    base: &dyn KvState,
    payload: &ProposalPayload,
    sink: &mut Vec<Event>,
) -> Result<(), ExecError> {
    let mut scope = StateScope::new(base);

    match payload {
        ProposalPayload::Content(content) => {
            let handler = router
                .route(&content.kind)
                .ok_or_else(|| ExecError::RouteNotFound(content.kind.clone()))?;
            handler(&mut scope, &content.data).map_err(|err| ExecError::Content {
                reason: err.to_string(),
            })?;
        }
        ProposalPayload::Messages(msgs) => {
            for (index, msg) in msgs.iter().enumerate() {
                let handler = router.route(&msg.kind).ok_or_else(|| ExecError::Message {
                    index,
                    reason: format!("no handler registered for kind {:?}", msg.kind),
                })?;
                handler(&mut scope, &msg.data).map_err(|err| ExecError::Message {
                    index,
                    reason: err.to_string(),
                })?;
            }
        }
    }

    scope.commit(sink)?;
    Ok(())
}
