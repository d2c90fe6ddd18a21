use agora_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("no handler registered for kind {0:?}")]
    RouteNotFound(String),

    #[error("failed on execution: {reason}")]
    Content { reason: String },

    #[error("msg {index} failed on execution: {reason}")]
    Message { index: usize, reason: String },

    /// Returned by handlers themselves to abort the scope.
    #[error("{0}")]
    Handler(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
