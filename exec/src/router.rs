//! Type-keyed routing of payload kinds to handlers.

use std::collections::HashMap;

use crate::error::ExecError;
use crate::scope::StateScope;

/// A payload handler: runs inside an isolated scope and either succeeds or
/// aborts the scope with an error.
pub type Handler = Box<dyn Fn(&mut StateScope<'_>, &[u8]) -> Result<(), ExecError> + Send + Sync>;

/// Maps a content or message `kind` to its handler.
///
/// Routes are registered once at startup; dispatch is a closed lookup over
/// the registered set, never open-ended.
#[derive(Default)]
pub struct Router {
    routes: HashMap<String, Handler>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a kind.
    ///
    /// # Panics
    /// Panics if the kind is already registered; duplicate routes are a
    /// startup wiring bug, not a runtime condition.
    pub fn register(
        &mut self,
        kind: impl Into<String>,
        handler: impl Fn(&mut StateScope<'_>, &[u8]) -> Result<(), ExecError> + Send + Sync + 'static,
    ) -> &mut Self {
        let kind = kind.into();
        assert!(
            !self.routes.contains_key(&kind),
            "route {kind:?} registered twice"
        );
        self.routes.insert(kind, Box::new(handler));
        self
    }

    /// Look up the handler for a kind.
    pub fn route(&self, kind: &str) -> Option<&Handler> {
        self.routes.get(kind)
    }

    /// Whether a kind has a registered handler.
    pub fn has_route(&self, kind: &str) -> bool {
        self.routes.contains_key(kind)
    }
}
