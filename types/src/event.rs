//! Structured events emitted by the governance core.

use serde::{Deserialize, Serialize};

/// A structured event: a kind tag plus ordered key/value attributes.
///
/// Events are appended to the block event log in emission order; the order
/// is part of consensus and must be identical across re-executions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: String,
    pub attributes: Vec<(String, String)>,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute (builder style).
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Look up the first attribute with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_insertion_order() {
        let event = Event::new("active_proposal")
            .attr("proposal_id", "7")
            .attr("proposal_result", "proposal_passed");
        assert_eq!(event.attributes[0].0, "proposal_id");
        assert_eq!(event.get("proposal_result"), Some("proposal_passed"));
        assert_eq!(event.get("missing"), None);
    }
}
