// RoboPanel - core/join.rs
//
// Two-slot rendezvous for the node and parameter line edits.
//
// The user edits the two fields independently and presses Enter in either.
// A model request is only forwarded once both slots hold a value; until then
// the join simply waits. Values are trimmed, so whitespace-only input counts
// as empty.

/// Pending node and parameter names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeParameterJoin {
    /// Node name as typed.
    pub node: String,
    /// Parameter name as typed.
    pub parameter: String,
}

impl NodeParameterJoin {
    pub fn new(node: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            parameter: parameter.into(),
        }
    }

    /// Replace the node slot.
    pub fn set_node(&mut self, node: impl Into<String>) {
        self.node = node.into();
    }

    /// Replace the parameter slot.
    pub fn set_parameter(&mut self, parameter: impl Into<String>) {
        self.parameter = parameter.into();
    }

    /// Both trimmed values, or `None` while either slot is empty.
    pub fn ready(&self) -> Option<(&str, &str)> {
        let node = self.node.trim();
        let parameter = self.parameter.trim();
        if node.is_empty() || parameter.is_empty() {
            None
        } else {
            Some((node, parameter))
        }
    }

    /// True while at least one slot is still empty.
    pub fn is_waiting(&self) -> bool {
        self.ready().is_none()
    }
}
