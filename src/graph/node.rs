use super::services::Services;
use crate::models::{NodeFunction, Value};
use crate::utils::errors::SimulationError;

/// `Node` wraps a node function and provides the registration metadata the
/// graph requires of every computation unit: a unique ID, a display name
/// for rendered output, and the parent IDs whose computed values feed the
/// function, in declaration order.
pub struct Node {
    id: String,
    display_name: String,
    parents: Vec<String>,
    inner: Box<dyn NodeFunction>,
}

impl Node {
    /// This constructor method creates a node from its registration
    /// metadata and its node function.  The display name defaults to the ID
    /// when `None` is supplied.
    pub fn new(
        id: String,
        display_name: Option<String>,
        parents: Vec<String>,
        inner: Box<dyn NodeFunction>,
    ) -> Self {
        let display_name = display_name.unwrap_or_else(|| id.clone());
        Self {
            id,
            display_name,
            parents,
            inner,
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// An accessor method for the label used in rendered output.
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// An accessor method for the node's parent IDs, in declaration order.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub(crate) fn evaluate(
        &mut self,
        inputs: &[&Value],
        services: &mut Services,
    ) -> Result<Value, SimulationError> {
        self.inner.evaluate(inputs, services)
    }
}
