use serde::{Deserialize, Serialize};

use super::node_trait::NodeFunction;
use super::Value;
use crate::graph::Services;
use crate::utils::errors::SimulationError;

/// The constant broadcasts a fixed real value across a whole scenario
/// batch.  It takes no parents.  Deterministic model parameters - budgets,
/// conversion factors, unit costs - enter a stochastic graph through this
/// node function.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constant {
    value: f64,
}

impl Constant {
    /// This constructor method creates a constant from the value to
    /// broadcast.
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl NodeFunction for Constant {
    fn evaluate(
        &mut self,
        inputs: &[&Value],
        services: &mut Services,
    ) -> Result<Value, SimulationError> {
        if !inputs.is_empty() {
            return Err(SimulationError::InvalidNodeConfiguration);
        }
        Ok(Value::Reals(vec![self.value; services.sample_count()]))
    }
}
