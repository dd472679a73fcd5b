use serde::{Deserialize, Serialize};

use super::node_trait::NodeFunction;
use super::Value;
use crate::graph::Services;
use crate::utils::errors::SimulationError;

/// The elementwise binary operations available to an `Arithmetic` node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// The arithmetic node combines the batches of exactly two parents
/// elementwise, scenario by scenario.  The two parent batches must be of
/// equal length.  Boolean parents coerce to 0/1, so a comparison output
/// can mask a cost or quantity directly.  Division follows IEEE 754 - a
/// zero divisor produces an infinite or NaN element, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arithmetic {
    operation: Operation,
}

impl Arithmetic {
    /// This constructor method creates an arithmetic node from the
    /// operation to apply.
    pub fn new(operation: Operation) -> Self {
        Self { operation }
    }
}

impl NodeFunction for Arithmetic {
    fn evaluate(
        &mut self,
        inputs: &[&Value],
        _services: &mut Services,
    ) -> Result<Value, SimulationError> {
        if inputs.len() != 2 {
            return Err(SimulationError::InvalidNodeConfiguration);
        }
        let left = inputs[0].to_reals()?;
        let right = inputs[1].to_reals()?;
        if left.len() != right.len() {
            return Err(SimulationError::InvalidNodeConfiguration);
        }
        Ok(Value::Reals(
            left.iter()
                .zip(right.iter())
                .map(|(left_value, right_value)| match self.operation {
                    Operation::Add => left_value + right_value,
                    Operation::Subtract => left_value - right_value,
                    Operation::Multiply => left_value * right_value,
                    Operation::Divide => left_value / right_value,
                })
                .collect(),
        ))
    }
}
