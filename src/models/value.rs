//! Every node in a computation graph produces a `Value` - usually a batch
//! variant, holding one element per simulated scenario.  The executor and
//! the graph renderer both classify values once, by variant, rather than
//! inspecting elements dynamically.

use serde::{Deserialize, Serialize};

use crate::utils::errors::SimulationError;

/// The output of a node evaluation.  Scalar variants exist for rendering
/// hand-built result mappings; the simulation executor itself only accepts
/// batch variants, sized to the requested sample count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    Real(f64),
    Boolean(bool),
    Reals(Vec<f64>),
    Booleans(Vec<bool>),
    Strings(Vec<String>),
}

impl Value {
    /// A human-readable name for the variant, used in contract-violation
    /// error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Real(_) => "scalar real",
            Value::Boolean(_) => "scalar boolean",
            Value::Reals(_) => "real batch",
            Value::Booleans(_) => "boolean batch",
            Value::Strings(_) => "string batch",
        }
    }

    /// The batch length of the value - the number of simulated scenarios it
    /// spans.  Scalar variants are not batches and have no first dimension.
    pub fn first_dimension(&self) -> Option<usize> {
        match self {
            Value::Real(_) | Value::Boolean(_) => None,
            Value::Reals(values) => Some(values.len()),
            Value::Booleans(values) => Some(values.len()),
            Value::Strings(values) => Some(values.len()),
        }
    }

    /// The arithmetic mean of the value, for summary annotations.  Booleans
    /// count as 0 and 1, so a boolean batch reports its fraction true.
    /// Values without a numeric interpretation have no mean.
    pub fn mean(&self) -> Option<f64> {
        match self {
            Value::Real(value) => Some(*value),
            Value::Boolean(value) => Some(if *value { 1.0 } else { 0.0 }),
            Value::Reals(values) => {
                Some(values.iter().sum::<f64>() / (values.len() as f64))
            }
            Value::Booleans(values) => {
                Some(values.iter().filter(|value| **value).count() as f64 / (values.len() as f64))
            }
            Value::Strings(_) => None,
        }
    }

    /// A numeric view of a batch, for elementwise combination.  Boolean
    /// batches coerce to 0.0 and 1.0, so comparison outputs can act as
    /// masks in downstream arithmetic.
    pub fn to_reals(&self) -> Result<Vec<f64>, SimulationError> {
        match self {
            Value::Reals(values) => Ok(values.clone()),
            Value::Booleans(values) => Ok(values
                .iter()
                .map(|value| if *value { 1.0 } else { 0.0 })
                .collect()),
            _ => Err(SimulationError::InvalidNodeConfiguration),
        }
    }
}
