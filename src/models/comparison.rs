use serde::{Deserialize, Serialize};

use super::node_trait::NodeFunction;
use super::Value;
use crate::graph::Services;
use crate::utils::errors::SimulationError;

/// The elementwise orderings available to a `Comparison` node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Relation {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

/// The comparison node orders the batches of exactly two parents
/// elementwise, producing a boolean batch - one verdict per scenario.  The
/// two parent batches must be of equal length.  Downstream nodes typically
/// consume the result as a mask, or summarize it as a probability via its
/// fraction true.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    relation: Relation,
}

impl Comparison {
    /// This constructor method creates a comparison node from the relation
    /// to apply.
    pub fn new(relation: Relation) -> Self {
        Self { relation }
    }
}

impl NodeFunction for Comparison {
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
        Ok(Value::Booleans(
            left.iter()
                .zip(right.iter())
                .map(|(left_value, right_value)| match self.relation {
                    Relation::GreaterThan => left_value > right_value,
                    Relation::GreaterThanOrEqual => left_value >= right_value,
                    Relation::LessThan => left_value < right_value,
                    Relation::LessThanOrEqual => left_value <= right_value,
                })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts(relation: Relation, left: &Value, right: &Value) -> Value {
        Comparison::new(relation)
            .evaluate(&[left, right], &mut Services::default())
            .unwrap()
    }

    #[test]
    fn mismatched_parent_batches_are_rejected() {
        let mut comparison = Comparison::new(Relation::LessThan);
        let left = Value::Reals(vec![1.0, 2.0]);
        let right = Value::Reals(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            comparison.evaluate(&[&left, &right], &mut Services::default()),
            Err(SimulationError::InvalidNodeConfiguration)
        ));
    }

    #[test]
    fn equal_elements_separate_strict_and_inclusive_relations() {
        let left = Value::Reals(vec![2.0, 3.0, 5.0]);
        let right = Value::Reals(vec![3.0, 3.0, 3.0]);
        assert_eq!(
            verdicts(Relation::GreaterThan, &left, &right),
            Value::Booleans(vec![false, false, true])
        );
        assert_eq!(
            verdicts(Relation::GreaterThanOrEqual, &left, &right),
            Value::Booleans(vec![false, true, true])
        );
        assert_eq!(
            verdicts(Relation::LessThan, &left, &right),
            Value::Booleans(vec![true, false, false])
        );
        assert_eq!(
            verdicts(Relation::LessThanOrEqual, &left, &right),
            Value::Booleans(vec![true, true, false])
        );
    }
}
