use super::Value;
use crate::graph::Services;
use crate::utils::errors::SimulationError;

/// The `NodeFunction` trait defines everything required for a computation
/// unit to operate within a simulation graph.  The executor invokes
/// `evaluate` once per simulation run, with the computed values of the
/// node's parents as positional inputs, in the parent order declared at
/// registration.  A node with no parents receives an empty input slice, and
/// sizes its own batch from the active sample count in `services`.
///
/// The trait is implemented for any compatible closure, so ad hoc nodes can
/// be registered without defining a struct:
///
/// ```
/// use simgraph::graph::{Graph, Node, Services};
/// use simgraph::models::Value;
/// use simgraph::SimulationError;
///
/// let mut graph = Graph::post(vec![
///     Node::new(
///         String::from("ones"),
///         None,
///         Vec::new(),
///         Box::new(
///             |_: &[&Value], services: &mut Services| -> Result<Value, SimulationError> {
///                 Ok(Value::Reals(vec![1.0; services.sample_count()]))
///             },
///         ),
///     ),
///     Node::new(
///         String::from("twos"),
///         None,
///         vec![String::from("ones")],
///         Box::new(
///             |inputs: &[&Value], _: &mut Services| -> Result<Value, SimulationError> {
///                 let parent = inputs[0].to_reals()?;
///                 Ok(Value::Reals(parent.iter().map(|value| 2.0 * value).collect()))
///             },
///         ),
///     ),
/// ]);
/// let simulation = graph.simulate(3).unwrap();
/// assert_eq!(simulation["twos"], Value::Reals(vec![2.0, 2.0, 2.0]));
/// ```
pub trait NodeFunction {
    fn evaluate(
        &mut self,
        inputs: &[&Value],
        services: &mut Services,
    ) -> Result<Value, SimulationError>;
}

impl<F> NodeFunction for F
where
    F: FnMut(&[&Value], &mut Services) -> Result<Value, SimulationError>,
{
    fn evaluate(
        &mut self,
        inputs: &[&Value],
        services: &mut Services,
    ) -> Result<Value, SimulationError> {
        self(inputs, services)
    }
}
