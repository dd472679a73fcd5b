//! The graph module provides the mechanics to register, evaluate, and
//! render a declarative computation graph.  A simulation is specified as a
//! set of nodes with explicit parent dependencies, and executed as one
//! vectorized pass: every node computes a batch of values, one element per
//! simulated scenario, with its parents' batches as positional inputs.
//!
//! Registration order is significant.  The executor walks the registry
//! strictly in registration order, so callers declare every parent before
//! its dependents.  There is no topological sort and no cycle detection -
//! a misordered or missing parent surfaces as a `NodeNotFound` failure at
//! evaluation time.

use std::collections::HashMap;

use crate::input_modeling::DynRng;
use crate::models::Value;
use crate::utils::errors::SimulationError;

pub mod node;
pub mod services;

pub use self::node::Node;
pub use self::services::Services;

/// A simulation result - the mapping from node ID to computed batch
/// produced by one `simulate` call.  The graph retains no copy; each call
/// builds a fresh world owned by the caller.
pub type World = HashMap<String, Value>;

/// The `Graph` struct is the core of simgraph, and includes everything
/// needed to run a simulation - the registered nodes, in registration
/// order, and the services (a random number generator and the active
/// sample count) provided to node functions during execution.
#[derive(Default)]
pub struct Graph {
    nodes: Vec<Node>,
    services: Services,
}

impl Graph {
    /// This constructor method creates a graph from a supplied
    /// configuration (nodes).
    pub fn post(nodes: Vec<Node>) -> Self {
        let mut graph = Self::default();
        graph.put(nodes);
        graph
    }

    /// This constructor method creates a graph from a supplied
    /// configuration (nodes) and a caller-supplied random number generator,
    /// for reproducible stochastic behavior.
    pub fn post_with_rng(nodes: Vec<Node>, global_rng: DynRng) -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            services: Services::with_rng(global_rng),
        };
        graph.put(nodes);
        graph
    }

    /// This method replaces the nodes of an existing graph.
    pub fn put(&mut self, nodes: Vec<Node>) {
        self.nodes = Vec::new();
        nodes.into_iter().for_each(|node| self.add_node(node));
    }

    /// This method registers a single node.  A node with a new ID lands at
    /// the end of the registry; re-registering an existing ID replaces the
    /// prior entry in place, keeping its original registry position (last
    /// write wins).  Parent IDs are not validated here - a missing or
    /// misordered parent surfaces during evaluation.
    pub fn add_node(&mut self, node: Node) {
        match self
            .nodes
            .iter()
            .position(|existing| existing.id() == node.id())
        {
            Some(index) => self.nodes[index] = node,
            None => self.nodes.push(node),
        }
    }

    /// This method provides a mechanism for getting a registered node by
    /// ID.
    pub fn get_node(&self, node_id: &str) -> Result<&Node, SimulationError> {
        self.nodes
            .iter()
            .find(|node| node.id() == node_id)
            .ok_or(SimulationError::NodeNotFound)
    }

    /// An accessor method for the full set of registered nodes, in
    /// registration (and therefore evaluation) order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// This method executes a simulation: every registered node is
    /// evaluated over a batch of `sample_count` scenarios, in registration
    /// order, and the resulting world holds one validated batch per node.
    /// The active sample count is set for the duration of the call and
    /// reset to zero before returning, success or failure, so state does
    /// not leak between runs.  A contract violation - a node output that is
    /// not a batch, or a batch of the wrong length - aborts the whole call
    /// with no partial results, leaving the graph reusable.
    pub fn simulate(&mut self, sample_count: usize) -> Result<World, SimulationError> {
        self.services.set_sample_count(sample_count);
        let simulation = self.evaluate_nodes(sample_count);
        self.services.set_sample_count(0);
        simulation
    }

    fn evaluate_nodes(&mut self, sample_count: usize) -> Result<World, SimulationError> {
        let mut world = World::new();
        (0..self.nodes.len()).try_for_each(|node_index| -> Result<(), SimulationError> {
            let inputs: Vec<&Value> = self.nodes[node_index]
                .parents()
                .iter()
                .map(|parent_id| world.get(parent_id).ok_or(SimulationError::NodeNotFound))
                .collect::<Result<_, _>>()?;
            let value = self.nodes[node_index].evaluate(&inputs, &mut self.services)?;
            let first_dimension =
                value
                    .first_dimension()
                    .ok_or_else(|| SimulationError::OutputTypeMismatch {
                        node: self.nodes[node_index].id().to_string(),
                        kind: value.kind(),
                    })?;
            if first_dimension != sample_count {
                return Err(SimulationError::OutputShapeMismatch {
                    node: self.nodes[node_index].id().to_string(),
                    actual: first_dimension,
                    expected: sample_count,
                });
            }
            world.insert(self.nodes[node_index].id().to_string(), value);
            Ok(())
        })?;
        Ok(world)
    }

    /// This method renders the dependency structure of the graph as a
    /// Graphviz digraph description - one edge statement per (parent,
    /// child) pair, with children in registration order and parents in
    /// declaration order.  When a simulation result is supplied, each label
    /// carries a value annotation: the value itself for scalars, the batch
    /// mean for real and boolean batches, and no annotation for values
    /// with no numeric summary.
    pub fn graphviz(&self, simulation: Option<&World>) -> Result<String, SimulationError> {
        let labels: HashMap<&str, String> = self
            .nodes
            .iter()
            .map(|node| Ok((node.id(), self.node_label(node, simulation)?)))
            .collect::<Result<_, SimulationError>>()?;
        let mut lines = vec![String::from("digraph G {")];
        for node in &self.nodes {
            for parent_id in node.parents() {
                let parent_label = labels
                    .get(parent_id.as_str())
                    .ok_or(SimulationError::NodeNotFound)?;
                let child_label = labels
                    .get(node.id())
                    .ok_or(SimulationError::NodeNotFound)?;
                lines.push(format!(
                    "  {} -> {};",
                    quote_label(parent_label),
                    quote_label(child_label)
                ));
            }
        }
        lines.push(String::from("}"));
        Ok(lines.join("\n"))
    }

    fn node_label(
        &self,
        node: &Node,
        simulation: Option<&World>,
    ) -> Result<String, SimulationError> {
        let world = match simulation {
            Some(world) => world,
            None => return Ok(node.display_name().to_string()),
        };
        let value = world.get(node.id()).ok_or(SimulationError::NodeNotFound)?;
        let annotation = match value {
            Value::Real(scalar) => Some(format!("(value = {})", scalar)),
            Value::Boolean(scalar) => Some(format!("(value = {})", scalar)),
            Value::Reals(_) | Value::Booleans(_) => {
                value.mean().map(|mean| format!("(mean = {})", mean))
            }
            Value::Strings(_) => None,
        };
        Ok(match annotation {
            Some(annotation) => format!("{}\n{}", node.display_name(), annotation),
            None => node.display_name().to_string(),
        })
    }
}

// DOT double-quoted strings use the same escapes as JSON strings, so the
// serialized form is safe for arbitrary display names and for the
// newline-separated annotation labels.
fn quote_label(label: &str) -> String {
    serde_json::Value::from(label).to_string()
}
