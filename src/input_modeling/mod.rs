//! The input modeling module provides a foundation for configurable node
//! behaviors, whether deterministic or stochastic.  The module includes a
//! set of random variable distributions for use in source nodes, and a
//! structure around random number generation.

pub mod dynamic_rng;
pub mod random_variable;

pub use dynamic_rng::{dyn_rng, some_dyn_rng, DynRng, SimulationRng};
pub use random_variable::Boolean as BooleanRandomVariable;
pub use random_variable::Continuous as ContinuousRandomVariable;
