//! The models module provides a set of prebuilt node functions, for easy
//! reuse in simulation products and projects.  Additionally, this module
//! specifies the requirements of any additional custom node functions, via
//! the `NodeFunction` trait, and the `Value` batches that node functions
//! exchange.

pub mod arithmetic;
pub mod comparison;
pub mod constant;
pub mod node_trait;
pub mod sampler;
pub mod value;

pub use self::arithmetic::{Arithmetic, Operation};
pub use self::comparison::{Comparison, Relation};
pub use self::constant::Constant;
pub use self::node_trait::NodeFunction;
pub use self::sampler::Sampler;
pub use self::value::Value;
