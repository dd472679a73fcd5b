use thiserror::Error;

/// `SimulationError` enumerates all possible errors returned by simgraph
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Represents an invalid node configuration encountered during simulation
    #[error("An invalid node configuration was encountered during simulation")]
    InvalidNodeConfiguration,

    /// Represents an operation requested on a node that does not exist in the
    /// graph registry or in a simulation result
    #[error("A specified node cannot be found in the graph")]
    NodeNotFound,

    /// Represents a node output that is not a batch of simulated values
    #[error("Node \"{node}\" returned a {kind} value, where a batch of simulated values is required")]
    OutputTypeMismatch { node: String, kind: &'static str },

    /// Represents a node output batch with a length other than the requested
    /// sample count
    #[error("Node \"{node}\" returned a batch of length {actual}, where the requested sample count is {expected}")]
    OutputShapeMismatch {
        node: String,
        actual: usize,
        expected: usize,
    },

    /// Represents an invalid quantile parameterization of a distribution
    #[error("A quantile-parameterized distribution requires quantile values satisfying 0 < p10 < p90")]
    InvalidQuantiles,

    /// Represents a failed conversion to num-traits Float
    #[error("Failed to convert to a Float value")]
    FloatConvError,

    /// Transparent Exponential distribution errors
    #[error(transparent)]
    ExpError(#[from] rand_distr::ExpError),

    /// Transparent Normal and LogNormal distribution errors
    #[error(transparent)]
    NormalError(#[from] rand_distr::NormalError),

    /// Transparent Triangular distribution errors
    #[error(transparent)]
    TriangularError(#[from] rand_distr::TriangularError),

    /// Transparent Bernoulli distribution errors
    #[error(transparent)]
    BernoulliError(#[from] rand_distr::BernoulliError),
}
