use serde::{Deserialize, Serialize};

use super::node_trait::NodeFunction;
use super::Value;
use crate::graph::Services;
use crate::input_modeling::{BooleanRandomVariable, ContinuousRandomVariable, DynRng};
use crate::utils::errors::SimulationError;

/// The sampler is the stochastic source of a computation graph.  It takes
/// no parents, and produces a batch of independent draws from a configured
/// random variable distribution - one draw per simulated scenario, sized by
/// the active sample count.  A dedicated generator can be attached for
/// stream separation; otherwise draws come from the global simulation
/// generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sampler {
    distribution: Distribution,
    #[serde(skip)]
    sampler_rng: Option<DynRng>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum Distribution {
    Continuous(ContinuousRandomVariable),
    Boolean(BooleanRandomVariable),
}

impl Sampler {
    /// This constructor method creates a sampler over a continuous
    /// distribution, producing real-valued batches.
    pub fn continuous(
        distribution: ContinuousRandomVariable,
        sampler_rng: Option<DynRng>,
    ) -> Self {
        Self {
            distribution: Distribution::Continuous(distribution),
            sampler_rng,
        }
    }

    /// This constructor method creates a sampler over a boolean
    /// distribution, producing boolean-valued batches.
    pub fn boolean(distribution: BooleanRandomVariable, sampler_rng: Option<DynRng>) -> Self {
        Self {
            distribution: Distribution::Boolean(distribution),
            sampler_rng,
        }
    }

    fn rng(&self, services: &Services) -> DynRng {
        match &self.sampler_rng {
            Some(sampler_rng) => sampler_rng.clone(),
            None => services.global_rng(),
        }
    }
}

impl NodeFunction for Sampler {
    fn evaluate(
        &mut self,
        inputs: &[&Value],
        services: &mut Services,
    ) -> Result<Value, SimulationError> {
        if !inputs.is_empty() {
            return Err(SimulationError::InvalidNodeConfiguration);
        }
        let uniform_rng = self.rng(services);
        match &mut self.distribution {
            Distribution::Continuous(variable) => Ok(Value::Reals(
                variable.random_variates(services.sample_count(), &uniform_rng)?,
            )),
            Distribution::Boolean(variable) => Ok(Value::Booleans(
                variable.random_variates(services.sample_count(), &uniform_rng)?,
            )),
        }
    }
}
