use crate::input_modeling::dynamic_rng::{default_rng, DynRng};

/// The graph provides a uniform random number generator and the active
/// sample count to node functions during the execution of a simulation
#[derive(Clone, Debug)]
pub struct Services {
    global_rng: DynRng,
    sample_count: usize,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            global_rng: default_rng(),
            sample_count: 0,
        }
    }
}

impl Services {
    pub(crate) fn with_rng(global_rng: DynRng) -> Self {
        Self {
            global_rng,
            sample_count: 0,
        }
    }

    pub fn global_rng(&self) -> DynRng {
        self.global_rng.clone()
    }

    /// An accessor method for the active sample count - the number of
    /// scenarios in the in-progress vectorized evaluation.  The count is
    /// zero outside of an evaluation.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub(crate) fn set_sample_count(&mut self, sample_count: usize) {
        self.sample_count = sample_count;
    }
}
