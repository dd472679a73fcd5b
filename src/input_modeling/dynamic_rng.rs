//! Dynamic dispatch around the random number generation that drives
//! stochastic node behaviors, so that callers can supply any `RngCore`
//! implementation at graph construction.

use std::{cell::RefCell, rc::Rc};

pub trait SimulationRng: std::fmt::Debug + rand::RngCore {}
impl<T: std::fmt::Debug + rand::RngCore> SimulationRng for T {}

/// A shared handle to a dynamically-dispatched simulation RNG.
pub type DynRng = Rc<RefCell<dyn SimulationRng>>;

/// The default generator is seeded, so simulations are reproducible unless
/// a caller injects a generator of their own.
pub(crate) fn default_rng() -> DynRng {
    Rc::new(RefCell::new(rand_pcg::Pcg64Mcg::new(42)))
}

pub fn dyn_rng<Rng: SimulationRng + 'static>(rng: Rng) -> DynRng {
    Rc::new(RefCell::new(rng))
}

pub fn some_dyn_rng<Rng: SimulationRng + 'static>(rng: Rng) -> Option<DynRng> {
    Some(dyn_rng(rng))
}
