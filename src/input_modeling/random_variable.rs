//! Random variables underpin the stochastic inputs of a simulation: source
//! nodes in a computation graph draw a batch of independent variates from a
//! configured distribution, one variate per simulated scenario.  Common
//! distributions, with their common parameterizations, are wrapped in the
//! enums `Continuous` and `Boolean`.  The `LogNormalQuantiles` variant
//! supports elicited inputs directly - a log-normal specified by its 10th
//! and 90th percentiles, rather than by its underlying normal parameters.

use rand::distributions::Distribution;
use serde::{Deserialize, Serialize};
// Continuous distributions
use rand_distr::{Exp, LogNormal, Normal, Triangular, Uniform};
// Boolean distributions
use rand_distr::Bernoulli;

use super::dynamic_rng::DynRng;
use crate::utils::errors::SimulationError;

// 90th percentile of the standard normal distribution
const NORMAL_QUANTILE_90: f64 = 1.281_551_565_544_600_4;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Continuous {
    Exp { lambda: f64 },
    LogNormal { mu: f64, sigma: f64 },
    /// A log-normal distribution specified by two quantiles: 10% of the
    /// probability mass falls below `p10` and 90% falls below `p90`, with
    /// 0 < p10 < p90
    LogNormalQuantiles { p10: f64, p90: f64 },
    Normal { mean: f64, std_dev: f64 },
    Triangular { min: f64, max: f64, mode: f64 },
    Uniform { min: f64, max: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Boolean {
    Bernoulli { p: f64 },
}

/// Fits a log-normal distribution to a pair of elicited percentiles.  The
/// underlying normal has its mean at the midpoint of the log-scale
/// quantiles, and its standard deviation set by their log-scale spread.
fn lognormal_by_quantiles(p10: f64, p90: f64) -> Result<LogNormal<f64>, SimulationError> {
    if !(p10 > 0.0 && p90 > p10) {
        return Err(SimulationError::InvalidQuantiles);
    }
    let mu = (p10.ln() + p90.ln()) / 2.0;
    let sigma = (p90.ln() - p10.ln()) / (2.0 * NORMAL_QUANTILE_90);
    Ok(LogNormal::new(mu, sigma)?)
}

impl Continuous {
    /// The generation of random variates drives stochastic behaviors during
    /// simulation execution.  This function requires the random number
    /// generator of the simulation, and produces a f64 random variate.
    pub fn random_variate(&mut self, uniform_rng: &DynRng) -> Result<f64, SimulationError> {
        let mut rng = uniform_rng.borrow_mut();
        match self {
            Continuous::Exp { lambda } => Ok(Exp::new(*lambda)?.sample(&mut *rng)),
            Continuous::LogNormal { mu, sigma } => {
                Ok(LogNormal::new(*mu, *sigma)?.sample(&mut *rng))
            }
            Continuous::LogNormalQuantiles { p10, p90 } => {
                Ok(lognormal_by_quantiles(*p10, *p90)?.sample(&mut *rng))
            }
            Continuous::Normal { mean, std_dev } => {
                Ok(Normal::new(*mean, *std_dev)?.sample(&mut *rng))
            }
            Continuous::Triangular { min, max, mode } => {
                Ok(Triangular::new(*min, *max, *mode)?.sample(&mut *rng))
            }
            Continuous::Uniform { min, max } => Ok(Uniform::new(*min, *max).sample(&mut *rng)),
        }
    }

    /// This function produces a batch of independent random variates - one
    /// variate for each simulated scenario in a vectorized evaluation.
    pub fn random_variates(
        &mut self,
        count: usize,
        uniform_rng: &DynRng,
    ) -> Result<Vec<f64>, SimulationError> {
        (0..count).map(|_| self.random_variate(uniform_rng)).collect()
    }
}

impl Boolean {
    /// The generation of random variates drives stochastic behaviors during
    /// simulation execution.  This function requires the random number
    /// generator of the simulation, and produces a boolean random variate.
    pub fn random_variate(&mut self, uniform_rng: &DynRng) -> Result<bool, SimulationError> {
        let mut rng = uniform_rng.borrow_mut();
        match self {
            Boolean::Bernoulli { p } => Ok(Bernoulli::new(*p)?.sample(&mut *rng)),
        }
    }

    /// This function produces a batch of independent random variates - one
    /// variate for each simulated scenario in a vectorized evaluation.
    pub fn random_variates(
        &mut self,
        count: usize,
        uniform_rng: &DynRng,
    ) -> Result<Vec<bool>, SimulationError> {
        (0..count).map(|_| self.random_variate(uniform_rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::dynamic_rng::{default_rng, dyn_rng};
    use super::*;

    fn empirical_mean(variable: &mut Continuous, sample_size: usize) -> f64 {
        let uniform_rng = default_rng();
        (0..sample_size)
            .map(|_| variable.random_variate(&uniform_rng).unwrap())
            .sum::<f64>()
            / (sample_size as f64)
    }

    fn chi_square(
        variable: &mut Continuous,
        bin_mapping_fn: fn(f64) -> usize,
        expected_counts: &[usize],
    ) -> f64 {
        let mut class_counts = vec![0; expected_counts.len()];
        let uniform_rng = default_rng();
        let sample_size = expected_counts.iter().sum();
        (0..sample_size).for_each(|_| {
            let index = bin_mapping_fn(variable.random_variate(&uniform_rng).unwrap());
            class_counts[index] += 1
        });
        class_counts.iter().zip(expected_counts.iter()).fold(
            0.0,
            |acc, (class_count, expected_count)| {
                let f_class_count = *class_count as f64;
                let f_expected_count = *expected_count as f64;
                acc + (f_class_count - f_expected_count).powi(2) / f_expected_count
            },
        )
    }

    #[test]
    fn exponential_samples_match_expectation() {
        let mut variable = Continuous::Exp { lambda: 7.0 };
        let mean = empirical_mean(&mut variable, 30000);
        let expected = 1.0 / 7.0;
        assert!((mean - expected).abs() / expected < 0.025);
    }

    #[test]
    fn lognormal_samples_match_expectation() {
        let mut variable = Continuous::LogNormal {
            mu: 2.0,
            sigma: 0.5,
        };
        let mean = empirical_mean(&mut variable, 10000);
        let expected = (2.0f64 + 0.5f64.powi(2) / 2.0f64).exp();
        assert!((mean - expected).abs() / expected < 0.025);
    }

    #[test]
    fn normal_samples_match_expectation() {
        let mut variable = Continuous::Normal {
            mean: 11.0,
            std_dev: 3.0,
        };
        let mean = empirical_mean(&mut variable, 10000);
        let expected = 11.0;
        assert!((mean - expected).abs() / expected < 0.025);
    }

    #[test]
    fn triangular_samples_match_expectation() {
        let mut variable = Continuous::Triangular {
            min: 5.0,
            max: 25.0,
            mode: 15.0,
        };
        let mean = empirical_mean(&mut variable, 10000);
        let expected = 15.0;
        assert!((mean - expected).abs() / expected < 0.025);
    }

    #[test]
    fn continuous_uniform_samples_chi_square() {
        fn bins_mapping(variate: f64) -> usize {
            variate as usize
        }
        let mut variable = Continuous::Uniform { min: 0.0, max: 4.0 };
        // Constant bin counts, due to uniformity of distribution
        let expected_counts: [usize; 4] = [2500; 4];
        let chi_square_actual = chi_square(&mut variable, bins_mapping, &expected_counts);
        // At a significance level of 0.001, and with n-1=3 degrees of freedom, the chi square
        // critical value for this scenario is 16.266
        let chi_square_critical = 16.266;
        assert![chi_square_actual < chi_square_critical];
    }

    #[test]
    fn lognormal_quantiles_match_target_percentiles() {
        let mut variable = Continuous::LogNormalQuantiles {
            p10: 28.0,
            p90: 39.0,
        };
        let uniform_rng = default_rng();
        let mut draws = variable.random_variates(100000, &uniform_rng).unwrap();
        draws.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let empirical_p10 = draws[10000];
        let empirical_p90 = draws[90000];
        assert!((empirical_p10 - 28.0).abs() < 0.5);
        assert!((empirical_p90 - 39.0).abs() < 0.5);
    }

    #[test]
    fn invalid_quantiles_are_rejected() {
        let uniform_rng = default_rng();
        let mut inverted = Continuous::LogNormalQuantiles {
            p10: 39.0,
            p90: 28.0,
        };
        assert!(matches!(
            inverted.random_variate(&uniform_rng),
            Err(SimulationError::InvalidQuantiles)
        ));
        let mut nonpositive = Continuous::LogNormalQuantiles {
            p10: 0.0,
            p90: 28.0,
        };
        assert!(matches!(
            nonpositive.random_variate(&uniform_rng),
            Err(SimulationError::InvalidQuantiles)
        ));
    }

    #[test]
    fn bernoulli_samples_match_expectation() {
        let mut variable = Boolean::Bernoulli { p: 0.3 };
        let uniform_rng = default_rng();
        let draws = variable.random_variates(10000, &uniform_rng).unwrap();
        let fraction_true =
            draws.iter().filter(|draw| **draw).count() as f64 / (draws.len() as f64);
        assert!((fraction_true - 0.3).abs() < 0.02);
    }

    #[test]
    fn seeded_generators_reproduce_draws() {
        let mut variable = Continuous::Uniform { min: 0.0, max: 1.0 };
        let first = variable
            .random_variates(100, &dyn_rng(rand_pcg::Pcg64Mcg::new(7)))
            .unwrap();
        let second = variable
            .random_variates(100, &dyn_rng(rand_pcg::Pcg64Mcg::new(7)))
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 100);
    }
}
