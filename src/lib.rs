//! # Overview
//! Simgraph provides a declarative computation-graph engine for vectorized
//! Monte Carlo simulation, to facilitate Rust-based risk analysis and
//! forecasting products and projects.
//!
//! This repository contains:
//!
//! * Graph engine, for registering named nodes with explicit parent
//! dependencies and evaluating them over a requested number of scenarios.
//! * Random variable framework, for easy specification of stochastic node
//! behaviors.
//! * Pre-built node functions, for quickly assembling simulations from
//! common modular components.
//! * Output analysis framework, for analyzing simulation outputs
//! statistically.
//!
//! Simgraph does not require nightly Rust.
pub mod graph;
pub mod input_modeling;
pub mod models;
pub mod output_analysis;
pub mod utils;

pub use utils::errors::SimulationError;
