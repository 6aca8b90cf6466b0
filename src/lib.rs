//! Particle swarm optimization over continuous search spaces.
//!
//! A single fully-connected swarm minimizes a pluggable [`Objective`]. Each
//! iteration is a synchronized round: every particle moves against the global
//! best frozen at the start of the round, then the global best is recomputed.

mod core;
mod optimization;
mod optimizer;

pub use crate::core::*;
pub use crate::optimization::*;
pub use crate::optimizer::{OptimizationResult, Optimizer};
