mod particle;
mod pso;
mod swarm;
pub mod traits;

pub use particle::{Particle, Pull};
pub use pso::ParticleOptimizer;
pub use swarm::Swarm;
pub use traits::{OptimizationCallback, Solver, SolverResult};
