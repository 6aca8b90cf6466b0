pub mod callback;
pub mod objective;
pub mod solvers;

pub use callback::{IterationResult, NoopCallback, ProgressReporter};
pub use objective::{fittest, FnObjective, Objective, ObjectiveKind, Rastrigin, Rosenbrock, Sphere};
pub use solvers::{OptimizationCallback, Particle, ParticleOptimizer, Pull, Solver, SolverResult, Swarm};
