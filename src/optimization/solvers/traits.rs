use crate::core::{Result, Vector};
use crate::optimization::objective::Objective;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolverResult {
    pub best: Vector,
    pub fitness: f64,
    /// Fitness of the global best after the first round, if any round ran
    pub initial_fitness: Option<f64>,
    pub iterations: u32,
    pub message: String,
    pub cost_evals: usize,
}

/// Callback interface for optimization progress
pub trait OptimizationCallback {
    /// Called once per completed round with the current global best
    fn on_iteration(&mut self, iteration: u32, best: &[f64], fitness: f64) -> Result<()>;
}

/// Solver interface - takes the objective and a callback
pub trait Solver {
    fn name(&self) -> &str;

    fn solve(
        &mut self,
        objective: &dyn Objective,
        callback: &mut dyn OptimizationCallback,
    ) -> Result<SolverResult>;
}
