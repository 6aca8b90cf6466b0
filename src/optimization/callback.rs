use super::solvers::traits::OptimizationCallback;
use crate::core::{Result, Vector};
use serde::Serialize;

/// Number of progress lines a full run emits
const REPORTS_PER_RUN: u32 = 20;

/// Report every `iterations / 20` rounds, or every round for short runs
pub fn report_cadence(iterations: u32) -> u32 {
    (iterations / REPORTS_PER_RUN).max(1)
}

/// Iteration result for tracking optimization progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationResult {
    pub iteration: u32,
    pub best: Vector,
    pub fitness: f64,
}

/// Logs the global best at a fixed cadence and, unless disabled, records every round
pub struct ProgressReporter {
    objective_name: String,
    cadence: u32,
    record_history: bool,
    history: Vec<IterationResult>,
    first: Option<IterationResult>,
    last: Option<IterationResult>,
}

impl ProgressReporter {
    pub fn new(objective_name: impl Into<String>, iterations: u32) -> Self {
        Self {
            objective_name: objective_name.into(),
            cadence: report_cadence(iterations),
            record_history: true,
            history: Vec::new(),
            first: None,
            last: None,
        }
    }

    /// Keep only the first and last rounds instead of the full history
    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    pub fn cadence(&self) -> u32 {
        self.cadence
    }

    /// Get iteration history
    pub fn history(&self) -> &[IterationResult] {
        &self.history
    }

    pub fn into_history(self) -> Vec<IterationResult> {
        self.history
    }

    pub fn log_summary(&self) {
        let (Some(first), Some(last)) = (&self.first, &self.last) else {
            tracing::info!(objective = %self.objective_name, "no iterations were run");
            return;
        };
        tracing::info!(
            objective = %self.objective_name,
            iterations = last.iteration,
            initial_fitness = first.fitness,
            final_fitness = last.fitness,
            best = ?last.best,
            "optimization summary"
        );
    }
}

impl OptimizationCallback for ProgressReporter {
    fn on_iteration(&mut self, iteration: u32, best: &[f64], fitness: f64) -> Result<()> {
        let result = IterationResult {
            iteration,
            best: best.to_vec(),
            fitness,
        };
        if self.first.is_none() {
            self.first = Some(result.clone());
        }
        if self.record_history {
            self.history.push(result.clone());
        }
        self.last = Some(result);

        if iteration % self.cadence == 0 {
            tracing::info!(
                objective = %self.objective_name,
                "Iteration {:4}: best = {:?} (fitness = {})",
                iteration,
                best,
                fitness
            );
        }

        Ok(())
    }
}

/// Callback that ignores progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCallback;

impl OptimizationCallback for NoopCallback {
    fn on_iteration(&mut self, _iteration: u32, _best: &[f64], _fitness: f64) -> Result<()> {
        Ok(())
    }
}
