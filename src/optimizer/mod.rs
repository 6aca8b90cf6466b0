use crate::core::{Result, SwarmConfig};
use crate::optimization::callback::{IterationResult, ProgressReporter};
use crate::optimization::objective::{Objective, ObjectiveKind};
use crate::optimization::solvers::{ParticleOptimizer, Solver, SolverResult};
use serde::Serialize;
use std::path::Path;

/// Outcome of a full run: the solver result plus the per-round history
#[derive(Clone, Debug, Serialize)]
pub struct OptimizationResult {
    pub objective: String,
    #[serde(flatten)]
    pub result: SolverResult,
    pub history: Vec<IterationResult>,
}

/// Configuration-driven entry point: parameter table + objective selection
#[derive(Clone, Debug)]
pub struct Optimizer {
    pub config: SwarmConfig,
    pub objective: ObjectiveKind,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub record_history: bool,
}

impl Optimizer {
    pub fn new(config: SwarmConfig, objective: ObjectiveKind) -> Self {
        Self {
            config,
            objective,
            seed: None,
            parallel: false,
            record_history: true,
        }
    }

    /// Parse a JSON parameter table
    pub fn from_json_str(json: &str, objective: ObjectiveKind) -> Result<Self> {
        let config: SwarmConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(Self::new(config, objective))
    }

    pub fn from_json_file(path: impl AsRef<Path>, objective: ObjectiveKind) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading parameter table");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, objective)
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Keep per-round history in the result (on by default)
    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    /// Run the selected built-in objective
    pub fn optimize(&self) -> Result<OptimizationResult> {
        let objective = self.objective.into_objective();
        self.optimize_with(objective.as_ref())
    }

    /// Run against a caller-supplied objective, ignoring `self.objective`
    pub fn optimize_with(&self, objective: &dyn Objective) -> Result<OptimizationResult> {
        let mut solver = ParticleOptimizer::new(self.config.clone()).with_parallel(self.parallel);
        if let Some(seed) = self.seed {
            solver = solver.with_seed(seed);
        }

        let mut reporter = ProgressReporter::new(objective.name(), self.config.iterations)
            .with_history(self.record_history);

        tracing::info!(
            solver = solver.name(),
            objective = objective.name(),
            swarm_size = self.config.swarm_size,
            iterations = self.config.iterations,
            "optimization start"
        );

        let result = solver.solve(objective, &mut reporter)?;
        reporter.log_summary();

        Ok(OptimizationResult {
            objective: objective.name().to_string(),
            result,
            history: reporter.into_history(),
        })
    }
}
