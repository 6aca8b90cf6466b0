use super::swarm::Swarm;
use super::traits::{OptimizationCallback, Solver, SolverResult};
use crate::core::{Result, SwarmConfig};
use crate::optimization::objective::Objective;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Particle Swarm Optimization driver: a single fully-connected swarm run for a
/// fixed number of synchronized rounds, no early stopping
pub struct ParticleOptimizer {
    config: SwarmConfig,
    seed: Option<u64>,
    parallel: bool,
}

impl ParticleOptimizer {
    pub fn new(config: SwarmConfig) -> Self {
        Self {
            config,
            seed: None,
            parallel: false,
        }
    }

    /// Fix the random source; identical seeds and configs give identical runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Move particles on the rayon pool (same trajectory as the serial round)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Counts objective evaluations across threads
struct CountingObjective<'a> {
    inner: &'a dyn Objective,
    evals: AtomicUsize,
}

impl<'a> CountingObjective<'a> {
    fn new(inner: &'a dyn Objective) -> Self {
        Self {
            inner,
            evals: AtomicUsize::new(0),
        }
    }

    fn evals(&self) -> usize {
        self.evals.load(Ordering::Relaxed)
    }
}

impl Objective for CountingObjective<'_> {
    fn evaluate(&self, position: &[f64]) -> f64 {
        self.evals.fetch_add(1, Ordering::Relaxed);
        self.inner.evaluate(position)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

impl Solver for ParticleOptimizer {
    fn name(&self) -> &str {
        "PSO"
    }

    fn solve(
        &mut self,
        objective: &dyn Objective,
        callback: &mut dyn OptimizationCallback,
    ) -> Result<SolverResult> {
        self.config.validate()?;

        let objective = CountingObjective::new(objective);
        let retention = self.config.retention();
        let iterations = self.config.iterations;
        let mut rng = self.rng();

        let mut swarm = Swarm::new(self.config.swarm_size, self.config.dimension, &mut rng);

        tracing::debug!(
            objective = objective.name(),
            swarm_size = swarm.len(),
            dimension = self.config.dimension,
            iterations,
            parallel = self.parallel,
            seed = ?self.seed,
            "starting particle swarm"
        );

        if swarm.is_empty() {
            tracing::warn!("swarm is empty, nothing to optimize");
            return Ok(SolverResult {
                best: Vec::new(),
                fitness: f64::INFINITY,
                initial_fitness: None,
                iterations: 0,
                message: "Empty swarm".into(),
                cost_evals: 0,
            });
        }

        let mut initial_fitness = None;
        for iter in 1..=iterations {
            if self.parallel {
                swarm.update_parallel(&retention, &objective, &mut rng);
            } else {
                swarm.update(&retention, &objective, &mut rng);
            }

            let fitness = swarm.global_best_fitness(&objective);
            initial_fitness.get_or_insert(fitness);
            callback.on_iteration(iter, swarm.global_best(), fitness)?;
        }

        let fitness = swarm.global_best_fitness(&objective);
        let cost_evals = objective.evals();

        tracing::debug!(fitness, cost_evals, "particle swarm finished");

        Ok(SolverResult {
            best: swarm.global_best().to_vec(),
            fitness,
            initial_fitness,
            iterations,
            message: "Max iterations reached".into(),
            cost_evals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PsoError;
    use crate::optimization::callback::{NoopCallback, ProgressReporter};
    use crate::optimization::objective::{FnObjective, Rastrigin, Sphere};

    fn config(swarm_size: usize, iterations: u32) -> SwarmConfig {
        SwarmConfig {
            swarm_size,
            velocity_retention: 0.5,
            pb_retention: 0.5,
            ib_retention: None,
            gb_retention: 0.5,
            jump_size: 0.1,
            iterations,
            dimension: 2,
        }
    }

    #[test]
    fn zero_iterations_is_a_no_op() {
        let mut solver = ParticleOptimizer::new(config(10, 0)).with_seed(1);
        let mut reporter = ProgressReporter::new("sphere", 0);

        let result = solver.solve(&Sphere, &mut reporter).unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.initial_fitness, None);
        assert_eq!(result.best.len(), 2);
        assert!(reporter.history().is_empty());
    }

    #[test]
    fn zero_swarm_size_is_a_no_op() {
        let mut solver = ParticleOptimizer::new(config(0, 50)).with_seed(1);
        let result = solver.solve(&Sphere, &mut NoopCallback).unwrap();

        assert!(result.best.is_empty());
        assert_eq!(result.cost_evals, 0);
        assert_eq!(result.message, "Empty swarm");
    }

    #[test]
    fn same_seed_gives_identical_runs() {
        let run = |parallel: bool| {
            let mut solver = ParticleOptimizer::new(config(30, 60))
                .with_seed(77)
                .with_parallel(parallel);
            let mut reporter = ProgressReporter::new("rastrigin", 60);
            let result = solver.solve(&Rastrigin::default(), &mut reporter).unwrap();
            (result, reporter.history().to_vec())
        };

        let (first, first_history) = run(false);
        let (second, second_history) = run(false);
        let (parallel, parallel_history) = run(true);

        assert_eq!(first, second);
        assert_eq!(first_history, second_history);
        assert_eq!(first, parallel);
        assert_eq!(first_history, parallel_history);
    }

    #[test]
    fn callback_sees_one_call_per_round_with_monotone_fitness() {
        let mut solver = ParticleOptimizer::new(config(20, 40)).with_seed(3);
        let mut reporter = ProgressReporter::new("sphere", 40);
        solver.solve(&Sphere, &mut reporter).unwrap();

        let history = reporter.history();
        assert_eq!(history.len(), 40);
        for (i, window) in history.windows(2).enumerate() {
            assert_eq!(window[0].iteration, i as u32 + 1);
            assert!(window[1].fitness <= window[0].fitness);
        }
    }

    #[test]
    fn evaluations_are_counted() {
        let mut solver = ParticleOptimizer::new(config(5, 3)).with_seed(4);
        let result = solver.solve(&Sphere, &mut NoopCallback).unwrap();
        // per round: 2 per particle move, 2 per fittest fold, 1 for the reported fitness
        assert_eq!(result.cost_evals, 3 * (5 * 2 + 5 * 2 + 1) + 1);
    }

    #[test]
    fn custom_objective_is_minimized() {
        let shifted = FnObjective::new("shifted", |x: &[f64]| {
            x.iter().map(|v| (v - 1.5).powi(2)).sum()
        });
        let mut solver = ParticleOptimizer::new(config(40, 150)).with_seed(12);
        let result = solver.solve(&shifted, &mut NoopCallback).unwrap();
        assert!(result.fitness < 5e-2, "fitness {}", result.fitness);
    }

    #[test]
    fn callback_errors_abort_the_run() {
        struct Interrupt;
        impl OptimizationCallback for Interrupt {
            fn on_iteration(&mut self, iteration: u32, _: &[f64], _: f64) -> Result<()> {
                if iteration == 2 {
                    return Err(PsoError::Callback {
                        iteration,
                        message: "interrupted".into(),
                    });
                }
                Ok(())
            }
        }

        let mut solver = ParticleOptimizer::new(config(5, 10)).with_seed(4);
        let err = solver.solve(&Sphere, &mut Interrupt).unwrap_err();
        assert!(matches!(err, PsoError::Callback { iteration: 2, .. }));
    }

    #[test]
    fn invalid_config_is_reported_before_running() {
        let mut bad = config(5, 10);
        bad.gb_retention = f64::NAN;
        let mut solver = ParticleOptimizer::new(bad);
        assert!(matches!(
            solver.solve(&Sphere, &mut NoopCallback),
            Err(PsoError::InvalidConfig(_))
        ));
    }
}
