use crate::core::vector::{self, Vector};
use crate::core::Retention;
use crate::optimization::objective::Objective;
use rand::Rng;
use std::fmt;

/// The three random weights a particle draws for one update.
///
/// Drawn once per particle per iteration (not per dimension), in the order
/// velocity, personal best, global best.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pull {
    pub velocity: f64,
    pub personal_best: f64,
    pub global_best: f64,
}

impl Pull {
    /// Each weight is Uniform(0, coefficient). Always consumes exactly three draws.
    pub fn draw<R: Rng + ?Sized>(retention: &Retention, rng: &mut R) -> Self {
        let velocity = retention.velocity * rng.r#gen::<f64>();
        let personal_best = retention.personal_best * rng.r#gen::<f64>();
        let global_best = retention.global_best * rng.r#gen::<f64>();
        Self {
            velocity,
            personal_best,
            global_best,
        }
    }
}

/// One candidate solution in the swarm
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    position: Vector,
    velocity: Vector,
    personal_best: Vector,
}

impl Particle {
    /// Random position and velocity inside the search box
    pub fn new<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Self {
        let position = vector::random_vector(dimension, rng);
        let velocity = vector::random_vector(dimension, rng);
        Self::with_state(position, velocity)
    }

    /// Start from a known state; the personal best is a copy of `position`
    pub fn with_state(position: Vector, velocity: Vector) -> Self {
        debug_assert_eq!(position.len(), velocity.len(), "dimension mismatch");
        Self {
            personal_best: position.clone(),
            position,
            velocity,
        }
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn personal_best(&self) -> &[f64] {
        &self.personal_best
    }

    pub fn dimension(&self) -> usize {
        self.position.len()
    }

    /// Draw this round's weights and move towards the personal and global bests
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        global_best: &[f64],
        retention: &Retention,
        objective: &dyn Objective,
        rng: &mut R,
    ) {
        let pull = Pull::draw(retention, rng);
        self.apply(pull, global_best, retention.jump_size, objective);
    }

    /// Deterministic half of the update, given already-drawn weights
    pub fn apply(
        &mut self,
        pull: Pull,
        global_best: &[f64],
        jump_size: f64,
        objective: &dyn Objective,
    ) {
        let inertia = vector::scale(&self.velocity, pull.velocity);
        let cognitive = vector::sub(&self.personal_best, &self.position);
        let social = vector::sub(global_best, &self.position);

        let velocity = vector::scaled_add(
            &vector::scaled_add(&inertia, pull.personal_best, &cognitive),
            pull.global_best,
            &social,
        );
        self.position = vector::scaled_add(&self.position, jump_size, &velocity);
        self.velocity = velocity;

        if objective.evaluate(&self.position) < objective.evaluate(&self.personal_best) {
            self.personal_best.copy_from_slice(&self.position);
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle(position={:?}, velocity={:?})",
            self.position, self.velocity
        )
    }
}
