use super::particle::{Particle, Pull};
use crate::core::vector::Vector;
use crate::core::Retention;
use crate::optimization::objective::{fittest, Objective};
use rand::Rng;
use rayon::prelude::*;
use std::fmt;
use std::ops::Index;

/// Fully-connected swarm sharing a single global best
#[derive(Clone, Debug)]
pub struct Swarm {
    particles: Vec<Particle>,
    global_best: Vector,
}

impl Swarm {
    /// `size` independent particles. The global best starts as the first
    /// particle's initial position (empty for an empty swarm) and is only
    /// reconciled by fitness on the first `update`.
    pub fn new<R: Rng + ?Sized>(size: usize, dimension: usize, rng: &mut R) -> Self {
        let particles: Vec<Particle> = (0..size).map(|_| Particle::new(dimension, rng)).collect();
        Self::from_particles(particles)
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        let global_best = particles
            .first()
            .map(|p| p.position().to_vec())
            .unwrap_or_default();
        Self {
            particles,
            global_best,
        }
    }

    pub fn global_best(&self) -> &[f64] {
        &self.global_best
    }

    pub fn global_best_fitness(&self, objective: &dyn Objective) -> f64 {
        objective.evaluate(&self.global_best)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// One synchronized round.
    ///
    /// Every particle moves against the global best as it stood at the start of
    /// the round; the global best is recomputed only once all particles moved.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        retention: &Retention,
        objective: &dyn Objective,
        rng: &mut R,
    ) {
        for particle in &mut self.particles {
            particle.update(&self.global_best, retention, objective, rng);
        }
        self.reconcile_global_best(objective);
    }

    /// Same round as [`Swarm::update`] with the particle moves spread over rayon.
    ///
    /// Weights are drawn serially in particle order first, so the trajectory is
    /// identical to the serial round for the same generator state.
    pub fn update_parallel<R: Rng + ?Sized>(
        &mut self,
        retention: &Retention,
        objective: &dyn Objective,
        rng: &mut R,
    ) {
        let pulls: Vec<Pull> = (0..self.particles.len())
            .map(|_| Pull::draw(retention, rng))
            .collect();

        let global_best = &self.global_best;
        let jump_size = retention.jump_size;
        self.particles
            .par_iter_mut()
            .zip(pulls.into_par_iter())
            .for_each(|(particle, pull)| particle.apply(pull, global_best, jump_size, objective));

        self.reconcile_global_best(objective);
    }

    fn reconcile_global_best(&mut self, objective: &dyn Objective) {
        let mut best: &[f64] = &self.global_best;
        for particle in &self.particles {
            best = fittest(objective, best, particle.position());
        }
        self.global_best = best.to_vec();
        tracing::trace!(global_best = ?self.global_best, "global best reconciled");
    }
}

impl Index<usize> for Swarm {
    type Output = Particle;

    fn index(&self, index: usize) -> &Particle {
        &self.particles[index]
    }
}

impl<'a> IntoIterator for &'a Swarm {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

impl fmt::Display for Swarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Swarm(size={}, population=[", self.len())?;
        for (i, particle) in self.particles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", particle)?;
        }
        write!(f, "])")
    }
}
