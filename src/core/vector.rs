//! Elementwise arithmetic over fixed-dimension real vectors.
//!
//! Every numeric step of the particle update goes through these helpers so the
//! dimension checks live in one place.

use rand::Rng;

/// Half-width of the sampling box used for positions and velocities.
///
/// Matches the conventional Rastrigin/sphere range; it is not tuned per objective.
pub const SEARCH_DOMAIN: f64 = 5.12;

pub type Vector = Vec<f64>;

/// Draw `size` components independently from Uniform[-5.12, 5.12]
pub fn random_vector<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vector {
    (0..size)
        .map(|_| rng.gen_range(-SEARCH_DOMAIN..=SEARCH_DOMAIN))
        .collect()
}

#[inline]
pub fn add(a: &[f64], b: &[f64]) -> Vector {
    debug_assert_eq!(a.len(), b.len(), "dimension mismatch");
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

#[inline]
pub fn sub(a: &[f64], b: &[f64]) -> Vector {
    debug_assert_eq!(a.len(), b.len(), "dimension mismatch");
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

#[inline]
pub fn scale(a: &[f64], k: f64) -> Vector {
    a.iter().map(|x| k * x).collect()
}

/// `a + k * b`
#[inline]
pub fn scaled_add(a: &[f64], k: f64, b: &[f64]) -> Vector {
    debug_assert_eq!(a.len(), b.len(), "dimension mismatch");
    a.iter().zip(b).map(|(x, y)| x + k * y).collect()
}
