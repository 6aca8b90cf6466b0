//! Objective functions scored by the swarm (lower is better).
//!
//! Reference functions: <https://en.wikipedia.org/wiki/Test_functions_for_optimization>

use crate::core::{PsoError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Scalar fitness over a position. Must be pure and deterministic.
pub trait Objective: Send + Sync {
    fn evaluate(&self, position: &[f64]) -> f64;

    fn name(&self) -> &str;
}

/// Σ xᵢ², minimum 0 at the origin
#[derive(Clone, Copy, Debug, Default)]
pub struct Sphere;

impl Objective for Sphere {
    fn evaluate(&self, position: &[f64]) -> f64 {
        position.iter().map(|x| x * x).sum()
    }

    fn name(&self) -> &str {
        "sphere"
    }
}

/// Curved valley over consecutive pairs, minimum 0 at the all-ones vector
#[derive(Clone, Copy, Debug, Default)]
pub struct Rosenbrock;

impl Objective for Rosenbrock {
    fn evaluate(&self, position: &[f64]) -> f64 {
        position
            .windows(2)
            .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (w[0] - 1.0).powi(2))
            .sum()
    }

    fn name(&self) -> &str {
        "rosenbrock"
    }
}

/// Highly multimodal, minimum 0 at the origin
#[derive(Clone, Copy, Debug)]
pub struct Rastrigin {
    pub a: f64,
}

impl Default for Rastrigin {
    fn default() -> Self {
        Self { a: 10.0 }
    }
}

impl Objective for Rastrigin {
    fn evaluate(&self, position: &[f64]) -> f64 {
        self.a * position.len() as f64
            + position
                .iter()
                .map(|x| x * x - self.a * (2.0 * PI * x).cos())
                .sum::<f64>()
    }

    fn name(&self) -> &str {
        "rastrigin"
    }
}

/// Adapter for caller-supplied closures
pub struct FnObjective<F> {
    name: String,
    f: F,
}

impl<F> FnObjective<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Objective for FnObjective<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, position: &[f64]) -> f64 {
        (self.f)(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Pick the fitter of two positions; ties go to `p1`.
///
/// Both sides are re-evaluated on every call.
pub fn fittest<'a>(objective: &dyn Objective, p1: &'a [f64], p2: &'a [f64]) -> &'a [f64] {
    let f1 = objective.evaluate(p1);
    let f2 = objective.evaluate(p2);
    if f2 < f1 { p2 } else { p1 }
}

/// Built-in objectives selectable by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveKind {
    Sphere,
    Rosenbrock,
    Rastrigin,
}

impl ObjectiveKind {
    pub fn into_objective(self) -> Box<dyn Objective> {
        match self {
            Self::Sphere => Box::new(Sphere),
            Self::Rosenbrock => Box::new(Rosenbrock),
            Self::Rastrigin => Box::new(Rastrigin::default()),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Rosenbrock => "rosenbrock",
            Self::Rastrigin => "rastrigin",
        }
    }
}

impl fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectiveKind {
    type Err = PsoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sphere" => Ok(Self::Sphere),
            "rosenbrock" => Ok(Self::Rosenbrock),
            "rastrigin" => Ok(Self::Rastrigin),
            _ => Err(PsoError::UnknownObjective(s.to_string())),
        }
    }
}
