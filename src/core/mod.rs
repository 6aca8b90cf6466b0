pub mod error;
pub mod types;
pub mod vector;

pub use error::{PsoError, Result};
pub use types::*;
pub use vector::{Vector, random_vector};
