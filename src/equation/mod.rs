//! Integer solutions of `a·x + b·y + c·z = d`.
//!
//! [`LinearEquation`] plugs the equation into the generic [`ga`](crate::ga)
//! engine. Individuals are [`Triple`]s of bounded `i32` genes, recombined
//! with uniform crossover and perturbed by bounded mutation.
//!
//! ```
//! use lineq_ga::equation::{solve, Coefficients};
//! use lineq_ga::ga::{GaConfig, GeneBounds};
//!
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_max_generations(50)
//!     .with_seed(42);
//! let result = solve(Coefficients::new(1, 0, 0, 5), GeneBounds::new(-10, 10)?, &config)?;
//! assert_eq!(result.best.x(), 5);
//! # Ok::<(), lineq_ga::GaError>(())
//! ```

mod problem;
mod solution;

pub use problem::{Coefficients, LinearEquation, Triple, DEFAULT_MUTATION_STEP};
pub use solution::Solution;

use crate::error::GaError;
use crate::ga::{GaConfig, GaResult, GaRunner, Observer};

/// Runs the GA on `a·x + b·y + c·z = d` with the default mutation step.
pub fn solve(
    coefficients: Coefficients,
    bounds: crate::ga::GeneBounds,
    config: &GaConfig,
) -> Result<GaResult<Triple, f64>, GaError> {
    let problem = LinearEquation::new(coefficients, bounds);
    GaRunner::run(&problem, config)
}

/// Like [`solve`], reporting each generation to `observer`.
pub fn solve_with_observer<O: Observer<Triple, f64>>(
    coefficients: Coefficients,
    bounds: crate::ga::GeneBounds,
    config: &GaConfig,
    observer: &mut O,
) -> Result<GaResult<Triple, f64>, GaError> {
    let problem = LinearEquation::new(coefficients, bounds);
    GaRunner::run_with_observer(&problem, config, observer)
}
