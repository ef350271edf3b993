//! Genetic algorithm for integer solutions of linear equations.
//!
//! Searches integer triples `(x, y, z)` that minimize the residual
//! `|a·x + b·y + c·z − d|`. A residual of zero is an exact solution.
//!
//! - [`ga`]: Domain-agnostic evolutionary engine — population ranking,
//!   tournament selection, uniform crossover, bounded mutation, elitism
//!   and the generational loop.
//! - [`equation`]: The linear-equation problem plugged into the engine,
//!   plus a convenience [`equation::solve`] entry point.
//!
//! # Example
//!
//! ```
//! use lineq_ga::equation::{solve, Coefficients};
//! use lineq_ga::ga::{GaConfig, GeneBounds};
//!
//! let coefficients = Coefficients::new(3, 5, 2, 14);
//! let bounds = GeneBounds::new(-100, 100).unwrap();
//! let config = GaConfig::default().with_seed(7).with_max_generations(200);
//!
//! let result = solve(coefficients, bounds, &config).unwrap();
//! assert!(result.best_fitness >= 0.0);
//! ```
//!
//! # Architecture
//!
//! The engine never prints. Progress reporting plugs in through
//! [`ga::Observer`]; the default run is headless.

pub mod equation;
pub mod error;
pub mod ga;
pub mod random;

pub use error::{ConfigError, GaError, TournamentSizeError};
