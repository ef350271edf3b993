//! Genetic Algorithm framework.
//!
//! A generic, domain-agnostic GA engine built on trait-based abstractions.
//! Users define their problem by implementing [`GaProblem`], which specifies
//! how to create, evaluate, crossover, and mutate individuals, and which
//! fitness counts as an exact solution.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, elitism)
//! - [`Population`]: One generation, evaluated and ranked best first
//! - [`Tournament`]: Parent selection without replacement
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best solution, final status and per-generation history
//! - [`Observer`]: Receives each [`GenerationRecord`] as it is produced
//!
//! # Submodules
//!
//! - [`operators`]: Uniform crossover and bounded mutation on integer arrays
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod bounds;
mod config;
mod history;
mod observer;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use bounds::GeneBounds;
pub use config::GaConfig;
pub use history::{GenerationRecord, SearchState, Status};
pub use observer::{NoopObserver, Observer, TracingObserver};
pub use population::{initialize, Evaluation, Population};
pub use runner::{GaResult, GaRunner};
pub use selection::Tournament;
pub use types::{Fitness, GaProblem};
