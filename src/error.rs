//! Error types.
//!
//! Misconfiguration is the only failure mode: a run either validates and
//! completes every generation, or is rejected before the first one.

/// Rejected configuration. Raised before any generation runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("InvalidBounds: lower bound must not exceed upper. min = {min}, max = {max}")]
    InvalidBounds { min: i32, max: i32 },
    #[error("population_size must be at least 1")]
    EmptyPopulation,
    #[error("{name} must be between 0.0 and 1.0, got: {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("max_generations must be at least 1")]
    NoGenerations,
    #[error("tournament_size must be at least 1")]
    ZeroTournament,
    #[error("tournament_size {size} exceeds population_size {population}")]
    TournamentTooLarge { size: usize, population: usize },
}

impl ConfigError {
    pub(crate) fn rate(name: &'static str, value: f64) -> Self {
        Self::RateOutOfRange { name, value }
    }
}

/// A tournament was requested that the population cannot field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tournament size {size} is invalid for a population of {population}")]
pub struct TournamentSizeError {
    pub size: usize,
    pub population: usize,
}

/// Any error surfaced by a GA run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Selection error: {0}")]
    Tournament(#[from] TournamentSizeError),
}
