//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Tournament;
use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, operator rates, selection pressure, elitism,
/// the generation limit, and parallelism.
///
/// # Defaults
///
/// ```
/// use lineq_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.elite_count, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use lineq_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(150)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.1)
///     .with_max_generations(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Constant across generations.
    pub population_size: usize,

    /// Generation limit. The run is exhausted after this many generations.
    pub max_generations: usize,

    /// Probability that a pair of parents is recombined (0.0–1.0).
    ///
    /// When crossover is not applied, the children are copies of the parents.
    pub crossover_rate: f64,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Parent selection.
    pub tournament: Tournament,

    /// Number of top-ranked individuals copied unchanged to the next generation.
    pub elite_count: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Ignored unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a random seed; the seed used is logged.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            tournament: Tournament::default(),
            elite_count: 2,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate. Out-of-range values fail [`validate`](Self::validate).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate. Out-of-range values fail [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament = Tournament::new(k);
        self
    }

    /// Sets the number of elites carried over each generation.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Small, quick search.
    ///
    /// - Population: 100, Generations: 300
    /// - Crossover: 0.9, Mutation: 0.05
    pub fn fast() -> Self {
        Self {
            population_size: 100,
            max_generations: 300,
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            ..Self::default()
        }
    }

    /// Moderate population and generation count.
    ///
    /// - Population: 150, Generations: 500
    /// - Crossover: 0.8, Mutation: 0.1
    pub fn balanced() -> Self {
        Self {
            population_size: 150,
            max_generations: 500,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            ..Self::default()
        }
    }

    /// Larger population, more generations, more mutation.
    ///
    /// - Population: 200, Generations: 600
    /// - Crossover: 0.85, Mutation: 0.15
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            max_generations: 600,
            crossover_rate: 0.85,
            mutation_rate: 0.15,
            ..Self::default()
        }
    }

    /// Elites actually carried over; never more than the population.
    pub fn effective_elite_count(&self) -> usize {
        self.elite_count.min(self.population_size)
    }

    /// Validates the configuration.
    ///
    /// The tournament is only checked against the population when offspring
    /// are bred, i.e. when elites do not already fill every slot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::rate("crossover_rate", self.crossover_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::rate("mutation_rate", self.mutation_rate));
        }
        if self.effective_elite_count() < self.population_size {
            let size = self.tournament.size();
            if size == 0 {
                return Err(ConfigError::ZeroTournament);
            }
            if size > self.population_size {
                return Err(ConfigError::TournamentTooLarge {
                    size,
                    population: self.population_size,
                });
            }
        }
        Ok(())
    }
}
