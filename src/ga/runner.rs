//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → ranking → selection → crossover →
//! mutation → repeat, until an exact solution appears or the generation
//! limit is hit.

use super::config::GaConfig;
use super::history::{GenerationRecord, SearchState, Status};
use super::observer::{NoopObserver, Observer};
use super::population::{initialize, Population};
use super::types::{Fitness, GaProblem};
use crate::error::{ConfigError, GaError};
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::instrument;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I, F> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Fitness of `best`; the minimum observed over all generations.
    pub best_fitness: F,

    /// `Converged` or `Exhausted`.
    pub status: Status,

    /// Total number of generations executed.
    pub generations: usize,

    /// One record per completed generation, in order.
    pub history: Vec<GenerationRecord<I, F>>,

    /// The last ranked population.
    pub population: Population<I, F>,
}

impl<I, F: Fitness> GaResult<I, F> {
    /// Whether the run stopped on an exact solution.
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// `(generation, best fitness, mean fitness)` columns, for plotting.
    pub fn fitness_series(&self) -> Vec<(usize, f64, f64)> {
        self.history
            .iter()
            .map(|r| (r.generation, r.best_fitness.to_f64(), r.mean_fitness))
            .collect()
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization without observing progress.
    ///
    /// # Errors
    /// Returns [`GaError::Config`] if the configuration is invalid. Nothing
    /// has been evaluated at that point.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual, P::Fitness>, GaError> {
        Self::run_with_observer(problem, config, &mut NoopObserver)
    }

    /// Runs the GA, reporting every generation to `observer`.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population_size = config.population_size,
            max_generations = config.max_generations
        )
    )]
    pub fn run_with_observer<P, O>(
        problem: &P,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult<P::Individual, P::Fitness>, GaError>
    where
        P: GaProblem,
        O: Observer<P::Individual, P::Fitness>,
    {
        config.validate()?;

        let (mut rng, seed) = rng_from_seed(config.seed);
        tracing::info!(message = "Starting evolution", seed = seed);

        // 1. Initialize population
        let mut individuals = initialize(problem, config.population_size, &mut rng);

        let mut state = SearchState::new();
        let mut history = Vec::with_capacity(config.max_generations);
        let mut generation = 0usize;

        // 2. Evolutionary loop
        let (population, status) = loop {
            let ranked = Population::rank(problem, individuals, config.parallel);
            let champion = ranked.best().ok_or(ConfigError::EmptyPopulation)?;

            if state.merge(&champion.individual, champion.fitness) {
                tracing::debug!(
                    message = "New best",
                    generation = generation,
                    best_fitness = champion.fitness.to_f64()
                );
            }

            let record = GenerationRecord {
                generation,
                best_fitness: champion.fitness,
                mean_fitness: ranked.mean_fitness(),
                best_individual: champion.individual.clone(),
            };
            tracing::trace!(
                generation = generation,
                best_fitness = record.best_fitness.to_f64(),
                mean_fitness = record.mean_fitness
            );
            observer.on_generation(&record);
            history.push(record);

            if problem.is_solution(champion.fitness) {
                tracing::info!(message = "Exact solution found", generation = generation);
                break (ranked, Status::Converged);
            }
            if generation + 1 >= config.max_generations {
                tracing::info!(
                    message = "Generation limit reached",
                    generations = config.max_generations,
                    best_fitness = state.best_fitness().to_f64()
                );
                break (ranked, Status::Exhausted);
            }

            individuals = Self::next_generation(problem, &ranked, config, &mut rng)?;
            generation += 1;
        };

        let (best, best_fitness) = state.into_best().ok_or(ConfigError::EmptyPopulation)?;

        Ok(GaResult {
            best,
            best_fitness,
            status,
            generations: history.len(),
            history,
            population,
        })
    }

    /// Breeds the population that follows `ranked`.
    ///
    /// The top `elite_count` individuals are copied unchanged. The rest are
    /// bred in pairs: two tournament winners, crossed over, each child
    /// mutated. The result is truncated to exactly `population_size`.
    ///
    /// # Errors
    /// [`GaError::Tournament`] if the tournament cannot be run on `ranked`.
    pub fn next_generation<P: GaProblem, R: Rng>(
        problem: &P,
        ranked: &Population<P::Individual, P::Fitness>,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<Vec<P::Individual>, GaError> {
        let target = config.population_size;

        // Elite preservation
        let mut next: Vec<P::Individual> = Vec::with_capacity(target + 1);
        next.extend(
            ranked
                .elites(config.effective_elite_count())
                .iter()
                .map(|e| e.individual.clone()),
        );

        // Generate offspring
        while next.len() < target {
            let parent1 = config.tournament.select(ranked, rng)?;
            let parent2 = config.tournament.select(ranked, rng)?;

            let (child1, child2) = problem.crossover(&parent1, &parent2, config.crossover_rate, rng);

            next.push(problem.mutate(&child1, config.mutation_rate, rng));
            next.push(problem.mutate(&child2, config.mutation_rate, rng));
        }

        next.truncate(target);
        Ok(next)
    }
}

// ============================================================================
// Tests
// ============================================================================
