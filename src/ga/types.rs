//! Core trait definitions for the GA framework.
//!
//! [`GaProblem`] is the contract between the generic engine and a
//! domain-specific problem. Individuals are plain values: the engine pairs
//! them with their fitness in [`Evaluation`](super::Evaluation) instead of
//! storing fitness inside them.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Lower fitness is considered better (minimization).
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used to seed the search state before any individual is seen.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;

    /// Total ordering used for ranking. Ties compare `Equal`.
    fn total_cmp(&self, other: &Self) -> std::cmp::Ordering;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        f64::total_cmp(self, other)
    }
}

impl Fitness for u64 {
    fn worst() -> Self {
        u64::MAX
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cmp(other)
    }
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: How to create random individuals
/// 2. **Evaluation**: How to compute fitness
/// 3. **Crossover**: How to recombine two parents
/// 4. **Mutation**: How to perturb an individual
/// 5. **Termination**: Which fitness counts as an exact solution
///
/// Operators take the individual by reference and return new values, so
/// a child never aliases the storage of its parent.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Clone + Send + Sync + std::fmt::Debug;

    /// The fitness type. Lower is better.
    type Fitness: Fitness;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Must be pure: no RNG, no shared state.
    fn evaluate(&self, individual: &Self::Individual) -> Self::Fitness;

    /// Recombines two parents into two children.
    ///
    /// `rate` is the probability that recombination happens at all.
    /// The default implementation returns copies of the parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rate: f64,
        _rng: &mut R,
    ) -> (Self::Individual, Self::Individual) {
        (parent1.clone(), parent2.clone())
    }

    /// Returns a mutated copy of `individual`.
    ///
    /// `rate` is the per-gene mutation probability.
    /// The default implementation returns an unchanged copy.
    fn mutate<R: Rng>(
        &self,
        individual: &Self::Individual,
        _rate: f64,
        _rng: &mut R,
    ) -> Self::Individual {
        individual.clone()
    }

    /// Whether `fitness` is an exact solution that ends the search.
    ///
    /// The default never converges; the run ends at the generation limit.
    fn is_solution(&self, _fitness: Self::Fitness) -> bool {
        false
    }
}
