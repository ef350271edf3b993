//! Evaluated, ranked populations.

use super::types::{Fitness, GaProblem};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An individual paired with its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<I, F> {
    pub individual: I,
    pub fitness: F,
}

/// A population evaluated in one pass and sorted ascending by fitness.
///
/// Sorting is stable: individuals with equal fitness keep the order they
/// had before evaluation, so rank position is a deterministic tie-break.
#[derive(Debug, Clone)]
pub struct Population<I, F> {
    ranked: Vec<Evaluation<I, F>>,
}

/// Creates `size` random individuals. No evaluation happens here.
pub fn initialize<P: GaProblem, R: Rng>(problem: &P, size: usize, rng: &mut R) -> Vec<P::Individual> {
    (0..size).map(|_| problem.create_individual(rng)).collect()
}

impl<I, F: Fitness> Population<I, F> {
    /// Evaluates every individual and ranks them best first.
    ///
    /// With `parallel` set (and the `parallel` feature enabled) evaluation
    /// fans out over rayon. Results are gathered in input order before the
    /// sort, so both paths produce the same ranking.
    pub fn rank<P>(problem: &P, individuals: Vec<I>, parallel: bool) -> Self
    where
        P: GaProblem<Individual = I, Fitness = F>,
        I: Clone + Send + Sync + std::fmt::Debug,
    {
        let fitnesses = evaluate_all(problem, &individuals, parallel);

        let mut ranked: Vec<Evaluation<I, F>> = individuals
            .into_iter()
            .zip(fitnesses)
            .map(|(individual, fitness)| Evaluation { individual, fitness })
            .collect();
        ranked.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));

        Self { ranked }
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// The lowest-fitness evaluation, or `None` for an empty population.
    pub fn best(&self) -> Option<&Evaluation<I, F>> {
        self.ranked.first()
    }

    /// Arithmetic mean of all fitness values. `0.0` when empty.
    pub fn mean_fitness(&self) -> f64 {
        if self.ranked.is_empty() {
            return 0.0;
        }
        let total: f64 = self.ranked.iter().map(|e| e.fitness.to_f64()).sum();
        total / self.ranked.len() as f64
    }

    /// The top `k` evaluations (fewer if the population is smaller).
    pub fn elites(&self, k: usize) -> &[Evaluation<I, F>] {
        &self.ranked[..k.min(self.ranked.len())]
    }

    pub fn as_slice(&self) -> &[Evaluation<I, F>] {
        &self.ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = &Evaluation<I, F>> {
        self.ranked.iter()
    }

    /// Drops the fitness values, keeping rank order.
    pub fn into_individuals(self) -> Vec<I> {
        self.ranked.into_iter().map(|e| e.individual).collect()
    }
}

fn evaluate_all<P: GaProblem>(problem: &P, individuals: &[P::Individual], parallel: bool) -> Vec<P::Fitness> {
    #[cfg(feature = "parallel")]
    if parallel {
        return individuals.par_iter().map(|ind| problem.evaluate(ind)).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    individuals.iter().map(|ind| problem.evaluate(ind)).collect()
}
