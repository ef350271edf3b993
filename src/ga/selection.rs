//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::population::Population;
use super::types::Fitness;
use crate::error::TournamentSizeError;
use rand::seq::index;
use rand::Rng;

/// Tournament selection: sample `size` distinct individuals, keep the best.
///
/// Higher `size` = stronger selection pressure.
/// - 2: light pressure (good for diversity)
/// - 3-5: moderate pressure (typical default)
/// - equal to the population: always the current best
///
/// # Examples
///
/// ```
/// use lineq_ga::ga::Tournament;
///
/// let tournament = Tournament::new(3);
/// assert_eq!(tournament.size(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tournament {
    size: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Self { size: 3 }
    }
}

impl Tournament {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a copy of the tournament winner.
    ///
    /// Contestants are drawn without replacement. The population is ranked,
    /// so the winner is the contestant with the lowest rank position; among
    /// equal fitness that is the one that came first before ranking.
    ///
    /// # Errors
    /// [`TournamentSizeError`] if `size` is zero or exceeds the population.
    ///
    /// # Complexity
    /// O(size) per selection
    pub fn select<I: Clone, F: Fitness, R: Rng>(
        &self,
        population: &Population<I, F>,
        rng: &mut R,
    ) -> Result<I, TournamentSizeError> {
        let n = population.len();
        if self.size == 0 || self.size > n {
            return Err(TournamentSizeError {
                size: self.size,
                population: n,
            });
        }

        let winner = index::sample(rng, n, self.size)
            .into_iter()
            .min()
            .ok_or(TournamentSizeError {
                size: self.size,
                population: n,
            })?;

        Ok(population.as_slice()[winner].individual.clone())
    }
}
