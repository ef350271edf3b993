//! Per-generation records and the best-ever search state.

use super::types::Fitness;
use std::cmp::Ordering;

/// Statistics of one completed generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord<I, F> {
    /// Zero-based generation index.
    pub generation: usize,

    /// Lowest fitness in this generation. May be worse than an earlier one.
    pub best_fitness: F,

    /// Mean fitness over the whole generation.
    pub mean_fitness: f64,

    /// The individual holding `best_fitness`.
    pub best_individual: I,
}

/// Best individual observed across all generations.
///
/// `best_fitness` never increases: [`merge`](Self::merge) only accepts a
/// strictly lower fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<I, F> {
    best: Option<I>,
    best_fitness: F,
}

impl<I: Clone, F: Fitness> Default for SearchState<I, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Clone, F: Fitness> SearchState<I, F> {
    /// An empty state with the worst possible fitness.
    pub fn new() -> Self {
        Self {
            best: None,
            best_fitness: F::worst(),
        }
    }

    /// Records `candidate` if it beats the current best.
    ///
    /// Returns `true` when the state changed.
    pub fn merge(&mut self, candidate: &I, fitness: F) -> bool {
        if self.best.is_some() && fitness.partial_cmp(&self.best_fitness) != Some(Ordering::Less) {
            return false;
        }
        self.best = Some(candidate.clone());
        self.best_fitness = fitness;
        true
    }

    pub fn best(&self) -> Option<&I> {
        self.best.as_ref()
    }

    pub fn best_fitness(&self) -> F {
        self.best_fitness
    }

    pub fn into_best(self) -> Option<(I, F)> {
        let fitness = self.best_fitness;
        self.best.map(|best| (best, fitness))
    }
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// A generation champion is an exact solution.
    Converged,
    /// The generation limit was reached without an exact solution.
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_merge_always_accepted() {
        let mut state: SearchState<&str, f64> = SearchState::new();
        assert!(state.best().is_none());
        assert!(state.merge(&"a", 12.0));
        assert_eq!(state.best(), Some(&"a"));
        assert_eq!(state.best_fitness(), 12.0);
    }

    #[test]
    fn test_first_merge_accepts_worst_value() {
        let mut state: SearchState<&str, u64> = SearchState::new();
        assert!(state.merge(&"a", u64::MAX));
        assert_eq!(state.best(), Some(&"a"));
    }

    #[test]
    fn test_merge_is_monotonic() {
        let mut state: SearchState<&str, f64> = SearchState::new();
        state.merge(&"a", 5.0);
        assert!(!state.merge(&"b", 7.0), "worse must not overwrite");
        assert!(!state.merge(&"c", 5.0), "equal must not overwrite");
        assert!(state.merge(&"d", 2.0));
        assert_eq!(state.into_best(), Some(("d", 2.0)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let record = GenerationRecord {
            generation: 3,
            best_fitness: 2.0,
            mean_fitness: 7.5,
            best_individual: [1, 2, 3],
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: GenerationRecord<[i32; 3], f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [Status::Converged, Status::Exhausted] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), status);
        }
        assert_eq!(serde_json::to_string(&Status::Converged).unwrap(), r#""Converged""#);
        assert!(serde_json::from_str::<Status>(r#""Running""#).is_err());
    }
}
