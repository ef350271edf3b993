//! Generation observers.
//!
//! The runner hands every [`GenerationRecord`] to an [`Observer`] as soon
//! as the generation is ranked. Observers see data; they cannot change the
//! search.

use super::history::GenerationRecord;
use super::types::Fitness;

pub trait Observer<I, F> {
    fn on_generation(&mut self, record: &GenerationRecord<I, F>);
}

/// Discards every record. Used for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<I, F> Observer<I, F> for NoopObserver {
    fn on_generation(&mut self, _record: &GenerationRecord<I, F>) {}
}

/// Emits a `tracing` progress event every `interval` generations.
///
/// Generation 0 is always reported.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    interval: usize,
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self { interval: 50 }
    }
}

impl TracingObserver {
    /// `interval` of 0 is treated as 1.
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
        }
    }

    pub fn reports(&self, generation: usize) -> bool {
        generation % self.interval == 0
    }
}

impl<I: std::fmt::Debug, F: Fitness> Observer<I, F> for TracingObserver {
    fn on_generation(&mut self, record: &GenerationRecord<I, F>) {
        if !self.reports(record.generation) {
            return;
        }
        tracing::info!(
            message = "Generation progress",
            generation = record.generation,
            best_fitness = record.best_fitness.to_f64(),
            mean_fitness = record.mean_fitness,
            best_individual = ?record.best_individual,
        );
    }
}

impl<I, F, T: FnMut(&GenerationRecord<I, F>)> Observer<I, F> for T {
    fn on_generation(&mut self, record: &GenerationRecord<I, F>) {
        self(record)
    }
}
