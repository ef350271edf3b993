//! Genetic operators for fixed-length integer chromosomes.
//!
//! These operate on `[G; N]` gene arrays and are domain-agnostic: any
//! problem whose individuals are a fixed number of bounded integers can
//! use them.
//!
//! - [`uniform_crossover`]: per-gene fair coin swap between two parents — O(N)
//! - [`bounded_mutation`]: per-gene random perturbation, clamped to bounds — O(N)
//!
//! Both return fresh arrays. Inputs are never modified.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::bounds::GeneBounds;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Uniform crossover.
///
/// With probability `1 - rate` the children are plain copies of the
/// parents. Otherwise each position is swapped between the two children
/// with probability 0.5, independently.
///
/// Children only ever hold values taken from the parents at the same
/// position, so bounds that held for the parents hold for the children.
///
/// # Complexity
/// O(N) time, one draw for the rate plus one per gene when recombining
pub fn uniform_crossover<G: Copy, const N: usize, R: Rng>(
    parent1: &[G; N],
    parent2: &[G; N],
    rate: f64,
    rng: &mut R,
) -> ([G; N], [G; N]) {
    let mut child1 = *parent1;
    let mut child2 = *parent2;

    if rng.random::<f64>() >= rate {
        return (child1, child2);
    }

    for i in 0..N {
        if rng.random_bool(0.5) {
            std::mem::swap(&mut child1[i], &mut child2[i]);
        }
    }

    (child1, child2)
}

// ============================================================================
// Mutation
// ============================================================================

/// Bounded perturbation mutation.
///
/// Each gene is independently selected with probability `rate`; a selected
/// gene gets a uniform offset from `[-step, step]` added and the result is
/// clamped into `bounds`. Unselected genes are copied unchanged.
///
/// A `rate` outside `[0, 1]` is clamped and NaN counts as 0.
/// [`GaConfig::validate`](super::GaConfig::validate) rejects both before a
/// run starts.
pub fn bounded_mutation<const N: usize, R: Rng>(
    genes: &[i32; N],
    rate: f64,
    step: u32,
    bounds: GeneBounds,
    rng: &mut R,
) -> [i32; N] {
    let mut mutated = *genes;
    if rate.is_nan() || rate <= 0.0 {
        return mutated;
    }
    let rate = rate.min(1.0);

    for gene in mutated.iter_mut() {
        if rng.random_bool(rate) {
            let offset = rng.random_range(-(step as i64)..=step as i64);
            *gene = bounds.clamp(*gene as i64 + offset);
        }
    }

    mutated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_crossover_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        let p1 = [1, 2, 3];
        let p2 = [4, 5, 6];
        for _ in 0..500 {
            let (c1, c2) = uniform_crossover(&p1, &p2, 0.0, &mut rng);
            assert_eq!(c1, p1);
            assert_eq!(c2, p2);
        }
    }

    #[test]
    fn test_crossover_is_positional_swap() {
        let mut rng = create_rng(7);
        let p1 = [1, 2, 3];
        let p2 = [4, 5, 6];
        for _ in 0..500 {
            let (c1, c2) = uniform_crossover(&p1, &p2, 1.0, &mut rng);
            for i in 0..3 {
                let pair = (c1[i], c2[i]);
                assert!(
                    pair == (p1[i], p2[i]) || pair == (p2[i], p1[i]),
                    "position {i} must hold the parents' values, got {pair:?}"
                );
            }
        }
    }

    #[test]
    fn test_crossover_rate_one_is_reproducible() {
        let p1 = [10, -3, 7];
        let p2 = [0, 9, -8];
        let mut a = create_rng(123);
        let mut b = create_rng(123);
        for _ in 0..100 {
            assert_eq!(
                uniform_crossover(&p1, &p2, 1.0, &mut a),
                uniform_crossover(&p1, &p2, 1.0, &mut b)
            );
        }
    }

    #[test]
    fn test_crossover_rate_one_mixes() {
        let mut rng = create_rng(3);
        let p1 = [0; 3];
        let p2 = [1; 3];
        let mut mixed = 0;
        for _ in 0..200 {
            let (c1, _) = uniform_crossover(&p1, &p2, 1.0, &mut rng);
            if c1 != p1 && c1 != p2 {
                mixed += 1;
            }
        }
        // 6 of 8 swap patterns produce a mixed child
        assert!(mixed > 100, "expected frequent mixing, got {mixed}/200");
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let bounds = GeneBounds::new(-100, 100).unwrap();
        let mut rng = create_rng(42);
        let genes = [17, -42, 99];
        for _ in 0..500 {
            assert_eq!(bounded_mutation(&genes, 0.0, 10, bounds, &mut rng), genes);
        }
    }

    #[test]
    fn test_mutation_step_limits_offset() {
        let bounds = GeneBounds::new(-1000, 1000).unwrap();
        let mut rng = create_rng(5);
        let genes = [0, 100, -100];
        for _ in 0..500 {
            let mutated = bounded_mutation(&genes, 1.0, 10, bounds, &mut rng);
            for (before, after) in genes.iter().zip(mutated.iter()) {
                assert!((after - before).abs() <= 10);
            }
        }
    }

    #[test]
    fn test_mutation_clamps_at_edges() {
        let bounds = GeneBounds::new(-10, 10).unwrap();
        let mut rng = create_rng(11);
        let genes = [10, -10, 10];
        let mut hit_edge = false;
        for _ in 0..500 {
            let mutated = bounded_mutation(&genes, 1.0, 10, bounds, &mut rng);
            assert!(mutated.iter().all(|&g| bounds.contains(g)));
            hit_edge |= mutated[0] == 10;
        }
        assert!(hit_edge, "upward offsets should clamp to the upper edge");
    }

    #[test]
    fn test_mutation_out_of_range_rate_is_clamped() {
        let bounds = GeneBounds::new(-100, 100).unwrap();
        let genes = [1, 2, 3];

        let mut rng = create_rng(4);
        for rate in [-0.5, f64::NAN, f64::NEG_INFINITY] {
            assert_eq!(bounded_mutation(&genes, rate, 10, bounds, &mut rng), genes);
        }

        let mut above = create_rng(21);
        let mut one = create_rng(21);
        for _ in 0..100 {
            assert_eq!(
                bounded_mutation(&genes, 1.5, 10, bounds, &mut above),
                bounded_mutation(&genes, 1.0, 10, bounds, &mut one)
            );
        }
    }

    #[test]
    fn test_mutation_does_not_touch_input() {
        let bounds = GeneBounds::new(-10, 10).unwrap();
        let mut rng = create_rng(1);
        let genes = [1, 2, 3];
        let _ = bounded_mutation(&genes, 1.0, 10, bounds, &mut rng);
        assert_eq!(genes, [1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_mutation_stays_in_bounds(
            lo in -50i32..=0,
            width in 0i32..=50,
            seed in any::<u64>(),
            rate in 0.0f64..=1.0,
            step in 0u32..=30,
        ) {
            let bounds = GeneBounds::new(lo, lo + width).unwrap();
            let mut rng = create_rng(seed);
            let genes = [
                bounds.sample(&mut rng),
                bounds.sample(&mut rng),
                bounds.sample(&mut rng),
            ];
            let mutated = bounded_mutation(&genes, rate, step, bounds, &mut rng);
            prop_assert!(mutated.iter().all(|&g| bounds.contains(g)));
        }

        #[test]
        fn prop_crossover_preserves_gene_multiset(
            p1 in prop::array::uniform3(-100i32..=100),
            p2 in prop::array::uniform3(-100i32..=100),
            seed in any::<u64>(),
            rate in 0.0f64..=1.0,
        ) {
            let mut rng = create_rng(seed);
            let (c1, c2) = uniform_crossover(&p1, &p2, rate, &mut rng);
            for i in 0..3 {
                let mut before = [p1[i], p2[i]];
                let mut after = [c1[i], c2[i]];
                before.sort();
                after.sort();
                prop_assert_eq!(before, after);
            }
        }
    }
}
