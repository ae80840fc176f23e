//! Sub-selection generator.

use phones_core::SubsetRange;
use rand::seq::SliceRandom;
use rand::Rng;

/// Sample a sub-selection of distinct pool entries.
///
/// The length is drawn uniformly from `range`, clamped to the pool size so
/// the draw can never ask for more entries than exist. Each pool position
/// is used at most once.
pub fn sample_subset<R: Rng, T: Clone>(rng: &mut R, pool: &[T], range: SubsetRange) -> Vec<T> {
    let max = range.max.min(pool.len());
    let min = range.min.min(max);

    let length = rng.gen_range(min..=max);

    pool.choose_multiple(rng, length).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool() -> Vec<String> {
        ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_sample_subset_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = pool();
        let range = SubsetRange::new(2, 4);

        for _ in 0..200 {
            let items = sample_subset(&mut rng, &pool, range);
            assert!(range.contains(items.len()));
            assert!(items.iter().all(|item| pool.contains(item)));
        }
    }

    #[test]
    fn test_sample_subset_unique() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = pool();

        for _ in 0..200 {
            let items = sample_subset(&mut rng, &pool, SubsetRange::new(7, 7));
            let unique: HashSet<&String> = items.iter().collect();
            assert_eq!(unique.len(), 7);
        }
    }

    #[test]
    fn test_sample_subset_clamps_to_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = vec![1u32, 2];

        let items = sample_subset(&mut rng, &pool, SubsetRange::new(3, 5));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_sample_subset_empty_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool: Vec<u32> = vec![];

        let items = sample_subset(&mut rng, &pool, SubsetRange::new(1, 3));
        assert!(items.is_empty());
    }

    #[test]
    fn test_sample_subset_reaches_every_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = pool();
        let lengths: HashSet<usize> = (0..300)
            .map(|_| sample_subset(&mut rng, &pool, SubsetRange::new(1, 3)).len())
            .collect();
        assert_eq!(lengths, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_deterministic_generation() {
        let pool = pool();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            sample_subset(&mut rng1, &pool, SubsetRange::new(1, 5)),
            sample_subset(&mut rng2, &pool, SubsetRange::new(1, 5))
        );
    }
}
