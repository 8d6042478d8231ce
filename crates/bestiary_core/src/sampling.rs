//! Random sampling primitives.
//!
//! Each helper consumes draws from the caller's generator in a fixed order,
//! so builders stay reproducible for a given seed.

use crate::error::{GenError, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(GenError::InvalidProbability(probability))
    }
}

/// Uniformly picks one element. Fails on an empty pool.
pub fn pick_one<'a, T, R>(rng: &mut R, items: &'a [T], context: &str) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    items
        .choose(rng)
        .ok_or_else(|| GenError::insufficient_pool(context, 1, 0))
}

/// Returns a uniformly random element with the given probability, `None` otherwise.
///
/// The pool must be non-empty even when the pick ends up not being taken.
pub fn pick_or_empty<T, R>(rng: &mut R, items: &[T], probability: f64) -> Result<Option<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    check_probability(probability)?;
    if items.is_empty() {
        return Err(GenError::insufficient_pool("optional pick", 1, 0));
    }
    if rng.gen_bool(probability) {
        Ok(items.choose(rng).cloned())
    } else {
        Ok(None)
    }
}

/// Picks two distinct elements with `secondary_probability`, otherwise one
/// element and `None`.
pub fn pick_one_or_two<T, R>(
    rng: &mut R,
    items: &[T],
    secondary_probability: f64,
) -> Result<(T, Option<T>)>
where
    T: Clone,
    R: Rng + ?Sized,
{
    check_probability(secondary_probability)?;
    if items.is_empty() {
        return Err(GenError::insufficient_pool("one-or-two pick", 1, 0));
    }
    if rng.gen_bool(secondary_probability) {
        if items.len() < 2 {
            return Err(GenError::insufficient_pool("one-or-two pick", 2, items.len()));
        }
        let mut picked = items.choose_multiple(rng, 2).cloned();
        match (picked.next(), picked.next()) {
            (Some(first), Some(second)) => Ok((first, Some(second))),
            _ => Err(GenError::insufficient_pool("one-or-two pick", 2, items.len())),
        }
    } else {
        let first = pick_one(rng, items, "one-or-two pick")?.clone();
        Ok((first, None))
    }
}

/// Draws `count` distinct elements without replacement.
pub fn sample_distinct<T, R>(rng: &mut R, items: &[T], count: usize, context: &str) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if count > items.len() {
        return Err(GenError::insufficient_pool(context, count, items.len()));
    }
    Ok(items.choose_multiple(rng, count).cloned().collect())
}

/// Integer in `[low, high]` where `v` is drawn with weight `1 / v`.
///
/// Small values dominate, wide branches still show up now and then.
pub fn weighted_int_in_range<R>(rng: &mut R, low: usize, high: usize) -> Result<usize>
where
    R: Rng + ?Sized,
{
    if low == 0 || low > high {
        return Err(GenError::InvalidRange { low, high });
    }
    let weights = (low..=high).map(|v| 1.0 / v as f64);
    let dist = WeightedIndex::new(weights).map_err(|_| GenError::InvalidRange { low, high })?;
    Ok(low + dist.sample(rng))
}

/// Integer in `[low, high]` drawn uniformly.
pub fn uniform_int_in_range<R>(rng: &mut R, low: usize, high: usize) -> Result<usize>
where
    R: Rng + ?Sized,
{
    if low > high {
        return Err(GenError::InvalidRange { low, high });
    }
    Ok(rng.gen_range(low..=high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    const POOL: [&str; 3] = ["A", "B", "C"];

    #[test]
    fn test_weighted_single_value_range() {
        let mut rng = seeded(1);
        for _ in 0..100 {
            assert_eq!(weighted_int_in_range(&mut rng, 1, 1).unwrap(), 1);
        }
    }

    #[test]
    fn test_weighted_prefers_small_values() {
        let mut rng = seeded(7);
        let mut counts = [0usize; 11];
        for _ in 0..20_000 {
            let v = weighted_int_in_range(&mut rng, 1, 10).unwrap();
            assert!((1..=10).contains(&v));
            counts[v] += 1;
        }
        assert!(counts[1] > counts[10]);
        assert!(counts[1] > counts[2]);
    }

    #[test]
    fn test_weighted_rejects_bad_ranges() {
        let mut rng = seeded(0);
        assert_eq!(
            weighted_int_in_range(&mut rng, 0, 5),
            Err(GenError::InvalidRange { low: 0, high: 5 })
        );
        assert_eq!(
            weighted_int_in_range(&mut rng, 1, 0),
            Err(GenError::InvalidRange { low: 1, high: 0 })
        );
    }

    #[test]
    fn test_pick_one_or_two_always_two() {
        let mut rng = seeded(3);
        for _ in 0..200 {
            let (first, second) = pick_one_or_two(&mut rng, &POOL, 1.0).unwrap();
            let second = second.expect("two-element branch");
            assert_ne!(first, second);
            assert!(POOL.contains(&first) && POOL.contains(&second));
        }
    }

    #[test]
    fn test_pick_one_or_two_always_one() {
        let mut rng = seeded(3);
        for _ in 0..200 {
            let (first, second) = pick_one_or_two(&mut rng, &POOL, 0.0).unwrap();
            assert!(POOL.contains(&first));
            assert_eq!(second, None);
        }
    }

    #[test]
    fn test_pick_one_or_two_small_pool() {
        let mut rng = seeded(3);
        let err = pick_one_or_two(&mut rng, &["A"], 1.0).unwrap_err();
        assert!(matches!(err, GenError::InsufficientPool { needed: 2, available: 1, .. }));
        let (only, none) = pick_one_or_two(&mut rng, &["A"], 0.0).unwrap();
        assert_eq!((only, none), ("A", None));
    }

    #[test]
    fn test_pick_or_empty() {
        let mut rng = seeded(11);
        assert_eq!(pick_or_empty(&mut rng, &POOL, 0.0).unwrap(), None);
        assert!(pick_or_empty(&mut rng, &POOL, 1.0).unwrap().is_some());
        let empty: [&str; 0] = [];
        assert!(matches!(
            pick_or_empty(&mut rng, &empty, 0.5),
            Err(GenError::InsufficientPool { .. })
        ));
        assert_eq!(
            pick_or_empty(&mut rng, &POOL, 1.5),
            Err(GenError::InvalidProbability(1.5))
        );
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = seeded(5);
        let picked = sample_distinct(&mut rng, &POOL, 3, "test").unwrap();
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, POOL);
        assert!(sample_distinct(&mut rng, &POOL, 4, "test").is_err());
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = seeded(5);
        for _ in 0..50 {
            let v = uniform_int_in_range(&mut rng, 1, 3).unwrap();
            assert!((1..=3).contains(&v));
        }
        assert!(uniform_int_in_range(&mut rng, 1, 0).is_err());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let draw = |seed| {
            let mut rng = seeded(seed);
            (0..20)
                .map(|_| weighted_int_in_range(&mut rng, 1, 8).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(99), draw(99));
    }
}
