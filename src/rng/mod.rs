//! Deterministic, forkable random stream.
//!
//! The underlying integer generator is a mulberry32-style 32-bit mixer, not
//! `rand`/`rand_chacha` — determinism must be bit-exact and independent of
//! any upstream crate's internal algorithm changing across versions, so the
//! mixer is hand-rolled per spec and owned entirely by this module.

use serde::{Deserialize, Serialize};

/// A deterministic pseudo-random stream. Every pipeline layer gets its own
/// stream via [`DeterministicRng::fork`] — layers never reseed from
/// outside their own stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: u32,
}

impl DeterministicRng {
    pub fn new(seed: i32) -> Self {
        Self {
            state: seed as u32,
        }
    }

    /// Next raw 32-bit value from the mulberry32 mixer.
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Float in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.next_u32() as f64 / 4294967296.0
    }

    /// Integer in `[a, b]`, inclusive on both ends.
    pub fn next_int(&mut self, a: i64, b: i64) -> i64 {
        debug_assert!(b >= a);
        let span = (b - a + 1) as f64;
        a + (self.next() * span).floor() as i64
    }

    /// Float in `[a, b)`.
    pub fn next_float(&mut self, a: f64, b: f64) -> f64 {
        a + self.next() * (b - a)
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next() < p
    }

    /// Pick a uniformly random element from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = self.next_int(0, (items.len() - 1) as i64) as usize;
        &items[idx]
    }

    /// In-place Fisher-Yates shuffle, iterating from the last index down.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        if items.is_empty() {
            return;
        }
        for i in (1..items.len()).rev() {
            let j = self.next_int(0, i as i64) as usize;
            items.swap(i, j);
        }
    }

    /// Weighted pick over `(item, weight)` pairs. Subtracts weight from a
    /// uniformly rolled fraction of the total weight; returns the last item
    /// if floating-point rounding underruns before the roll is consumed.
    pub fn weighted_pick<'a, T>(&mut self, items: &'a [(T, f64)]) -> &'a T {
        let total: f64 = items.iter().map(|(_, w)| w).sum();
        let mut roll = self.next() * total;
        for (item, weight) in items {
            if roll < *weight {
                return item;
            }
            roll -= weight;
        }
        &items.last().expect("weighted_pick requires a non-empty slice").0
    }

    /// Normal-distributed sample via Box-Muller, consuming two `next()` calls.
    pub fn gaussian(&mut self, mean: f64, stddev: f64) -> f64 {
        let u1 = self.next().max(f64::MIN_POSITIVE);
        let u2 = self.next();
        let z0 = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + z0 * stddev
    }

    /// Fork a new independent stream, seeded by drawing one integer from
    /// this stream. This is the only way a sub-stream is created.
    pub fn fork(&mut self) -> Self {
        let seed = self.next_int(0, 2_147_483_647) as i32;
        Self::new(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_is_bit_exact() {
        let mut a = DeterministicRng::new(42);
        let mut b = DeterministicRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = DeterministicRng::new(1);
        let mut b = DeterministicRng::new(2);
        let seq_a: Vec<f64> = (0..10).map(|_| a.next()).collect();
        let seq_b: Vec<f64> = (0..10).map(|_| b.next()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn next_is_in_unit_interval() {
        let mut rng = DeterministicRng::new(7);
        for _ in 0..1000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn next_int_is_inclusive_both_ends() {
        let mut rng = DeterministicRng::new(3);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..2000 {
            let v = rng.next_int(5, 7);
            assert!((5..=7).contains(&v));
            saw_min |= v == 5;
            saw_max |= v == 7;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = DeterministicRng::new(99);
        let mut items: Vec<i32> = (0..20).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn weighted_pick_never_skips_last_item_on_underrun() {
        // All weight on the last item: any roll should land on it.
        let mut rng = DeterministicRng::new(1);
        let items = vec![("a", 0.0), ("b", 0.0), ("c", 1.0)];
        for _ in 0..50 {
            assert_eq!(*rng.weighted_pick(&items), "c");
        }
    }

    #[test]
    fn fork_produces_independent_but_deterministic_streams() {
        let mut parent1 = DeterministicRng::new(123);
        let mut parent2 = DeterministicRng::new(123);
        let mut child1 = parent1.fork();
        let mut child2 = parent2.fork();
        assert_eq!(child1.next(), child2.next());
        // Parent continues diverging from the child's stream.
        assert_ne!(parent1.next(), child1.next());
    }

    #[test]
    fn gaussian_samples_cluster_near_mean() {
        let mut rng = DeterministicRng::new(5);
        let samples: Vec<f64> = (0..5000).map(|_| rng.gaussian(0.0, 1.0)).collect();
        let mean: f64 = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!(mean.abs() < 0.15);
    }
}
