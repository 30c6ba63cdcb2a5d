//! Weighted random choice
//!
//! Every "draw a number, branch on the range" decision in the generator goes
//! through this module so the probability policy stays in one place.

use rand::Rng;

/// A probability expressed in whole percent (`0..=100`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Probability(u32);

impl Probability {
    /// Never fires
    pub const NEVER: Probability = Probability(0);

    /// Always fires
    pub const ALWAYS: Probability = Probability(100);

    /// Create a probability from a percentage, clamped to 100
    pub const fn percent(percent: u32) -> Self {
        if percent > 100 {
            Probability(100)
        } else {
            Probability(percent)
        }
    }

    /// A probability of one in `n`, rounded down to whole percent
    ///
    /// `one_in(0)` never fires.
    pub const fn one_in(n: u32) -> Self {
        if n == 0 {
            Probability(0)
        } else {
            Probability(100 / n)
        }
    }

    /// The percentage value
    pub fn as_percent(&self) -> u32 {
        self.0
    }

    /// Draw once from `rng`
    ///
    /// Zero never fires and 100 always fires, without consuming randomness
    /// in either case.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        match self.0 {
            0 => false,
            100 => true,
            p => rng.gen_range(0..100) < p,
        }
    }
}

/// Pick one element uniformly from a non-empty slice
///
/// # Panics
///
/// Panics if `items` is empty. All callers pass fixed, non-empty catalogs.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Pick a copyable element uniformly from a non-empty slice
pub fn pick_copied<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    *pick(rng, items)
}

/// A fair coin flip
pub fn coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_probability_clamps() {
        assert_eq!(Probability::percent(250).as_percent(), 100);
        assert_eq!(Probability::one_in(5).as_percent(), 20);
        assert_eq!(Probability::one_in(0), Probability::NEVER);
    }

    #[test]
    fn test_never_and_always() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            assert!(!Probability::NEVER.sample(&mut rng));
            assert!(Probability::ALWAYS.sample(&mut rng));
        }
    }

    #[test]
    fn test_sample_frequency_is_close_to_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = Probability::percent(30);

        let hits = (0..20_000).filter(|_| p.sample(&mut rng)).count();
        let ratio = hits as f64 / 20_000.0;

        assert!((0.27..0.33).contains(&ratio), "observed ratio {}", ratio);
    }

    #[test]
    fn test_pick_covers_all_items() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = ["a", "b", "c"];
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(*pick(&mut rng, &items));
        }

        assert_eq!(seen.len(), 3);
    }
}
