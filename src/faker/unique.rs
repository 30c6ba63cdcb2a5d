//! Uniqueness tracking for generated values
//!
//! The tracker remembers every value it has handed out since the last
//! [`UniquenessTracker::reset`]. Callers decide the reset scope; the
//! assembler resets once per resource, once after all resources and once
//! after the outputs.

use rand::Rng;
use std::collections::HashSet;

/// Draws attempted before giving up on a fresh value
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000;

/// Failure to produce a value that has not been seen since the last reset
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UniquenessError {
    /// Every attempt produced a value already handed out in this scope
    #[error("no unique value found after {attempts} attempts ({seen} values already in use)")]
    Exhausted {
        /// Number of draws attempted
        attempts: usize,
        /// Number of values claimed in the current scope
        seen: usize,
    },
}

/// Tracks values handed out within one reset scope
#[derive(Debug, Clone)]
pub struct UniquenessTracker {
    seen: HashSet<String>,
    max_attempts: usize,
}

impl UniquenessTracker {
    /// Create a tracker with the default attempt budget
    pub fn new() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }

    /// Create a tracker that gives up after `max_attempts` draws
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { seen: HashSet::new(), max_attempts: max_attempts.max(1) }
    }

    /// Record `value`, returning false if it was already claimed in this scope
    pub fn claim(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string())
    }

    /// Draw values from `make` until one has not been claimed yet
    pub fn unique<R, F>(&mut self, rng: &mut R, mut make: F) -> Result<String, UniquenessError>
    where
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> String,
    {
        for _ in 0..self.max_attempts {
            let candidate = make(rng);
            if self.claim(&candidate) {
                return Ok(candidate);
            }
        }

        Err(UniquenessError::Exhausted { attempts: self.max_attempts, seen: self.seen.len() })
    }

    /// Forget every claimed value
    pub fn reset(&mut self) {
        self.seen.clear();
    }

    /// Number of values claimed since the last reset
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been claimed since the last reset
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl Default for UniquenessTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faker::words;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_claim_rejects_repeats_until_reset() {
        let mut tracker = UniquenessTracker::new();

        assert!(tracker.claim("cedar"));
        assert!(!tracker.claim("cedar"));
        assert_eq!(tracker.len(), 1);

        tracker.reset();
        assert!(tracker.is_empty());
        assert!(tracker.claim("cedar"));
    }

    #[test]
    fn test_unique_words_do_not_repeat_within_scope() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tracker = UniquenessTracker::new();

        let drawn: Vec<String> = (0..100)
            .map(|_| tracker.unique(&mut rng, |r| words::word(r).to_string()).unwrap())
            .collect();

        let distinct: HashSet<_> = drawn.iter().collect();
        assert_eq!(distinct.len(), 100);
        assert_eq!(tracker.len(), 100);
    }

    #[test]
    fn test_exhaustion_is_reported() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tracker = UniquenessTracker::with_max_attempts(10);

        tracker.unique(&mut rng, |_| "only".to_string()).unwrap();
        let err = tracker.unique(&mut rng, |_| "only".to_string()).unwrap_err();

        assert_eq!(err, UniquenessError::Exhausted { attempts: 10, seen: 1 });
    }
}
