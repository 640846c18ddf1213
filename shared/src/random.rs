use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform doubles in `[0, 1)`.
///
/// The wheel draws both the target sector and the in-sector jitter from this,
/// so tests can substitute a scripted or seeded source and pin outcomes down.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, n)`. `n` must be at least 1.
    fn next_index(&mut self, n: usize) -> usize {
        let idx = (self.next_f64() * n as f64).floor() as usize;
        // Guards against a source returning exactly 1.0
        idx.min(n.saturating_sub(1))
    }
}

/// Unseeded, process-wide generator. Used by the live screen.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Reproducible generator for simulations and tests.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Values that make the next spin land on `sector` of `n`, dead centre.
    pub fn for_sector(sector: usize, n: usize) -> Self {
        let pick = (sector as f64 + 0.5) / n as f64;
        Self::new(vec![pick, 0.5])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_repeatable() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_next_index_in_range() {
        let mut rng = ThreadRandom::new();
        for n in 1..12 {
            for _ in 0..200 {
                assert!(rng.next_index(n) < n);
            }
        }

        let mut edge = ScriptedRandom::new(vec![0.0, 0.999_999_999, 1.0]);
        assert_eq!(edge.next_index(4), 0);
        assert_eq!(edge.next_index(4), 3);
        assert_eq!(edge.next_index(4), 3);
    }

    #[test]
    fn test_next_index_roughly_uniform() {
        let mut rng = SeededRandom::new(7);
        let mut counts = [0usize; 4];
        for _ in 0..40_000 {
            counts[rng.next_index(4)] += 1;
        }
        for count in counts {
            assert!((9_000..11_000).contains(&count), "skewed bucket: {}", count);
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRandom::for_sector(2, 4);
        assert_eq!(rng.next_f64(), 0.625);
        assert_eq!(rng.next_f64(), 0.5);
        assert_eq!(rng.next_f64(), 0.625);
    }
}
