//! Seeded random stream
//!
//! Thin deterministic wrapper over [`ChaChaRng`]. Two streams built from the
//! same seed and driven by the same sequence of calls produce bit-identical
//! output on every platform.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::derivation::{SEED_MASK, Seed};

/// Deterministic random stream owned by exactly one generation call
///
/// Streams are never shared between concurrent generation calls; hand each
/// call its own stream via [`RandomStream::fork`] or a freshly derived seed.
#[derive(Debug, Clone)]
pub struct RandomStream {
    seed: Seed,
    rng: ChaChaRng,
}

impl RandomStream {
    /// Create a stream from a seed
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    /// Stream built from `seed` and fast-forwarded to `word_pos`
    ///
    /// `RandomStream::at(s.seed(), s.word_pos())` continues exactly where `s`
    /// currently stands.
    pub fn at(seed: Seed, word_pos: u128) -> Self {
        let mut stream = Self::new(seed);
        stream.rng.set_word_pos(word_pos);
        stream
    }

    /// The seed this stream was constructed from
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Number of 32-bit words consumed since construction from [`seed`](Self::seed)
    pub fn word_pos(&self) -> u128 {
        self.rng.get_word_pos()
    }

    /// Uniform float in `[0, 1)`
    pub fn uniform_float(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform float in `[lo, hi)`
    ///
    /// An empty or inverted range returns `lo` without consuming a draw.
    pub fn uniform_float_range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        lo + self.uniform_float() * (hi - lo)
    }

    /// Uniform integer in `[lo, hi]` (inclusive)
    ///
    /// An inverted range returns `lo` without consuming a draw.
    pub fn uniform_int_range(&mut self, lo: i64, hi: i64) -> i64 {
        if hi < lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    /// Normal deviate (Box-Muller, consumes two uniform draws)
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        // 1 - u keeps the logarithm argument in (0, 1]
        let u1 = 1.0 - self.uniform_float();
        let u2 = self.uniform_float();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }

    /// Bernoulli trial with success probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform_float() < p
    }

    /// Index chosen with probability proportional to its weight
    ///
    /// Weights need not sum to one. Negative or NaN weights count as zero. If no
    /// weight is positive the choice falls back to uniform over all indices.
    /// Returns `None` only for an empty slice, without consuming a draw.
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        let total: f64 = weights.iter().copied().filter(|w| *w > 0.0).sum();
        if total <= 0.0 {
            let last = weights.len() as i64 - 1;
            return Some(self.uniform_int_range(0, last) as usize);
        }

        let roll = self.uniform_float() * total;
        let mut cumulative = 0.0;
        let mut chosen = None;
        for (i, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 || weight.is_nan() {
                continue;
            }
            cumulative += weight;
            chosen = Some(i);
            if roll < cumulative {
                break;
            }
        }
        chosen
    }

    /// Item chosen with probability proportional to its weight
    ///
    /// `items` and `weights` are paired by position; surplus entries in the
    /// longer slice are ignored. See [`RandomStream::weighted_index`] for the
    /// handling of degenerate weights.
    pub fn weighted_choice<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> Option<&'a T> {
        let len = items.len().min(weights.len());
        self.weighted_index(&weights[..len]).map(|i| &items[i])
    }

    /// Draw a fresh seed from this stream (one integer draw)
    pub fn next_seed(&mut self) -> Seed {
        u64::from(self.rng.next_u32()) & SEED_MASK
    }

    /// Split off an independent child stream
    ///
    /// Consumes exactly one integer draw from `self`; the parent continues as if
    /// nothing else happened.
    pub fn fork(&mut self) -> RandomStream {
        RandomStream::new(self.next_seed())
    }
}

impl RngCore for RandomStream {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
