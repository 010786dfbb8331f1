use rand::Rng;

/// Randomness consumed by the outfit composer.
///
/// Every `rand::Rng` qualifies, so callers pass `thread_rng()` in production and a
/// seeded `StdRng` when they need reproducible outfits.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;

    /// Biased coin flip succeeding with `probability`.
    fn chance(&mut self, probability: f64) -> bool;
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.gen_bool(probability.clamp(0.0, 1.0))
    }
}
