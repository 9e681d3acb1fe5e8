//! Gaussian sampling via the polar Box–Muller transform.

use rand::Rng;

/// Draws normally distributed samples from an owned uniform source.
///
/// Every transform yields two independent deviates. The first is returned
/// immediately and the second is kept for the following call, so calls
/// alternate between running the transform and handing out the cached value.
/// The cache is private to the sampler: two samplers never share it.
///
/// # Example
/// ```
/// use pagesim::trace::NormalSampler;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut sampler = NormalSampler::new(ChaCha8Rng::seed_from_u64(7), 10.0, 2.0);
/// let x = sampler.sample();
/// assert!(x.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct NormalSampler<R> {
    rng: R,
    mean: f64,
    std_dev: f64,
    /// Second standard deviate of the last transform, if not yet used.
    cached: Option<f64>,
}

impl<R: Rng> NormalSampler<R> {
    /// Create a sampler for N(`mean`, `std_dev`²).
    ///
    /// # Panics
    /// Panics if `std_dev` is negative or not finite.
    pub fn new(rng: R, mean: f64, std_dev: f64) -> Self {
        assert!(
            std_dev.is_finite() && std_dev >= 0.0,
            "std_dev must be finite and >= 0"
        );
        Self {
            rng,
            mean,
            std_dev,
            cached: None,
        }
    }

    /// Draw one sample.
    pub fn sample(&mut self) -> f64 {
        let z = match self.cached.take() {
            Some(z) => z,
            None => {
                let (z1, z2) = self.standard_pair();
                self.cached = Some(z2);
                z1
            }
        };
        self.mean + self.std_dev * z
    }

    /// Draw one sample truncated toward zero.
    pub fn sample_truncated(&mut self) -> i64 {
        self.sample() as i64
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Two independent N(0, 1) deviates.
    ///
    /// Points are drawn uniformly from the square (-1, 1)² and rejected
    /// unless they fall strictly inside the unit circle and off the origin.
    fn standard_pair(&mut self) -> (f64, f64) {
        loop {
            let u1: f64 = self.rng.gen_range(-1.0..1.0);
            let u2: f64 = self.rng.gen_range(-1.0..1.0);
            let w = u1 * u1 + u2 * u2;
            if w >= 1.0 || w == 0.0 {
                continue;
            }
            let mult = (-2.0 * w.ln() / w).sqrt();
            return (u1 * mult, u2 * mult);
        }
    }
}
