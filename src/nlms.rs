use crate::utils::zero_mean_scaled;
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use std::error::Error;
use std::fmt;

/// Regularizer added to the input energy so the update step never divides by zero.
const NORM_EPS: f64 = 1e-8;

/// Errors reported by the NLMS engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NlmsError {
    /// Step size outside the open interval (0, 2); the filter would diverge.
    StepSizeOutOfRange(f64),
}

impl fmt::Display for NlmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NlmsError::StepSizeOutOfRange(alpha) => {
                write!(f, "step size must lie in (0, 2), got {}", alpha)
            }
        }
    }
}

impl Error for NlmsError {}

/// Coefficient lifetime across the sample loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adaptation {
    /// Draw `w` and `x` once; coefficients adapt cumulatively over the whole signal.
    Cumulative,
    /// Redraw `w` and `x` for every sample; each prediction adapts from
    /// scratch. The first sample uses the state drawn at construction.
    PerSampleReset,
}

/// Parameters of an online NLMS run.
#[derive(Clone, Copy, Debug)]
pub struct NlmsConfig {
    /// Step size alpha, must lie in (0, 2) exclusive.
    pub alpha: f64,
    /// Cap on update iterations per sample.
    pub update_count: usize,
    /// Early-stop threshold on the error magnitude.
    pub threshold: f64,
    /// Filter length N.
    pub taps: usize,
    pub adaptation: Adaptation,
}

/// Online NLMS adaptive filter.
///
/// Holds the coefficient vector `w`, the input vector `x` and its squared
/// norm. Each call to [`adapt`](NlmsAdf::adapt) refines `w` towards one
/// target sample with the update
///
/// ```text
/// w <- w + alpha * e * x / (||x||^2 + 1e-8)
/// ```
///
/// stopping early once `|e|` falls below the configured threshold.
pub struct NlmsAdf {
    config: NlmsConfig,
    w: Vec<f64>,
    x: Vec<f64>,
    x_energy: f64,
    rng: StdRng,
    // true until the constructor's draw of w and x has seen a sample
    fresh_state: bool,
}

/// Draw a random tap vector: uniform in [0, 1), zero-meaned, scaled by 2.
fn random_taps(len: usize, rng: &mut StdRng) -> Vec<f64> {
    let raw: Vec<f64> = (0..len).map(|_| rng.gen_range(0.0..1.0)).collect();
    zero_mean_scaled(&raw)
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).sum()
}

impl NlmsAdf {
    /// Builds a filter with freshly drawn `w` and `x` from the given seed.
    ///
    /// # Errors
    /// [`NlmsError::StepSizeOutOfRange`] when `alpha` is not in (0, 2);
    /// no state is drawn in that case.
    pub fn new(config: NlmsConfig, seed: u64) -> Result<Self, NlmsError> {
        if !(config.alpha > 0.0 && config.alpha < 2.0) {
            return Err(NlmsError::StepSizeOutOfRange(config.alpha));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let w = random_taps(config.taps, &mut rng);
        let x = random_taps(config.taps, &mut rng);
        let x_energy = dot(&x, &x);
        Ok(NlmsAdf {
            config,
            w,
            x,
            x_energy,
            rng,
            fresh_state: true,
        })
    }

    /// Current filter coefficients.
    pub fn weights(&self) -> &[f64] {
        &self.w
    }

    /// Current input (tap) vector.
    pub fn taps(&self) -> &[f64] {
        &self.x
    }

    /// Adapts the filter towards one target sample and returns the
    /// post-update prediction `w . x`.
    ///
    /// Runs at most `update_count` iterations; the early-stop check happens
    /// after the weight update, so even an immediately satisfied threshold
    /// still applies one update.
    pub fn adapt(&mut self, target: f64) -> f64 {
        if self.config.adaptation == Adaptation::PerSampleReset && !self.fresh_state {
            self.w = random_taps(self.config.taps, &mut self.rng);
            self.x = random_taps(self.config.taps, &mut self.rng);
            self.x_energy = dot(&self.x, &self.x);
        }
        self.fresh_state = false;

        for _ in 0..self.config.update_count {
            let y = dot(&self.w, &self.x);
            let e = target - y;
            let scale = self.config.alpha * e / (self.x_energy + NORM_EPS);
            for (w_i, &x_i) in self.w.iter_mut().zip(self.x.iter()) {
                *w_i += scale * x_i;
            }
            if e.abs() < self.config.threshold {
                break;
            }
        }

        dot(&self.w, &self.x)
    }

    /// Processes a whole desired signal, one prediction per sample.
    pub fn run(&mut self, desired: &Vec<f64>) -> Vec<f64> {
        desired.iter().map(|&d| self.adapt(d)).collect()
    }
}

/// Runs an online NLMS filter over the desired signal `d`.
///
/// # Arguments
/// * `alpha` - Step size, must lie in (0, 2) exclusive
/// * `update_count` - Cap on update iterations per sample
/// * `threshold` - Early-stop threshold on the error magnitude
/// * `d` - Desired signal
/// * `taps` - Filter length N
///
/// # Returns
/// The output sequence, same length as `d`, or
/// [`NlmsError::StepSizeOutOfRange`].
pub fn run(
    alpha: f64,
    update_count: usize,
    threshold: f64,
    d: &Vec<f64>,
    taps: usize,
) -> Result<Vec<f64>, NlmsError> {
    run_seeded(alpha, update_count, threshold, d, taps, thread_rng().gen())
}

/// Same as [`run`], with an explicit seed for reproducible output.
pub fn run_seeded(
    alpha: f64,
    update_count: usize,
    threshold: f64,
    d: &Vec<f64>,
    taps: usize,
    seed: u64,
) -> Result<Vec<f64>, NlmsError> {
    let config = NlmsConfig {
        alpha,
        update_count,
        threshold,
        taps,
        adaptation: Adaptation::Cumulative,
    };
    let mut adf = NlmsAdf::new(config, seed)?;
    Ok(adf.run(d))
}
