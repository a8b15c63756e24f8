use crate::utils::zero_mean_scaled;
use rand::{distributions::Uniform, rngs::StdRng, thread_rng, Rng, SeedableRng};
use std::f64::consts::PI;

/// Signal types
#[derive(Clone, Copy, Debug)]
pub enum SignalType {
    WhiteNoise,      // White noise
    Sinusoidal(f64), // Sinusoidal signal with given frequency (Hz)
    Chirp(f64, f64), // Linear chirp from f1 to f2
}

/// Generates white noise signal
fn generate_white_noise(len: usize) -> Vec<f64> {
    let mut rng = thread_rng();
    let uniform = Uniform::from(-1.0..1.0);
    (0..len).map(|_| rng.sample(uniform)).collect()
}

/// Generates a sinusoidal signal at the given frequency
fn generate_sinusoidal(len: usize, frequency: f64, sr: f64) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64 / sr;
            (2.0 * PI * frequency * t).sin()
        })
        .collect()
}

/// Generates a linear chirp from f1 to f2 over the signal duration
fn generate_chirp(len: usize, f1: f64, f2: f64, sr: f64) -> Vec<f64> {
    let duration = len as f64 / sr;
    let k = (f2 - f1) / duration;

    (0..len)
        .map(|i| {
            let t = i as f64 / sr;
            (2.0 * PI * (f1 * t + 0.5 * k * t * t)).sin()
        })
        .collect()
}

/// Generates a signal vector of given length and type.
pub fn generate_signal(len: usize, sig_type: SignalType, sample_rate: f64) -> Vec<f64> {
    match sig_type {
        SignalType::WhiteNoise => generate_white_noise(len),
        SignalType::Sinusoidal(freq) => generate_sinusoidal(len, freq, sample_rate),
        SignalType::Chirp(f1, f2) => generate_chirp(len, f1, f2, sample_rate),
    }
}

/// Desired signal for the NLMS demo: uniform noise with amplitude 48,
/// zero-meaned and scaled by 2, with a -3.0 transient at samples 50..52.
pub fn demo_target(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let raw: Vec<f64> = (0..len).map(|_| 48.0 * rng.gen_range(0.0..1.0)).collect();
    let mut d = zero_mean_scaled(&raw);
    for v in d[len.min(50)..len.min(52)].iter_mut() {
        *v -= 3.0;
    }
    d
}
