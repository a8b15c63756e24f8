use adf_dsp::nlms::{Adaptation, NlmsAdf, NlmsConfig};
use adf_dsp::signal::{demo_target, generate_signal, SignalType};
use adf_dsp::utils::{mean_square_error, sig_to_noise_ratio_db};

use std::error::Error;
use std::time::Instant;

use csv::Writer;

/// Desired-signal cases for the sweep: the demo target plus a few synthetic
/// signals of different character.
fn sweep_cases(len: usize, sample_rate: f64, seed: u64) -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("uniform", demo_target(len, seed)),
        ("sine", generate_signal(len, SignalType::Sinusoidal(50.0), sample_rate)),
        ("chirp", generate_signal(len, SignalType::Chirp(20.0, 400.0), sample_rate)),
        ("white", generate_signal(len, SignalType::WhiteNoise, sample_rate)),
    ]
}

/// Run a full parameter sweep: every case against a grid of step sizes,
/// filter sizes and update caps, timing each run and recording MSE and SNR
/// to a results CSV.
pub fn run_sweep(out_path: &str) -> Result<(), Box<dyn Error>> {
    // === Configuration ===
    let alphas = [0.5, 1.0, 1.5];
    let filter_sizes = [8, 16, 32];
    let update_counts = [1, 2, 8];
    let threshold = 0.01;
    let seed = 1234;
    let len = 256;
    let sample_rate = 44100.0;

    let mut csv_writer = Writer::from_path(out_path)?;
    csv_writer.write_record([
        "case",
        "alpha",
        "filter",
        "updates",
        "mse",
        "snr_db",
        "time_sec",
    ])?;

    for (case, desired) in sweep_cases(len, sample_rate, seed) {
        println!("Running case {}", case);
        for &alpha in &alphas {
            for &taps in &filter_sizes {
                for &update_count in &update_counts {
                    let config = NlmsConfig {
                        alpha,
                        update_count,
                        threshold,
                        taps,
                        adaptation: Adaptation::Cumulative,
                    };
                    let start = Instant::now();
                    let mut adf = NlmsAdf::new(config, seed)?;
                    let out = adf.run(&desired);
                    let duration_sec = start.elapsed().as_secs_f64();

                    let mse = mean_square_error(&desired, &out);
                    let snr_db = sig_to_noise_ratio_db(&desired, &out);

                    csv_writer.write_record(&[
                        case.to_string(),
                        format!("{:.2}", alpha),
                        taps.to_string(),
                        update_count.to_string(),
                        mse.to_string(),
                        snr_db.to_string(),
                        duration_sec.to_string(),
                    ])?;
                }
            }
        }
    }

    csv_writer.flush()?;
    println!("Sweep completed. Results (MSE, SNR dB, timing) in '{}'.", out_path);
    Ok(())
}
