use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::error::Error;

const SAMPLE_MAX: f64 = 32767.0;

/// Normalize a vector of samples to the range [-1.0, 1.0]
fn normalize_samples(samples: &Vec<f64>) -> Vec<f64> {
    let max_sample = samples.iter().fold(0.0_f64, |max, &s| max.max(s.abs()));
    if max_sample > 1.0 {
        return samples.iter().map(|s| s / max_sample).collect();
    }
    samples.clone()
}

/// Reads a single-channel 16-bit PCM WAV file (any sample rate) and returns
/// the samples scaled to [-1.0, 1.0] together with the file's sample rate,
/// so writers can preserve it.
pub fn read_wav(path: &str) -> Result<(Vec<f64>, u32), Box<dyn Error>> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(format!("expected 1 channel, found {}", spec.channels).into());
    }
    if spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int {
        return Err(format!(
            "expected 16-bit PCM Int samples, found {}-bit {:?}",
            spec.bits_per_sample, spec.sample_format
        )
        .into());
    }

    let mut samples = Vec::new();
    for sample in reader.samples::<i16>() {
        samples.push(sample? as f64 / SAMPLE_MAX);
    }
    Ok((samples, spec.sample_rate))
}

/// Writes a vector of samples (in any range) to a single-channel 16-bit PCM
/// WAV file at the given sample rate. The signal is normalized to
/// [-1.0, 1.0] first, then scaled to i16.
pub fn save_wav(sig: &Vec<f64>, path: &str, sample_rate: u32) -> Result<(), hound::Error> {
    let normalized = normalize_samples(sig);

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for s in normalized {
        writer.write_sample((s * SAMPLE_MAX) as i16)?;
    }
    writer.finalize()
}
