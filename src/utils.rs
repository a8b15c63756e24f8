/// Subtract the mean and scale by 2, so the result is centred around zero.
/// This is the construction used for the filter's random tap vectors and the
/// demo desired signal.
pub fn zero_mean_scaled(signal: &Vec<f64>) -> Vec<f64> {
    let mean = signal.iter().sum::<f64>() / signal.len() as f64;
    signal.iter().map(|s| (s - mean) * 2.0).collect()
}

/// Per-sample difference between the desired signal and the filter output.
pub fn residual(desired: &Vec<f64>, output: &Vec<f64>) -> Vec<f64> {
    desired
        .iter()
        .zip(output.iter())
        .map(|(d, y)| d - y)
        .collect()
}

/// Computes the mean squared error (MSE) between two signals.
pub fn mean_square_error(signal1: &Vec<f64>, signal2: &Vec<f64>) -> f64 {
    signal1
        .iter()
        .zip(signal2.iter())
        .map(|(s1, s2)| (s1 - s2) * (s1 - s2))
        .sum::<f64>()
        / signal1.len() as f64
}

/// Compute the linear signal-to-noise ratio between a reference and a
/// processed signal: SNR = P_ref / P_error, where error = ref - processed.
///
/// If the input vectors have different lengths, both are cut to the length
/// of the shorter one.
///
/// # Returns
/// * Linear SNR; infinity when the error power is zero.
pub fn sig_to_noise_ratio(reference: &Vec<f64>, processed: &Vec<f64>) -> f64 {
    let len = reference.len().min(processed.len());
    let reference = &reference[..len];
    let processed = &processed[..len];

    let pow_signal = reference.iter().map(|&x| x * x).sum::<f64>();
    let pow_error = reference
        .iter()
        .zip(processed.iter())
        .map(|(&d, &pd)| (d - pd).powi(2))
        .sum::<f64>();
    if pow_error == 0.0 {
        return f64::INFINITY;
    }
    pow_signal / pow_error
}

/// Compute the SNR in decibels: 10 * log10(linear SNR).
pub fn sig_to_noise_ratio_db(reference: &Vec<f64>, processed: &Vec<f64>) -> f64 {
    let snr = sig_to_noise_ratio(reference, processed);
    10.0 * snr.log10()
}
