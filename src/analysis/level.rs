//! Sound exposure level metrics

/// Sound Exposure Level of a time series, dB re 1 µPa²·s.
///
/// The mean-removed mean square times the duration approximates the
/// integrated squared pressure over the signal. A silent (or empty)
/// signal yields `-inf`, which is a valid level, not an error.
pub(crate) fn sel(samples: &[f64], sample_rate: f64) -> f64 {
    if samples.is_empty() {
        return f64::NEG_INFINITY;
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let mean_square = samples
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    10.0 * (mean_square * n / sample_rate).log10()
}

/// Energetic sum of dB levels: accumulate in the linear energy domain,
/// then convert back. Levels in dB must never be added or averaged
/// directly; only the underlying energies add across bands.
pub(crate) fn log_sum(levels: &[f64]) -> f64 {
    let total: f64 = levels.iter().map(|l| 10.0_f64.powf(l / 10.0)).sum();
    10.0 * total.log10()
}
