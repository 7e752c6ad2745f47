//! Spectral estimates and reconstruction diagnostics

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

use super::level;

/// One-sided power spectral density estimate.
pub(crate) struct Periodogram {
    pub(crate) frequencies: Vec<f64>,
    pub(crate) power: Vec<f64>,
}

/// Periodogram PSD: rectangular window, mean removed, `1/(fs*N)`
/// density scaling with interior bins doubled for the one-sided form.
pub(crate) fn periodogram(samples: &[f64], sample_rate: f64) -> Periodogram {
    let n = samples.len();
    if n == 0 {
        return Periodogram {
            frequencies: Vec::new(),
            power: Vec::new(),
        };
    }

    let mean = samples.iter().sum::<f64>() / n as f64;
    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .map(|&x| Complex::new(x - mean, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    let nfreq = n / 2 + 1;
    let df = sample_rate / n as f64;
    let scale = 1.0 / (sample_rate * n as f64);

    let frequencies = (0..nfreq).map(|k| k as f64 * df).collect();
    let power = (0..nfreq)
        .map(|k| {
            let mut p = buffer[k].norm_sqr() * scale;
            let is_nyquist_bin = n % 2 == 0 && k == n / 2;
            if k != 0 && !is_nyquist_bin {
                p *= 2.0;
            }
            p
        })
        .collect();

    Periodogram { frequencies, power }
}

/// Result of summing the per-band signals back together.
///
/// The band-pass bank only approximately tiles the spectrum, so the
/// reconstruction never matches exactly; a large SEL gap or residual
/// points at a miscalibrated band range or filter order.
pub(crate) struct ReconstructionReport {
    pub(crate) reconstructed: Vec<f64>,
    pub(crate) original_sel: f64,
    pub(crate) reconstructed_sel: f64,
    pub(crate) peak_residual: f64,
}

/// Sum all filtered band signals sample-wise and compare against the
/// original. Zero-phase filtering upstream keeps the bands time-aligned,
/// which is what makes this sum meaningful.
pub(crate) fn reconstruct(
    filtered: &[Vec<f64>],
    original: &[f64],
    sample_rate: f64,
) -> ReconstructionReport {
    let mut reconstructed = vec![0.0f64; original.len()];
    for band in filtered {
        for (acc, v) in reconstructed.iter_mut().zip(band) {
            *acc += v;
        }
    }

    let peak_residual = original
        .iter()
        .zip(&reconstructed)
        .map(|(o, r)| (o - r).abs())
        .fold(0.0, f64::max);

    ReconstructionReport {
        original_sel: level::sel(original, sample_rate),
        reconstructed_sel: level::sel(&reconstructed, sample_rate),
        peak_residual,
        reconstructed,
    }
}
