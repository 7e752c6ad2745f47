//! Butterworth band-pass design and zero-phase application
//!
//! Design runs analog-prototype -> band transform -> bilinear transform
//! and keeps the result in cascaded second-order sections throughout.
//! Narrow bands far below the sample rate make the equivalent high-order
//! polynomial coefficients ill-conditioned, so the single-polynomial form
//! is never materialized.

use std::f64::consts::PI;

use rustfft::num_complex::Complex;

use super::AnalysisError;
use super::bands::Band;

type C64 = Complex<f64>;

/// Poles with imaginary magnitude below this are grouped as real.
const REAL_POLE_TOL: f64 = 1e-10;

/// One second-order section, coefficients normalized so `a[0] == 1`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sos {
    pub(crate) b: [f64; 3],
    pub(crate) a: [f64; 3],
}

/// Design an order-`order` Butterworth band-pass for the given edge
/// frequencies, returning `order` second-order sections.
///
/// Cutoffs at or beyond the Nyquist rate are rejected outright: an
/// aliased or unstable filter would silently corrupt every level that is
/// computed downstream.
pub(crate) fn butter_bandpass(
    order: usize,
    low_hz: f64,
    high_hz: f64,
    sample_rate: f64,
) -> Result<Vec<Sos>, AnalysisError> {
    if order == 0 {
        return Err(AnalysisError::ZeroFilterOrder);
    }
    let nyquist = sample_rate / 2.0;
    if !(low_hz > 0.0) || low_hz >= high_hz || high_hz >= nyquist {
        return Err(AnalysisError::BandAboveNyquist {
            low: low_hz,
            high: high_hz,
            nyquist,
        });
    }

    // Pre-warp the band edges so the bilinear transform lands them at
    // the requested digital frequencies (internal analog rate of 2 Hz,
    // matching the normalized-by-Nyquist convention).
    let warped_low = 4.0 * (PI * (low_hz / nyquist) / 2.0).tan();
    let warped_high = 4.0 * (PI * (high_hz / nyquist) / 2.0).tan();
    let bw = warped_high - warped_low;
    let wo = (warped_low * warped_high).sqrt();

    // Analog low-pass prototype: poles evenly spaced on the left half of
    // the unit circle, unity gain.
    let prototype: Vec<C64> = (0..order)
        .map(|k| {
            let m = (2 * k + 1) as f64 - order as f64;
            -(C64::new(0.0, PI * m / (2.0 * order as f64))).exp()
        })
        .collect();

    // Low-pass -> band-pass: each prototype pole splits into a pair
    // around the center frequency; the N transformed zeros stay at the
    // origin and the gain picks up bw^N.
    let mut analog_poles: Vec<C64> = Vec::with_capacity(2 * order);
    for p in prototype {
        let scaled = p * (bw / 2.0);
        let detune = (scaled * scaled - C64::new(wo * wo, 0.0)).sqrt();
        analog_poles.push(scaled + detune);
        analog_poles.push(scaled - detune);
    }
    let gain_analog = bw.powi(order as i32);

    // Bilinear transform at the internal rate. Origin zeros map to
    // z = +1; the N excess-degree zeros land at z = -1.
    let fs2 = C64::new(4.0, 0.0);
    let mut digital_poles: Vec<C64> = Vec::with_capacity(analog_poles.len());
    let mut denom = C64::new(1.0, 0.0);
    for &p in &analog_poles {
        digital_poles.push((fs2 + p) / (fs2 - p));
        denom *= fs2 - p;
    }
    let gain = gain_analog * (C64::new(4.0_f64.powi(order as i32), 0.0) / denom).re;

    Ok(pair_sections(&digital_poles, gain))
}

/// Group digital poles into second-order sections. Each section carries
/// one zero at z = +1 and one at z = -1 (numerator `1 - z^-2`); the
/// overall gain rides on the first section. Sections are ordered so the
/// poles closest to the unit circle come last.
fn pair_sections(poles: &[C64], gain: f64) -> Vec<Sos> {
    let mut conjugate: Vec<C64> = poles
        .iter()
        .copied()
        .filter(|p| p.im > REAL_POLE_TOL)
        .collect();
    conjugate.sort_by(|a, b| {
        let da = (1.0 - a.norm()).abs();
        let db = (1.0 - b.norm()).abs();
        db.partial_cmp(&da).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut real: Vec<f64> = poles
        .iter()
        .filter(|p| p.im.abs() <= REAL_POLE_TOL)
        .map(|p| p.re)
        .collect();
    real.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut sections: Vec<Sos> = Vec::with_capacity(poles.len() / 2);
    for p in conjugate {
        sections.push(Sos {
            b: [1.0, 0.0, -1.0],
            a: [1.0, -2.0 * p.re, p.norm_sqr()],
        });
    }
    for pair in real.chunks(2) {
        // Very wide bands can split a prototype pole into two real
        // digital poles; they pair with each other.
        let (p1, p2) = (pair[0], pair[1]);
        sections.push(Sos {
            b: [1.0, 0.0, -1.0],
            a: [1.0, -(p1 + p2), p1 * p2],
        });
    }

    if let Some(first) = sections.first_mut() {
        first.b = [gain, 0.0, -gain];
    }
    sections
}

/// Steady-state per-section filter state for a unit-step input, used to
/// suppress startup transients in `sosfiltfilt`.
fn sosfilt_zi(sections: &[Sos]) -> Vec<[f64; 2]> {
    let mut scale = 1.0;
    let mut zi = Vec::with_capacity(sections.len());
    for s in sections {
        let c0 = s.b[1] - s.a[1] * s.b[0];
        let c1 = s.b[2] - s.a[2] * s.b[0];
        let det = 1.0 + s.a[1] + s.a[2];
        zi.push([
            scale * (c0 + c1) / det,
            scale * ((1.0 + s.a[1]) * c1 - s.a[2] * c0) / det,
        ]);
        scale *= (s.b[0] + s.b[1] + s.b[2]) / det;
    }
    zi
}

/// Run the cascade over `x` in place (direct form II transposed),
/// carrying per-section state.
fn sosfilt(sections: &[Sos], x: &mut [f64], zi: &mut [[f64; 2]]) {
    for (s, z) in sections.iter().zip(zi.iter_mut()) {
        for v in x.iter_mut() {
            let xn = *v;
            let yn = s.b[0] * xn + z[0];
            z[0] = s.b[1] * xn - s.a[1] * yn + z[1];
            z[1] = s.b[2] * xn - s.a[2] * yn;
            *v = yn;
        }
    }
}

/// Forward-backward (zero-phase) filtering with odd-extension padding.
/// The output has no net phase shift, so per-band energy stays aligned
/// in time with the input.
pub(crate) fn sosfiltfilt(sections: &[Sos], x: &[f64]) -> Vec<f64> {
    if x.is_empty() {
        return Vec::new();
    }
    let pad = (3 * (2 * sections.len() + 1)).min(x.len() - 1);

    // Odd extension reflects the signal around its endpoints.
    let mut ext = Vec::with_capacity(x.len() + 2 * pad);
    let first = x[0];
    let last = x[x.len() - 1];
    for i in (1..=pad).rev() {
        ext.push(2.0 * first - x[i]);
    }
    ext.extend_from_slice(x);
    for i in 1..=pad {
        ext.push(2.0 * last - x[x.len() - 1 - i]);
    }

    let zi = sosfilt_zi(sections);

    let scaled = |v: f64| -> Vec<[f64; 2]> { zi.iter().map(|z| [z[0] * v, z[1] * v]).collect() };

    let mut state = scaled(ext[0]);
    sosfilt(sections, &mut ext, &mut state);

    ext.reverse();
    let mut state = scaled(ext[0]);
    sosfilt(sections, &mut ext, &mut state);
    ext.reverse();

    ext[pad..pad + x.len()].to_vec()
}

/// Filter the signal through every band in order, one same-length series
/// per band. Pure mapping of (signal, bands) -> filtered signals; the
/// callback only reports progress. The first band that cannot be
/// designed aborts the run.
pub(crate) fn apply_filter_bank<F>(
    samples: &[f64],
    sample_rate: f64,
    bands: &[Band],
    order: usize,
    mut on_band: F,
) -> Result<Vec<Vec<f64>>, AnalysisError>
where
    F: FnMut(usize, usize),
{
    let mut filtered = Vec::with_capacity(bands.len());
    for (i, band) in bands.iter().enumerate() {
        let sections = butter_bandpass(order, band.low_hz, band.high_hz, sample_rate)?;
        filtered.push(sosfiltfilt(&sections, samples));
        on_band(i + 1, bands.len());
    }
    Ok(filtered)
}
