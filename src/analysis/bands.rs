//! One-third-octave band geometry (IEC 61260-1 / ANSI S1.6)

use super::AnalysisError;

/// Base-2 octave ratio. Band edges sit `G^(1/6)` either side of the
/// exact center, giving a one-third-octave bandwidth.
const G: f64 = 2.0;

/// Lowest supported band index (16 Hz nominal).
pub(crate) const MIN_BAND_INDEX: i32 = -18;
/// Highest supported band index (20 kHz nominal).
pub(crate) const MAX_BAND_INDEX: i32 = 13;

/// Preferred nominal center frequencies for indices
/// `MIN_BAND_INDEX..=MAX_BAND_INDEX`. Display/labeling only; all
/// filtering uses exact centers.
const NOMINAL_HZ: [f64; 32] = [
    16.0, 20.0, 25.0, 31.5, 40.0, 50.0, 63.0, 80.0, 100.0, 125.0, 160.0, 200.0, 250.0, 315.0,
    400.0, 500.0, 630.0, 800.0, 1000.0, 1250.0, 1600.0, 2000.0, 2500.0, 3150.0, 4000.0, 5000.0,
    6300.0, 8000.0, 10000.0, 12500.0, 16000.0, 20000.0,
];

/// A single one-third-octave band. Band 0 is centered on 1000 Hz.
#[derive(Debug, Clone)]
pub(crate) struct Band {
    pub(crate) index: i32,
    pub(crate) nominal_hz: f64,
    pub(crate) center_hz: f64,
    pub(crate) low_hz: f64,
    pub(crate) high_hz: f64,
}

/// Exact center frequency for a band index: `1000 * 2^(n/3)`.
pub(crate) fn exact_center(index: i32) -> f64 {
    1000.0 * G.powf(index as f64 / 3.0)
}

/// Look up the band for an index, deriving its exact center and cutoffs.
pub(crate) fn band(index: i32) -> Result<Band, AnalysisError> {
    if !(MIN_BAND_INDEX..=MAX_BAND_INDEX).contains(&index) {
        return Err(AnalysisError::BandIndexOutOfRange(index));
    }
    let nominal_hz = NOMINAL_HZ[(index - MIN_BAND_INDEX) as usize];
    let center_hz = exact_center(index);
    let half = G.powf(1.0 / 6.0);
    Ok(Band {
        index,
        nominal_hz,
        center_hz,
        low_hz: center_hz / half,
        high_hz: center_hz * half,
    })
}

/// Resolve a center frequency (nominal or exact) to its band index.
pub(crate) fn which_band(center_hz: f64) -> Result<i32, AnalysisError> {
    if !(center_hz > 0.0) {
        return Err(AnalysisError::NoBandForFrequency(center_hz));
    }
    let index = (3.0 * (center_hz / 1000.0).log2()).round() as i32;
    if !(MIN_BAND_INDEX..=MAX_BAND_INDEX).contains(&index) {
        return Err(AnalysisError::NoBandForFrequency(center_hz));
    }
    Ok(index)
}

/// Resolve an inclusive frequency range to the contiguous run of bands
/// whose centers fall nearest the endpoints.
pub(crate) fn band_range(low_hz: f64, high_hz: f64) -> Result<Vec<Band>, AnalysisError> {
    let first = which_band(low_hz)?;
    let last = which_band(high_hz)?;
    if first > last {
        return Err(AnalysisError::EmptyBandRange {
            low: low_hz,
            high: high_hz,
        });
    }
    (first..=last).map(band).collect()
}
