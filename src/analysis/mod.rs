//! One-third-octave band decomposition and SEL computation

mod bands;
mod filter;
mod level;
mod spectrum;

pub(crate) use bands::{Band, band_range};
pub(crate) use filter::apply_filter_bank;
pub(crate) use level::{log_sum, sel};
pub(crate) use spectrum::{Periodogram, ReconstructionReport, periodogram, reconstruct};

use bands::{MAX_BAND_INDEX, MIN_BAND_INDEX};

use thiserror::Error;

/// Failures in band lookup or filter design. These abort the whole
/// analysis immediately: a silently skipped band would corrupt the
/// energetic sum over bands. Retrying never helps, the computation is
/// deterministic.
#[derive(Debug, Error)]
pub(crate) enum AnalysisError {
    #[error("band index {0} is outside the supported table ({MIN_BAND_INDEX}..={MAX_BAND_INDEX})")]
    BandIndexOutOfRange(i32),

    #[error("no standard one-third-octave band is centered near {0} Hz")]
    NoBandForFrequency(f64),

    #[error(
        "band {low:.1}-{high:.1} Hz reaches the Nyquist rate ({nyquist:.1} Hz); raise the sample rate or narrow the band range"
    )]
    BandAboveNyquist { low: f64, high: f64, nyquist: f64 },

    #[error("filter order must be at least 1")]
    ZeroFilterOrder,

    #[error("band range is empty: {low:.1} Hz is above {high:.1} Hz")]
    EmptyBandRange { low: f64, high: f64 },
}
