//! CLI mode implementations

mod analyze;
mod bands;
mod compare;

pub use analyze::run_analyze;
pub use bands::run_bands;
pub use compare::run_compare;

use crate::analysis::{self, Band};
use crate::audio::{Calibration, load_audio};
use crate::output::get_display_name;

/// Full analysis of a single recording
pub struct FileAnalysis {
    pub name: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_secs: f64,
    /// Calibrated pressure samples, kept for spectral diagnostics
    pub samples: Vec<f64>,
    /// Per-band SEL in band order
    pub band_sels: Vec<f64>,
    /// Energetic sum over bands
    pub total_sel: f64,
    /// SEL of the unfiltered signal
    pub broadband_sel: f64,
    pub reconstruction: analysis::ReconstructionReport,
}

/// Decode and calibrate a recording, filter it into bands, and compute
/// per-band and aggregate levels
pub fn analyze_file(
    filename: &str,
    calibration: &Calibration,
    bands: &[Band],
    order: usize,
    show_progress: bool,
) -> Result<FileAnalysis, String> {
    let display_name = get_display_name(filename).to_string();

    let audio = load_audio(filename, calibration)?;
    if audio.samples.is_empty() {
        return Err(format!("No samples found in {}", display_name));
    }
    let fs = audio.sample_rate as f64;

    if show_progress {
        eprint!("Filtering {}... 0/{}", display_name, bands.len());
    }
    let filtered = analysis::apply_filter_bank(&audio.samples, fs, bands, order, |done, total| {
        if show_progress {
            eprint!("\rFiltering {}... {}/{}", display_name, done, total);
        }
    })
    .map_err(|e| e.to_string())?;
    if show_progress {
        eprintln!("\rFiltering {}... done   ", display_name);
    }

    let band_sels: Vec<f64> = filtered.iter().map(|d| analysis::sel(d, fs)).collect();
    let total_sel = analysis::log_sum(&band_sels);
    let broadband_sel = analysis::sel(&audio.samples, fs);
    let reconstruction = analysis::reconstruct(&filtered, &audio.samples, fs);

    Ok(FileAnalysis {
        name: display_name,
        sample_rate: audio.sample_rate,
        channels: audio.channels,
        duration_secs: audio.duration_secs(),
        samples: audio.samples,
        band_sels,
        total_sel,
        broadband_sel,
        reconstruction,
    })
}
