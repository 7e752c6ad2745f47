//! Chart rendering for SEL and spectrum diagnostics

mod colors;
mod sel;
mod spectrum;

pub use sel::render_sel_chart;
pub use spectrum::render_spectrum_chart;

use crate::analysis::Band;

/// Data for a single file in the SEL chart
pub struct FileChartData {
    pub label: char,
    pub name: String,
    pub band_sels: Vec<f64>,
    pub total_sel: f64,
}

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2800;
pub(super) const CHART_HEIGHT: u32 = 1200;

/// Maximum number of files supported for chart rendering
pub fn max_chart_files() -> usize {
    colors::FILE_COLORS.len()
}

/// Format frequency for display (e.g., 1000 -> "1k", 31.5 -> "31.5")
pub(super) fn format_freq(hz: f64) -> String {
    if hz >= 1000.0 {
        let k = hz / 1000.0;
        if k == k.floor() {
            format!("{}k", k as u32)
        } else {
            format!("{:.1}k", k)
        }
    } else if hz == hz.floor() {
        format!("{}", hz as u32)
    } else {
        format!("{:.1}", hz)
    }
}

/// Two-line x-axis label: nominal frequency over band index
pub(super) fn build_band_label(band: &Band) -> String {
    format!("{}\n({})", format_freq(band.nominal_hz), band.index)
}
