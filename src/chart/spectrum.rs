//! Original vs reconstructed power spectrum comparison chart

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisType, Color, LineStyle, SplitLine, Symbol, TextStyle},
    renderer::ImageFormat,
    series::Line,
};

use super::colors::{
    COLOR_BACKGROUND, COLOR_GRID, COLOR_SPECTRUM_ORIGINAL, COLOR_SPECTRUM_RECONSTRUCTED,
    COLOR_TEXT,
};
use super::{CHART_HEIGHT, CHART_WIDTH};
use crate::analysis::Periodogram;

/// Minimum power threshold to avoid log(0) in dB conversion
const MIN_POWER: f64 = 1e-20;

/// Number of logarithmically spaced frequency bins drawn per series
const CHART_BINS: usize = 600;

/// Average a periodogram into log-spaced bins as (frequency, dB) pairs.
/// A full periodogram carries one bin per FFT line, far more than the
/// plot can resolve; averaging also steadies the single-periodogram
/// variance enough to read.
fn log_binned_db(pxx: &Periodogram) -> Vec<Vec<f64>> {
    // The DC bin has no place on a log axis
    if pxx.frequencies.len() < 3 {
        return Vec::new();
    }
    let fmin = pxx.frequencies[1];
    let fmax = *pxx.frequencies.last().unwrap();
    let span = (fmax / fmin).ln();

    let mut sums = vec![(0.0f64, 0usize); CHART_BINS];
    for (f, p) in pxx.frequencies[1..].iter().zip(&pxx.power[1..]) {
        let bin = (((f / fmin).ln() / span) * CHART_BINS as f64) as usize;
        let bin = bin.min(CHART_BINS - 1);
        sums[bin].0 += p;
        sums[bin].1 += 1;
    }

    sums.iter()
        .enumerate()
        .filter(|(_, (_, count))| *count > 0)
        .map(|(i, (sum, count))| {
            let freq = fmin * (span * (i as f64 + 0.5) / CHART_BINS as f64).exp();
            let db = 10.0 * (sum / *count as f64).max(MIN_POWER).log10();
            vec![freq, db]
        })
        .collect()
}

/// Render the original and reconstructed spectra on shared axes
pub fn render_spectrum_chart(
    original: &Periodogram,
    reconstructed: &Periodogram,
    name: &str,
    output_path: &str,
) -> Result<(), String> {
    let original_points = log_binned_db(original);
    let reconstructed_points = log_binned_db(reconstructed);
    if original_points.is_empty() {
        return Err("Signal too short for a spectrum chart".to_string());
    }

    let legend_data = vec!["Original".to_string(), "Reconstructed".to_string()];

    let chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Power Spectral Density")
                .subtext(name)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(legend_data)
                .bottom("3%")
                .item_gap(40)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("4%")
                .right("3%")
                .bottom("9%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Log)
                .name("Hz")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("dB re 1 µPa²/Hz")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        )
        .series(
            Line::new()
                .name("Original")
                .data(original_points)
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(2).color(COLOR_SPECTRUM_ORIGINAL)),
        )
        .series(
            Line::new()
                .name("Reconstructed")
                .data(reconstructed_points)
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(2).color(COLOR_SPECTRUM_RECONSTRUCTED)),
        );

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
