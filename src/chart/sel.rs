//! Per-band SEL bar chart rendering

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, TextStyle},
    renderer::ImageFormat,
    series::Bar,
};

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT, FILE_COLORS};
use super::{CHART_HEIGHT, CHART_WIDTH, FileChartData, build_band_label};
use crate::analysis::Band;

/// Render a per-band SEL chart to a PNG file (1-4 files)
pub fn render_sel_chart(
    files: &[FileChartData],
    bands: &[Band],
    output_path: &str,
) -> Result<(), String> {
    if files.is_empty() || files.len() > FILE_COLORS.len() {
        return Err(format!("Chart requires 1-{} files", FILE_COLORS.len()));
    }

    let band_labels: Vec<String> = bands.iter().map(build_band_label).collect();

    // Round values to 1 decimal place for display
    let round = |v: &f64| (v * 10.0).round() / 10.0;

    let subtitle = files
        .iter()
        .map(|f| format!("[{}] {} (SEL {:.1} dB re 1 µPa²·s)", f.label, f.name, f.total_sel))
        .collect::<Vec<_>>()
        .join("  vs  ");

    let legend_data: Vec<String> = files
        .iter()
        .map(|f| format!("[{}] {}", f.label, f.name))
        .collect();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("One-Third-Octave Band SEL")
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(legend_data.clone())
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
                .type_(AxisType::Category)
                .data(band_labels)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("dB re 1 µPa²·s")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    for (i, f) in files.iter().enumerate() {
        // Silent bands (-inf) serialize as null and render as gaps
        let data: Vec<f64> = f.band_sels.iter().map(round).collect();
        chart = chart.series(
            Bar::new()
                .name(&legend_data[i])
                .data(data)
                .item_style(ItemStyle::new().color(FILE_COLORS[i])),
        );
    }

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
