//! Multiple recording comparison mode

use colored::*;

use crate::analysis::Band;
use crate::audio::Calibration;
use crate::chart;
use crate::output::{
    format_colored_diff, format_level, format_nominal, print_band_geometry, print_legend,
    print_rule,
};

pub fn run_compare(
    filenames: &[String],
    calibration: &Calibration,
    bands: &[Band],
    order: usize,
    quiet: bool,
    image_path: Option<&str>,
) -> Result<(), String> {
    let labels: Vec<char> = ('A'..='Z').collect();

    let analyses = filenames
        .iter()
        .map(|f| super::analyze_file(f, calibration, bands, order, !quiet))
        .collect::<Result<Vec<_>, String>>()?;

    println!("Comparison (base: [A]):");
    for (i, a) in analyses.iter().enumerate() {
        let label = format!("[{}]", labels[i]);
        println!("  {} {}", label.bold(), a.name);
    }
    println!();

    if !quiet {
        print_band_geometry(bands, None);
    }

    println!("[One-Third-Octave Band SEL]");
    print!("  {:>9}", "Band");
    for (i, _) in analyses.iter().enumerate() {
        print!(" {:>8}", format!("[{}]", labels[i]));
    }
    for (i, _) in analyses.iter().enumerate().skip(1) {
        print!(" {:>8}", format!("{}-A", labels[i]));
    }
    println!();
    let table_width = 9 + 9 * (2 * analyses.len() - 1);
    print_rule(table_width);

    for (band_idx, band) in bands.iter().enumerate() {
        print!("  {:>9}", format!("{} Hz", format_nominal(band.nominal_hz)));
        for a in &analyses {
            print!(" {}", format_level(a.band_sels[band_idx]));
        }
        for a in &analyses[1..] {
            print!(
                " {}",
                format_colored_diff(a.band_sels[band_idx] - analyses[0].band_sels[band_idx])
            );
        }
        println!();
    }
    print_rule(table_width);

    print!("  {:>9}", "Sum");
    for a in &analyses {
        print!(" {}", format_level(a.total_sel));
    }
    for a in &analyses[1..] {
        print!(" {}", format_colored_diff(a.total_sel - analyses[0].total_sel));
    }
    println!();

    print!("  {:>9}", "Broadband");
    for a in &analyses {
        print!(" {}", format_level(a.broadband_sel));
    }
    for a in &analyses[1..] {
        print!(
            " {}",
            format_colored_diff(a.broadband_sel - analyses[0].broadband_sel)
        );
    }
    println!();

    if !quiet {
        println!();
        print_legend();
    }

    if let Some(path) = image_path {
        let file_data: Vec<chart::FileChartData> = analyses
            .iter()
            .enumerate()
            .map(|(i, a)| chart::FileChartData {
                label: labels[i],
                name: a.name.clone(),
                band_sels: a.band_sels.clone(),
                total_sel: a.total_sel,
            })
            .collect();

        chart::render_sel_chart(&file_data, bands, path)?;
        eprintln!("Chart saved to: {}", path);
    }

    Ok(())
}
