//! Single recording analysis mode

use crate::analysis::{Band, periodogram};
use crate::audio::Calibration;
use crate::chart;
use crate::output::{
    print_band_geometry, print_file_info, print_legend, print_reconstruction, print_sel_table,
    print_totals,
};

pub fn run_analyze(
    filename: &str,
    calibration: &Calibration,
    bands: &[Band],
    order: usize,
    quiet: bool,
    image_path: Option<&str>,
    spectrum_path: Option<&str>,
) -> Result<(), String> {
    let analysis = super::analyze_file(filename, calibration, bands, order, !quiet)?;

    if !quiet {
        println!();
        println!("SEL Analysis");
        print_file_info(
            &analysis.name,
            analysis.sample_rate,
            analysis.channels,
            analysis.duration_secs,
            calibration,
        );
        print_band_geometry(bands, Some(analysis.sample_rate as f64 / 2.0));
    }

    print_sel_table(bands, &analysis.band_sels);
    print_totals(analysis.total_sel, analysis.broadband_sel);
    print_reconstruction(&analysis.reconstruction);

    if !quiet {
        println!();
        print_legend();
    }

    if let Some(path) = image_path {
        let data = vec![chart::FileChartData {
            label: 'A',
            name: analysis.name.clone(),
            band_sels: analysis.band_sels.clone(),
            total_sel: analysis.total_sel,
        }];
        chart::render_sel_chart(&data, bands, path)?;
        eprintln!("Chart saved to: {}", path);
    }

    if let Some(path) = spectrum_path {
        let fs = analysis.sample_rate as f64;
        let original = periodogram(&analysis.samples, fs);
        let reconstructed = periodogram(&analysis.reconstruction.reconstructed, fs);
        chart::render_spectrum_chart(&original, &reconstructed, &analysis.name, path)?;
        eprintln!("Spectrum chart saved to: {}", path);
    }

    Ok(())
}
