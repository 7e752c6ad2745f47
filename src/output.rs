use crate::analysis::{Band, ReconstructionReport};
use crate::audio::Calibration;
use colored::*;

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

/// Nominal frequencies print as integers except 31.5 Hz
pub(crate) fn format_nominal(hz: f64) -> String {
    if hz == hz.floor() {
        format!("{}", hz as u32)
    } else {
        format!("{:.1}", hz)
    }
}

/// Fixed-width level cell; silence prints as -inf, a valid level
pub(crate) fn format_level(db: f64) -> String {
    if db.is_finite() {
        format!("{:>8.1}", db)
    } else if db == f64::NEG_INFINITY {
        format!("{:>8}", "-inf")
    } else {
        format!("{:>8}", "-")
    }
}

pub(crate) fn format_colored_diff(diff: f64) -> String {
    if !diff.is_finite() {
        return format!("{:>8}", "-");
    }
    let rounded = (diff * 10.0).round() / 10.0;
    if rounded == 0.0 {
        format!("{:>8.1}", 0.0)
    } else if rounded > 0.0 {
        format!("{:>+8.1}", diff).green().to_string()
    } else {
        format!("{:>+8.1}", diff).red().to_string()
    }
}

pub(crate) fn print_rule(width: usize) {
    println!("  {}", "-".repeat(width));
}

pub(crate) fn print_file_info(
    display_name: &str,
    sample_rate: u32,
    channels: u16,
    duration_secs: f64,
    calibration: &Calibration,
) {
    println!("File: {}", display_name);
    println!(
        "Sample rate: {} Hz, Channels: {}, Duration: {:.1} s",
        sample_rate, channels, duration_secs
    );
    println!(
        "Calibration: sensitivity {} dB re 1 V/µPa, gain {} dB, {} Vpp, {} bit",
        calibration.sensitivity_db, calibration.gain_db, calibration.vpp, calibration.bits
    );
    println!();
}

pub(crate) fn print_band_geometry(bands: &[Band], nyquist_hz: Option<f64>) {
    println!("Bands (one-third octave, band 0 = 1000 Hz):");
    println!(
        "  {:>5}  {:>8}  {:>10}  {:>21}",
        "Index", "Nominal", "Center", "Passband (Hz)"
    );
    for band in bands {
        let passband = format!("{:>9.1} - {:<9.1}", band.low_hz, band.high_hz);
        let marker = match nyquist_hz {
            Some(nyq) if band.high_hz >= nyq => "  (above Nyquist)",
            _ => "",
        };
        println!(
            "  {:>5}  {:>5} Hz  {:>7.1} Hz  {:>21}{}",
            band.index,
            format_nominal(band.nominal_hz),
            band.center_hz,
            passband,
            marker
        );
    }
    println!();
}

pub(crate) fn print_sel_table(bands: &[Band], levels: &[f64]) {
    println!("[One-Third-Octave Band SEL]");
    println!(
        "  {:>5}  {:>8}  {:>21}  {:>8}",
        "Band", "Nominal", "Passband (Hz)", "SEL"
    );
    print_rule(50);
    for (band, level) in bands.iter().zip(levels) {
        println!(
            "  {:>5}  {:>5} Hz  {:>9.1} - {:<9.1}  {}",
            band.index,
            format_nominal(band.nominal_hz),
            band.low_hz,
            band.high_hz,
            format_level(*level)
        );
    }
    print_rule(50);
}

pub(crate) fn print_totals(total_sel: f64, broadband_sel: f64) {
    println!(
        "  {}{} dB re 1 µPa²·s",
        "SEL (energetic sum)".bold(),
        format_level(total_sel)
    );
    println!(
        "  {}{} dB re 1 µPa²·s",
        "SEL (broadband)    ".bold(),
        format_level(broadband_sel)
    );
}

pub(crate) fn print_reconstruction(report: &ReconstructionReport) {
    println!();
    println!("[Reconstruction Check]");
    println!(
        "  Reconstructed SEL: {} dB ({} dB vs broadband)",
        format_level(report.reconstructed_sel).trim(),
        format_colored_diff(report.reconstructed_sel - report.original_sel).trim()
    );
    println!("  Peak residual: {:.3e} µPa", report.peak_residual);
}

pub(crate) fn print_legend() {
    println!("SEL: Sound Exposure Level, 10*log10 of integrated squared pressure, dB re 1 µPa²·s");
    println!("Energetic sum: per-band energies added in the linear domain, then converted to dB");
    println!("Broadband: SEL of the unfiltered signal; should sit close to the energetic sum");
    println!(
        "Reconstruction: all band signals summed back together - a gap beyond ~1 dB suggests a\n\
         band range that misses signal energy or a filter order that tiles the spectrum poorly"
    );
}
