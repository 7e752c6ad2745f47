//! Band geometry listing mode

use crate::analysis::Band;
use crate::output::{print_band_geometry, print_warning};

pub fn run_bands(bands: &[Band], sample_rate: u32) -> Result<(), String> {
    let nyquist = sample_rate as f64 / 2.0;
    println!(
        "Sample rate: {} Hz (Nyquist {:.0} Hz)",
        sample_rate, nyquist
    );
    println!();
    print_band_geometry(bands, Some(nyquist));

    if bands.iter().any(|b| b.high_hz >= nyquist) {
        print_warning("bands at or above the Nyquist rate cannot be filtered at this sample rate");
    }
    Ok(())
}
