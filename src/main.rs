mod analysis;
mod audio;
mod chart;
mod mode;
mod output;

use clap::Parser;

use audio::Calibration;
use mode::{run_analyze, run_bands, run_compare};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "tobsel",
    version,
    about = "One-third-octave band SEL analyzer for calibrated acoustic recordings",
    after_help = "Examples:
  tobsel recording.wav                                Analyze with the default 40-16000 Hz bands
  tobsel --sensitivity -165 --gain 12 recording.wav   Apply hydrophone calibration
  tobsel -l 100 -u 8000 recording.wav                 Restrict the band range
  tobsel a.wav b.wav                                  Compare per-band SEL (first is base)
  tobsel --image sel.png recording.wav                Render the per-band SEL chart
  tobsel --spectrum psd.png recording.wav             Original vs reconstructed spectra
  tobsel --list-bands --rate 96000                    Show band geometry for a sample rate"
)]
struct Args {
    /// Recordings to analyze (WAV, AIFF, FLAC). Up to 10 files for comparison.
    #[arg(required_unless_present = "list_bands")]
    files: Vec<String>,

    /// Lowest band center frequency (Hz)
    #[arg(short = 'l', long, default_value_t = 40.0, value_name = "HZ")]
    low: f64,

    /// Highest band center frequency (Hz)
    #[arg(short = 'u', long, default_value_t = 16000.0, value_name = "HZ")]
    high: f64,

    /// Butterworth band-pass filter order
    #[arg(long, default_value_t = 4, value_name = "N")]
    order: usize,

    /// Hydrophone sensitivity (dB re 1 V/µPa)
    #[arg(
        long,
        default_value_t = 0.0,
        value_name = "DB",
        allow_negative_numbers = true
    )]
    sensitivity: f64,

    /// Recorder gain (dB)
    #[arg(
        long,
        default_value_t = 0.0,
        value_name = "DB",
        allow_negative_numbers = true
    )]
    gain: f64,

    /// Digitizer peak-to-peak voltage
    #[arg(long, default_value_t = 2.0, value_name = "VOLTS")]
    vpp: f64,

    /// Digitizer bit depth
    #[arg(long, default_value_t = 16, value_name = "N")]
    bits: u32,

    /// Print the band geometry table and exit
    #[arg(long)]
    list_bands: bool,

    /// Sample rate for --list-bands Nyquist checks (Hz)
    #[arg(long, default_value_t = 48000, value_name = "HZ")]
    rate: u32,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output per-band SEL chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Output original vs reconstructed spectrum chart as PNG (single file only)
    #[arg(long, value_name = "PATH")]
    spectrum: Option<String>,
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate file count
    if args.files.len() > 10 {
        print_error("Too many files specified (max 10)");
        std::process::exit(1);
    }

    // Validate filter and calibration parameters
    if args.order == 0 {
        print_error("Filter order must be at least 1");
        std::process::exit(1);
    }

    if args.bits == 0 || args.bits > 32 {
        print_error("Bit depth must be between 1 and 32");
        std::process::exit(1);
    }

    if args.vpp <= 0.0 {
        print_error("Peak-to-peak voltage must be positive");
        std::process::exit(1);
    }

    if args.rate == 0 {
        print_error("Sample rate must be positive");
        std::process::exit(1);
    }

    // Validate option combinations
    if args.spectrum.is_some() && args.files.len() != 1 {
        print_error("--spectrum can only be used with a single file");
        std::process::exit(1);
    }

    if args.image.is_some() && args.files.len() > chart::max_chart_files() {
        print_error(&format!(
            "--image supports up to {} files",
            chart::max_chart_files()
        ));
        std::process::exit(1);
    }

    // Validate chart output paths
    for path in args.image.iter().chain(args.spectrum.iter()) {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    // Resolve the band range up front so geometry errors surface before
    // any decoding work
    let bands = match analysis::band_range(args.low, args.high) {
        Ok(bands) => bands,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let calibration = Calibration {
        sensitivity_db: args.sensitivity,
        gain_db: args.gain,
        vpp: args.vpp,
        bits: args.bits,
    };

    // Dispatch to appropriate mode
    let result = if args.list_bands {
        run_bands(&bands, args.rate)
    } else if args.files.len() >= 2 {
        run_compare(
            &args.files,
            &calibration,
            &bands,
            args.order,
            args.quiet,
            args.image.as_deref(),
        )
    } else {
        run_analyze(
            &args.files[0],
            &calibration,
            &bands,
            args.order,
            args.quiet,
            args.image.as_deref(),
            args.spectrum.as_deref(),
        )
    };

    if let Err(e) = result {
        print_error(&e);
        std::process::exit(1);
    }
}
