use std::fs::File;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Conversion from digitizer counts to calibrated pressure (µPa).
///
/// `scale` folds the chain together: decoded samples are counts over
/// full scale, counts become volts through the digitizer range, and
/// volts become µPa by undoing sensitivity and gain. The default
/// (0 dB sensitivity, 0 dB gain, 2 Vpp, 16 bits) is an identity scale,
/// leaving uncalibrated recordings in relative units.
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    /// Hydrophone sensitivity, dB re 1 V/µPa (typically large negative)
    pub sensitivity_db: f64,
    /// Recorder gain, dB
    pub gain_db: f64,
    /// Digitizer peak-to-peak voltage
    pub vpp: f64,
    /// Digitizer bit depth
    pub bits: u32,
}

impl Calibration {
    pub fn scale(&self) -> f64 {
        let full_scale = (1u64 << (self.bits - 1)) as f64;
        let counts_to_volts = self.vpp / (1u64 << self.bits) as f64;
        full_scale * counts_to_volts * 10.0_f64.powf(-(self.sensitivity_db + self.gain_db) / 20.0)
    }
}

pub struct AudioData {
    /// Calibrated pressure samples, µPa
    pub samples: Vec<f64>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioData {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Decode a recording to mono and apply the calibration scale.
pub fn load_audio(filename: &str, calibration: &Calibration) -> Result<AudioData, String> {
    let file = File::open(filename).map_err(|e| format!("Error opening file: {}", e))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
    {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| format!("Unsupported format: {}", e))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != symphonia::core::codecs::CODEC_TYPE_NULL)
        .ok_or("No audio track found")?;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or("Unknown sample rate")?;
    let channels = track
        .codec_params
        .channels
        .ok_or("Unknown channel count")?
        .count() as u16;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| format!("Failed to create decoder: {}", e))?;

    let track_id = track.id;
    let scale = calibration.scale();
    let mut samples: Vec<f64> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(format!("Error reading packet: {}", e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Warning: decode error: {}", e);
                continue;
            }
        };

        let spec = *decoded.spec();
        let num_channels = spec.channels.count();

        let mut sample_buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);

        for chunk in sample_buf.samples().chunks(num_channels) {
            let mono: f64 = chunk.iter().map(|&s| s as f64).sum::<f64>() / num_channels as f64;
            samples.push(mono * scale);
        }
    }

    Ok(AudioData {
        samples,
        sample_rate,
        channels,
    })
}
