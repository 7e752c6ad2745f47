use std::f64::consts::PI;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_wav(path: &Path, samples: &[f64], sample_rate: u32) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * bits_per_sample as u32 / 8;
    let block_align = channels * bits_per_sample / 8;
    let data_size = samples.len() as u32 * 2;
    let file_size = 36 + data_size;

    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?;
    writer.write_all(&channels.to_le_bytes())?;
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&bits_per_sample.to_le_bytes())?;
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    for &sample in samples {
        let value = (sample * 32767.0).clamp(-32768.0, 32767.0) as i16;
        writer.write_all(&value.to_le_bytes())?;
    }

    Ok(())
}

fn sine(freq: f64, amp: f64, duration: f64, sample_rate: u32) -> Vec<f64> {
    let n = (duration * sample_rate as f64) as usize;
    (0..n)
        .map(|i| amp * (2.0 * PI * freq * i as f64 / sample_rate as f64).sin())
        .collect()
}

/// One tone per octave, placed at exact one-third-octave band centers
fn octave_tones(duration: f64, sample_rate: u32) -> Vec<f64> {
    // Band centers 1000 * 2^(n/3) for n = -15, -12, ..., 12
    let freqs: Vec<f64> = (-5..=4).map(|k| 1000.0 * 2.0_f64.powi(k)).collect();

    let n = (duration * sample_rate as f64) as usize;
    let amp = 0.08;

    (0..n)
        .map(|i| {
            freqs
                .iter()
                .map(|&f| amp * (2.0 * PI * f * i as f64 / sample_rate as f64).sin())
                .sum()
        })
        .collect()
}

fn noise(duration: f64, sample_rate: u32, seed: u64) -> Vec<f64> {
    let n = (duration * sample_rate as f64) as usize;
    let mut state = seed;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            0.3 * (state as f64 / u64::MAX as f64 * 2.0 - 1.0)
        })
        .collect()
}

fn main() -> std::io::Result<()> {
    let sr = 48000;
    let dur = 10.0;
    let dir = Path::new("test_data");
    std::fs::create_dir_all(dir)?;

    // Single tones at exact band centers
    write_wav(&dir.join("1khz.wav"), &sine(1000.0, 0.5, dur, sr), sr)?;
    write_wav(&dir.join("63hz.wav"), &sine(62.996, 0.5, dur, sr), sr)?;
    write_wav(&dir.join("8khz.wav"), &sine(8000.0, 0.5, dur, sr), sr)?;

    // One tone per octave across the default band range
    write_wav(&dir.join("octaves.wav"), &octave_tones(dur, sr), sr)?;

    // White noise for broadband comparison
    write_wav(&dir.join("noise.wav"), &noise(dur, sr, 12345), sr)?;

    println!("Generated: 1khz.wav, 63hz.wav, 8khz.wav, octaves.wav, noise.wav");
    Ok(())
}
