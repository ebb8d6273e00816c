use std::fs;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::info;

use crate::error::{Error, Result};
use crate::playlist::{Timestamp, TimelineEntry};

/// Sum every timeline entry into one interleaved stereo buffer.
///
/// Each entry contributes its (already faded) samples starting at its
/// `start_offset`; the mix is as long as the latest-ending entry.
pub fn composite(entries: &[TimelineEntry], sample_rate: u32) -> Vec<f32> {
    let total_frames = entries
        .iter()
        .map(|e| offset_frames(e.start_offset, sample_rate) + e.clip.frames())
        .max()
        .unwrap_or(0);

    let mut mix = vec![0.0f32; total_frames * 2];
    for entry in entries {
        let base = offset_frames(entry.start_offset, sample_rate) * 2;
        for (i, &sample) in entry.clip.samples().iter().enumerate() {
            mix[base + i] += sample;
        }
    }
    mix
}

/// Render one playlist: `<name>.wav` plus `<name>.timestamps.txt` in
/// `output_dir`. Returns the path of the written WAV.
pub fn write_playlist(
    output_dir: &Path,
    name: &str,
    entries: &[TimelineEntry],
    timestamps: &[Timestamp],
    sample_rate: u32,
) -> Result<PathBuf> {
    let mix = composite(entries, sample_rate);

    let wav_path = output_dir.join(format!("{name}.wav"));
    write_wav(&wav_path, &mix, sample_rate)?;

    let timestamps_path = output_dir.join(format!("{name}.timestamps.txt"));
    let lines: Vec<String> = timestamps.iter().map(Timestamp::line).collect();
    fs::write(&timestamps_path, lines.join("\n"))?;

    info!(
        playlist = name,
        seconds = mix.len() as f64 / 2.0 / sample_rate as f64,
        wav = %wav_path.display(),
        "playlist written"
    );
    Ok(wav_path)
}

/// Write interleaved stereo f32 samples as a 16-bit PCM WAV.
pub(crate) fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer =
        WavWriter::create(path, spec).map_err(|e| Error::Render(e.to_string()))?;
    for &sample in samples {
        let scaled = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
        writer
            .write_sample(scaled)
            .map_err(|e| Error::Render(e.to_string()))?;
    }
    writer.finalize().map_err(|e| Error::Render(e.to_string()))?;
    Ok(())
}

fn offset_frames(seconds: f64, sample_rate: u32) -> usize {
    (seconds * sample_rate as f64).round() as usize
}
