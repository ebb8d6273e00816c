use std::fs::File;
use std::path::Path;

use rubato::{FastFixedIn, PolynomialDegree, Resampler};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::debug;

use crate::error::{Error, Result};

use super::clip::Clip;

/// Decode a whole audio file into a stereo [`Clip`] at `target_rate`.
///
/// Any sample format symphonia can read is converted to f32; mono is
/// duplicated to stereo, wider layouts are downmixed; files at a different
/// native rate are resampled.
pub fn load(path: &Path, target_rate: u32) -> Result<Clip> {
    let file = File::open(path).map_err(|e| decode_error(path, e))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| decode_error(path, e))?;
    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| decode_error(path, "no audio track found"))?;
    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let native_rate = codec_params.sample_rate.unwrap_or(target_rate);
    let channels = codec_params.channels.map(|c| c.count()).unwrap_or(2);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| decode_error(path, e))?;

    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    let mut interleaved: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(decode_error(path, e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            // A malformed packet is skippable; the rest of the file may be fine.
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => return Err(decode_error(path, e)),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
        }
        if let Some(buf) = sample_buf.as_mut() {
            buf.copy_interleaved_ref(decoded);
            interleaved.extend_from_slice(buf.samples());
        }
    }

    if interleaved.is_empty() {
        return Err(decode_error(path, "file holds no decodable audio"));
    }

    let stereo = to_stereo(&interleaved, channels);
    let samples = if native_rate == target_rate {
        stereo
    } else {
        debug!(
            from = native_rate,
            to = target_rate,
            path = %path.display(),
            "resampling track"
        );
        resample(&stereo, native_rate, target_rate).map_err(|m| decode_error(path, m))?
    };

    let clip = Clip::new(samples, target_rate);
    debug!(
        path = %path.display(),
        frames = clip.frames(),
        seconds = clip.duration_seconds(),
        "decoded track"
    );
    Ok(clip)
}

fn decode_error(path: &Path, message: impl ToString) -> Error {
    Error::Decode {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Fold any channel layout into interleaved stereo.
fn to_stereo(interleaved: &[f32], channels: usize) -> Vec<f32> {
    match channels {
        0 | 2 => interleaved.to_vec(),
        1 => {
            let mut stereo = Vec::with_capacity(interleaved.len() * 2);
            for &sample in interleaved {
                stereo.push(sample);
                stereo.push(sample);
            }
            stereo
        }
        n => {
            // Average even channels into the left, odd into the right.
            let frames = interleaved.len() / n;
            let mut stereo = Vec::with_capacity(frames * 2);
            for frame in interleaved.chunks_exact(n) {
                let mut left = 0.0f32;
                let mut right = 0.0f32;
                for (ch, &sample) in frame.iter().enumerate() {
                    if ch % 2 == 0 {
                        left += sample;
                    } else {
                        right += sample;
                    }
                }
                let half = n as f32 / 2.0;
                stereo.push(left / half);
                stereo.push(right / half);
            }
            stereo
        }
    }
}

/// Resample interleaved stereo samples in a single pass.
fn resample(input: &[f32], input_rate: u32, output_rate: u32) -> std::result::Result<Vec<f32>, String> {
    let frames = input.len() / 2;
    if frames == 0 {
        return Ok(Vec::new());
    }

    let mut planar: Vec<Vec<f32>> = vec![Vec::with_capacity(frames); 2];
    for frame in input.chunks_exact(2) {
        planar[0].push(frame[0]);
        planar[1].push(frame[1]);
    }

    let mut resampler = FastFixedIn::<f32>::new(
        output_rate as f64 / input_rate as f64,
        1.0,
        PolynomialDegree::Septic,
        frames,
        2,
    )
    .map_err(|e| format!("failed to create resampler: {e}"))?;

    let planar_output = resampler
        .process(&planar, None)
        .map_err(|e| format!("resampling failed: {e}"))?;

    let out_frames = planar_output[0].len();
    let mut interleaved = Vec::with_capacity(out_frames * 2);
    for i in 0..out_frames {
        interleaved.push(planar_output[0][i]);
        interleaved.push(planar_output[1][i]);
    }
    Ok(interleaved)
}
