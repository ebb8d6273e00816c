use super::*;
use crate::playlist::{AppliedFades, TimelineEntry};

use tempfile::tempdir;

const RATE: u32 = 1000;

fn ones_clip(seconds: f64) -> Clip {
    let frames = (seconds * RATE as f64).round() as usize;
    Clip::new(vec![1.0; frames * 2], RATE)
}

fn entry(clip: Clip, start_offset: f64) -> TimelineEntry {
    TimelineEntry {
        clip,
        title: "t".to_string(),
        start_offset,
        fades: AppliedFades::TailOnly,
    }
}

#[test]
fn clip_duration_counts_stereo_frames() {
    let clip = Clip::new(vec![0.0; 2 * 2500], RATE);
    assert_eq!(clip.frames(), 2500);
    assert!((clip.duration_seconds() - 2.5).abs() < 1e-12);
}

#[test]
fn fade_in_ramps_linearly_from_silence() {
    let mut clip = ones_clip(2.0);
    clip.fade_in(1.0);

    let samples = clip.samples();
    assert_eq!(samples[0], 0.0);
    // Halfway through the envelope the gain is 0.5.
    let mid = (RATE / 2) as usize * 2;
    assert!((samples[mid] - 0.5).abs() < 1e-3);
    // Past the envelope the clip is untouched.
    assert!(samples[RATE as usize * 2..].iter().all(|&s| s == 1.0));
}

#[test]
fn fade_out_ramps_linearly_to_silence() {
    let mut clip = ones_clip(2.0);
    clip.fade_out(1.0);

    let samples = clip.samples();
    assert!(samples[..RATE as usize * 2].iter().all(|&s| s == 1.0));
    assert!(samples[samples.len() - 2] < 0.01);
    let mid = samples.len() - (RATE / 2) as usize * 2;
    assert!((samples[mid] - 0.5).abs() < 1e-3);
}

#[test]
fn zero_length_fades_are_no_ops() {
    let mut clip = ones_clip(1.0);
    clip.fade_in(0.0);
    clip.fade_out(0.0);
    assert!(clip.samples().iter().all(|&s| s == 1.0));
}

#[test]
fn fades_longer_than_the_clip_are_clamped() {
    let mut clip = ones_clip(1.0);
    clip.fade_out(10.0);
    let samples = clip.samples();
    // Whole clip became the envelope; it still starts at full volume.
    assert_eq!(samples[0], 1.0);
    assert!(samples[samples.len() - 2] < 0.01);
}

#[test]
fn opposing_linear_fades_sum_to_unity() {
    let mut tail = ones_clip(2.0);
    tail.fade_out(1.0);
    let mut head = ones_clip(2.0);
    head.fade_in(1.0);

    let entries = vec![entry(tail, 0.0), entry(head, 1.0)];
    let mix = composite(&entries, RATE);

    // Total: 2s + 2s - 1s overlap.
    assert_eq!(mix.len(), 3 * RATE as usize * 2);
    // Inside the overlap the fades complement each other.
    let overlap = &mix[RATE as usize * 2..2 * RATE as usize * 2];
    assert!(overlap.iter().all(|&s| (s - 1.0).abs() < 1e-6));
}

#[test]
fn composite_is_as_long_as_the_latest_entry() {
    let entries = vec![entry(ones_clip(1.0), 0.0), entry(ones_clip(2.0), 0.5)];
    let mix = composite(&entries, RATE);
    assert_eq!(mix.len(), (2.5 * RATE as f64) as usize * 2);
}

#[test]
fn composite_of_nothing_is_empty() {
    assert!(composite(&[], RATE).is_empty());
}

#[test]
fn composite_places_clips_at_their_offsets() {
    let entries = vec![entry(ones_clip(1.0), 0.0), entry(ones_clip(1.0), 2.0)];
    let mix = composite(&entries, RATE);

    assert_eq!(mix.len(), 3 * RATE as usize * 2);
    // 0..1s: first clip, 1..2s: silence, 2..3s: second clip.
    assert!(mix[..RATE as usize * 2].iter().all(|&s| s == 1.0));
    assert!(
        mix[RATE as usize * 2..2 * RATE as usize * 2]
            .iter()
            .all(|&s| s == 0.0)
    );
    assert!(mix[2 * RATE as usize * 2..].iter().all(|&s| s == 1.0));
}

#[test]
fn written_wav_decodes_back_to_the_same_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tone.wav");

    // 0.5s of an alternating signal at 8kHz, quiet enough that the i16
    // round trip only costs quantization error.
    let rate = 8000u32;
    let frames = 4000usize;
    let samples: Vec<f32> = (0..frames * 2)
        .map(|i| if (i / 2) % 20 < 10 { 0.5 } else { -0.5 })
        .collect();
    render::write_wav(&path, &samples, rate).unwrap();

    let clip = load(&path, rate).unwrap();
    assert_eq!(clip.sample_rate(), rate);
    assert_eq!(clip.frames(), frames);
    assert!((clip.duration_seconds() - 0.5).abs() < 1e-9);

    for (&got, &want) in clip.samples().iter().zip(samples.iter()) {
        assert!((got - want).abs() < 1e-3, "{got} != {want}");
    }
}

#[test]
fn written_wav_is_16_bit_stereo_at_the_requested_rate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spec.wav");
    render::write_wav(&path, &[0.0; 64], 44_100).unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.len(), 64);
}

#[test]
fn write_playlist_emits_wav_and_timestamp_index() {
    use crate::playlist::Timestamp;

    let dir = tempdir().unwrap();
    let entries = vec![entry(ones_clip(1.0), 0.0)];
    let timestamps = vec![Timestamp {
        display_time: "00:00:00".to_string(),
        label: "Opener".to_string(),
    }];

    let wav = write_playlist(dir.path(), "evening", &entries, &timestamps, RATE).unwrap();
    assert_eq!(wav, dir.path().join("evening.wav"));
    assert!(wav.is_file());

    let index = std::fs::read_to_string(dir.path().join("evening.timestamps.txt")).unwrap();
    assert_eq!(index, "00:00:00 Opener");
}

#[test]
fn loading_a_missing_file_fails() {
    assert!(load(std::path::Path::new("/no/such/track.wav"), RATE).is_err());
}
