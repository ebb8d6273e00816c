use crate::audio::Clip;
use crate::error::{Error, Result};
use crate::library::AudioTrack;

use super::timestamp::{Timestamp, format_hhmmss};

/// Which envelope(s) a timeline entry received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedFades {
    /// First track: starts at full volume, fades into its successor.
    TailOnly,
    /// Last track: fades in from its predecessor, plays out at full volume.
    HeadOnly,
    /// Interior track: fades both in and out.
    HeadAndTail,
}

/// A track placed on the playlist timeline, envelopes already applied.
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub clip: Clip,
    pub title: String,
    /// Seconds from the start of the composite where this clip begins.
    pub start_offset: f64,
    pub fades: AppliedFades,
}

/// Place `tracks` on a shared timeline, overlapping consecutive tracks by
/// exactly `crossfade_seconds`.
///
/// Each later track starts where its predecessor began fading out, so the
/// composite runs `sum(durations) - crossfade * (n - 1)` seconds. The
/// displayed timestamp of a later track is the midpoint of its crossfade-in
/// region, rounded to whole seconds; the first track's is always `00:00:00`.
pub fn build(
    tracks: Vec<AudioTrack>,
    crossfade_seconds: f64,
) -> Result<(Vec<TimelineEntry>, Vec<Timestamp>)> {
    if tracks.is_empty() {
        return Err(Error::Configuration(
            "cannot build a playlist from an empty group".to_string(),
        ));
    }
    if crossfade_seconds < 0.0 {
        return Err(Error::Configuration(format!(
            "crossfade must be non-negative, got {crossfade_seconds}"
        )));
    }
    // A crossfade as long as a track would push the next start offset
    // backwards. Only tracks with a successor can trigger this.
    for (i, track) in tracks.iter().enumerate() {
        let duration = track.clip.duration_seconds();
        if i + 1 < tracks.len() && crossfade_seconds >= duration {
            return Err(Error::Configuration(format!(
                "crossfade of {crossfade_seconds}s swallows '{}' ({duration:.2}s)",
                track.title
            )));
        }
    }

    let count = tracks.len();
    let mut start_audio_at = 0.0f64;
    let mut entries: Vec<TimelineEntry> = Vec::with_capacity(count);
    let mut timestamps: Vec<Timestamp> = Vec::with_capacity(count);

    for (i, track) in tracks.into_iter().enumerate() {
        let AudioTrack { title, mut clip } = track;
        let duration = clip.duration_seconds();

        let (start_offset, fades, timestamp_seconds) = if i == 0 {
            // The opening track starts at full volume; it only fades out.
            clip.fade_out(crossfade_seconds);
            (0.0, AppliedFades::TailOnly, 0u64)
        } else {
            clip.fade_in(crossfade_seconds);
            // Seek points land mid-overlap, inside the audible transition.
            let seconds = (start_audio_at + crossfade_seconds / 2.0).round() as u64;
            let fades = if i + 1 < count {
                clip.fade_out(crossfade_seconds);
                AppliedFades::HeadAndTail
            } else {
                AppliedFades::HeadOnly
            };
            (start_audio_at, fades, seconds)
        };

        timestamps.push(Timestamp {
            display_time: format_hhmmss(timestamp_seconds),
            label: title.trim().to_string(),
        });
        entries.push(TimelineEntry {
            clip,
            title,
            start_offset,
            fades,
        });

        start_audio_at += duration - crossfade_seconds;
    }

    Ok((entries, timestamps))
}
