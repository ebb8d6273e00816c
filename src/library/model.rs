use std::path::PathBuf;

use crate::audio::Clip;

/// The validated shape of one group before any audio is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLayout {
    pub name: String,
    /// Qualifying files, ordered case-insensitively by file name.
    pub files: Vec<PathBuf>,
}

/// A decoded track: its display title (the file stem, stored verbatim) and
/// the audio itself.
#[derive(Debug, Clone)]
pub struct AudioTrack {
    pub title: String,
    pub clip: Clip,
}

/// One playlist's worth of decoded tracks.
#[derive(Debug, Clone)]
pub struct AudioGroup {
    pub name: String,
    pub tracks: Vec<AudioTrack>,
}
