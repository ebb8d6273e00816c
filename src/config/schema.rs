use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/segue/config.toml` or `~/.config/segue/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SEGUE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub output: OutputSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            output: OutputSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions recognized as playlist tracks, without the leading dot.
    ///
    /// Matching is case-insensitive: `Track.WAV` qualifies when `"wav"` is
    /// listed here.
    pub extensions: Vec<String>,

    /// Whether dotfiles count as tracks.
    pub include_hidden: bool,

    /// Whether to follow symlinks while scanning directories.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec![
                "wav".to_string(),
                "mp3".to_string(),
                "flac".to_string(),
                "ogg".to_string(),
            ],
            include_hidden: false,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Sample rate of the rendered playlist WAVs. Tracks at other rates are
    /// resampled to this rate when loaded.
    pub sample_rate: u32,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { sample_rate: 44_100 }
    }
}
