/// One line of the timestamp index: a seek point and the track it lands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    /// Seek point formatted `HH:MM:SS`.
    pub display_time: String,
    /// Track title, trimmed of surrounding whitespace.
    pub label: String,
}

impl Timestamp {
    pub fn line(&self) -> String {
        format!("{} {}", self.display_time, self.label)
    }
}

/// Format whole seconds as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_hhmmss(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
