//! Playlist assembly: placing tracks on a shared timeline with linear
//! crossfades and deriving the human-readable timestamp index.

mod build;
mod timestamp;

pub use build::{AppliedFades, TimelineEntry, build};
pub use timestamp::{Timestamp, format_hhmmss};
