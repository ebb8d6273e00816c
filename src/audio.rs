//! Audio backend: decoding tracks into in-memory clips, fade envelopes,
//! compositing a timeline and writing the rendered playlist to disk.

mod clip;
mod decode;
mod render;

pub use clip::Clip;
pub use decode::load;
pub use render::{composite, write_playlist};

#[cfg(test)]
mod tests;
