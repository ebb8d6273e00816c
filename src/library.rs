//! Audio group discovery: deciding whether a directory is one playlist or a
//! set of sub-directory playlists, and loading the tracks of each group.

mod model;
mod scan;

pub use model::{AudioGroup, AudioTrack, GroupLayout};
pub use scan::{discover_layout, load_groups};
