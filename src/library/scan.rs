use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::audio;
use crate::config::LibrarySettings;
use crate::error::{Error, Result};

use super::model::{AudioGroup, AudioTrack, GroupLayout};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn file_name_key(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Qualifying audio files directly inside `dir`, sorted by file name.
fn audio_files_in(dir: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.into_path())
        .filter(|p| (settings.include_hidden || !is_hidden(p)) && is_audio_file(p, settings))
        .collect();
    files.sort_by_key(|p| file_name_key(p));
    files
}

/// Immediate sub-directories of `root`, sorted by name.
fn sub_directories(root: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.into_path())
        .filter(|p| !is_hidden(p))
        .collect();
    dirs.sort_by_key(|p| file_name_key(p));
    dirs
}

fn group_name(dir: &Path) -> String {
    // Canonicalize so "." and trailing slashes still yield a basename.
    let resolved = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "playlist".to_string())
}

/// Partition `root` into named groups without decoding anything.
///
/// Flat shape: `root` itself holds at least 2 qualifying files and becomes a
/// single group. Nested shape: otherwise every immediate sub-directory must
/// hold at least 2 qualifying files and each becomes a group. Anything else
/// fails fast with no partial output.
pub fn discover_layout(root: &Path, settings: &LibrarySettings) -> Result<Vec<GroupLayout>> {
    let direct = audio_files_in(root, settings);
    if direct.len() >= 2 {
        debug!(group = %group_name(root), tracks = direct.len(), "flat directory shape");
        return Ok(vec![GroupLayout {
            name: group_name(root),
            files: direct,
        }]);
    }

    let sub_dirs = sub_directories(root, settings);
    if sub_dirs.is_empty() {
        return Err(Error::Discovery(format!(
            "'{}' is not a supported audio directory: it holds neither 2 audio files nor any sub-directories",
            root.display()
        )));
    }

    let mut groups = Vec::with_capacity(sub_dirs.len());
    for sub_dir in sub_dirs {
        let files = audio_files_in(&sub_dir, settings);
        if files.len() < 2 {
            return Err(Error::Discovery(format!(
                "sub-directory '{}' holds {} audio file(s); every playlist needs at least 2",
                sub_dir.display(),
                files.len()
            )));
        }
        groups.push(GroupLayout {
            name: group_name(&sub_dir),
            files,
        });
    }
    debug!(groups = groups.len(), "nested directory shape");
    Ok(groups)
}

/// Decode every file of every layout into in-memory groups.
pub fn load_groups(layouts: Vec<GroupLayout>, sample_rate: u32) -> Result<Vec<AudioGroup>> {
    let mut groups = Vec::with_capacity(layouts.len());
    for layout in layouts {
        let mut tracks = Vec::with_capacity(layout.files.len());
        for file in &layout.files {
            let title = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let clip = audio::load(file, sample_rate)?;
            tracks.push(AudioTrack { title, clip });
        }
        info!(group = %layout.name, tracks = tracks.len(), "group loaded");
        groups.push(AudioGroup {
            name: layout.name,
            tracks,
        });
    }
    Ok(groups)
}
