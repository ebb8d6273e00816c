use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod audio;
mod config;
mod error;
mod library;
mod playlist;
mod prompt;

use config::Settings;
use error::{Error, Result};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "segue=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run() {
        Ok(output_dir) => println!("output: {}", output_dir.display()),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<PathBuf> {
    let settings = Settings::load().map_err(|e| Error::Configuration(e.to_string()))?;
    settings.validate().map_err(Error::Configuration)?;

    let is_audio_dir = |text: &str| -> std::result::Result<(), String> {
        library::discover_layout(Path::new(text), &settings.library)
            .map(|_| ())
            .map_err(|_| "input must be a supported audio directory".to_string())
    };
    let input_dir = prompt::ask("input(s) directory: ", &[&prompt::is_dir, &is_audio_dir])?;
    let output_dir = prompt::ask("output directory: ", &[&prompt::is_dir])?;
    let crossfade_seconds = prompt::ask("cross fade time: ", &[&prompt::is_numeric])?
        .parse::<u32>()
        .map_err(|e| Error::Configuration(format!("crossfade time: {e}")))?;

    let layouts = library::discover_layout(Path::new(&input_dir), &settings.library)?;
    let groups = library::load_groups(layouts, settings.output.sample_rate)?;

    let output_dir = PathBuf::from(output_dir);
    for group in groups {
        info!(
            playlist = %group.name,
            tracks = group.tracks.len(),
            crossfade_seconds,
            "rendering playlist"
        );
        let (entries, timestamps) = playlist::build(group.tracks, f64::from(crossfade_seconds))?;
        audio::write_playlist(
            &output_dir,
            &group.name,
            &entries,
            &timestamps,
            settings.output.sample_rate,
        )?;
    }

    Ok(output_dir)
}
