//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input directory is not a usable playlist source.
    #[error("discovery error: {0}")]
    Discovery(String),

    /// Settings or playlist parameters that can never produce a valid mix.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A track could not be decoded.
    #[error("decode error in {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    /// The composite could not be written out.
    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
