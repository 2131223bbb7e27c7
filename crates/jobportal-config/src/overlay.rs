//! Local `.env` overlay.
//!
//! Development machines keep their settings in a `.env` file; deployments set
//! real environment variables and ship no file. Variables already present in
//! the process environment are never overwritten by the file.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Overlay file read by [`load_overlay`], relative to the current directory.
pub const DEFAULT_OVERLAY_FILE: &str = ".env";

/// What happened when the overlay file was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// The file was found and its variables were added to the process environment.
    Loaded(PathBuf),
    /// No file was found. Not an error.
    Missing,
    /// The file exists but could not be read or parsed. Lines before the
    /// problem may already have been applied.
    Unreadable(String),
}

/// Loads `.env` from the current directory. Parent directories are not searched.
pub fn load_overlay() -> Overlay {
    load_overlay_from(DEFAULT_OVERLAY_FILE)
}

/// Loads an overlay file from an explicit path.
pub fn load_overlay_from(path: impl AsRef<Path>) -> Overlay {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => loaded(path.to_path_buf()),
        Err(e) => failed(e),
    }
}

fn loaded(path: PathBuf) -> Overlay {
    info!(path = %path.display(), "Loaded environment overlay");
    Overlay::Loaded(path)
}

fn failed(e: dotenvy::Error) -> Overlay {
    if e.not_found() {
        info!("No .env file found, using environment variables");
        Overlay::Missing
    } else {
        warn!(error = %e, "Ignoring unreadable .env file");
        Overlay::Unreadable(e.to_string())
    }
}
