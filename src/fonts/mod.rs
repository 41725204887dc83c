//! Locates the bundled font family used for every text element.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};

/// Name of the bundled font family.
pub const FONT_FAMILY_NAME: &str = "Roboto";

/// Environment variable that overrides the font search path.
pub const FONTS_DIR_ENV: &str = "CV_BUILDER_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

/// Search order: env override, next to the executable, then the crate
/// checkout.
fn candidate_directories() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env::var_os(FONTS_DIR_ENV) {
        if !path.is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            candidates.push(bin_dir.join("assets/fonts"));
        }
    }

    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"));
    candidates.dedup();
    candidates
}

fn directory_is_complete(directory: &Path) -> bool {
    directory.is_dir()
        && FONT_FILES
            .iter()
            .all(|name| directory.join(name).is_file())
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let candidates = candidate_directories();
    if let Some(found) = candidates.iter().find(|dir| directory_is_complete(dir)) {
        return Ok(found.clone());
    }

    let searched = candidates
        .iter()
        .map(|dir| dir.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Err(Error::new(
        format!(
            "Unable to locate the bundled fonts. Checked: {searched}. \
             See assets/fonts/README.md or set {FONTS_DIR_ENV}."
        ),
        io::Error::new(io::ErrorKind::NotFound, "bundled fonts not found"),
    ))
}

/// Loads the bundled font family for a new document.
pub fn font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_font_directory()?;
    fonts::from_files(&directory, FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

/// Indicates whether the bundled fonts can be resolved on this machine.
pub fn fonts_available() -> bool {
    resolve_font_directory().is_ok()
}
