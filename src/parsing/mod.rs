//! Recognizers for the pieces of an annotated specification document

use std::path::Path;
use tracing::debug;

use crate::language::LoadingError;

pub mod markers;
pub mod references;

pub use markers::{recognize, Marker};
pub use references::{decompose, discover};

/// Split text into lines, ending a line at `\r\n`, `\r` or `\n`. Unlike
/// `str::lines()`, a bare carriage return also ends a line.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    crate::pattern!(r"\r\n|\r|\n").split(text)
}

/// Read a file and return an owned String. The caller keeps ownership so
/// that the findings returned by validation, which borrow from the text,
/// can live as long as it does.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => {
            debug!("Loaded {} bytes from {}", content.len(), filename.display());
            Ok(content)
        }
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                std::io::ErrorKind::InvalidData => Err(LoadingError {
                    problem: "Not valid UTF-8".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}
