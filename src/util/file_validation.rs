//! Document file access for the command-line front end
//!
//! Validates a document before reading it, checking for:
//! - File existence and permissions
//! - File size limits
//! - Binary content

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Maximum document size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors that can occur when reading a document
#[derive(Debug, Error)]
pub enum FileOpenError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("cannot open directory: {0}")]
    IsDirectory(String),
    #[error("cannot open binary file: {0}")]
    BinaryFile(String),
    #[error("{name} is too large ({size_mb:.1} MB, max 50 MB)")]
    TooLarge { name: String, size_mb: f64 },
    #[error("error opening {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Validate a document before attempting to read it
pub fn validate_file_for_opening(path: &Path) -> Result<(), FileOpenError> {
    let name = filename_for_display(path);
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FileOpenError::NotFound(name.clone()),
        std::io::ErrorKind::PermissionDenied => FileOpenError::PermissionDenied(name.clone()),
        _ => FileOpenError::Io {
            name: name.clone(),
            source: e,
        },
    })?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory(name));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            name,
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Check if a file is likely binary by scanning the first 8KB for null bytes
///
/// Returns `false` on any read error (let the actual read fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Validate and read a text document
pub fn read_document(path: &Path) -> Result<String, FileOpenError> {
    validate_file_for_opening(path)?;
    if is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile(filename_for_display(path)));
    }

    let content = fs::read_to_string(path).map_err(|source| FileOpenError::Io {
        name: filename_for_display(path),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Get the filename from a path for display in error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
