//! Utility modules

pub mod file_validation;
pub mod text;

pub use text::{char_count, char_width, display_width, leading_whitespace, pad, pad_with};

pub use file_validation::{read_document, FileOpenError, MAX_FILE_SIZE};
