//! # hdrgen
//!
//! Generates a C++ header from a fixed template. The include guard is derived
//! from the header's file name, substituted into the template, and every line
//! is stripped of trailing spaces before the file is written.
//!
//! ## Pipeline
//!
//! - [`guard`]: file name to include-guard token (`dir/My.Thing.h` to `MY_THING_H`)
//! - [`template`]: token substitution into the embedded header template
//! - [`normalize`]: trailing-space removal, line by line
//! - [`fs_utils`]: write-then-rename persistence of the result
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```
//! let header = hdrgen::generate_header("include/rect.hpp").unwrap();
//! assert!(header.starts_with("#ifndef HEADER_RECT_HPP_INCLUDED\n"));
//! ```
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Write include/rect.hpp
//! hdrgen include/rect.hpp
//!
//! # Print the header instead of writing it
//! hdrgen --dry-run include/rect.hpp
//! ```

pub mod error;
pub mod fs_utils;
pub mod guard;
pub mod normalize;
pub mod template;

use std::path::Path;
use tracing::info;

// Re-export main types and functions for convenience
pub use error::{HdrgenError, Result};
pub use guard::GuardToken;
pub use normalize::trim_trailing_spaces;
pub use template::{HEADER_TEMPLATE, PLACEHOLDER, find_placeholders, render, render_header};

/// Options for [`generate_header_file`]
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Produce the content without touching the file system
    pub dry_run: bool,
}

/// Builds the final header text for `header_path` without writing it
///
/// # Errors
///
/// Returns `HdrgenError::EmptyHeaderName` if no guard token can be derived.
pub fn generate_header(header_path: &str) -> Result<String> {
    let token = GuardToken::from_path(header_path)?;
    let rendered = render_header(&token);
    Ok(trim_trailing_spaces(&rendered))
}

/// Generates the header and writes it to `header_path`
///
/// Returns the content that was written, or that would have been written
/// when `config.dry_run` is set.
///
/// # Errors
///
/// - `HdrgenError::EmptyHeaderName` if no guard token can be derived.
/// - `HdrgenError::Write` if the file cannot be created or replaced.
pub fn generate_header_file(header_path: &Path, config: &GeneratorConfig) -> Result<String> {
    let content = generate_header(&header_path.to_string_lossy())?;

    if config.dry_run {
        info!(path = %header_path.display(), "dry run, header not written");
    } else {
        fs_utils::write_header(header_path, &content)?;
    }

    Ok(content)
}
