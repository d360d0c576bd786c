use crate::error::{HdrgenError, Result};
use std::fmt;
use tracing::debug;

/// Characters treated as path separators regardless of host platform
const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Include-guard token derived from a header path
///
/// Always non-empty and made only of `A-Z`, `0-9` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuardToken(String);

impl GuardToken {
    /// Derives the guard token from the final segment of `path`
    ///
    /// `"include/My.Thing.h"` becomes `MY_THING_H`. Both `/` and `\` are
    /// accepted as separators and case mapping is plain ASCII, so the result
    /// does not depend on the host locale.
    ///
    /// # Errors
    ///
    /// Returns `HdrgenError::EmptyHeaderName` when the path has no final
    /// segment (empty input or a trailing separator).
    pub fn from_path(path: &str) -> Result<Self> {
        let segment = file_segment(path);
        if segment.is_empty() {
            return Err(HdrgenError::EmptyHeaderName {
                path: path.to_string(),
            });
        }

        let token: String = segment.chars().map(guard_char).collect();
        debug!(path, segment, token = %token, "derived include guard token");

        Ok(Self(token))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GuardToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns everything after the last separator, or the whole input
fn file_segment(path: &str) -> &str {
    path.rfind(PATH_SEPARATORS)
        .map_or(path, |pos| &path[pos + 1..])
}

/// Maps one segment character to its guard form; `.` falls into the `_` arm
fn guard_char(c: char) -> char {
    match c {
        c if c.is_ascii_alphanumeric() || c == '_' => c.to_ascii_uppercase(),
        _ => '_',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(path: &str) -> String {
        GuardToken::from_path(path).unwrap().to_string()
    }

    #[test]
    fn test_plain_file_name() {
        assert_eq!(token("rect.hpp"), "RECT_HPP");
    }

    #[test]
    fn test_nested_path_keeps_last_segment() {
        assert_eq!(token("dir/sub/My.Thing.h"), "MY_THING_H");
        assert_eq!(token("a/b/c.hpp"), token("c.hpp"));
    }

    #[test]
    fn test_windows_separators() {
        assert_eq!(token("C:\\src\\include\\tool_api.hpp"), "TOOL_API_HPP");
        assert_eq!(token("mixed/dir\\last.h"), "LAST_H");
        assert_eq!(token("mixed\\dir/last.h"), "LAST_H");
    }

    #[test]
    fn test_no_extension_and_digits() {
        assert_eq!(token("vec3"), "VEC3");
        assert_eq!(token("already_UPPER.HPP"), "ALREADY_UPPER_HPP");
    }

    #[test]
    fn test_leading_dot_and_many_dots() {
        assert_eq!(token(".hidden"), "_HIDDEN");
        assert_eq!(token("a..b"), "A__B");
    }

    #[test]
    fn test_non_identifier_characters_replaced() {
        assert_eq!(token("my-file.h"), "MY_FILE_H");
        assert_eq!(token("with space.hpp"), "WITH_SPACE_HPP");
        // Non-ASCII letters have no ASCII upper form and are not valid in a macro name
        assert_eq!(token("größe.h"), "GR__E_H");
    }

    #[test]
    fn test_single_character() {
        assert_eq!(token("x"), "X");
        assert_eq!(token("dir/."), "_");
    }

    #[test]
    fn test_empty_segment_rejected() {
        for path in ["", "/", "\\", "include/", "a\\b\\"] {
            let result = GuardToken::from_path(path);
            assert!(
                matches!(result, Err(HdrgenError::EmptyHeaderName { .. })),
                "expected EmptyHeaderName for {path:?}"
            );
        }
    }

    #[test]
    fn test_as_str_matches_display() {
        let t = GuardToken::from_path("rect.hpp").unwrap();
        assert_eq!(t.as_str(), "RECT_HPP");
        assert_eq!(t.as_ref(), t.to_string());
    }
}
