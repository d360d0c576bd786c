use crate::guard::GuardToken;
use tracing::{debug, trace};

/// Marker replaced by the guard token in [`HEADER_TEMPLATE`]
pub const PLACEHOLDER: &str = "{header}";

/// The header body every generated file is rendered from
///
/// Lines are padded with spaces to a fixed width; the padding is removed by
/// [`crate::normalize::trim_trailing_spaces`] before the file is written.
pub const HEADER_TEMPLATE: &str = concat!(
    "#ifndef HEADER_{header}_INCLUDED                  \n",
    "#define HEADER_{header}_INCLUDED                  \n",
    "                                                  \n",
    "#include <cstdlib>                                \n",
    "                                                  \n",
    "class Rectangle                                   \n",
    "{                                                 \n",
    "  size_t  width_;                                 \n",
    "  size_t  height_;                                \n",
    "                                                  \n",
    "public:                                           \n",
    "  Rectangle( size_t width, size_t height )        \n",
    "  : width_(width)                                 \n",
    "  , height_(height)                               \n",
    "  {}                                              \n",
    "                                                  \n",
    "  virtual ~Rectangle()                            \n",
    "  {}                                              \n",
    "                                                  \n",
    "                                                  \n",
    "  size_t  getWidth() const                        \n",
    "  {                                               \n",
    "    return width_;                                \n",
    "  }                                               \n",
    "                                                  \n",
    "  size_t  getHeight() const                       \n",
    "  {                                               \n",
    "    return height_;                               \n",
    "  }                                               \n",
    "                                                  \n",
    "  size_t  getPerimeter() const                    \n",
    "  {                                               \n",
    "    return (width_ + height_) * 2;                \n",
    "  }                                               \n",
    "                                                  \n",
    "  size_t  getSpace() const                        \n",
    "  {                                               \n",
    "    return width_ * height_;                      \n",
    "  }                                               \n",
    "};                                                \n",
    "                                                  \n",
    "#endif  //  #ifndef HEADER_{header}_INCLUDED  //  \n",
);

/// Location of a placeholder occurrence inside a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpan {
    /// Byte offset of the first character of the marker
    pub start: usize,
    /// Byte offset one past the last character of the marker
    pub end: usize,
}

/// Finds every occurrence of `placeholder` in `template`, left to right
#[must_use]
pub fn find_placeholders(template: &str, placeholder: &str) -> Vec<PlaceholderSpan> {
    if placeholder.is_empty() {
        return Vec::new();
    }

    template
        .match_indices(placeholder)
        .map(|(start, matched)| PlaceholderSpan {
            start,
            end: start + matched.len(),
        })
        .collect()
}

/// Replaces every occurrence of `placeholder` in `template` with `token`
///
/// Scanning resumes right after each inserted token, so text coming from the
/// token itself is never searched again even if it contains the marker.
#[must_use]
pub fn render(template: &str, placeholder: &str, token: &str) -> String {
    let mut result = template.to_string();
    if placeholder.is_empty() {
        return result;
    }

    let mut pos = 0;
    while let Some(offset) = result[pos..].find(placeholder) {
        let start = pos + offset;
        result.replace_range(start..start + placeholder.len(), token);
        trace!(start, "replaced placeholder");
        pos = start + token.len();
    }

    result
}

/// Renders [`HEADER_TEMPLATE`] for the given guard token
#[must_use]
pub fn render_header(token: &GuardToken) -> String {
    debug!(
        token = %token,
        occurrences = find_placeholders(HEADER_TEMPLATE, PLACEHOLDER).len(),
        "rendering header template"
    );
    render(HEADER_TEMPLATE, PLACEHOLDER, token.as_str())
}
