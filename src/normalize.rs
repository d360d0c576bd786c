/// Removes the spaces that end each line of `text`
///
/// For a line ended by `\n`, the trailing run of `' '` and `'\r'` is removed
/// and a single `\r` is put back when the line was ended by `\r\n`, so CRLF
/// input stays CRLF and a stray `\r` in the trailing run does not shield the
/// spaces before it. A final line without a terminator only loses its
/// trailing spaces. Tabs and other whitespace are left alone. Lines that are
/// empty or consist only of spaces collapse to nothing before their
/// terminator.
#[must_use]
pub fn trim_trailing_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        match line.strip_suffix('\n') {
            Some(content) => {
                let crlf = content.ends_with('\r');
                result.push_str(content.trim_end_matches([' ', '\r']));
                result.push_str(if crlf { "\r\n" } else { "\n" });
            }
            None => result.push_str(line.trim_end_matches(' ')),
        }
    }

    result
}
