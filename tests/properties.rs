//! Property-based tests for guard derivation, rendering and normalization

use hdrgen::{GuardToken, PLACEHOLDER, render, render_header, trim_trailing_spaces};
use proptest::prelude::*;

/// Paths built from segments that may contain dots, dashes and spaces,
/// joined by either separator
fn path_strategy() -> impl Strategy<Value = (String, String)> {
    (
        prop::collection::vec("[a-zA-Z0-9_. -]{1,8}", 0..4),
        prop::collection::vec(prop_oneof![Just('/'), Just('\\')], 4),
        "[a-zA-Z0-9_.-]{1,12}",
    )
        .prop_map(|(dirs, seps, file)| {
            let mut path = String::new();
            for (dir, sep) in dirs.iter().zip(seps) {
                path.push_str(dir);
                path.push(sep);
            }
            path.push_str(&file);
            (path, file)
        })
}

/// Multi-line text mixing spaces, tabs, stray carriage returns, CRLF and LF
fn text_strategy() -> impl Strategy<Value = String> {
    let line = (
        "[ a-z\t\r]{0,10}",
        prop_oneof![Just(""), Just("\n"), Just("\r\n")],
    );
    prop::collection::vec(line, 0..12)
        .prop_map(|lines| {
            lines
                .into_iter()
                .map(|(content, end)| format!("{content}{end}"))
                .collect()
        })
}

proptest! {
    #[test]
    fn prop_token_is_identifier_like((path, _) in path_strategy()) {
        let token = GuardToken::from_path(&path).unwrap();
        prop_assert!(!token.as_str().is_empty());
        prop_assert!(
            token
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
            "unexpected character in {}",
            token
        );
    }

    #[test]
    fn prop_token_depends_only_on_final_segment((path, file) in path_strategy()) {
        let from_path = GuardToken::from_path(&path).unwrap();
        let from_file = GuardToken::from_path(&file).unwrap();
        prop_assert_eq!(from_path, from_file);
    }

    #[test]
    fn prop_render_leaves_no_placeholder(token in "[A-Z0-9_]{1,24}") {
        let template = format!("{PLACEHOLDER}x{PLACEHOLDER}{PLACEHOLDER}\n");
        let rendered = render(&template, PLACEHOLDER, &token);
        prop_assert!(!rendered.contains(PLACEHOLDER));
        prop_assert!(rendered.matches(token.as_str()).count() >= 3);
    }

    #[test]
    fn prop_render_header_leaves_no_placeholder((path, _) in path_strategy()) {
        let token = GuardToken::from_path(&path).unwrap();
        let rendered = render_header(&token);
        prop_assert!(!rendered.contains(PLACEHOLDER));
    }

    #[test]
    fn prop_normalize_is_idempotent(text in text_strategy()) {
        let once = trim_trailing_spaces(&text);
        prop_assert_eq!(trim_trailing_spaces(&once), once);
    }

    #[test]
    fn prop_normalize_preserves_lines(text in text_strategy()) {
        let normalized = trim_trailing_spaces(&text);
        let before: Vec<&str> = text.split('\n').collect();
        let after: Vec<&str> = normalized.split('\n').collect();
        prop_assert_eq!(before.len(), after.len());

        let last = before.len() - 1;
        for (i, (original, trimmed)) in before.iter().zip(&after).enumerate() {
            let expected = if i == last {
                original.trim_end_matches(' ').to_string()
            } else {
                let cr = if original.ends_with('\r') { "\r" } else { "" };
                format!("{}{cr}", original.trim_end_matches([' ', '\r']))
            };
            prop_assert_eq!(*trimmed, expected.as_str());
        }
    }
}
