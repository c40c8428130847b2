//! Normalizer integration tests.

use decomment_normalizer::{normalize, normalize_lines};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_text() {
    assert_eq!(normalize_lines(""), "");
}

#[test]
fn test_clean_text_is_byte_identical() {
    let text = "int a;\r\nint b;\n\nint c;";
    let normalized = normalize(text);
    assert_eq!(normalized.text, text);
    assert_eq!(normalized.lines_trimmed, 0);
}

#[test]
fn test_trailing_spaces_and_tabs() {
    assert_eq!(normalize_lines("a;   \nb;\t\t\nc; \t \n"), "a;\nb;\nc;\n");
}

#[test]
fn test_terminator_style_is_kept_per_line() {
    assert_eq!(normalize_lines("a;   \r\nb;  \n"), "a;\r\nb;\n");
}

#[test]
fn test_final_line_without_terminator() {
    assert_eq!(normalize_lines("a;\nb;   "), "a;\nb;");
    assert_eq!(normalize_lines("   "), "");
}

#[test]
fn test_whitespace_only_lines_become_empty() {
    let normalized = normalize("a;\n    \n\t\r\nb;\n");
    assert_eq!(normalized.text, "a;\n\n\r\nb;\n");
    assert_eq!(normalized.lines_trimmed, 2);
}

#[test]
fn test_leading_whitespace_is_kept() {
    assert_eq!(normalize_lines("\tif (x) {  \n\t\ty();\n"), "\tif (x) {\n\t\ty();\n");
}

#[test]
fn test_interior_whitespace_is_kept() {
    assert_eq!(normalize_lines("a  =  b;  \n"), "a  =  b;\n");
}

#[test]
fn test_blank_lines_are_kept() {
    assert_eq!(normalize_lines("\n\n\r\n\n"), "\n\n\r\n\n");
}

#[test]
fn test_lone_carriage_return_ends_a_line() {
    assert_eq!(normalize_lines("a \r b  \n"), "a\r b\n");
    assert_eq!(normalize_lines("a \r\n"), "a\r\n");
    assert_eq!(normalize_lines("x\t\r\t\n"), "x\r\n");
}

#[test]
fn test_trimming_never_joins_a_carriage_return_and_newline() {
    // `\r` and `\n` separated only by whitespace are two terminators, not one.
    let normalized = normalize("a \r \n");
    assert_eq!(normalized.text, "a\r\n");
    assert_eq!(normalized.lines_trimmed, 2);
    assert_eq!(normalize_lines(&normalized.text), "a\r\n");
}

#[test]
fn test_unicode_spaces_are_trimmed() {
    assert_eq!(normalize_lines("x;\u{00A0}\u{3000}\n"), "x;\n");
}

#[test]
fn test_byte_order_mark_survives() {
    assert_eq!(normalize_lines("\u{FEFF}\nint x; \n"), "\u{FEFF}\nint x;\n");
}

#[test]
fn test_idempotent() {
    let samples = [
        "",
        "a;   \r\nb;  \n",
        "  \n\t\n",
        "x \r y \r\n z\t",
        "\u{FEFF}  \n\u{00A0}",
        "no terminator   ",
        "a \r \n",
        "x\t\r\t\n",
    ];
    for sample in samples {
        let once = normalize_lines(sample);
        let twice = normalize_lines(&once);
        assert_eq!(twice, once, "not idempotent for {sample:?}");
    }
}
