//! Whitespace canonicalization for inbound thought text.

use unicode_normalization::UnicodeNormalization;

/// Collapse raw free-form text into its canonical form: NFC, every run of
/// non-newline whitespace reduced to a single space, runs of three or more
/// newlines reduced to exactly two, no leading or trailing whitespace.
///
/// The paragraph marker (two consecutive newlines) must survive the space
/// collapse, so each maximal whitespace run is rewritten as a whole based on
/// how many newlines it contains. Pure and total; idempotent.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    let mut newlines = 0usize;

    for ch in text.nfc() {
        if ch.is_whitespace() {
            in_whitespace = true;
            if ch == '\n' {
                newlines += 1;
            }
            continue;
        }
        // Leading whitespace is dropped by only emitting separators between
        // non-whitespace content; trailing whitespace never gets flushed.
        if in_whitespace && !out.is_empty() {
            match newlines {
                0 => out.push(' '),
                1 => out.push('\n'),
                _ => out.push_str("\n\n"),
            }
        }
        in_whitespace = false;
        newlines = 0;
        out.push(ch);
    }

    out
}
