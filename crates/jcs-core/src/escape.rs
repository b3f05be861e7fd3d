//! Canonical JSON string escaping.
//!
//! RFC 8785 3.2.2.2 keeps escaping minimal: only the quote, the backslash,
//! and the C0 controls are escaped, and everything else is emitted as raw
//! UTF-8. Non-ASCII text is never turned into `\uXXXX` sequences. The input
//! is a `&str`, so well-formed Unicode is guaranteed by construction.

use std::io::Write;

use crate::error::Result;

/// Write `s` as a complete JSON string literal, surrounding quotes included.
///
/// The named short escapes cover `\b \f \n \r \t \\ \"`; the remaining
/// controls below U+0020 become `\u00xx` with lowercase hex digits. Unescaped
/// stretches are written in one piece. Escapable bytes are all ASCII, so
/// scanning bytes rather than chars never splits a multi-byte sequence.
pub fn write_escaped<W: Write>(sink: &mut W, s: &str) -> Result<()> {
    sink.write_all(b"\"")?;
    let bytes = s.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if byte >= 0x20 && byte != b'"' && byte != b'\\' {
            continue;
        }
        if start < i {
            sink.write_all(&bytes[start..i])?;
        }
        match byte {
            b'"' => sink.write_all(b"\\\"")?,
            b'\\' => sink.write_all(b"\\\\")?,
            0x08 => sink.write_all(b"\\b")?,
            0x0c => sink.write_all(b"\\f")?,
            b'\n' => sink.write_all(b"\\n")?,
            b'\r' => sink.write_all(b"\\r")?,
            b'\t' => sink.write_all(b"\\t")?,
            other => write!(sink, "\\u{other:04x}")?,
        }
        start = i + 1;
    }
    if start < bytes.len() {
        sink.write_all(&bytes[start..])?;
    }
    sink.write_all(b"\"")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(s: &str) -> String {
        let mut out = Vec::new();
        write_escaped(&mut out, s).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn named_escapes() {
        assert_eq!(escaped("\t\n\"\\"), "\"\\t\\n\\\"\\\\\"");
        assert_eq!(escaped("\u{8}\u{c}\r"), "\"\\b\\f\\r\"");
    }

    #[test]
    fn other_controls_use_u00xx() {
        assert_eq!(escaped("\u{0}"), "\"\\u0000\"");
        assert_eq!(escaped("\u{b}"), "\"\\u000b\"");
        assert_eq!(escaped("\u{1f}"), "\"\\u001f\"");
    }

    #[test]
    fn non_ascii_passes_through_raw() {
        assert_eq!(escaped("\u{20ac} d\u{e9}j\u{e0} vu \u{1f600}"), "\"\u{20ac} d\u{e9}j\u{e0} vu \u{1f600}\"");
        // U+007F is not a C0 control and stays unescaped.
        assert_eq!(escaped("\u{7f}"), "\"\u{7f}\"");
    }
}
