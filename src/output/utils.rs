//! Shared utility functions for output formatting

/// Remove ANSI CSI escape sequences (`ESC [ ... final`) from `s`.
///
/// Used to compare colored output against the plain rendering.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameter and intermediate bytes run until a final byte in '@'..='~'.
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi_removes_sgr() {
        assert_eq!(strip_ansi("\x1b[0m\x1b[1m\x1b[34msrc\x1b[0m/"), "src/");
        assert_eq!(strip_ansi("\x1b[38;5;9m[permission denied]\x1b[0m"), "[permission denied]");
    }

    #[test]
    fn test_strip_ansi_plain_text_unchanged() {
        assert_eq!(strip_ansi("|   `-- b.txt"), "|   `-- b.txt");
        assert_eq!(strip_ansi(""), "");
    }

    #[test]
    fn test_strip_ansi_keeps_lone_escape() {
        assert_eq!(strip_ansi("a\x1bb"), "a\x1bb");
    }

    #[test]
    fn test_strip_ansi_utf8() {
        assert_eq!(strip_ansi("\x1b[32m日本語.rs\x1b[0m"), "日本語.rs");
    }
}
