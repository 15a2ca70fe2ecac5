//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Full-width separator line made of `ch`.
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(40)
}

/// Writes `title` between two separator lines.
pub fn write_banner(out: &mut dyn Write, ch: char, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}", rule(ch))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_wraps_title() {
        let mut out = Vec::new();
        write_banner(&mut out, '#', "ROUND 1").unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "ROUND 1");
        assert!(lines[0].chars().all(|c| c == '#'));
    }

    #[test]
    fn warning_prefix() {
        let mut err = Vec::new();
        display_warning(&mut err, "input closed").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "WARNING: input closed\n");
    }
}
