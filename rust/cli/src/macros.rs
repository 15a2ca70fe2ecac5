//! Macros for common CLI error handling patterns.

/// Write a line to a stream, returning the error exit code if the write fails.
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse a JSON line, or report the failure with `$context` and continue
/// to the next iteration.
///
/// ```ignore
/// let record: RoundRecord = parse_json_or_continue!(line, err, context, skipped);
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $err:expr, $context:expr, $skipped:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                $skipped += 1;
                let failure = $crate::BatchValidationError {
                    item_context: $context,
                    message: e.to_string(),
                };
                $crate::ui::display_warning($err, &format!("skipping {}", failure))?;
                continue;
            }
        }
    };
}
