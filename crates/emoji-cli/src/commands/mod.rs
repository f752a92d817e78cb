use std::fmt;
use std::process;

pub mod config_ops;
pub mod convert_ops;

/// Unwrap `result`, or report `context: error` on stderr and exit with status 1.
pub(crate) fn or_exit<T, E: fmt::Display>(result: Result<T, E>, context: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{context}: {e}");
        process::exit(1)
    })
}
