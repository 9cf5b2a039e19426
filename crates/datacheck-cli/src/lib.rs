//! # datacheck-cli — Data Root Validation CLI
//!
//! Validates `<root>/data.json` against `<root>/data.schema.json`:
//!
//! ```bash
//! datacheck --root path/to/root
//! datacheck -root path/to/root      # single-dash form is also accepted
//! ```
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from the run itself.
//! - Schema semantics live in `datacheck-schema`; nothing here interprets
//!   schema keywords.
//! - The run stops at the first failure and reports it once.

pub mod logging;
pub mod run;

use std::ffi::OsString;

/// Rewrite the single-dash `-root` flag to clap's `--root` form.
///
/// Arguments after a `--` terminator are passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if terminated {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    terminated = true;
                    arg
                }
                Some("-root") => OsString::from("--root"),
                Some(s) if s.starts_with("-root=") => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}
