//! Thin launcher around a companion PowerShell script.
//!
//! The binary resolves `action.ps1` relative to its own install location
//! (one level above the `dist` bundle directory when present), executes it
//! with `pwsh`, and surfaces any failure to the host automation system.
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure path resolution. No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting process invocation.
//!
//! [`launch`] coordinates core logic with I/O; [`report`] owns the host
//! failure channel.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod launch;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
