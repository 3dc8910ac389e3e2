//! Stable exit codes for the launcher binary.

/// Companion script ran and exited zero.
pub const OK: i32 = 0;
/// Script resolution, interpreter spawn, or the script itself failed.
pub const FAILED: i32 = 1;
