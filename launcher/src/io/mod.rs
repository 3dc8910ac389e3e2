//! I/O helpers for the launcher.

pub mod process;
