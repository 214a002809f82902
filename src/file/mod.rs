//! File I/O for command streams and route logs.
//!
//! This module reads navigation commands from files or stdin and writes the
//! resulting route log to stdout or to files with atomic write operations and
//! optional backups.

pub mod loader;
pub mod saver;
