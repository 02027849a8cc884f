//! I/O helpers for patrol commands.

pub mod input;
