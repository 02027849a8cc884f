//! Stable exit codes for patrol CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// I/O failure, usage error, or any other unexpected failure.
pub const INVALID: i32 = 1;
/// The input map failed validation (ragged rows, unknown symbol, missing
/// or enclosed guard).
pub const MALFORMED: i32 = 2;
