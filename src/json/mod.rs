//! Purpose: JSON decoding boundary for the `--body` argument.
//! Exports: `parse` module with decode helpers and failure categorization.
//! Role: Single seam for parser details so callers avoid ad hoc decode logic.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod parse;
