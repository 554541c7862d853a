//! Purpose: Library backing the `python_test_json` webhook test hook.
//! Exports: `error` (taxonomy + exit codes), `json` (decode boundary),
//! `body` (`--body` decoding), `greeting` (message lookup + rendering).
//! Role: Keeps hook logic testable apart from the CLI binary.
//! Invariants: Modules prefer explicit inputs/outputs over hidden state.
pub mod body;
pub mod error;
pub mod greeting;
pub mod json;

pub use error::{Error, ErrorKind, to_exit_code};
