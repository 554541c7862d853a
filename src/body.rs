//! Purpose: Decode the raw `--body` argument into a JSON value.
//! Exports: `parse_body`, `INVALID_JSON_PREFIX`.
//! Role: Maps parser failures onto the crate error taxonomy with a stable message.
//! Invariants: Failure messages always start with `Invalid JSON: `.
use serde_json::Value;

use crate::error::{Error, ErrorKind};
use crate::json::parse;

pub const INVALID_JSON_PREFIX: &str = "Invalid JSON: ";

pub fn parse_body(raw: &str) -> Result<Value, Error> {
    parse::from_str::<Value>(raw).map_err(|err| {
        let hint = parse::hint_for_error(&err, "--body");
        Error::new(ErrorKind::InvalidJson, format!("{INVALID_JSON_PREFIX}{err}"))
            .with_hint(hint)
            .with_source(err)
    })
}
