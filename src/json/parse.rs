//! Purpose: Provide the runtime JSON decode entrypoint and failure categories.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Categories are derived from parser metadata, never from payload text.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    UnexpectedEof,
    Data,
    Io,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::UnexpectedEof => "unexpected-eof",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
        }
    }
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Eof => ParseFailureCategory::UnexpectedEof,
        Category::Data => ParseFailureCategory::Data,
        Category::Io => ParseFailureCategory::Io,
    }
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    let category = categorize_error(err);
    let mut hint = format!("parse category: {}; context: {context}", category.label());
    if err.line() > 0 {
        hint.push_str(&format!("; at line {} column {}", err.line(), err.column()));
    }
    hint
}

#[cfg(test)]
mod tests {
    use super::{ParseFailureCategory, categorize_error, from_str};
    use serde_json::Value;

    #[test]
    fn decodes_any_json_shape() {
        let value: Value = from_str(r#"{"message":"Hello"}"#).expect("object");
        assert_eq!(value["message"], "Hello");
        let value: Value = from_str("[1,2,3]").expect("array");
        assert!(value.is_array());
        let value: Value = from_str("42").expect("number");
        assert_eq!(value, 42);
    }

    #[test]
    fn truncated_input_is_eof() {
        let err = from_str::<Value>(r#"{"message": "Hel"#).unwrap_err();
        assert_eq!(categorize_error(&err), ParseFailureCategory::UnexpectedEof);
    }
}
