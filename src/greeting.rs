//! Purpose: Turn a decoded hook body into the greeting line printed on stdout.
//! Exports: `SUFFIX`, `MESSAGE_FIELD`, `message_of`, `render`, `value_kind`.
//! Role: Typed field lookup; the only place that knows the body's expected shape.
//! Invariants: Only a string `message` on a JSON object produces a greeting.
use serde_json::Value;

use crate::error::{Error, ErrorKind};

pub const MESSAGE_FIELD: &str = "message";
pub const SUFFIX: &str = " World !";

/// Name of the JSON type of `value`, used in diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn message_of(body: &Value) -> Result<&str, Error> {
    let Some(object) = body.as_object() else {
        return Err(Error::new(
            ErrorKind::TypeMismatch,
            format!("expected a JSON object body, got {}", value_kind(body)),
        )
        .with_field(MESSAGE_FIELD)
        .with_hint(r#"Pass an object such as --body '{"message": "Hello"}'."#));
    };

    let Some(message) = object.get(MESSAGE_FIELD) else {
        return Err(Error::new(
            ErrorKind::MissingField,
            format!("missing field `{MESSAGE_FIELD}`"),
        )
        .with_field(MESSAGE_FIELD));
    };

    message.as_str().ok_or_else(|| {
        Error::new(
            ErrorKind::TypeMismatch,
            format!(
                "field `{MESSAGE_FIELD}` must be a string, got {}",
                value_kind(message)
            ),
        )
        .with_field(MESSAGE_FIELD)
    })
}

pub fn render(body: &Value) -> Result<String, Error> {
    let message = message_of(body)?;
    let mut line = String::with_capacity(message.len() + SUFFIX.len());
    line.push_str(message);
    line.push_str(SUFFIX);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::{message_of, render, value_kind};
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn renders_message_with_suffix() {
        assert_eq!(render(&json!({"message": "Hello"})).unwrap(), "Hello World !");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = json!({"ref": "refs/heads/main", "message": "deploy", "n": 3});
        assert_eq!(render(&body).unwrap(), "deploy World !");
    }

    #[test]
    fn empty_and_unicode_messages_are_kept_verbatim() {
        assert_eq!(render(&json!({"message": ""})).unwrap(), " World !");
        assert_eq!(
            render(&json!({"message": "héllo\twörld"})).unwrap(),
            "héllo\twörld World !"
        );
    }

    #[test]
    fn missing_message_is_missing_field() {
        let err = message_of(&json!({})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.field(), Some("message"));
        assert!(err.message().contains("message"));
    }

    #[test]
    fn non_object_body_is_type_mismatch() {
        for body in [json!([1, 2, 3]), json!(7), json!("message"), json!(null)] {
            let err = render(&body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch);
            assert!(err.message().contains(value_kind(&body)));
        }
    }

    #[test]
    fn non_string_message_is_type_mismatch() {
        let err = render(&json!({"message": 42})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            err.message(),
            "field `message` must be a string, got number"
        );
    }

    #[test]
    fn huge_numbers_beside_message_do_not_matter() {
        let body: serde_json::Value =
            serde_json::from_str(r#"{"message": "Hello", "n": 1e400}"#).expect("valid");
        assert_eq!(render(&body).unwrap(), "Hello World !");
    }

    #[test]
    fn value_kind_names_every_variant() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(true)), "boolean");
        assert_eq!(value_kind(&json!(1.5)), "number");
        assert_eq!(value_kind(&json!("s")), "string");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!({})), "object");
    }
}
