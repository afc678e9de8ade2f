use std::fmt::Write;

use crate::{
    display_value, get_field_as_i64_or, Fields, Severity, FIELD_CALLER_FILE, FIELD_CALLER_FUNC,
    FIELD_CALLER_LINE, FIELD_LOG_LEVEL,
};

/// Turns a raw message and its field set into the final message and fields.
///
/// Runs after caller annotation and field merging, before the `LogLevel`
/// field is stripped, so implementations may read the severity of the call.
pub trait Formatter: Send + Sync {
    fn format(&self, message: String, fields: Fields) -> (String, Fields);
}

impl<F> Formatter for F
where
    F: Fn(String, Fields) -> (String, Fields) + Send + Sync,
{
    fn format(&self, message: String, fields: Fields) -> (String, Fields) {
        self(message, fields)
    }
}

const RESERVED: [&str; 4] = [
    FIELD_LOG_LEVEL,
    FIELD_CALLER_FUNC,
    FIELD_CALLER_FILE,
    FIELD_CALLER_LINE,
];

fn needs_quoting(value: &str) -> bool {
    value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '"' || c == '=')
}

/// Appends user fields to the message as `key=value` pairs.
///
/// Values that are empty or contain whitespace, `"` or `=` are quoted and
/// escaped. Reserved fields are left out of the text. The field set is passed through
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogfmtFormatter;

impl Formatter for LogfmtFormatter {
    fn format(&self, mut message: String, fields: Fields) -> (String, Fields) {
        for (name, value) in fields
            .iter()
            .filter(|(name, _)| !RESERVED.contains(&name.as_str()))
        {
            let value = display_value(value);
            if needs_quoting(&value) {
                let _ = write!(message, " {name}={value:?}");
            } else {
                let _ = write!(message, " {name}={value}");
            }
        }
        (message, fields)
    }
}

/// Prefixes the message with the severity of the call, e.g. `[WARNING] disk full`.
///
/// Calls without a severity (`print`, fatal, panic) are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelPrefixFormatter;

impl Formatter for LevelPrefixFormatter {
    fn format(&self, message: String, fields: Fields) -> (String, Fields) {
        let code = get_field_as_i64_or(FIELD_LOG_LEVEL, &fields, -1);
        match Severity::try_from(code) {
            Ok(severity) => (
                format!("[{}] {message}", severity.as_str().to_uppercase()),
                fields,
            ),
            Err(_) => (message, fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields() -> Fields {
        let mut fields = Fields::new();
        fields.insert("user".to_owned(), json!("alice"));
        fields.insert("note".to_owned(), json!("two words"));
        fields.insert("count".to_owned(), json!(3));
        fields.insert(FIELD_CALLER_LINE.to_owned(), json!(10));
        fields
    }

    #[test]
    fn test_logfmt() {
        let (message, out) = LogfmtFormatter.format("hello".to_owned(), fields());
        assert_eq!(message, r#"hello count=3 note="two words" user=alice"#);
        assert_eq!(out, fields());
    }

    #[test]
    fn test_logfmt_quotes_ambiguous_values() {
        let mut fields = Fields::new();
        fields.insert("expr".to_owned(), json!("a=b"));
        fields.insert("quote".to_owned(), json!(r#"say "hi""#));
        fields.insert("empty".to_owned(), json!(""));
        fields.insert("obj".to_owned(), json!({"k": 1}));
        let (message, _) = LogfmtFormatter.format("m".to_owned(), fields);
        assert_eq!(
            message,
            r#"m empty="" expr="a=b" obj="{\"k\":1}" quote="say \"hi\"""#
        );
    }

    #[test]
    fn test_level_prefix() {
        let mut with_level = fields();
        with_level.insert(FIELD_LOG_LEVEL.to_owned(), json!(Severity::Warning.as_i64()));
        let (message, _) = LevelPrefixFormatter.format("disk full".to_owned(), with_level);
        assert_eq!(message, "[WARNING] disk full");

        let (message, _) = LevelPrefixFormatter.format("plain".to_owned(), fields());
        assert_eq!(message, "plain");
    }

    #[test]
    fn test_closure_formatter() {
        let upper = |message: String, mut fields: Fields| {
            fields.insert("formatted".to_owned(), json!(true));
            (message.to_uppercase(), fields)
        };
        let (message, out) = upper.format("shout".to_owned(), Fields::new());
        assert_eq!(message, "SHOUT");
        assert_eq!(out.get("formatted"), Some(&json!(true)));
    }
}
