use std::collections::BTreeMap;

/// Opaque payload of a structured field.
pub type FieldValue = serde_json::Value;

/// Structured fields attached to a log entry, keyed by name.
pub type Fields = BTreeMap<String, FieldValue>;

/// Internal severity bookkeeping. Stripped before any backend sees the fields.
pub const FIELD_LOG_LEVEL: &str = "LogLevel";
pub const FIELD_CALLER_FUNC: &str = "CallerFunc";
pub const FIELD_CALLER_FILE: &str = "CallerFile";
pub const FIELD_CALLER_LINE: &str = "CallerLine";

/// Returns a copy of `fields` without the entries named in `names`.
#[must_use]
pub fn filter_fields_by_name(fields: &Fields, names: &[&str]) -> Fields {
    fields
        .iter()
        .filter(|(name, _)| !names.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Reads `name` as an integer, or `default` when it is missing or not an
/// integer.
#[must_use]
pub fn get_field_as_i64_or(name: &str, fields: &Fields, default: i64) -> i64 {
    fields
        .get(name)
        .and_then(FieldValue::as_i64)
        .unwrap_or(default)
}

/// String form of a field value: strings as-is, anything else as compact JSON.
#[must_use]
pub fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => s.clone(),
        FieldValue::Null => String::new(),
        other => other.to_string(),
    }
}

/// Splits a variadic argument list into a message and field pairs.
///
/// `args[0]` is the message. The remaining arguments alternate name, value
/// and are merged into `fields`, overwriting existing keys. A trailing name
/// without a value becomes an empty-named field holding `null`.
pub fn merge_pairs(args: &[FieldValue], fields: &mut Fields) -> String {
    let Some((message, pairs)) = args.split_first() else {
        return String::new();
    };

    let mut chunks = pairs.chunks_exact(2);
    for pair in chunks.by_ref() {
        fields.insert(display_value(&pair[0]), pair[1].clone());
    }
    if !chunks.remainder().is_empty() {
        fields.insert(String::new(), FieldValue::Null);
    }

    display_value(message)
}
