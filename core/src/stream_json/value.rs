use serde_json::Value;

/// Walks nested objects by key. Any missing key or non-object step yields `None`.
pub fn get_path<'a>(v: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let mut cur = v;
    for k in keys {
        cur = cur.as_object()?.get(*k)?;
    }
    Some(cur)
}

/// Loose truthiness used for "field or default" lookups.
///
/// `null`, `false`, zero, the empty string, and empty arrays/objects are falsy.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Text form of a value landing in a text slot: strings raw, anything else as compact JSON.
pub fn display_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `field or default` lookup: the field's text when present and truthy.
pub fn truthy_text(v: &Value, key: &str) -> Option<String> {
    v.get(key).filter(|x| is_truthy(x)).map(display_text)
}
