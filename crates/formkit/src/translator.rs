//! Error message translation.
//!
//! Validation rules carry stable error codes; rendering a finding turns the
//! code plus its parameters into a display string. Hosts install their own
//! translator once at startup (i18n); without one, a built-in English table
//! is used.

use log::warn;
use once_cell::sync::OnceCell;
use serde_json::{Map, Value};

/// Translator capability: `(error code, params) -> display string`
pub type Translator = Box<dyn Fn(&str, &Map<String, Value>) -> String + Send + Sync>;

static TRANSLATOR: OnceCell<Translator> = OnceCell::new();

/// Install the process-wide translator. Settable once; later calls are
/// ignored with a warning so a hot-reloaded bootstrap stays harmless.
pub fn set_translator<T>(translator: T)
where
    T: Fn(&str, &Map<String, Value>) -> String + Send + Sync + 'static,
{
    if TRANSLATOR.set(Box::new(translator)).is_err() {
        warn!("translator already installed, ignoring replacement");
    }
}

/// Render an error code through the installed translator, falling back to
/// the built-in English messages.
pub fn translate(code: &str, params: &Map<String, Value>) -> String {
    match TRANSLATOR.get() {
        Some(translator) => translator(code, params),
        None => interpolate(default_template(code), params),
    }
}

fn default_template(code: &str) -> &'static str {
    match code {
        "errors.types.string" => r#""{label}" must be a string."#,
        "errors.types.number" => r#""{label}" must be a number."#,
        "errors.types.boolean" => r#""{label}" must be a boolean."#,
        "errors.types.stringArray" => r#""{label}" must be a list of strings."#,
        "errors.generic.notEmpty" => r#""{label}" must not be empty."#,
        "errors.generic.oneOf" => r#""{label}" must be one of: {allowed}."#,
        "errors.generic.eachOneOf" => r#"Every entry of "{label}" must be one of: {allowed}."#,
        "errors.numbers.min" => r#""{label}" must be at least {min}. {value} is too small."#,
        "errors.numbers.max" => r#""{label}" must be at most {max}. {value} is too large."#,
        "errors.strings.date" => r#""{label}" must be a valid date (YYYY-MM-DD)."#,
        "errors.strings.time" => r#""{label}" must be a valid time (HH:MM or HH:MM:SS)."#,
        "errors.strings.hexColor" => r#""{label}" must be a valid hex color."#,
        _ => r#""{label}" is invalid."#,
    }
}

/// Replace `{key}` placeholders with the matching parameter values.
/// Strings are inserted bare, everything else in JSON notation.
pub fn interpolate(template: &str, params: &Map<String, Value>) -> String {
    let mut message = template.to_string();
    for (key, value) in params {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        message = message.replace(&format!("{{{}}}", key), &rendered);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_default_messages_interpolate() {
        let msg = translate(
            "errors.numbers.min",
            &params(&[
                ("label", json!("Age")),
                ("min", json!(0)),
                ("value", json!(-11)),
            ]),
        );
        assert_eq!(msg, r#""Age" must be at least 0. -11 is too small."#);
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let msg = translate("errors.made.up", &params(&[("label", json!("X"))]));
        assert_eq!(msg, r#""X" is invalid."#);
    }

    #[test]
    fn test_interpolate_leaves_unknown_placeholders() {
        let msg = interpolate("{label} / {missing}", &params(&[("label", json!("A"))]));
        assert_eq!(msg, "A / {missing}");
    }
}
