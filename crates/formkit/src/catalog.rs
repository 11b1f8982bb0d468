//! Field kind catalog: the closed set of supported input kinds, their
//! subtype enumerations and per-kind default values.
//!
//! Both the declaration functions (to fill subtype defaults) and the form
//! model (to seed the data cell) consult this catalog.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Category of form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Toggle,
    Select,
    MultiSelect,
    Date,
    Time,
    DateTime,
    Color,
    File,
    FileList,
    Info,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Toggle => "toggle",
            Self::Select => "select",
            Self::MultiSelect => "multiselect",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Color => "color",
            Self::File => "file",
            Self::FileList => "filelist",
            Self::Info => "info",
        }
    }
}

/// Rendering variant for text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSubtype {
    #[default]
    Default,
    Email,
    Password,
    Phone,
    Url,
    Textarea,
}

/// Rendering variant for number fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberSubtype {
    #[default]
    Default,
    Slider,
}

/// Rendering variant for toggle fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleSubtype {
    #[default]
    Default,
    Checkbox,
}

/// Rendering variant for select fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectSubtype {
    #[default]
    Default,
    Radio,
    Button,
}

/// Rendering variant for multi-select fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiSelectSubtype {
    #[default]
    Default,
    Checkbox,
    Toggle,
}

/// Default value a field of the given kind starts with when the declaration
/// does not configure one.
///
/// Info fields hold no data; their entry is a placeholder empty string and
/// is never written into the data cell.
pub fn default_value_for(kind: FieldKind) -> Value {
    match kind {
        FieldKind::Text => json!(""),
        FieldKind::Number => json!(0),
        FieldKind::Toggle => json!(false),
        FieldKind::Select => json!(""),
        FieldKind::MultiSelect => json!([]),
        FieldKind::Date => json!(""),
        FieldKind::Time => json!(""),
        FieldKind::DateTime => json!(""),
        FieldKind::Color => json!(""),
        FieldKind::File => Value::Null,
        FieldKind::FileList => Value::Null,
        FieldKind::Info => json!(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_table() {
        assert_eq!(default_value_for(FieldKind::Text), json!(""));
        assert_eq!(default_value_for(FieldKind::Number), json!(0));
        assert_eq!(default_value_for(FieldKind::Toggle), json!(false));
        assert_eq!(default_value_for(FieldKind::Select), json!(""));
        assert_eq!(default_value_for(FieldKind::MultiSelect), json!([]));
        assert_eq!(default_value_for(FieldKind::Date), json!(""));
        assert_eq!(default_value_for(FieldKind::Time), json!(""));
        assert_eq!(default_value_for(FieldKind::DateTime), json!(""));
        assert_eq!(default_value_for(FieldKind::Color), json!(""));
        assert_eq!(default_value_for(FieldKind::File), Value::Null);
        assert_eq!(default_value_for(FieldKind::FileList), Value::Null);
        assert_eq!(default_value_for(FieldKind::Info), json!(""));
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(FieldKind::MultiSelect.as_str(), "multiselect");
        assert_eq!(FieldKind::DateTime.as_str(), "datetime");
        assert_eq!(FieldKind::FileList.as_str(), "filelist");
    }
}
