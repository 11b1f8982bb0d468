//! Field configuration model.
//!
//! Every field kind has two shapes: a user-facing options struct where all
//! sub-options stay optional, and a resolved config where every documented
//! default has been filled in. Declaration functions convert the former into
//! the latter; everything stored in the metadata registry is resolved.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{
    FieldKind, MultiSelectSubtype, NumberSubtype, SelectSubtype, TextSubtype, ToggleSubtype,
};

/// Disabled attribute: a literal, or the name of another field whose truthy
/// current value disables this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Disabled {
    Flag(bool),
    Field(String),
}

impl Default for Disabled {
    fn default() -> Self {
        Self::Flag(false)
    }
}

/// One selectable entry of a select / multi-select field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// ============================================================================
// Common attributes
// ============================================================================

/// Shared optional attributes, as supplied by the user
#[derive(Debug, Clone, Default)]
pub struct CommonOptions {
    pub label: Option<String>,
    pub hint: Option<String>,
    pub default: Option<Value>,
    pub readonly: Option<bool>,
    pub disabled: Option<Disabled>,
    /// `false` suppresses the built-in validators for the field
    pub default_constraints: Option<bool>,
    pub required: Option<bool>,
}

/// Shared attributes with defaults filled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonConfig {
    pub label: Option<String>,
    pub hint: Option<String>,
    pub default: Option<Value>,
    pub readonly: bool,
    pub disabled: Disabled,
    pub default_constraints: bool,
    pub required: bool,
}

impl CommonOptions {
    fn resolve(self) -> CommonConfig {
        CommonConfig {
            label: self.label,
            hint: self.hint,
            default: self.default,
            readonly: self.readonly.unwrap_or(false),
            disabled: self.disabled.unwrap_or_default(),
            default_constraints: self.default_constraints.unwrap_or(true),
            required: self.required.unwrap_or(false),
        }
    }
}

// ============================================================================
// Per-kind options and resolved configs
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    pub common: CommonOptions,
    pub subtype: Option<TextSubtype>,
    pub clearable: Option<bool>,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
    pub common: CommonConfig,
    pub subtype: TextSubtype,
    pub clearable: bool,
    pub suffix: Option<String>,
}

impl TextOptions {
    pub(crate) fn resolve(self) -> TextConfig {
        TextConfig {
            common: self.common.resolve(),
            subtype: self.subtype.unwrap_or_default(),
            clearable: self.clearable.unwrap_or(false),
            suffix: self.suffix,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NumberOptions {
    pub common: CommonOptions,
    pub subtype: Option<NumberSubtype>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberConfig {
    pub common: CommonConfig,
    pub subtype: NumberSubtype,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub suffix: Option<String>,
}

impl NumberOptions {
    pub(crate) fn resolve(self) -> NumberConfig {
        NumberConfig {
            common: self.common.resolve(),
            subtype: self.subtype.unwrap_or_default(),
            min: self.min,
            max: self.max,
            step: self.step,
            suffix: self.suffix,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToggleOptions {
    pub common: CommonOptions,
    pub subtype: Option<ToggleSubtype>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleConfig {
    pub common: CommonConfig,
    pub subtype: ToggleSubtype,
}

impl ToggleOptions {
    pub(crate) fn resolve(self) -> ToggleConfig {
        ToggleConfig {
            common: self.common.resolve(),
            subtype: self.subtype.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    pub common: CommonOptions,
    pub subtype: Option<SelectSubtype>,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectConfig {
    pub common: CommonConfig,
    pub subtype: SelectSubtype,
    pub options: Vec<SelectOption>,
}

impl SelectOptions {
    pub(crate) fn resolve(self) -> SelectConfig {
        SelectConfig {
            common: self.common.resolve(),
            subtype: self.subtype.unwrap_or_default(),
            options: self.options,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MultiSelectOptions {
    pub common: CommonOptions,
    pub subtype: Option<MultiSelectSubtype>,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSelectConfig {
    pub common: CommonConfig,
    pub subtype: MultiSelectSubtype,
    pub options: Vec<SelectOption>,
}

impl MultiSelectOptions {
    pub(crate) fn resolve(self) -> MultiSelectConfig {
        MultiSelectConfig {
            common: self.common.resolve(),
            subtype: self.subtype.unwrap_or_default(),
            options: self.options,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DateOptions {
    pub common: CommonOptions,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub today_btn: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateConfig {
    pub common: CommonConfig,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub today_btn: bool,
}

impl DateOptions {
    pub(crate) fn resolve(self) -> DateConfig {
        DateConfig {
            common: self.common.resolve(),
            title: self.title,
            subtitle: self.subtitle,
            today_btn: self.today_btn.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimeOptions {
    pub common: CommonOptions,
    pub format_24h: Option<bool>,
    pub now_btn: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    pub common: CommonConfig,
    pub format_24h: bool,
    pub now_btn: bool,
}

impl TimeOptions {
    pub(crate) fn resolve(self) -> TimeConfig {
        TimeConfig {
            common: self.common.resolve(),
            format_24h: self.format_24h.unwrap_or(true),
            now_btn: self.now_btn.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DateTimeOptions {
    pub common: CommonOptions,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub today_btn: Option<bool>,
    pub now_btn: Option<bool>,
    pub format_24h: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTimeConfig {
    pub common: CommonConfig,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub today_btn: bool,
    pub now_btn: bool,
    pub format_24h: bool,
}

impl DateTimeOptions {
    pub(crate) fn resolve(self) -> DateTimeConfig {
        DateTimeConfig {
            common: self.common.resolve(),
            title: self.title,
            subtitle: self.subtitle,
            today_btn: self.today_btn.unwrap_or(false),
            now_btn: self.now_btn.unwrap_or(false),
            format_24h: self.format_24h.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColorOptions {
    pub common: CommonOptions,
    pub use_input: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    pub common: CommonConfig,
    pub use_input: bool,
}

impl ColorOptions {
    pub(crate) fn resolve(self) -> ColorConfig {
        ColorConfig {
            common: self.common.resolve(),
            use_input: self.use_input.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileOptions {
    pub common: CommonOptions,
    pub accept: Option<String>,
    pub max_file_size: Option<u64>,
    pub clearable: Option<bool>,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub common: CommonConfig,
    pub accept: Option<String>,
    pub max_file_size: Option<u64>,
    pub clearable: bool,
    pub suffix: Option<String>,
}

impl FileOptions {
    pub(crate) fn resolve(self) -> FileConfig {
        FileConfig {
            common: self.common.resolve(),
            accept: self.accept,
            max_file_size: self.max_file_size,
            clearable: self.clearable.unwrap_or(false),
            suffix: self.suffix,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileListOptions {
    pub common: CommonOptions,
    pub max: Option<u32>,
    pub accept: Option<String>,
    pub max_file_size: Option<u64>,
    pub clearable: Option<bool>,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileListConfig {
    pub common: CommonConfig,
    pub max: u32,
    pub accept: Option<String>,
    pub max_file_size: Option<u64>,
    pub clearable: bool,
    pub suffix: Option<String>,
}

impl FileListOptions {
    pub(crate) fn resolve(self) -> FileListConfig {
        FileListConfig {
            common: self.common.resolve(),
            max: self.max.unwrap_or(1),
            accept: self.accept,
            max_file_size: self.max_file_size,
            clearable: self.clearable.unwrap_or(false),
            suffix: self.suffix,
        }
    }
}

/// Info fields only carry a static text; they hold no data and take none of
/// the common attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoConfig {
    pub text: String,
}

// ============================================================================
// Closed union over all resolved configs
// ============================================================================

/// Fully-resolved configuration of a declared field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldConfig {
    Text(TextConfig),
    Number(NumberConfig),
    Toggle(ToggleConfig),
    Select(SelectConfig),
    #[serde(rename = "multiselect")]
    MultiSelect(MultiSelectConfig),
    Date(DateConfig),
    Time(TimeConfig),
    #[serde(rename = "datetime")]
    DateTime(DateTimeConfig),
    Color(ColorConfig),
    File(FileConfig),
    #[serde(rename = "filelist")]
    FileList(FileListConfig),
    Info(InfoConfig),
}

impl FieldConfig {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Toggle(_) => FieldKind::Toggle,
            Self::Select(_) => FieldKind::Select,
            Self::MultiSelect(_) => FieldKind::MultiSelect,
            Self::Date(_) => FieldKind::Date,
            Self::Time(_) => FieldKind::Time,
            Self::DateTime(_) => FieldKind::DateTime,
            Self::Color(_) => FieldKind::Color,
            Self::File(_) => FieldKind::File,
            Self::FileList(_) => FieldKind::FileList,
            Self::Info(_) => FieldKind::Info,
        }
    }

    /// Shared attributes, `None` for Info fields
    pub fn common(&self) -> Option<&CommonConfig> {
        match self {
            Self::Text(c) => Some(&c.common),
            Self::Number(c) => Some(&c.common),
            Self::Toggle(c) => Some(&c.common),
            Self::Select(c) => Some(&c.common),
            Self::MultiSelect(c) => Some(&c.common),
            Self::Date(c) => Some(&c.common),
            Self::Time(c) => Some(&c.common),
            Self::DateTime(c) => Some(&c.common),
            Self::Color(c) => Some(&c.common),
            Self::File(c) => Some(&c.common),
            Self::FileList(c) => Some(&c.common),
            Self::Info(_) => None,
        }
    }

    /// Configured default value, if the declaration set one
    pub fn default_value(&self) -> Option<&Value> {
        self.common().and_then(|c| c.default.as_ref())
    }
}
