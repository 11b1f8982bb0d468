//! Declaration functions: one per field kind, plus the form declaration.
//!
//! Each function resolves the user options against the kind's documented
//! defaults, attaches the kind's built-in validation rules (unless the field
//! opts out via `default_constraints: false`) and records the descriptor.
//! A declaration never fails: malformed configuration surfaces later as
//! validation findings, not here.
//!
//! Called once per field by the host's registration step for the form type;
//! re-running a declaration upserts (see [`MetadataRegistry::record_field`]).

use crate::catalog::FieldKind;
use crate::config::{
    ColorOptions, DateOptions, DateTimeOptions, FieldConfig, FileListOptions, FileOptions,
    InfoConfig, MultiSelectOptions, NumberOptions, SelectOptions, TextOptions, TimeOptions,
    ToggleOptions,
};
use crate::metadata::{FieldDescriptor, Form, FormDescriptor, FormLayoutConfig, MetadataRegistry};
use crate::validation;

/// Declare the layout of form `F`, overwriting a previous declaration.
pub fn form<F: Form>(registry: &MetadataRegistry, layout: FormLayoutConfig) {
    registry.record_form::<F>(FormDescriptor { layout });
}

pub fn text_field<F: Form>(registry: &MetadataRegistry, name: &'static str, options: TextOptions) {
    let config = options.resolve();

    let mut rules = Vec::new();
    if config.common.default_constraints {
        rules.push(validation::is_string());
        if config.common.required {
            rules.push(validation::not_empty());
        }
    }

    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::Text,
        config: FieldConfig::Text(config),
        rules,
    });
}

pub fn number_field<F: Form>(
    registry: &MetadataRegistry,
    name: &'static str,
    options: NumberOptions,
) {
    let config = options.resolve();

    let mut rules = Vec::new();
    if config.common.default_constraints {
        rules.push(validation::is_number());
        if let Some(min) = config.min {
            rules.push(validation::min(min));
        }
        if let Some(max) = config.max {
            rules.push(validation::max(max));
        }
    }

    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::Number,
        config: FieldConfig::Number(config),
        rules,
    });
}

pub fn toggle_field<F: Form>(
    registry: &MetadataRegistry,
    name: &'static str,
    options: ToggleOptions,
) {
    let config = options.resolve();

    let mut rules = Vec::new();
    if config.common.default_constraints {
        rules.push(validation::is_boolean());
    }

    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::Toggle,
        config: FieldConfig::Toggle(config),
        rules,
    });
}

pub fn select_field<F: Form>(
    registry: &MetadataRegistry,
    name: &'static str,
    options: SelectOptions,
) {
    let config = options.resolve();

    let mut rules = Vec::new();
    if config.common.default_constraints {
        let allowed: Vec<String> = config.options.iter().map(|o| o.value.clone()).collect();
        rules.push(validation::is_string());
        rules.push(validation::one_of(allowed));
    }

    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::Select,
        config: FieldConfig::Select(config),
        rules,
    });
}

pub fn multi_select_field<F: Form>(
    registry: &MetadataRegistry,
    name: &'static str,
    options: MultiSelectOptions,
) {
    let config = options.resolve();

    let mut rules = Vec::new();
    if config.common.default_constraints {
        let allowed: Vec<String> = config.options.iter().map(|o| o.value.clone()).collect();
        rules.push(validation::is_string_array());
        rules.push(validation::each_one_of(allowed));
    }

    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::MultiSelect,
        config: FieldConfig::MultiSelect(config),
        rules,
    });
}

pub fn date_field<F: Form>(registry: &MetadataRegistry, name: &'static str, options: DateOptions) {
    let config = options.resolve();

    let mut rules = Vec::new();
    if config.common.default_constraints {
        rules.push(validation::is_string());
        rules.push(validation::date_string());
    }

    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::Date,
        config: FieldConfig::Date(config),
        rules,
    });
}

pub fn time_field<F: Form>(registry: &MetadataRegistry, name: &'static str, options: TimeOptions) {
    let config = options.resolve();

    let mut rules = Vec::new();
    if config.common.default_constraints {
        rules.push(validation::is_string());
        rules.push(validation::time_string());
    }

    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::Time,
        config: FieldConfig::Time(config),
        rules,
    });
}

/// Combined date-time fields only get the string type check, no format rule.
pub fn date_time_field<F: Form>(
    registry: &MetadataRegistry,
    name: &'static str,
    options: DateTimeOptions,
) {
    let config = options.resolve();

    let mut rules = Vec::new();
    if config.common.default_constraints {
        rules.push(validation::is_string());
    }

    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::DateTime,
        config: FieldConfig::DateTime(config),
        rules,
    });
}

pub fn color_field<F: Form>(
    registry: &MetadataRegistry,
    name: &'static str,
    options: ColorOptions,
) {
    let config = options.resolve();

    let mut rules = Vec::new();
    if config.common.default_constraints {
        rules.push(validation::is_string());
        rules.push(validation::hex_color());
    }

    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::Color,
        config: FieldConfig::Color(config),
        rules,
    });
}

pub fn file_field<F: Form>(registry: &MetadataRegistry, name: &'static str, options: FileOptions) {
    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::File,
        config: FieldConfig::File(options.resolve()),
        rules: Vec::new(),
    });
}

pub fn file_list_field<F: Form>(
    registry: &MetadataRegistry,
    name: &'static str,
    options: FileListOptions,
) {
    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::FileList,
        config: FieldConfig::FileList(options.resolve()),
        rules: Vec::new(),
    });
}

/// Info fields carry static text only; they are excluded from data and
/// validation entirely.
pub fn info_field<F: Form>(registry: &MetadataRegistry, name: &'static str, text: impl Into<String>) {
    registry.record_field::<F>(FieldDescriptor {
        name,
        kind: FieldKind::Info,
        config: FieldConfig::Info(InfoConfig { text: text.into() }),
        rules: Vec::new(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CommonOptions, SelectOption};

    struct Declared;
    impl Form for Declared {}

    fn rule_codes(registry: &MetadataRegistry, name: &str) -> Vec<&'static str> {
        registry
            .lookup_fields::<Declared>()
            .unwrap()
            .iter()
            .find(|f| f.name == name)
            .unwrap()
            .rules
            .iter()
            .map(|r| r.code())
            .collect()
    }

    #[test]
    fn test_text_rules_depend_on_required() {
        let registry = MetadataRegistry::new();
        text_field::<Declared>(&registry, "plain", TextOptions::default());
        text_field::<Declared>(
            &registry,
            "needed",
            TextOptions {
                common: CommonOptions {
                    required: Some(true),
                    ..Default::default()
                },
                ..Default::default()
            },
        );

        assert_eq!(rule_codes(&registry, "plain"), vec!["errors.types.string"]);
        assert_eq!(
            rule_codes(&registry, "needed"),
            vec!["errors.types.string", "errors.generic.notEmpty"]
        );
    }

    #[test]
    fn test_number_bounds_attach_rules() {
        let registry = MetadataRegistry::new();
        number_field::<Declared>(
            &registry,
            "amount",
            NumberOptions {
                min: Some(0.0),
                max: Some(9.0),
                ..Default::default()
            },
        );

        assert_eq!(
            rule_codes(&registry, "amount"),
            vec!["errors.types.number", "errors.numbers.min", "errors.numbers.max"]
        );
    }

    #[test]
    fn test_default_constraints_false_attaches_nothing() {
        let registry = MetadataRegistry::new();
        select_field::<Declared>(
            &registry,
            "free",
            SelectOptions {
                common: CommonOptions {
                    default_constraints: Some(false),
                    ..Default::default()
                },
                options: vec![SelectOption::new("a", "A")],
                ..Default::default()
            },
        );

        assert!(rule_codes(&registry, "free").is_empty());
    }

    #[test]
    fn test_date_time_gets_no_format_rule() {
        let registry = MetadataRegistry::new();
        date_field::<Declared>(&registry, "day", DateOptions::default());
        time_field::<Declared>(&registry, "at", TimeOptions::default());
        date_time_field::<Declared>(&registry, "moment", DateTimeOptions::default());

        assert_eq!(
            rule_codes(&registry, "day"),
            vec!["errors.types.string", "errors.strings.date"]
        );
        assert_eq!(
            rule_codes(&registry, "at"),
            vec!["errors.types.string", "errors.strings.time"]
        );
        assert_eq!(rule_codes(&registry, "moment"), vec!["errors.types.string"]);
    }

    #[test]
    fn test_file_kinds_and_info_have_no_rules() {
        let registry = MetadataRegistry::new();
        file_field::<Declared>(&registry, "attachment", FileOptions::default());
        file_list_field::<Declared>(&registry, "gallery", FileListOptions::default());
        info_field::<Declared>(&registry, "note", "Fill everything in.");

        assert!(rule_codes(&registry, "attachment").is_empty());
        assert!(rule_codes(&registry, "gallery").is_empty());
        assert!(rule_codes(&registry, "note").is_empty());
    }

    #[test]
    fn test_form_declaration_records_layout() {
        let registry = MetadataRegistry::new();
        form::<Declared>(&registry, FormLayoutConfig::Column(vec!["plain"]));
        assert!(registry.lookup_form::<Declared>().is_some());
    }
}
