//! Demo forms.
//!
//! Two registered form types exercising every field kind, plus the
//! [`bootstrap`] step a host application calls once at startup. Rendering is
//! a separate concern; this crate only defines the models.

use std::sync::Once;

use log::debug;
use serde_json::json;

use formkit::{
    declare, CommonOptions, DateOptions, DateTimeOptions, FileListOptions, FileOptions,
    FormGroup, FormLayoutConfig, MetadataRegistry, MultiSelectOptions, NumberOptions,
    SelectOption, SelectOptions, TextOptions, TextSubtype, TimeOptions, ToggleOptions,
};

/// Account sign-up: rows layout, the common input kinds
pub struct SignUpForm;
impl formkit::Form for SignUpForm {
    fn form_name() -> &'static str {
        "SignUpForm"
    }
}

/// Profile settings: groups layout, the long tail of field kinds
pub struct ProfileSettingsForm;
impl formkit::Form for ProfileSettingsForm {
    fn form_name() -> &'static str {
        "ProfileSettingsForm"
    }
}

fn register_sign_up(registry: &MetadataRegistry) {
    declare::form::<SignUpForm>(
        registry,
        FormLayoutConfig::Rows(vec![
            vec!["username", "email"],
            vec!["age", "country"],
            vec!["birthday", "newsletter"],
        ]),
    );

    declare::text_field::<SignUpForm>(
        registry,
        "username",
        TextOptions {
            common: CommonOptions {
                label: Some("Username".into()),
                required: Some(true),
                ..Default::default()
            },
            clearable: Some(true),
            ..Default::default()
        },
    );
    declare::text_field::<SignUpForm>(
        registry,
        "email",
        TextOptions {
            common: CommonOptions {
                label: Some("E-mail".into()),
                required: Some(true),
                hint: Some("We never share it.".into()),
                ..Default::default()
            },
            subtype: Some(TextSubtype::Email),
            ..Default::default()
        },
    );
    declare::number_field::<SignUpForm>(
        registry,
        "age",
        NumberOptions {
            common: CommonOptions {
                label: Some("Age".into()),
                ..Default::default()
            },
            min: Some(13.0),
            max: Some(120.0),
            ..Default::default()
        },
    );
    declare::select_field::<SignUpForm>(
        registry,
        "country",
        SelectOptions {
            common: CommonOptions {
                label: Some("Country".into()),
                default: Some(json!("de")),
                ..Default::default()
            },
            options: vec![
                SelectOption::new("de", "Germany"),
                SelectOption::new("fr", "France"),
                SelectOption::new("es", "Spain"),
            ],
            ..Default::default()
        },
    );
    declare::date_field::<SignUpForm>(
        registry,
        "birthday",
        DateOptions {
            common: CommonOptions {
                label: Some("Birthday".into()),
                default: Some(json!("2000-01-01")),
                ..Default::default()
            },
            today_btn: Some(true),
            ..Default::default()
        },
    );
    declare::toggle_field::<SignUpForm>(
        registry,
        "newsletter",
        ToggleOptions {
            common: CommonOptions {
                label: Some("Subscribe to newsletter".into()),
                ..Default::default()
            },
            ..Default::default()
        },
    );
}

fn register_profile_settings(registry: &MetadataRegistry) {
    declare::form::<ProfileSettingsForm>(
        registry,
        FormLayoutConfig::Groups(vec![
            (
                "appearance".to_string(),
                FormGroup {
                    title: Some("Appearance".to_string()),
                    text: None,
                    fields: vec![vec!["accent", "interests"]],
                },
            ),
            (
                "schedule".to_string(),
                FormGroup {
                    title: Some("Schedule".to_string()),
                    text: Some("Times use the 24-hour clock.".to_string()),
                    fields: vec![vec!["reminder_at", "vacation_until"]],
                },
            ),
            (
                "uploads".to_string(),
                FormGroup {
                    title: Some("Uploads".to_string()),
                    text: None,
                    fields: vec![vec!["upload_note"], vec!["avatar", "documents"]],
                },
            ),
        ]),
    );

    declare::color_field::<ProfileSettingsForm>(
        registry,
        "accent",
        formkit::ColorOptions {
            common: CommonOptions {
                label: Some("Accent color".into()),
                default: Some(json!("#3366ff")),
                ..Default::default()
            },
            ..Default::default()
        },
    );
    declare::multi_select_field::<ProfileSettingsForm>(
        registry,
        "interests",
        MultiSelectOptions {
            common: CommonOptions {
                label: Some("Interests".into()),
                ..Default::default()
            },
            options: vec![
                SelectOption::new("rust", "Rust"),
                SelectOption::new("music", "Music"),
                SelectOption::new("sports", "Sports"),
            ],
            ..Default::default()
        },
    );
    declare::time_field::<ProfileSettingsForm>(
        registry,
        "reminder_at",
        TimeOptions {
            common: CommonOptions {
                label: Some("Daily reminder".into()),
                default: Some(json!("09:00")),
                ..Default::default()
            },
            now_btn: Some(true),
            ..Default::default()
        },
    );
    declare::date_time_field::<ProfileSettingsForm>(
        registry,
        "vacation_until",
        DateTimeOptions {
            common: CommonOptions {
                label: Some("Vacation until".into()),
                ..Default::default()
            },
            ..Default::default()
        },
    );
    declare::info_field::<ProfileSettingsForm>(
        registry,
        "upload_note",
        "Images up to 2 MB, documents up to 10 MB.",
    );
    declare::file_field::<ProfileSettingsForm>(
        registry,
        "avatar",
        FileOptions {
            common: CommonOptions {
                label: Some("Avatar".into()),
                ..Default::default()
            },
            accept: Some("image/*".into()),
            max_file_size: Some(2 * 1024 * 1024),
            ..Default::default()
        },
    );
    declare::file_list_field::<ProfileSettingsForm>(
        registry,
        "documents",
        FileListOptions {
            common: CommonOptions {
                label: Some("Documents".into()),
                ..Default::default()
            },
            max: Some(5),
            accept: Some(".pdf".into()),
            max_file_size: Some(10 * 1024 * 1024),
            ..Default::default()
        },
    );
}

static BOOTSTRAP: Once = Once::new();

/// Initialize the process-wide registry and register the demo forms.
/// Safe to call repeatedly; re-runs reuse the existing registry.
pub fn bootstrap() -> &'static MetadataRegistry {
    let registry = formkit::setup_metadata_registry();

    BOOTSTRAP.call_once(|| {
        debug!("registering demo forms");
        register_sign_up(registry);
        register_profile_settings(registry);
    });

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit::{FieldKind, FormLayout, FormModel};
    use leptos::prelude::*;

    #[test]
    fn test_bootstrap_is_idempotent() {
        let registry = bootstrap();
        let before = registry.lookup_fields::<SignUpForm>().unwrap().len();

        let registry = bootstrap();
        let fields = registry.lookup_fields::<SignUpForm>().unwrap();
        assert_eq!(fields.len(), before);
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_sign_up_model_round_trip() {
        let registry = bootstrap();
        let model = FormModel::<SignUpForm>::new(registry).unwrap();

        assert_eq!(model.layout().kind(), FormLayout::Rows);
        model.data().with(|d| {
            assert_eq!(d["country"], json!("de"));
            assert_eq!(d["birthday"], json!("2000-01-01"));
            assert_eq!(d["newsletter"], json!(false));
        });

        // fresh form: required username and email are empty
        assert!(!model.validate());

        model.set_value("username", json!("ada"));
        model.set_value("email", json!("ada@example.org"));
        model.set_value("age", json!(36));
        assert!(model.validate());
        assert!(model.valid().get());
    }

    #[test]
    fn test_profile_settings_model() {
        let registry = bootstrap();
        let model = FormModel::<ProfileSettingsForm>::new(registry).unwrap();

        assert_eq!(model.layout().kind(), FormLayout::Groups);

        // info field is listed but holds no data
        let kinds: Vec<FieldKind> = model.fields().iter().map(|f| f.kind).collect();
        assert!(kinds.contains(&FieldKind::Info));
        model.data().with(|d| assert!(!d.contains_key("upload_note")));

        // defaults: color configured, files null, multiselect empty
        model.data().with(|d| {
            assert_eq!(d["accent"], json!("#3366ff"));
            assert_eq!(d["avatar"], serde_json::Value::Null);
            assert_eq!(d["documents"], serde_json::Value::Null);
            assert_eq!(d["interests"], json!([]));
        });

        assert!(model.validate());

        model.set_value("interests", json!(["rust", "cooking"]));
        model.set_value("reminder_at", json!("25:00"));
        assert!(!model.validate());
        model.errors().with(|e| {
            assert!(e["interests"].is_some());
            assert!(e["reminder_at"].is_some());
        });

        model.set_value("interests", json!(["rust", "music"]));
        model.set_value("reminder_at", json!("08:30"));
        assert!(model.validate());
    }
}
