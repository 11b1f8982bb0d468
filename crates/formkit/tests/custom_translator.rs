//! The translator singleton is process-wide, so this lives in its own
//! integration binary instead of next to the unit tests.

use leptos::prelude::*;
use serde_json::Value;

use formkit::{declare, CommonOptions, FormLayoutConfig, FormModel, TextOptions};

struct Login;
impl formkit::Form for Login {}

#[test]
fn test_installed_translator_is_used_and_set_only_once() {
    formkit::set_translator(|code, params| {
        let label = params
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or_default();
        format!("[{code}] {label}")
    });
    // a second install must be ignored
    formkit::set_translator(|_, _| "hijacked".to_string());

    let registry = formkit::MetadataRegistry::new();
    declare::form::<Login>(&registry, FormLayoutConfig::Column(vec!["username"]));
    declare::text_field::<Login>(
        &registry,
        "username",
        TextOptions {
            common: CommonOptions {
                label: Some("Username".into()),
                required: Some(true),
                ..Default::default()
            },
            ..Default::default()
        },
    );

    let model = FormModel::<Login>::new(&registry).unwrap();
    assert!(!model.validate());

    let error = model
        .errors()
        .with(|errors| errors["username"].clone())
        .unwrap();
    assert!(error.contains("[errors.generic.notEmpty] Username"));
    assert!(!error.contains("hijacked"));
}
