//! Metadata storage.
//!
//! Two registries keyed by the nominal identity (`TypeId`) of the form type:
//! one holding the layout descriptor per form, one holding the ordered field
//! descriptors. Descriptors are immutable once recorded and there is no
//! unregister operation.
//!
//! The registry is an explicit value, so hosts and tests can own private
//! instances; a process-wide instance with guarded, idempotent
//! initialization is provided for application bootstrap.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::RwLock;

use log::{debug, warn};
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::catalog::FieldKind;
use crate::config::FieldConfig;
use crate::validation::Rule;

/// Marker trait every form type must implement to be registrable.
///
/// Takes the place of a base-class check: a type that is not a form cannot
/// reach the declaration functions at all.
pub trait Form: 'static {
    /// Name used in structural error messages
    fn form_name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}

/// Layout kind of a declared form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormLayout {
    Column,
    Rows,
    Groups,
}

/// One titled group of rows in a `Groups` layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormGroup {
    pub title: Option<String>,
    pub text: Option<String>,
    pub fields: Vec<Vec<&'static str>>,
}

/// Layout configuration; the shape depends on the layout kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FormLayoutConfig {
    /// Single column, top to bottom
    Column(Vec<&'static str>),
    /// Rows of fields, each row rendered side by side
    Rows(Vec<Vec<&'static str>>),
    /// Keyed groups in declaration order
    Groups(Vec<(String, FormGroup)>),
}

impl FormLayoutConfig {
    pub fn kind(&self) -> FormLayout {
        match self {
            Self::Column(_) => FormLayout::Column,
            Self::Rows(_) => FormLayout::Rows,
            Self::Groups(_) => FormLayout::Groups,
        }
    }

    /// Every field name referenced by the layout, in layout order
    pub fn field_names(&self) -> Vec<&'static str> {
        match self {
            Self::Column(names) => names.clone(),
            Self::Rows(rows) => rows.iter().flatten().copied().collect(),
            Self::Groups(groups) => groups
                .iter()
                .flat_map(|(_, group)| group.fields.iter().flatten().copied())
                .collect(),
        }
    }
}

/// What the form declaration recorded for one form type
#[derive(Debug, Clone, PartialEq)]
pub struct FormDescriptor {
    pub layout: FormLayoutConfig,
}

/// What a field declaration recorded for one property
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub config: FieldConfig,
    /// Built-in rules attached at declaration time; empty when the kind has
    /// none or `default_constraints` was false
    pub rules: Vec<Rule>,
}

impl FieldDescriptor {
    /// Label used in validation messages, falling back to the field name
    pub fn label(&self) -> &str {
        self.config
            .common()
            .and_then(|c| c.label.as_deref())
            .unwrap_or(self.name)
    }
}

/// Registry of form and field descriptors
#[derive(Default)]
pub struct MetadataRegistry {
    forms: RwLock<HashMap<TypeId, FormDescriptor>>,
    fields: RwLock<HashMap<TypeId, Vec<FieldDescriptor>>>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the layout descriptor, overwriting any previous one.
    pub fn record_form<F: Form>(&self, descriptor: FormDescriptor) {
        debug!("recording form layout for {}", F::form_name());
        self.forms
            .write()
            .expect("poisoned form registry lock")
            .insert(TypeId::of::<F>(), descriptor);
    }

    pub fn lookup_form<F: Form>(&self) -> Option<FormDescriptor> {
        self.forms
            .read()
            .expect("poisoned form registry lock")
            .get(&TypeId::of::<F>())
            .cloned()
    }

    /// Record a field descriptor. Upserts by field name: re-running the same
    /// declaration (hot reload) replaces the entry in place instead of
    /// appending a duplicate, preserving first-registration order.
    pub fn record_field<F: Form>(&self, descriptor: FieldDescriptor) {
        let mut fields = self.fields.write().expect("poisoned field registry lock");
        let list = fields.entry(TypeId::of::<F>()).or_default();

        match list.iter_mut().find(|d| d.name == descriptor.name) {
            Some(existing) => {
                warn!(
                    "field `{}` on {} declared twice, replacing previous descriptor",
                    descriptor.name,
                    F::form_name()
                );
                *existing = descriptor;
            }
            None => {
                debug!("recording field `{}` on {}", descriptor.name, F::form_name());
                list.push(descriptor);
            }
        }
    }

    pub fn lookup_fields<F: Form>(&self) -> Option<Vec<FieldDescriptor>> {
        self.fields
            .read()
            .expect("poisoned field registry lock")
            .get(&TypeId::of::<F>())
            .cloned()
    }
}

static REGISTRY: OnceCell<MetadataRegistry> = OnceCell::new();

/// Initialize the process-wide registry. Repeated calls (module re-init,
/// hot reload) return the existing instance and never discard registered
/// descriptors.
pub fn setup_metadata_registry() -> &'static MetadataRegistry {
    REGISTRY.get_or_init(MetadataRegistry::new)
}

/// The process-wide registry, created on first access.
pub fn metadata_registry() -> &'static MetadataRegistry {
    setup_metadata_registry()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CommonOptions, TextOptions};

    struct TestForm;
    impl Form for TestForm {}

    struct OtherForm;
    impl Form for OtherForm {}

    fn text_descriptor(name: &'static str, label: &str) -> FieldDescriptor {
        let options = TextOptions {
            common: CommonOptions {
                label: Some(label.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        FieldDescriptor {
            name,
            kind: FieldKind::Text,
            config: FieldConfig::Text(options.resolve()),
            rules: Vec::new(),
        }
    }

    #[test]
    fn test_lookup_absent_is_none() {
        let registry = MetadataRegistry::new();
        assert!(registry.lookup_form::<TestForm>().is_none());
        assert!(registry.lookup_fields::<TestForm>().is_none());
    }

    #[test]
    fn test_fields_keep_registration_order() {
        let registry = MetadataRegistry::new();
        registry.record_field::<TestForm>(text_descriptor("b", "B"));
        registry.record_field::<TestForm>(text_descriptor("a", "A"));

        let fields = registry.lookup_fields::<TestForm>().unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_record_field_upserts_by_name() {
        let registry = MetadataRegistry::new();
        registry.record_field::<TestForm>(text_descriptor("a", "first"));
        registry.record_field::<TestForm>(text_descriptor("b", "B"));
        registry.record_field::<TestForm>(text_descriptor("a", "second"));

        let fields = registry.lookup_fields::<TestForm>().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "a");
        assert_eq!(fields[0].label(), "second");
        assert_eq!(fields[1].name, "b");
    }

    #[test]
    fn test_forms_keyed_by_type_identity() {
        let registry = MetadataRegistry::new();
        registry.record_form::<TestForm>(FormDescriptor {
            layout: FormLayoutConfig::Column(vec!["a"]),
        });

        assert!(registry.lookup_form::<TestForm>().is_some());
        assert!(registry.lookup_form::<OtherForm>().is_none());
    }

    #[test]
    fn test_record_form_overwrites() {
        let registry = MetadataRegistry::new();
        registry.record_form::<TestForm>(FormDescriptor {
            layout: FormLayoutConfig::Column(vec!["a"]),
        });
        registry.record_form::<TestForm>(FormDescriptor {
            layout: FormLayoutConfig::Rows(vec![vec!["a"]]),
        });

        let descriptor = registry.lookup_form::<TestForm>().unwrap();
        assert_eq!(descriptor.layout.kind(), FormLayout::Rows);
    }

    #[test]
    fn test_layout_field_names_in_order() {
        let layout = FormLayoutConfig::Groups(vec![
            (
                "main".to_string(),
                FormGroup {
                    title: Some("Main".to_string()),
                    text: None,
                    fields: vec![vec!["a", "b"], vec!["c"]],
                },
            ),
            (
                "extra".to_string(),
                FormGroup {
                    title: None,
                    text: None,
                    fields: vec![vec!["d"]],
                },
            ),
        ]);
        assert_eq!(layout.field_names(), vec!["a", "b", "c", "d"]);
        assert_eq!(layout.kind(), FormLayout::Groups);
    }

    #[test]
    fn test_global_registry_init_is_idempotent() {
        struct GlobalForm;
        impl Form for GlobalForm {}

        let first = setup_metadata_registry();
        first.record_field::<GlobalForm>(text_descriptor("kept", "Kept"));

        let second = setup_metadata_registry();
        let fields = second.lookup_fields::<GlobalForm>().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "kept");
    }
}
