//! Reactive form model.
//!
//! [`FormModel`] binds one registered form type to live state: a data cell
//! seeded with resolved defaults, an error cell with one entry per non-Info
//! field, and a derived validity memo. The rendering layer writes user input
//! into the data cell and reads the other two; validation runs on demand,
//! never continuously.

use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;

use leptos::prelude::*;
use log::debug;
use serde_json::{Map, Value};

use crate::catalog::{default_value_for, FieldKind};
use crate::config::FieldConfig;
use crate::error::FormError;
use crate::metadata::{FieldDescriptor, Form, FormLayoutConfig, MetadataRegistry};
use crate::validation::{self, Finding, RuleSet};

/// Separator between several failure messages on one field
pub const ERROR_SEPARATOR: &str = "\n";

/// Read-only projection of one registered field
pub struct FieldInfo<'a> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub config: &'a FieldConfig,
}

/// Live, validated form state for the form type `F`
pub struct FormModel<F: Form> {
    fields: Vec<FieldDescriptor>,
    layout: FormLayoutConfig,
    data: RwSignal<Map<String, Value>>,
    errors: RwSignal<HashMap<String, Option<String>>>,
    valid: Memo<bool>,
    _form: PhantomData<F>,
}

impl<F: Form> Clone for FormModel<F> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            layout: self.layout.clone(),
            data: self.data,
            errors: self.errors,
            valid: self.valid,
            _form: PhantomData,
        }
    }
}

impl<F: Form> std::fmt::Debug for FormModel<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormModel")
            .field("fields", &self.fields)
            .field("layout", &self.layout)
            .field("data", &self.data)
            .field("errors", &self.errors)
            .field("valid", &self.valid)
            .finish()
    }
}

impl<F: Form> FormModel<F> {
    /// Build the model from the registered metadata of `F`.
    ///
    /// Fails structurally when `F` was never declared as a form, has no
    /// registered fields, or its layout references an undeclared field.
    pub fn new(registry: &MetadataRegistry) -> Result<Self, FormError> {
        let descriptor = registry
            .lookup_form::<F>()
            .ok_or(FormError::MissingFormDeclaration(F::form_name()))?;

        let fields = registry
            .lookup_fields::<F>()
            .filter(|fields| !fields.is_empty())
            .ok_or(FormError::NoRegisteredFields(F::form_name()))?;

        let known: HashSet<&str> = fields.iter().map(|f| f.name).collect();
        for name in descriptor.layout.field_names() {
            if !known.contains(name) {
                return Err(FormError::UnknownLayoutField {
                    form: F::form_name(),
                    field: name,
                });
            }
        }

        let mut data = Map::new();
        let mut errors = HashMap::new();
        for field in fields.iter().filter(|f| f.kind != FieldKind::Info) {
            let value = field
                .config
                .default_value()
                .cloned()
                .unwrap_or_else(|| default_value_for(field.kind));
            data.insert(field.name.to_string(), value);
            errors.insert(field.name.to_string(), None);
        }

        debug!(
            "form model for {} ready with {} fields",
            F::form_name(),
            fields.len()
        );

        let errors = RwSignal::new(errors);
        let valid = Memo::new(move |_| errors.with(|e| e.values().all(|err| err.is_none())));

        Ok(Self {
            fields,
            layout: descriptor.layout,
            data: RwSignal::new(data),
            errors,
            valid,
            _form: PhantomData,
        })
    }

    /// Registered fields in declaration order, Info fields included
    pub fn fields(&self) -> Vec<FieldInfo<'_>> {
        self.fields
            .iter()
            .map(|f| FieldInfo {
                name: f.name,
                kind: f.kind,
                config: &f.config,
            })
            .collect()
    }

    pub fn layout(&self) -> &FormLayoutConfig {
        &self.layout
    }

    /// Data cell handle; the rendering layer writes user input here
    pub fn data(&self) -> RwSignal<Map<String, Value>> {
        self.data
    }

    /// Error cell handle, read-only by convention
    pub fn errors(&self) -> RwSignal<HashMap<String, Option<String>>> {
        self.errors
    }

    /// Derived validity: true iff no error entry holds a message
    pub fn valid(&self) -> Memo<bool> {
        self.valid
    }

    /// Current value of one field, `None` for Info or unknown names
    pub fn value(&self, name: &str) -> Option<Value> {
        self.data.with(|d| d.get(name).cloned())
    }

    /// Write one field's value into the data cell
    pub fn set_value(&self, name: &str, value: Value) {
        self.data.update(|d| {
            d.insert(name.to_string(), value);
        });
    }

    fn run_engine(&self) -> Vec<Finding> {
        let sets: Vec<RuleSet<'_>> = self
            .fields
            .iter()
            .filter(|f| f.kind != FieldKind::Info)
            .map(|f| RuleSet {
                property: f.name,
                label: f.label(),
                rules: &f.rules,
            })
            .collect();

        self.data.with(|data| validation::run(&sets, data))
    }

    /// Run the whole form through the validation engine and overwrite every
    /// field's error entry, clearing entries that became valid.
    pub fn validate_all(&self) -> Vec<Finding> {
        let findings = self.run_engine();

        self.errors.update(|errors| {
            for field in self.fields.iter().filter(|f| f.kind != FieldKind::Info) {
                let message = findings
                    .iter()
                    .find(|finding| finding.property == field.name)
                    .map(|finding| finding.messages().collect::<Vec<_>>().join(ERROR_SEPARATOR))
                    .filter(|joined| !joined.is_empty());
                errors.insert(field.name.to_string(), message);
            }
        });

        findings
    }

    /// Validate everything; true iff no finding was produced.
    pub fn validate(&self) -> bool {
        self.validate_all().is_empty()
    }

    /// Re-validate a single field. Returns false without mutating anything
    /// when `name` is not a tracked field. Only the targeted field's error
    /// entry is written, other entries stay as they are.
    pub fn validate_field(&self, name: &str) -> bool {
        if !self.errors.with(|e| e.contains_key(name)) {
            return false;
        }

        self.errors.update(|e| {
            e.insert(name.to_string(), None);
        });

        let findings = self.run_engine();
        let Some(finding) = findings.into_iter().find(|f| f.property == name) else {
            return true;
        };

        if finding.failures.is_empty() {
            return true;
        }

        let joined = finding.messages().collect::<Vec<_>>().join(ERROR_SEPARATOR);
        self.errors.update(|e| {
            e.insert(name.to_string(), Some(joined));
        });

        false
    }
}
