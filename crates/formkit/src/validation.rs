//! Validation engine.
//!
//! A [`Rule`] is one predicate over a JSON value plus a stable error code and
//! the parameters needed to render its message. [`run`] evaluates rule sets
//! against a plain data object and returns one [`Finding`] per property with
//! at least one failed rule; the engine never mutates state, the form model
//! decides what to do with the findings.

use std::fmt;
use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::constraints;
use crate::translator;

/// One validation predicate with its error code and message parameters
#[derive(Clone)]
pub struct Rule {
    code: &'static str,
    params: Map<String, Value>,
    check: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("code", &self.code)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Rule {
    pub fn new(
        code: &'static str,
        check: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            params: Map::new(),
            check: Arc::new(check),
        }
    }

    pub fn with_param(mut self, key: &str, value: Value) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn passes(&self, value: &Value) -> bool {
        (self.check)(value)
    }

    /// Render the failure message, interpolating label and offending value
    /// next to the rule's own parameters.
    pub fn render_message(&self, label: &str, value: &Value) -> String {
        let mut params = self.params.clone();
        params.insert("label".to_string(), json!(label));
        params.insert("value".to_string(), value.clone());
        translator::translate(self.code, &params)
    }
}

/// Rules of one property, with the label used in messages
pub struct RuleSet<'a> {
    pub property: &'a str,
    pub label: &'a str,
    pub rules: &'a [Rule],
}

/// All rule failures of one property
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub property: String,
    /// rule code -> rendered message, in rule order
    pub failures: Vec<(&'static str, String)>,
}

impl Finding {
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|(_, message)| message.as_str())
    }
}

/// Evaluate every rule set against the data object. A property missing from
/// the data validates as `null`.
pub fn run(rule_sets: &[RuleSet<'_>], data: &Map<String, Value>) -> Vec<Finding> {
    let mut findings = Vec::new();

    for set in rule_sets {
        let value = data.get(set.property).unwrap_or(&Value::Null);

        let failures: Vec<(&'static str, String)> = set
            .rules
            .iter()
            .filter(|rule| !rule.passes(value))
            .map(|rule| (rule.code(), rule.render_message(set.label, value)))
            .collect();

        if !failures.is_empty() {
            findings.push(Finding {
                property: set.property.to_string(),
                failures,
            });
        }
    }

    findings
}

// ============================================================================
// Built-in rules
// ============================================================================

pub fn is_string() -> Rule {
    Rule::new("errors.types.string", |v| v.is_string())
}

pub fn is_number() -> Rule {
    Rule::new("errors.types.number", |v| v.is_number())
}

pub fn is_boolean() -> Rule {
    Rule::new("errors.types.boolean", |v| v.is_boolean())
}

/// Fails on `null` and on the empty string
pub fn not_empty() -> Rule {
    Rule::new("errors.generic.notEmpty", |v| match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

pub fn min(bound: f64) -> Rule {
    Rule::new("errors.numbers.min", move |v| {
        v.as_f64().map(|n| n >= bound).unwrap_or(false)
    })
    .with_param("min", json!(bound))
}

pub fn max(bound: f64) -> Rule {
    Rule::new("errors.numbers.max", move |v| {
        v.as_f64().map(|n| n <= bound).unwrap_or(false)
    })
    .with_param("max", json!(bound))
}

pub fn one_of(allowed: Vec<String>) -> Rule {
    let rendered = allowed.join(", ");
    Rule::new("errors.generic.oneOf", move |v| {
        v.as_str().map(|s| allowed.iter().any(|a| a == s)).unwrap_or(false)
    })
    .with_param("allowed", json!(rendered))
}

pub fn is_string_array() -> Rule {
    Rule::new("errors.types.stringArray", |v| {
        v.as_array()
            .map(|items| items.iter().all(Value::is_string))
            .unwrap_or(false)
    })
}

pub fn each_one_of(allowed: Vec<String>) -> Rule {
    let rendered = allowed.join(", ");
    Rule::new("errors.generic.eachOneOf", move |v| {
        v.as_array()
            .map(|items| {
                items
                    .iter()
                    .all(|item| item.as_str().map(|s| allowed.iter().any(|a| a == s)).unwrap_or(false))
            })
            .unwrap_or(false)
    })
    .with_param("allowed", json!(rendered))
}

pub fn date_string() -> Rule {
    Rule::new("errors.strings.date", |v| {
        v.as_str().map(constraints::is_valid_date_string).unwrap_or(false)
    })
}

pub fn time_string() -> Rule {
    Rule::new("errors.strings.time", |v| {
        v.as_str().map(constraints::is_valid_time_string).unwrap_or(false)
    })
}

pub fn hex_color() -> Rule {
    Rule::new("errors.strings.hexColor", |v| {
        v.as_str().map(constraints::is_valid_hex_color).unwrap_or(false)
    })
}
