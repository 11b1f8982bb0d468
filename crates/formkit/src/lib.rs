//! Declarative form metadata and validation core.
//!
//! A form is a plain marker type implementing [`Form`]. A bootstrap step
//! declares its layout and fields once into a [`MetadataRegistry`]; from
//! that metadata a [`FormModel`] derives reactive data, error and validity
//! state for the rendering layer, validating on demand through per-field
//! rule sets.
//!
//! ```rust,ignore
//! use formkit::{declare, CommonOptions, FormLayoutConfig, FormModel, TextOptions};
//!
//! struct Login;
//! impl formkit::Form for Login {}
//!
//! let registry = formkit::metadata_registry();
//! declare::form::<Login>(registry, FormLayoutConfig::Column(vec!["username"]));
//! declare::text_field::<Login>(registry, "username", TextOptions {
//!     common: CommonOptions { required: Some(true), ..Default::default() },
//!     ..Default::default()
//! });
//!
//! let model = FormModel::<Login>::new(registry)?;
//! ```

pub mod catalog;
pub mod config;
pub mod constraints;
pub mod declare;
pub mod error;
pub mod helpers;
pub mod metadata;
pub mod model;
pub mod translator;
pub mod validation;

pub use catalog::{
    default_value_for, FieldKind, MultiSelectSubtype, NumberSubtype, SelectSubtype, TextSubtype,
    ToggleSubtype,
};
pub use config::{
    ColorOptions, CommonConfig, CommonOptions, DateOptions, DateTimeOptions, Disabled, FieldConfig,
    FileListOptions, FileOptions, InfoConfig, MultiSelectOptions, NumberOptions, SelectOption,
    SelectOptions, TextOptions, TimeOptions, ToggleOptions,
};
pub use constraints::{is_valid_date_string, is_valid_hex_color, is_valid_time_string};
pub use error::FormError;
pub use helpers::is_field_disabled;
pub use metadata::{
    metadata_registry, setup_metadata_registry, FieldDescriptor, Form, FormDescriptor, FormGroup,
    FormLayout, FormLayoutConfig, MetadataRegistry,
};
pub use model::{FieldInfo, FormModel, ERROR_SEPARATOR};
pub use translator::{set_translator, translate};
pub use validation::{Finding, Rule, RuleSet};
