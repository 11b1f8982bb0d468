//! Structural errors.
//!
//! These signal programmer mistakes (missing declarations, broken layout
//! references) at construction time. User-input problems are never errors;
//! they land in the reactive error cell as display strings.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("`{0}` has no form declaration; register it with `declare::form`")]
    MissingFormDeclaration(&'static str),

    #[error("`{0}` has no registered fields")]
    NoRegisteredFields(&'static str),

    #[error("layout of `{form}` references unknown field `{field}`")]
    UnknownLayoutField {
        form: &'static str,
        field: &'static str,
    },
}
