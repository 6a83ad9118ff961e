//! Wire records and request bodies for stores and items
//!
//! Request bodies are strict: unknown fields, missing fields and wrong
//! types are rejected at deserialization, and field limits are checked by
//! [`Validate`] before any SQL runs. Records convert from SQLite rows so
//! responses always reflect what storage actually holds.

mod errors;
mod item;
mod store;

pub use errors::{ValidationError, ValidationResult};
pub use item::{Item, ItemUpdate, NewItem, ITEM_NAME_MAX_CHARS};
pub use store::{NewStore, Store, STORE_NAME_MAX_CHARS};

/// Field-level checks a request body must pass before it reaches storage
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

/// Reject `value` if it is longer than `max` characters.
///
/// Length is counted in chars, the same unit SQLite's `length()` uses
/// for TEXT, so this check and the table CHECK constraints agree.
pub(crate) fn check_max_chars(field: &'static str, value: &str, max: usize) -> ValidationResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("Longer than maximum length {} (got {}).", max, len),
        ));
    }
    Ok(())
}
