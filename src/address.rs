//! The mutable set of field values for one address being composed.

use std::collections::HashMap;
use std::ops::Index;

use crate::error::AddressError;
use crate::fields::AddressField;

/// Caller-populated field values, keyed by canonical field.
///
/// Every known field defaults to the empty string; unknown field names
/// are rejected rather than silently stored. The record is plain owned
/// state — each logical address being composed should own its own
/// instance.
#[derive(Debug, Clone, Default)]
pub struct AddressRecord {
    values: HashMap<AddressField, String>,
}

impl AddressRecord {
    /// Create a record with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field value by canonical name, overwriting any previous
    /// value.
    ///
    /// # Returns
    /// * `Ok(&str)` — the stored value
    /// * `Err(AddressError::UnknownField)` if the name is outside the
    ///   known field set
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<&str, AddressError> {
        let field = AddressField::from_name(name)?;
        Ok(self.set_field(field, value))
    }

    /// Current value for a canonical name.
    ///
    /// Fields that were never set read as the empty string. Unknown
    /// names fail with `UnknownField` regardless of record state.
    pub fn get(&self, name: &str) -> Result<&str, AddressError> {
        let field = AddressField::from_name(name)?;
        Ok(self.get_field(field))
    }

    /// Typed equivalent of [`set`](Self::set); cannot fail.
    pub fn set_field(&mut self, field: AddressField, value: impl Into<String>) -> &str {
        self.values.insert(field, value.into());
        self.values[&field].as_str()
    }

    /// Typed equivalent of [`get`](Self::get).
    pub fn get_field(&self, field: AddressField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Reset every known field to the empty string.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Whether `name` is a known field.
    ///
    /// Existence is about the key space, not about whether a value has
    /// been stored: known-but-empty fields still report `true`.
    pub fn contains(&self, name: &str) -> bool {
        AddressField::from_name(name).is_ok()
    }

    /// Set a known field back to the empty string.
    ///
    /// Unknown names are ignored — removal of a key that was never
    /// addressable is a no-op, not an error.
    pub fn unset(&mut self, name: &str) {
        if let Ok(field) = AddressField::from_name(name) {
            self.values.remove(&field);
        }
    }
}

/// Bracket-read sugar over [`AddressRecord::get_field`].
///
/// Indexing by the typed field cannot name an unknown field, so the
/// `UnknownField` contract of the string API is preserved by
/// construction.
impl Index<AddressField> for AddressRecord {
    type Output = str;

    fn index(&self, field: AddressField) -> &str {
        self.get_field(field)
    }
}
