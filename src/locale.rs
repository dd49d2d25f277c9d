//! Locale record data model.
//!
//! A locale record is one country's address-layout data. On the wire it
//! is a flat JSON object whose `fmt` key holds the layout template;
//! every other key (locale name, postal-code hints, ...) is opaque
//! metadata carried along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AddressError;

/// One locale's address-layout data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleRecord {
    /// Locale identifier, typically a two-letter country code.
    #[serde(skip)]
    locale: String,

    /// Layout template. Absent for locales whose record carries metadata
    /// but no printable address format.
    #[serde(rename = "fmt", default, skip_serializing_if = "Option::is_none")]
    template: Option<String>,

    /// Everything else in the record.
    #[serde(flatten)]
    metadata: Map<String, Value>,
}

impl LocaleRecord {
    /// Create a record with a layout template and no metadata.
    pub fn new(locale: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            template: Some(template.into()),
            metadata: Map::new(),
        }
    }

    /// Create a record with metadata capacity but no layout template.
    ///
    /// Formatting against such a record fails with `MissingFormat`, which
    /// is distinct from the locale being unsupported outright.
    pub fn without_template(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            template: None,
            metadata: Map::new(),
        }
    }

    /// Parse a JSON locale document.
    ///
    /// # Returns
    /// * `Ok(LocaleRecord)` for any JSON object (`fmt` optional)
    /// * `Err(AddressError::LocaleParse)` when the document is not a
    ///   well-formed JSON object
    pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self, AddressError> {
        let locale = locale.into();
        let mut record: LocaleRecord =
            serde_json::from_str(json).map_err(|e| AddressError::LocaleParse {
                locale: locale.clone(),
                message: e.to_string(),
            })?;
        record.locale = locale;
        Ok(record)
    }

    /// The locale identifier this record belongs to.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The layout template, if the record has one.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Opaque metadata lookup (any record key other than `fmt`).
    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Attach a metadata entry, builder style.
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constructor Tests ====================

    #[test]
    fn test_new_has_template() {
        let record = LocaleRecord::new("GB", "%N%n%O%n%A%n%C%n%Z");
        assert_eq!(record.locale(), "GB");
        assert_eq!(record.template(), Some("%N%n%O%n%A%n%C%n%Z"));
    }

    #[test]
    fn test_without_template() {
        let record = LocaleRecord::without_template("XK");
        assert_eq!(record.locale(), "XK");
        assert_eq!(record.template(), None);
    }

    // ==================== JSON Parsing Tests ====================

    #[test]
    fn test_from_json_with_fmt_and_metadata() {
        let json = r#"{"fmt": "%N%n%O%n%A%n%Z %C", "name": "GERMANY", "zip": "\\d{5}"}"#;
        let record = LocaleRecord::from_json("DE", json).expect("valid document");

        assert_eq!(record.locale(), "DE");
        assert_eq!(record.template(), Some("%N%n%O%n%A%n%Z %C"));
        assert_eq!(
            record.metadata("name").and_then(Value::as_str),
            Some("GERMANY")
        );
        // fmt is the template, not metadata
        assert!(record.metadata("fmt").is_none());
    }

    #[test]
    fn test_from_json_without_fmt() {
        let json = r#"{"name": "SOMEWHERE"}"#;
        let record = LocaleRecord::from_json("XX", json).expect("valid document");
        assert_eq!(record.template(), None);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = LocaleRecord::from_json("DE", "{not json").unwrap_err();
        assert!(matches!(
            err,
            AddressError::LocaleParse { locale, .. } if locale == "DE"
        ));
    }

    #[test]
    fn test_from_json_non_object() {
        // An array or scalar is not a locale record shape.
        assert!(LocaleRecord::from_json("DE", "[1, 2, 3]").is_err());
        assert!(LocaleRecord::from_json("DE", "\"just a string\"").is_err());
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_with_metadata_builder() {
        let record = LocaleRecord::new("JP", "〒%Z%n%S%n%A%n%O%n%N")
            .with_metadata("name", Value::from("JAPAN"));
        assert_eq!(
            record.metadata("name").and_then(Value::as_str),
            Some("JAPAN")
        );
    }

    #[test]
    fn test_metadata_missing_key() {
        let record = LocaleRecord::new("GB", "%N");
        assert!(record.metadata("nope").is_none());
    }
}
