//! The stateful façade tying repository, address record, and engine
//! together.

use std::ops::Index;

use tracing::debug;

use crate::address::AddressRecord;
use crate::error::AddressError;
use crate::fields::AddressField;
use crate::format;
use crate::locale::LocaleRecord;
use crate::repository::{LocaleRepository, MemoryRepository};

/// Formats street addresses according to per-locale layout conventions.
///
/// The formatter owns a locale repository, the currently active locale
/// record, and the address fields being composed. Each concurrent
/// composition should own its own formatter; the repository behind it
/// may be shared freely.
///
/// # Example
///
/// ```
/// use address_format::AddressFormatter;
///
/// let mut formatter = AddressFormatter::with_default_locales();
/// formatter.set_locale("GB")?;
///
/// formatter.set_attribute("RECIPIENT", "Joe Bloggs")?;
/// formatter.set_attribute("STREET_ADDRESS", "173-185 Greenwich High Road")?;
/// formatter.set_attribute("LOCALITY", "Greenwich")?;
/// formatter.set_attribute("POSTAL_CODE", "SE10 8JA")?;
///
/// assert_eq!(
///     formatter.format_address(false)?,
///     "Joe Bloggs\n173-185 Greenwich High Road\nGreenwich\nSE10 8JA"
/// );
/// # Ok::<(), address_format::AddressError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AddressFormatter<R = MemoryRepository> {
    repository: R,
    locale: Option<LocaleRecord>,
    address: AddressRecord,
}

impl AddressFormatter<MemoryRepository> {
    /// A formatter backed by the compiled-in locale layouts.
    pub fn with_default_locales() -> Self {
        Self::new(MemoryRepository::with_default_locales())
    }
}

impl<R: LocaleRepository> AddressFormatter<R> {
    /// Create a formatter over a locale repository, with no active
    /// locale and every address field empty.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            locale: None,
            address: AddressRecord::new(),
        }
    }

    /// Select the active locale by identifier.
    ///
    /// # Returns
    /// * `Ok(())` once the locale's record is loaded
    /// * `Err(AddressError::LocaleNotSupported)` for an unknown identifier
    /// * `Err(AddressError::LocaleParse)` when the record exists but its
    ///   data could not be interpreted
    pub fn set_locale(&mut self, locale: &str) -> Result<(), AddressError> {
        let record = self.repository.lookup(locale)?;
        debug!("Active locale set to {}", record.locale());
        self.locale = Some(record);
        Ok(())
    }

    /// The active locale record, if one has been selected.
    pub fn locale(&self) -> Option<&LocaleRecord> {
        self.locale.as_ref()
    }

    /// Store one address field by canonical name; returns the stored
    /// value. Unknown names fail with `UnknownField`.
    pub fn set_attribute(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&str, AddressError> {
        self.address.set(name, value)
    }

    /// Current value of one address field by canonical name.
    pub fn get_attribute(&self, name: &str) -> Result<&str, AddressError> {
        self.address.get(name)
    }

    /// Reset every address field to the empty string.
    pub fn clear_attributes(&mut self) {
        self.address.clear();
    }

    /// The address fields being composed.
    pub fn address(&self) -> &AddressRecord {
        &self.address
    }

    /// Mutable access to the address fields, for the typed API.
    pub fn address_mut(&mut self) -> &mut AddressRecord {
        &mut self.address
    }

    /// Render the address with the active locale's layout.
    ///
    /// With no active locale the formatter behaves like a locale whose
    /// record lacks a layout template: `MissingFormat`.
    pub fn format_address(&self, html: bool) -> Result<String, AddressError> {
        let record = self.locale.as_ref().ok_or(AddressError::MissingFormat)?;
        format::format_address(record, &self.address, html)
    }

    /// The fields the active locale's layout uses, in writing order.
    pub fn valid_address_pieces(&self) -> Result<Vec<AddressField>, AddressError> {
        let record = self.locale.as_ref().ok_or(AddressError::MissingFormat)?;
        format::valid_address_pieces(record)
    }
}

/// Bracket-read sugar over the underlying address record.
impl<R> Index<AddressField> for AddressFormatter<R> {
    type Output = str;

    fn index(&self, field: AddressField) -> &str {
        &self.address[field]
    }
}
