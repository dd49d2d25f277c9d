//! Address field registry: the fixed placeholder-code to field mapping.
//!
//! Layout templates reference fields through single-character codes
//! (`%N` for the recipient, `%Z` for the postal code, ...). The code
//! table follows the libaddressinput conventions the bundled locale
//! layouts are written in, and is compiled-in configuration: defined
//! here, immutable for the life of the process.

use std::fmt;

use crate::error::AddressError;

/// One named, independently settable piece of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    /// State, province, or other top-level administrative area.
    AdminArea,
    /// City or town.
    Locality,
    /// Person the mail is addressed to.
    Recipient,
    /// Company or institution name.
    Organization,
    /// First free-form street address line.
    AddressLine1,
    /// Second free-form street address line.
    AddressLine2,
    /// Neighbourhood or district below the locality level.
    DependentLocality,
    PostalCode,
    /// CEDEX-style routing code, used in a handful of locales.
    SortingCode,
    /// Single-line street address. Superseded by the numbered address
    /// lines, but still what the `%A` placeholder substitutes.
    StreetAddress,
    Country,
}

/// Placeholder-code to field mapping, in substitution order.
///
/// `n` is deliberately absent: `%n` is the reserved line-break token,
/// not a field reference.
pub const FIELD_CODES: &[(char, AddressField)] = &[
    ('S', AddressField::AdminArea),
    ('C', AddressField::Locality),
    ('N', AddressField::Recipient),
    ('O', AddressField::Organization),
    ('D', AddressField::DependentLocality),
    ('Z', AddressField::PostalCode),
    ('X', AddressField::SortingCode),
    ('A', AddressField::StreetAddress),
    ('R', AddressField::Country),
];

impl AddressField {
    /// Every known field, in canonical declaration order.
    pub const ALL: &'static [AddressField] = &[
        AddressField::AdminArea,
        AddressField::Locality,
        AddressField::Recipient,
        AddressField::Organization,
        AddressField::AddressLine1,
        AddressField::AddressLine2,
        AddressField::DependentLocality,
        AddressField::PostalCode,
        AddressField::SortingCode,
        AddressField::StreetAddress,
        AddressField::Country,
    ];

    /// Resolve a single-character placeholder code.
    ///
    /// Unknown codes (including the reserved `n`) resolve to `None`;
    /// the formatting engine leaves such placeholders alone rather than
    /// treating them as errors.
    pub fn from_code(code: char) -> Option<AddressField> {
        FIELD_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, field)| *field)
    }

    /// Resolve a canonical field name such as `POSTAL_CODE`.
    ///
    /// # Returns
    /// * `Ok(AddressField)` if the name is one of the known fields
    /// * `Err(AddressError::UnknownField)` otherwise
    pub fn from_name(name: &str) -> Result<AddressField, AddressError> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| AddressError::UnknownField {
                name: name.to_string(),
            })
    }

    /// The canonical field name (e.g. `"POSTAL_CODE"`).
    pub fn name(&self) -> &'static str {
        match self {
            AddressField::AdminArea => "ADMIN_AREA",
            AddressField::Locality => "LOCALITY",
            AddressField::Recipient => "RECIPIENT",
            AddressField::Organization => "ORGANIZATION",
            AddressField::AddressLine1 => "ADDRESS_LINE_1",
            AddressField::AddressLine2 => "ADDRESS_LINE_2",
            AddressField::DependentLocality => "DEPENDENT_LOCALITY",
            AddressField::PostalCode => "POSTAL_CODE",
            AddressField::SortingCode => "SORTING_CODE",
            AddressField::StreetAddress => "STREET_ADDRESS",
            AddressField::Country => "COUNTRY",
        }
    }

    /// The placeholder code, for fields that have one.
    ///
    /// The numbered address lines are input-only fields and return `None`.
    pub fn code(&self) -> Option<char> {
        FIELD_CODES
            .iter()
            .find(|(_, field)| field == self)
            .map(|(code, _)| *code)
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
