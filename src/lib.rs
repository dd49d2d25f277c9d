//! Locale-aware street address formatting.
//!
//! Applications that collect structured address data (recipient,
//! organization, street, city, region, postal code, country) rarely
//! present it the same way in every country: field order, line breaks,
//! and postal-code placement all follow national conventions. This
//! crate renders an address according to a per-locale layout template.
//!
//! Layout templates are literal text interleaved with `%`-prefixed
//! single-character placeholders (`%N` recipient, `%A` street address,
//! `%Z` postal code, ...) and the reserved `%n` line-break token — the
//! convention used by Google's libaddressinput data, which the bundled
//! locale layouts come from. Fields left empty are elided together with
//! the blank lines they would produce.
//!
//! # Architecture
//!
//! - `fields`: compiled-in registry mapping placeholder codes to fields
//! - `address`: the mutable field values for one address being composed
//! - `locale`: the per-locale record (layout template plus metadata)
//! - `repository`: locale record lookup (in-memory table, JSON files on disk)
//! - `format`: the pure template-substitution engine
//! - `formatter`: the stateful façade combining all of the above
//! - `error`: the error taxonomy
//!
//! # Example
//!
//! ```
//! use address_format::AddressFormatter;
//!
//! let mut formatter = AddressFormatter::with_default_locales();
//! formatter.set_locale("DE")?;
//!
//! formatter.set_attribute("STREET_ADDRESS", "Schulstrasse 4")?;
//! formatter.set_attribute("POSTAL_CODE", "32547")?;
//! formatter.set_attribute("LOCALITY", "Oyenhausen")?;
//!
//! assert_eq!(
//!     formatter.format_address(false)?,
//!     "Schulstrasse 4\n32547 Oyenhausen"
//! );
//! # Ok::<(), address_format::AddressError>(())
//! ```

pub mod address;
pub mod error;
pub mod fields;
pub mod format;
pub mod formatter;
pub mod locale;
pub mod repository;

pub use address::AddressRecord;
pub use error::AddressError;
pub use fields::{AddressField, FIELD_CODES};
pub use format::{format_address, valid_address_pieces};
pub use formatter::AddressFormatter;
pub use locale::LocaleRecord;
pub use repository::{DirRepository, LocaleRepository, MemoryRepository, DEFAULT_LOCALES};
