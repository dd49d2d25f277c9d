//! Locale record storage and lookup.
//!
//! The formatting engine never touches storage directly: it consumes
//! [`LocaleRecord`]s that a repository produced. Swapping the backing
//! medium (in-memory table, JSON files on disk, something remote) is a
//! repository concern and invisible to the engine.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::AddressError;
use crate::locale::LocaleRecord;

/// Read-only source of locale records.
pub trait LocaleRepository {
    /// Fetch the record for a locale identifier.
    ///
    /// # Returns
    /// * `Ok(LocaleRecord)` for a supported locale
    /// * `Err(AddressError::LocaleNotSupported)` when no record exists
    /// * `Err(AddressError::LocaleParse)` when a record exists but its
    ///   data could not be interpreted
    fn lookup(&self, locale: &str) -> Result<LocaleRecord, AddressError>;
}

/// Compiled-in layout templates for common locales.
///
/// Layout strings follow the libaddressinput placeholder conventions.
pub const DEFAULT_LOCALES: &[(&str, &str)] = &[
    ("AT", "%O%n%N%n%A%n%Z %C"),
    ("AU", "%O%n%N%n%A%n%C %S %Z"),
    ("BE", "%O%n%N%n%A%n%Z %C"),
    ("BR", "%O%n%N%n%A%n%D%n%C-%S%n%Z"),
    ("CA", "%N%n%O%n%A%n%C %S %Z"),
    ("CH", "%O%n%N%n%A%n%Z %C"),
    ("CN", "%Z%n%S%C%D%n%A%n%O%n%N"),
    ("DE", "%N%n%O%n%A%n%Z %C"),
    ("DK", "%N%n%O%n%A%n%Z %C"),
    ("ES", "%N%n%O%n%A%n%Z %C %S"),
    ("FI", "%N%n%O%n%A%n%Z %C"),
    ("FR", "%O%n%N%n%A%n%Z %C"),
    ("GB", "%N%n%O%n%A%n%C%n%Z"),
    ("IE", "%N%n%O%n%A%n%D%n%C%n%S%n%Z"),
    ("IN", "%N%n%O%n%A%n%C %Z%n%S"),
    ("IT", "%N%n%O%n%A%n%Z %C %S"),
    ("JP", "〒%Z%n%S%n%A%n%O%n%N"),
    ("KR", "%S %C%D%n%A%n%O%n%N%n%Z"),
    ("MX", "%N%n%O%n%A%n%D%n%Z %C, %S"),
    ("NL", "%O%n%N%n%A%n%Z %C"),
    ("NO", "%N%n%O%n%A%n%Z %C"),
    ("NZ", "%N%n%O%n%A%n%D%n%C %Z"),
    ("PL", "%N%n%O%n%A%n%Z %C"),
    ("PT", "%N%n%O%n%A%n%Z %C"),
    ("RU", "%N%n%O%n%A%n%C%n%S%n%Z"),
    ("SE", "%O%n%N%n%A%n%Z %C"),
    ("US", "%N%n%O%n%A%n%C, %S %Z"),
];

/// In-memory repository backed by a hash map.
///
/// Construction is the mutation window; once lookups start the
/// repository is effectively read-only and freely shareable.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    records: HashMap<String, LocaleRecord>,
}

impl MemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository pre-populated with [`DEFAULT_LOCALES`].
    pub fn with_default_locales() -> Self {
        let mut repository = Self::new();
        for (locale, template) in DEFAULT_LOCALES {
            repository.insert(LocaleRecord::new(*locale, *template));
        }
        repository
    }

    /// Add or replace a record, keyed by its locale identifier.
    pub fn insert(&mut self, record: LocaleRecord) {
        self.records.insert(record.locale().to_string(), record);
    }

    /// Whether a record exists for the identifier.
    pub fn is_supported(&self, locale: &str) -> bool {
        self.records.contains_key(locale)
    }

    /// All registered locale identifiers, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.records.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}

impl LocaleRepository for MemoryRepository {
    fn lookup(&self, locale: &str) -> Result<LocaleRecord, AddressError> {
        self.records
            .get(locale)
            .cloned()
            .ok_or_else(|| AddressError::LocaleNotSupported {
                locale: locale.to_string(),
            })
    }
}

/// Repository reading one `<locale>.json` document per locale from a
/// directory — the layout locale data dumps ship in.
#[derive(Debug, Clone)]
pub struct DirRepository {
    dir: PathBuf,
}

impl DirRepository {
    /// Create a repository over a directory of `<locale>.json` files.
    ///
    /// The directory is not scanned up front; each lookup reads one
    /// file on demand.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Locale identifiers double as file names, so anything beyond a
    /// short alphanumeric token is rejected before touching the
    /// filesystem.
    fn is_valid_locale_id(locale: &str) -> bool {
        !locale.is_empty()
            && locale.len() <= 8
            && locale.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

impl LocaleRepository for DirRepository {
    fn lookup(&self, locale: &str) -> Result<LocaleRecord, AddressError> {
        if !Self::is_valid_locale_id(locale) {
            return Err(AddressError::LocaleNotSupported {
                locale: locale.to_string(),
            });
        }

        let path = self.dir.join(format!("{}.json", locale));
        debug!("Loading locale {} from {}", locale, path.display());

        if !path.exists() {
            return Err(AddressError::LocaleNotSupported {
                locale: locale.to_string(),
            });
        }

        let json = std::fs::read_to_string(&path).map_err(|e| {
            warn!("Failed to read locale file {}: {}", path.display(), e);
            AddressError::LocaleParse {
                locale: locale.to_string(),
                message: e.to_string(),
            }
        })?;

        match LocaleRecord::from_json(locale, &json) {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!("Failed to parse locale file {}: {}", path.display(), e);
                Err(e)
            }
        }
    }
}
