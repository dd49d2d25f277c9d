use thiserror::Error;

/// Errors surfaced by address formatting operations.
///
/// Every variant is terminal: nothing in this crate catches or retries
/// internally. Callers decide how to recover (prompt for a different
/// locale, treat an unknown field as a programming error, and so on).
#[derive(Debug, Error)]
pub enum AddressError {
    /// The locale identifier has no corresponding record at all.
    #[error("locale '{locale}' is not supported")]
    LocaleNotSupported {
        /// The identifier that was looked up.
        locale: String,
    },

    /// A record exists for the locale but its data could not be interpreted.
    #[error("locale '{locale}' could not be parsed: {message}")]
    LocaleParse {
        /// The identifier whose record failed to parse.
        locale: String,
        /// What went wrong, straight from the parser.
        message: String,
    },

    /// The active locale record has no layout template to format against.
    #[error("locale is missing an address format")]
    MissingFormat,

    /// The field name is outside the fixed set of known address fields.
    #[error("unknown address field '{name}'")]
    UnknownField {
        /// The rejected field name.
        name: String,
    },
}
