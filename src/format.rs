//! The formatting engine: template substitution and text cleanup.
//!
//! Everything here is a pure function of its inputs. Layout templates
//! are literal text interleaved with `%`-prefixed placeholders: one
//! single-character field code per placeholder, plus the reserved `%n`
//! line-break token. Placeholders that are neither pass through as
//! literal text.

use std::sync::OnceLock;

use regex::Regex;

use crate::address::AddressRecord;
use crate::error::AddressError;
use crate::fields::{AddressField, FIELD_CODES};
use crate::locale::LocaleRecord;

// Regex for collapsing line-break token runs (cached for performance)
static BREAK_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

/// Render an address against a locale's layout template.
///
/// Fields the template references but the record leaves empty are
/// elided outright; blank lines that elision would produce are
/// collapsed, and a blank first or last line produces no output line.
///
/// # Arguments
/// * `record` - The locale whose layout to follow
/// * `address` - The field values to substitute
/// * `html` - Render HTML (entity-escaped, `<br>` line breaks) instead
///   of plain text
///
/// # Returns
/// The rendered address, or `AddressError::MissingFormat` when the
/// record has no layout template. Empty field values never fail.
pub fn format_address(
    record: &LocaleRecord,
    address: &AddressRecord,
    html: bool,
) -> Result<String, AddressError> {
    let template = record.template().ok_or(AddressError::MissingFormat)?;

    // Substitute every registered placeholder, in code-table order.
    // Literal substring replacement: codes are unique single characters,
    // so one pass per code cannot overlap with another.
    let mut formatted = template.to_string();
    for (code, field) in FIELD_CODES {
        let placeholder = format!("%{}", code);
        formatted = formatted.replace(&placeholder, address.get_field(*field));
    }

    // A field that resolved to empty leaves two break tokens back to
    // back; collapse each run to a single break.
    let break_run = BREAK_RUN_REGEX.get_or_init(|| Regex::new(r"(?:%n)+").unwrap());
    let formatted = break_run.replace_all(&formatted, "%n");

    // A blank first or last line produces no output line.
    let mut trimmed = formatted.as_ref();
    while let Some(rest) = trimmed.strip_prefix("%n") {
        trimmed = rest;
    }
    while let Some(rest) = trimmed.strip_suffix("%n") {
        trimmed = rest;
    }

    if html {
        // Escape before the break tokens become markup: `%n` is plain
        // ASCII and survives escaping, the `<br>` inserted afterwards
        // must not be escaped.
        Ok(escape_html(trimmed).replace("%n", "\n<br>"))
    } else {
        Ok(trimmed.replace("%n", "\n").trim().to_string())
    }
}

/// The fields a locale's layout actually uses, in writing order.
///
/// Useful for building data-entry forms that match the locale's
/// conventions. Duplicate placeholders yield duplicate entries; the
/// line-break token and unrecognized placeholders are skipped.
///
/// The result depends only on the template, never on any field values.
pub fn valid_address_pieces(record: &LocaleRecord) -> Result<Vec<AddressField>, AddressError> {
    let template = record.template().ok_or(AddressError::MissingFormat)?;

    let mut pieces = Vec::new();
    for segment in template.split('%') {
        let segment = segment.trim();
        // Only a segment that is exactly one field code counts; a code
        // followed by literal text (e.g. "C," in "%C, %S") does not.
        let mut chars = segment.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            if let Some(field) = AddressField::from_code(code) {
                pieces.push(field);
            }
        }
    }
    Ok(pieces)
}

/// Minimal HTML entity escaping covering the characters that can change
/// markup meaning: `&`, `<`, `>`, and both quote styles.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
