//! Field extraction.
//!
//! This module turns the body of one section into a lookup table of raw values
//! and converts them into typed fields on request.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::warn;

use crate::{DuplicateKeys, FieldSchema, IniError, IniValue, ParseOptions};

/// Separates a key from its value on a field line.
const ASSIGN: char = '=';

/// The `key = value` pairs of one section, keyed by lowercased key.
///
/// Built by the parser for each section and handed to
/// [`IniSection::from_values`](crate::IniSection::from_values).
#[derive(Debug)]
pub struct SectionValues<'a> {
    section: &'a str,
    values: HashMap<String, &'a str>,
}

impl<'a> SectionValues<'a> {
    /// Extract the values of `section` from its body lines.
    ///
    /// The body must hold exactly one line per declared field, and every line
    /// must be a single `key = value` pair with both sides non-empty.
    ///
    /// # Errors
    ///
    /// Returns `IniError` if:
    /// - The line count differs from the field count
    /// - A line has zero or several `=`, or an empty key or value
    /// - A key repeats and duplicates are rejected
    pub fn extract(
        section: &'a str,
        body: &[&'a str],
        fields: &[FieldSchema],
        options: &ParseOptions,
    ) -> Result<Self, IniError> {
        if body.len() != fields.len() {
            return Err(IniError::field_count_mismatch(
                section,
                fields.len(),
                body.len(),
            ));
        }

        let mut values = HashMap::with_capacity(body.len());
        for &line in body {
            let (key, value) =
                split_field(line).ok_or_else(|| IniError::malformed_field(section, line))?;

            match values.entry(key.to_lowercase()) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(mut slot) => match options.duplicates() {
                    DuplicateKeys::LastWins => {
                        warn!(section, key = slot.key().as_str(), "duplicate key, last value wins");
                        slot.insert(value);
                    }
                    DuplicateKeys::Reject => {
                        return Err(IniError::duplicate_field(section, slot.key().as_str()));
                    }
                },
            }
        }

        Ok(Self { section, values })
    }

    /// The header name this section was matched under.
    pub fn section(&self) -> &str {
        self.section
    }

    /// The raw, trimmed value for `field`, if present (case-insensitive).
    pub fn raw(&self, field: &str) -> Option<&'a str> {
        self.values.get(&field.to_lowercase()).copied()
    }

    /// Look up `field` and convert it to `T`.
    ///
    /// # Errors
    ///
    /// Returns `IniError::MissingField` if the key is absent and
    /// `IniError::FieldTypeMismatch` if the value does not convert.
    pub fn get<T: IniValue>(&self, field: &str) -> Result<T, IniError> {
        let raw = self
            .raw(field)
            .ok_or_else(|| IniError::missing_field(self.section, field))?;

        T::parse_ini(raw).map_err(|reason| {
            IniError::field_type_mismatch(self.section, field, T::KIND, raw, reason)
        })
    }

    /// Number of distinct keys.
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}

// Exactly one `=`, both sides non-empty after trimming.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(ASSIGN)?;
    if value.contains(ASSIGN) {
        return None;
    }

    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}
