//! Structural parsing.
//!
//! [`Document`] walks the significant lines of an input one declared section
//! at a time. Sections are matched strictly by position: the n-th declared
//! section must be the n-th header in the input.

use tracing::trace;

use crate::lines::significant_lines;
use crate::{IniError, IniSection, ParseOptions, SectionValues};

const HEADER_OPEN: char = '[';
const HEADER_CLOSE: char = ']';

/// An on-going parse over a borrowed document.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    options: ParseOptions,
}

impl<'a> Document<'a> {
    /// Preprocess `text` and position the cursor on its first significant line.
    #[must_use]
    pub fn new(text: &'a str, options: ParseOptions) -> Self {
        Self {
            lines: significant_lines(text),
            cursor: 0,
            options,
        }
    }

    /// Parse the next section as `S`, expecting the header `name`.
    ///
    /// On success the cursor moves past the section body.
    ///
    /// # Errors
    ///
    /// Returns `IniError` if:
    /// - There are no lines left
    /// - The next line is not a `[...]` header
    /// - The header names a different section
    /// - The section has no body lines
    /// - The body does not match the fields of `S`
    pub fn section<S: IniSection>(&mut self, name: &str) -> Result<S, IniError> {
        let header = *self
            .lines
            .get(self.cursor)
            .ok_or_else(|| IniError::missing_section(name))?;

        let found = header_name(header).ok_or_else(|| IniError::expected_section(name, header))?;
        if found.to_lowercase() != name.to_lowercase() {
            return Err(IniError::unexpected_section(name, found));
        }

        let start = self.cursor + 1;
        let end = self.lines[start..]
            .iter()
            .position(|line| line.starts_with(HEADER_OPEN))
            .map_or(self.lines.len(), |offset| start + offset);

        let body = &self.lines[start..end];
        if body.is_empty() {
            return Err(IniError::empty_section(name));
        }

        let values = SectionValues::extract(name, body, S::FIELDS, &self.options)?;
        trace!(section = name, keys = values.len(), "extracted section");
        let section = S::from_values(&values)?;

        self.cursor = end;
        Ok(section)
    }

    /// Significant lines not consumed by any section so far.
    pub fn remaining(&self) -> &[&'a str] {
        &self.lines[self.cursor..]
    }
}

// Inner text of a `[ name ]` line, trimmed.
fn header_name(line: &str) -> Option<&str> {
    line.strip_prefix(HEADER_OPEN)?
        .strip_suffix(HEADER_CLOSE)
        .map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldKind, FieldSchema, IniWriter};

    #[derive(Debug, PartialEq)]
    struct Entry {
        key: u64,
        value: String,
    }

    impl IniSection for Entry {
        const NAME: &'static str = "Entry";
        const FIELDS: &'static [FieldSchema] = &[
            FieldSchema::new("key", FieldKind::U64),
            FieldSchema::new("value", FieldKind::String),
        ];

        fn from_values(values: &SectionValues<'_>) -> Result<Self, IniError> {
            Ok(Self {
                key: values.get("key")?,
                value: values.get("value")?,
            })
        }

        fn write_values(&self, writer: &mut IniWriter) -> Result<(), IniError> {
            writer.field("key", &self.key)?;
            writer.field("value", &self.value)
        }
    }

    fn document(text: &str) -> Document<'_> {
        Document::new(text, ParseOptions::default())
    }

    #[test]
    fn test_header_name() {
        assert_eq!(header_name("[Server]"), Some("Server"));
        assert_eq!(header_name("[  Server \t]"), Some("Server"));
        assert_eq!(header_name("[]"), Some(""));
        assert_eq!(header_name("Server]"), None);
        assert_eq!(header_name("[Server"), None);
    }

    #[test]
    fn test_section_parses_and_advances() {
        let mut doc = document("[Entry]\nkey = 1\nvalue = a\n[Entry]\nkey = 2\nvalue = b");
        assert_eq!(doc.section::<Entry>("Entry").unwrap().key, 1);
        assert_eq!(doc.remaining().len(), 3);
        assert_eq!(doc.section::<Entry>("entry").unwrap().value, "b");
        assert!(doc.remaining().is_empty());
    }

    #[test]
    fn test_missing_section() {
        let mut doc = document("; nothing here\n");
        let err = doc.section::<Entry>("Entry").unwrap_err();
        assert!(matches!(err, IniError::MissingSection { ref section } if section == "Entry"));
    }

    #[test]
    fn test_expected_section() {
        let mut doc = document("key = 1\nvalue = a");
        let err = doc.section::<Entry>("Entry").unwrap_err();
        assert!(matches!(err, IniError::ExpectedSection { ref line, .. } if line == "key = 1"));
    }

    #[test]
    fn test_unexpected_section() {
        let mut doc = document("[Other]\nkey = 1\nvalue = a");
        let err = doc.section::<Entry>("Entry").unwrap_err();
        assert!(matches!(
            err,
            IniError::UnexpectedSection { ref expected, ref found } if expected == "Entry" && found == "Other"
        ));
    }

    #[test]
    fn test_empty_section() {
        let mut doc = document("[Entry]\n[Next]\nkey = 1");
        assert!(matches!(
            doc.section::<Entry>("Entry").unwrap_err(),
            IniError::EmptySection { .. }
        ));

        let mut doc = document("[Entry]\n; just a comment\n");
        assert!(matches!(
            doc.section::<Entry>("Entry").unwrap_err(),
            IniError::EmptySection { .. }
        ));
    }

    #[test]
    fn test_body_stops_at_next_header() {
        let mut doc = document("[Entry]\nkey = 1\n[Entry]\nvalue = a");
        assert!(matches!(
            doc.section::<Entry>("Entry").unwrap_err(),
            IniError::FieldCountMismatch { expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn test_failed_section_does_not_advance() {
        let mut doc = document("[Entry]\nkey = x\nvalue = a");
        assert!(doc.section::<Entry>("Entry").is_err());
        assert_eq!(doc.remaining().len(), 3);
    }
}
