//! Parse error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::FieldKind;

/// Errors that can occur while parsing or writing an INI document.
///
/// Every variant carries the section (and where relevant the field or line)
/// that triggered it, so the rendered message is enough to locate the problem
/// in the input.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IniError {
    /// The document ended before a declared section was found.
    #[error("missing section [{section}]: no more input")]
    MissingSection {
        /// The declared section that was expected next.
        section: String,
    },

    /// A line in header position is not a bracketed section header.
    #[error("expected section header [{section}], found line `{line}`")]
    ExpectedSection {
        /// The declared section that was expected next.
        section: String,
        /// The offending line.
        line: String,
    },

    /// A section header names a different section than the one declared.
    #[error("unexpected section [{found}], expected [{expected}]")]
    UnexpectedSection {
        /// The declared section name.
        expected: String,
        /// The name found in the header.
        found: String,
    },

    /// A section header is followed directly by another header or the end of input.
    #[error("section [{section}] has no fields")]
    EmptySection {
        /// The empty section.
        section: String,
    },

    /// A section body has a different number of lines than declared fields.
    #[error("section [{section}] declares {expected} fields but contains {found} lines")]
    FieldCountMismatch {
        /// The section being parsed.
        section: String,
        /// Number of declared fields.
        expected: usize,
        /// Number of lines in the section body.
        found: usize,
    },

    /// A body line is not a single `key = value` pair.
    #[error("malformed field in section [{section}]: `{line}`")]
    MalformedField {
        /// The section being parsed.
        section: String,
        /// The offending line.
        line: String,
    },

    /// A declared field has no matching key in its section.
    #[error("missing field `{field}` in section [{section}]")]
    MissingField {
        /// The section being parsed.
        section: String,
        /// The declared field name.
        field: String,
    },

    /// A key appears more than once in a section (only with duplicate rejection enabled).
    #[error("duplicate field `{field}` in section [{section}]")]
    DuplicateField {
        /// The section being parsed.
        section: String,
        /// The repeated key, lowercased.
        field: String,
    },

    /// A value could not be converted into the declared field type.
    #[error("field `{field}` in section [{section}] expects {expected}, got `{value}`: {reason}")]
    FieldTypeMismatch {
        /// The section being parsed.
        section: String,
        /// The field being converted.
        field: String,
        /// The declared kind.
        expected: FieldKind,
        /// The raw value as it appeared in the input.
        value: String,
        /// Why the conversion failed.
        reason: String,
    },

    /// A value cannot be written in the INI dialect without changing its meaning.
    #[error("cannot write field `{field}` in section [{section}]: {reason}")]
    UnrepresentableValue {
        /// The section being written.
        section: String,
        /// The field being written.
        field: String,
        /// Why the value cannot be represented.
        reason: String,
    },

    /// Failed to read the configuration file.
    #[error("failed to read configuration file: {path}")]
    Io {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl IniError {
    /// Create a new missing section error.
    pub fn missing_section(section: impl Into<String>) -> Self {
        Self::MissingSection {
            section: section.into(),
        }
    }

    /// Create a new expected section error.
    pub fn expected_section(section: impl Into<String>, line: impl Into<String>) -> Self {
        Self::ExpectedSection {
            section: section.into(),
            line: line.into(),
        }
    }

    /// Create a new unexpected section error.
    pub fn unexpected_section(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedSection {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a new empty section error.
    pub fn empty_section(section: impl Into<String>) -> Self {
        Self::EmptySection {
            section: section.into(),
        }
    }

    /// Create a new field count mismatch error.
    pub fn field_count_mismatch(section: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::FieldCountMismatch {
            section: section.into(),
            expected,
            found,
        }
    }

    /// Create a new malformed field error.
    pub fn malformed_field(section: impl Into<String>, line: impl Into<String>) -> Self {
        Self::MalformedField {
            section: section.into(),
            line: line.into(),
        }
    }

    /// Create a new missing field error.
    pub fn missing_field(section: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            section: section.into(),
            field: field.into(),
        }
    }

    /// Create a new duplicate field error.
    pub fn duplicate_field(section: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            section: section.into(),
            field: field.into(),
        }
    }

    /// Create a new field type mismatch error.
    pub fn field_type_mismatch(
        section: impl Into<String>,
        field: impl Into<String>,
        expected: FieldKind,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FieldTypeMismatch {
            section: section.into(),
            field: field.into(),
            expected,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a new unrepresentable value error.
    pub fn unrepresentable_value(
        section: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnrepresentableValue {
            section: section.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
