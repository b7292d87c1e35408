//! Parse options.
//!
//! This module provides [`ParseOptions`], the knobs the parser accepts on top
//! of the fixed INI dialect.

/// How repeated keys within one section are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// The last occurrence overwrites earlier ones.
    #[default]
    LastWins,
    /// Any repeated key fails the parse with [`IniError::DuplicateField`](crate::IniError::DuplicateField).
    Reject,
}

/// Options applied to a single parse.
///
/// # Example
///
/// ```
/// use tabula::{DuplicateKeys, ParseOptions};
///
/// let options = ParseOptions::default().duplicate_keys(DuplicateKeys::Reject);
/// assert_eq!(options.duplicates(), DuplicateKeys::Reject);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    duplicate_keys: DuplicateKeys,
}

impl ParseOptions {
    /// Create options with the default behavior.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate key policy.
    #[must_use]
    pub fn duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// The active duplicate key policy.
    pub fn duplicates(&self) -> DuplicateKeys {
        self.duplicate_keys
    }
}
