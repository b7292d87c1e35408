//! INI serialization.
//!
//! The writer emits the same dialect the parser reads: one `[Name]` header
//! per section, `key = value` lines in declared order, and a blank line
//! between sections.

use crate::{IniConfig, IniError, IniSection, IniValue};

/// Accumulates INI text section by section.
#[derive(Debug, Default)]
pub struct IniWriter {
    output: String,
    section: Option<String>,
}

impl IniWriter {
    /// Create an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a section header and all fields of `section`.
    ///
    /// # Errors
    ///
    /// Returns `IniError::UnrepresentableValue` if `name` cannot be read back
    /// as a header, or if a field cannot be written.
    pub fn section<S: IniSection>(&mut self, name: &str, section: &S) -> Result<(), IniError> {
        check_name(name)
            .and_then(|()| check_header(name))
            .map_err(|reason| IniError::unrepresentable_value(name, "", reason))?;

        if self.section.is_some() {
            self.output.push('\n');
        }
        self.output.push('[');
        self.output.push_str(name);
        self.output.push_str("]\n");
        self.section = Some(name.to_string());

        section.write_values(self)
    }

    /// Write one `key = value` line in the current section.
    ///
    /// # Errors
    ///
    /// Returns `IniError::UnrepresentableValue` if the key or value cannot be
    /// read back unchanged, or if no section has been started.
    pub fn field<T: IniValue>(&mut self, key: &str, value: &T) -> Result<(), IniError> {
        let Some(section) = self.section.as_deref() else {
            return Err(IniError::unrepresentable_value(
                "",
                key,
                "field written outside of a section",
            ));
        };

        let text = check_name(key)
            .map_err(str::to_string)
            .and_then(|()| value.format_ini())
            .map_err(|reason| IniError::unrepresentable_value(section, key, reason))?;

        self.output.push_str(key);
        self.output.push_str(" = ");
        self.output.push_str(&text);
        self.output.push('\n');
        Ok(())
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consume the writer and return its text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

// A key or header name survives preprocessing and the `=` split unchanged.
fn check_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("name is empty");
    }
    if name.trim() != name {
        return Err("name has surrounding whitespace");
    }
    if name.starts_with(';') || name.starts_with('[') {
        return Err("name starts with `;` or `[`");
    }
    if name.contains(['=', '\n', '\r']) {
        return Err("name contains `=` or a line break");
    }
    Ok(())
}

fn check_header(name: &str) -> Result<(), &'static str> {
    if name.contains(['[', ']']) {
        return Err("section name contains `[` or `]`");
    }
    Ok(())
}

/// Serialize `config` to INI text.
///
/// # Errors
///
/// Returns `IniError::UnrepresentableValue` if a string field is empty, has
/// surrounding whitespace, or contains `=` or a line break.
///
/// # Example
///
/// ```
/// use tabula::IniSection;
///
/// #[derive(IniSection)]
/// struct Server {
///     address: String,
///     port: u16,
/// }
///
/// let text = tabula::to_string(&(Server { address: "localhost".into(), port: 80 },)).unwrap();
/// assert_eq!(text, "[Server]\naddress = localhost\nport = 80\n");
/// ```
pub fn to_string<C: IniConfig>(config: &C) -> Result<String, IniError> {
    let mut writer = IniWriter::new();
    config.write_document(&mut writer)?;
    Ok(writer.finish())
}
