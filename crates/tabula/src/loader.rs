//! Configuration loader.
//!
//! This module provides the [`IniLoader`] for parsing a typed configuration
//! from a string or a file, along with the [`from_str`] and [`from_path`]
//! shorthands that use default options.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::{Document, DuplicateKeys, IniConfig, IniError, ParseOptions};

/// Configuration loader.
///
/// Holds the [`ParseOptions`] applied to every document it loads. Each load is
/// all-or-nothing: either the whole configuration is returned or the first
/// error encountered.
///
/// # Example
///
/// ```no_run
/// use tabula::{IniConfig, IniLoader, IniSection};
///
/// #[derive(IniSection)]
/// struct Server {
///     address: String,
///     port: u16,
/// }
///
/// #[derive(IniConfig)]
/// struct AppConfig {
///     server: Server,
/// }
///
/// # fn main() -> Result<(), tabula::IniError> {
/// let config: AppConfig = IniLoader::new()
///     .reject_duplicate_keys()
///     .load_path("app.ini")?;
///
/// println!("listening on {}:{}", config.server.address, config.server.port);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniLoader {
    options: ParseOptions,
}

impl IniLoader {
    /// Create a loader with default options.
    ///
    /// # Example
    ///
    /// ```
    /// use tabula::IniLoader;
    ///
    /// let loader = IniLoader::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the parse options.
    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Fail on repeated keys within a section instead of keeping the last one.
    #[must_use]
    pub fn reject_duplicate_keys(mut self) -> Self {
        self.options = self.options.duplicate_keys(DuplicateKeys::Reject);
        self
    }

    /// The options this loader applies.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a configuration from a string.
    ///
    /// Trailing input after the last declared section is ignored.
    ///
    /// # Errors
    ///
    /// Returns `IniError` if the text does not match the shape of `C`.
    ///
    /// # Example
    ///
    /// ```
    /// use tabula::{IniLoader, IniSection};
    ///
    /// #[derive(IniSection)]
    /// struct Server {
    ///     address: String,
    ///     port: u16,
    /// }
    ///
    /// let (server,): (Server,) = IniLoader::new()
    ///     .load_str("[server]\naddress = 127.0.0.1\nport = 3000")
    ///     .unwrap();
    ///
    /// assert_eq!(server.port, 3000);
    /// ```
    pub fn load_str<C: IniConfig>(&self, text: &str) -> Result<C, IniError> {
        let mut document = Document::new(text, self.options);
        let config = C::from_document(&mut document).map_err(|e| {
            debug!(error = %e, "configuration rejected");
            e
        })?;

        if !document.remaining().is_empty() {
            debug!(
                lines = document.remaining().len(),
                "ignoring input after the last declared section"
            );
        }
        Ok(config)
    }

    /// Read a file and parse it as a configuration.
    ///
    /// # Errors
    ///
    /// Returns `IniError` if:
    /// - The file cannot be read
    /// - The contents do not match the shape of `C`
    pub fn load_path<C: IniConfig, P: AsRef<Path>>(&self, path: P) -> Result<C, IniError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration file");

        let text = fs::read_to_string(path).map_err(|e| IniError::io(path, e))?;
        self.load_str(&text)
    }

    /// Like [`load_path`](Self::load_path), but a missing file yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `IniError` if the file exists but cannot be read or parsed.
    pub fn load_optional_path<C: IniConfig, P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Option<C>, IniError> {
        match self.load_path(path.as_ref()) {
            Ok(config) => Ok(Some(config)),
            Err(IniError::Io { ref source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.as_ref().display(), "optional configuration file not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Parse a configuration from a string with default options.
///
/// # Errors
///
/// Returns `IniError` if the text does not match the shape of `C`.
pub fn from_str<C: IniConfig>(text: &str) -> Result<C, IniError> {
    IniLoader::new().load_str(text)
}

/// Read and parse a configuration file with default options.
///
/// # Errors
///
/// Returns `IniError::Io` if the file cannot be read, or any parse error.
pub fn from_path<C: IniConfig, P: AsRef<Path>>(path: P) -> Result<C, IniError> {
    IniLoader::new().load_path(path)
}
