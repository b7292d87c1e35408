//! Typed INI configuration parsing.
//!
//! This crate reads an INI document into a statically declared, strongly typed
//! record. The record's shape (ordered sections, each with ordered typed
//! fields) is declared with derive macros, and parsing either returns the fully
//! populated record or the first structural error:
//!
//! - Sections are matched by position and by name (case-insensitive)
//! - Each section must contain exactly one line per declared field
//! - Keys are matched case-insensitively and converted to the field's type
//! - Input after the last declared section is ignored
//!
//! # Example
//!
//! ```
//! use tabula::{IniConfig, IniSection};
//!
//! #[derive(Debug, IniSection)]
//! struct Server {
//!     address: String,
//!     port: u16,
//! }
//!
//! #[derive(Debug, IniSection)]
//! struct Route {
//!     url: String,
//!     path: String,
//!     response_code: u32,
//! }
//!
//! #[derive(Debug, IniConfig)]
//! struct AppConfig {
//!     server: Server,
//!     route: Route,
//! }
//!
//! # fn main() -> Result<(), tabula::IniError> {
//! let config: AppConfig = tabula::from_str(
//!     r"
//!     ; frontend
//!     [Server]
//!     address = 0.0.0.0
//!     port = 8080
//!
//!     [route]
//!     URL = /health
//!     path = ./static/health.html
//!     response_code = 200
//!     ",
//! )?;
//!
//! assert_eq!(config.server.port, 8080);
//! assert_eq!(config.route.response_code, 200);
//! # Ok(())
//! # }
//! ```
//!
//! # Input Format
//!
//! ```ini
//! ; Lines starting with a semicolon are comments.
//! [ Server ]
//! address = 0.0.0.0
//! port    = 8080
//! ```
//!
//! Whitespace around lines, header names, keys and values is insignificant.
//! Every field line holds exactly one `=`. Booleans are exactly `true` or
//! `false`; strings are taken verbatim with no unescaping.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Lets the derive output (which names `::tabula`) expand inside this crate too.
extern crate self as tabula;

mod config;
mod error;
mod lines;
mod loader;
mod parser;
mod schema;
mod value;
mod values;
mod writer;

pub use config::{DuplicateKeys, ParseOptions};
pub use error::IniError;
pub use lines::significant_lines;
pub use loader::{from_path, from_str, IniLoader};
pub use parser::Document;
pub use schema::*;
pub use value::IniValue;
pub use values::SectionValues;
pub use writer::{to_string, IniWriter};

pub use tabula_macros::{IniConfig, IniSection};
