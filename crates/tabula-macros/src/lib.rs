//! Derive macros for Tabula schemas.
//!
//! This crate generates the schema descriptors that `tabula` uses in place of
//! runtime reflection. Use it through the re-exports in `tabula`:
//!
//! ```rust,ignore
//! use tabula::{IniConfig, IniSection};
//!
//! #[derive(IniSection)]
//! struct Server {
//!     address: String,
//!     port: u16,
//! }
//!
//! #[derive(IniConfig)]
//! struct AppConfig {
//!     server: Server,
//! }
//! ```
//!
//! # Macro Expansion
//!
//! `#[derive(IniSection)]` emits the section's header name, an ordered list of
//! `(key, kind)` field descriptors, and the code reading and writing each field
//! in declaration order. `#[derive(IniConfig)]` emits the ordered list of
//! sections and reads them one after another from the document.

mod derive;
mod parse;

use proc_macro::TokenStream;

/// Derives `tabula::IniSection` for a struct with named scalar fields.
///
/// # Attributes
///
/// - `#[ini(name = "...")]` on the struct: header name (defaults to the struct name)
/// - `#[ini(rename = "...")]` on a field: key (defaults to the field name)
///
/// # Example
///
/// ```rust,ignore
/// #[derive(tabula::IniSection)]
/// #[ini(name = "MixedValues")]
/// struct Mixed {
///     integer: u32,
///     decimal: f64,
///     #[ini(rename = "flag")]
///     enabled: bool,
///     text: String,
/// }
/// ```
#[proc_macro_derive(IniSection, attributes(ini))]
pub fn derive_ini_section(item: TokenStream) -> TokenStream {
    derive::expand_section(item.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derives `tabula::IniConfig` for a struct whose fields are sections.
///
/// Sections are expected in field declaration order.
///
/// # Attributes
///
/// - `#[ini(section = "...")]` on a field: header name for that slot
///   (defaults to the section type's own name)
///
/// # Example
///
/// ```rust,ignore
/// #[derive(tabula::IniConfig)]
/// struct AppConfig {
///     server: Server,
///     #[ini(section = "Fallback")]
///     fallback: Route,
/// }
/// ```
#[proc_macro_derive(IniConfig, attributes(ini))]
pub fn derive_ini_config(item: TokenStream) -> TokenStream {
    derive::expand_config(item.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
