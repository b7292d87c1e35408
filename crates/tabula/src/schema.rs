//! Schema types.
//!
//! A schema is the ordered list of sections a document must contain, each an
//! ordered list of typed fields. Schemas are declared at compile time through
//! the [`IniSection`] and [`IniConfig`] traits, usually via their derive macros.

use std::fmt;

use serde::Serialize;

use crate::{Document, IniError, IniWriter, SectionValues};

/// Scalar kind of a declared field.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// 128-bit unsigned integer.
    U128,
    /// Pointer-sized unsigned integer.
    Usize,
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 128-bit signed integer.
    I128,
    /// Pointer-sized signed integer.
    Isize,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// `true` or `false`.
    Bool,
    /// Raw trimmed text.
    String,
}

impl FieldKind {
    /// Returns the lowercase name used in diagnostics and schema exports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::String => "string",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared field: its key and scalar kind.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FieldSchema {
    /// Key as written in the document. Matched case-insensitively.
    pub name: &'static str,
    /// Expected scalar kind.
    pub kind: FieldKind,
}

impl FieldSchema {
    /// Create a new field descriptor.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A declared section: its header name and ordered fields.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SectionSchema {
    /// Header name. Matched case-insensitively.
    pub name: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldSchema],
}

impl SectionSchema {
    /// Describe section type `S` under the given header name.
    pub fn of<S: IniSection>(name: &'static str) -> Self {
        Self {
            name,
            fields: S::FIELDS,
        }
    }
}

/// The full expected shape of a document.
///
/// Serializable so the shape can be exported, e.g. as JSON documentation.
///
/// # Example
///
/// ```
/// use tabula::{FieldKind, FieldSchema, IniConfig, IniSection};
///
/// #[derive(IniSection)]
/// struct Server {
///     address: String,
///     port: u16,
/// }
///
/// let schema = <(Server,)>::schema();
/// assert_eq!(schema.sections[0].name, "Server");
/// assert_eq!(schema.sections[0].fields[1], FieldSchema::new("port", FieldKind::U16));
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ConfigSchema {
    /// Sections in document order.
    pub sections: Vec<SectionSchema>,
}

impl ConfigSchema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append section type `S` under the given header name.
    #[must_use]
    pub fn section<S: IniSection>(mut self, name: &'static str) -> Self {
        self.sections.push(SectionSchema::of::<S>(name));
        self
    }
}

/// A typed record populated from one INI section.
///
/// `FIELDS` lists the declared keys in order and `from_values` reads each of
/// them through [`SectionValues::get`], in the same order. Implement it with
/// `#[derive(IniSection)]` or by hand:
///
/// ```
/// use tabula::{FieldKind, FieldSchema, IniError, IniSection, IniWriter, SectionValues};
///
/// struct Limits {
///     max_connections: u32,
/// }
///
/// impl IniSection for Limits {
///     const NAME: &'static str = "Limits";
///     const FIELDS: &'static [FieldSchema] =
///         &[FieldSchema::new("max_connections", FieldKind::U32)];
///
///     fn from_values(values: &SectionValues<'_>) -> Result<Self, IniError> {
///         Ok(Self {
///             max_connections: values.get("max_connections")?,
///         })
///     }
///
///     fn write_values(&self, writer: &mut IniWriter) -> Result<(), IniError> {
///         writer.field("max_connections", &self.max_connections)
///     }
/// }
///
/// let limits: (Limits,) = tabula::from_str("[limits]\nMAX_CONNECTIONS = 64").unwrap();
/// assert_eq!(limits.0.max_connections, 64);
/// ```
pub trait IniSection: Sized {
    /// Default header name for this section.
    const NAME: &'static str;

    /// Declared fields, in order.
    const FIELDS: &'static [FieldSchema];

    /// Build the record from an extracted section body.
    fn from_values(values: &SectionValues<'_>) -> Result<Self, IniError>;

    /// Write every field, in declared order, to the current section.
    fn write_values(&self, writer: &mut IniWriter) -> Result<(), IniError>;
}

/// A typed record populated from a whole INI document, one section at a time.
///
/// Implemented by `#[derive(IniConfig)]` and by tuples of up to eight
/// [`IniSection`] types.
pub trait IniConfig: Sized {
    /// The expected shape of the document.
    fn schema() -> ConfigSchema;

    /// Consume the declared sections from the document, in order.
    fn from_document(document: &mut Document<'_>) -> Result<Self, IniError>;

    /// Write every section, in declared order.
    fn write_document(&self, writer: &mut IniWriter) -> Result<(), IniError>;
}

macro_rules! impl_config_for_tuple {
    ($($section:ident . $index:tt),+) => {
        impl<$($section: IniSection),+> IniConfig for ($($section,)+) {
            fn schema() -> ConfigSchema {
                ConfigSchema::new()$(.section::<$section>($section::NAME))+
            }

            fn from_document(document: &mut Document<'_>) -> Result<Self, IniError> {
                Ok(($(document.section::<$section>($section::NAME)?,)+))
            }

            fn write_document(&self, writer: &mut IniWriter) -> Result<(), IniError> {
                $(writer.section($section::NAME, &self.$index)?;)+
                Ok(())
            }
        }
    };
}

impl_config_for_tuple!(A.0);
impl_config_for_tuple!(A.0, B.1);
impl_config_for_tuple!(A.0, B.1, C.2);
impl_config_for_tuple!(A.0, B.1, C.2, D.3);
impl_config_for_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_config_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_config_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_config_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
