//! Scalar value conversions.

use crate::FieldKind;

/// A scalar that can be read from and written to an INI value.
///
/// Implemented for the primitive integers, `f32`, `f64`, `bool` and `String`.
pub trait IniValue: Sized {
    /// Kind reported in schemas and diagnostics.
    const KIND: FieldKind;

    /// Convert a trimmed raw value. The error is a short reason for diagnostics.
    fn parse_ini(raw: &str) -> Result<Self, String>;

    /// Render the value as it should appear after `key = `.
    ///
    /// Returns an error reason if the value cannot be written so that
    /// [`parse_ini`](Self::parse_ini) reads back the same value.
    fn format_ini(&self) -> Result<String, String>;
}

macro_rules! impl_from_str_value {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl IniValue for $ty {
                const KIND: FieldKind = FieldKind::$kind;

                fn parse_ini(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>().map_err(|e| e.to_string())
                }

                fn format_ini(&self) -> Result<String, String> {
                    Ok(self.to_string())
                }
            }
        )+
    };
}

impl_from_str_value!(
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    f32 => F32,
    f64 => F64,
);

impl IniValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    // Only the exact lowercase literals, matching `bool::from_str`.
    fn parse_ini(raw: &str) -> Result<Self, String> {
        match raw {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err("expected `true` or `false`".to_string()),
        }
    }

    fn format_ini(&self) -> Result<String, String> {
        Ok(self.to_string())
    }
}

impl IniValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn parse_ini(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }

    fn format_ini(&self) -> Result<String, String> {
        if self.is_empty() {
            return Err("empty strings cannot be written".to_string());
        }
        if self.trim() != self {
            return Err("leading or trailing whitespace would be trimmed".to_string());
        }
        if self.contains(['=', '\n', '\r']) {
            return Err("value contains `=` or a line break".to_string());
        }
        Ok(self.clone())
    }
}
