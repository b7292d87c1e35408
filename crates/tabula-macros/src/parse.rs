//! Parsing utilities for the derive macros.
//!
//! This module reads `#[ini(...)]` attributes and the named fields of the
//! annotated struct.

use proc_macro2::Span;
use syn::{
    ext::IdentExt, punctuated::Punctuated, spanned::Spanned, Attribute, Data, DeriveInput, Expr,
    ExprLit, Fields, Ident, Lit, Meta, Token, Type,
};

/// Name of the helper attribute shared by both derives.
const ATTR: &str = "ini";

/// The one attribute naming a key; every other attribute names a section.
const KEY_ATTR: &str = "rename";

/// Parsed `key = "value"` pairs from every `#[ini(...)]` attribute on an item.
#[derive(Debug, Default)]
pub struct IniAttrs {
    pairs: Vec<(Ident, String)>,
}

impl IniAttrs {
    /// Parses all `#[ini(...)]` attributes, accepting only the given keys.
    pub fn parse(attrs: &[Attribute], allowed: &[&str]) -> syn::Result<Self> {
        let mut pairs = Vec::new();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            let meta_list: Punctuated<Meta, Token![,]> =
                attr.parse_args_with(Punctuated::parse_terminated)?;

            for meta in meta_list {
                let nv = match meta {
                    Meta::NameValue(nv) => nv,
                    _ => return Err(syn::Error::new(meta.span(), "expected name = \"value\"")),
                };

                let ident = nv
                    .path
                    .get_ident()
                    .ok_or_else(|| syn::Error::new(nv.path.span(), "expected identifier"))?
                    .clone();

                if !allowed.iter().any(|key| ident == key) {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {ident}"),
                    ));
                }

                let value = match &nv.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }) => s.value(),
                    _ => {
                        return Err(syn::Error::new(
                            nv.value.span(),
                            "expected string literal",
                        ))
                    }
                };

                check_name(&value, ident != KEY_ATTR)
                    .map_err(|reason| syn::Error::new(nv.value.span(), reason))?;

                if pairs.iter().any(|(existing, _): &(Ident, String)| *existing == ident) {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("duplicate attribute: {ident}"),
                    ));
                }

                pairs.push((ident, value));
            }
        }

        Ok(Self { pairs })
    }

    /// Returns the value given for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(ident, _)| ident == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Rejects names the INI dialect cannot carry: they would be dropped as
/// comments, split at `=`, trimmed, or read as a header boundary.
fn check_name(name: &str, header: bool) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if name.trim() != name {
        return Err(format!("name `{name}` cannot have leading or trailing whitespace"));
    }
    if name.starts_with(';') || name.starts_with('[') {
        return Err(format!("name `{name}` cannot start with `;` or `[`"));
    }
    if name.contains(['=', '\n', '\r']) {
        return Err(format!("name `{name}` cannot contain `=` or a line break"));
    }
    if header && name.contains(['[', ']']) {
        return Err(format!("section name `{name}` cannot contain `[` or `]`"));
    }
    Ok(())
}

/// A named field of the annotated struct.
#[derive(Debug)]
pub struct StructField {
    /// The field identifier.
    pub ident: Ident,
    /// The field type.
    pub ty: Type,
    /// The field's own `#[ini(...)]` attributes.
    pub attrs: IniAttrs,
}

impl StructField {
    /// The field identifier without a raw `r#` prefix.
    pub fn plain_name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// A struct accepted by the derives: non-generic, with named fields.
#[derive(Debug)]
pub struct IniStruct {
    /// The struct identifier.
    pub ident: Ident,
    /// Container-level `#[ini(...)]` attributes.
    pub attrs: IniAttrs,
    /// Fields in declaration order.
    pub fields: Vec<StructField>,
}

impl IniStruct {
    /// Parses a derive input, validating container and field attributes.
    pub fn parse(
        input: DeriveInput,
        derive: &str,
        container_keys: &[&str],
        field_keys: &[&str],
    ) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                format!("{derive} cannot be derived for generic types"),
            ));
        }

        let named = match input.data {
            Data::Struct(data) => match data.fields {
                Fields::Named(named) => named.named,
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        format!("{derive} requires a struct with named fields"),
                    ))
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    format!("{derive} can only be derived for structs"),
                ))
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    format!("{derive} can only be derived for structs"),
                ))
            }
        };

        if named.is_empty() {
            return Err(syn::Error::new(
                input.ident.span(),
                format!("{derive} requires at least one field"),
            ));
        }

        let attrs = IniAttrs::parse(&input.attrs, container_keys)?;
        let fields = named
            .into_iter()
            .map(|field| {
                let attrs = IniAttrs::parse(&field.attrs, field_keys)?;
                let ident = field
                    .ident
                    .ok_or_else(|| syn::Error::new(Span::call_site(), "expected named field"))?;
                Ok(StructField {
                    ident,
                    ty: field.ty,
                    attrs,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            ident: input.ident,
            attrs,
            fields,
        })
    }
}
