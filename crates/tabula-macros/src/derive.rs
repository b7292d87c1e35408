//! Derive macro implementations.
//!
//! This module contains the expansion logic for `#[derive(IniSection)]` and
//! `#[derive(IniConfig)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::parse::IniStruct;

/// Expands `#[derive(IniSection)]`.
///
/// Generates:
/// 1. `NAME` from `#[ini(name = "...")]` or the struct identifier
/// 2. `FIELDS` with one descriptor per field, keyed by `#[ini(rename = "...")]`
///    or the field identifier
/// 3. `from_values` reading each field in declaration order
/// 4. `write_values` writing each field in declaration order
pub fn expand_section(item: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = syn::parse2(item)?;
    let parsed = IniStruct::parse(input, "IniSection", &["name"], &["rename"])?;

    let ident = &parsed.ident;
    let section_name = parsed
        .attrs
        .get("name")
        .map_or_else(|| ident.to_string(), str::to_string);

    let keys = parsed
        .fields
        .iter()
        .map(|field| {
            field
                .attrs
                .get("rename")
                .map_or_else(|| field.plain_name(), str::to_string)
        })
        .collect::<Vec<_>>();

    // Two fields answering to the same key could never both be satisfied.
    for (i, key) in keys.iter().enumerate() {
        if keys[..i].iter().any(|earlier| earlier.to_lowercase() == key.to_lowercase()) {
            return Err(syn::Error::new(
                parsed.fields[i].ident.span(),
                format!("duplicate key `{key}` in section {section_name}"),
            ));
        }
    }

    let idents = parsed.fields.iter().map(|field| &field.ident).collect::<Vec<_>>();
    let types = parsed.fields.iter().map(|field| &field.ty).collect::<Vec<_>>();

    let expanded = quote! {
        impl ::tabula::IniSection for #ident {
            const NAME: &'static str = #section_name;

            const FIELDS: &'static [::tabula::FieldSchema] = &[
                #(::tabula::FieldSchema::new(#keys, <#types as ::tabula::IniValue>::KIND)),*
            ];

            fn from_values(
                values: &::tabula::SectionValues<'_>,
            ) -> ::core::result::Result<Self, ::tabula::IniError> {
                ::core::result::Result::Ok(Self {
                    #(#idents: values.get::<#types>(#keys)?),*
                })
            }

            fn write_values(
                &self,
                writer: &mut ::tabula::IniWriter,
            ) -> ::core::result::Result<(), ::tabula::IniError> {
                #(writer.field(#keys, &self.#idents)?;)*
                ::core::result::Result::Ok(())
            }
        }
    };

    Ok(expanded)
}

/// Expands `#[derive(IniConfig)]`.
///
/// Each field is one section, consumed in declaration order. The header name
/// is `#[ini(section = "...")]` or the field type's `IniSection::NAME`.
pub fn expand_config(item: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = syn::parse2(item)?;
    let parsed = IniStruct::parse(input, "IniConfig", &[], &["section"])?;

    let ident = &parsed.ident;
    let idents = parsed.fields.iter().map(|field| &field.ident).collect::<Vec<_>>();
    let types = parsed.fields.iter().map(|field| &field.ty).collect::<Vec<_>>();
    let names = parsed
        .fields
        .iter()
        .map(|field| {
            let ty = &field.ty;
            field.attrs.get("section").map_or_else(
                || quote! { <#ty as ::tabula::IniSection>::NAME },
                |name| quote! { #name },
            )
        })
        .collect::<Vec<_>>();

    let expanded = quote! {
        impl ::tabula::IniConfig for #ident {
            fn schema() -> ::tabula::ConfigSchema {
                ::tabula::ConfigSchema::new()
                    #(.section::<#types>(#names))*
            }

            fn from_document(
                document: &mut ::tabula::Document<'_>,
            ) -> ::core::result::Result<Self, ::tabula::IniError> {
                ::core::result::Result::Ok(Self {
                    #(#idents: document.section::<#types>(#names)?),*
                })
            }

            fn write_document(
                &self,
                writer: &mut ::tabula::IniWriter,
            ) -> ::core::result::Result<(), ::tabula::IniError> {
                #(writer.section(#names, &self.#idents)?;)*
                ::core::result::Result::Ok(())
            }
        }
    };

    Ok(expanded)
}
