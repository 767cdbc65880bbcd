// File: pathfmt-derive/src/record.rs
// Purpose: PathRecord derive and #[pathfmt] attribute processing

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Field, Fields, Lit, LitStr, Meta, Type, Visibility};

/// Field types the runtime knows how to coerce
const SCALAR_TYPES: &[&str] = &[
    "bool", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize", "f32", "f64",
    "String",
];

/// Everything the generated impl needs to know about one field
#[derive(Debug)]
struct FieldSpec {
    ident: syn::Ident,
    name: String,
    tag: Option<String>,
    settable: bool,
    scalar: bool,
}

/// Generate the `PathRecord` implementation, or a compile error
pub fn impl_path_record(input: &DeriveInput) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = named_fields(input)?
        .iter()
        .map(field_spec)
        .collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let slots = fields.iter().map(slot_tokens);
    let views = fields.iter().map(view_tokens);

    Ok(quote! {
        impl #impl_generics ::pathfmt::PathRecord for #name #ty_generics #where_clause {
            fn path_fields(&mut self) -> ::std::vec::Vec<::pathfmt::PathField<'_>> {
                ::std::vec![#(#slots),*]
            }

            fn path_values(&self) -> ::std::vec::Vec<::pathfmt::FieldView<'_>> {
                ::std::vec![#(#views),*]
            }
        }
    })
}

/// Only structs with named fields are records
fn named_fields(input: &DeriveInput) -> syn::Result<&syn::punctuated::Punctuated<Field, syn::Token![,]>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                &input.ident,
                "PathRecord can only be derived for structs with named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "PathRecord can only be derived for structs",
        )),
    }
}

fn field_spec(field: &Field) -> syn::Result<FieldSpec> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
    let name = ident.unraw().to_string();
    let tag = extract_tag(&field.attrs, &name)?;

    Ok(FieldSpec {
        ident,
        name,
        tag,
        settable: !matches!(field.vis, Visibility::Inherited),
        scalar: is_scalar_type(&field.ty),
    })
}

/// Parse `#[pathfmt]`, `#[pathfmt("tag")]` or `#[pathfmt = "tag"]`
fn extract_tag(attrs: &[Attribute], field_name: &str) -> syn::Result<Option<String>> {
    let mut tag: Option<String> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("pathfmt")) {
        if tag.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate #[pathfmt] attribute"));
        }

        let value = match &attr.meta {
            Meta::Path(_) => field_name.to_string(),
            Meta::List(_) => attr.parse_args::<LitStr>()?.value(),
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => s.value(),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a string literal, e.g. #[pathfmt = \"id\"]",
                    ))
                }
            },
        };

        if value.is_empty() {
            return Err(syn::Error::new_spanned(attr, "#[pathfmt] tag cannot be empty"));
        }

        tag = Some(value);
    }

    Ok(tag)
}

/// Classify by the last path segment, e.g. `std::string::String` → `String`
fn is_scalar_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| {
                segment.arguments.is_none()
                    && SCALAR_TYPES.contains(&segment.ident.to_string().as_str())
            })
            .unwrap_or(false),
        Type::Group(group) => is_scalar_type(&group.elem),
        Type::Paren(paren) => is_scalar_type(&paren.elem),
        _ => false,
    }
}

fn tag_tokens(spec: &FieldSpec) -> TokenStream {
    match &spec.tag {
        Some(tag) => quote! { ::core::option::Option::Some(#tag) },
        None => quote! { ::core::option::Option::None },
    }
}

fn slot_tokens(spec: &FieldSpec) -> TokenStream {
    let FieldSpec {
        ident,
        name,
        settable,
        ..
    } = spec;
    let tag = tag_tokens(spec);

    let slot = if spec.scalar && spec.settable && spec.tag.is_some() {
        quote! { ::pathfmt::FieldSlot::Scalar(&mut self.#ident) }
    } else {
        quote! { ::pathfmt::FieldSlot::Unsupported }
    };

    quote! {
        ::pathfmt::PathField {
            name: #name,
            tag: #tag,
            settable: #settable,
            slot: #slot,
        }
    }
}

fn view_tokens(spec: &FieldSpec) -> TokenStream {
    let FieldSpec { ident, name, .. } = spec;
    let tag = tag_tokens(spec);

    let value = if spec.scalar && spec.tag.is_some() {
        quote! { ::core::option::Option::Some(&self.#ident) }
    } else {
        quote! { ::core::option::Option::None }
    };

    quote! {
        ::pathfmt::FieldView {
            name: #name,
            tag: #tag,
            value: #value,
        }
    }
}
