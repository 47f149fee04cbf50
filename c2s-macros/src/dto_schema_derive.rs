use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Ident, Lit, LitStr, Meta, Type};

use crate::crate_path::c2s_core_path;

enum PropertyKind {
    String,
    Integer,
    Boolean,
    Object,
}

struct DocumentedField {
    ident: Ident,
    kind: PropertyKind,
    description: Option<String>,
    example: Option<String>,
}

pub fn expand(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand_inner(input) {
        Ok(ts) => ts.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_inner(input: DeriveInput) -> syn::Result<TokenStream> {
    let krate = c2s_core_path();
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "DtoSchema can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "DtoSchema can only be derived for structs",
            ))
        }
    };

    let mut documented = Vec::new();

    for field in fields {
        let ident = field.ident.clone().unwrap();
        let mut has_property = false;
        let mut description = None;
        let mut example = None;

        for attr in &field.attrs {
            if attr.path().is_ident("property") {
                has_property = true;
                description = parse_property_attr(attr)?;
            } else if attr.path().is_ident("example") {
                example = Some(parse_example_attr(attr)?);
            }
        }

        // A field without #[property] is invisible to the schema; an
        // #[example] on such a field is inert.
        if !has_property {
            continue;
        }

        documented.push(DocumentedField {
            ident,
            kind: infer_kind(&field.ty),
            description,
            example,
        });
    }

    let name_str = name.to_string();
    let entries: Vec<TokenStream> = documented
        .iter()
        .map(|field| field_spec_tokens(field, &krate))
        .collect();

    Ok(quote! {
        impl #impl_generics #krate::DtoSchema for #name #ty_generics #where_clause {
            fn dto_name() -> &'static str {
                #name_str
            }

            fn fields() -> &'static [#krate::FieldSpec] {
                const FIELDS: &[#krate::FieldSpec] = &[#(#entries),*];
                FIELDS
            }
        }
    })
}

// ── Attribute parsing ────────────────────────────────────────────────────

fn parse_property_attr(attr: &Attribute) -> syn::Result<Option<String>> {
    match &attr.meta {
        Meta::Path(_) => Ok(None),
        Meta::List(_) => {
            let nested = attr.parse_args_with(
                syn::punctuated::Punctuated::<Meta, syn::token::Comma>::parse_terminated,
            )?;
            let mut description = None;
            for meta in &nested {
                match meta {
                    Meta::NameValue(nv) if nv.path.is_ident("description") => {
                        if let Expr::Lit(ExprLit {
                            lit: Lit::Str(s), ..
                        }) = &nv.value
                        {
                            description = Some(s.value());
                        } else {
                            return Err(syn::Error::new_spanned(
                                &nv.value,
                                "description must be a string literal",
                            ));
                        }
                    }
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "unknown #[property(...)] argument, expected description = \"...\"",
                        ))
                    }
                }
            }
            Ok(description)
        }
        Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "use #[property] or #[property(description = \"...\")]",
        )),
    }
}

fn parse_example_attr(attr: &Attribute) -> syn::Result<String> {
    match &attr.meta {
        Meta::List(_) => Ok(attr.parse_args::<LitStr>()?.value()),
        _ => Err(syn::Error::new_spanned(
            attr,
            "example requires a string literal, e.g. #[example(\"1562\")]",
        )),
    }
}

// ── Kind inference ───────────────────────────────────────────────────────

fn infer_kind(ty: &Type) -> PropertyKind {
    let ty = peel(ty);
    if let Some(inner) = option_inner(ty) {
        return infer_kind(inner);
    }
    match last_path_ident(ty) {
        Some(ident) => match ident.as_str() {
            "String" | "str" => PropertyKind::String,
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize" | "f32" | "f64" => PropertyKind::Integer,
            "bool" => PropertyKind::Boolean,
            _ => PropertyKind::Object,
        },
        None => PropertyKind::Object,
    }
}

fn peel(ty: &Type) -> &Type {
    match ty {
        Type::Reference(reference) => peel(&reference.elem),
        Type::Paren(paren) => peel(&paren.elem),
        _ => ty,
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(tp) = ty {
        let seg = tp.path.segments.last()?;
        if seg.ident == "Option" {
            if let syn::PathArguments::AngleBracketed(args) = &seg.arguments {
                if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                    return Some(inner);
                }
            }
        }
    }
    None
}

fn last_path_ident(ty: &Type) -> Option<String> {
    if let Type::Path(tp) = ty {
        tp.path.segments.last().map(|seg| seg.ident.to_string())
    } else {
        None
    }
}

// ── Codegen ──────────────────────────────────────────────────────────────

fn field_spec_tokens(field: &DocumentedField, krate: &TokenStream) -> TokenStream {
    let name = field.ident.to_string();
    let kind = match field.kind {
        PropertyKind::String => quote!(#krate::FieldKind::String),
        PropertyKind::Integer => quote!(#krate::FieldKind::Integer),
        PropertyKind::Boolean => quote!(#krate::FieldKind::Boolean),
        PropertyKind::Object => quote!(#krate::FieldKind::Object),
    };
    let description = option_str_tokens(&field.description);
    let example = option_str_tokens(&field.example);
    quote! {
        #krate::FieldSpec {
            name: #name,
            kind: #kind,
            description: #description,
            example: #example,
        }
    }
}

fn option_str_tokens(value: &Option<String>) -> TokenStream {
    match value {
        Some(v) => quote!(::core::option::Option::Some(#v)),
        None => quote!(::core::option::Option::None),
    }
}
