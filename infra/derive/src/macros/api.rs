use super::{derived_trait_names, serde_mentions};
use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{Attribute, Fields, ItemStruct, Lit, LitStr, Meta, Type, parse_quote};

/// Expands the `#[api_model]` attribute macro.
///
/// Adds the serde derives and the wire policy (camelCase, strict fields, absent options omitted).
pub fn expand_api_model(args: TokenStream, mut input: ItemStruct) -> TokenStream {
    let ApiModelArgs { rename_all, deny_unknown_fields, skip_none } =
        match parse_api_model_args(args) {
            Ok(args) => args,
            Err(err) => return err,
        };
    let derives = derived_trait_names(&input.attrs);
    let serde_meta = match serde_meta_info(&input.attrs) {
        Ok(info) => info,
        Err(err) => return err,
    };

    let derive_attr = derive_attr(&derives);
    let rename_attr = match rename_attr(rename_all, &serde_meta) {
        Ok(attr) => attr,
        Err(err) => return err,
    };
    let deny_attr = match deny_unknown_attr(deny_unknown_fields, &serde_meta, &input) {
        Ok(attr) => attr,
        Err(err) => return err,
    };

    if skip_none.unwrap_or(true) {
        omit_absent_options(&mut input.fields);
    }

    quote! {
        #derive_attr
        #rename_attr
        #deny_attr
        #input
    }
}

struct ApiModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
    skip_none: Option<bool>,
}

fn parse_api_model_args(args: TokenStream) -> Result<ApiModelArgs, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut parsed = ApiModelArgs { rename_all: None, deny_unknown_fields: None, skip_none: None };

    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            )
            .to_compile_error());
        };

        if name_value.path.is_ident("rename_all") {
            let value = string_literal(&name_value)?;
            parsed.rename_all = Some(set_once(parsed.rename_all, &name_value, value)?);
        } else if name_value.path.is_ident("deny_unknown_fields") {
            let value = bool_literal(&name_value)?;
            parsed.deny_unknown_fields =
                Some(set_once(parsed.deny_unknown_fields, &name_value, value)?);
        } else if name_value.path.is_ident("skip_none") {
            let value = bool_literal(&name_value)?;
            parsed.skip_none = Some(set_once(parsed.skip_none, &name_value, value)?);
        } else {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Unsupported argument; expected rename_all, deny_unknown_fields or skip_none",
            )
            .to_compile_error());
        }
    }

    Ok(parsed)
}

fn literal<'a>(name_value: &'a syn::MetaNameValue, expected: &str) -> Result<&'a Lit, TokenStream> {
    match &name_value.value {
        syn::Expr::Lit(expr_lit) => Ok(&expr_lit.lit),
        other => Err(syn::Error::new_spanned(other, format!("expected a {expected} literal"))
            .to_compile_error()),
    }
}

fn bool_literal(name_value: &syn::MetaNameValue) -> Result<bool, TokenStream> {
    match literal(name_value, "boolean")? {
        Lit::Bool(lit) => Ok(lit.value),
        other => Err(syn::Error::new_spanned(other, "expected a boolean literal").to_compile_error()),
    }
}

fn string_literal(name_value: &syn::MetaNameValue) -> Result<LitStr, TokenStream> {
    match literal(name_value, "string")? {
        Lit::Str(lit) => Ok(lit.clone()),
        other => Err(syn::Error::new_spanned(other, "expected a string literal").to_compile_error()),
    }
}

fn set_once<T>(current: Option<T>, token: &syn::MetaNameValue, value: T) -> Result<T, TokenStream> {
    if current.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument").to_compile_error());
    }
    Ok(value)
}

struct SerdeMetaInfo {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let mut tokens = Vec::new();
    if !derives.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        tokens.push(quote! { ::serde::Serialize });
    }
    if !derives.contains("Deserialize") {
        tokens.push(quote! { ::serde::Deserialize });
    }

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn rename_attr(
    rename_all: Option<LitStr>,
    serde_meta: &SerdeMetaInfo,
) -> Result<TokenStream, TokenStream> {
    let rename_all_value =
        rename_all.unwrap_or_else(|| LitStr::new("camelCase", proc_macro2::Span::call_site()));

    match &serde_meta.rename_all {
        Some(existing) if existing.value() != rename_all_value.value() => Err(
            syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
            )
            .to_compile_error(),
        ),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #rename_all_value)] }),
    }
}

fn deny_unknown_attr(
    deny_unknown_fields: Option<bool>,
    serde_meta: &SerdeMetaInfo,
    input: &ItemStruct,
) -> Result<TokenStream, TokenStream> {
    let deny_unknown = deny_unknown_fields.unwrap_or(true);
    if serde_meta.deny_unknown_fields {
        if !deny_unknown {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            )
            .to_compile_error());
        }
        return Ok(quote! {});
    }

    if deny_unknown { Ok(quote! { #[serde(deny_unknown_fields)] }) } else { Ok(quote! {}) }
}

fn serde_meta_info(attrs: &[Attribute]) -> Result<SerdeMetaInfo, TokenStream> {
    let mut rename_all = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                rename_all = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.input.peek(syn::Token![=]) {
                meta.value()?.parse::<syn::Expr>()?;
            } else if meta.input.peek(syn::token::Paren) {
                let _ = meta.parse_nested_meta(|inner| {
                    if inner.input.peek(syn::Token![=]) {
                        inner.value()?.parse::<syn::Expr>()?;
                    }
                    Ok(())
                });
            }
            Ok(())
        })
        .map_err(|err| err.to_compile_error())?;
    }

    Ok(SerdeMetaInfo { rename_all, deny_unknown_fields: serde_mentions(attrs, "deny_unknown_fields") })
}

fn omit_absent_options(fields: &mut Fields) {
    for field in fields.iter_mut().filter(|field| is_option(&field.ty)) {
        if serde_mentions(&field.attrs, "skip_serializing_if") {
            continue;
        }
        let attr: Attribute = if serde_mentions(&field.attrs, "default") {
            parse_quote! { #[serde(skip_serializing_if = "Option::is_none")] }
        } else {
            parse_quote! { #[serde(default, skip_serializing_if = "Option::is_none")] }
        };
        field.attrs.push(attr);
    }
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    path.qself.is_none() && path.path.segments.last().is_some_and(|seg| seg.ident == "Option")
}
