pub mod api;
pub mod error;

use fxhash::FxHashSet;
use proc_macro2::{TokenStream, TokenTree};
use quote::ToTokens;
use syn::Attribute;

/// Collects the trait names already listed in `#[derive(...)]` attributes.
pub(crate) fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.segments.last() {
                traits.insert(ident.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

/// Returns `true` if any `#[serde(...)]` attribute mentions `key`, at any nesting depth.
pub(crate) fn serde_mentions(attrs: &[Attribute], key: &str) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .any(|attr| stream_mentions(attr.meta.to_token_stream(), key))
}

fn stream_mentions(stream: TokenStream, key: &str) -> bool {
    stream.into_iter().any(|tt| match tt {
        TokenTree::Ident(ident) => ident == key,
        TokenTree::Group(group) => stream_mentions(group.stream(), key),
        _ => false,
    })
}
