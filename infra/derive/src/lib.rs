#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the fcmkit crates.
//!
//! * [`macro@api_model`] stamps the serde policy used by every wire-facing data type.
//! * [`macro@fcmkit_error`] turns a plain enum into a `thiserror` error with context support.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! fcmkit-derive = { path = "../infra/derive" }
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot depend on `serde`
//! at doc-test time; see `tests/` for compiled usage.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for wire-facing data models.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `Debug`, `Serialize` and `Deserialize` if missing.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled, e.g. for `#[serde(flatten)]`).
///     * every `Option<_>` field gets `#[serde(default, skip_serializing_if = "Option::is_none")]`
///       so unset values never reach the output (can be disabled with `skip_none = false`).
///
/// # Arguments
///
/// * `rename_all = "snake_case"` - Overrides the default Serde rename policy.
/// * `deny_unknown_fields = false` - Disables strict field checking.
/// * `skip_none = false` - Serializes `None` as `null` instead of omitting it.
///
/// # Example
///
/// ```rust,ignore
/// use fcmkit_derive::api_model;
///
/// #[api_model]
/// #[derive(Clone, Default)]
/// pub struct Options {
///     pub collapse_key: Option<String>,
///     pub time_to_live: Option<u64>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. `context`, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[fcmkit_derive::fcmkit_error]
/// pub enum RenderError {
///     #[error("JSON error{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn render(v: &serde_json::Value) -> Result<String, RenderError> {
///     serde_json::to_string(v).context("Rendering options")
/// }
/// ```
#[proc_macro_attribute]
pub fn fcmkit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
