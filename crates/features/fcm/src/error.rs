use std::borrow::Cow;

/// Error types of the FCM options crate.
///
/// The builder itself never fails; only JSON rendering and parsing do.
#[fcmkit_derive::fcmkit_error]
pub enum FcmError {
    /// `serde_json` failure while rendering or parsing options.
    #[error("FCM options JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
