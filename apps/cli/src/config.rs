use config::{Config, Environment, File};
use fcmkit::FcmOptions;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Environment prefix for option overrides (`FCMKIT__TIME_TO_LIVE=60`).
pub const ENV_PREFIX: &str = "FCMKIT";

/// Custom error type for options loading.
#[fcmkit_derive::fcmkit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads [`FcmOptions`] from an optional file with environment overrides on top.
///
/// Layers, lowest first:
/// 1. **File**: `path`, format picked by extension. Keys are snake_case (`time_to_live`).
/// 2. **Environment**: variables prefixed with `FCMKIT__`; nested values use `__`
///    (e.g. `FCMKIT__LIGHTS__LED_ARGB=RED`). Scalars are parsed, so `FCMKIT__SYNC=true`
///    is a boolean.
///
/// Variable names are lowercased and every `__`-separated segment is snake-cased, nested
/// ones included: `FCMKIT__PAYLOAD__ORDER_ID=7` yields the payload `{"order_id":7}`. A
/// payload with camelCase or otherwise case-sensitive keys has to come from the file or the
/// `--payload` flag.
///
/// With no file and no variables the result is empty options.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the merged
/// layers do not describe valid options (unknown keys, mistyped values).
pub fn load_options(path: Option<&Path>) -> Result<FcmOptions, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!("Loading FCM options from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let options = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build options sources")?
        .try_deserialize::<FcmOptions>()
        .context("Failed to deserialize options")?;

    debug!(keys = ?options.keys(), "Loaded FCM options");
    Ok(options)
}
