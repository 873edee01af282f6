//! # FCM Options
//!
//! Builds the Android (FCM) section of a push notification request.
//!
//! [`FcmBuilder`] accumulates settings through chained calls and [`FcmBuilder::build`] returns
//! an [`FcmOptions`] snapshot. The snapshot serializes to the object a push gateway expects
//! under its Android platform key: camelCase keys, only the settings that were set, values
//! exactly as given.
//!
//! Nothing here talks to a gateway or validates values against its schema; that is the
//! receiving side's job. [`FcmOptions::unrecognized`] lists undocumented enum strings for
//! callers that want to warn about them.
//!
//! ## Example
//!
//! ```rust
//! use fcmkit_fcm::prelude::*;
//!
//! # fn main() -> Result<(), FcmError> {
//! let options = FcmOptions::builder()
//!     .collapse_key("promo")
//!     .time_to_live(3600)
//!     .priority(Priority::High)
//!     .build();
//!
//! assert_eq!(options.to_json()?, r#"{"timeToLive":3600,"collapseKey":"promo","priority":"high"}"#);
//!
//! let parsed = FcmOptions::from_json(r#"{"type":"SILENT"}"#)?;
//! assert_eq!(parsed.kind, Some(NotificationType::Silent));
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;

pub use crate::builder::FcmBuilder;
pub use crate::error::{FcmError, FcmErrorExt};
pub use fcmkit_domain::{
    FcmOptions, Lights, NotificationType, Priority, Style, StyleKind, Visibility,
};

use serde_json::Value;
use tracing::debug;

/// Builder entry points and JSON helpers for [`FcmOptions`].
pub trait OptionsExt: Sized {
    /// Starts an empty [`FcmBuilder`].
    fn builder() -> FcmBuilder;

    /// Continues building from a copy of these options.
    fn to_builder(&self) -> FcmBuilder;

    /// Renders the options as a JSON value.
    ///
    /// # Errors
    /// Returns [`FcmError::Json`] if a nested value cannot be represented.
    fn to_value(&self) -> Result<Value, FcmError>;

    /// Renders compact JSON text.
    ///
    /// # Errors
    /// Returns [`FcmError::Json`] if a nested value cannot be represented.
    fn to_json(&self) -> Result<String, FcmError>;

    /// Renders indented JSON text.
    ///
    /// # Errors
    /// Returns [`FcmError::Json`] if a nested value cannot be represented.
    fn to_json_pretty(&self) -> Result<String, FcmError>;

    /// Parses an options object; unknown keys are rejected.
    ///
    /// # Errors
    /// Returns [`FcmError::Json`] for malformed JSON, unknown keys or mistyped values.
    fn from_json(raw: &str) -> Result<Self, FcmError>;
}

impl OptionsExt for FcmOptions {
    fn builder() -> FcmBuilder {
        FcmBuilder::new()
    }

    fn to_builder(&self) -> FcmBuilder {
        FcmBuilder::from(self.clone())
    }

    fn to_value(&self) -> Result<Value, FcmError> {
        serde_json::to_value(self).context("Rendering FCM options")
    }

    fn to_json(&self) -> Result<String, FcmError> {
        let json = serde_json::to_string(self).context("Rendering FCM options")?;
        debug!(bytes = json.len(), fields = self.len(), "Rendered FCM options");
        Ok(json)
    }

    fn to_json_pretty(&self) -> Result<String, FcmError> {
        serde_json::to_string_pretty(self).context("Rendering FCM options")
    }

    fn from_json(raw: &str) -> Result<Self, FcmError> {
        serde_json::from_str(raw).context("Parsing FCM options")
    }
}

pub mod prelude {
    pub use crate::builder::FcmBuilder;
    pub use crate::error::{FcmError, FcmErrorExt};
    pub use crate::OptionsExt;
    pub use fcmkit_domain::{
        FcmOptions, Lights, NotificationType, Priority, Style, StyleKind, Visibility,
    };
}
