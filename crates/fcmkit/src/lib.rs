//! Facade crate for fcmkit.
//! Re-exports the domain models and the FCM builder so applications depend on one crate.
//! Keep this crate thin: it composes other crates and holds no logic of its own.
//!
//! ```rust
//! use fcmkit::prelude::*;
//!
//! let options = FcmOptions::builder().kind(NotificationType::Silent).build();
//! assert_eq!(options.to_json().unwrap(), r#"{"type":"SILENT"}"#);
//! ```

pub use fcmkit_domain as domain;
pub use fcmkit_fcm as fcm;

pub use fcmkit_fcm::{FcmBuilder, FcmError, FcmOptions, OptionsExt};

pub mod prelude {
    pub use fcmkit_fcm::prelude::*;
}

/// Wire keys of every recognized setting, in declaration order.
pub const SETTINGS: [&str; 15] = fcmkit_domain::options::KEYS;
