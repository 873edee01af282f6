//! # Domain Models
//!
//! Pure FCM option types with minimal dependencies (`serde`, `serde_json`, `strum_macros`).
//! Keep it lean: no I/O and no building logic, just data and simple helpers.

pub mod appearance;
pub mod options;
pub mod values;

pub use appearance::{Lights, Style};
pub use options::FcmOptions;
pub use values::{NotificationType, Priority, StyleKind, Visibility};
