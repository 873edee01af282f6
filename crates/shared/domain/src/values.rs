//! String-valued settings with a documented value set.
//!
//! Each enum lists the values the gateway documents and an `Other` variant that carries any
//! other string verbatim. Parsing never fails and serialization writes back the exact input,
//! so a value the gateway later adds (or a typo) reaches it unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, strum_macros::EnumIs)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the documented set, kept as given.
            Other(String),
        }

        impl $name {
            /// The documented values, in gateway order.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            /// `false` for values carried through [`Self::Other`].
            #[must_use]
            pub const fn is_known(&self) -> bool {
                !self.is_other()
            }

            fn documented(raw: &str) -> Option<Self> {
                match raw {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(raw))
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::documented(raw).unwrap_or_else(|| Self::Other(raw.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::documented(&raw).unwrap_or(Self::Other(raw))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

open_enum! {
    /// Delivery priority hint. `High`/`Max` together with a sound may surface as a heads-up
    /// notification on Android 5.0+.
    Priority {
        Max => "max",
        High => "high",
        Default => "default",
        Low => "low",
        Min => "min",
    }
}

open_enum! {
    /// How much of the notification is revealed on a secure lock screen.
    Visibility {
        Private => "private",
        Public => "public",
    }
}

open_enum! {
    /// Notification behavior class. `Silent` delivers data without user-visible alerting.
    NotificationType {
        Default => "DEFAULT",
        Silent => "SILENT",
    }
}

open_enum! {
    /// Expandable notification layout.
    StyleKind {
        Picture => "picture_notification",
        BigText => "bigtext_notification",
        Inbox => "inbox_notification",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_values_parse_to_variants() {
        assert_eq!(Priority::from("high"), Priority::High);
        assert_eq!(Visibility::from("public"), Visibility::Public);
        assert_eq!(NotificationType::from("SILENT"), NotificationType::Silent);
        assert_eq!(StyleKind::from("bigtext_notification"), StyleKind::BigText);
    }

    #[test]
    fn matching_is_exact() {
        let upper = Priority::from("HIGH");
        assert_eq!(upper, Priority::Other("HIGH".to_owned()));
        assert_eq!(upper.as_str(), "HIGH");
        assert!(!upper.is_known());

        assert_eq!(NotificationType::from(String::from("silent")).as_str(), "silent");
    }

    #[test]
    fn known_lists_every_documented_value() {
        let wire: Vec<&str> = Priority::KNOWN.iter().map(Priority::as_str).collect();
        assert_eq!(wire, ["max", "high", "default", "low", "min"]);
        assert!(Visibility::KNOWN.iter().all(Visibility::is_known));
    }

    #[test]
    fn every_conversion_path_agrees() {
        let owned = String::from("low");
        assert_eq!(Priority::from("low"), Priority::Low);
        assert_eq!(Priority::from(owned.clone()), Priority::Low);
        assert_eq!(owned.parse::<Priority>(), Ok(Priority::Low));
        assert_eq!(Priority::try_from("low"), Ok(Priority::Low));
        let into: Priority = "low".into();
        assert_eq!(into, Priority::Low);

        assert_eq!("urgent".parse::<Priority>(), Ok(Priority::Other("urgent".to_owned())));
        assert_eq!(Visibility::from(String::from("secret")), Visibility::Other("secret".to_owned()));
        assert!(StyleKind::from("carousel").is_other());
        assert!(NotificationType::from("SILENT").is_silent());
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(StyleKind::Inbox.to_string(), "inbox_notification");
        assert_eq!(Visibility::Other("secret".to_owned()).to_string(), "secret");
    }
}
