use crate::appearance::{Lights, Style};
use crate::values::{NotificationType, Priority, Visibility};
use fcmkit_derive::api_model;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Android (FCM) settings of a push notification.
///
/// Every field is optional and only the fields that are set appear in the serialized object,
/// under the gateway's camelCase keys. Multi-word keys also accept their snake_case spelling
/// on input, so the same struct can be read from configuration files and environment layers.
#[api_model]
#[derive(Clone, Default, PartialEq)]
pub struct FcmOptions {
    /// Hold the message until the device becomes active.
    #[serde(alias = "delay_while_idle")]
    pub delay_while_idle: Option<bool>,
    /// Seconds the gateway keeps the message while the device is offline.
    #[serde(alias = "time_to_live")]
    pub time_to_live: Option<u64>,
    /// Groups messages; only the latest one per key is delivered.
    #[serde(alias = "collapse_key")]
    pub collapse_key: Option<String>,
    /// Custom data delivered with the notification. An explicit `null` is a set value.
    #[serde(default, deserialize_with = "present")]
    pub payload: Option<Value>,
    /// Device-group message sync.
    pub sync: Option<bool>,
    /// Sound asset bundled with the client app.
    pub sound: Option<String>,
    /// Category identifier for interactive notifications.
    #[serde(alias = "interactive_category")]
    pub interactive_category: Option<String>,
    pub priority: Option<Priority>,
    pub style: Option<Style>,
    pub visibility: Option<Visibility>,
    /// Icon asset bundled with the client app.
    pub icon: Option<String>,
    pub lights: Option<Lights>,
    #[serde(rename = "type")]
    pub kind: Option<NotificationType>,
    #[serde(alias = "android_title")]
    pub android_title: Option<String>,
    /// Notifications sharing this key may be stacked by the device.
    #[serde(alias = "group_id")]
    pub group_id: Option<String>,
}

/// Maps any present value, `null` included, to `Some`; only a missing key stays `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Wire keys in declaration order.
pub const KEYS: [&str; 15] = [
    "delayWhileIdle",
    "timeToLive",
    "collapseKey",
    "payload",
    "sync",
    "sound",
    "interactiveCategory",
    "priority",
    "style",
    "visibility",
    "icon",
    "lights",
    "type",
    "androidTitle",
    "groupId",
];

impl FcmOptions {
    /// Wire keys of the fields that are set, in declaration order.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        KEYS.iter().zip(self.presence()).filter_map(|(key, set)| set.then_some(*key)).collect()
    }

    /// Number of fields that are set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presence().into_iter().filter(|set| *set).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies every field set in `other` over `self`.
    pub fn merge(&mut self, other: Self) {
        macro_rules! take {
            ($($field:ident),+) => { $( if other.$field.is_some() { self.$field = other.$field; } )+ };
        }
        take!(
            delay_while_idle,
            time_to_live,
            collapse_key,
            payload,
            sync,
            sound,
            interactive_category,
            priority,
            style,
            visibility,
            icon,
            lights,
            kind,
            android_title,
            group_id
        );
    }

    /// Enum settings holding a value outside the documented set, as `(wire key, value)`.
    ///
    /// Advisory only: such values are still emitted verbatim.
    #[must_use]
    pub fn unrecognized(&self) -> Vec<(&'static str, String)> {
        let mut found = Vec::new();
        if let Some(p) = self.priority.as_ref().filter(|p| !p.is_known()) {
            found.push(("priority", p.to_string()));
        }
        if let Some(v) = self.visibility.as_ref().filter(|v| !v.is_known()) {
            found.push(("visibility", v.to_string()));
        }
        if let Some(k) = self.kind.as_ref().filter(|k| !k.is_known()) {
            found.push(("type", k.to_string()));
        }
        if let Some(kind) = self.style.as_ref().and_then(|s| s.kind.as_ref()).filter(|k| !k.is_known())
        {
            found.push(("style.type", kind.to_string()));
        }
        found
    }

    fn presence(&self) -> [bool; 15] {
        [
            self.delay_while_idle.is_some(),
            self.time_to_live.is_some(),
            self.collapse_key.is_some(),
            self.payload.is_some(),
            self.sync.is_some(),
            self.sound.is_some(),
            self.interactive_category.is_some(),
            self.priority.is_some(),
            self.style.is_some(),
            self.visibility.is_some(),
            self.icon.is_some(),
            self.lights.is_some(),
            self.kind.is_some(),
            self.android_title.is_some(),
            self.group_id.is_some(),
        ]
    }
}
