//! Structured appearance settings: expandable style and LED lights.
//!
//! Both types name the fields the gateway documents and keep any other key in `extra`, so
//! a descriptor round-trips without loss. Documented keys are only ever written from their
//! typed field; an `extra` entry under a documented key is dropped on output.

use crate::values::StyleKind;
use fcmkit_derive::api_model;
use serde::Serializer;
use serde_json::{Map, Value};

/// Expandable notification descriptor (`style`).
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq)]
pub struct Style {
    #[serde(rename = "type")]
    pub kind: Option<StyleKind>,
    /// Image location for [`StyleKind::Picture`].
    pub url: Option<String>,
    pub title: Option<String>,
    /// Body for [`StyleKind::BigText`].
    pub text: Option<String>,
    /// Rows for [`StyleKind::Inbox`].
    pub lines: Option<Vec<String>>,
    #[serde(flatten, serialize_with = "style_extra")]
    pub extra: Map<String, Value>,
}

impl Style {
    /// Keys owned by typed fields.
    pub const KEYS: [&'static str; 5] = ["type", "url", "title", "text", "lines"];

    #[must_use]
    pub fn new(kind: impl Into<StyleKind>) -> Self {
        Self { kind: Some(kind.into()), ..Self::default() }
    }

    #[must_use]
    pub fn picture(url: impl Into<String>) -> Self {
        Self { url: Some(url.into()), ..Self::new(StyleKind::Picture) }
    }

    #[must_use]
    pub fn bigtext(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Self::new(StyleKind::BigText) }
    }

    #[must_use]
    pub fn inbox<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Some(lines.into_iter().map(Into::into).collect()),
            ..Self::new(StyleKind::Inbox)
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// LED descriptor (`lights`): color plus on/off blink durations in milliseconds.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq)]
pub struct Lights {
    /// Color name or `#AARRGGBB` string, passed through as given.
    #[serde(alias = "led_argb")]
    pub led_argb: Option<String>,
    #[serde(alias = "led_on_ms")]
    pub led_on_ms: Option<u64>,
    #[serde(alias = "led_off_ms")]
    pub led_off_ms: Option<u64>,
    #[serde(flatten, serialize_with = "lights_extra")]
    pub extra: Map<String, Value>,
}

impl Lights {
    /// Keys owned by typed fields, input aliases included.
    pub const KEYS: [&'static str; 6] =
        ["ledArgb", "ledOnMs", "ledOffMs", "led_argb", "led_on_ms", "led_off_ms"];

    #[must_use]
    pub fn new(led_argb: impl Into<String>, led_on_ms: u64, led_off_ms: u64) -> Self {
        Self {
            led_argb: Some(led_argb.into()),
            led_on_ms: Some(led_on_ms),
            led_off_ms: Some(led_off_ms),
            extra: Map::new(),
        }
    }
}

fn style_extra<S: Serializer>(extra: &Map<String, Value>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(extra.iter().filter(|(key, _)| !Style::KEYS.contains(&key.as_str())))
}

fn lights_extra<S: Serializer>(extra: &Map<String, Value>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(extra.iter().filter(|(key, _)| !Lights::KEYS.contains(&key.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn picture_style_serializes_documented_keys() {
        let style = Style::picture("https://cdn.example/p.png").title("New photo");
        let value = serde_json::to_value(&style).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "picture_notification",
                "url": "https://cdn.example/p.png",
                "title": "New photo"
            })
        );
    }

    #[test]
    fn unknown_style_keys_pass_through() {
        let raw = json!({ "type": "media_notification", "artist": "Nobody", "lines": ["a"] });
        let style: Style = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(style.kind, Some(StyleKind::Other("media_notification".to_owned())));
        assert_eq!(style.extra.get("artist"), Some(&json!("Nobody")));
        assert_eq!(serde_json::to_value(&style).unwrap(), raw);
    }

    #[test]
    fn lights_use_camel_case_keys() {
        let value = serde_json::to_value(Lights::new("RED", 100, 200)).unwrap();
        assert_eq!(value, json!({ "ledArgb": "RED", "ledOnMs": 100, "ledOffMs": 200 }));
    }

    #[test]
    fn typed_style_fields_win_over_extra() {
        let mut style = Style::picture("u");
        style.extra.insert("type".to_owned(), json!("x"));
        style.extra.insert("text".to_owned(), json!("shadow"));
        style.extra.insert("artist".to_owned(), json!("Nobody"));

        let rendered = serde_json::to_string(&style).unwrap();
        assert_eq!(rendered.matches("\"type\"").count(), 1);
        assert!(!rendered.contains("shadow"));
        assert_eq!(
            serde_json::from_str::<Value>(&rendered).unwrap(),
            json!({ "type": "picture_notification", "url": "u", "artist": "Nobody" })
        );
    }

    #[test]
    fn lights_extra_never_duplicates_led_keys() {
        let mut lights = Lights::new("RED", 100, 200);
        lights.extra.insert("ledArgb".to_owned(), json!("BLUE"));
        lights.extra.insert("led_on_ms".to_owned(), json!(5));

        let rendered = serde_json::to_string(&lights).unwrap();
        let parsed: Lights = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, Lights::new("RED", 100, 200));
        assert_eq!(rendered.matches("ledArgb").count(), 1);
    }
}
