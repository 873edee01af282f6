use fcmkit_fcm::prelude::*;
use proptest::prelude::*;
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
enum Setting {
    DelayWhileIdle(bool),
    TimeToLive(u64),
    CollapseKey(String),
    Payload(Value),
    Sync(bool),
    Sound(String),
    InteractiveCategory(String),
    Priority(String),
    Style(Style),
    Visibility(String),
    Icon(String),
    Lights(Lights),
    Kind(String),
    AndroidTitle(String),
    GroupId(String),
}

impl Setting {
    fn apply(self, builder: FcmBuilder) -> FcmBuilder {
        match self {
            Self::DelayWhileIdle(v) => builder.delay_while_idle(v),
            Self::TimeToLive(v) => builder.time_to_live(v),
            Self::CollapseKey(v) => builder.collapse_key(v),
            Self::Payload(v) => builder.payload(v),
            Self::Sync(v) => builder.sync(v),
            Self::Sound(v) => builder.sound(v),
            Self::InteractiveCategory(v) => builder.interactive_category(v),
            Self::Priority(v) => builder.priority(v),
            Self::Style(v) => builder.style(v),
            Self::Visibility(v) => builder.visibility(v),
            Self::Icon(v) => builder.icon(v),
            Self::Lights(v) => builder.lights(v),
            Self::Kind(v) => builder.kind(v),
            Self::AndroidTitle(v) => builder.android_title(v),
            Self::GroupId(v) => builder.group_id(v),
        }
    }
}

fn payload() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".*".prop_map(Value::from),
        ("[a-zA-Z]{1,8}", any::<u32>())
            .prop_map(|(key, n)| Value::Object(Map::from_iter([(key, Value::from(n))]))),
        prop::collection::vec(".*", 0..4).prop_map(Value::from),
    ]
}

fn style() -> impl Strategy<Value = Style> {
    (".*", ".*", "x_[a-z]{1,6}", ".*", prop::collection::vec(".*", 0..3)).prop_map(
        |(kind, title, key, extra, lines)| {
            let mut style = Style::new(kind).title(title);
            style.lines = Some(lines);
            style.extra.insert(key, Value::from(extra));
            style
        },
    )
}

fn lights() -> impl Strategy<Value = Lights> {
    (".*", any::<u64>(), any::<u64>()).prop_map(|(argb, on, off)| Lights::new(argb, on, off))
}

fn one_of_each() -> impl Strategy<Value = Vec<Setting>> {
    (
        (any::<bool>(), any::<u64>(), ".*", payload(), any::<bool>()),
        (".*", ".*", ".*", style(), ".*"),
        (".*", lights(), ".*", ".*", ".*"),
    )
        .prop_map(|((d, t, c, pl, sy), (so, ic, p, st, v), (i, l, k, at, g))| {
            vec![
                Setting::DelayWhileIdle(d),
                Setting::TimeToLive(t),
                Setting::CollapseKey(c),
                Setting::Payload(pl),
                Setting::Sync(sy),
                Setting::Sound(so),
                Setting::InteractiveCategory(ic),
                Setting::Priority(p),
                Setting::Style(st),
                Setting::Visibility(v),
                Setting::Icon(i),
                Setting::Lights(l),
                Setting::Kind(k),
                Setting::AndroidTitle(at),
                Setting::GroupId(g),
            ]
        })
}

fn build(settings: Vec<Setting>) -> FcmOptions {
    settings.into_iter().fold(FcmBuilder::new(), |b, s| s.apply(b)).build()
}

proptest! {
    #[test]
    fn string_settings_are_preserved_exactly(raw in ".*") {
        let options = FcmBuilder::new()
            .sound(raw.clone())
            .priority(raw.as_str())
            .kind(raw.clone())
            .build();

        let value = options.to_value().unwrap();
        prop_assert_eq!(value["sound"].as_str(), Some(raw.as_str()));
        prop_assert_eq!(value["priority"].as_str(), Some(raw.as_str()));
        prop_assert_eq!(value["type"].as_str(), Some(raw.as_str()));
    }

    #[test]
    fn second_write_replaces_first(first in any::<u64>(), second in any::<u64>(), a in ".*", b in ".*") {
        let options = FcmBuilder::new()
            .time_to_live(first)
            .group_id(a)
            .time_to_live(second)
            .group_id(b.clone())
            .build();

        prop_assert_eq!(options.len(), 2);
        prop_assert_eq!(options.time_to_live, Some(second));
        prop_assert_eq!(options.group_id.as_deref(), Some(b.as_str()));
    }

    #[test]
    fn distinct_settings_commute((ordered, shuffled) in one_of_each().prop_flat_map(|v| {
        (Just(v.clone()), Just(v).prop_shuffle())
    })) {
        prop_assert_eq!(build(ordered), build(shuffled));
    }

    #[test]
    fn json_round_trip_is_lossless(settings in one_of_each()) {
        let options = build(settings);
        prop_assert_eq!(options.len(), 15);
        let parsed = FcmOptions::from_json(&options.to_json().unwrap()).unwrap();
        prop_assert_eq!(parsed.keys(), options.keys());
        prop_assert_eq!(parsed, options);
    }

    #[test]
    fn any_payload_round_trips(value in payload()) {
        let options = FcmBuilder::new().payload(value.clone()).build();
        let parsed = FcmOptions::from_json(&options.to_json().unwrap()).unwrap();
        prop_assert_eq!(parsed.payload, Some(value));
    }
}
