use fcmkit_domain::{FcmOptions, Lights, NotificationType, Priority, Style, Visibility};
use serde_json::json;

#[test]
fn full_options_match_gateway_shape() {
    let options = FcmOptions {
        collapse_key: Some("promo".to_owned()),
        time_to_live: Some(3600),
        priority: Some(Priority::High),
        visibility: Some(Visibility::Public),
        kind: Some(NotificationType::Default),
        style: Some(Style::inbox(["one", "two"]).title("Inbox")),
        lights: Some(Lights::new("#FF00FF00", 500, 1500)),
        payload: Some(json!({ "orderId": 17, "nested": { "ok": true } })),
        ..FcmOptions::default()
    };

    let value = serde_json::to_value(&options).expect("serialize");
    assert_eq!(
        value,
        json!({
            "collapseKey": "promo",
            "timeToLive": 3600,
            "priority": "high",
            "visibility": "public",
            "type": "DEFAULT",
            "style": { "type": "inbox_notification", "lines": ["one", "two"], "title": "Inbox" },
            "lights": { "ledArgb": "#FF00FF00", "ledOnMs": 500, "ledOffMs": 1500 },
            "payload": { "orderId": 17, "nested": { "ok": true } }
        })
    );
}

#[test]
fn gateway_json_parses_back() {
    let raw = json!({
        "delayWhileIdle": true,
        "sync": false,
        "sound": "chime.mp3",
        "interactiveCategory": "reply",
        "icon": "ic_stat",
        "androidTitle": "Hello",
        "groupId": "g1",
        "priority": "urgent"
    });

    let options: FcmOptions = serde_json::from_value(raw.clone()).expect("parse");
    assert_eq!(options.priority, Some(Priority::Other("urgent".to_owned())));
    assert_eq!(options.len(), 8);
    assert_eq!(serde_json::to_value(&options).expect("serialize"), raw);
}
