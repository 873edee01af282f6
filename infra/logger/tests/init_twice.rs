use fcmkit_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_reports_subscriber_conflict() {
    let _first = Logger::builder().name("fcmkit-first").init().expect("first init should succeed");

    let err = Logger::builder()
        .name("fcmkit-second")
        .level(LevelFilter::TRACE)
        .init()
        .expect_err("a second global subscriber must be refused");

    assert!(matches!(err, LoggerError::Subscriber { context: None, .. }), "got {err}");
}
