use trace_rail::{metadata, Annotation, Error, Reason, Success};

mod formatting;
mod traced;

#[test]
fn reason_keeps_message_and_metadata() {
    let reason = Reason::from_parts("slow query", Some(metadata! { "ms" => 812u64 }));

    assert_eq!(reason.message(), "slow query");
    assert_eq!(reason.metadata().get("ms").and_then(|v| v.as_u64()), Some(812));
    assert_eq!(reason.to_string(), "slow query");
}

#[test]
fn missing_metadata_becomes_empty() {
    let reason = Reason::from_parts("plain", None);
    let success = Success::from_parts("done", None);
    let error = Error::from_parts("broken", None, None);

    assert!(reason.metadata().is_empty());
    assert!(success.metadata().is_empty());
    assert!(error.metadata().is_empty());
    assert!(error.causes().is_empty());
}

#[test]
fn empty_message_is_accepted() {
    let reason = Reason::new("");
    assert_eq!(reason.message(), "");
    assert_eq!(Reason::default().message(), "");
}

#[test]
fn created_at_is_recorded_at_construction() {
    let before = std::time::SystemTime::now();
    let reason = Reason::new("stamped");
    let after = std::time::SystemTime::now();

    assert!(reason.created_at() >= before);
    assert!(reason.created_at() <= after);
}

#[test]
fn error_causes_keep_order() {
    let error = Error::from_parts(
        "checkout failed",
        None,
        Some(vec![Error::new("card declined"), Error::new("retry budget exhausted")]),
    )
    .caused_by("ledger locked");

    let messages: Vec<&str> = error.causes().iter().map(Error::message).collect();
    assert_eq!(messages, ["card declined", "retry budget exhausted", "ledger locked"]);
}

#[test]
fn error_walk_visits_parents_first() {
    let error = Error::new("root")
        .caused_by(Error::new("a").caused_by("a1"))
        .caused_by(Error::new("b"));

    let visited: Vec<&str> = error.walk().map(Error::message).collect();
    assert_eq!(visited, ["root", "a", "a1", "b"]);
}

#[test]
fn error_source_follows_first_cause() {
    use std::error::Error as _;

    let error = Error::new("outer").caused_by("inner");
    let source = error.source().map(|s| s.to_string());

    assert_eq!(source.as_deref(), Some("inner"));
    assert!(Error::new("leaf").source().is_none());
}

#[test]
fn exceptional_error_exposes_captured_value() {
    use std::error::Error as _;

    let error = Error::exceptional(std::io::Error::other("disk full"));

    assert_eq!(error.message(), "disk full");
    assert!(error.signal().is_none());
    assert_eq!(error.source().map(|s| s.to_string()).as_deref(), Some("disk full"));
}

#[test]
fn success_shares_reason_fields() {
    let success = Success::new("cache warmed").meta("entries", 120u32);

    assert_eq!(success.message(), "cache warmed");
    assert_eq!(success.reason().metadata().len(), 1);
}

#[test]
fn annotation_variants_classify() {
    let reason: Annotation = Reason::new("fact").into();
    let error: Annotation = Error::new("cause").into();
    let success: Annotation = Success::new("win").into();

    assert!(!reason.is_error() && !reason.is_success());
    assert!(error.is_error());
    assert!(success.is_success());
    assert_eq!(error.as_error().map(Error::message), Some("cause"));
    assert!(reason.as_success().is_none());
    assert!(error.boundary_signal().is_none());
}
