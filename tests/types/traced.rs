use trace_rail::{Error, Reason, Success, Traced};

#[test]
fn status_follows_attached_errors() {
    let ok = Traced::ok(1).with_reason(Reason::new("fact")).with_success(Success::new("win"));
    assert!(ok.is_success());
    assert_eq!(ok.value(), Some(&1));

    let failed = ok.with_error("late failure");
    assert!(failed.is_failed());
    assert_eq!(failed.value(), None);
    assert_eq!(failed.into_value(), None);
}

#[test]
fn fail_with_keeps_error_order() {
    let failed: Traced<()> = Traced::fail_with(["first", "second"]);
    let messages: Vec<&str> = failed.errors().map(Error::message).collect();

    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn fail_with_nothing_is_not_failed() {
    let empty: Traced<()> = Traced::fail_with(Vec::<Error>::new());

    assert!(empty.is_success());
    assert_eq!(empty.value(), None);
    assert_eq!(empty.into_result(), Err(Vec::new()));
}

#[test]
fn try_with_captures_errors() {
    let parsed = Traced::try_with(|| "42".parse::<u8>());
    assert_eq!(parsed.into_value(), Some(42));

    let broken = Traced::try_with(|| "x".parse::<u8>());
    let errors: Vec<&Error> = broken.errors().collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].exception().is_some());
}

#[test]
fn from_result_captures_err() {
    let traced: Traced<u8> = Err::<u8, _>(std::io::Error::other("closed")).into();

    assert!(traced.is_failed());
    assert_eq!(traced.errors().next().map(Error::message), Some("closed"));
}

#[test]
fn into_result_keeps_only_errors() {
    let failed: Traced<u8> = Traced::fail("bad")
        .with_reason(Reason::new("context"))
        .with_success(Success::new("partial"));

    let errors = failed.into_result().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "bad");

    assert_eq!(Traced::ok(3).into_result().unwrap(), 3);
}

#[test]
fn bulk_builders_append_in_order() {
    let traced: Traced<()> = Traced::ok(())
        .with_reasons([Reason::new("a"), Reason::new("b")])
        .with_successes(["c", "d"])
        .with_errors(["e"]);

    let messages: Vec<&str> = traced.reasons().iter().map(|r| r.message()).collect();
    assert_eq!(messages, ["a", "b", "c", "d", "e"]);
    assert_eq!(traced.successes().count(), 2);
}
