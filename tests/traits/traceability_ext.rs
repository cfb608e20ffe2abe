use std::cell::Cell;

use trace_rail::{
    Annotation, BoxError, Error, OperationFailed, Reason, ResultBase, Success, TraceabilityExt,
    Traced,
};

fn messages(reasons: &[Annotation]) -> Vec<&str> {
    reasons.iter().map(Annotation::message).collect()
}

#[test]
fn require_success_returns_the_same_result() {
    let ok = Traced::ok("payload").with_reason(Reason::new("fact"));
    let expected = ok.clone();

    assert_eq!(ok.require_success().unwrap(), expected);
}

#[test]
fn require_success_signals_failure_with_the_result() {
    let failed: Traced<u32> = Traced::fail("nope").with_reason(Reason::new("ctx"));
    let signal = failed.clone().require_success().unwrap_err();

    assert_eq!(signal.downcast_ref::<Traced<u32>>(), Some(&failed));
    assert_eq!(signal.message(), failed.to_string());
}

#[test]
fn require_success_crosses_an_error_only_boundary() {
    fn boundary() -> Result<(), BoxError> {
        let _checked = Traced::<()>::fail("inner").require_success()?;
        Ok(())
    }

    let error = boundary().unwrap_err();
    assert!(error.downcast_ref::<OperationFailed>().is_some());
}

#[test]
fn add_success_if_passed_appends_on_success() {
    let result = Traced::ok(1).add_success_if_passed([Success::new("s1"), Success::new("s2")]);
    assert_eq!(messages(result.reasons()), ["s1", "s2"]);
}

#[test]
fn add_success_if_passed_ignores_failure() {
    let failed: Traced<()> = Traced::fail("e");
    let before = failed.clone();

    assert_eq!(failed.add_success_if_passed([Success::new("s")]), before);
}

#[test]
fn add_success_handler_runs_only_on_success() {
    let calls = Cell::new(0);

    let ok = Traced::ok(()).add_success_if_passed_with(
        |result, successes| {
            calls.set(calls.get() + 1);
            for success in successes {
                result.reasons_mut().push(Annotation::Success(success.meta("via", "handler")));
            }
        },
        [Success::new("s")],
    );
    assert_eq!(calls.get(), 1);
    assert!(ok.successes().all(|s| s.metadata().contains_key("via")));

    let _failed = Traced::<()>::fail("e")
        .add_success_if_passed_with(|_, _| calls.set(calls.get() + 1), [Success::new("s")]);
    assert_eq!(calls.get(), 1);
}

#[test]
fn add_success_with_empty_sequence_changes_nothing() {
    let ok = Traced::ok(5);
    let before = ok.clone();

    assert_eq!(ok.add_success_if_passed(Vec::new()), before);
}

#[test]
fn add_reason_if_failed_appends_on_failure() {
    let result: Traced<()> = Traced::fail("e")
        .add_reason_if_failed([Reason::new("r1")])
        .add_reason_if_failed([Annotation::from(Success::new("partial"))]);

    assert_eq!(messages(result.reasons()), ["e", "r1", "partial"]);
}

#[test]
fn add_reason_if_failed_ignores_success() {
    let ok = Traced::ok(7);
    let before = ok.clone();

    assert_eq!(ok.add_reason_if_failed([Reason::new("r")]), before);
}

#[test]
fn add_reason_handler_runs_only_on_failure() {
    let calls = Cell::new(0);

    let failed: Traced<()> = Traced::fail("e").add_reason_if_failed_with(
        |result, reasons| {
            calls.set(calls.get() + 1);
            result.reasons_mut().extend(reasons.into_iter().rev());
        },
        [Reason::new("a"), Reason::new("b")],
    );
    assert_eq!(messages(failed.reasons()), ["e", "b", "a"]);

    let _ok = Traced::ok(()).add_reason_if_failed_with(|_, _| calls.set(99), [Reason::new("x")]);
    assert_eq!(calls.get(), 1);
}

#[test]
fn add_error_if_failed_appends_errors_directly() {
    let failed: Traced<()> =
        Traced::fail("e1").add_error_if_failed([Error::new("e2").caused_by("c")]);

    let errors: Vec<&Error> = failed.errors().collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[1].causes().len(), 1);

    let ok = Traced::ok(()).add_error_if_failed(["ignored"]);
    assert!(ok.is_success());
    assert!(ok.reasons().is_empty());
}

#[test]
fn get_non_errors_skips_errors() {
    let failed: Traced<()> = Traced::fail("e1")
        .with_reason(Reason::new("r1"))
        .with_error("e2")
        .with_reason(Reason::new("r2"));

    assert_eq!(messages(&failed.get_non_errors()), ["r1", "r2"]);
}

#[test]
fn get_non_errors_appends_to_accumulator() {
    let ok = Traced::ok(()).with_success(Success::new("s"));
    let seeded = vec![Annotation::from(Reason::new("seed"))];

    assert_eq!(messages(&ok.get_non_errors_into(Some(seeded))), ["seed", "s"]);
    assert_eq!(messages(&ok.get_non_errors_into(None)), ["s"]);
}

#[test]
fn unwrapped_views_split_the_flat_chain() {
    let inner: Traced<()> = Traced::fail("disk full").with_success(Success::new("wal synced"));
    let outer: Traced<()> =
        Traced::fail(OperationFailed::new(inner)).with_reason(Reason::new("retry 3"));

    let errors: Vec<String> = outer.unwrapped_errors().iter().map(|e| e.to_string()).collect();
    let successes: Vec<String> =
        outer.unwrapped_successes().iter().map(|s| s.to_string()).collect();

    assert_eq!(errors, ["disk full"]);
    assert_eq!(successes, ["wal synced"]);
}

#[test]
fn causal_chain_renders_flattened_reasons() {
    let inner: Traced<()> = Traced::fail("disk full");
    let outer: Traced<()> =
        Traced::fail(OperationFailed::new(inner)).with_reason(Reason::new("retry 3"));

    let rendered = outer.causal_chain(&trace_rail::ChainFormatConfig::compact());
    assert_eq!(rendered, "disk full | retry 3");
}
