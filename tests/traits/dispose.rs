use std::cell::RefCell;
use std::rc::Rc;

use trace_rail::traits::{dispose_all, Dispose, DisposeAll};

struct Handle {
    name: &'static str,
    fail: bool,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Handle {
    fn new(name: &'static str, fail: bool, log: &Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self { name, fail, log: Rc::clone(log) }
    }
}

impl Dispose for Handle {
    type Error = std::io::Error;

    fn dispose(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(self.name);
        if self.fail {
            Err(std::io::Error::other(format!("{} refused to close", self.name)))
        } else {
            Ok(())
        }
    }
}

#[test]
fn disposes_in_sequence_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut handles = vec![
        Handle::new("a", false, &log),
        Handle::new("b", false, &log),
        Handle::new("c", false, &log),
    ];

    let released = dispose_all(&mut handles);

    assert!(released.is_success());
    assert!(released.reasons().is_empty());
    assert_eq!(*log.borrow(), ["a", "b", "c"]);
}

#[test]
fn empty_sequence_is_a_no_op() {
    let mut handles: Vec<Handle> = Vec::new();
    assert!(dispose_all(&mut handles).is_success());
}

#[test]
fn failure_does_not_stop_later_items() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut handles = [
        Handle::new("a", false, &log),
        Handle::new("b", true, &log),
        Handle::new("c", false, &log),
    ];

    let released = handles.dispose_all();

    assert_eq!(*log.borrow(), ["a", "b", "c"]);
    assert!(released.is_failed());

    let errors: Vec<_> = released.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "b refused to close");
    assert_eq!(errors[0].metadata().get("index").and_then(|v| v.as_u64()), Some(1));
    assert!(errors[0].exception().is_some());
}

#[test]
fn every_failure_is_reported() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut handles = [Handle::new("a", true, &log), Handle::new("b", true, &log)];

    let released = handles.dispose_all();
    let indices: Vec<u64> = released
        .errors()
        .filter_map(|e| e.metadata().get("index").and_then(|v| v.as_u64()))
        .collect();

    assert_eq!(indices, [0, 1]);
}

#[test]
fn each_item_is_disposed_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut handles = [Handle::new("only", false, &log)];

    let _ = handles.dispose_all();

    assert_eq!(log.borrow().len(), 1);
}
