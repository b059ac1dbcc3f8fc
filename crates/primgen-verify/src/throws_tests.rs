use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

use insta::assert_snapshot;

use crate::test_utils::failure_of;
use crate::{assert_error, assert_throws, assert_throws_with_cause, named};

#[derive(Debug, thiserror::Error)]
#[error("empty stack")]
struct EmptyStack;

#[derive(Debug, thiserror::Error)]
#[error("bad capacity")]
struct BadCapacity(#[source] ParseIntError);

#[derive(Debug)]
struct Uncaused;

impl fmt::Display for Uncaused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("uncaused")
    }
}

impl Error for Uncaused {}

fn pop(elements: &mut Vec<i32>) -> Result<i32, Box<dyn Error>> {
    elements.pop().ok_or_else(|| EmptyStack.into())
}

fn capacity(text: &str) -> Result<usize, Box<dyn Error>> {
    text.parse::<usize>().map_err(|err| BadCapacity(err).into())
}

#[test]
fn throws_returns_the_error() {
    let err = assert_throws::<EmptyStack, _>(|| pop(&mut vec![]));
    assert_eq!(err.to_string(), "empty stack");
}

#[test]
fn throws_fails_without_error() {
    let message = failure_of(|| {
        assert_throws::<EmptyStack, _>(|| pop(&mut vec![1]));
    });
    assert!(message.starts_with("Block did not throw an exception of type "));
    assert!(message.ends_with("EmptyStack"));
}

#[test]
fn throws_fails_on_other_error() {
    let message = failure_of(|| {
        assert_throws::<EmptyStack, _>(|| capacity("x"));
    });
    assert!(message.starts_with("Caught exception <BadCapacity("));
    assert!(message.ends_with("\nException Message: bad capacity"));
}

#[test]
fn throws_with_cause() {
    let err = assert_throws_with_cause::<BadCapacity, ParseIntError, _>(|| capacity("ten"));
    assert_eq!(err.to_string(), "bad capacity");

    let message = failure_of(|| {
        assert_throws_with_cause::<Uncaused, ParseIntError, ()>(|| Err(Uncaused.into()));
    });
    assert!(message.starts_with("Caught exception with null cause, expected cause of type <"));

    let message = failure_of(|| {
        assert_throws_with_cause::<BadCapacity, fmt::Error, _>(|| capacity("ten"));
    });
    assert!(message.starts_with("Caught exception with cause <ParseIntError"));
}

#[test]
fn error_catches_panics() {
    let payload = assert_error::<String>(|| panic!("index {} out of range", 3));
    assert_eq!(*payload, "index 3 out of range");

    let index = "7".parse::<usize>().unwrap();
    let payload = assert_error::<String>(|| panic!("index {index} out of range"));
    assert_eq!(*payload, "index 7 out of range");

    let payload = assert_error::<String>(|| panic!("empty"));
    assert_eq!(*payload, "empty");

    let payload = assert_error::<&str>(|| panic!("empty"));
    assert_eq!(*payload, "empty");
}

#[test]
fn named_failures_lead_with_the_name() {
    let message = failure_of(|| {
        named("pop").assert_throws::<EmptyStack, _>(|| pop(&mut vec![1]));
    });
    assert!(message.starts_with("pop: Block did not throw an exception of type "));

    let message = failure_of(|| {
        named("capacity").assert_throws_with_cause::<Uncaused, ParseIntError, ()>(|| Err(Uncaused.into()));
    });
    assert!(message.starts_with("capacity: Caught exception with null cause"));

    let message = failure_of(|| {
        named("drain").assert_error::<u32>(|| {});
    });
    assert_snapshot!(message, @"drain: Block did not throw an error of type u32");
}

#[test]
fn error_fails_without_panic() {
    let message = failure_of(|| {
        assert_error::<u32>(|| {});
    });
    assert_snapshot!(message, @"Block did not throw an error of type u32");
}

#[test]
fn error_fails_on_other_payload() {
    let message = failure_of(|| {
        assert_error::<u32>(|| panic!("boom"));
    });
    assert_snapshot!(message, @"Caught error <boom>, expected one of type <u32>");
}
