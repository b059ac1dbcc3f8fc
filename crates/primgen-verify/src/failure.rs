use std::error::Error;
use std::fmt::Debug;

/// Fails the calling test.
#[track_caller]
pub fn fail(message: &str) -> ! {
    panic!("{}", message)
}

/// Fails the calling test, appending the chain of `cause`.
#[track_caller]
pub fn fail_with_cause(message: &str, cause: &dyn Error) -> ! {
    let mut text = message.to_string();
    let mut next = Some(cause);
    while let Some(err) = next {
        text.push_str("\ncaused by: ");
        text.push_str(&err.to_string());
        next = err.source();
    }
    panic!("{}", text)
}

/// Fails with `message expected:<a> but was:<b>`.
#[track_caller]
pub fn fail_not_equals<E: Debug + ?Sized, A: Debug + ?Sized>(
    message: &str,
    expected: &E,
    actual: &A,
) -> ! {
    fail(&not_equals_message(message, expected, actual))
}

pub(crate) fn not_equals_message<E: Debug + ?Sized, A: Debug + ?Sized>(
    message: &str,
    expected: &E,
    actual: &A,
) -> String {
    let prefix = if message.is_empty() {
        String::new()
    } else {
        format!("{} ", message)
    };
    format!("{}expected:<{:?}> but was:<{:?}>", prefix, expected, actual)
}

/// Renders items as `[a, b, c]`.
pub(crate) fn fmt_items<'a, T: Debug + ?Sized + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    let items: Vec<String> = items.into_iter().map(|item| format!("{:?}", item)).collect();
    format!("[{}]", items.join(", "))
}

/// Panics unless `condition` holds.
#[track_caller]
pub(crate) fn check(condition: bool, message: impl FnOnce() -> String) {
    if !condition {
        fail(&message());
    }
}
