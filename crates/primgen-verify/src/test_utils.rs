use std::panic::{self, AssertUnwindSafe};

use crate::throws::panic_message;

/// Runs an assertion expected to fail and returns its message.
pub fn failure_of(assertion: impl FnOnce()) -> String {
    match panic::catch_unwind(AssertUnwindSafe(assertion)) {
        Ok(()) => panic!("assertion passed"),
        Err(payload) => panic_message(payload.as_ref()),
    }
}
