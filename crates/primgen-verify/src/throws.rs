//! Assertions on failing blocks.
//!
//! A block fails either by returning `Err`, checked by [`assert_throws`], or
//! by panicking, checked by [`assert_error`].

use std::any::{Any, TypeId, type_name};
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

use crate::failure::fail;
use crate::named::{Named, named};

impl Named<'_> {
    /// `block` returns an error of type `E`, which is returned.
    #[track_caller]
    pub fn assert_throws<E, T>(&self, block: impl FnOnce() -> Result<T, Box<dyn Error>>) -> Box<E>
    where
        E: Error + 'static,
    {
        let err = match block() {
            Ok(_) => fail(&format!(
                "{}Block did not throw an exception of type {}",
                self.prefix(),
                type_name::<E>()
            )),
            Err(err) => err,
        };
        match err.downcast::<E>() {
            Ok(err) => err,
            Err(other) => fail(&format!(
                "{}Caught exception <{:?}>, expected one of type <{}>\nException Message: {}",
                self.prefix(),
                other,
                type_name::<E>(),
                other
            )),
        }
    }

    /// Like [`Named::assert_throws`], and the error's source has type `C`.
    #[track_caller]
    pub fn assert_throws_with_cause<E, C, T>(
        &self,
        block: impl FnOnce() -> Result<T, Box<dyn Error>>,
    ) -> Box<E>
    where
        E: Error + 'static,
        C: Error + 'static,
    {
        let err = self.assert_throws::<E, T>(block);
        let mismatch = match err.source() {
            None => Some(format!(
                "{}Caught exception with null cause, expected cause of type <{}>",
                self.prefix(),
                type_name::<C>()
            )),
            Some(cause) if !cause.is::<C>() => Some(format!(
                "{}Caught exception with cause <{:?}>, expected cause of type <{}>",
                self.prefix(),
                cause,
                type_name::<C>()
            )),
            Some(_) => None,
        };
        if let Some(message) = mismatch {
            fail(&message);
        }
        err
    }

    /// `block` panics with a payload of type `P`, which is returned.
    ///
    /// A panic message matches `String` whether it was formatted at run time
    /// or folded into a `&'static str` at compile time.
    #[track_caller]
    pub fn assert_error<P: Any>(&self, block: impl FnOnce()) -> Box<P> {
        let payload = match panic::catch_unwind(AssertUnwindSafe(block)) {
            Ok(()) => fail(&format!(
                "{}Block did not throw an error of type {}",
                self.prefix(),
                type_name::<P>()
            )),
            Err(payload) => payload,
        };
        let payload: Box<dyn Any + Send> = match payload.downcast::<&'static str>() {
            Ok(text) if TypeId::of::<P>() == TypeId::of::<String>() => Box::new(text.to_string()),
            Ok(text) => text,
            Err(other) => other,
        };
        match payload.downcast::<P>() {
            Ok(payload) => payload,
            Err(other) => fail(&format!(
                "{}Caught error <{}>, expected one of type <{}>",
                self.prefix(),
                panic_message(other.as_ref()),
                type_name::<P>()
            )),
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "<non-string payload>".to_string()
    }
}

#[track_caller]
pub fn assert_throws<E, T>(block: impl FnOnce() -> Result<T, Box<dyn Error>>) -> Box<E>
where
    E: Error + 'static,
{
    named("").assert_throws::<E, T>(block)
}

#[track_caller]
pub fn assert_throws_with_cause<E, C, T>(block: impl FnOnce() -> Result<T, Box<dyn Error>>) -> Box<E>
where
    E: Error + 'static,
    C: Error + 'static,
{
    named("").assert_throws_with_cause::<E, C, T>(block)
}

#[track_caller]
pub fn assert_error<P: Any>(block: impl FnOnce()) -> Box<P> {
    named("").assert_error::<P>(block)
}
