//! Serialization round trips, checked through `serde_json`.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::failure::{fail_not_equals, fail_with_cause};
use crate::named::{Named, named};

impl Named<'_> {
    /// Serializes and deserializes `object`, checks the copy equals and
    /// hashes like the original, and returns the copy.
    #[track_caller]
    pub fn assert_post_serialized_equals_and_hash_code<T>(&self, object: &T) -> T
    where
        T: Serialize + DeserializeOwned + PartialEq + Hash + Debug,
    {
        let json = self.serialize(object);
        let copy: T = match serde_json::from_str(&json) {
            Ok(copy) => copy,
            Err(err) => fail_with_cause(
                &format!("{}Failed to deserialize {}", self.prefix(), json),
                &err,
            ),
        };
        self.assert_equals_and_hash_code(object, &copy);
        copy
    }

    /// `object` serializes to exactly `expected`.
    #[track_caller]
    pub fn assert_serialized_form<T: Serialize + Debug>(&self, expected: &str, object: &T) {
        let actual = self.serialize(object);
        if actual != expected {
            fail_not_equals(
                &format!("{}Serialization was broken.", self.prefix()),
                expected,
                actual.as_str(),
            );
        }
    }

    #[track_caller]
    fn serialize<T: Serialize + Debug>(&self, object: &T) -> String {
        match serde_json::to_string(object) {
            Ok(json) => json,
            Err(err) => fail_with_cause(
                &format!("{}Failed to serialize {:?}", self.prefix(), object),
                &err,
            ),
        }
    }
}

#[track_caller]
pub fn assert_post_serialized_equals_and_hash_code<T>(object: &T) -> T
where
    T: Serialize + DeserializeOwned + PartialEq + Hash + Debug,
{
    named("objects").assert_post_serialized_equals_and_hash_code(object)
}

#[track_caller]
pub fn assert_serialized_form<T: Serialize + Debug>(expected: &str, object: &T) {
    named("").assert_serialized_form(expected, object);
}
