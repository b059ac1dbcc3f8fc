use std::any::{Any, type_name};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::failure::{check, fail, fail_not_equals, not_equals_message};
use crate::named::{Named, named};

impl Named<'_> {
    #[track_caller]
    pub fn assert_not_equals<T: PartialEq + Debug + ?Sized>(&self, item1: &T, item2: &T) {
        check(item1 != item2, || {
            format!(
                "{} should not be equal, item1:<{:?}>, item2:<{:?}>",
                self.name(),
                item1,
                item2
            )
        });
    }

    #[track_caller]
    pub fn assert_not_equals_delta(&self, item1: f64, item2: f64, delta: f64) {
        check((item1 - item2).abs() > delta, || {
            format!(
                "{} should not be equal within delta:<{:?}>, item1:<{:?}>, item2:<{:?}>",
                self.name(),
                delta,
                item1,
                item2
            )
        });
    }

    /// Equality must hold both ways and for each value with itself, and
    /// equal values must hash equally.
    #[track_caller]
    pub fn assert_equals_and_hash_code<T: PartialEq + Hash + Debug + ?Sized>(&self, expected: &T, actual: &T) {
        let message = format!("Expected {} to be equal.", self.name());
        let pairs = [(expected, expected), (actual, actual), (expected, actual), (actual, expected)];
        for (left, right) in pairs {
            check(left == right, || not_equals_message(&message, left, right));
        }

        let (expected_hash, actual_hash) = (hash_of(expected), hash_of(actual));
        if expected_hash != actual_hash {
            fail_not_equals(
                &format!("Expected {} to have the same hash.", self.name()),
                &expected_hash,
                &actual_hash,
            );
        }
    }

    /// A clone equals, and hashes like, the original.
    #[track_caller]
    pub fn assert_shallow_clone<T: Clone + PartialEq + Hash + Debug>(&self, object: &T) {
        let clone = object.clone();
        named(&format!("{} and its clone", self.name())).assert_equals_and_hash_code(object, &clone);
    }

    #[track_caller]
    pub fn assert_negative<T: PartialOrd + Default + Debug>(&self, value: T) {
        if value.partial_cmp(&T::default()) != Some(Ordering::Less) {
            fail(&format!("{}{:?} is not negative", self.prefix(), value));
        }
    }

    #[track_caller]
    pub fn assert_positive<T: PartialOrd + Default + Debug>(&self, value: T) {
        if value.partial_cmp(&T::default()) != Some(Ordering::Greater) {
            fail(&format!("{}{:?} is not positive", self.prefix(), value));
        }
    }

    #[track_caller]
    pub fn assert_zero<T: PartialEq + Default + Debug>(&self, value: T) {
        let zero = T::default();
        if value != zero {
            fail_not_equals(self.name(), &zero, &value);
        }
    }

    #[track_caller]
    pub fn assert_instance_of<T: Any>(&self, actual: &dyn Any) {
        check(actual.is::<T>(), || {
            format!("{} is not an instance of {}", self.name(), type_name::<T>())
        });
    }

    #[track_caller]
    pub fn assert_object_not_null<T>(&self, actual: &Option<T>) {
        check(actual.is_some(), || format!("{} should not be null", self.name()));
    }
}

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[track_caller]
pub fn assert_not_equals<T: PartialEq + Debug + ?Sized>(item1: &T, item2: &T) {
    named("items").assert_not_equals(item1, item2);
}

#[track_caller]
pub fn assert_not_equals_delta(item1: f64, item2: f64, delta: f64) {
    named("items").assert_not_equals_delta(item1, item2, delta);
}

#[track_caller]
pub fn assert_equals_and_hash_code<T: PartialEq + Hash + Debug + ?Sized>(expected: &T, actual: &T) {
    named("objects").assert_equals_and_hash_code(expected, actual);
}

#[track_caller]
pub fn assert_shallow_clone<T: Clone + PartialEq + Hash + Debug>(object: &T) {
    named("object").assert_shallow_clone(object);
}

#[track_caller]
pub fn assert_instance_of<T: Any>(actual: &dyn Any) {
    named("object").assert_instance_of::<T>(actual);
}

#[track_caller]
pub fn assert_object_not_null<T>(actual: &Option<T>) {
    named("object").assert_object_not_null(actual);
}

#[track_caller]
pub fn assert_negative<T: PartialOrd + Default + Debug>(value: T) {
    named("").assert_negative(value);
}

#[track_caller]
pub fn assert_positive<T: PartialOrd + Default + Debug>(value: T) {
    named("").assert_positive(value);
}

#[track_caller]
pub fn assert_zero<T: PartialEq + Default + Debug>(value: T) {
    named("").assert_zero(value);
}
