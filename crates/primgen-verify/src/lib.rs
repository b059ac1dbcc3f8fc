#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Assertions for collection tests.
//!
//! Every assertion is `#[track_caller]`: a failure panics with a message
//! naming the expected and actual values, reported at the line of the test
//! that called it rather than somewhere inside this crate.
//!
//! Each assertion is available as a free function, which names its subject
//! generically (`collection`, `map`, `list`, ...), and as a method of
//! [`Named`] for messages that name the subject:
//!
//! ```
//! use primgen_verify::{assert_contains, named};
//!
//! assert_contains(&2, &vec![1, 2, 3]);
//! named("stack").assert_size(3, &vec![1, 2, 3]);
//! ```

mod collections;
mod equality;
mod failure;
mod maps;
mod named;
mod serialization;
mod strings;
mod subject;
mod throws;

#[cfg(test)]
mod maps_tests;
#[cfg(test)]
mod serialization_tests;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod throws_tests;

pub use collections::{
    assert_all_satisfy, assert_any_satisfy, assert_before, assert_contains, assert_contains_all,
    assert_contains_none, assert_count, assert_empty, assert_ends_with, assert_item_at_index,
    assert_iterable_empty, assert_iterable_not_empty, assert_iterable_size, assert_iterables_equal,
    assert_lists_equal, assert_none_satisfy, assert_not_contains, assert_not_empty,
    assert_sets_equal, assert_size, assert_sorted_sets_equal, assert_starts_with,
    deny_contains_any,
};
pub use equality::{
    assert_equals_and_hash_code, assert_instance_of, assert_negative, assert_not_equals,
    assert_not_equals_delta, assert_object_not_null, assert_positive, assert_shallow_clone,
    assert_zero,
};
pub use failure::{fail, fail_not_equals, fail_with_cause};
pub use maps::{
    assert_all_values_satisfy, assert_any_value_satisfies, assert_contains_all_entries,
    assert_contains_all_key_values, assert_contains_entry, assert_contains_key,
    assert_contains_key_value, assert_maps_equal, assert_no_values_satisfy,
    assert_not_contains_key, deny_contains_key,
};
pub use named::{Named, named};
pub use serialization::{assert_post_serialized_equals_and_hash_code, assert_serialized_form};
pub use strings::{assert_contains_str, assert_not_contains_str};
pub use subject::{Container, MapView};
pub use throws::{assert_error, assert_throws, assert_throws_with_cause};

/// Set comparisons list the differing elements only up to this many.
pub const MAX_DIFFERENCES: usize = 5;
