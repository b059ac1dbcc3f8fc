//! Assertions over [`MapView`]s and multimaps.

use std::fmt::Debug;
use std::hash::Hash;

use crate::MAX_DIFFERENCES;
use crate::failure::{check, fail, fmt_items};
use crate::named::{Named, named};
use crate::subject::MapView;

impl Named<'_> {
    /// Same keys, then same value under each key.
    #[track_caller]
    pub fn assert_maps_equal<K, V, E, A>(&self, expected: &E, actual: &A)
    where
        K: Eq + Hash + Debug,
        V: PartialEq + Debug,
        E: MapView<K, V> + ?Sized,
        A: MapView<K, V> + ?Sized,
    {
        named(&format!("{} keys", self.name()))
            .assert_sets_equal(expected.entries().map(|(k, _)| k), actual.entries().map(|(k, _)| k));

        let mut expected_only = Vec::new();
        let mut actual_only = Vec::new();
        for (key, value) in expected.entries() {
            let Some(other) = actual.value(key) else {
                continue;
            };
            if value != other {
                expected_only.push((key, value));
                actual_only.push((key, other));
            }
        }
        if expected_only.is_empty() {
            return;
        }

        let message = format!(
            "{} entries: {} elements different.",
            self.name(),
            expected_only.len()
        );
        if expected_only.len() > MAX_DIFFERENCES {
            fail(&message);
        }
        fail(&format!(
            "{} expected:<{}> but was:<{}>",
            message,
            fmt_items(&expected_only),
            fmt_items(&actual_only)
        ));
    }

    #[track_caller]
    pub fn assert_contains_key<K: Debug, V, M: MapView<K, V> + ?Sized>(&self, key: &K, map: &M) {
        check(map.has_key(key), || {
            format!("{} did not contain expectedKey:<{:?}>", self.name(), key)
        });
    }

    #[track_caller]
    pub fn assert_not_contains_key<K: Debug, V, M: MapView<K, V> + ?Sized>(&self, key: &K, map: &M) {
        check(!map.has_key(key), || {
            format!("{} should not contain unexpectedItem:<{:?}>", self.name(), key)
        });
    }

    #[track_caller]
    pub fn deny_contains_key<K: Debug, V, M: MapView<K, V> + ?Sized>(&self, key: &K, map: &M) {
        check(!map.has_key(key), || {
            format!("{} contained unexpectedKey:<{:?}>", self.name(), key)
        });
    }

    #[track_caller]
    pub fn assert_contains_key_value<K, V, M>(&self, key: &K, value: &V, map: &M)
    where
        K: Debug,
        V: PartialEq + Debug,
        M: MapView<K, V> + ?Sized,
    {
        self.assert_contains_key(key, map);
        if let Some(actual) = map.value(key)
            && actual != value
        {
            fail(&format!(
                "{} entry with expectedKey:<{:?}> did not contain expectedValue:<{:?}>, but had actualValue:<{:?}>",
                self.name(),
                key,
                value,
                actual
            ));
        }
    }

    /// Each `(key, value)` of `pairs` is in `map`. Reports every wrong value at once.
    #[track_caller]
    pub fn assert_contains_all_key_values<K, V, M>(&self, map: &M, pairs: &[(K, V)])
    where
        K: PartialEq + Debug,
        V: PartialEq + Debug,
        M: MapView<K, V> + ?Sized,
    {
        named("Expected keys/values in assertion").assert_not_empty(pairs);

        let keys: Vec<&K> = map.entries().map(|(k, _)| k).collect();
        let missing: Vec<&K> = pairs
            .iter()
            .map(|(k, _)| k)
            .filter(|k| !keys.contains(k))
            .collect();
        check(missing.is_empty(), || {
            format!(
                "{}.keys() did not contain these items:<{}>",
                self.name(),
                fmt_items(missing.iter().copied())
            )
        });

        let wrong: Vec<String> = pairs
            .iter()
            .filter_map(|(key, expected)| {
                let actual = map.value(key)?;
                (actual != expected).then(|| {
                    format!(
                        "key:<{:?},expectedValue:<{:?}>, actualValue:<{:?}>> ",
                        key, expected, actual
                    )
                })
            })
            .collect();
        check(wrong.is_empty(), || {
            format!(
                "{} has incorrect values for keys:[{}]",
                self.name(),
                wrong.concat()
            )
        });
    }

    /// The collection under `key` holds `value`.
    #[track_caller]
    pub fn assert_contains_entry<K, V, C, M>(&self, key: &K, value: &V, multimap: &M)
    where
        K: Debug,
        V: PartialEq + Debug,
        M: MapView<K, C> + ?Sized,
        for<'c> &'c C: IntoIterator<Item = &'c V>,
    {
        check(has_entry(multimap, key, value), || {
            format!(
                "{} did not contain entry: <{:?}, {:?}>",
                self.name(),
                key,
                value
            )
        });
    }

    #[track_caller]
    pub fn assert_contains_all_entries<K, V, C, M>(&self, multimap: &M, entries: &[(K, V)])
    where
        K: Debug,
        V: PartialEq + Debug,
        M: MapView<K, C> + ?Sized,
        for<'c> &'c C: IntoIterator<Item = &'c V>,
    {
        named("Expected entries in assertion").assert_not_empty(entries);

        let missing: Vec<&(K, V)> = entries
            .iter()
            .filter(|(key, value)| !has_entry(multimap, key, value))
            .collect();
        check(missing.is_empty(), || {
            format!(
                "{} is missing entries: {}",
                self.name(),
                fmt_items(missing.iter().copied())
            )
        });
    }

    #[track_caller]
    pub fn assert_all_values_satisfy<K, V, M>(&self, map: &M, predicate: impl FnMut(&V) -> bool)
    where
        V: Debug,
        M: MapView<K, V> + ?Sized,
    {
        self.assert_all_satisfy(map.entries().map(|(_, v)| v), predicate);
    }

    #[track_caller]
    pub fn assert_any_value_satisfies<K, V, M>(&self, map: &M, predicate: impl FnMut(&V) -> bool)
    where
        M: MapView<K, V> + ?Sized,
    {
        self.assert_any_satisfy(map.entries().map(|(_, v)| v), predicate);
    }

    #[track_caller]
    pub fn assert_no_values_satisfy<K, V, M>(&self, map: &M, predicate: impl FnMut(&V) -> bool)
    where
        V: Debug,
        M: MapView<K, V> + ?Sized,
    {
        self.assert_none_satisfy(map.entries().map(|(_, v)| v), predicate);
    }
}

fn has_entry<K, V, C, M>(multimap: &M, key: &K, value: &V) -> bool
where
    V: PartialEq,
    M: MapView<K, C> + ?Sized,
    for<'c> &'c C: IntoIterator<Item = &'c V>,
{
    multimap
        .value(key)
        .is_some_and(|values| values.into_iter().any(|each| each == value))
}

#[track_caller]
pub fn assert_maps_equal<K, V, E, A>(expected: &E, actual: &A)
where
    K: Eq + Hash + Debug,
    V: PartialEq + Debug,
    E: MapView<K, V> + ?Sized,
    A: MapView<K, V> + ?Sized,
{
    named("map").assert_maps_equal(expected, actual);
}

#[track_caller]
pub fn assert_contains_key<K: Debug, V, M: MapView<K, V> + ?Sized>(key: &K, map: &M) {
    named("map").assert_contains_key(key, map);
}

#[track_caller]
pub fn assert_not_contains_key<K: Debug, V, M: MapView<K, V> + ?Sized>(key: &K, map: &M) {
    named("map").assert_not_contains_key(key, map);
}

#[track_caller]
pub fn deny_contains_key<K: Debug, V, M: MapView<K, V> + ?Sized>(key: &K, map: &M) {
    named("map").deny_contains_key(key, map);
}

#[track_caller]
pub fn assert_contains_key_value<K, V, M>(key: &K, value: &V, map: &M)
where
    K: Debug,
    V: PartialEq + Debug,
    M: MapView<K, V> + ?Sized,
{
    named("map").assert_contains_key_value(key, value, map);
}

#[track_caller]
pub fn assert_contains_all_key_values<K, V, M>(map: &M, pairs: &[(K, V)])
where
    K: PartialEq + Debug,
    V: PartialEq + Debug,
    M: MapView<K, V> + ?Sized,
{
    named("map").assert_contains_all_key_values(map, pairs);
}

#[track_caller]
pub fn assert_contains_entry<K, V, C, M>(key: &K, value: &V, multimap: &M)
where
    K: Debug,
    V: PartialEq + Debug,
    M: MapView<K, C> + ?Sized,
    for<'c> &'c C: IntoIterator<Item = &'c V>,
{
    named("multimap").assert_contains_entry(key, value, multimap);
}

#[track_caller]
pub fn assert_contains_all_entries<K, V, C, M>(multimap: &M, entries: &[(K, V)])
where
    K: Debug,
    V: PartialEq + Debug,
    M: MapView<K, C> + ?Sized,
    for<'c> &'c C: IntoIterator<Item = &'c V>,
{
    named("multimap").assert_contains_all_entries(multimap, entries);
}

#[track_caller]
pub fn assert_all_values_satisfy<K, V, M>(map: &M, predicate: impl FnMut(&V) -> bool)
where
    V: Debug,
    M: MapView<K, V> + ?Sized,
{
    named("").assert_all_values_satisfy(map, predicate);
}

#[track_caller]
pub fn assert_any_value_satisfies<K, V, M>(map: &M, predicate: impl FnMut(&V) -> bool)
where
    M: MapView<K, V> + ?Sized,
{
    named("").assert_any_value_satisfies(map, predicate);
}

#[track_caller]
pub fn assert_no_values_satisfy<K, V, M>(map: &M, predicate: impl FnMut(&V) -> bool)
where
    V: Debug,
    M: MapView<K, V> + ?Sized,
{
    named("").assert_no_values_satisfy(map, predicate);
}
