//! Size, containment, ordering and equality of collections.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::MAX_DIFFERENCES;
use crate::failure::{check, fail, fail_not_equals, fmt_items};
use crate::named::{Named, named};
use crate::subject::Container;

const EXPECTED_ITEMS: &str = "Expected items in assertion";

impl Named<'_> {
    #[track_caller]
    pub fn assert_empty<C: Container + ?Sized>(&self, actual: &C) {
        check(actual.is_empty_container(), || {
            format!("{} should be empty; actual size:<{}>", self.name(), actual.size())
        });
    }

    #[track_caller]
    pub fn assert_not_empty<C: Container + ?Sized>(&self, actual: &C) {
        check(!actual.is_empty_container(), || {
            format!("{} should be non-empty, but was empty", self.name())
        });
    }

    #[track_caller]
    pub fn assert_size<C: Container + ?Sized>(&self, expected: usize, actual: &C) {
        let size = actual.size();
        check(size == expected, || {
            format!(
                "Incorrect size for {}; expected:<{}> but was:<{}>",
                self.name(),
                expected,
                size
            )
        });
    }

    #[track_caller]
    pub fn assert_iterable_empty<I: IntoIterator>(&self, iterable: I) {
        let size = iterable.into_iter().count();
        check(size == 0, || {
            format!("{} should be empty; actual size:<{}>", self.name(), size)
        });
    }

    #[track_caller]
    pub fn assert_iterable_not_empty<I: IntoIterator>(&self, iterable: I) {
        let mut iter = iterable.into_iter();
        check(iter.next().is_some(), || {
            format!("{} should be non-empty, but was empty", self.name())
        });
    }

    #[track_caller]
    pub fn assert_iterable_size<I: IntoIterator>(&self, expected: usize, iterable: I) {
        let size = iterable.into_iter().count();
        check(size == expected, || {
            format!(
                "Incorrect size for {}; expected:<{}> but was:<{}>",
                self.name(),
                expected,
                size
            )
        });
    }

    #[track_caller]
    pub fn assert_contains<'a, T, I>(&self, item: &T, iterable: I)
    where
        T: PartialEq + Debug + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let found = iterable.into_iter().any(|each| each == item);
        check(found, || {
            format!("{} did not contain expectedItem:<{:?}>", self.name(), item)
        });
    }

    #[track_caller]
    pub fn assert_not_contains<'a, T, I>(&self, item: &T, iterable: I)
    where
        T: PartialEq + Debug + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let found = iterable.into_iter().any(|each| each == item);
        check(!found, || {
            format!("{} should not contain unexpectedItem:<{:?}>", self.name(), item)
        });
    }

    /// Every one of `items` is in `iterable`.
    #[track_caller]
    pub fn assert_contains_all<'a, T, I>(&self, iterable: I, items: &[T])
    where
        T: PartialEq + Debug + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        named(EXPECTED_ITEMS).assert_not_empty(items);

        let actual: Vec<&T> = iterable.into_iter().collect();
        let missing: Vec<&T> = items
            .iter()
            .filter(|item| !actual.contains(item))
            .collect();
        check(missing.is_empty(), || {
            format!(
                "{} did not contain these items:<{}>",
                self.name(),
                fmt_items(missing.iter().copied())
            )
        });
    }

    /// None of `items` is in `iterable`.
    #[track_caller]
    pub fn deny_contains_any<'a, T, I>(&self, iterable: I, items: &[T])
    where
        T: PartialEq + Debug + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        named(EXPECTED_ITEMS).assert_not_empty(items);

        let mut intersection: Vec<&T> = Vec::new();
        for each in iterable {
            if items.contains(each) && !intersection.contains(&each) {
                intersection.push(each);
            }
        }
        check(intersection.is_empty(), || {
            format!(
                "{} has an intersection with these items and should not :<{}>",
                self.name(),
                fmt_items(intersection.iter().copied())
            )
        });
    }

    #[track_caller]
    pub fn assert_contains_none<'a, T, I>(&self, iterable: I, items: &[T])
    where
        T: PartialEq + Debug + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.deny_contains_any(iterable, items);
    }

    /// `former` occurs in `list` before `latter`.
    #[track_caller]
    pub fn assert_before<T: PartialEq + Debug>(&self, former: &T, latter: &T, list: &[T]) {
        named(&format!(
            "Bad test, formerItem and latterItem are equal, listName:<{}>",
            self.name()
        ))
        .assert_not_equals(former, latter);
        let pair = [former, latter];
        let found: Vec<&T> = list.iter().collect();
        let missing: Vec<&T> = pair.into_iter().filter(|item| !found.contains(item)).collect();
        check(missing.is_empty(), || {
            format!(
                "{} did not contain these items:<{}>",
                self.name(),
                fmt_items(missing.iter().copied())
            )
        });

        let position = |item: &T| list.iter().position(|each| each == item);
        if position(latter) < position(former) {
            fail(&format!(
                "Items in {} are in incorrect order; expected formerItem:<{:?}> to appear before latterItem:<{:?}>, but didn't",
                self.name(),
                former,
                latter
            ));
        }
    }

    #[track_caller]
    pub fn assert_item_at_index<T: PartialEq + Debug>(&self, expected: &T, index: usize, list: &[T]) {
        let Some(actual) = list.get(index) else {
            fail(&format!(
                "{} has no element at index:<{}>; size:<{}>",
                self.name(),
                index,
                list.len()
            ));
        };
        if actual != expected {
            fail_not_equals(
                &format!("{} has incorrect element at index:<{}>", self.name(), index),
                expected,
                actual,
            );
        }
    }

    #[track_caller]
    pub fn assert_starts_with<T: PartialEq + Debug>(&self, list: &[T], items: &[T]) {
        named(EXPECTED_ITEMS).assert_not_empty(items);
        for (i, item) in items.iter().enumerate() {
            self.assert_item_at_index(item, i, list);
        }
    }

    #[track_caller]
    pub fn assert_ends_with<T: PartialEq + Debug>(&self, list: &[T], items: &[T]) {
        named(EXPECTED_ITEMS).assert_not_empty(items);
        let Some(start) = list.len().checked_sub(items.len()) else {
            fail(&format!(
                "{} has {} elements, fewer than the {} expected at its end",
                self.name(),
                list.len(),
                items.len()
            ));
        };
        for (i, item) in items.iter().enumerate() {
            self.assert_item_at_index(item, start + i, list);
        }
    }

    #[track_caller]
    pub fn assert_lists_equal<T: PartialEq + Debug>(&self, expected: &[T], actual: &[T]) {
        self.assert_iterables_equal(expected, actual);
    }

    /// Element-wise equality, reporting the first difference.
    #[track_caller]
    pub fn assert_iterables_equal<'a, T, E, A>(&self, expected: E, actual: A)
    where
        T: PartialEq + Debug + 'a,
        E: IntoIterator<Item = &'a T>,
        A: IntoIterator<Item = &'a T>,
    {
        let name = self.name();
        let mut expected = expected.into_iter();
        let mut actual = actual.into_iter();
        let mut index = 0;

        loop {
            match (expected.next(), actual.next()) {
                (Some(e), Some(a)) => {
                    if e != a {
                        fail_not_equals(
                            &format!("{} first differed at element [{}];", name, index),
                            e,
                            a,
                        );
                    }
                    index += 1;
                }
                (Some(_), None) => fail(&format!(
                    "Actual {} had {} elements but expected {} had more.",
                    name, index, name
                )),
                (None, Some(_)) => fail(&format!(
                    "Expected {} had {} elements but actual {} had more.",
                    name, index, name
                )),
                (None, None) => return,
            }
        }
    }

    /// Set equality. Lists the elements on either side only when there
    /// are at most [`MAX_DIFFERENCES`] of them.
    #[track_caller]
    pub fn assert_sets_equal<'a, T, E, A>(&self, expected: E, actual: A)
    where
        T: Eq + Hash + Debug + 'a,
        E: IntoIterator<Item = &'a T>,
        A: IntoIterator<Item = &'a T>,
    {
        let expected: IndexSet<&T> = expected.into_iter().collect();
        let actual: IndexSet<&T> = actual.into_iter().collect();

        self.assert_size(expected.len(), &actual);
        if expected == actual {
            return;
        }

        let expected_only: Vec<&T> = expected.difference(&actual).copied().collect();
        let message = format!("{}: {} elements different.", self.name(), expected_only.len());
        if expected_only.len() > MAX_DIFFERENCES {
            fail(&message);
        }

        let actual_only: Vec<&T> = actual.difference(&expected).copied().collect();
        fail(&format!(
            "{} expected:<{}> but was:<{}>",
            message,
            fmt_items(expected_only),
            fmt_items(actual_only)
        ));
    }

    #[track_caller]
    pub fn assert_sorted_sets_equal<T: Ord + Debug>(&self, expected: &BTreeSet<T>, actual: &BTreeSet<T>) {
        self.assert_iterables_equal(expected, actual);
    }

    #[track_caller]
    pub fn assert_count<I: IntoIterator>(
        &self,
        expected: usize,
        iterable: I,
        mut predicate: impl FnMut(&I::Item) -> bool,
    ) {
        let actual = iterable.into_iter().filter(|each| predicate(each)).count();
        if actual != expected {
            fail_not_equals(self.name(), &expected, &actual);
        }
    }

    #[track_caller]
    pub fn assert_all_satisfy<'a, T, I>(&self, iterable: I, mut predicate: impl FnMut(&T) -> bool)
    where
        T: Debug + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let failed: Vec<&T> = iterable.into_iter().filter(|each| !predicate(*each)).collect();
        check(failed.is_empty(), || {
            format!(
                "{}The following items failed to satisfy the condition <{}>",
                self.prefix(),
                fmt_items(failed.iter().copied())
            )
        });
    }

    #[track_caller]
    pub fn assert_any_satisfy<'a, T, I>(&self, iterable: I, mut predicate: impl FnMut(&T) -> bool)
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let any = iterable.into_iter().any(|each| predicate(each));
        check(any, || format!("{}No items satisfied the condition", self.prefix()));
    }

    #[track_caller]
    pub fn assert_none_satisfy<'a, T, I>(&self, iterable: I, mut predicate: impl FnMut(&T) -> bool)
    where
        T: Debug + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let satisfied: Vec<&T> = iterable.into_iter().filter(|each| predicate(*each)).collect();
        check(satisfied.is_empty(), || {
            format!(
                "{}The following items satisfied the condition <{}>",
                self.prefix(),
                fmt_items(satisfied.iter().copied())
            )
        });
    }
}

#[track_caller]
pub fn assert_empty<C: Container + ?Sized>(actual: &C) {
    named("collection").assert_empty(actual);
}

#[track_caller]
pub fn assert_not_empty<C: Container + ?Sized>(actual: &C) {
    named("collection").assert_not_empty(actual);
}

#[track_caller]
pub fn assert_size<C: Container + ?Sized>(expected: usize, actual: &C) {
    named("collection").assert_size(expected, actual);
}

#[track_caller]
pub fn assert_iterable_empty<I: IntoIterator>(iterable: I) {
    named("iterable").assert_iterable_empty(iterable);
}

#[track_caller]
pub fn assert_iterable_not_empty<I: IntoIterator>(iterable: I) {
    named("iterable").assert_iterable_not_empty(iterable);
}

#[track_caller]
pub fn assert_iterable_size<I: IntoIterator>(expected: usize, iterable: I) {
    named("iterable").assert_iterable_size(expected, iterable);
}

#[track_caller]
pub fn assert_contains<'a, T, I>(item: &T, iterable: I)
where
    T: PartialEq + Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    named("collection").assert_contains(item, iterable);
}

#[track_caller]
pub fn assert_not_contains<'a, T, I>(item: &T, iterable: I)
where
    T: PartialEq + Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    named("collection").assert_not_contains(item, iterable);
}

#[track_caller]
pub fn assert_contains_all<'a, T, I>(iterable: I, items: &[T])
where
    T: PartialEq + Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    named("iterable").assert_contains_all(iterable, items);
}

#[track_caller]
pub fn deny_contains_any<'a, T, I>(iterable: I, items: &[T])
where
    T: PartialEq + Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    named("collection").deny_contains_any(iterable, items);
}

#[track_caller]
pub fn assert_contains_none<'a, T, I>(iterable: I, items: &[T])
where
    T: PartialEq + Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    named("collection").assert_contains_none(iterable, items);
}

/// Exactly `expected` items of `iterable` satisfy `predicate`.
#[track_caller]
pub fn assert_count<I: IntoIterator>(expected: usize, iterable: I, predicate: impl FnMut(&I::Item) -> bool) {
    named("").assert_count(expected, iterable, predicate);
}

#[track_caller]
pub fn assert_all_satisfy<'a, T, I>(iterable: I, predicate: impl FnMut(&T) -> bool)
where
    T: Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    named("").assert_all_satisfy(iterable, predicate);
}

#[track_caller]
pub fn assert_any_satisfy<'a, T, I>(iterable: I, predicate: impl FnMut(&T) -> bool)
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    named("").assert_any_satisfy(iterable, predicate);
}

#[track_caller]
pub fn assert_none_satisfy<'a, T, I>(iterable: I, predicate: impl FnMut(&T) -> bool)
where
    T: Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    named("").assert_none_satisfy(iterable, predicate);
}

#[track_caller]
pub fn assert_before<T: PartialEq + Debug>(former: &T, latter: &T, list: &[T]) {
    named("list").assert_before(former, latter, list);
}

#[track_caller]
pub fn assert_item_at_index<T: PartialEq + Debug>(expected: &T, index: usize, list: &[T]) {
    named("list").assert_item_at_index(expected, index, list);
}

#[track_caller]
pub fn assert_starts_with<T: PartialEq + Debug>(list: &[T], items: &[T]) {
    named("list").assert_starts_with(list, items);
}

#[track_caller]
pub fn assert_ends_with<T: PartialEq + Debug>(list: &[T], items: &[T]) {
    named("list").assert_ends_with(list, items);
}

#[track_caller]
pub fn assert_lists_equal<T: PartialEq + Debug>(expected: &[T], actual: &[T]) {
    named("list").assert_lists_equal(expected, actual);
}

#[track_caller]
pub fn assert_iterables_equal<'a, T, E, A>(expected: E, actual: A)
where
    T: PartialEq + Debug + 'a,
    E: IntoIterator<Item = &'a T>,
    A: IntoIterator<Item = &'a T>,
{
    named("iterables").assert_iterables_equal(expected, actual);
}

#[track_caller]
pub fn assert_sets_equal<'a, T, E, A>(expected: E, actual: A)
where
    T: Eq + Hash + Debug + 'a,
    E: IntoIterator<Item = &'a T>,
    A: IntoIterator<Item = &'a T>,
{
    named("set").assert_sets_equal(expected, actual);
}

#[track_caller]
pub fn assert_sorted_sets_equal<T: Ord + Debug>(expected: &BTreeSet<T>, actual: &BTreeSet<T>) {
    named("sortedSets").assert_sorted_sets_equal(expected, actual);
}
