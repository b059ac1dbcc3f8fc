//! Traits over the things assertions inspect.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use indexmap::{IndexMap, IndexSet};

/// Anything with a size.
pub trait Container {
    fn size(&self) -> usize;

    fn is_empty_container(&self) -> bool {
        self.size() == 0
    }
}

impl<T> Container for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Container for [T; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<T> Container for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Container for VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> Container for HashSet<T, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Container for BTreeSet<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> Container for IndexSet<T, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Container for HashMap<K, V, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Container for BTreeMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Container for IndexMap<K, V, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

/// Size in chars.
impl Container for str {
    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl Container for String {
    fn size(&self) -> usize {
        self.as_str().size()
    }
}

/// Keyed lookup. A multimap is a `MapView` whose values are collections.
pub trait MapView<K, V> {
    fn map_len(&self) -> usize;

    fn value(&self, key: &K) -> Option<&V>;

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;

    fn has_key(&self, key: &K) -> bool {
        self.value(key).is_some()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> MapView<K, V> for HashMap<K, V, S> {
    fn map_len(&self) -> usize {
        self.len()
    }

    fn value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K: Ord, V> MapView<K, V> for BTreeMap<K, V> {
    fn map_len(&self) -> usize {
        self.len()
    }

    fn value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> MapView<K, V> for IndexMap<K, V, S> {
    fn map_len(&self) -> usize {
        self.len()
    }

    fn value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}
