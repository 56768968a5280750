//! Persistent insertion-ordered collections with structural sharing.
//!
//! These are thin wrappers around the `im` crate's persistent data structures.
//! Each keeps an `im::Vector` of keys for iteration order next to a hashed
//! index for lookups, so objects and maps enumerate keys in the order they
//! were first inserted.

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// Persistent insertion-ordered hash map.
///
/// Cloning is O(1). Modifications return a new map sharing structure with
/// the original. Equality ignores order.
#[derive(Clone)]
pub struct LtMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    order: im::Vector<K>,
    entries: im::HashMap<K, V>,
}

impl<K: Clone + Eq + Hash, V: Clone> LtMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: im::Vector::new(),
            entries: im::HashMap::new(),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Returns a new map with the key-value pair inserted.
    ///
    /// Replacing an existing key keeps its original position.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        let mut new = self.clone();
        if !new.entries.contains_key(&key) {
            new.order.push_back(key.clone());
        }
        new.entries.insert(key, value);
        new
    }

    /// Returns an iterator over key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order
            .iter()
            .filter_map(move |k| self.entries.get(k).map(|v| (k, v)))
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Returns an iterator over values in key insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<K: Clone + Eq + Hash, V: Clone> Default for LtMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash + fmt::Debug, V: Clone + fmt::Debug> fmt::Debug for LtMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Clone + Eq + Hash, V: Clone + PartialEq> PartialEq for LtMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Clone + Eq + Hash, V: Clone + Eq> Eq for LtMap<K, V> {}

impl<K: Clone + Eq + Hash, V: Clone + Hash> Hash for LtMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent so that it agrees with `PartialEq`.
        let mut combined = 0u64;
        for (k, v) in self.iter() {
            let mut entry = DefaultHasher::new();
            k.hash(&mut entry);
            v.hash(&mut entry);
            combined = combined.wrapping_add(entry.finish());
        }
        self.len().hash(state);
        combined.hash(state);
    }
}

impl<K: Clone + Eq + Hash, V: Clone> FromIterator<(K, V)> for LtMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            if !map.entries.contains_key(&k) {
                map.order.push_back(k.clone());
            }
            map.entries.insert(k, v);
        }
        map
    }
}

/// Persistent insertion-ordered hash set.
#[derive(Clone)]
pub struct LtSet<T>
where
    T: Clone + Eq + Hash,
{
    order: im::Vector<T>,
    members: im::HashSet<T>,
}

impl<T: Clone + Eq + Hash> LtSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: im::Vector::new(),
            members: im::HashSet::new(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if the set contains the value.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    /// Returns a new set with the value inserted.
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        if self.members.contains(&value) {
            return self.clone();
        }
        let mut new = self.clone();
        new.order.push_back(value.clone());
        new.members.insert(value);
        new
    }

    /// Returns an iterator over the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter()
    }
}

impl<T: Clone + Eq + Hash> Default for LtSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for LtSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Eq + Hash> PartialEq for LtSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<T: Clone + Eq + Hash> Eq for LtSet<T> {}

impl<T: Clone + Eq + Hash> Hash for LtSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined = 0u64;
        for item in self.iter() {
            let mut member = DefaultHasher::new();
            item.hash(&mut member);
            combined = combined.wrapping_add(member.finish());
        }
        self.len().hash(state);
        combined.hash(state);
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for LtSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            if set.members.insert(item.clone()).is_none() {
                set.order.push_back(item);
            }
        }
        set
    }
}
