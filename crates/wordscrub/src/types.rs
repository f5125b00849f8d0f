//! # Common Types

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type ScrubHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> ScrubHashMap<K, V> {
            ScrubHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type ScrubHashSet<V> = ahash::AHashSet<V>;

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> ScrubHashSet<V> {
            ScrubHashSet::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type ScrubHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> ScrubHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type ScrubHashSet<V> = foldhash::HashSet<V>;

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> ScrubHashSet<V> {
            foldhash::HashSetExt::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type ScrubHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> ScrubHashMap<K, V> {
            ScrubHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type ScrubHashSet<V> = std::collections::HashSet<V>;

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> ScrubHashSet<V> {
            ScrubHashSet::with_capacity(capacity)
        }
    }
}

/// The count type used by word frequency tables.
pub type WordCount = u64;
