use alloc::vec::Vec;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::FusedIterator;

use crate::config::Config;
use crate::config::DEFAULT_CAPACITY;
use crate::config::DEFAULT_LOAD_FACTOR;
use crate::config::bucket_count_for;
use crate::config::max_population;
use crate::error::Error;
use crate::error::Result;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher every table uses to digest its keys.
        ///
        /// Unkeyed, so the same key always lands in the same bucket for a given
        /// bucket count.
        pub type DefaultHashBuilder = foldhash::fast::FixedState;
    } else if #[cfg(feature = "std")] {
        /// The hasher every table uses to digest its keys.
        ///
        /// Unkeyed, so the same key always lands in the same bucket for a given
        /// bucket count.
        pub type DefaultHashBuilder =
            std::hash::BuildHasherDefault<std::collections::hash_map::DefaultHasher>;
    } else {
        compile_error!("chain-hash needs either the `foldhash` or the `std` feature to hash keys");
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[derive(Clone)]
struct Slot<K, V> {
    hash: u64,
    key: K,
    value: V,
}

/// A chain of entries sharing one bucket index, oldest first.
type Bucket<K, V> = Vec<Slot<K, V>>;

fn new_buckets<K, V>(count: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, Vec::new);
    buckets
}

/// A hash table using separate chaining over a power-of-two bucket array.
///
/// `HashTable<K, V>` maps keys implementing `Hash + Eq` to values. Every key
/// is digested once with [`DefaultHashBuilder`]. The low bits of the digest
/// select a bucket, and each bucket keeps its entries in insertion order.
/// Inserting a new key when the table already holds [`capacity`] entries first
/// doubles the bucket array and redistributes every entry.
///
/// Entries cannot be removed individually. [`clear`] empties the table
/// without shrinking it.
///
/// ## Example
///
/// ```rust
/// use chain_hash::HashTable;
///
/// let mut table = HashTable::new();
/// assert_eq!(table.put("x", 1), 1);
/// assert_eq!(table.put("x", 2), 1);
/// assert_eq!(table.get(&"x"), Some(&2));
/// assert_eq!(table.len(), 1);
/// ```
///
/// [`capacity`]: HashTable::capacity
/// [`clear`]: HashTable::clear
#[derive(Clone)]
pub struct HashTable<K, V> {
    buckets: Vec<Bucket<K, V>>,

    populated: usize,
    max_pop: usize,
    load_factor: f64,

    hash_builder: DefaultHashBuilder,
}

impl<K, V> Debug for HashTable<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders the table bucket by bucket: one line per non-empty bucket, each
/// entry as `(key, value)`, the whole wrapped in brackets.
///
/// ```rust
/// use chain_hash::Config;
/// use chain_hash::HashTable;
///
/// // A single bucket with a generous load factor keeps everything in one chain.
/// let config = Config::default().with_capacity(1).with_load_factor(8.0);
/// let mut table = HashTable::with_config(config).unwrap();
/// table.insert(1, "a");
/// table.insert(2, "b");
/// assert_eq!(table.to_string(), "[(1, a)(2, b)\n]");
/// ```
impl<K, V> Display for HashTable<K, V>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for bucket in self.buckets.iter().filter(|bucket| !bucket.is_empty()) {
            for slot in bucket {
                write!(f, "({}, {})", slot.key, slot.value)?;
            }
            f.write_str("\n")?;
        }
        f.write_str("]")
    }
}

impl<K, V> HashTable<K, V> {
    /// Creates an empty table sized for 100 entries with a load factor of
    /// `0.9`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let table: HashTable<u64, String> = HashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.bucket_count(), 128);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with at least `capacity` buckets and the default
    /// load factor of `0.9`.
    ///
    /// The bucket count is `capacity` rounded up to a power of two, with a
    /// minimum of one.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the largest power of two representable in
    /// `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let table: HashTable<u64, u64> = HashTable::with_capacity(100);
    /// assert_eq!(table.bucket_count(), 128);
    /// assert_eq!(table.capacity(), 116);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let buckets = bucket_count_for(capacity).unwrap_or_else(|| capacity_overflow());
        Self::from_parts(buckets, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty table from an explicit [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLoadFactor`] if the load factor is not a
    /// positive finite number, and [`Error::CapacityOverflow`] if the capacity
    /// cannot be rounded up to a power of two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::Config;
    /// use chain_hash::Error;
    /// use chain_hash::HashTable;
    ///
    /// let table: HashTable<u32, u32> =
    ///     HashTable::with_config(Config::default().with_capacity(5)).unwrap();
    /// assert_eq!(table.bucket_count(), 8);
    ///
    /// let bad = HashTable::<u32, u32>::with_config(Config::default().with_load_factor(0.0));
    /// assert_eq!(bad.unwrap_err(), Error::InvalidLoadFactor(0.0));
    /// ```
    pub fn with_config(config: Config) -> Result<Self> {
        let buckets = config.bucket_count()?;
        Ok(Self::from_parts(buckets, config.load_factor))
    }

    fn from_parts(buckets: usize, load_factor: f64) -> Self {
        debug_assert!(buckets.is_power_of_two());
        log::debug!("creating hash table with {buckets} buckets, load factor {load_factor}");

        Self {
            buckets: new_buckets(buckets),
            populated: 0,
            max_pop: max_population(buckets, load_factor),
            load_factor,
            hash_builder: DefaultHashBuilder::default(),
        }
    }

    #[inline(always)]
    fn bucket_index(&self, hash: u64) -> usize {
        hash as usize & (self.buckets.len() - 1)
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the length of the bucket array. Always a power of two.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the configured load-factor threshold.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns how many entries the table can hold before inserting another
    /// new key doubles the bucket array.
    ///
    /// This is `ceil(bucket_count * load_factor)`, saturating at `usize::MAX`.
    pub fn capacity(&self) -> usize {
        self.max_pop
    }

    /// Removes all entries from the table.
    ///
    /// The bucket array keeps its length; the table never shrinks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::with_capacity(2);
    /// for i in 0..10 {
    ///     table.insert(i, i);
    /// }
    /// let buckets = table.bucket_count();
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.get(&3), None);
    /// assert_eq!(table.bucket_count(), buckets);
    /// ```
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.populated = 0;
    }

    /// Reserves room for at least `additional` more entries, doubling the
    /// bucket array as many times as needed in a single rehash.
    ///
    /// # Panics
    ///
    /// Panics if the required bucket count overflows `usize`. See
    /// [`try_reserve`](HashTable::try_reserve) for a fallible version.
    pub fn reserve(&mut self, additional: usize) {
        if self.try_reserve(additional).is_err() {
            capacity_overflow();
        }
    }

    /// Fallible version of [`reserve`](HashTable::reserve).
    ///
    /// On error the table is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table: HashTable<u32, u32> = HashTable::with_capacity(1);
    /// table.try_reserve(1000).unwrap();
    /// assert!(table.capacity() >= 1000);
    /// assert!(table.try_reserve(usize::MAX).is_err());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .populated
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow(usize::MAX))?;
        if required <= self.max_pop {
            return Ok(());
        }

        let mut buckets = self.buckets.len();
        while max_population(buckets, self.load_factor) < required {
            buckets = buckets
                .checked_mul(2)
                .ok_or(Error::CapacityOverflow(required))?;
        }

        self.rehash(buckets);
        Ok(())
    }

    fn grow(&mut self) {
        let buckets = self
            .buckets
            .len()
            .checked_mul(2)
            .unwrap_or_else(|| capacity_overflow());
        self.rehash(buckets);
    }

    /// Replaces the bucket array with one of `buckets` chains and moves every
    /// entry across, preserving relative order within each chain.
    fn rehash(&mut self, buckets: usize) {
        debug_assert!(buckets.is_power_of_two());
        log::trace!(
            "rehashing {} entries from {} to {} buckets",
            self.populated,
            self.buckets.len(),
            buckets
        );

        // Allocated before anything is moved, so a failed allocation leaves
        // the current array intact.
        let old = core::mem::replace(&mut self.buckets, new_buckets(buckets));
        let mask = buckets - 1;
        for slot in old.into_iter().flatten() {
            self.buckets[slot.hash as usize & mask].push(slot);
        }

        self.max_pop = max_population(buckets, self.load_factor);
    }

    /// Returns an iterator over the entries, bucket by bucket, each chain in
    /// insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator over the entries with mutable access to the
    /// values. Ordering matches [`iter`](HashTable::iter).
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            chain: Default::default(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator over the keys. Ordering matches
    /// [`iter`](HashTable::iter).
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values. Ordering matches
    /// [`iter`](HashTable::iter).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// assert_eq!(table.values().count(), 0);
    ///
    /// table.insert("a", 1);
    /// table.insert("b", 2);
    /// let mut values: Vec<i32> = table.values().copied().collect();
    /// values.sort();
    /// assert_eq!(values, [1, 2]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable references to the values.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Collects every entry into a vector of `(key, value)` references,
    /// bucket by bucket, each chain in insertion order.
    ///
    /// The result always has [`len`](HashTable::len) elements.
    pub fn to_entry_list(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Vec::len)
    }
}

impl<K, V> HashTable<K, V>
where
    K: Hash + Eq,
{
    #[inline(always)]
    fn hash_key(&self, key: &K) -> u64 {
        self.hash_builder.hash_one(key)
    }

    fn find_position(&self, hash: u64, key: &K) -> Option<(usize, usize)> {
        let index = self.bucket_index(hash);
        self.buckets[index]
            .iter()
            .position(|slot| slot.hash == hash && slot.key == *key)
            .map(|pos| (index, pos))
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// Expected O(1); worst case linear in the length of the key's chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, "a");
    /// assert_eq!(table.get(&1), Some(&"a"));
    /// assert_eq!(table.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_key(key);
        self.buckets[self.bucket_index(hash)]
            .iter()
            .find(|slot| slot.hash == hash && slot.key == *key)
            .map(|slot| &slot.value)
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, String::from("hello"));
    /// if let Some(value) = table.get_mut(&1) {
    ///     value.push_str(" world");
    /// }
    /// assert_eq!(table.get(&1).map(String::as_str), Some("hello world"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_key(key);
        let index = self.bucket_index(hash);
        self.buckets[index]
            .iter_mut()
            .find(|slot| slot.hash == hash && slot.key == *key)
            .map(|slot| &mut slot.value)
    }

    /// Returns `true` if the table holds a value for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Gets the entry for `key` for in-place insertion or modification.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut counts = HashTable::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.entry(word).or_insert(0) += 1;
    /// }
    /// assert_eq!(counts.get(&"a"), Some(&2));
    /// assert_eq!(counts.get(&"b"), Some(&1));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hash_key(&key);
        match self.find_position(hash, &key) {
            Some((index, pos)) => Entry::Occupied(OccupiedEntry {
                slot: &mut self.buckets[index][pos],
            }),
            None => Entry::Vacant(VacantEntry {
                table: self,
                hash,
                key,
            }),
        }
    }

    /// Inserts a key-value pair.
    ///
    /// If the key was already present its value is replaced in place and the
    /// old value returned. Otherwise the pair is appended to its chain and
    /// `None` returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// assert_eq!(table.insert(37, "a"), None);
    /// assert_eq!(table.insert(37, "b"), Some("a"));
    /// assert_eq!(table.get(&37), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entry(key) {
            Entry::Occupied(mut entry) => Some(entry.insert(value)),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Inserts a key-value pair and returns the previous value for the key,
    /// or a copy of `value` if the key was new.
    ///
    /// Use [`insert`](HashTable::insert) to avoid the clone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// assert_eq!(table.put("x", "1"), "1");
    /// assert_eq!(table.put("x", "2"), "1");
    /// assert_eq!(table.get(&"x"), Some(&"2"));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> V
    where
        V: Clone,
    {
        match self.entry(key) {
            Entry::Occupied(mut entry) => entry.insert(value),
            Entry::Vacant(entry) => entry.insert(value).clone(),
        }
    }
}

impl<K, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for HashTable<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(key, value)| other.get(key).is_some_and(|v| *v == *value))
    }
}

impl<K, V> Eq for HashTable<K, V>
where
    K: Hash + Eq,
    V: Eq,
{
}

impl<K, V> Extend<(K, V)> for HashTable<K, V>
where
    K: Hash + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V> IntoIterator for HashTable<K, V> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.populated,
            buckets: self.buckets.into_iter(),
            chain: Default::default(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a HashTable<K, V> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut HashTable<K, V> {
    type IntoIter = IterMut<'a, K, V>;
    type Item = (&'a K, &'a mut V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A view into a single entry in the table, which may be vacant or occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, K, V> {
    /// The key is not present in the table.
    Vacant(VacantEntry<'a, K, V>),
    /// The key is present in the table.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant and returns a
    /// mutable reference to the value.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to the value if the entry is occupied.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts `V::default()` if the entry is vacant and returns a mutable
    /// reference to the value.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, K, V> {
    table: &'a mut HashTable<K, V>,
    hash: u64,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Appends the entry to the end of its chain and returns a mutable
    /// reference to the value.
    ///
    /// If the table is already at [`capacity`](HashTable::capacity), the
    /// bucket array is doubled first.
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        if table.populated >= table.max_pop {
            table.grow();
        }

        let index = table.bucket_index(self.hash);
        table.populated += 1;

        let bucket = &mut table.buckets[index];
        let pos = bucket.len();
        bucket.push(Slot {
            hash: self.hash,
            key: self.key,
            value,
        });
        &mut bucket[pos].value
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, K, V> {
    slot: &'a mut Slot<K, V>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.slot.key
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.slot.value
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.slot.value
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.slot.value
    }

    /// Replaces the value in place and returns the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.slot.value, value)
    }
}

/// An iterator over the entries of a [`HashTable`].
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Bucket<K, V>>,
    chain: core::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.chain.next() {
                self.remaining -= 1;
                return Some((&slot.key, &slot.value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            remaining: self.remaining,
        }
    }
}

/// A mutable iterator over the entries of a [`HashTable`].
pub struct IterMut<'a, K, V> {
    buckets: core::slice::IterMut<'a, Bucket<K, V>>,
    chain: core::slice::IterMut<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.chain.next() {
                self.remaining -= 1;
                return Some((&slot.key, &mut slot.value));
            }
            self.chain = self.buckets.next()?.iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of a [`HashTable`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`HashTable`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of a [`HashTable`].
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

/// An owning iterator over the entries of a [`HashTable`].
pub struct IntoIter<K, V> {
    buckets: alloc::vec::IntoIter<Bucket<K, V>>,
    chain: alloc::vec::IntoIter<Slot<K, V>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.chain.next() {
                self.remaining -= 1;
                return Some((slot.key, slot.value));
            }
            self.chain = self.buckets.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
