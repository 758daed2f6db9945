use crate::error::Error;
use crate::error::Result;

/// Number of entries a table is sized for when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 100;

/// Ratio of entries to buckets at which a table doubles its bucket array.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.9;

/// Construction parameters for a [`HashTable`].
///
/// # Examples
///
/// ```rust
/// use chain_hash::Config;
/// use chain_hash::HashTable;
///
/// let config = Config::default().with_capacity(4).with_load_factor(0.75);
/// let table: HashTable<u32, &str> = HashTable::with_config(config).unwrap();
/// assert_eq!(table.bucket_count(), 4);
/// assert_eq!(table.capacity(), 3);
/// ```
///
/// [`HashTable`]: crate::HashTable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Requested initial capacity. Rounded up to the next power of two to
    /// produce the bucket count, with a minimum of one bucket.
    pub capacity: usize,
    /// Growth threshold, expressed as entries per bucket.
    ///
    /// Values at or above `1.0` are accepted, in which case chains are
    /// expected to hold more than one entry on average before growth.
    pub load_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl Config {
    /// Sets the requested initial capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load-factor threshold.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks the configuration and returns the bucket count it resolves to.
    pub(crate) fn bucket_count(&self) -> Result<usize> {
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(Error::InvalidLoadFactor(self.load_factor));
        }

        bucket_count_for(self.capacity).ok_or(Error::CapacityOverflow(self.capacity))
    }
}

/// Smallest power of two that is at least `capacity`, and never less than 1.
#[inline]
pub(crate) fn bucket_count_for(capacity: usize) -> Option<usize> {
    capacity.max(1).checked_next_power_of_two()
}

/// Number of entries `buckets` can hold before the next insertion of a new
/// key grows the table, i.e. `ceil(buckets * load_factor)`.
///
/// Saturates at `usize::MAX` for very large load factors.
#[inline]
pub(crate) fn max_population(buckets: usize, load_factor: f64) -> usize {
    let threshold = buckets as f64 * load_factor;
    let truncated = threshold as usize;
    if (truncated as f64) < threshold {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
