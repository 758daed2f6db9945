use alloc::vec::Vec;

use crate::hash_table::HashTable;

/// Chain statistics for hash table analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStats {
    /// Number of entries currently in the table
    pub entries: usize,
    /// Length of the bucket array
    pub buckets: usize,
    /// Number of buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Actual load (entries / buckets)
    pub load: f64,
    /// Configured growth threshold
    pub load_factor: f64,
}

impl ChainStats {
    /// Mean length of the non-empty chains.
    pub fn mean_chain(&self) -> f64 {
        if self.occupied_buckets == 0 {
            0.0
        } else {
            self.entries as f64 / self.occupied_buckets as f64
        }
    }

    /// Pretty-print the chain statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Chain Statistics ===");
        println!(
            "Population: {} entries in {} buckets ({:.2} load, threshold {:.2})",
            self.entries, self.buckets, self.load, self.load_factor
        );
        println!(
            "Bucket Usage: {}/{} ({:.2}% occupied)",
            self.occupied_buckets,
            self.buckets,
            if self.buckets == 0 {
                0.0
            } else {
                self.occupied_buckets as f64 / self.buckets as f64 * 100.0
            }
        );
        println!(
            "Chains: longest {}, mean {:.2}",
            self.longest_chain,
            self.mean_chain()
        );
    }
}

/// Number of buckets per chain length.
///
/// `counts()[n]` is the number of buckets whose chain holds exactly `n`
/// entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainHistogram {
    counts: Vec<usize>,
}

impl ChainHistogram {
    /// Bucket counts indexed by chain length.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Pretty-prints the histogram horizontally using stdout, one row per
    /// chain length.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        let buckets: usize = self.counts.iter().sum();
        println!("chain histogram ({} buckets):", buckets);

        let make_bar = |count: usize| -> std::string::String {
            if count == 0 {
                return std::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            match units % 8 {
                0 => {}
                1 => bar.push('▏'),
                2 => bar.push('▎'),
                3 => bar.push('▍'),
                4 => bar.push('▌'),
                5 => bar.push('▋'),
                6 => bar.push('▊'),
                _ => bar.push('▉'),
            }
            bar
        };

        for (len, &count) in self.counts.iter().enumerate() {
            println!("{:>3} | {} ({})", len, make_bar(count), count);
        }
    }
}

impl<K, V> HashTable<K, V> {
    /// Returns chain statistics for the current table state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::with_capacity(16);
    /// for i in 0..10 {
    ///     table.insert(i, i);
    /// }
    ///
    /// let stats = table.chain_stats();
    /// assert_eq!(stats.entries, 10);
    /// assert_eq!(stats.buckets, 16);
    /// assert!(stats.longest_chain >= 1);
    /// ```
    pub fn chain_stats(&self) -> ChainStats {
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for len in self.chain_lengths() {
            if len > 0 {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(len);
        }

        ChainStats {
            entries: self.len(),
            buckets: self.bucket_count(),
            occupied_buckets,
            longest_chain,
            load: self.len() as f64 / self.bucket_count() as f64,
            load_factor: self.load_factor(),
        }
    }

    /// Computes a histogram of chain lengths for the current table state.
    ///
    /// The histogram always has at least one bin (empty chains) and ends at
    /// the longest chain.
    pub fn chain_histogram(&self) -> ChainHistogram {
        let mut counts = alloc::vec![0usize];
        for len in self.chain_lengths() {
            if len >= counts.len() {
                counts.resize(len + 1, 0);
            }
            counts[len] += 1;
        }
        ChainHistogram { counts }
    }
}
