#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Construction parameters and their defaults.
pub mod config;

mod error;

pub mod hash_table;

/// Chain-length statistics for inspecting how keys spread across buckets.
#[cfg(any(test, feature = "stats"))]
pub mod stats;

pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use hash_table::Entry;
pub use hash_table::HashTable;
