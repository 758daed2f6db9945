use thiserror::Error;

/// Errors reported when configuring or growing a [`HashTable`].
///
/// [`HashTable`]: crate::HashTable
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The load factor was NaN, zero, negative, or infinite.
    #[error("load factor must be a positive, finite number, got {0}")]
    InvalidLoadFactor(f64),
    /// The requested number of entries cannot be backed by a power-of-two
    /// bucket array that fits in `usize`.
    #[error("capacity overflow: cannot size a bucket array for {0} entries")]
    CapacityOverflow(usize),
}

/// Result type for fallible table operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidLoadFactor(-1.0).to_string(),
            "load factor must be a positive, finite number, got -1"
        );
        assert_eq!(
            Error::CapacityOverflow(usize::MAX).to_string(),
            alloc::format!(
                "capacity overflow: cannot size a bucket array for {} entries",
                usize::MAX
            )
        );
    }
}
