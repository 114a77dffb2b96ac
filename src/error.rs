/// Errors reported by [`BitArray`](crate::BitArray) construction and access.
///
/// The panicking methods of [`BitArray`](crate::BitArray) treat every variant
/// as a programmer error and panic with the variant's message. The `try_*`
/// methods hand it back instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitArrayError {
    /// A bit array was requested with a capacity of zero.
    #[error("bit array capacity must be greater than zero")]
    ZeroCapacity,

    /// The word storage for the requested capacity could not be reserved.
    #[error("bit array allocation failure: cannot reserve {words} words for {capacity} bits")]
    AllocationFailure {
        /// Requested number of bits.
        capacity: usize,
        /// Number of 64-bit words that would have been needed.
        words: usize,
    },

    /// A position outside of `[0, capacity)` was accessed.
    #[error("bit array index {index} out of range [0, {capacity})")]
    IndexOutOfRange {
        /// The offending position.
        index: usize,
        /// Capacity of the bit array that was accessed.
        capacity: usize,
    },
}

/// Reports `err` and panics with its message.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fatal(err: BitArrayError) -> ! {
    log::error!("{err}");
    panic!("{err}")
}
