//! A fixed-capacity bit array with fast enumeration of set bits.
//! `no_std` (needs `alloc`), no `unsafe`.
//!
//! Useful wherever a compact membership set over `0..n` is needed: visited
//! sets in graph searches, sieves, flag vectors.
//!
//! [`BitArray`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use scan_bitset::BitArray;
//!
//! let mut bits = BitArray::new(50_000);
//! for i in (0..50_000).step_by(2) {
//!     bits.set(i);
//! }
//! assert!(bits.test(4));
//! assert!(!bits.test(5));
//!
//! let total: usize = bits.scan().sum();
//! assert_eq!(total, 624_975_000);
//!
//! // the same enumeration, driven externally
//! let mut total = 0;
//! let mut next = bits.first_set_bit();
//! while let Some(position) = next {
//!     total += position;
//!     next = bits.next_set_bit(position + 1);
//! }
//! assert_eq!(total, 624_975_000);
//! ```
//!
//! # Features
//!
//! - Capacity chosen at runtime, fixed afterwards; 1 bit per position packed
//!   into `u64` words
//! - O(1) `set`, `clear`, `test`, `toggle`
//! - Word-skipping enumeration that costs O(capacity / 64 + set bits):
//!   - [`BitArray::scan`] returns a stateful [`ScanCursor`]
//!   - [`BitArray::next_set_bit`] finds the next set position from any start
//! - Out-of-range access is a programmer error and panics; every fallible
//!   operation also has a `try_*` form returning [`BitArrayError`]
//! - Fatal errors are reported through the [`log`] facade before panicking

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bitarray;
mod cursor;
mod error;

pub use bitarray::{BitArray, Dump, WORD_BITS, word_count};
pub use cursor::ScanCursor;
pub use error::BitArrayError;
