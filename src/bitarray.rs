use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display, Formatter};

use crate::cursor::ScanCursor;
use crate::error::{BitArrayError, fatal};

/// Number of bits held by one storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Computes the number of 64-bit words needed to store `capacity` bits.
///
/// # Examples
/// ```
/// use scan_bitset::word_count;
///
/// assert_eq!(word_count(1), 1);
/// assert_eq!(word_count(64), 1);
/// assert_eq!(word_count(65), 2);
/// assert_eq!(word_count(128), 2);
/// ```
pub const fn word_count(capacity: usize) -> usize {
    capacity.div_ceil(WORD_BITS)
}

/// Splits a position into its word index and its single-bit mask.
///
/// The mask is built from a `u64` literal so bits 32..64 are addressable.
#[inline]
pub(crate) const fn locate(position: usize) -> (usize, u64) {
    (position / WORD_BITS, 1u64 << (position % WORD_BITS))
}

/// A fixed-capacity array of bits.
///
/// Bits are packed into `u64` words, least significant bit first: position
/// `p` lives in word `p / 64` under the mask `1 << (p % 64)`. The capacity is
/// fixed at construction and the storage never grows or shrinks. Padding bits
/// past the capacity in the last word are never set and never reported.
///
/// Single-bit accessors run in O(1). Enumeration through [`scan`] or
/// [`next_set_bit`] tests whole words against zero first, so a full pass
/// costs O(capacity / 64 + number of set bits).
///
/// [`scan`]: BitArray::scan
/// [`next_set_bit`]: BitArray::next_set_bit
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct BitArray {
    capacity: usize,
    pub(crate) words: Box<[u64]>,
}

impl BitArray {
    /// Creates a new bit array with `capacity` bits, all of them clear.
    ///
    /// # Panics
    /// Panics if `capacity == 0` or if the storage cannot be allocated. Use
    /// [`try_new`] to get these conditions back as an error.
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let bits = BitArray::new(100);
    /// assert_eq!(bits.capacity(), 100);
    /// assert_eq!(bits.popcount(), 0);
    /// ```
    ///
    /// [`try_new`]: BitArray::try_new
    #[track_caller]
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(bits) => bits,
            Err(err) => fatal(err),
        }
    }

    /// Creates a new bit array with `capacity` bits, all of them clear.
    ///
    /// Returns [`BitArrayError::ZeroCapacity`] for a zero capacity and
    /// [`BitArrayError::AllocationFailure`] when the words cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::{BitArray, BitArrayError};
    ///
    /// assert!(BitArray::try_new(64).is_ok());
    /// assert_eq!(BitArray::try_new(0), Err(BitArrayError::ZeroCapacity));
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, BitArrayError> {
        if capacity == 0 {
            return Err(BitArrayError::ZeroCapacity);
        }
        let words = word_count(capacity);
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(words)
            .map_err(|_| BitArrayError::AllocationFailure { capacity, words })?;
        storage.resize(words, 0u64);
        log::trace!("allocated {words} words for a {capacity}-bit array");
        Ok(Self {
            capacity,
            words: storage.into_boxed_slice(),
        })
    }

    /// Creates a bit array of `capacity` bits with only the given positions
    /// set.
    ///
    /// # Panics
    /// Panics if any position is out of range (i.e., `>= capacity`) or if
    /// [`new`] would panic.
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let bits = BitArray::from_ones_iter(5, [0, 2, 4]);
    /// assert!(bits.test(2));
    /// assert!(!bits.test(3));
    /// assert_eq!(bits.popcount(), 3);
    /// ```
    ///
    /// [`new`]: BitArray::new
    #[track_caller]
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(capacity: usize, iter: I) -> Self {
        let mut bits = Self::new(capacity);
        for position in iter {
            bits.set(position);
        }
        bits
    }

    /// Returns the number of addressable bits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of storage words, `ceil(capacity / 64)`.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Clears every bit.
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let mut bits = BitArray::from_ones_iter(70, [1, 65]);
    /// bits.reset();
    /// assert_eq!(bits.first_set_bit(), None);
    /// ```
    pub fn reset(&mut self) {
        log::trace!("resetting {}-bit array", self.capacity);
        self.words.fill(0);
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(usize, u64), BitArrayError> {
        if index < self.capacity {
            Ok(locate(index))
        } else {
            Err(BitArrayError::IndexOutOfRange {
                index,
                capacity: self.capacity,
            })
        }
    }

    /// Sets the bit at the given position.
    ///
    /// # Panics
    /// Panics if the position is out of range (i.e., `>= capacity`).
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let mut bits = BitArray::new(8);
    /// assert!(!bits.test(3));
    /// bits.set(3);
    /// assert!(bits.test(3));
    /// ```
    #[inline]
    #[track_caller]
    pub fn set(&mut self, index: usize) {
        if let Err(err) = self.try_set(index) {
            fatal(err)
        }
    }

    /// Sets the bit at the given position, or returns
    /// [`BitArrayError::IndexOutOfRange`].
    #[inline]
    pub fn try_set(&mut self, index: usize) -> Result<(), BitArrayError> {
        let (word_idx, mask) = self.check_index(index)?;
        self.words[word_idx] |= mask;
        Ok(())
    }

    /// Clears the bit at the given position.
    ///
    /// # Panics
    /// Panics if the position is out of range (i.e., `>= capacity`).
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let mut bits = BitArray::from_ones_iter(8, [3]);
    /// bits.clear(3);
    /// assert!(!bits.test(3));
    /// ```
    #[inline]
    #[track_caller]
    pub fn clear(&mut self, index: usize) {
        if let Err(err) = self.try_clear(index) {
            fatal(err)
        }
    }

    /// Clears the bit at the given position, or returns
    /// [`BitArrayError::IndexOutOfRange`].
    #[inline]
    pub fn try_clear(&mut self, index: usize) -> Result<(), BitArrayError> {
        let (word_idx, mask) = self.check_index(index)?;
        self.words[word_idx] &= !mask;
        Ok(())
    }

    /// Returns `true` if the bit at the given position is set.
    ///
    /// # Panics
    /// Panics if the position is out of range (i.e., `>= capacity`).
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let mut bits = BitArray::new(100);
    /// bits.set(40);
    /// assert!(bits.test(40));
    /// assert!(!bits.test(8));
    /// ```
    #[inline]
    #[track_caller]
    pub fn test(&self, index: usize) -> bool {
        match self.try_test(index) {
            Ok(bit) => bit,
            Err(err) => fatal(err),
        }
    }

    /// Returns whether the bit at the given position is set, or
    /// [`BitArrayError::IndexOutOfRange`].
    #[inline]
    pub fn try_test(&self, index: usize) -> Result<bool, BitArrayError> {
        let (word_idx, mask) = self.check_index(index)?;
        Ok(self.words[word_idx] & mask != 0)
    }

    /// Toggles the bit at the given position.
    ///
    /// Returns the previous value of the bit (before the toggle).
    ///
    /// # Panics
    /// Panics if the position is out of range (i.e., `>= capacity`).
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let mut bits = BitArray::new(8);
    /// assert_eq!(bits.toggle(4), false); // flipped from false to true
    /// assert_eq!(bits.toggle(4), true);  // flipped from true to false
    /// ```
    #[inline]
    #[track_caller]
    pub fn toggle(&mut self, index: usize) -> bool {
        let (word_idx, mask) = match self.check_index(index) {
            Ok(location) => location,
            Err(err) => fatal(err),
        };
        let bit = self.words[word_idx] & mask != 0;
        self.words[word_idx] ^= mask;
        bit
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let bits = BitArray::from_ones_iter(200, [0, 64, 199]);
    /// assert_eq!(bits.popcount(), 3);
    /// ```
    #[inline]
    pub fn popcount(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the smallest set position that is `>= start`, or `None` if
    /// there is none.
    ///
    /// A `start` at or past the capacity yields `None`. No state is kept
    /// between calls, so `next_set_bit(p + 1)` after a hit at `p` continues
    /// an enumeration from wherever the caller left it.
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let bits = BitArray::from_ones_iter(128, [0, 63, 64, 127]);
    /// assert_eq!(bits.next_set_bit(1), Some(63));
    /// assert_eq!(bits.next_set_bit(65), Some(127));
    /// assert_eq!(bits.next_set_bit(128), None);
    /// ```
    #[inline]
    pub fn next_set_bit(&self, start: usize) -> Option<usize> {
        self.scan_from(start).next()
    }

    /// Returns the position of the first set bit or `None` if all bits are
    /// clear.
    #[inline]
    pub fn first_set_bit(&self) -> Option<usize> {
        self.next_set_bit(0)
    }

    /// Returns a cursor over the positions of all set bits, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let bits = BitArray::from_ones_iter(128, [127, 0, 64, 63]);
    /// let ones: Vec<usize> = bits.scan().collect();
    /// assert_eq!(ones, [0, 63, 64, 127]);
    /// ```
    #[inline]
    pub fn scan(&self) -> ScanCursor<'_> {
        self.scan_from(0)
    }

    /// Returns a cursor over the positions of set bits that are `>= start`,
    /// in ascending order.
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let bits = BitArray::from_ones_iter(10, [1, 4, 8]);
    /// let ones: Vec<usize> = bits.scan_from(2).collect();
    /// assert_eq!(ones, [4, 8]);
    /// ```
    #[inline]
    pub fn scan_from(&self, start: usize) -> ScanCursor<'_> {
        ScanCursor::new(&self.words, self.capacity, start)
    }

    /// Returns a displayable list of the set positions, ascending and
    /// separated by single spaces.
    ///
    /// Meant for diagnostics; the format is not stable.
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let bits = BitArray::from_ones_iter(70, [3, 69, 12]);
    /// assert_eq!(bits.dump().to_string(), "3 12 69");
    /// ```
    pub fn dump(&self) -> Dump<'_> {
        Dump(self)
    }
}

impl<'bits> IntoIterator for &'bits BitArray {
    type Item = usize;
    type IntoIter = ScanCursor<'bits>;

    fn into_iter(self) -> Self::IntoIter {
        self.scan()
    }
}

impl Debug for BitArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BitArray[{}] ", self.capacity)?;
        f.debug_set().entries(self.scan()).finish()
    }
}

/// Textual listing of the set positions of a [`BitArray`].
///
/// Returned by [`BitArray::dump()`].
#[derive(Clone, Copy)]
pub struct Dump<'bits>(&'bits BitArray);

impl Display for Dump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut ones = self.0.scan();
        if let Some(first) = ones.next() {
            write!(f, "{first}")?;
            for position in ones {
                write!(f, " {position}")?;
            }
        }
        Ok(())
    }
}
