use core::iter::{FusedIterator, Iterator};

use crate::bitarray::{WORD_BITS, locate};

/// Forward-only cursor over the positions of set bits in a
/// [`BitArray`](crate::BitArray).
///
/// Yields positions in ascending order, each exactly once, and keeps
/// returning `None` once exhausted. Whole words equal to zero are skipped in
/// a single step. The cursor borrows the bit array, so the array cannot be
/// modified or dropped while an enumeration is in progress. To scan again,
/// create a new cursor.
///
/// Returned by [`BitArray::scan()`](crate::BitArray::scan) and
/// [`BitArray::scan_from()`](crate::BitArray::scan_from).
#[derive(Clone, Debug)]
pub struct ScanCursor<'bits> {
    words: &'bits [u64],
    capacity: usize,
    word_idx: usize,
    // Bit of `words[word_idx]` that `position` refers to. Zero means the next
    // step starts a fresh word, in which case `position` is word aligned.
    mask: u64,
    position: usize,
    last: Option<usize>,
}

impl<'bits> ScanCursor<'bits> {
    pub(crate) fn new(words: &'bits [u64], capacity: usize, start: usize) -> Self {
        let (word_idx, mask) = locate(start);
        Self {
            words,
            capacity,
            word_idx,
            mask: if start % WORD_BITS == 0 { 0 } else { mask },
            position: start,
            last: None,
        }
    }

    /// Returns the last position this cursor yielded, or `None` if it has not
    /// yielded anything yet.
    ///
    /// # Examples
    /// ```
    /// use scan_bitset::BitArray;
    ///
    /// let bits = BitArray::from_ones_iter(100, [7, 70]);
    /// let mut cursor = bits.scan();
    /// assert_eq!(cursor.position(), None);
    /// cursor.next();
    /// assert_eq!(cursor.position(), Some(7));
    /// cursor.next();
    /// cursor.next();
    /// assert_eq!(cursor.position(), Some(70));
    /// ```
    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.last
    }

    /// Returns `true` once the cursor has moved past the last addressable
    /// position. An exhausted cursor only ever yields `None`.
    ///
    /// A cursor that still has unset positions ahead of it reports `false`
    /// until a call to `next` walks over them.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.capacity
    }
}

impl Iterator for ScanCursor<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.capacity {
            if self.mask == 0 {
                self.mask = 1;
                // skip empty words, never reading past the last one
                while self.words[self.word_idx] == 0 {
                    self.word_idx += 1;
                    self.position += WORD_BITS;
                    if self.position >= self.capacity {
                        return None;
                    }
                }
            }

            let position = self.position;
            let hit = self.words[self.word_idx] & self.mask != 0;
            self.mask <<= 1;
            self.position += 1;
            // the bit was shifted out of the word
            if self.mask == 0 {
                self.word_idx += 1;
            }
            if hit {
                self.last = Some(position);
                return Some(position);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.capacity.saturating_sub(self.position)))
    }
}

impl FusedIterator for ScanCursor<'_> {}
