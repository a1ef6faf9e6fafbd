//! Fixed-length bit vectors over the SKU universe.
//!
//! ## Layout
//!
//! Bit `i` lives in word `i / 64` at bit `i % 64`. Trailing bits of the last
//! word are always zero, so word-wise equality and hashing agree with
//! position-wise equality.
//!
//! ## Cardinality
//!
//! The number of set bits is cached at construction. Containment tests use it
//! as a cheap necessary condition before touching the words.

use crate::error::{Result, SimulationError};
use crate::types::InternalSkuIndex;

const WORD_BITS: usize = 64;

#[inline]
fn word_count(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

/// A selection of SKUs from a catalog of fixed size `M`.
///
/// ## Example
///
/// ```
/// use sku_coverage::types::SkuSubset;
///
/// let subset = SkuSubset::from_indices(3, &[0, 2]).unwrap();
/// assert_eq!(subset.len(), 3);
/// assert_eq!(subset.cardinality(), 2);
/// assert_eq!(subset.to_bools(), vec![true, false, true]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkuSubset {
    /// Packed bits, least significant bit first
    words: Vec<u64>,

    /// Universe size `M`
    len: usize,

    /// Number of set bits
    ones: usize,
}

impl SkuSubset {
    /// Create an all-false vector of length `len`
    pub fn empty(len: usize) -> Self {
        Self {
            words: vec![0; word_count(len)],
            len,
            ones: 0,
        }
    }

    /// Create an all-true vector of length `len`
    pub fn full(len: usize) -> Self {
        let mut subset = Self::empty(len);
        for index in 0..len {
            subset.insert(index);
        }
        subset
    }

    /// Build a vector from a list of active positions.
    ///
    /// Repeated positions are collapsed.
    ///
    /// # Errors
    ///
    /// `SkuIndexOutOfRange` if any position is `>= len`.
    pub fn from_indices(len: usize, indices: &[InternalSkuIndex]) -> Result<Self> {
        let mut subset = Self::empty(len);
        for &index in indices {
            if index >= len {
                return Err(SimulationError::SkuIndexOutOfRange {
                    index,
                    catalog_size: len,
                });
            }
            subset.insert(index);
        }
        Ok(subset)
    }

    /// Build a vector from one boolean per position
    pub fn from_bools(bits: &[bool]) -> Self {
        let mut subset = Self::empty(bits.len());
        for (index, &bit) in bits.iter().enumerate() {
            if bit {
                subset.insert(index);
            }
        }
        subset
    }

    /// Universe size `M`
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the universe has no positions at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of selected SKUs
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.ones
    }

    /// Check whether position `index` is selected
    #[inline]
    pub fn contains(&self, index: InternalSkuIndex) -> bool {
        index < self.len && self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Iterate over selected positions in increasing order
    pub fn indices(&self) -> impl Iterator<Item = InternalSkuIndex> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(word_index, &word)| {
                let mut remaining = word;
                std::iter::from_fn(move || {
                    if remaining == 0 {
                        return None;
                    }
                    let bit = remaining.trailing_zeros() as usize;
                    remaining &= remaining - 1;
                    Some(word_index * WORD_BITS + bit)
                })
            })
    }

    /// Expand into one boolean per position
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.len).map(|index| self.contains(index)).collect()
    }

    /// Check that every position selected in `other` is selected here.
    ///
    /// Vectors over different universes never contain one another.
    pub fn is_superset_of(&self, other: &SkuSubset) -> bool {
        if self.len != other.len || other.ones > self.ones {
            return false;
        }
        self.words
            .iter()
            .zip(&other.words)
            .all(|(&mine, &theirs)| theirs & !mine == 0)
    }

    /// Render as a string of `0`/`1` characters, position 0 first
    pub fn to_bit_string(&self) -> String {
        (0..self.len)
            .map(|index| if self.contains(index) { '1' } else { '0' })
            .collect()
    }

    // ========================================================================
    // Crate-internal mutation (generator working vector only)
    // ========================================================================

    #[inline]
    pub(crate) fn insert(&mut self, index: InternalSkuIndex) {
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if *word & mask == 0 {
            *word |= mask;
            self.ones += 1;
        }
    }

    #[inline]
    pub(crate) fn remove(&mut self, index: InternalSkuIndex) {
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if *word & mask != 0 {
            *word &= !mask;
            self.ones -= 1;
        }
    }

    /// Recount set bits from the words, ignoring the cache
    pub(crate) fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Bytes held by one subset over a universe of `len`, inline and heap
    pub(crate) fn footprint(len: usize) -> usize {
        std::mem::size_of::<Self>() + word_count(len) * std::mem::size_of::<u64>()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
