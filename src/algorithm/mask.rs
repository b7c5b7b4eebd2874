//! Bit-set representations for cell coverage and vertex sets
//!
//! Every stage of the pipeline manipulates sets of small indices: cells covered by
//! a placement, neighbours of a vertex, the `R`/`P`/`X` sets of the search. The
//! [`Mask`] trait abstracts over a fixed-width machine word and a growable bit
//! vector so the executor can pick the narrowest representation that fits.

use bitvec::prelude::*;
use num_traits::PrimInt;
use std::fmt;
use std::hash::Hash;

/// Set of non-negative indices stored as bits
///
/// All masks taking part in one computation are created with the same width.
/// Indices at or beyond the capacity of a fixed-width representation are ignored
/// on insertion and reported absent on lookup.
pub trait Mask: Clone + Eq + Hash + fmt::Debug {
    /// Number of indices the representation can hold, `None` when unbounded
    const CAPACITY: Option<usize>;

    /// Create an empty mask able to hold `width` indices
    fn empty(width: usize) -> Self;

    /// Create a mask with indices `0..width` present
    fn full(width: usize) -> Self;

    /// Add an index
    fn include(&mut self, index: usize);

    /// Remove an index
    fn exclude(&mut self, index: usize);

    /// Test index membership
    fn has(&self, index: usize) -> bool;

    /// Add every index of `other`
    fn union_with(&mut self, other: &Self);

    /// Keep only indices also present in `other`
    fn intersect_with(&mut self, other: &Self);

    /// Remove every index present in `other`
    fn difference_with(&mut self, other: &Self);

    /// Test whether the two masks share at least one index
    fn intersects(&self, other: &Self) -> bool;

    /// Test whether no index is present
    fn is_clear(&self) -> bool;

    /// Number of indices present
    fn cardinality(&self) -> usize;

    /// Smallest index present
    fn lowest(&self) -> Option<usize>;

    /// Check whether `width` indices fit this representation
    fn fits(width: usize) -> bool {
        Self::CAPACITY.is_none_or(|capacity| width <= capacity)
    }

    /// Create a mask holding a single index
    fn singleton(width: usize, index: usize) -> Self {
        let mut mask = Self::empty(width);
        mask.include(index);
        mask
    }

    /// Create a mask from a list of indices
    fn from_indices(width: usize, indices: &[usize]) -> Self {
        let mut mask = Self::empty(width);
        for &index in indices {
            mask.include(index);
        }
        mask
    }

    /// Create a new mask containing the union
    #[must_use]
    fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Create a new mask containing the intersection
    #[must_use]
    fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Create a new mask containing the indices of `self` absent from `other`
    #[must_use]
    fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.difference_with(other);
        result
    }

    /// Extract all present indices in ascending order
    fn indices(&self) -> Vec<usize> {
        let mut remaining = self.clone();
        let mut indices = Vec::with_capacity(self.cardinality());
        while let Some(index) = remaining.lowest() {
            remaining.exclude(index);
            indices.push(index);
        }
        indices
    }
}

/// Fixed-width mask stored in a single primitive integer
///
/// Bit `i` of the word represents index `i`. Used with `u64` and `u128`
/// when the cell count and the placement count both fit the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WordMask<T>(T);

impl<T: Copy> WordMask<T> {
    /// Wrap raw bits
    pub const fn new(bits: T) -> Self {
        Self(bits)
    }

    /// Raw bits of the mask
    pub const fn bits(self) -> T {
        self.0
    }
}

impl<T: PrimInt> WordMask<T> {
    /// Number of indices a word of type `T` holds
    pub const BITS: usize = std::mem::size_of::<T>() * 8;

    fn bit(index: usize) -> Option<T> {
        (index < Self::BITS).then(|| T::one() << index)
    }
}

impl<T> Mask for WordMask<T>
where
    T: PrimInt + Hash + fmt::Debug,
{
    const CAPACITY: Option<usize> = Some(Self::BITS);

    fn empty(_width: usize) -> Self {
        Self(T::zero())
    }

    fn full(width: usize) -> Self {
        if width >= Self::BITS {
            Self(!T::zero())
        } else {
            Self((T::one() << width) - T::one())
        }
    }

    fn include(&mut self, index: usize) {
        if let Some(bit) = Self::bit(index) {
            self.0 = self.0 | bit;
        }
    }

    fn exclude(&mut self, index: usize) {
        if let Some(bit) = Self::bit(index) {
            self.0 = self.0 & !bit;
        }
    }

    fn has(&self, index: usize) -> bool {
        Self::bit(index).is_some_and(|bit| self.0 & bit != T::zero())
    }

    fn union_with(&mut self, other: &Self) {
        self.0 = self.0 | other.0;
    }

    fn intersect_with(&mut self, other: &Self) {
        self.0 = self.0 & other.0;
    }

    fn difference_with(&mut self, other: &Self) {
        self.0 = self.0 & !other.0;
    }

    fn intersects(&self, other: &Self) -> bool {
        self.0 & other.0 != T::zero()
    }

    fn is_clear(&self) -> bool {
        self.0 == T::zero()
    }

    fn cardinality(&self) -> usize {
        self.0.count_ones() as usize
    }

    fn lowest(&self) -> Option<usize> {
        (self.0 != T::zero()).then(|| self.0.trailing_zeros() as usize)
    }
}

/// Growable mask for grids or placement lists wider than any machine word
impl Mask for BitVec {
    const CAPACITY: Option<usize> = None;

    fn empty(width: usize) -> Self {
        bitvec![0; width]
    }

    fn full(width: usize) -> Self {
        bitvec![1; width]
    }

    fn include(&mut self, index: usize) {
        if index < self.len() {
            self.set(index, true);
        }
    }

    fn exclude(&mut self, index: usize) {
        if index < self.len() {
            self.set(index, false);
        }
    }

    fn has(&self, index: usize) -> bool {
        self.get(index).as_deref() == Some(&true)
    }

    fn union_with(&mut self, other: &Self) {
        *self |= other.as_bitslice();
    }

    fn intersect_with(&mut self, other: &Self) {
        *self &= other.as_bitslice();
    }

    fn difference_with(&mut self, other: &Self) {
        for index in other.iter_ones() {
            Mask::exclude(self, index);
        }
    }

    fn intersects(&self, other: &Self) -> bool {
        self.iter_ones().any(|index| Mask::has(other, index))
    }

    fn is_clear(&self) -> bool {
        self.not_any()
    }

    fn cardinality(&self) -> usize {
        self.count_ones()
    }

    fn lowest(&self) -> Option<usize> {
        self.first_one()
    }
}

/// Representation chosen for one dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskWidth {
    /// Single `u64` word
    Word64,
    /// Single `u128` word
    Word128,
    /// Heap-allocated bit vector
    Dynamic,
}

impl MaskWidth {
    /// Pick the narrowest representation holding `required` indices
    pub const fn select(required: usize) -> Self {
        if required <= 64 {
            Self::Word64
        } else if required <= 128 {
            Self::Word128
        } else {
            Self::Dynamic
        }
    }

    /// Number of indices the representation can hold
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::Word64 => Some(64),
            Self::Word128 => Some(128),
            Self::Dynamic => None,
        }
    }

    /// Check whether `required` indices fit this representation
    pub const fn fits(self, required: usize) -> bool {
        match self.capacity() {
            Some(capacity) => required <= capacity,
            None => true,
        }
    }
}

impl fmt::Display for MaskWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word64 => write!(f, "u64"),
            Self::Word128 => write!(f, "u128"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}
