//! A mutable sequence that behaves as if it were always sorted, while only
//! doing the sorting work the queries actually demand.
//!
//! Point lookups run a bounded quickselect over the backing array and leave
//! every partition step behind as a *pivot*: a position whose element is
//! already in its final sorted place. Pivots live in a treap keyed by
//! position, so later queries start from the tightest known bounds and
//! repeated or nearby queries approach constant time. Fully sorted stretches
//! are flagged and coalesced, which makes the structure indistinguishable
//! from a sorted array at the query interface without ever paying for a full
//! sort up front.
//!
//! ```
//! use lazysorted::LazySorted;
//!
//! let mut seq = LazySorted::new(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! assert_eq!(seq.get(0).unwrap(), &1);
//! assert_eq!(seq.get(-1).unwrap(), &9);
//! assert_eq!(seq.count_of(&1).unwrap(), 2);
//! ```
//!
//! A single instance is strictly single-threaded; distinct instances are
//! independent and may live on different threads.

#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

mod compare;
mod engine;
mod error;
mod pivot_tree;
mod sort;

use core::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use crate::compare::{Comparator, NaturalOrder};
pub use crate::error::{ComparatorError, Error};

use crate::engine::{Engine, CONTIG_THRESH};

/// A lazily sorted sequence.
///
/// The sequence owns its elements for its whole lifetime; its length is
/// fixed at construction. Indexing follows Python conventions: negative
/// indices count from the end, and slices take a `(start, stop, step)`
/// triple.
pub struct LazySorted<T, C = NaturalOrder> {
    engine: Engine<T, C>,
}

impl<T: Ord> LazySorted<T, NaturalOrder> {
    /// Wrap `items`, comparing through their [`Ord`] impl.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_comparator(items, NaturalOrder)
    }

    /// Like [`new`](Self::new) with a deterministic pivot-selection seed,
    /// for reproducible runs.
    pub fn with_seed(items: Vec<T>, seed: u64) -> Self {
        Self::with_comparator_and_seed(items, NaturalOrder, seed)
    }
}

impl<T, C> LazySorted<T, C>
where
    C: Comparator<T>,
{
    /// Wrap `items` with a caller-supplied comparator, which may fail.
    ///
    /// ```
    /// use lazysorted::{ComparatorError, LazySorted};
    ///
    /// let mut seq = LazySorted::with_comparator(vec![3.0f64, 1.0, 2.0], |a: &f64, b: &f64| {
    ///     a.partial_cmp(b).ok_or_else(|| ComparatorError::new("not comparable"))
    /// });
    /// assert_eq!(seq.get(0).unwrap(), &1.0);
    /// ```
    pub fn with_comparator(items: Vec<T>, cmp: C) -> Self {
        Self {
            engine: Engine::new(items, cmp, StdRng::from_entropy()),
        }
    }

    pub fn with_comparator_and_seed(items: Vec<T>, cmp: C, seed: u64) -> Self {
        Self {
            engine: Engine::new(items, cmp, StdRng::seed_from_u64(seed)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.engine.len() == 0
    }

    /// Element at position `index` in sorted order. Negative indices count
    /// from the end; anything outside `[-len, len)` is rejected before any
    /// sorting happens.
    pub fn get(&mut self, index: isize) -> Result<&T, Error> {
        let k = self.resolve_index(index)?;
        self.engine.sort_point(k)?;
        Ok(&self.engine.items()[k])
    }

    /// Elements selected by a Python-style `(start, stop, step)` slice, in
    /// slice order.
    ///
    /// Short strides sort the touched span once; long strides select each
    /// position independently.
    pub fn get_slice(&mut self, start: isize, stop: isize, step: isize) -> Result<Vec<&T>, Error> {
        let indices = self.slice_indices(start, stop, step)?;
        if indices.is_empty() {
            return Ok(Vec::new());
        }
        if step.unsigned_abs() <= CONTIG_THRESH as usize {
            let first = indices[0];
            let last = indices[indices.len() - 1];
            let (lo, hi) = (first.min(last), first.max(last) + 1);
            self.engine.sort_range(lo, hi)?;
        } else {
            for &k in &indices {
                self.engine.sort_point(k)?;
            }
        }
        let items = self.engine.items();
        Ok(indices.into_iter().map(|k| &items[k]).collect())
    }

    /// The elements that occupy positions `[start, stop)` of the sorted
    /// order, themselves in no particular order. Indices are clamped.
    ///
    /// Only the two boundary positions are selected, so this is cheaper
    /// than [`get_slice`](Self::get_slice) over the same span.
    pub fn between(&mut self, start: isize, stop: isize) -> Result<&[T], Error> {
        let n = self.len() as isize;
        let a = (if start < 0 { start + n } else { start }).clamp(0, n) as usize;
        let b = (if stop < 0 { stop + n } else { stop }).clamp(0, n) as usize;
        if a >= b {
            return Ok(&[]);
        }
        self.engine.sort_point(a)?;
        self.engine.sort_point(b)?;
        Ok(&self.engine.items()[a..b])
    }

    /// Smallest sorted position holding an element equal to `x`, or
    /// [`Error::NotFound`].
    pub fn index_of(&mut self, x: &T) -> Result<usize, Error> {
        match self.engine.find_item(x)? {
            Some(k) => Ok(k),
            None => Err(Error::NotFound),
        }
    }

    /// Number of elements equal to `x`; zero for a missing element.
    pub fn count_of(&mut self, x: &T) -> Result<usize, Error> {
        self.engine.count_of(x)
    }

    pub fn contains(&mut self, x: &T) -> Result<bool, Error> {
        Ok(self.engine.find_item(x)?.is_some())
    }

    /// Diagnostic view of the pivot structure: `(position, state)` pairs in
    /// position order, sentinels included.
    pub fn pivots(&self) -> Vec<(isize, &'static str)> {
        self.engine
            .pivots()
            .into_iter()
            .map(|(idx, flags)| (idx, flags.name()))
            .collect()
    }

    /// Give the elements back in their current physical arrangement.
    pub fn into_inner(self) -> Vec<T> {
        self.engine.into_items()
    }

    fn resolve_index(&self, index: isize) -> Result<usize, Error> {
        let n = self.len() as isize;
        let k = if index < 0 { index + n } else { index };
        if k < 0 || k >= n {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(k as usize)
    }

    /// Python slice normalization: resolve negative indices, clamp, and
    /// expand to the selected positions in slice order.
    fn slice_indices(&self, start: isize, stop: isize, step: isize) -> Result<Vec<usize>, Error> {
        if step == 0 {
            return Err(Error::InvalidStep);
        }
        let n = self.len() as isize;
        let mut indices = Vec::new();
        if step > 0 {
            let a = (if start < 0 { start + n } else { start }).clamp(0, n);
            let b = (if stop < 0 { stop + n } else { stop }).clamp(0, n);
            let mut i = a;
            while i < b {
                indices.push(i as usize);
                i += step;
            }
        } else {
            // a start (or stop) past either end becomes the nearest valid
            // position, with -1 meaning "before the beginning"
            let a = (if start < 0 { start + n } else { start }).clamp(-1, n - 1);
            let b = (if stop < 0 { stop + n } else { stop }).clamp(-1, n - 1);
            let mut i = a;
            while i > b {
                indices.push(i as usize);
                i += step;
            }
        }
        Ok(indices)
    }
}

impl<T, C> fmt::Debug for LazySorted<T, C>
where
    C: Comparator<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySorted")
            .field("len", &self.len())
            .field("pivots", &self.pivots())
            .finish()
    }
}
