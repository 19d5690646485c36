//! The partial-sort engine: bounded quickselect over the element array,
//! recording every partition step as a pivot in the [`PivotTree`].
//!
//! Each primitive does the minimum rearranging needed to answer its query and
//! leaves the evidence behind, so repeated or nearby queries get cheaper
//! until they short-circuit entirely.

use core::cmp::Ordering;

use rand::rngs::StdRng;
use rand::Rng;

use crate::compare::Comparator;
use crate::error::{ComparatorError, Error};
use crate::pivot_tree::{Flags, PivotTree, RawPivot};
use crate::sort;

/// Stop quickselect once a region is this short and insertion-sort it.
pub(crate) const SORT_THRESH: usize = 14;
/// Slice strides up to this magnitude sort the whole touched span at once
/// instead of re-selecting every stride.
pub(crate) const CONTIG_THRESH: isize = 8;

/// Which boundary of an equal run a value-keyed refinement narrows toward.
#[derive(Clone, Copy)]
enum Edge {
    /// The first element `>= x`.
    Lower,
    /// The first element `> x`.
    Upper,
}

pub(crate) struct Engine<T, C> {
    // INVARIANTS:
    //  * every pivot in `tree` names a position already holding its final
    //    sorted value (everything before it compares `<=`, everything after
    //    compares `>=`)
    //  * a SORTED_LEFT flag on a pivot brackets a nondecreasing slice up to
    //    its successor, which carries the matching SORTED_RIGHT
    items: Vec<T>,
    tree: PivotTree,
    cmp: C,
    rng: StdRng,
}

impl<T, C> Engine<T, C>
where
    C: Comparator<T>,
{
    pub(crate) fn new(items: Vec<T>, cmp: C, mut rng: StdRng) -> Self {
        let tree = PivotTree::new(items.len(), &mut rng);
        Self {
            items,
            tree,
            cmp,
            rng,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn into_items(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn pivots(&self) -> Vec<(isize, Flags)> {
        self.tree.in_order()
    }

    /// Make `A[k]` the k-th order statistic. `k == len` is a no-op hit on
    /// the upper sentinel.
    pub(crate) fn sort_point(&mut self, k: usize) -> Result<(), Error> {
        let result = self.sort_point_inner(k);
        #[cfg(debug_assertions)]
        self.tree.assert_invariants();
        result
    }

    fn sort_point_inner(&mut self, k: usize) -> Result<(), Error> {
        debug_assert!(k <= self.items.len());
        let (mut left, mut right) = self.tree.bound(k);
        if left.idx() == k as isize {
            return Ok(());
        }
        if right.flags().contains(Flags::SORTED_RIGHT) {
            return Ok(());
        }

        while right.idx() - left.idx() - 1 > SORT_THRESH as isize {
            let piv = self.partition_region(left, right)?;
            let new = self.insert_pivot(piv, left, right);
            let (left_bound, right_bound) = self.collapse_duplicates(left, new, right)?;
            self.flag_empty_flanks(left_bound, new, right_bound);

            match piv.cmp(&k) {
                Ordering::Equal => {
                    self.tidy(left_bound, new, right_bound);
                    return Ok(());
                }
                Ordering::Less => {
                    if new.flags().contains(Flags::SORTED_LEFT) {
                        // the region right of the new pivot is sorted and
                        // holds k
                        self.tidy(left_bound, new, right_bound);
                        return Ok(());
                    }
                    if left_bound != new {
                        self.drop_if_redundant(left_bound);
                    }
                    left = new;
                    right = right_bound;
                }
                Ordering::Greater => {
                    if new.flags().contains(Flags::SORTED_RIGHT) {
                        self.tidy(left_bound, new, right_bound);
                        return Ok(());
                    }
                    if right_bound != new {
                        self.drop_if_redundant(right_bound);
                    }
                    right = new;
                    left = left_bound;
                }
            }
            if left == right {
                // the old bounds collapsed onto one equal run containing k
                self.drop_if_redundant(left);
                return Ok(());
            }
        }
        self.finish_region(left, right)
    }

    /// Sort `A[a..b)` in place. Both endpoints become true order statistics
    /// first, then every unsorted region between them is quicksorted whole.
    pub(crate) fn sort_range(&mut self, a: usize, b: usize) -> Result<(), Error> {
        let result = self.sort_range_inner(a, b);
        #[cfg(debug_assertions)]
        self.tree.assert_invariants();
        result
    }

    fn sort_range_inner(&mut self, a: usize, b: usize) -> Result<(), Error> {
        debug_assert!(a <= b && b <= self.items.len());
        self.sort_point(a)?;
        self.sort_point(b)?;

        let (mut cur, _) = self.tree.bound(a);
        while cur.idx() < b as isize {
            let nxt = match self.tree.succ(cur) {
                Some(nxt) => nxt,
                None => break,
            };
            if cur.flags().contains(Flags::SORTED_LEFT) {
                self.drop_if_redundant(cur);
                cur = nxt;
                continue;
            }
            let lo = (cur.idx() + 1) as usize;
            let hi = nxt.idx() as usize;
            {
                let Self {
                    items, cmp, rng, ..
                } = self;
                sort::quicksort(&mut items[lo..hi], cmp, rng)?;
            }
            self.tree.or_flags(cur, Flags::SORTED_LEFT);
            self.tree.or_flags(nxt, Flags::SORTED_RIGHT);
            self.drop_if_redundant(cur);
            cur = nxt;
        }
        self.drop_if_redundant(cur);
        Ok(())
    }

    /// First index holding an element equal to `x`, or `None` for a clean
    /// miss. A comparator failure is reported separately as `Err`.
    pub(crate) fn find_item(&mut self, x: &T) -> Result<Option<usize>, Error> {
        let result = self.find_item_inner(x);
        #[cfg(debug_assertions)]
        self.tree.assert_invariants();
        result
    }

    fn find_item_inner(&mut self, x: &T) -> Result<Option<usize>, Error> {
        let (left_idx, right_idx) = self.refine_toward(x, Edge::Lower)?;
        let lo = (left_idx + 1) as usize;
        let hi = right_idx as usize;
        // the region is sorted, so the scan can stop at the first element
        // past where x would sit
        for i in lo..hi {
            if self.cmp.eq(x, &self.items[i])? {
                return Ok(Some(i));
            }
            if self.cmp.lt(x, &self.items[i])? {
                return Ok(None);
            }
        }
        if hi < self.items.len() && self.cmp.eq(x, &self.items[hi])? {
            return Ok(Some(hi));
        }
        Ok(None)
    }

    /// Number of elements equal to `x`.
    pub(crate) fn count_of(&mut self, x: &T) -> Result<usize, Error> {
        let first = match self.find_item(x)? {
            Some(first) => first,
            None => return Ok(0),
        };
        let (left_idx, right_idx) = self.refine_toward(x, Edge::Upper)?;
        #[cfg(debug_assertions)]
        self.tree.assert_invariants();
        // Everything wedged between two pivots that both equal x is itself
        // equal to x, so only the sorted tail region needs searching for the
        // upper bound.
        let mut lo = (left_idx + 1) as usize;
        let mut hi = right_idx as usize;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.cmp.lt(x, &self.items[mid])? {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        Ok(lo - first)
    }

    /// Narrow the region that can hold the requested boundary of `x`'s equal
    /// run until it is sorted; returns the bounding pivot positions.
    fn refine_toward(&mut self, x: &T, edge: Edge) -> Result<(isize, isize), Error> {
        let (mut left, mut right) = {
            let Self {
                tree, items, cmp, ..
            } = self;
            match edge {
                Edge::Lower => tree.bound_by(|i| cmp.lt(&items[i], x))?,
                Edge::Upper => tree.bound_by(|i| Ok::<bool, crate::error::ComparatorError>(!cmp.lt(x, &items[i])?))?,
            }
        };
        if left.flags().contains(Flags::SORTED_LEFT) {
            return Ok((left.idx(), right.idx()));
        }

        while right.idx() - left.idx() - 1 > SORT_THRESH as isize {
            let piv = self.partition_region(left, right)?;
            let new = self.insert_pivot(piv, left, right);
            let (left_bound, right_bound) = self.collapse_duplicates(left, new, right)?;
            let rightward = match edge {
                Edge::Lower => self.cmp.lt(&self.items[piv], x)?,
                Edge::Upper => !self.cmp.lt(x, &self.items[piv])?,
            };
            if rightward {
                left = new;
                right = right_bound;
            } else {
                right = new;
                left = left_bound;
            }
            if left == right {
                let bounds = (left.idx(), right.idx());
                self.drop_if_redundant(left);
                return Ok(bounds);
            }
        }
        let bounds = (left.idx(), right.idx());
        self.finish_region(left, right)?;
        Ok(bounds)
    }

    /// One Lomuto step over the open region between two pivots; returns the
    /// absolute position where the chosen element landed.
    fn partition_region(&mut self, left: RawPivot, right: RawPivot) -> Result<usize, ComparatorError> {
        let lo = (left.idx() + 1) as usize;
        let hi = right.idx() as usize;
        let piv = sort::partition(&mut self.items[lo..hi], &self.cmp, &mut self.rng)?;
        Ok(lo + piv)
    }

    fn insert_pivot(&mut self, piv: usize, left: RawPivot, right: RawPivot) -> RawPivot {
        let priority = self.rng.gen();
        self.tree.insert_between(piv, Flags::NONE, left, right, priority)
    }

    fn collapse_duplicates(
        &mut self,
        left: RawPivot,
        mid: RawPivot,
        right: RawPivot,
    ) -> Result<(RawPivot, RawPivot), ComparatorError> {
        let Self {
            tree, items, cmp, ..
        } = self;
        tree.uniq_pivots(left, mid, right, |i, j| cmp.eq(&items[i], &items[j]))
    }

    /// An empty region between adjacent pivots is sorted by definition; flag
    /// it eagerly so exact hits short-circuit and redundant pivots coalesce.
    fn flag_empty_flanks(&mut self, left: RawPivot, mid: RawPivot, right: RawPivot) {
        if left != mid && mid.idx() == left.idx() + 1 {
            self.tree.or_flags(left, Flags::SORTED_LEFT);
            self.tree.or_flags(mid, Flags::SORTED_RIGHT);
        }
        if right != mid && right.idx() == mid.idx() + 1 {
            self.tree.or_flags(mid, Flags::SORTED_LEFT);
            self.tree.or_flags(right, Flags::SORTED_RIGHT);
        }
    }

    /// Insertion-sort the remaining short region and record it as sorted.
    fn finish_region(&mut self, left: RawPivot, right: RawPivot) -> Result<(), Error> {
        let lo = (left.idx() + 1) as usize;
        let hi = right.idx() as usize;
        sort::insertion_sort(&mut self.items[lo..hi], &self.cmp)?;
        self.tree.or_flags(left, Flags::SORTED_LEFT);
        self.tree.or_flags(right, Flags::SORTED_RIGHT);
        self.tree.depivot(left, right);
        Ok(())
    }

    fn tidy(&mut self, left: RawPivot, mid: RawPivot, right: RawPivot) {
        if left != mid {
            self.drop_if_redundant(left);
        }
        if right != mid {
            self.drop_if_redundant(right);
        }
        self.drop_if_redundant(mid);
    }

    fn drop_if_redundant(&mut self, p: RawPivot) {
        if !self.tree.is_sentinel(p) && p.flags() == Flags::SORTED_BOTH {
            self.tree.delete(p);
        }
    }
}
