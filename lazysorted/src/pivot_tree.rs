//! The pivot tree: an ordered set of array positions that partitions the
//! element array into regions, balanced as a treap.
//!
//! Every pivot records a position whose element is already in its final
//! sorted place. The two sentinels at `-1` and `len` are always present, so
//! every array index is bounded by a pivot on both sides and traversals never
//! need a null check at the edges.

use core::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use rand::rngs::StdRng;
use rand::Rng;

/// Sortedness annotation carried by a pivot.
///
/// `SORTED_LEFT` asserts that the region strictly right of the pivot, up to
/// its in-order successor, is in nondecreasing order. `SORTED_RIGHT` asserts
/// the mirror for the region to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Flags(u8);

impl Flags {
    pub(crate) const NONE: Flags = Flags(0);
    pub(crate) const SORTED_LEFT: Flags = Flags(0b01);
    pub(crate) const SORTED_RIGHT: Flags = Flags(0b10);
    pub(crate) const SORTED_BOTH: Flags = Flags(0b11);

    #[inline]
    pub(crate) fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub(crate) fn name(self) -> &'static str {
        match self.0 {
            0b00 => "unsorted",
            0b01 => "sorted_left",
            0b10 => "sorted_right",
            _ => "sorted_both",
        }
    }
}

impl core::ops::BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

struct Node {
    idx: isize,
    flags: Flags,
    priority: u64,
    parent: Option<RawPivot>,
    left: Option<RawPivot>,
    right: Option<RawPivot>,
}

impl Node {
    fn new(idx: isize, priority: u64) -> Self {
        Self {
            idx,
            flags: Flags::NONE,
            priority,
            parent: None,
            left: None,
            right: None,
        }
    }
}

/// Wrapper around `NonNull<Node>` to provide convenient methods in order to
/// make the treap algorithms much more readable.
///
/// Equality is pointer identity.
#[derive(Debug, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct RawPivot {
    ptr: NonNull<Node>,
}

impl Clone for RawPivot {
    fn clone(&self) -> Self {
        *self
    }
}

impl Copy for RawPivot {}

impl RawPivot {
    fn from_node(node: Node) -> Self {
        Self {
            ptr: unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) },
        }
    }

    #[inline]
    fn as_ptr(&self) -> *mut Node {
        self.ptr.as_ptr()
    }

    /// Position of this pivot in the element array, `-1` and `len` for the
    /// sentinels.
    #[inline]
    pub(crate) fn idx(&self) -> isize {
        // SAFETY: handles only come out of the owning tree and callers drop
        // them before the pivot they name can be deleted, so the node is
        // always live here.
        unsafe { (*self.as_ptr()).idx }
    }

    #[inline]
    pub(crate) fn flags(&self) -> Flags {
        // SAFETY: as in `idx`
        unsafe { (*self.as_ptr()).flags }
    }

    #[inline]
    unsafe fn set_flags(&mut self, flags: Flags) {
        unsafe { (*self.as_ptr()).flags = flags }
    }

    #[inline]
    unsafe fn priority(&self) -> u64 {
        unsafe { (*self.as_ptr()).priority }
    }

    #[inline]
    unsafe fn parent(&self) -> Option<RawPivot> {
        unsafe { (*self.as_ptr()).parent }
    }

    #[inline]
    unsafe fn set_parent(&mut self, new_parent: Option<RawPivot>) {
        unsafe {
            (*self.as_ptr()).parent = new_parent;
        }
    }

    #[inline]
    unsafe fn left(&self) -> Option<RawPivot> {
        unsafe { (*self.as_ptr()).left }
    }

    #[inline]
    unsafe fn set_left(&mut self, new_left: Option<RawPivot>) {
        unsafe {
            (*self.as_ptr()).left = new_left;
        }
    }

    #[inline]
    unsafe fn right(&self) -> Option<RawPivot> {
        unsafe { (*self.as_ptr()).right }
    }

    #[inline]
    unsafe fn set_right(&mut self, new_right: Option<RawPivot>) {
        unsafe {
            (*self.as_ptr()).right = new_right;
        }
    }
}

pub(crate) struct PivotTree {
    // INVARIANTS:
    //  * the sentinels at -1 and `len` are always present, so the tree is
    //    never empty and every index in 0..=len has a bound on both sides
    //  * `idx` values are pairwise distinct, BST-ordered; `priority` values
    //    satisfy max-heap order
    //  * `parent` back-references mirror the child links exactly; the parent
    //    owns its children, the back-reference is never used to free memory
    root: RawPivot,
    /// Length of the element array; the upper sentinel sits at this index.
    len: usize,
    /// Live pivots, sentinels included.
    count: usize,
    marker: PhantomData<Box<Node>>,
}

// SAFETY: the tree exclusively owns its nodes and hands out no references
// that outlive a method call, so moving it across threads is sound.
unsafe impl Send for PivotTree {}

impl Drop for PivotTree {
    fn drop(&mut self) {
        unsafe fn inner(node: RawPivot) {
            if let Some(l) = unsafe { node.left() } {
                unsafe { inner(l) };
            }
            if let Some(r) = unsafe { node.right() } {
                unsafe { inner(r) };
            }
            let _ = unsafe { Box::from_raw(node.as_ptr()) };
        }

        unsafe { inner(self.root) }
    }
}

impl fmt::Debug for PivotTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.in_order().iter().map(|(idx, flags)| (idx, flags.name())))
            .finish()
    }
}

impl PivotTree {
    pub(crate) fn new(len: usize, rng: &mut StdRng) -> Self {
        let low = RawPivot::from_node(Node::new(-1, rng.gen()));
        let high = RawPivot::from_node(Node::new(len as isize, rng.gen()));
        let root = unsafe {
            if low.priority() >= high.priority() {
                Self::link_right(low, Some(high));
                low
            } else {
                Self::link_left(high, Some(low));
                high
            }
        };
        Self {
            root,
            len,
            count: 2,
            marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn is_sentinel(&self, p: RawPivot) -> bool {
        let idx = p.idx();
        idx < 0 || idx >= self.len as isize
    }

    /// Link a new pivot at `idx` strictly between the adjacent pivots `left`
    /// and `right`, then restore heap order by bubbling it up.
    pub(crate) fn insert_between(
        &mut self,
        idx: usize,
        flags: Flags,
        left: RawPivot,
        right: RawPivot,
        priority: u64,
    ) -> RawPivot {
        let idx = idx as isize;
        debug_assert!(left.idx() < idx && idx < right.idx());
        debug_assert_eq!(self.succ(left), Some(right));

        let mut node = RawPivot::from_node(Node::new(idx, priority));
        unsafe {
            node.set_flags(flags);
            // Adjacent bounds leave exactly one free slot facing the gap:
            // either `left` has no right child, or `right` (the minimum of
            // `left`'s right subtree) has no left child. Descending from the
            // bound with the free slot lands there.
            let mut cur = if left.right().is_none() { left } else { right };
            loop {
                if idx < cur.idx() {
                    match cur.left() {
                        Some(l) => cur = l,
                        None => {
                            Self::link_left(cur, Some(node));
                            break;
                        }
                    }
                } else {
                    match cur.right() {
                        Some(r) => cur = r,
                        None => {
                            Self::link_right(cur, Some(node));
                            break;
                        }
                    }
                }
            }
            self.bubble_up(node);
        }
        self.count += 1;
        node
    }

    /// Unlink and free `p`. A pivot with two children is replaced by the
    /// merge of its subtrees; one child is promoted; a leaf is simply cut.
    pub(crate) fn delete(&mut self, p: RawPivot) {
        debug_assert!(!self.is_sentinel(p));
        unsafe {
            let merged = Self::merge(p.left(), p.right());
            self.replace_subtree(p, merged);
            let _ = Box::from_raw(p.as_ptr());
        }
        self.count -= 1;
    }

    /// Tightest pivots around `k`: `left.idx <= k <= right.idx` with nothing
    /// strictly between. An exact hit is returned on both sides.
    pub(crate) fn bound(&self, k: usize) -> (RawPivot, RawPivot) {
        debug_assert!(k <= self.len);
        let k = k as isize;
        let mut left = None;
        let mut right = None;
        let mut cur = Some(self.root);
        while let Some(node) = cur {
            if k < node.idx() {
                right = Some(node);
                cur = unsafe { node.left() };
            } else if k > node.idx() {
                left = Some(node);
                cur = unsafe { node.right() };
            } else {
                return (node, node);
            }
        }
        // the sentinels bound every index, so both sides saw a node
        (left.unwrap(), right.unwrap())
    }

    /// Value-keyed descent. `goes_right(i)` reports whether the search target
    /// lies right of array position `i`; sentinels compare asymmetrically
    /// (`-1` below everything, `len` above).
    pub(crate) fn bound_by<E>(
        &self,
        mut goes_right: impl FnMut(usize) -> Result<bool, E>,
    ) -> Result<(RawPivot, RawPivot), E> {
        let mut left = None;
        let mut right = None;
        let mut cur = Some(self.root);
        while let Some(node) = cur {
            let idx = node.idx();
            let rightward = if idx < 0 {
                true
            } else if idx >= self.len as isize {
                false
            } else {
                goes_right(idx as usize)?
            };
            if rightward {
                left = Some(node);
                cur = unsafe { node.right() };
            } else {
                right = Some(node);
                cur = unsafe { node.left() };
            }
        }
        Ok((left.unwrap(), right.unwrap()))
    }

    /// In-order successor, `None` past the upper sentinel.
    pub(crate) fn succ(&self, p: RawPivot) -> Option<RawPivot> {
        unsafe {
            match p.right() {
                // a right subtree holds the items directly after p, its
                // minimum is the successor
                Some(right) => Some(Self::min_of(right)),
                None => {
                    // move up until we leave a left subtree; that parent is
                    // the successor
                    let mut node = p;
                    let mut node_parent = node.parent();
                    while let Some(parent) = node_parent {
                        if parent.left() == Some(node) {
                            break;
                        }
                        node = parent;
                        node_parent = node.parent();
                    }
                    node_parent
                }
            }
        }
    }

    pub(crate) fn or_flags(&mut self, p: RawPivot, flags: Flags) {
        let mut p = p;
        unsafe { p.set_flags(p.flags() | flags) };
    }

    /// Coalesce the freshly sorted region between `left` and `right` with its
    /// sorted neighbors: a flank that is now sorted on both sides carries no
    /// information and is removed.
    pub(crate) fn depivot(&mut self, left: RawPivot, right: RawPivot) {
        if !self.is_sentinel(left) && left.flags() == Flags::SORTED_BOTH {
            self.delete(left);
        }
        if !self.is_sentinel(right) && right.flags() == Flags::SORTED_BOTH {
            self.delete(right);
        }
    }

    /// Collapse value-duplicate pivots around the freshly inserted `mid`.
    ///
    /// `eq` compares the elements at two array positions. A bound whose
    /// element equals `mid`'s hands its flags to `mid` and is deleted; the
    /// returned pair is whatever survives as the region bounds, so callers
    /// never keep a handle to a deleted pivot.
    pub(crate) fn uniq_pivots<E>(
        &mut self,
        left: RawPivot,
        mid: RawPivot,
        right: RawPivot,
        mut eq: impl FnMut(usize, usize) -> Result<bool, E>,
    ) -> Result<(RawPivot, RawPivot), E> {
        let mut left_bound = left;
        let mut right_bound = right;
        if !self.is_sentinel(left) && eq(left.idx() as usize, mid.idx() as usize)? {
            self.or_flags(mid, left.flags());
            self.delete(left);
            left_bound = mid;
        }
        if !self.is_sentinel(right) && eq(mid.idx() as usize, right.idx() as usize)? {
            self.or_flags(mid, right.flags());
            self.delete(right);
            right_bound = mid;
        }
        Ok((left_bound, right_bound))
    }

    pub(crate) fn in_order(&self) -> Vec<(isize, Flags)> {
        let mut out = Vec::with_capacity(self.count);
        unsafe {
            Self::in_order_core(self.root, &mut |node| out.push((node.idx(), node.flags())));
        }
        out
    }

    unsafe fn in_order_core<F>(node: RawPivot, f: &mut F)
    where
        F: FnMut(RawPivot),
    {
        if let Some(l) = unsafe { node.left() } {
            unsafe { Self::in_order_core(l, f) };
        }
        f(node);
        if let Some(r) = unsafe { node.right() } {
            unsafe { Self::in_order_core(r, f) };
        }
    }

    unsafe fn min_of(root: RawPivot) -> RawPivot {
        let mut x = root;
        while let Some(left) = unsafe { x.left() } {
            x = left;
        }
        x
    }

    unsafe fn link_left(mut parent: RawPivot, child: Option<RawPivot>) {
        unsafe {
            parent.set_left(child);
            if let Some(mut child) = child {
                child.set_parent(Some(parent));
            }
        }
    }

    unsafe fn link_right(mut parent: RawPivot, child: Option<RawPivot>) {
        unsafe {
            parent.set_right(child);
            if let Some(mut child) = child {
                child.set_parent(Some(parent));
            }
        }
    }

    unsafe fn bubble_up(&mut self, node: RawPivot) {
        unsafe {
            while let Some(parent) = node.parent() {
                if node.priority() <= parent.priority() {
                    break;
                }
                self.rotate_up(node, parent);
            }
        }
    }

    /// One rotation lifting `node` above its `parent`, preserving BST order.
    ///
    /// ```text
    ///     p            n
    ///    / \          / \
    ///   n   C  -->   A   p
    ///  / \              / \
    /// A   B            B   C
    /// ```
    unsafe fn rotate_up(&mut self, mut node: RawPivot, parent: RawPivot) {
        unsafe {
            let grandparent = parent.parent();
            if parent.left() == Some(node) {
                Self::link_left(parent, node.right());
                Self::link_right(node, Some(parent));
            } else {
                Self::link_right(parent, node.left());
                Self::link_left(node, Some(parent));
            }
            node.set_parent(grandparent);
            match grandparent {
                Some(mut g) => {
                    if g.left() == Some(parent) {
                        g.set_left(Some(node));
                    } else {
                        g.set_right(Some(node));
                    }
                }
                None => self.root = node,
            }
        }
    }

    /// Merge two treaps where every key in `l` is smaller than every key in
    /// `r`; the higher-priority root survives on top.
    unsafe fn merge(l: Option<RawPivot>, r: Option<RawPivot>) -> Option<RawPivot> {
        match (l, r) {
            (None, other) | (other, None) => other,
            (Some(l), Some(r)) => unsafe {
                if l.priority() > r.priority() {
                    let m = Self::merge(l.right(), Some(r));
                    Self::link_right(l, m);
                    Some(l)
                } else {
                    let m = Self::merge(Some(l), r.left());
                    Self::link_left(r, m);
                    Some(r)
                }
            },
        }
    }

    /// Replaces subtree `old` with subtree `new`.
    unsafe fn replace_subtree(&mut self, old: RawPivot, new: Option<RawPivot>) {
        unsafe {
            match old.parent() {
                Some(mut parent) => {
                    if parent.left() == Some(old) {
                        parent.set_left(new);
                    } else {
                        parent.set_right(new);
                    }
                }
                None => match new {
                    Some(new) => self.root = new,
                    // the sentinels outlive every deletion, so a deleted
                    // root always leaves a replacement behind
                    None => unreachable!(),
                },
            }
            if let Some(mut new) = new {
                new.set_parent(old.parent());
            }
        }
    }

    /// Validates every structural invariant plus the pairing of sortedness
    /// flags across adjacent pivots. Called between operations in debug
    /// builds and from tests.
    pub(crate) fn assert_invariants(&self) {
        assert!(unsafe { self.root.parent() }.is_none());
        let mut seen = Vec::with_capacity(self.count);
        unsafe { self.check_node(self.root, &mut seen) };
        assert_eq!(seen.len(), self.count);
        assert_eq!(seen.first().map(|(i, _)| *i), Some(-1));
        assert_eq!(seen.last().map(|(i, _)| *i), Some(self.len as isize));
        for pair in seen.windows(2) {
            let (i, f) = pair[0];
            let (j, g) = pair[1];
            assert!(i < j);
            assert_eq!(
                f.contains(Flags::SORTED_LEFT),
                g.contains(Flags::SORTED_RIGHT)
            );
        }
    }

    unsafe fn check_node(&self, node: RawPivot, out: &mut Vec<(isize, Flags)>) {
        unsafe {
            if let Some(l) = node.left() {
                assert_eq!(l.parent(), Some(node));
                assert!(l.priority() <= node.priority());
                self.check_node(l, out);
            }
            out.push((node.idx(), node.flags()));
            if let Some(r) = node.right() {
                assert_eq!(r.parent(), Some(node));
                assert!(r.priority() <= node.priority());
                self.check_node(r, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn new_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn insert_at(tree: &mut PivotTree, idx: usize, rng: &mut StdRng) -> RawPivot {
        let (left, right) = tree.bound(idx);
        assert_ne!(left.idx(), idx as isize, "index already present");
        tree.insert_between(idx, Flags::NONE, left, right, rng.gen())
    }

    fn indices(tree: &PivotTree) -> Vec<isize> {
        tree.in_order().iter().map(|(i, _)| *i).collect()
    }

    #[test]
    fn sentinels_present() {
        let mut rng = new_rng(1);
        let tree = PivotTree::new(10, &mut rng);
        assert_eq!(indices(&tree), vec![-1, 10]);
        tree.assert_invariants();
    }

    #[test]
    fn insert_keeps_order() {
        let mut rng = new_rng(2);
        let mut tree = PivotTree::new(20, &mut rng);
        for idx in [7, 3, 15, 11, 0, 19, 4] {
            insert_at(&mut tree, idx, &mut rng);
            tree.assert_invariants();
        }
        assert_eq!(indices(&tree), vec![-1, 0, 3, 4, 7, 11, 15, 19, 20]);
    }

    #[test]
    fn bound_finds_tightest_pair() {
        let mut rng = new_rng(3);
        let mut tree = PivotTree::new(20, &mut rng);
        for idx in [5, 10, 15] {
            insert_at(&mut tree, idx, &mut rng);
        }

        let (l, r) = tree.bound(7);
        assert_eq!((l.idx(), r.idx()), (5, 10));

        let (l, r) = tree.bound(0);
        assert_eq!((l.idx(), r.idx()), (-1, 5));

        let (l, r) = tree.bound(10);
        assert_eq!((l.idx(), r.idx()), (10, 10));

        let (l, r) = tree.bound(20);
        assert_eq!((l.idx(), r.idx()), (20, 20));
    }

    #[test]
    fn succ_walks_in_order() {
        let mut rng = new_rng(4);
        let mut tree = PivotTree::new(50, &mut rng);
        for idx in [40, 2, 17, 23, 8, 31] {
            insert_at(&mut tree, idx, &mut rng);
        }

        let mut walked = Vec::new();
        let (mut cur, _) = tree.bound(0);
        assert_eq!(cur.idx(), -1);
        walked.push(cur.idx());
        while let Some(next) = tree.succ(cur) {
            walked.push(next.idx());
            cur = next;
        }
        assert_eq!(walked, indices(&tree));
    }

    #[test]
    fn delete_merges_children() {
        let mut rng = new_rng(5);
        let mut tree = PivotTree::new(100, &mut rng);
        let mut handles = Vec::new();
        for idx in [50, 25, 75, 12, 37, 62, 88] {
            handles.push((idx, insert_at(&mut tree, idx, &mut rng)));
        }

        for (idx, handle) in handles {
            tree.delete(handle);
            tree.assert_invariants();
            assert!(!indices(&tree).contains(&(idx as isize)));
        }
        assert_eq!(indices(&tree), vec![-1, 100]);
    }

    #[test]
    fn uniq_collapses_equal_left() {
        let mut rng = new_rng(6);
        let mut tree = PivotTree::new(30, &mut rng);
        let left = insert_at(&mut tree, 9, &mut rng);
        let (low_sentinel, _) = tree.bound(0);
        tree.or_flags(low_sentinel, Flags::SORTED_LEFT);
        tree.or_flags(left, Flags::SORTED_RIGHT);
        let mid = insert_at(&mut tree, 10, &mut rng);
        let (_, right) = {
            let (l, r) = tree.bound(11);
            assert_eq!(l.idx(), 10);
            (l, r)
        };

        let (new_left, new_right) = tree
            .uniq_pivots(left, mid, right, |i, j| {
                Ok::<_, ()>(i == 9 && j == 10)
            })
            .unwrap();

        assert_eq!(new_left, mid);
        assert_eq!(new_right, right);
        assert!(mid.flags().contains(Flags::SORTED_RIGHT));
        assert_eq!(indices(&tree), vec![-1, 10, 30]);
        tree.assert_invariants();
    }

    #[test]
    fn uniq_skips_sentinels() {
        let mut rng = new_rng(7);
        let mut tree = PivotTree::new(5, &mut rng);
        let (left, right) = tree.bound(2);
        let mid = tree.insert_between(2, Flags::NONE, left, right, rng.gen());
        let (l, r) = tree
            .uniq_pivots(left, mid, right, |_, _| -> Result<bool, ()> {
                panic!("sentinel comparison must be skipped")
            })
            .unwrap();
        assert_eq!((l, r), (left, right));
    }

    #[test]
    fn depivot_removes_redundant_flank() {
        let mut rng = new_rng(8);
        let mut tree = PivotTree::new(30, &mut rng);
        let p = insert_at(&mut tree, 14, &mut rng);
        let (left, _) = tree.bound(0);
        tree.or_flags(left, Flags::SORTED_LEFT);
        tree.or_flags(p, Flags::SORTED_BOTH);
        let right = tree.succ(p).unwrap();
        tree.or_flags(right, Flags::SORTED_RIGHT);

        tree.depivot(p, right);
        assert_eq!(indices(&tree), vec![-1, 30]);
        tree.assert_invariants();
    }

    mod proptests {
        use std::collections::BTreeSet;

        use proptest::prelude::*;

        use super::*;

        #[cfg(not(miri))]
        const SET_SIZE: usize = 300;
        #[cfg(miri)]
        const SET_SIZE: usize = 30;

        #[cfg(not(miri))]
        const PROPTEST_CASES: u32 = 300;
        #[cfg(miri)]
        const PROPTEST_CASES: u32 = 10;

        proptest!(
            #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

            #[test]
            fn insert_matches_model(
                inserts in proptest::collection::hash_set(0..1000usize, 0..SET_SIZE),
                seed in proptest::num::u64::ANY,
            ) {
                let mut rng = new_rng(seed);
                let mut tree = PivotTree::new(1000, &mut rng);
                for &idx in &inserts {
                    insert_at(&mut tree, idx, &mut rng);
                }
                tree.assert_invariants();

                let model: BTreeSet<isize> = inserts.iter().map(|&i| i as isize).collect();
                let mut expected: Vec<isize> = vec![-1];
                expected.extend(model.iter().copied());
                expected.push(1000);
                prop_assert_eq!(indices(&tree), expected);
            }

            #[test]
            fn delete_matches_model(
                inserts in proptest::collection::hash_set(0..1000usize, 1..SET_SIZE),
                kills in proptest::collection::vec(proptest::num::usize::ANY, 1..20),
                seed in proptest::num::u64::ANY,
            ) {
                let mut rng = new_rng(seed);
                let mut tree = PivotTree::new(1000, &mut rng);
                let mut model = BTreeSet::new();
                for &idx in &inserts {
                    insert_at(&mut tree, idx, &mut rng);
                    model.insert(idx as isize);
                }

                for k in kills {
                    if model.is_empty() {
                        break;
                    }
                    let victim = *model.iter().nth(k % model.len()).unwrap();
                    let (handle, _) = tree.bound(victim as usize);
                    prop_assert_eq!(handle.idx(), victim);
                    tree.delete(handle);
                    model.remove(&victim);
                    tree.assert_invariants();
                }

                let mut expected: Vec<isize> = vec![-1];
                expected.extend(model.iter().copied());
                expected.push(1000);
                prop_assert_eq!(indices(&tree), expected);
            }
        );
    }
}
