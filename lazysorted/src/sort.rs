//! In-place sorting primitives over a fallible comparator.
//!
//! Every routine here either completes or reports the comparator failure
//! before it publishes anything a caller depends on: the slice is always left
//! as some permutation of its input, and [`partition`] never moves its pivot
//! element into place once a comparison has failed.

use core::mem;

use rand::rngs::StdRng;
use rand::Rng;

use crate::compare::Comparator;
use crate::engine::SORT_THRESH;
use crate::error::ComparatorError;

pub(crate) fn insertion_sort<T, C>(slice: &mut [T], cmp: &C) -> Result<(), ComparatorError>
where
    C: Comparator<T>,
{
    for j in 1..slice.len() {
        let mut new_index = 0;
        for i in (0..j).rev() {
            if cmp.lt(&slice[i], &slice[j])? {
                new_index = i + 1;
                break;
            }
        }
        slice[new_index..=j].rotate_right(1);
    }
    Ok(())
}

/// Partition the slice around a randomly chosen element in-place using
/// Lomuto's scheme.
///
/// Returns the final position of the chosen element: everything left of it is
/// strictly smaller, everything right of it is greater or equal.
///
/// # Panics
///
/// * if `slice` is empty
pub(crate) fn partition<T, C>(
    slice: &mut [T],
    cmp: &C,
    rng: &mut StdRng,
) -> Result<usize, ComparatorError>
where
    C: Comparator<T>,
{
    // swap the chosen element to the end so we don't have to deal with cases
    // where it needs to move mid-scan
    let chosen = rng.gen_range(0..slice.len());
    slice.swap(chosen, slice.len() - 1);

    let (pivot, rest) = slice.split_last_mut().unwrap();

    let mut count_smaller_than_pivot = 0;
    for i in 0..rest.len() {
        if cmp.lt(&rest[i], pivot)? {
            if i != count_smaller_than_pivot {
                rest.swap(count_smaller_than_pivot, i);
            }
            count_smaller_than_pivot += 1;
        }
    }

    if count_smaller_than_pivot != rest.len() {
        mem::swap(pivot, &mut rest[count_smaller_than_pivot]);
    } else {
        // pivot was the largest item, it's already at correct location
    }

    Ok(count_smaller_than_pivot)
}

/// Plain quicksort with random pivots, falling back to insertion sort for
/// short slices. Used on whole regions at once, with no position tracking.
pub(crate) fn quicksort<T, C>(
    slice: &mut [T],
    cmp: &C,
    rng: &mut StdRng,
) -> Result<(), ComparatorError>
where
    C: Comparator<T>,
{
    if slice.len() <= SORT_THRESH {
        return insertion_sort(slice, cmp);
    }

    let piv = partition(slice, cmp, rng)?;
    let (l, r) = slice.split_at_mut(piv);
    quicksort(l, cmp, rng)?;
    quicksort(&mut r[1..], cmp, rng)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::compare::NaturalOrder;
    use crate::error::ComparatorError;

    fn assert_sorted(slice: &[i32]) {
        slice.windows(2).for_each(|arr| {
            let a = arr[0];
            let b = arr[1];
            assert!(a <= b);
        })
    }

    #[test]
    fn test_insertion_sort() {
        let mut arr = vec![1, 4, 2, 24, 65, 3, 3, 45];
        insertion_sort(arr.as_mut_slice(), &NaturalOrder).unwrap();
        assert_sorted(&arr);
    }

    #[test]
    fn test_quicksort() {
        let mut arr: Vec<i32> = (0..500).rev().collect();
        let mut rng = StdRng::seed_from_u64(1);
        quicksort(arr.as_mut_slice(), &NaturalOrder, &mut rng).unwrap();
        assert_sorted(&arr);
    }

    #[test]
    fn test_partition_splits_around_pivot() {
        let mut arr = vec![9, 1, 8, 2, 7, 3, 6, 4, 5, 5];
        let mut rng = StdRng::seed_from_u64(2);
        let piv = partition(arr.as_mut_slice(), &NaturalOrder, &mut rng).unwrap();
        let pivot = arr[piv];
        assert!(arr[..piv].iter().all(|it| *it < pivot));
        assert!(arr[piv + 1..].iter().all(|it| *it >= pivot));
    }

    #[test]
    fn failing_comparator_keeps_permutation() {
        struct FailAfter(std::cell::Cell<u32>);
        impl Comparator<i32> for FailAfter {
            fn lt(&self, a: &i32, b: &i32) -> Result<bool, ComparatorError> {
                if self.0.get() == 0 {
                    return Err(ComparatorError::new("injected failure"));
                }
                self.0.set(self.0.get() - 1);
                Ok(a < b)
            }
            fn eq(&self, a: &i32, b: &i32) -> Result<bool, ComparatorError> {
                self.lt(a, b)?;
                Ok(a == b)
            }
        }

        let mut arr = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
        let mut reference = arr.clone();
        reference.sort();
        let cmp = FailAfter(std::cell::Cell::new(4));
        let mut rng = StdRng::seed_from_u64(3);
        assert!(partition(arr.as_mut_slice(), &cmp, &mut rng).is_err());

        let mut still_there = arr.clone();
        still_there.sort();
        assert_eq!(still_there, reference);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        #[cfg(not(miri))]
        const VEC_SIZE: usize = 1000;
        #[cfg(miri)]
        const VEC_SIZE: usize = 50;

        #[cfg(not(miri))]
        const PROPTEST_CASES: u32 = 500;
        #[cfg(miri)]
        const PROPTEST_CASES: u32 = 10;

        proptest!(
            #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

            #[test]
            fn test_insertion_sort(
                mut vec in proptest::collection::vec(0..10000i32, 0..VEC_SIZE),
            ) {
                insertion_sort(vec.as_mut_slice(), &NaturalOrder).unwrap();
                assert_sorted(&vec);
            }

            #[test]
            fn test_quicksort(
                mut vec in proptest::collection::vec(0..10000i32, 0..VEC_SIZE),
                seed in proptest::num::u64::ANY,
            ) {
                let mut rng = StdRng::seed_from_u64(seed);
                quicksort(vec.as_mut_slice(), &NaturalOrder, &mut rng).unwrap();
                assert_sorted(&vec);
            }

            #[test]
            fn test_partition(
                mut vec in proptest::collection::vec(0..100i32, 1..VEC_SIZE),
                seed in proptest::num::u64::ANY,
            ) {
                let mut rng = StdRng::seed_from_u64(seed);
                let piv = partition(vec.as_mut_slice(), &NaturalOrder, &mut rng).unwrap();
                let pivot = vec[piv];
                prop_assert!(vec[..piv].iter().all(|it| *it < pivot));
                prop_assert!(vec[piv + 1..].iter().all(|it| *it >= pivot));
            }
        );
    }
}
