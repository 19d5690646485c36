use core::cmp::Ordering;

use crate::error::ComparatorError;

/// Ordering capability consumed by the container.
///
/// Both predicates may fail; a failure aborts the current operation and
/// surfaces as [`Error::Comparator`](crate::Error::Comparator). The container
/// only ever asks for strict less-than and equality, never a full ordering.
pub trait Comparator<T> {
    /// Strict `a < b`.
    fn lt(&self, a: &T, b: &T) -> Result<bool, ComparatorError>;
    /// `a == b`.
    fn eq(&self, a: &T, b: &T) -> Result<bool, ComparatorError>;
}

/// Compares through the element's [`Ord`] impl. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn lt(&self, a: &T, b: &T) -> Result<bool, ComparatorError> {
        Ok(a < b)
    }

    fn eq(&self, a: &T, b: &T) -> Result<bool, ComparatorError> {
        Ok(a == b)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Result<Ordering, ComparatorError>,
{
    fn lt(&self, a: &T, b: &T) -> Result<bool, ComparatorError> {
        Ok(self(a, b)? == Ordering::Less)
    }

    fn eq(&self, a: &T, b: &T) -> Result<bool, ComparatorError> {
        Ok(self(a, b)? == Ordering::Equal)
    }
}
