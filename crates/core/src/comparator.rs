//! Ordering policies.
//!
//! Windows use a `Comparator` to decide whether an element lies beyond the
//! edge, and ordered sets use one to sort their values. An `Order` picks the
//! direction on top of either.

use crate::error::{Error, Result};
use core::cmp::Ordering;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of an ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
    /// Ascending order (smallest first)
    #[default]
    Asc,
    /// Descending order (largest first)
    Desc,
}

impl Order {
    /// Applies this order to a comparison result.
    #[inline]
    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Order::Asc => ord,
            Order::Desc => ord.reverse(),
        }
    }

    /// Returns the opposite direction.
    #[inline]
    pub fn reverse(&self) -> Order {
        match self {
            Order::Asc => Order::Desc,
            Order::Desc => Order::Asc,
        }
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" | "ascending" => Ok(Order::Asc),
            "desc" | "descending" => Ok(Order::Desc),
            other => Err(Error::invalid_config(alloc::format!("unknown order `{}`", other))),
        }
    }
}

/// Trait for comparing two values.
pub trait Comparator<K: ?Sized> {
    /// Compares two values according to the comparator's ordering.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns true if a < b according to this comparator.
    fn is_less(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if a <= b according to this comparator.
    fn is_less_or_equal(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// Returns true if a > b according to this comparator.
    fn is_greater(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Returns true if a == b according to this comparator.
    fn is_equal(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Returns true if the comparator gives a meaningful answer for this
    /// pair. Ordered sets refuse values that are not comparable with
    /// themselves.
    fn is_comparable(&self, _a: &K, _b: &K) -> bool {
        true
    }
}

/// Compares values by their own `PartialOrd`, in a given direction.
///
/// Incomparable pairs (a NaN against anything) compare as equal, so a window
/// never evicts on a NaN point. `is_comparable` reports such pairs, which is
/// how ordered sets drop NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural {
    order: Order,
}

impl Natural {
    /// Creates a natural comparator with the given order.
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    /// Creates an ascending comparator.
    pub fn asc() -> Self {
        Self::new(Order::Asc)
    }

    /// Creates a descending comparator.
    pub fn desc() -> Self {
        Self::new(Order::Desc)
    }

    /// Returns the order of this comparator.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl<K: PartialOrd + ?Sized> Comparator<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.order
            .apply(a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    #[inline]
    fn is_comparable(&self, a: &K, b: &K) -> bool {
        a.partial_cmp(b).is_some()
    }
}
