//! Sorted multiset with min / max access.

use alloc::collections::btree_map::{self, BTreeMap};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use streamfold_core::{Accumulator, Comparator, Event, Natural, Node, Order, Retract};
use tracing::trace;

/// Key ordered through the comparator `C`.
struct Slot<T, C> {
    value: T,
    _cmp: PhantomData<fn() -> C>,
}

impl<T, C> Slot<T, C> {
    #[inline]
    fn new(value: T) -> Self {
        Self {
            value,
            _cmp: PhantomData,
        }
    }
}

impl<T, C: Comparator<T> + Default> PartialEq for Slot<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, C: Comparator<T> + Default> Eq for Slot<T, C> {}

impl<T, C: Comparator<T> + Default> PartialOrd for Slot<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C: Comparator<T> + Default> Ord for Slot<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        C::default().compare(&self.value, &other.value)
    }
}

/// Keeps every value it is given, sorted by the comparator `C`, counting
/// duplicates.
///
/// `add` emits `Added` for the value it was given; `remove` emits `Removed`
/// for the stored value it drops, and nothing if the value is not present.
/// Values the comparator cannot compare with themselves (a NaN under
/// [`Natural`]) are dropped on `add` without an event.
///
/// With `Order::Desc` the roles of `low` and `high` swap, so `low` returns
/// the first value in descending order (the largest).
pub struct Ordered<T, C = Natural> {
    values: BTreeMap<Slot<T, C>, usize>,
    len: usize,
    order: Order,
}

impl<T: PartialOrd> Ordered<T> {
    pub fn new() -> Self {
        Self::with_order(Order::Asc)
    }

    pub fn with_order(order: Order) -> Self {
        Self::with_comparator(order)
    }
}

impl<T, C: Comparator<T> + Default> Ordered<T, C> {
    /// Creates a set sorted by `C`, walked in `order`.
    ///
    /// `C` is named at the call site, e.g.
    /// `Ordered::<String, ByLength>::with_comparator(Order::Asc)`.
    pub fn with_comparator(order: Order) -> Self {
        Self {
            values: BTreeMap::new(),
            len: 0,
            order,
        }
    }

    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// First value in the configured order.
    pub fn low(&self) -> Option<&T> {
        match self.order {
            Order::Asc => self.min(),
            Order::Desc => self.max(),
        }
    }

    /// Last value in the configured order.
    pub fn high(&self) -> Option<&T> {
        match self.order {
            Order::Asc => self.max(),
            Order::Desc => self.min(),
        }
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.len > 0
    }

    /// Number of values, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct values.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.values.len()
    }

    /// Iterates values in the configured order, repeating duplicates.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            inner: self.values.iter(),
            current: None,
            order: self.order,
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.len = 0;
    }

    fn min(&self) -> Option<&T> {
        self.values.first_key_value().map(|(slot, _)| &slot.value)
    }

    fn max(&self) -> Option<&T> {
        self.values.last_key_value().map(|(slot, _)| &slot.value)
    }

    #[inline]
    fn admits(value: &T) -> bool {
        C::default().is_comparable(value, value)
    }
}

impl<T, C: Comparator<T> + Default> Default for Ordered<T, C> {
    fn default() -> Self {
        Self::with_comparator(Order::Asc)
    }
}

impl<T: fmt::Debug, C: Comparator<T> + Default> fmt::Debug for Ordered<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ordered")
            .field("values", &self.iter().collect::<alloc::vec::Vec<_>>())
            .field("order", &self.order)
            .finish()
    }
}

/// Iterator over an `Ordered`, see [`Ordered::iter`].
pub struct Iter<'a, T, C = Natural> {
    inner: btree_map::Iter<'a, Slot<T, C>, usize>,
    current: Option<(&'a T, usize)>,
    order: Order,
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some((value, remaining)) = self.current.as_mut() {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Some(*value);
                }
            }
            let next = match self.order {
                Order::Asc => self.inner.next(),
                Order::Desc => self.inner.next_back(),
            };
            let (slot, count) = next?;
            self.current = Some((&slot.value, *count));
        }
    }
}

impl<T, C> Node for Ordered<T, C> {}

impl<T: Clone, C: Comparator<T> + Default> Accumulator<T> for Ordered<T, C> {
    type Output = T;

    fn add<S>(&mut self, value: &T, sink: &mut S)
    where
        S: FnMut(Event<&T>),
    {
        if !Self::admits(value) {
            trace!("ordered add of incomparable value dropped");
            return;
        }
        *self.values.entry(Slot::new(value.clone())).or_insert(0) += 1;
        self.len += 1;
        sink(Event::Added(value));
    }
}

impl<T: Clone, C: Comparator<T> + Default> Retract<T> for Ordered<T, C> {
    fn remove<S>(&mut self, value: &T, sink: &mut S)
    where
        S: FnMut(Event<&T>),
    {
        if !Self::admits(value) {
            trace!("ordered remove of incomparable value ignored");
            return;
        }
        let key = Slot::new(value.clone());
        let Some((slot, count)) = self.values.remove_entry(&key) else {
            trace!("ordered remove of absent value");
            return;
        };
        self.len -= 1;
        sink(Event::Removed(&slot.value));
        if count > 1 {
            self.values.insert(slot, count - 1);
        }
    }
}

/// Sorted multiset whose preferred value is its smallest.
pub struct Low<T, C = Natural>(Ordered<T, C>);

/// Sorted multiset whose preferred value is its largest.
pub struct High<T, C = Natural>(Ordered<T, C>);

macro_rules! extreme {
    ($name:ident, $pick:ident, $doc:literal) => {
        impl<T: PartialOrd> $name<T> {
            pub fn new() -> Self {
                Self(Ordered::new())
            }

            pub fn with_order(order: Order) -> Self {
                Self(Ordered::with_order(order))
            }
        }

        impl<T, C: Comparator<T> + Default> $name<T, C> {
            pub fn with_comparator(order: Order) -> Self {
                Self(Ordered::with_comparator(order))
            }

            #[inline]
            pub fn has_value(&self) -> bool {
                self.0.has_value()
            }

            #[doc = $doc]
            #[inline]
            pub fn value(&self) -> Option<&T> {
                self.0.$pick()
            }

            /// First value in the configured order.
            #[inline]
            pub fn low(&self) -> Option<&T> {
                self.0.low()
            }

            /// Last value in the configured order.
            #[inline]
            pub fn high(&self) -> Option<&T> {
                self.0.high()
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn clear(&mut self) {
                self.0.clear()
            }

            /// The underlying multiset.
            pub fn values(&self) -> &Ordered<T, C> {
                &self.0
            }
        }

        impl<T, C: Comparator<T> + Default> Default for $name<T, C> {
            fn default() -> Self {
                Self(Ordered::default())
            }
        }

        impl<T: fmt::Debug, C: Comparator<T> + Default> fmt::Debug for $name<T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl<T, C> Node for $name<T, C> {}

        impl<T: Clone, C: Comparator<T> + Default> Accumulator<T> for $name<T, C> {
            type Output = T;

            #[inline]
            fn add<S>(&mut self, value: &T, sink: &mut S)
            where
                S: FnMut(Event<&T>),
            {
                self.0.add(value, sink)
            }
        }

        impl<T: Clone, C: Comparator<T> + Default> Retract<T> for $name<T, C> {
            #[inline]
            fn remove<S>(&mut self, value: &T, sink: &mut S)
            where
                S: FnMut(Event<&T>),
            {
                self.0.remove(value, sink)
            }
        }
    };
}

extreme!(Low, low, "Smallest value held, if any.");
extreme!(High, high, "Largest value held, if any.");
