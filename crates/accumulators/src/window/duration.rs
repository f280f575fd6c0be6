//! Window that evicts by distance on a timeline.

use super::config::DurationConfig;
use super::{Boundary, Itself, Keyed, Position, Window};
use alloc::collections::vec_deque::{self, VecDeque};
use core::cmp::Ordering;
use core::fmt;
use streamfold_core::{Accumulator, Comparator, Event, Natural, Node, Order, Result, Timeline};
use tracing::trace;

type Point<T, P> = <P as Position<T>>::Point;
type Span<T, P> = <Point<T, P> as Timeline>::Span;

/// Sliding window over a timeline.
///
/// Whenever a value is added, every value outside
/// `[position(newest) - width, position(newest)]` is evicted.
///
/// # Monotonicity
///
/// Values are expected to arrive in timeline order, so eviction only has to
/// scan from the front and stops at the first value still in range. For
/// values arriving in decreasing order use `Order::Desc`; the edge then sits
/// at `newest + width` and values above it are evicted.
///
/// # Edge values
///
/// By default a value lying exactly on the edge is kept. Use
/// `Boundary::Evict` to drop it as well.
///
/// # Comparator
///
/// Points are tested against the edge with `C`, by default their own
/// `PartialOrd`. A custom comparator set through
/// [`with_comparator`](Self::with_comparator) can coarsen or reshape that
/// test; `order` is applied on top of it.
pub struct DurationWindow<T, P = Itself, C = Natural>
where
    P: Position<T>,
{
    items: VecDeque<T>,
    width: Span<T, P>,
    position: P,
    comparator: C,
    boundary: Boundary,
    order: Order,
    filled: bool,
}

impl<T> DurationWindow<T>
where
    T: Timeline + Clone,
    T::Span: PartialOrd + Default,
{
    /// Creates a window over values that are themselves timeline points.
    pub fn new(width: T::Span) -> Result<Self> {
        Self::with_position(width, Itself)
    }
}

impl<T, F, P> DurationWindow<T, Keyed<F>>
where
    F: Fn(&T) -> P,
    P: Timeline,
    P::Span: PartialOrd + Default,
{
    /// Creates a window whose values are placed on the timeline by `key`.
    pub fn keyed(width: P::Span, key: F) -> Result<Self> {
        Self::with_position(width, Keyed(key))
    }
}

impl<T, P> DurationWindow<T, P>
where
    P: Position<T>,
{
    /// Creates a window with an explicit position policy.
    pub fn with_position(width: Span<T, P>, position: P) -> Result<Self>
    where
        Span<T, P>: PartialOrd + Default,
    {
        Self::from_config(DurationConfig::new(width), position)
    }

    /// Creates a window from a validated configuration.
    pub fn from_config(config: DurationConfig<Span<T, P>>, position: P) -> Result<Self>
    where
        Span<T, P>: PartialOrd + Default,
    {
        config.validate()?;
        Ok(Self {
            items: VecDeque::new(),
            width: config.width,
            position,
            comparator: Natural::default(),
            boundary: config.boundary,
            order: config.order,
            filled: false,
        })
    }

}

impl<T, P, C> DurationWindow<T, P, C>
where
    P: Position<T>,
{
    /// Replaces the comparator used for the edge test.
    pub fn with_comparator<C2>(self, comparator: C2) -> DurationWindow<T, P, C2>
    where
        C2: Comparator<Point<T, P>>,
    {
        DurationWindow {
            items: self.items,
            width: self.width,
            position: self.position,
            comparator,
            boundary: self.boundary,
            order: self.order,
            filled: self.filled,
        }
    }

    /// Returns the edge comparator.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Sets the edge policy.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the arrival order.
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Returns the configured width.
    pub fn width(&self) -> &Span<T, P> {
        &self.width
    }

    /// Returns the edge policy.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Returns the arrival order.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Oldest retained value, for the default configuration.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Newest retained value, for the default configuration.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Number of retained values.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true once any value has ever been evicted.
    #[inline]
    pub fn filled(&self) -> bool {
        self.filled
    }

    /// Iterates retained values, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Drops every retained value and resets `filled`.
    pub fn clear(&mut self) {
        self.items.clear();
        self.filled = false;
    }

    /// Span currently covered: distance from the oldest to the newest value,
    /// or a zero span if the window is empty.
    pub fn current_window_size(&self) -> Span<T, P>
    where
        Span<T, P>: Default,
    {
        match (self.items.front(), self.items.back()) {
            (Some(front), Some(back)) => {
                let front = self.position.position(front);
                let back = self.position.position(back);
                match self.order {
                    Order::Asc => back.since(&front),
                    Order::Desc => front.since(&back),
                }
            }
            _ => <Span<T, P> as Default>::default(),
        }
    }

    fn edge_of(&self, newest: &Point<T, P>) -> Option<Point<T, P>> {
        match self.order {
            Order::Asc => newest.rewind(&self.width),
            Order::Desc => newest.advance(&self.width),
        }
    }

    #[inline]
    fn out_of_range(&self, point: &Point<T, P>, edge: &Point<T, P>) -> bool
    where
        C: Comparator<Point<T, P>>,
    {
        let ord = self.order.apply(self.comparator.compare(point, edge));
        match self.boundary {
            Boundary::Retain => ord == Ordering::Less,
            Boundary::Evict => ord != Ordering::Greater,
        }
    }
}

impl<T, P, C> fmt::Debug for DurationWindow<T, P, C>
where
    T: fmt::Debug,
    P: Position<T>,
    Span<T, P>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DurationWindow")
            .field("items", &self.items)
            .field("width", &self.width)
            .field("boundary", &self.boundary)
            .field("order", &self.order)
            .field("filled", &self.filled)
            .finish()
    }
}

impl<T, P: Position<T>, C> Node for DurationWindow<T, P, C> {}

impl<T, P, C> Accumulator<T> for DurationWindow<T, P, C>
where
    T: Clone,
    P: Position<T>,
    C: Comparator<Point<T, P>>,
{
    type Output = T;

    fn add<S>(&mut self, value: &T, sink: &mut S)
    where
        S: FnMut(Event<&T>),
    {
        self.items.push_back(value.clone());

        let edge = {
            let Some(stored) = self.items.back() else {
                return;
            };
            sink(Event::Added(stored));
            self.edge_of(&self.position.position(stored))
        };
        // The edge may not exist on this timeline (e.g. below zero for
        // unsigned points); then nothing can be out of range.
        let Some(edge) = edge else {
            return;
        };

        let mut evicted = 0usize;
        while self
            .items
            .front()
            .is_some_and(|oldest| self.out_of_range(&self.position.position(oldest), &edge))
        {
            let Some(oldest) = self.items.pop_front() else {
                break;
            };
            sink(Event::Removed(&oldest));
            evicted += 1;
        }

        if evicted > 0 {
            self.filled = true;
            trace!(evicted, retained = self.items.len(), "duration window evicted");
        }
    }
}

impl<T, P: Position<T>, C> Window for DurationWindow<T, P, C> {
    type Item = T;

    fn front(&self) -> Option<&T> {
        self.items.front()
    }

    fn back(&self) -> Option<&T> {
        self.items.back()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn filled(&self) -> bool {
        self.filled
    }

    fn clear(&mut self) {
        DurationWindow::clear(self)
    }
}
