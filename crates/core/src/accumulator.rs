//! The accumulator contract.
//!
//! Every node of a pipeline, leaf or combinator, implements `Accumulator`.
//! A node receives a value through `add`, updates whatever state it keeps,
//! and reports to its consumer through a sink:
//!
//! - `Event::Added(v)` for each value it exposes as newly present,
//! - `Event::Removed(v)` for each value that left it as a consequence.
//!
//! The sink may be called any number of times, including zero. Calls happen
//! synchronously, before `add` returns, and their order is the only ordering
//! guarantee a pipeline gives.

use crate::event::Event;

/// A node that ingests values and optionally re-emits events.
pub trait Accumulator<In: ?Sized> {
    /// Type of the values this node hands to its consumer.
    type Output: ?Sized;

    /// Incorporates `value` and reports resulting events to `sink`.
    fn add<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&Self::Output>);

    /// Adds `value` and lets every emitted event terminate here.
    #[inline]
    fn push(&mut self, value: &In) -> &mut Self
    where
        Self: Sized,
    {
        self.add(value, &mut |_| {});
        self
    }

    /// Adds `value` with one continuation per event kind.
    #[inline]
    fn add_with<A, R>(&mut self, value: &In, mut on_added: A, mut on_removing: R)
    where
        A: FnMut(&Self::Output),
        R: FnMut(&Self::Output),
    {
        self.add(value, &mut |event| match event {
            Event::Added(v) => on_added(v),
            Event::Removed(v) => on_removing(v),
        });
    }
}

/// A node that can also take back a value it was given earlier.
///
/// Windows do not implement this: their removals are driven by their own
/// eviction rule, never by the caller.
pub trait Retract<In: ?Sized>: Accumulator<In> {
    /// Removes `value` and reports resulting events to `sink`.
    fn remove<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&Self::Output>);

    /// Removes `value` and lets every emitted event terminate here.
    #[inline]
    fn retract(&mut self, value: &In) -> &mut Self
    where
        Self: Sized,
    {
        self.remove(value, &mut |_| {});
        self
    }

    /// Removes `value` with one continuation per event kind.
    #[inline]
    fn remove_with<A, R>(&mut self, value: &In, mut on_added: A, mut on_removing: R)
    where
        A: FnMut(&Self::Output),
        R: FnMut(&Self::Output),
    {
        self.remove(value, &mut |event| match event {
            Event::Added(v) => on_added(v),
            Event::Removed(v) => on_removing(v),
        });
    }
}

/// Marker for types that take part in fluent composition.
///
/// Every leaf and combinator is a `Node`, and so is a mutable borrow of one.
/// A borrowed node lets a caller wire leaves it owns into a short-lived
/// pipeline and read them back once the pipeline is dropped.
pub trait Node {}

impl<N: Node + ?Sized> Node for &mut N {}

impl<In, A> Accumulator<In> for &mut A
where
    In: ?Sized,
    A: Accumulator<In> + ?Sized,
{
    type Output = A::Output;

    #[inline]
    fn add<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&Self::Output>),
    {
        (**self).add(value, sink)
    }
}

impl<In, A> Retract<In> for &mut A
where
    In: ?Sized,
    A: Retract<In> + ?Sized,
{
    #[inline]
    fn remove<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&Self::Output>),
    {
        (**self).remove(value, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Counts what it sees and echoes it back.
    #[derive(Default)]
    struct Counter {
        added: usize,
        removed: usize,
    }

    impl Accumulator<u32> for Counter {
        type Output = u32;

        fn add<S>(&mut self, value: &u32, sink: &mut S)
        where
            S: FnMut(Event<&u32>),
        {
            self.added += 1;
            sink(Event::Added(value));
        }
    }

    impl Retract<u32> for Counter {
        fn remove<S>(&mut self, value: &u32, sink: &mut S)
        where
            S: FnMut(Event<&u32>),
        {
            self.removed += 1;
            sink(Event::Removed(value));
        }
    }

    #[test]
    fn test_push_chains() {
        let mut counter = Counter::default();
        counter.push(&1).push(&2).retract(&1);
        assert_eq!(counter.added, 2);
        assert_eq!(counter.removed, 1);
    }

    #[test]
    fn test_add_with_dispatches_by_kind() {
        let mut counter = Counter::default();
        let mut added = Vec::new();
        let mut removed = Vec::new();

        counter.add_with(&3, |v| added.push(*v), |v| removed.push(*v));
        counter.remove_with(&4, |v| added.push(*v), |v| removed.push(*v));

        assert_eq!(added, [3]);
        assert_eq!(removed, [4]);
    }

    #[test]
    fn test_mut_borrow_is_an_accumulator() {
        fn feed<A: Retract<u32>>(mut node: A) {
            node.push(&1).retract(&1);
        }

        let mut counter = Counter::default();
        feed(&mut counter);
        assert_eq!(counter.added, 1);
        assert_eq!(counter.removed, 1);
    }
}
