//! Stateless pass-through nodes.

use streamfold_core::{Accumulator, Event, Node, Retract};

/// Re-emits every added value as `Added` and every removed value as
/// `Removed`.
///
/// Useful as the left side of a `sync` to fan one input into a branch that
/// also sees removals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Relay;

impl Node for Relay {}

impl<T: ?Sized> Accumulator<T> for Relay {
    type Output = T;

    #[inline]
    fn add<S>(&mut self, value: &T, sink: &mut S)
    where
        S: FnMut(Event<&T>),
    {
        sink(Event::Added(value));
    }
}

impl<T: ?Sized> Retract<T> for Relay {
    #[inline]
    fn remove<S>(&mut self, value: &T, sink: &mut S)
    where
        S: FnMut(Event<&T>),
    {
        sink(Event::Removed(value));
    }
}

/// Emits every added value as `Added` immediately followed by `Removed`.
///
/// Downstream of a `pipe`, which only forwards removals, an echo lets every
/// input through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Echo;

impl Node for Echo {}

impl<T: ?Sized> Accumulator<T> for Echo {
    type Output = T;

    #[inline]
    fn add<S>(&mut self, value: &T, sink: &mut S)
    where
        S: FnMut(Event<&T>),
    {
        sink(Event::Added(value));
        sink(Event::Removed(value));
    }
}

impl<T: ?Sized> Retract<T> for Echo {
    #[inline]
    fn remove<S>(&mut self, value: &T, sink: &mut S)
    where
        S: FnMut(Event<&T>),
    {
        sink(Event::Removed(value));
    }
}
