//! Sync: the right node mirrors everything the left node emits.

use streamfold_core::{Accumulator, Event, Node, Retract};

/// Keeps `right` in step with `left`.
///
/// Each `Added` that `left` emits is added to `right`, each `Removed` is
/// removed from it, in emission order. The node's own emissions are
/// whatever `right` emits. Syncing a sum to a window keeps the sum equal to
/// the fold of the window's contents.
#[derive(Clone, Debug, Default)]
pub struct SyncLinked<L, R> {
    left: L,
    right: R,
}

impl<L, R> SyncLinked<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Node for SyncLinked<L, R> {}

impl<In, L, R> Accumulator<In> for SyncLinked<L, R>
where
    In: ?Sized,
    L: Accumulator<In>,
    R: Retract<L::Output>,
{
    type Output = R::Output;

    fn add<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&R::Output>),
    {
        let right = &mut self.right;
        self.left.add(value, &mut |event| match event {
            Event::Added(v) => right.add(v, sink),
            Event::Removed(v) => right.remove(v, sink),
        });
    }
}

impl<In, L, R> Retract<In> for SyncLinked<L, R>
where
    In: ?Sized,
    L: Retract<In>,
    R: Retract<L::Output>,
{
    fn remove<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&R::Output>),
    {
        let right = &mut self.right;
        self.left.remove(value, &mut |event| match event {
            Event::Added(v) => right.add(v, sink),
            Event::Removed(v) => right.remove(v, sink),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use streamfold_accumulators::{DurationWindow, Recorder, Sum};

    #[test]
    fn test_sum_follows_window() {
        let mut node = SyncLinked::new(DurationWindow::<u64>::new(10).unwrap(), Sum::<u64>::new());
        for t in [1u64, 5, 12, 20] {
            node.push(&t);
        }
        assert_eq!(node.right().sum(), 32);
        assert_eq!(node.left().iter().sum::<u64>(), 32);
    }

    #[test]
    fn test_right_sees_events_in_emission_order() {
        let mut node = SyncLinked::new(DurationWindow::<u64>::new(2).unwrap(), Recorder::new());
        for t in [1u64, 2, 5] {
            node.push(&t);
        }
        assert_eq!(
            node.right().events(),
            &[
                Event::Added(1),
                Event::Added(2),
                Event::Added(5),
                Event::Removed(1),
                Event::Removed(2),
            ]
        );
    }

    #[test]
    fn test_remove_goes_through_left() {
        let mut node = SyncLinked::new(Recorder::new(), Recorder::new());
        let mut out = Vec::new();
        node.add(&'x', &mut |e| out.push(e.cloned()));
        node.remove(&'x', &mut |e| out.push(e.cloned()));

        assert_eq!(out, [Event::Added('x'), Event::Removed('x')]);
        assert_eq!(node.left().net_count(), 0);
        assert_eq!(node.right().events(), out.as_slice());
    }
}
