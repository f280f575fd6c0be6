//! Fan-out to two independent branches.

use streamfold_core::{Accumulator, Event, Node, Retract};

/// Feeds every value to `left`, then to `right`.
///
/// Whatever either branch emits terminates inside it: a parallel node never
/// emits. It is the usual root of a pipeline with several independent
/// branches over the same input.
#[derive(Clone, Debug, Default)]
pub struct ParallelLinked<L, R> {
    left: L,
    right: R,
}

impl<L, R> ParallelLinked<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn left_mut(&mut self) -> &mut L {
        &mut self.left
    }

    pub fn right_mut(&mut self) -> &mut R {
        &mut self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Node for ParallelLinked<L, R> {}

impl<In, L, R> Accumulator<In> for ParallelLinked<L, R>
where
    In: ?Sized,
    L: Accumulator<In>,
    R: Accumulator<In>,
{
    type Output = In;

    #[inline]
    fn add<S>(&mut self, value: &In, _sink: &mut S)
    where
        S: FnMut(Event<&In>),
    {
        self.left.add(value, &mut |_| {});
        self.right.add(value, &mut |_| {});
    }
}

impl<In, L, R> Retract<In> for ParallelLinked<L, R>
where
    In: ?Sized,
    L: Retract<In>,
    R: Retract<In>,
{
    #[inline]
    fn remove<S>(&mut self, value: &In, _sink: &mut S)
    where
        S: FnMut(Event<&In>),
    {
        self.left.remove(value, &mut |_| {});
        self.right.remove(value, &mut |_| {});
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamfold_accumulators::{Recorder, Sum};

    #[test]
    fn test_both_branches_see_every_value() {
        let mut node = ParallelLinked::new(Sum::<i64>::new(), Recorder::new());
        node.push(&4).push(&6).retract(&4);

        assert_eq!(node.left().sum(), 6);
        assert_eq!(
            node.right().events(),
            &[Event::Added(4), Event::Added(6), Event::Removed(4)]
        );
    }

    #[test]
    fn test_never_emits() {
        let mut node = ParallelLinked::new(Recorder::<u8>::new(), Recorder::new());
        let mut emitted = 0;
        node.add(&1, &mut |_| emitted += 1);
        node.remove(&1, &mut |_| emitted += 1);
        assert_eq!(emitted, 0);

        let (left, right) = node.into_parts();
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
    }
}
