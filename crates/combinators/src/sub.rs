//! Side branch that passes its input through.

use streamfold_core::{Accumulator, Event, Node, Retract};

/// Feeds every value to `inner` and re-emits the value itself.
///
/// Whatever `inner` emits stays inside it. Wrapping a branch in `Sub` lets
/// a window keep feeding its downstream while also driving a side
/// computation, e.g. `window.sync(sub(turnover_sum)).pipe(older_window)`.
#[derive(Clone, Debug, Default)]
pub struct Sub<R> {
    inner: R,
}

impl<R> Sub<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Node for Sub<R> {}

impl<In, R> Accumulator<In> for Sub<R>
where
    In: ?Sized,
    R: Accumulator<In>,
{
    type Output = In;

    #[inline]
    fn add<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&In>),
    {
        self.inner.add(value, &mut |_| {});
        sink(Event::Added(value));
    }
}

impl<In, R> Retract<In> for Sub<R>
where
    In: ?Sized,
    R: Retract<In>,
{
    #[inline]
    fn remove<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&In>),
    {
        self.inner.remove(value, &mut |_| {});
        sink(Event::Removed(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use streamfold_accumulators::{Ordered, Sum};

    #[test]
    fn test_passes_value_through() {
        let mut node = Sub::new(Sum::<i32>::new());
        let mut out = Vec::new();
        node.add(&7, &mut |e| out.push(e.cloned()));
        node.remove(&2, &mut |e| out.push(e.cloned()));

        assert_eq!(out, [Event::Added(7), Event::Removed(2)]);
        assert_eq!(node.inner().sum(), 5);
    }

    #[test]
    fn test_inner_emissions_are_dropped() {
        let mut node = Sub::new(Ordered::new());
        let mut count = 0;
        node.add(&1u32, &mut |_| count += 1);
        assert_eq!(count, 1);
        assert_eq!(node.into_inner().low(), Some(&1));
    }
}
