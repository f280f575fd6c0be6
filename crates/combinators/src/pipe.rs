//! Pipe: what the left node evicts flows into the right node.

use streamfold_core::{Accumulator, Event, Node};

/// Feeds the values `left` removes into `right` as additions.
///
/// `left`'s `Added` events are dropped. Chaining windows this way builds
/// staged history: the values leaving one window enter the next, older one.
///
/// A pipe has no `remove`; it is meant to sit downstream of a window, whose
/// removals are self-driven.
#[derive(Clone, Debug, Default)]
pub struct PipeLinked<L, R> {
    left: L,
    right: R,
}

impl<L, R> PipeLinked<L, R> {
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

impl<L, R> Node for PipeLinked<L, R> {}

impl<In, L, R> Accumulator<In> for PipeLinked<L, R>
where
    In: ?Sized,
    L: Accumulator<In>,
    R: Accumulator<L::Output>,
{
    type Output = R::Output;

    fn add<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&R::Output>),
    {
        let right = &mut self.right;
        self.left.add(value, &mut |event| {
            if let Event::Removed(evicted) = event {
                right.add(evicted, sink);
            }
        });
    }
}
