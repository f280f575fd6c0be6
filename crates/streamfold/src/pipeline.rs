//! Pipeline root.

use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;
use streamfold_core::Accumulator;
use tracing::{debug, trace};

/// Owns the root node of a pipeline and drives it.
///
/// Pushing a value propagates it depth-first through every node before
/// `push` returns. Events the root itself emits terminate here unless the
/// value is pushed with [`Pipeline::observe`].
pub struct Pipeline<N, In: ?Sized> {
    root: N,
    pushed: u64,
    _input: PhantomData<fn(&In)>,
}

impl<N, In> Pipeline<N, In>
where
    N: Accumulator<In>,
    In: ?Sized,
{
    pub fn new(root: N) -> Self {
        debug!(root = type_name::<N>(), "pipeline built");
        Self {
            root,
            pushed: 0,
            _input: PhantomData,
        }
    }

    /// Propagates one value.
    pub fn push(&mut self, value: &In) -> &mut Self {
        self.root.add(value, &mut |_| {});
        self.record_push();
        self
    }

    /// Propagates every value, in iteration order.
    pub fn push_all<'a, I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a In>,
        In: 'a,
    {
        for value in values {
            self.push(value);
        }
        self
    }

    /// Propagates one value, handing the root's emissions to the callbacks.
    pub fn observe<A, R>(&mut self, value: &In, on_added: A, on_removing: R) -> &mut Self
    where
        A: FnMut(&N::Output),
        R: FnMut(&N::Output),
    {
        self.root.add_with(value, on_added, on_removing);
        self.record_push();
        self
    }

    fn record_push(&mut self) {
        self.pushed += 1;
        trace!(pushed = self.pushed, "pipeline push");
    }
}

impl<N, In: ?Sized> Pipeline<N, In> {
    /// Number of values pushed so far.
    #[inline]
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    pub fn root(&self) -> &N {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut N {
        &mut self.root
    }

    pub fn into_inner(self) -> N {
        self.root
    }
}

impl<N: fmt::Debug, In: ?Sized> fmt::Debug for Pipeline<N, In> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("root", &self.root)
            .field("pushed", &self.pushed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamfold_accumulators::{FixedWindow, Sum};
    use streamfold_combinators::Compose;

    #[test]
    fn test_push_counts() {
        let mut pipeline = Pipeline::new(Sum::<i32>::new());
        pipeline.push(&1).push(&2);
        pipeline.push_all(&[3, 4]);
        assert_eq!(pipeline.pushed(), 4);
        assert_eq!(pipeline.root().sum(), 10);

        pipeline.root_mut().clear();
        assert_eq!(pipeline.root().sum(), 0);
        assert_eq!(pipeline.pushed(), 4);
    }

    #[test]
    fn test_observe_sees_root_emissions() {
        let mut pipeline = Pipeline::new(FixedWindow::new(1).unwrap());
        let mut added = Vec::new();
        let mut removed = Vec::new();
        for v in [1u8, 2] {
            pipeline.observe(&v, |x: &u8| added.push(*x), |x: &u8| removed.push(*x));
        }
        assert_eq!(added, [1, 2]);
        assert_eq!(removed, [1]);
    }

    #[test]
    fn test_into_inner_returns_root() {
        let mut pipeline = Pipeline::new(FixedWindow::new(2).unwrap().sync(Sum::<u32>::new()));
        pipeline.push_all([5u32, 6, 7].iter());
        let root = pipeline.into_inner();
        assert_eq!(root.right().sum(), 13);
    }
}
