//! Fluent and free-function construction of pipelines.
//!
//! | method           | free function       | node                |
//! |------------------|---------------------|---------------------|
//! | `a.sync(b)`      | `sync(a, b)`        | `SyncLinked<A, B>`  |
//! | `a.pipe(b)`      | `pipe(a, b)`        | `PipeLinked<A, B>`  |
//! | `a.parallel(b)`  | `parallel(a, b)`    | `ParallelLinked`    |
//! | `a.map(f)`       | `sync(a, transform(f))` | `SyncLinked<A, Transform<F>>` |
//! | `a.sub()`        | `sub(a)`            | `Sub<A>`            |
//!
//! Nodes are combined by value. To read a leaf after the pipeline has run,
//! combine a `&mut` borrow of it instead and drop the pipeline first.

use crate::{Echo, ParallelLinked, PipeLinked, Relay, Sub, SyncLinked, Transform};
use streamfold_core::Node;

/// Combinator methods available on every node.
pub trait Compose: Node + Sized {
    /// Mirrors this node's emissions into `right`.
    fn sync<R>(self, right: R) -> SyncLinked<Self, R> {
        SyncLinked::new(self, right)
    }

    /// Feeds this node's removals into `right`.
    fn pipe<R>(self, right: R) -> PipeLinked<Self, R> {
        PipeLinked::new(self, right)
    }

    /// Feeds the same input to this node and to `right`.
    fn parallel<R>(self, right: R) -> ParallelLinked<Self, R> {
        ParallelLinked::new(self, right)
    }

    /// Syncs this node into a transform by `f`.
    fn map<F>(self, f: F) -> SyncLinked<Self, Transform<F>> {
        SyncLinked::new(self, Transform::new(f))
    }

    /// Wraps this node as a pass-through side branch.
    fn sub(self) -> Sub<Self> {
        Sub::new(self)
    }
}

impl<T: Node> Compose for T {}

pub fn sync<L, R>(left: L, right: R) -> SyncLinked<L, R> {
    SyncLinked::new(left, right)
}

pub fn pipe<L, R>(left: L, right: R) -> PipeLinked<L, R> {
    PipeLinked::new(left, right)
}

pub fn parallel<L, R>(left: L, right: R) -> ParallelLinked<L, R> {
    ParallelLinked::new(left, right)
}

pub fn sub<R>(inner: R) -> Sub<R> {
    Sub::new(inner)
}

pub fn transform<F>(f: F) -> Transform<F> {
    Transform::new(f)
}

pub fn echo() -> Echo {
    Echo
}

pub fn relay() -> Relay {
    Relay
}

/// Left-folds its arguments into nested `ParallelLinked` nodes.
///
/// `parallel![a, b, c]` is `ParallelLinked::new(ParallelLinked::new(a, b), c)`.
#[macro_export]
macro_rules! parallel {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::parallel!($crate::ParallelLinked::new($first, $second) $(, $rest)*)
    };
}
