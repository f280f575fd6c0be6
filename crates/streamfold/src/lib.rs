//! Streamfold - composable streaming aggregation.
//!
//! A pipeline is a tree of accumulators. Leaves keep state (sums, sliding
//! windows, ordered sets); combinators route each pushed value, and the
//! `Added` / `Removed` events the leaves emit, to other nodes. Every push is
//! propagated synchronously and depth-first.
//!
//! # Crates
//!
//! - `streamfold-core`: the `Accumulator` protocol, `Event`, `Timeline`, errors
//! - `streamfold-accumulators`: `Sum`, `DurationWindow`, `FixedWindow`,
//!   `Ordered`, `Low`, `High`, `Recorder`
//! - `streamfold-combinators`: `sync`, `pipe`, `parallel`, `sub`, `transform`
//!
//! # Example
//!
//! ```rust
//! use streamfold::prelude::*;
//!
//! let mut recent = Sum::<u64>::new();
//! let mut low = Low::new();
//! let mut high = High::new();
//!
//! let mut pipeline = Pipeline::new(DurationWindow::<u64>::new(10).unwrap().sync(parallel![
//!     &mut recent,
//!     &mut low,
//!     &mut high,
//! ]));
//! pipeline.push_all(&[3, 8, 11, 15]);
//! drop(pipeline);
//!
//! // 3 fell out of the window when 15 arrived.
//! assert_eq!(recent.sum(), 34);
//! assert_eq!(low.value(), Some(&8));
//! assert_eq!(high.value(), Some(&15));
//! ```

mod pipeline;

pub use pipeline::Pipeline;

pub use streamfold_accumulators::{
    Boundary, DurationConfig, DurationWindow, FixedConfig, FixedWindow, High, Keyed, Low, Ordered,
    Recorder, Sum, Window,
};
pub use streamfold_combinators::{
    echo, parallel, pipe, relay, sub, sync, transform, Compose, Echo, ParallelLinked, PipeLinked,
    Relay, Sub, SyncLinked, Transform,
};
pub use streamfold_core::{
    Accumulator, Comparator, Error, Event, Natural, Node, Order, Result, Retract, Timeline,
};

/// Everything needed to build and drive a pipeline.
pub mod prelude {
    pub use crate::Pipeline;
    pub use streamfold_accumulators::{
        Boundary, DurationWindow, FixedWindow, High, Low, Ordered, Recorder, Sum, Window,
    };
    pub use streamfold_combinators::{
        echo, parallel, pipe, relay, sub, sync, transform, Compose,
    };
    pub use streamfold_core::{Accumulator, Comparator, Event, Order, Retract};
}
