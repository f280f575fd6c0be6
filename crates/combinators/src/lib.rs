//! Streamfold Combinators - wiring accumulators into pipelines.
//!
//! A combinator is itself an accumulator that routes each value, and each
//! event its children emit, to other nodes:
//!
//! - `SyncLinked`: right mirrors the left's `Added` and `Removed` events
//! - `PipeLinked`: the left's removals become the right's additions
//! - `ParallelLinked`: both sides get the same input, nothing is emitted
//! - `Sub`: a side branch that passes its input through
//! - `Transform`: maps values, keeping the event kind
//! - `Echo`, `Relay`: stateless pass-throughs
//!
//! Pipelines are built with the [`Compose`] methods, the free functions, or
//! the [`parallel!`] macro. Combining nodes whose value types do not line up
//! fails to compile.
//!
//! # Example
//!
//! ```rust
//! use streamfold_accumulators::{DurationWindow, Sum};
//! use streamfold_combinators::{sub, Compose};
//! use streamfold_core::Accumulator;
//!
//! let mut recent = Sum::<u64>::new();
//! let mut older = Sum::<u64>::new();
//! {
//!     let mut root = DurationWindow::<u64>::new(10)
//!         .unwrap()
//!         .sync(sub(&mut recent))
//!         .pipe(DurationWindow::<u64>::new(10).unwrap().sync(&mut older));
//!     for t in [1u64, 5, 12, 20] {
//!         root.push(&t);
//!     }
//! }
//! // The first window holds 12 and 20; 1 and 5 moved on to the second.
//! assert_eq!(recent.sum(), 32);
//! assert_eq!(older.sum(), 6);
//! ```

#![no_std]

extern crate alloc;

mod compose;
mod parallel;
mod passthrough;
mod pipe;
mod sub;
mod sync;
mod transform;

pub use compose::{echo, parallel, pipe, relay, sub, sync, transform, Compose};
pub use parallel::ParallelLinked;
pub use passthrough::{Echo, Relay};
pub use pipe::PipeLinked;
pub use sub::Sub;
pub use sync::SyncLinked;
pub use transform::Transform;
