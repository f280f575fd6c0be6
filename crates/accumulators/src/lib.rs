//! Streamfold Accumulators - the leaves of a streamfold pipeline.
//!
//! Each leaf keeps its own state and reports what it did through the
//! `Accumulator` sink:
//!
//! - `Sum`: running total, `plus` on add and `minus` on remove
//! - `DurationWindow`: sliding window over a timeline, evicts by distance
//! - `FixedWindow`: sliding window holding the last `capacity` values
//! - `Ordered`, `Low`, `High`: sorted multiset with min / max access
//! - `Recorder`: keeps every event it sees, in order
//!
//! # Example
//!
//! ```rust
//! use streamfold_accumulators::{DurationWindow, Sum, Window};
//! use streamfold_core::{Accumulator, Event, Retract};
//!
//! let mut window = DurationWindow::<u64>::new(10).unwrap();
//! let mut sum = Sum::<u64>::new();
//!
//! for t in [1u64, 5, 12, 20] {
//!     window.add(&t, &mut |event| match event {
//!         Event::Added(v) => { sum.push(v); }
//!         Event::Removed(v) => { sum.retract(v); }
//!     });
//! }
//!
//! // 20 - 10 = 10, so 1 and 5 were evicted.
//! assert_eq!(window.front(), Some(&12));
//! assert_eq!(sum.sum(), 32);
//! ```

#![no_std]

extern crate alloc;

mod ordered;
mod recorder;
mod sum;
pub mod window;

pub use ordered::{High, Iter as OrderedIter, Low, Ordered};
pub use recorder::Recorder;
pub use sum::{Additive, Arithmetic, FnArithmetic, Sum};
pub use window::{
    Boundary, DurationConfig, DurationWindow, FixedConfig, FixedWindow, Itself, Keyed, Position,
    Window,
};
