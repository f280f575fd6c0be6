//! Streamfold Core - the propagation protocol shared by every streamfold node.
//!
//! This crate provides the pieces that leaves and combinators agree on:
//!
//! - `Event`: an added or removed value travelling between two nodes
//! - `Accumulator` / `Retract`: the `add` / `remove` contract every node implements
//! - `Node`: marker for types that take part in fluent composition
//! - `Order` / `Comparator`: ordering policies for windows and ordered sets
//! - `Timeline`: values that can be moved back and forth by a span
//! - `Error`: construction-time validation errors
//!
//! # Example
//!
//! ```rust
//! use streamfold_core::{Accumulator, Event};
//!
//! /// Emits every even value it receives.
//! struct Evens;
//!
//! impl Accumulator<i64> for Evens {
//!     type Output = i64;
//!
//!     fn add<S>(&mut self, value: &i64, sink: &mut S)
//!     where
//!         S: FnMut(Event<&i64>),
//!     {
//!         if value % 2 == 0 {
//!             sink(Event::Added(value));
//!         }
//!     }
//! }
//!
//! let mut seen = Vec::new();
//! let mut evens = Evens;
//! for v in 0..5 {
//!     evens.add(&v, &mut |event| seen.push(*event.into_value()));
//! }
//! assert_eq!(seen, vec![0, 2, 4]);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod accumulator;
pub mod comparator;
mod error;
mod event;
pub mod timeline;

pub use accumulator::{Accumulator, Node, Retract};
pub use comparator::{Comparator, Natural, Order};
pub use error::{Error, Result};
pub use event::Event;
pub use timeline::Timeline;
