//! Sliding windows.
//!
//! A window stores values in arrival order and evicts from the front. Every
//! add emits `Added` for the stored value first, then one `Removed` per
//! evicted value, oldest first.
//!
//! - `DurationWindow` evicts by distance on a `Timeline`
//! - `FixedWindow` evicts by count
//!
//! Both implement the read-only `Window` view.

mod config;
mod duration;
mod fixed;

pub use config::{DurationConfig, FixedConfig};
pub use duration::DurationWindow;
pub use fixed::FixedWindow;

use core::str::FromStr;
use streamfold_core::{Error, Result, Timeline};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only view shared by all windows.
pub trait Window {
    /// Stored value type.
    type Item;

    /// Oldest retained value.
    fn front(&self) -> Option<&Self::Item>;

    /// Newest retained value.
    fn back(&self) -> Option<&Self::Item>;

    /// Number of retained values.
    fn len(&self) -> usize;

    /// Returns true if nothing is retained.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true once the window has ever evicted (or, for a fixed
    /// window, reached capacity).
    fn filled(&self) -> bool;

    /// Drops every retained value and resets `filled`.
    fn clear(&mut self);
}

/// What happens to an element lying exactly on the window edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Boundary {
    /// Keep it: only elements strictly beyond the edge are evicted.
    #[default]
    Retain,
    /// Evict it together with everything beyond.
    Evict,
}

impl FromStr for Boundary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "retain" => Ok(Boundary::Retain),
            "evict" => Ok(Boundary::Evict),
            other => Err(Error::invalid_config(alloc::format!(
                "unknown boundary `{}`",
                other
            ))),
        }
    }
}

/// Maps a stored value to its point on a timeline.
pub trait Position<T: ?Sized> {
    /// The timeline the window measures on.
    type Point: Timeline;

    /// Point of `value`.
    fn position(&self, value: &T) -> Self::Point;
}

/// The value is its own point.
#[derive(Clone, Copy, Debug, Default)]
pub struct Itself;

impl<T: Timeline + Clone> Position<T> for Itself {
    type Point = T;

    #[inline]
    fn position(&self, value: &T) -> T {
        value.clone()
    }
}

/// The point is read from the value by a key function.
#[derive(Clone, Copy, Debug)]
pub struct Keyed<F>(pub F);

impl<T, P, F> Position<T> for Keyed<F>
where
    T: ?Sized,
    P: Timeline,
    F: Fn(&T) -> P,
{
    type Point = P;

    #[inline]
    fn position(&self, value: &T) -> P {
        (self.0)(value)
    }
}
