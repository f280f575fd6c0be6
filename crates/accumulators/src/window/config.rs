//! Window configuration.
//!
//! Hosts that read window settings from their own configuration can
//! deserialize these types (with the `serde` feature) and hand them to
//! `from_config`. Both validate before a window is built.

use super::Boundary;
use core::cmp::Ordering;
use streamfold_core::{Error, Order, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings of a `DurationWindow`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DurationConfig<W> {
    /// Distance from the newest point to the edge.
    pub width: W,
    /// Fate of elements exactly on the edge.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boundary: Boundary,
    /// Arrival order of the points.
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: Order,
}

impl<W> DurationConfig<W> {
    /// Creates a configuration with default boundary and order.
    pub fn new(width: W) -> Self {
        Self {
            width,
            boundary: Boundary::default(),
            order: Order::default(),
        }
    }

    /// Sets the boundary policy.
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the arrival order.
    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }
}

impl<W: PartialOrd + Default> DurationConfig<W> {
    /// Checks that the width is a non-negative, comparable span.
    pub fn validate(&self) -> Result<()> {
        match self.width.partial_cmp(&W::default()) {
            Some(Ordering::Less) => Err(Error::invalid_width("width must not be negative")),
            None => Err(Error::invalid_width("width is not comparable to zero")),
            Some(_) => Ok(()),
        }
    }
}

/// Settings of a `FixedWindow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedConfig {
    /// Number of values retained once the window is full.
    pub capacity: usize,
}

impl FixedConfig {
    /// Creates a configuration for the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Checks that the capacity is at least one.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn test_duration_config_defaults() {
        let config = DurationConfig::new(Duration::from_secs(1));
        assert_eq!(config.boundary, Boundary::Retain);
        assert_eq!(config.order, Order::Asc);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duration_config_zero_width_is_valid() {
        assert!(DurationConfig::new(0i32).validate().is_ok());
    }

    #[test]
    fn test_duration_config_rejects_negative_width() {
        let config = DurationConfig::new(-0.5f64).boundary(Boundary::Evict);
        assert!(matches!(config.validate(), Err(Error::InvalidWidth { .. })));
    }

    #[test]
    fn test_fixed_config_rejects_zero() {
        assert_eq!(FixedConfig::new(0).validate(), Err(Error::ZeroCapacity));
        assert_eq!(FixedConfig::new(3).validate(), Ok(()));
    }
}
