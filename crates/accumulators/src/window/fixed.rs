//! Window that evicts by count.

use super::config::FixedConfig;
use super::Window;
use alloc::collections::vec_deque::{self, VecDeque};
use streamfold_core::{Accumulator, Event, Node, Result};
use tracing::debug;

/// Sliding window over the last `capacity` values.
///
/// The window becomes `filled` on the add that brings it to `capacity`.
/// From then on every add evicts the oldest value, so the window holds
/// exactly `capacity` values.
#[derive(Clone, Debug)]
pub struct FixedWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
    filled: bool,
}

impl<T> FixedWindow<T> {
    /// Creates a window of the given capacity.
    ///
    /// Returns `Error::ZeroCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::from_config(FixedConfig::new(capacity))
    }

    /// Creates a window from a validated configuration.
    pub fn from_config(config: FixedConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            items: VecDeque::with_capacity(config.capacity),
            capacity: config.capacity,
            filled: false,
        })
    }

    /// Returns the configured capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest retained value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Newest retained value.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Number of retained values.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true once the window has reached its capacity.
    #[inline]
    pub fn filled(&self) -> bool {
        self.filled
    }

    /// Iterates retained values, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Drops every retained value and resets `filled`.
    pub fn clear(&mut self) {
        self.items.clear();
        self.filled = false;
    }
}

impl<T> Node for FixedWindow<T> {}

impl<T: Clone> Accumulator<T> for FixedWindow<T> {
    type Output = T;

    fn add<S>(&mut self, value: &T, sink: &mut S)
    where
        S: FnMut(Event<&T>),
    {
        self.items.push_back(value.clone());
        if let Some(stored) = self.items.back() {
            sink(Event::Added(stored));
        }

        if self.filled {
            if let Some(oldest) = self.items.pop_front() {
                sink(Event::Removed(&oldest));
            }
        } else if self.items.len() == self.capacity {
            self.filled = true;
            debug!(capacity = self.capacity, "fixed window filled");
        }
    }
}

impl<T> Window for FixedWindow<T> {
    type Item = T;

    fn front(&self) -> Option<&T> {
        self.items.front()
    }

    fn back(&self) -> Option<&T> {
        self.items.back()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn filled(&self) -> bool {
        self.filled
    }

    fn clear(&mut self) {
        FixedWindow::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use streamfold_core::Error;

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(FixedWindow::<u8>::new(0).unwrap_err(), Error::ZeroCapacity);
    }

    #[test]
    fn test_fills_at_capacity() {
        let mut window = FixedWindow::new(3).unwrap();
        window.push(&1).push(&2);
        assert!(!window.filled());
        window.push(&3);
        assert!(window.filled());
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn test_evicts_oldest_once_filled() {
        let mut window = FixedWindow::new(2).unwrap();
        let mut events = Vec::new();
        for v in [1, 2, 3, 4] {
            window.add(&v, &mut |e| events.push(e.cloned()));
        }
        assert_eq!(
            events,
            [
                Event::Added(1),
                Event::Added(2),
                Event::Added(3),
                Event::Removed(1),
                Event::Added(4),
                Event::Removed(2),
            ]
        );
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), [3, 4]);
    }

    #[test]
    fn test_capacity_one() {
        let mut window = FixedWindow::new(1).unwrap();
        let mut evicted = Vec::new();
        window.add_with(&'a', |_| {}, |v| evicted.push(*v));
        window.add_with(&'b', |_| {}, |v| evicted.push(*v));
        assert_eq!(evicted, ['a']);
        assert_eq!(window.front(), Some(&'b'));
        assert_eq!(window.back(), Some(&'b'));
    }

    #[test]
    fn test_accessors() {
        let mut window = FixedWindow::new(2).unwrap();
        assert_eq!(window.capacity(), 2);
        assert!(window.is_empty());
        assert_eq!(window.front(), None);

        window.push(&7u16).push(&8).push(&9);
        assert_eq!(window.front(), Some(&8));
        assert_eq!(window.back(), Some(&9));
        assert_eq!(window.len(), window.capacity());
    }

    #[test]
    fn test_clear_resets_filled() {
        let mut window = FixedWindow::new(1).unwrap();
        window.push(&10u32);
        assert!(window.filled());

        Window::clear(&mut window);
        assert!(!window.filled());
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 1);
    }
}
