//! Event recorder.

use alloc::vec::{self, Vec};
use core::hash::Hash;
use hashbrown::HashMap;
use streamfold_core::{Accumulator, Event, Node, Retract};

/// Stores every event it receives, in arrival order, and re-emits it.
///
/// A recorder placed downstream of another node shows exactly what that
/// node emitted and in which order.
#[derive(Clone, Debug)]
pub struct Recorder<T> {
    events: Vec<Event<T>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events, oldest first.
    #[inline]
    pub fn events(&self) -> &[Event<T>] {
        &self.events
    }

    /// Takes the recorded events, leaving the recorder empty.
    pub fn drain(&mut self) -> vec::Drain<'_, Event<T>> {
        self.events.drain(..)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of adds minus number of removes.
    pub fn net_count(&self) -> i64 {
        self.events.iter().map(Event::diff).sum()
    }
}

impl<T> Recorder<T>
where
    T: Eq + Hash + Clone,
{
    /// Net count per value; values whose adds and removes cancel out are
    /// left out.
    pub fn net_counts(&self) -> HashMap<T, i64> {
        let mut counts: HashMap<T, i64> = HashMap::new();
        for event in &self.events {
            *counts.entry(event.value().clone()).or_insert(0) += event.diff();
        }
        counts.retain(|_, diff| *diff != 0);
        counts
    }
}

impl<T> Node for Recorder<T> {}

impl<T: Clone> Accumulator<T> for Recorder<T> {
    type Output = T;

    fn add<S>(&mut self, value: &T, sink: &mut S)
    where
        S: FnMut(Event<&T>),
    {
        self.events.push(Event::Added(value.clone()));
        sink(Event::Added(value));
    }
}

impl<T: Clone> Retract<T> for Recorder<T> {
    fn remove<S>(&mut self, value: &T, sink: &mut S)
    where
        S: FnMut(Event<&T>),
    {
        self.events.push(Event::Removed(value.clone()));
        sink(Event::Removed(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut recorder = Recorder::new();
        recorder.push(&1).retract(&2).push(&3);
        assert_eq!(
            recorder.events(),
            &[Event::Added(1), Event::Removed(2), Event::Added(3)]
        );
        assert_eq!(recorder.net_count(), 1);
    }

    #[test]
    fn test_re_emits() {
        let mut recorder = Recorder::new();
        let mut seen = Vec::new();
        recorder.add(&'x', &mut |e| seen.push(e.cloned()));
        recorder.remove(&'x', &mut |e| seen.push(e.cloned()));
        assert_eq!(seen, recorder.events());
    }

    #[test]
    fn test_net_counts() {
        let mut recorder = Recorder::new();
        recorder.push(&"a").push(&"b").push(&"a").retract(&"b");
        let counts = recorder.net_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("a"), Some(&2));
    }

    #[test]
    fn test_drain_and_clear() {
        let mut recorder = Recorder::new();
        recorder.push(&1u8).push(&2);
        let drained: Vec<_> = recorder.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(recorder.is_empty());

        recorder.push(&3);
        recorder.clear();
        assert_eq!(recorder.len(), 0);
    }
}
