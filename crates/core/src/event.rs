//! Propagation events.
//!
//! An `Event` is what one node hands to its consumer: a value that became
//! present (`Added`) or a value that left the node (`Removed`). Nodes pass
//! events as `Event<&T>` so values are borrowed, not copied, on their way
//! through a pipeline.

/// A value crossing an edge between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event<T> {
    /// The value is newly present downstream of the emitting node.
    Added(T),
    /// The value was evicted or removed by the emitting node.
    Removed(T),
}

impl<T> Event<T> {
    /// Creates an added event.
    #[inline]
    pub fn added(value: T) -> Self {
        Event::Added(value)
    }

    /// Creates a removed event.
    #[inline]
    pub fn removed(value: T) -> Self {
        Event::Removed(value)
    }

    /// Returns true if this is an `Added` event.
    #[inline]
    pub fn is_added(&self) -> bool {
        matches!(self, Event::Added(_))
    }

    /// Returns true if this is a `Removed` event.
    #[inline]
    pub fn is_removed(&self) -> bool {
        matches!(self, Event::Removed(_))
    }

    /// Returns a reference to the carried value.
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Event::Added(v) | Event::Removed(v) => v,
        }
    }

    /// Consumes the event and returns the carried value.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Event::Added(v) | Event::Removed(v) => v,
        }
    }

    /// Maps the carried value, keeping the event kind.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Event<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Event::Added(v) => Event::Added(f(v)),
            Event::Removed(v) => Event::Removed(f(v)),
        }
    }

    /// Borrows the carried value.
    #[inline]
    pub fn as_ref(&self) -> Event<&T> {
        match self {
            Event::Added(v) => Event::Added(v),
            Event::Removed(v) => Event::Removed(v),
        }
    }

    /// Turns an added event into a removed one and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Event::Added(v) => Event::Removed(v),
            Event::Removed(v) => Event::Added(v),
        }
    }

    /// Signed multiplicity of the event: `+1` for added, `-1` for removed.
    #[inline]
    pub fn diff(&self) -> i64 {
        match self {
            Event::Added(_) => 1,
            Event::Removed(_) => -1,
        }
    }
}

impl<T: Clone> Event<&T> {
    /// Clones the borrowed value into an owned event.
    #[inline]
    pub fn cloned(self) -> Event<T> {
        self.map(T::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_added() {
        let e = Event::added(42);
        assert!(e.is_added());
        assert!(!e.is_removed());
        assert_eq!(e.diff(), 1);
        assert_eq!(*e.value(), 42);
    }

    #[test]
    fn test_event_removed() {
        let e = Event::removed(42);
        assert!(e.is_removed());
        assert!(!e.is_added());
        assert_eq!(e.diff(), -1);
        assert_eq!(e.into_value(), 42);
    }

    #[test]
    fn test_event_map_keeps_kind() {
        let e = Event::removed(21).map(|x| x * 2);
        assert_eq!(e, Event::Removed(42));
    }

    #[test]
    fn test_event_invert() {
        assert_eq!(Event::added(1).invert(), Event::Removed(1));
        assert_eq!(Event::removed(1).invert(), Event::Added(1));
    }

    #[test]
    fn test_event_cloned() {
        let value = 7u32;
        let borrowed = Event::Added(&value);
        assert_eq!(borrowed.cloned(), Event::Added(7));
        assert_eq!(Event::added(7).as_ref(), borrowed);
    }
}
