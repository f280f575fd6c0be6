//! Stateless value transformation.

use core::fmt;
use streamfold_core::{Accumulator, Event, Node, Retract};

/// Applies a function to every value and re-emits the result with the same
/// event kind.
#[derive(Clone, Copy)]
pub struct Transform<F> {
    f: F,
}

impl<F> Transform<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for Transform<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

impl<F> Node for Transform<F> {}

impl<In, Out, F> Accumulator<In> for Transform<F>
where
    In: ?Sized,
    F: Fn(&In) -> Out,
{
    type Output = Out;

    #[inline]
    fn add<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&Out>),
    {
        let mapped = (self.f)(value);
        sink(Event::Added(&mapped));
    }
}

impl<In, Out, F> Retract<In> for Transform<F>
where
    In: ?Sized,
    F: Fn(&In) -> Out,
{
    #[inline]
    fn remove<S>(&mut self, value: &In, sink: &mut S)
    where
        S: FnMut(Event<&Out>),
    {
        let mapped = (self.f)(value);
        sink(Event::Removed(&mapped));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[test]
    fn test_transform_keeps_event_kind() {
        let mut double = Transform::new(|x: &i32| x * 2);
        let mut seen = Vec::new();
        double.add(&3, &mut |e| seen.push(e.cloned()));
        double.remove(&5, &mut |e| seen.push(e.cloned()));
        assert_eq!(seen, [Event::Added(6), Event::Removed(10)]);
    }

    #[test]
    fn test_transform_unsized_input() {
        let mut len = Transform::new(|s: &str| s.len());
        let mut total = 0usize;
        len.add_with("four", |n: &usize| total += *n, |_| {});
        assert_eq!(total, 4);

        let mut upper = Transform::new(|s: &str| s.to_uppercase());
        let mut out = String::new();
        upper.add_with("ab", |s: &String| out.push_str(s), |_| {});
        assert_eq!(out, "AB".to_string());
    }
}
