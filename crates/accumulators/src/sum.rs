//! Running sum.

use core::marker::PhantomData;
use core::mem;
use core::time::Duration;
use streamfold_core::{Accumulator, Event, Node, Retract};

/// How a sum folds values in and out.
pub trait Arithmetic<S, V: ?Sized> {
    /// Returns `acc` with `value` added.
    fn plus(&self, acc: S, value: &V) -> S;

    /// Returns `acc` with `value` taken away.
    fn minus(&self, acc: S, value: &V) -> S;
}

/// Native addition and subtraction of the sum type itself.
///
/// Integers wrap on overflow, so a remove that exceeds the running total
/// never panics; floats use `+` / `-`; `Duration` saturates at zero and at
/// its maximum.
#[derive(Clone, Copy, Debug, Default)]
pub struct Additive;

macro_rules! impl_additive_int {
    ($($t:ty),*) => {
        $(
            impl Arithmetic<$t, $t> for Additive {
                #[inline]
                fn plus(&self, acc: $t, value: &$t) -> $t {
                    acc.wrapping_add(*value)
                }

                #[inline]
                fn minus(&self, acc: $t, value: &$t) -> $t {
                    acc.wrapping_sub(*value)
                }
            }
        )*
    };
}

impl_additive_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_additive_float {
    ($($t:ty),*) => {
        $(
            impl Arithmetic<$t, $t> for Additive {
                #[inline]
                fn plus(&self, acc: $t, value: &$t) -> $t {
                    acc + value
                }

                #[inline]
                fn minus(&self, acc: $t, value: &$t) -> $t {
                    acc - value
                }
            }
        )*
    };
}

impl_additive_float!(f32, f64);

impl Arithmetic<Duration, Duration> for Additive {
    #[inline]
    fn plus(&self, acc: Duration, value: &Duration) -> Duration {
        acc.saturating_add(*value)
    }

    #[inline]
    fn minus(&self, acc: Duration, value: &Duration) -> Duration {
        acc.saturating_sub(*value)
    }
}

/// Arithmetic given as a pair of closures.
#[derive(Clone, Copy, Debug)]
pub struct FnArithmetic<P, M> {
    plus: P,
    minus: M,
}

impl<P, M> FnArithmetic<P, M> {
    /// Creates arithmetic from a `plus` and a `minus` closure.
    pub fn new(plus: P, minus: M) -> Self {
        Self { plus, minus }
    }
}

impl<S, V, P, M> Arithmetic<S, V> for FnArithmetic<P, M>
where
    V: ?Sized,
    P: Fn(S, &V) -> S,
    M: Fn(S, &V) -> S,
{
    #[inline]
    fn plus(&self, acc: S, value: &V) -> S {
        (self.plus)(acc, value)
    }

    #[inline]
    fn minus(&self, acc: S, value: &V) -> S {
        (self.minus)(acc, value)
    }
}

/// Sums its inputs.
///
/// `sum()` equals the fold of every added value minus every removed value.
/// Membership is not tracked: removing a value that was never added is
/// accepted and simply moves the total (an unsigned total wraps around).
/// Windowed pipelines keep the total honest by removing exactly what the
/// window evicts.
///
/// A sum absorbs its inputs and never emits.
#[derive(Clone, Debug)]
pub struct Sum<S, A = Additive, V: ?Sized = S> {
    sum: S,
    arithmetic: A,
    _input: PhantomData<fn(&V)>,
}

impl<S: Default> Sum<S> {
    /// Creates a sum at the additive identity.
    pub fn new() -> Self {
        Self::with_arithmetic(Additive)
    }
}

impl<S: Default> Default for Sum<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Default, V: ?Sized, P, M> Sum<S, FnArithmetic<P, M>, V>
where
    P: Fn(S, &V) -> S,
    M: Fn(S, &V) -> S,
{
    /// Creates a sum that folds with the given closures.
    ///
    /// The input type may differ from the sum type, e.g. summing the
    /// turnover of trade ticks into an `f64`.
    pub fn with_ops(plus: P, minus: M) -> Self {
        Self::with_arithmetic(FnArithmetic::new(plus, minus))
    }
}

impl<S: Default, A, V: ?Sized> Sum<S, A, V> {
    /// Creates a sum with custom arithmetic.
    pub fn with_arithmetic(arithmetic: A) -> Self {
        Self {
            sum: S::default(),
            arithmetic,
            _input: PhantomData,
        }
    }

    /// Resets the sum to the additive identity.
    pub fn clear(&mut self) {
        self.sum = S::default();
    }
}

impl<S, A, V: ?Sized> Sum<S, A, V> {
    /// Returns the current sum.
    #[inline]
    pub fn sum(&self) -> S
    where
        S: Clone,
    {
        self.sum.clone()
    }

    /// Returns a reference to the current sum.
    #[inline]
    pub fn get(&self) -> &S {
        &self.sum
    }
}

impl<S, A, V: ?Sized> Node for Sum<S, A, V> {}

impl<S, A, V> Accumulator<V> for Sum<S, A, V>
where
    S: Default,
    A: Arithmetic<S, V>,
    V: ?Sized,
{
    type Output = V;

    #[inline]
    fn add<K>(&mut self, value: &V, _sink: &mut K)
    where
        K: FnMut(Event<&V>),
    {
        let acc = mem::take(&mut self.sum);
        self.sum = self.arithmetic.plus(acc, value);
    }
}

impl<S, A, V> Retract<V> for Sum<S, A, V>
where
    S: Default,
    A: Arithmetic<S, V>,
    V: ?Sized,
{
    #[inline]
    fn remove<K>(&mut self, value: &V, _sink: &mut K)
    where
        K: FnMut(Event<&V>),
    {
        let acc = mem::take(&mut self.sum);
        self.sum = self.arithmetic.minus(acc, value);
    }
}
