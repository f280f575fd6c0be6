//! Points on an axis that a window can measure.
//!
//! A duration window keeps the elements whose point lies within `width` of
//! the newest point. `Timeline` supplies the arithmetic it needs: move a
//! point back or forth by a span, and measure the span between two points.

use core::time::Duration;

/// A point type with an associated span type.
pub trait Timeline: PartialOrd + Sized {
    /// Distance between two points.
    type Span;

    /// The point `span` before `self`, or `None` if it is not representable.
    fn rewind(&self, span: &Self::Span) -> Option<Self>;

    /// The point `span` after `self`, or `None` if it is not representable.
    fn advance(&self, span: &Self::Span) -> Option<Self>;

    /// Span from `earlier` to `self`.
    fn since(&self, earlier: &Self) -> Self::Span;
}

macro_rules! impl_timeline_int {
    ($($t:ty),*) => {
        $(
            impl Timeline for $t {
                type Span = $t;

                #[inline]
                fn rewind(&self, span: &$t) -> Option<$t> {
                    self.checked_sub(*span)
                }

                #[inline]
                fn advance(&self, span: &$t) -> Option<$t> {
                    self.checked_add(*span)
                }

                #[inline]
                fn since(&self, earlier: &$t) -> $t {
                    self.saturating_sub(*earlier)
                }
            }
        )*
    };
}

impl_timeline_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_timeline_float {
    ($($t:ty),*) => {
        $(
            impl Timeline for $t {
                type Span = $t;

                #[inline]
                fn rewind(&self, span: &$t) -> Option<$t> {
                    Some(self - span)
                }

                #[inline]
                fn advance(&self, span: &$t) -> Option<$t> {
                    Some(self + span)
                }

                #[inline]
                fn since(&self, earlier: &$t) -> $t {
                    self - earlier
                }
            }
        )*
    };
}

impl_timeline_float!(f32, f64);

impl Timeline for Duration {
    type Span = Duration;

    #[inline]
    fn rewind(&self, span: &Duration) -> Option<Duration> {
        self.checked_sub(*span)
    }

    #[inline]
    fn advance(&self, span: &Duration) -> Option<Duration> {
        self.checked_add(*span)
    }

    #[inline]
    fn since(&self, earlier: &Duration) -> Duration {
        self.saturating_sub(*earlier)
    }
}

#[cfg(feature = "std")]
impl Timeline for std::time::Instant {
    type Span = Duration;

    #[inline]
    fn rewind(&self, span: &Duration) -> Option<Self> {
        self.checked_sub(*span)
    }

    #[inline]
    fn advance(&self, span: &Duration) -> Option<Self> {
        self.checked_add(*span)
    }

    #[inline]
    fn since(&self, earlier: &Self) -> Duration {
        self.saturating_duration_since(*earlier)
    }
}

#[cfg(feature = "std")]
impl Timeline for std::time::SystemTime {
    type Span = Duration;

    #[inline]
    fn rewind(&self, span: &Duration) -> Option<Self> {
        self.checked_sub(*span)
    }

    #[inline]
    fn advance(&self, span: &Duration) -> Option<Self> {
        self.checked_add(*span)
    }

    #[inline]
    fn since(&self, earlier: &Self) -> Duration {
        self.duration_since(*earlier).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_rewind_underflow() {
        assert_eq!(3u64.rewind(&5), None);
        assert_eq!(8u64.rewind(&5), Some(3));
        assert_eq!(3u64.since(&5), 0);
    }

    #[test]
    fn test_signed_advance_overflow() {
        assert_eq!(i32::MAX.advance(&1), None);
        assert_eq!((-3i32).advance(&5), Some(2));
    }

    #[test]
    fn test_float_timeline() {
        assert_eq!(2.5f64.rewind(&1.0), Some(1.5));
        assert_eq!(2.5f64.since(&1.0), 1.5);
    }

    #[test]
    fn test_duration_timeline() {
        let t = Duration::from_secs(9);
        assert_eq!(t.rewind(&Duration::from_secs(1)), Some(Duration::from_secs(8)));
        assert_eq!(Duration::ZERO.rewind(&Duration::from_secs(1)), None);
        assert_eq!(t.since(&Duration::from_secs(7)), Duration::from_secs(2));
    }
}
