use crate::utility::Nudge;
use core::ops::{self, Bound, RangeBounds};
use fastrand::Rng;

/// The range of sizes traversed by a run, along with the current size.
///
/// The size is a hint in `0.0..=1.0` that bounds the magnitude of numbers and the
/// length of collections. It starts at `start` and grows towards `end` as the
/// trials of a run progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sizes {
    range: Range<f64>,
    scale: f64,
}

/// The random source of a single trial.
#[derive(Clone, Debug)]
pub struct State {
    random: Rng,
    sizes: Sizes,
}

/// An inclusive range of primitive values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Range<T>(pub(crate) T, pub(crate) T);

impl State {
    pub(crate) fn new(index: usize, count: usize, sizes: Sizes, seed: u64) -> Self {
        Self {
            random: Rng::with_seed(seed.wrapping_add(index as u64)),
            sizes: Sizes::from_ratio(index, count, sizes),
        }
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.sizes.start()
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.sizes.scale()
    }

    #[inline]
    pub fn sizes(&self) -> Sizes {
        self.sizes
    }

    /// The raw random source, unaffected by the size.
    #[inline]
    pub(crate) fn random(&mut self) -> &mut Rng {
        &mut self.random
    }

    /// Replaces the current sizes and returns the previous ones.
    #[inline]
    pub(crate) fn resize(&mut self, sizes: Sizes) -> Sizes {
        core::mem::replace(&mut self.sizes, sizes)
    }

    #[inline]
    pub fn bool(&mut self) -> bool {
        self.random.bool()
    }

    #[inline]
    pub fn char<R: Into<Range<char>>>(&mut self, range: R) -> char {
        let Range(start, end) = range.into();
        let value = self.u32(Range(start as u32, end as u32));
        char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl<T: Copy> Range<T> {
    #[inline]
    pub fn start(&self) -> T {
        self.0
    }

    #[inline]
    pub fn end(&self) -> T {
        self.1
    }
}

pub(crate) fn seed() -> u64 {
    fastrand::u64(..)
}

macro_rules! range {
    ($name: ident, $range: ty, $up: expr, $down: expr) => {
        impl From<$range> for Range<$name> {
            fn from(value: $range) -> Self {
                let mut start = match value.start_bound() {
                    Bound::Included(&bound) => (bound, false),
                    Bound::Excluded(&bound) => (bound, true),
                    Bound::Unbounded => ($name::MIN, false),
                };
                let mut end = match value.end_bound() {
                    Bound::Included(&bound) => (bound, false),
                    Bound::Excluded(&bound) => (bound, true),
                    Bound::Unbounded => ($name::MAX, false),
                };
                if start.0 == end.0 {
                    return Self(start.0, end.0);
                }
                if start.0 > end.0 {
                    (start, end) = (end, start);
                }
                if start.1 {
                    start.0 = $up(start.0);
                }
                if end.1 {
                    end.0 = $down(end.0);
                }
                if start.0 > end.0 {
                    Self(start.0, start.0)
                } else {
                    Self(start.0, end.0)
                }
            }
        }
    };
}

macro_rules! ranges {
    ($name: ident, $up: expr, $down: expr) => {
        impl From<$name> for Range<$name> {
            fn from(value: $name) -> Self {
                Self(value, value)
            }
        }

        range!($name, ops::Range<$name>, $up, $down);
        range!($name, ops::RangeTo<$name>, $up, $down);
        range!($name, ops::RangeInclusive<$name>, $up, $down);
        range!($name, ops::RangeToInclusive<$name>, $up, $down);
        range!($name, ops::RangeFrom<$name>, $up, $down);
        range!($name, ops::RangeFull, $up, $down);
    };
}

macro_rules! integer {
    ($integer: ident, $positive: ident) => {
        ranges!($integer, |value| $integer::saturating_add(value, 1), |value| $integer::saturating_sub(value, 1));

        impl State {
            #[inline]
            #[allow(unused_comparisons)]
            pub fn $integer<R: Into<Range<$integer>>>(&mut self, range: R) -> $integer {
                #[inline]
                const fn divide(left: $positive, right: $positive) -> $positive {
                    let d = left / right;
                    let r = left % right;
                    if r > 0 {
                        d + 1
                    } else {
                        d
                    }
                }

                #[inline]
                fn reach(range: $positive, size: f64, scale: f64) -> $positive {
                    if range == 0 || size <= 0.0 {
                        0
                    } else if size >= 1.0 {
                        range
                    } else {
                        // Keeps large ranges (such as `u64`) from rushing into huge values as
                        // soon as `size > 0`.
                        let log = $positive::BITS - 1 - range.leading_zeros();
                        let power = size.powf(log as f64 / scale).recip();
                        divide(range, power as _)
                    }
                }

                let Range(start, end) = range.into();
                if start == end {
                    return start;
                }
                let range = reach($positive::wrapping_sub(end as _, start as _), self.size(), self.scale());
                let value = self.random.$positive(0..=range) as $integer;
                if start >= 0 {
                    start + value
                } else if end <= 0 {
                    end - value
                } else {
                    // Centers the range around zero as much as possible.
                    let center = (range / 2) as $integer;
                    let shift = (start + center).max(0) + (end - center).min(0);
                    value.wrapping_add(shift).wrapping_sub(center)
                }
            }
        }
    };
    ($([$integer: ident, $positive: ident]),*) => {
        $(integer!($integer, $positive);)*
    }
}

macro_rules! floating {
    ($number: ident) => {
        ranges!($number, |value: $number| value.nudge(1.0), |value: $number| value.nudge(-1.0));

        impl State {
            #[inline]
            pub fn $number<R: Into<Range<$number>>>(&mut self, range: R) -> $number {
                #[inline]
                fn reach(range: $number, size: f64, scale: f64) -> $number {
                    if range == 0.0 || size <= 0.0 {
                        0.0
                    } else if size >= 1.0 {
                        range
                    } else {
                        let log = range.abs().log2() as f64;
                        let power = size.powf(log / scale);
                        range * power as $number
                    }
                }

                let Range(start, end) = range.into();
                assert!(start.is_finite() && end.is_finite());
                if start == end {
                    return start;
                }

                let size = self.size();
                let scale = self.scale();
                let value = if start >= 0.0 {
                    start + self.random.$number() * reach(end - start, size, scale)
                } else if end <= 0.0 {
                    end - self.random.$number() * reach(end - start, size, scale)
                } else {
                    // Chooses either the positive or negative side based on the ratio between the 2.
                    let (small, big) = if -start < end { (start, end) } else { (end, start) };
                    let ratio = (small / big).abs().clamp(1e-3, 1e3);
                    let random = self.random.$number() * (1.0 + ratio);
                    if random <= 1.0 {
                        random * reach(big, size, scale)
                    } else {
                        (random - 1.0) / ratio * reach(small, size, scale)
                    }
                };
                value.clamp(start, end)
            }
        }
    };
    ($($number: ident),*) => {
        $(floating!($number);)*
    }
}

ranges!(
    char,
    |value: char| char::from_u32(u32::saturating_add(value as _, 1))
        .unwrap_or(char::REPLACEMENT_CHARACTER),
    |value: char| char::from_u32(u32::saturating_sub(value as _, 1))
        .unwrap_or(char::REPLACEMENT_CHARACTER)
);

integer!(
    [u8, u8],
    [u16, u16],
    [u32, u32],
    [u64, u64],
    [u128, u128],
    [usize, usize],
    [i8, u8],
    [i16, u16],
    [i32, u32],
    [i64, u64],
    [i128, u128],
    [isize, usize]
);

floating!(f32, f64);

impl Sizes {
    pub(crate) const SCALE: f64 = 6.0;

    pub fn new(start: f64, end: f64, scale: f64) -> Self {
        let end = if end.is_nan() { 1.0 } else { end.clamp(0.0, 1.0) };
        let start = if start.is_nan() { 0.0 } else { start.clamp(0.0, end) };
        let scale = if scale.is_nan() { Self::SCALE } else { scale.max(1.0) };
        Self {
            range: Range(start, end),
            scale,
        }
    }

    /// Computes the size of the trial `index` out of `count`.
    pub(crate) fn from_ratio(index: usize, count: usize, sizes: Self) -> Self {
        let (start, end) = (sizes.start(), sizes.end());
        if count <= 1 {
            Self::new(end, end, sizes.scale())
        } else {
            // Ensures that the last 20% of trials are fully sized.
            let ratio = index as f64 / count as f64 * 1.25;
            let size = (start + ratio * (end - start)).clamp(0.0, end);
            Self::new(size, end, sizes.scale())
        }
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.range.0
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.range.1
    }
}

impl Default for Sizes {
    fn default() -> Self {
        Self::new(0.0, 1.0, Self::SCALE)
    }
}

impl<R: Into<Range<f64>>> From<R> for Sizes {
    fn from(value: R) -> Self {
        let range = value.into();
        Self::new(range.start(), range.end(), Self::SCALE)
    }
}
