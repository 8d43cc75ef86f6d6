use crate::{
    generate::{FullGenerate, Generate, State},
    state::Range,
};
use core::{marker::PhantomData, ops};

/// The default generator of a primitive type, covering its whole domain.
///
/// Most values are drawn from the full range of the type (bounded by the current size), and a
/// small fraction are special values (such as `0`, `MIN` and `MAX` for numbers).
#[derive(Debug)]
pub struct Full<T: ?Sized>(PhantomData<T>);

/// Odds out of 256 that a full generator draws a regular value rather than a special one.
const REGULAR: u8 = 250;

impl<T: ?Sized> Full<T> {
    pub(crate) const NEW: Self = Self(PhantomData);
}

impl<T: ?Sized> Clone for Full<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Full<T> {}

fn special<T: Copy>(state: &mut State, specials: &[T]) -> T {
    specials[state.random().usize(..specials.len())]
}

macro_rules! full {
    ($t:ty) => {
        impl FullGenerate for $t {
            type Generator = Full<$t>;
            type Item = $t;

            fn generator() -> Self::Generator {
                Full::<$t>::NEW
            }
        }
    };
}

macro_rules! range {
    ($t:ident, $r:ty) => {
        impl Generate for $r {
            type Item = $t;

            fn generate(&self, state: &mut State) -> Self::Item {
                state.$t(self.clone())
            }
        }
    };
}

macro_rules! ranges {
    ($t:ident) => {
        impl Generate for Range<$t> {
            type Item = $t;

            fn generate(&self, state: &mut State) -> Self::Item {
                state.$t(*self)
            }
        }

        range!($t, ops::Range<$t>);
        range!($t, ops::RangeInclusive<$t>);
        range!($t, ops::RangeFrom<$t>);
        range!($t, ops::RangeTo<$t>);
        range!($t, ops::RangeToInclusive<$t>);
    };
}

impl Generate for Full<bool> {
    type Item = bool;

    fn generate(&self, state: &mut State) -> Self::Item {
        state.bool()
    }
}

const CHARACTERS: [char; 15] = [
    '\\',
    '\x0B',
    '\x1B',
    '\x7F',
    '\u{0000}',
    '\u{D7FF}',
    '\u{E000}',
    '\u{FEFF}',
    '\u{202E}',
    '¥',
    'Ѩ',
    'Ⱥ',
    '🕴',
    char::MAX,
    char::REPLACEMENT_CHARACTER,
];

impl Generate for Full<char> {
    type Item = char;

    fn generate(&self, state: &mut State) -> Self::Item {
        match state.random().u8(..) {
            0..REGULAR => state.char(..),
            REGULAR.. => special(state, &CHARACTERS),
        }
    }
}

macro_rules! integer {
    ($t:ident) => {
        impl Generate for Full<$t> {
            type Item = $t;

            fn generate(&self, state: &mut State) -> Self::Item {
                match state.random().u8(..) {
                    0..REGULAR => state.$t(..),
                    REGULAR.. => special(state, &[0 as $t, $t::MIN, $t::MAX]),
                }
            }
        }

        full!($t);
        ranges!($t);
    };
    ($($ts:ident),*) => { $(integer!($ts);)* };
}

// Only finite values are produced, so that ordering and equality behave as expected in
// properties.
macro_rules! floating {
    ($t:ident) => {
        impl Generate for Full<$t> {
            type Item = $t;

            fn generate(&self, state: &mut State) -> Self::Item {
                match state.random().u8(..) {
                    0..90 => state.$t(..),
                    90..180 => state.$t(-1 as $t / $t::EPSILON..=1 as $t / $t::EPSILON),
                    180..REGULAR => state.$t(-1 as $t..=1 as $t),
                    REGULAR.. => special(
                        state,
                        &[0 as $t, $t::MIN, $t::MAX, $t::EPSILON, -$t::EPSILON, $t::MIN_POSITIVE],
                    ),
                }
            }
        }

        full!($t);
        ranges!($t);
    };
    ($($ts:ident),*) => { $(floating!($ts);)* };
}

full!(bool);
full!(char);
ranges!(char);
integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
floating!(f32, f64);
