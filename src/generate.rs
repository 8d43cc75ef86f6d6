pub use crate::state::State;
use crate::{
    boxed::Boxed, collect::Collect, filter::Filter, map::Map, state::Range, tuples, COLLECTS,
};
use core::iter::FromIterator;

/// Provides the default, parameterless generator of a type.
///
/// This is how generators are resolved implicitly: when a property only declares the types of
/// its values, each type's [`FullGenerate::generator`] is used to produce them. Containers and
/// tuples resolve their type parameters recursively, so `Vec<(String, bool)>` is resolved from
/// the generators of `String` and `bool`.
///
/// A type without an implementation is rejected at compile time.
pub trait FullGenerate {
    /// The type of the value that the generator produces.
    type Item;
    /// The concrete [`Generate`] type returned by `generator()`.
    type Generator: Generate<Item = Self::Item>;
    /// Creates the default generator for the type.
    fn generator() -> Self::Generator;
}

/// A producer of random values.
///
/// Each call to [`Generate::generate`] draws a fresh value from the given [`State`]. Values are
/// independent from previous calls and are not required to be distinct. Combinators such as
/// [`Generate::map`], [`Generate::filter`] and [`Generate::collect`] build new generators out
/// of existing ones.
#[must_use = "generators do nothing until used"]
pub trait Generate {
    /// The type of the value that this generator produces.
    type Item;

    /// Draws a value using the randomness of `state`.
    fn generate(&self, state: &mut State) -> Self::Item;

    /// Transforms the generated values with `map`.
    fn map<T, F: Fn(Self::Item) -> T>(self, map: F) -> Map<Self, F>
    where
        Self: Sized,
    {
        Map::new(self, map)
    }

    /// Keeps only the generated values that satisfy `filter`.
    ///
    /// The inner generator is sampled again until `filter` holds, without any bound on the number
    /// of retries. A `filter` that is rarely or never satisfied makes generation stall.
    fn filter<F: Fn(&Self::Item) -> bool>(self, filter: F) -> Filter<Self, F>
    where
        Self: Sized,
    {
        Filter::new(self, filter)
    }

    /// Collects a size-dependent number of generated values into `F`.
    ///
    /// Containers with unique keys (such as sets and maps) deduplicate the generated values, so
    /// they may end up with fewer items than the sampled count.
    fn collect<F: FromIterator<Self::Item>>(self) -> Collect<Self, Range<usize>, F>
    where
        Self: Sized,
    {
        self.collect_with(Range(0, COLLECTS))
    }

    /// Collects as many generated values as `count` produces into `F`.
    fn collect_with<C: Generate<Item = usize>, F: FromIterator<Self::Item>>(
        self,
        count: C,
    ) -> Collect<Self, C, F>
    where
        Self: Sized,
    {
        Collect::new(self, count)
    }

    /// Erases the type of the generator.
    fn boxed(self) -> Boxed<Self::Item>
    where
        Self: Sized + 'static,
    {
        Boxed::new(self)
    }
}

impl<G: Generate + ?Sized> Generate for &G {
    type Item = G::Item;

    fn generate(&self, state: &mut State) -> Self::Item {
        G::generate(self, state)
    }
}

impl<G: Generate + ?Sized> Generate for Box<G> {
    type Item = G::Item;

    fn generate(&self, state: &mut State) -> Self::Item {
        G::generate(self, state)
    }
}

macro_rules! tuple {
    ($n:ident, $c:tt $(,$p:ident, $t:ident, $i:tt)*) => {
        impl<$($t: FullGenerate,)*> FullGenerate for ($($t,)*) {
            type Generator = ($($t::Generator,)*);
            type Item = ($($t::Item,)*);

            #[allow(clippy::unused_unit)]
            fn generator() -> Self::Generator {
                ($($t::generator(),)*)
            }
        }

        impl<$($t: Generate,)*> Generate for ($($t,)*) {
            type Item = ($($t::Item,)*);

            // Fields are generated left to right.
            #[allow(clippy::unused_unit)]
            fn generate(&self, _state: &mut State) -> Self::Item {
                ($($t::generate(&self.$i, _state),)*)
            }
        }
    };
}

tuples!(tuple);
