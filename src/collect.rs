use crate::{
    generate::{FullGenerate, Generate, State},
    state::Range,
};
use core::{hash::Hash, marker::PhantomData};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    iter::FromIterator,
};

/// Collects the values of a generator into a container; see [`Generate::collect`].
///
/// A count is sampled first, then that many items are generated and gathered with
/// [`FromIterator`]. The container's own semantics decide what happens with duplicates.
#[derive(Debug)]
pub struct Collect<G: ?Sized, C, F: ?Sized> {
    _marker: PhantomData<F>,
    count: C,
    generator: G,
}

impl<G: Generate, C: Generate<Item = usize>, F: FromIterator<G::Item>> Collect<G, C, F> {
    pub const fn new(generator: G, count: C) -> Self {
        Self {
            generator,
            count,
            _marker: PhantomData,
        }
    }
}

impl<G: Clone, C: Clone, F> Clone for Collect<G, C, F> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            count: self.count.clone(),
            _marker: PhantomData,
        }
    }
}

impl<G: Generate + ?Sized, C: Generate<Item = usize>, F: FromIterator<G::Item>> Generate
    for Collect<G, C, F>
{
    type Item = F;

    fn generate(&self, state: &mut State) -> Self::Item {
        let count = self.count.generate(state);
        Iterator::map(0..count, |_| self.generator.generate(state)).collect()
    }
}

macro_rules! sequence {
    ($t:ident) => {
        impl<G: FullGenerate> FullGenerate for $t<G> {
            type Item = $t<G::Item>;
            type Generator = Collect<G::Generator, Range<usize>, Self::Item>;

            fn generator() -> Self::Generator {
                G::generator().collect()
            }
        }
    };
}

sequence!(Vec);
sequence!(VecDeque);

impl FullGenerate for String {
    type Item = Self;
    type Generator = Collect<<char as FullGenerate>::Generator, Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        char::generator().collect()
    }
}

impl<G: FullGenerate> FullGenerate for BTreeSet<G>
where
    G::Item: Ord,
{
    type Item = BTreeSet<G::Item>;
    type Generator = Collect<G::Generator, Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        G::generator().collect()
    }
}

impl<G: FullGenerate> FullGenerate for HashSet<G>
where
    G::Item: Eq + Hash,
{
    type Item = HashSet<G::Item>;
    type Generator = Collect<G::Generator, Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        G::generator().collect()
    }
}

impl<K: FullGenerate, V: FullGenerate> FullGenerate for BTreeMap<K, V>
where
    K::Item: Ord,
{
    type Item = BTreeMap<K::Item, V::Item>;
    type Generator = Collect<<(K, V) as FullGenerate>::Generator, Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        <(K, V)>::generator().collect()
    }
}

impl<K: FullGenerate, V: FullGenerate> FullGenerate for HashMap<K, V>
where
    K::Item: Eq + Hash,
{
    type Item = HashMap<K::Item, V::Item>;
    type Generator = Collect<<(K, V) as FullGenerate>::Generator, Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        <(K, V)>::generator().collect()
    }
}
