use crate::{
    generate::Generate,
    state::{self, Sizes, State},
    SAMPLES,
};
use core::{iter, ops};

/// Configures how values are drawn from a generator outside of a property run.
#[derive(Debug, Clone)]
pub struct Sampler<G: ?Sized> {
    /// Seed for the random number generator used to generate random primitives.
    /// Defaults to a random value.
    pub seed: u64,
    /// Range of sizes that will be gradually traversed while generating values.
    /// Defaults to `0.0..=1.0`.
    pub sizes: Sizes,
    /// Number of samples that will be generated.
    /// Defaults to `128`.
    pub count: usize,
    /// A generator that will provide the samples.
    pub generator: G,
}

/// An iterator over values drawn from a generator, each from its own [`State`].
#[derive(Debug, Clone)]
pub struct Samples<G: ?Sized> {
    indices: ops::Range<usize>,
    count: usize,
    sizes: Sizes,
    seed: u64,
    generator: G,
}

pub trait Sample: Generate {
    /// Provides a [`Sampler`] that allows to configure sampling settings and
    /// generate samples.
    fn sampler(self) -> Sampler<Self>
    where
        Self: Sized,
    {
        Sampler::new(self, state::seed())
    }

    /// Generates `count` random values that are progressively larger in size.
    /// For additional sampling settings, see [`Sample::sampler`].
    fn samples(self, count: usize) -> Samples<Self>
    where
        Self: Sized,
    {
        let mut sampler = self.sampler();
        sampler.count = count;
        sampler.samples()
    }

    /// Generates a random value of `size` (0.0..=1.0). For additional sampling
    /// settings, see [`Sample::sampler`].
    fn sample(&self, size: f64) -> Self::Item {
        Sampler::new(self, state::seed()).sample(size)
    }
}

impl<G: Generate + ?Sized> Sample for G {}

impl<G> Sampler<G> {
    pub(crate) fn new(generator: G, seed: u64) -> Self {
        Self {
            generator,
            seed,
            sizes: Sizes::default(),
            count: SAMPLES,
        }
    }
}

impl<G: Generate + ?Sized> Sampler<G> {
    pub fn sample(&self, size: f64) -> G::Item {
        let mut state = State::new(0, 1, Sizes::from(size), self.seed);
        self.generator.generate(&mut state)
    }
}

impl<G: Generate> Sampler<G> {
    pub fn samples(self) -> Samples<G> {
        Samples {
            indices: 0..self.count,
            count: self.count,
            sizes: self.sizes,
            seed: self.seed,
            generator: self.generator,
        }
    }
}

impl<G: Generate + ?Sized> Samples<G> {
    fn generate(&self, index: usize) -> G::Item {
        let mut state = State::new(index, self.count, self.sizes, self.seed);
        self.generator.generate(&mut state)
    }
}

impl<G: Generate> Iterator for Samples<G> {
    type Item = G::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        Some(self.generate(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }

    fn count(self) -> usize {
        self.indices.count()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let index = self.indices.nth(n)?;
        Some(self.generate(index))
    }
}

impl<G: Generate> DoubleEndedIterator for Samples<G> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.indices.next_back()?;
        Some(self.generate(index))
    }
}

impl<G: Generate> ExactSizeIterator for Samples<G> {
    fn len(&self) -> usize {
        self.indices.len()
    }
}

impl<G: Generate> iter::FusedIterator for Samples<G> {}
