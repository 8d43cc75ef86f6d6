use crate::{
    generate::{Generate, State},
    state::Sizes,
    RETRIES,
};

/// Keeps the values of a generator that satisfy a predicate; see [`Generate::filter`].
#[derive(Clone, Debug, Default)]
pub struct Filter<G: ?Sized, F> {
    filter: F,
    generator: G,
}

impl<G: Generate, F: Fn(&G::Item) -> bool> Filter<G, F> {
    pub const fn new(generator: G, filter: F) -> Self {
        Self { generator, filter }
    }
}

impl<G: Generate + ?Sized, F: Fn(&G::Item) -> bool> Generate for Filter<G, F> {
    type Item = G::Item;

    fn generate(&self, state: &mut State) -> Self::Item {
        let sizes = state.sizes();
        let mut retry = 0usize;
        let item = loop {
            // Retries gradually widen the size towards its end, so a filter that rejects small
            // values is eventually satisfied.
            let ratio = (retry as f64 / RETRIES as f64).min(1.0);
            let size = sizes.start() + ratio * (sizes.end() - sizes.start());
            state.resize(Sizes::new(size, sizes.end(), sizes.scale()));
            let item = self.generator.generate(state);
            if (self.filter)(&item) {
                break item;
            }
            retry = retry.saturating_add(1);
        };
        state.resize(sizes);
        item
    }
}
