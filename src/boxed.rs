use crate::generate::{Generate, State};
use core::fmt;

/// A generator with an erased type, produced by [`Generate::boxed`].
///
/// Useful to store generators of different types behind a single one, for example when a
/// function picks one of several generators at runtime.
pub struct Boxed<T> {
    inner: Box<dyn Generate<Item = T>>,
}

impl<T> Boxed<T> {
    pub(crate) fn new<G: Generate<Item = T> + 'static>(generator: G) -> Self {
        Self {
            inner: Box::new(generator),
        }
    }
}

impl<T> Generate for Boxed<T> {
    type Item = T;

    fn generate(&self, state: &mut State) -> Self::Item {
        self.inner.generate(state)
    }
}

impl<T> fmt::Debug for Boxed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boxed").finish_non_exhaustive()
    }
}
