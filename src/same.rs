use crate::generate::{Generate, State};

/// A generator that always produces a clone of the same value.
#[derive(Clone, Debug)]
pub struct Same<T: ?Sized>(pub(crate) T);

impl<T: Clone> Generate for Same<T> {
    type Item = T;

    fn generate(&self, _: &mut State) -> Self::Item {
        self.0.clone()
    }
}
