use crate::generate::{FullGenerate, Generate, State};

pub mod option {
    use super::*;

    /// Generates `Some` value of the inner generator half of the time and `None` otherwise.
    #[derive(Clone, Debug)]
    pub struct Generator<G>(pub(crate) G);

    impl<G: FullGenerate> FullGenerate for Option<G> {
        type Generator = Generator<G::Generator>;
        type Item = Option<G::Item>;

        fn generator() -> Self::Generator {
            Generator(G::generator())
        }
    }

    impl<G: Generate> Generate for Generator<G> {
        type Item = Option<G::Item>;

        fn generate(&self, state: &mut State) -> Self::Item {
            if state.bool() {
                Some(self.0.generate(state))
            } else {
                None
            }
        }
    }
}
