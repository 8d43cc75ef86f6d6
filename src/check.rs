use crate::{
    arities,
    generate::{FullGenerate, Generate},
    prove::Prove,
    state::{self, Sizes, State},
};
use core::fmt;
use tracing::{debug, trace, warn};

/// Number of trials of a property when none is specified.
pub const ATTEMPTS: isize = 1000;

/// A list of 1 to 6 generators, sampled in order, that feed the values of a property.
///
/// Implemented for tuples of generators. The property receives the tuple of their values, so
/// `(integer(), string())` checks properties of `(i32, String)`, and a single generator is
/// written as a 1-tuple: `(integer(),)`.
pub trait Arguments {
    /// The tuple of values produced for one trial. A copy is kept while the property consumes
    /// the other, so that a counterexample is reported exactly as it was sampled.
    type Values: Clone + fmt::Debug;
    /// The number of generators.
    const ARITY: usize;
    /// Draws one value from each generator, from first to last.
    fn draw(&self, state: &mut State) -> Self::Values;
    /// Renders each value of a trial on its own line, in generator order.
    fn render(values: &Self::Values) -> Vec<String>;
}

/// Configuration of a property run.
#[derive(Clone, Debug)]
pub struct Checker {
    /// Number of trials to run. Must be positive.
    /// Defaults to `1000`.
    pub attempts: isize,
    /// Seed from which the random state of every trial is derived.
    /// Defaults to a random value, or `PROPCHECK_SEED` when set.
    pub seed: u64,
    /// Range of sizes that will be gradually traversed over the trials.
    /// Defaults to `0.0..=1.0`, or `PROPCHECK_SIZE` when set.
    pub sizes: Sizes,
}

/// The counterexample of a falsified property.
#[derive(Clone, Debug, PartialEq)]
pub struct Failure<T> {
    values: T,
    lines: Vec<String>,
    attempts: usize,
    seed: u64,
}

/// An error produced by a property run.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error<T: fmt::Debug> {
    /// The number of attempts is zero or negative. No trial was run.
    #[error("Attempts should be a positive number")]
    Attempts(isize),
    /// A trial produced values for which the property does not have the expected outcome.
    #[error("{0}")]
    Falsified(Failure<T>),
}

impl Checker {
    pub fn new(attempts: isize) -> Self {
        let mut checker = Self {
            attempts,
            seed: state::seed(),
            sizes: Sizes::default(),
        };
        environment::update(&mut checker);
        checker
    }

    /// Checks that `property` holds for the values of `generators` on every trial.
    ///
    /// Stops at the first trial for which `property` is disproved and returns its values along
    /// with the number of attempts it took, the failing one included.
    pub fn for_all<G: Arguments, P: Prove, F: FnMut(G::Values) -> P>(
        &self,
        generators: G,
        mut property: F,
    ) -> Result<(), Error<G::Values>> {
        self.run(&generators, |values| property(values).prove().is_ok())
    }

    /// Checks that `property` is disproved for the values of `generators` on every trial.
    ///
    /// Stops at the first trial for which `property` holds.
    pub fn for_none<G: Arguments, P: Prove, F: FnMut(G::Values) -> P>(
        &self,
        generators: G,
        mut property: F,
    ) -> Result<(), Error<G::Values>> {
        self.run(&generators, |values| property(values).prove().is_err())
    }

    /// Same as [`Checker::for_all`] with the generators resolved from the declared type of the
    /// property's values (see [`FullGenerate`]).
    pub fn for_all_inferred<T: FullGenerate + fmt::Debug, P: Prove, F: FnMut(T) -> P>(
        &self,
        property: F,
    ) -> Result<(), Error<T>>
    where
        T::Generator: Arguments<Values = T>,
    {
        self.for_all(T::generator(), property)
    }

    /// Same as [`Checker::for_none`] with the generators resolved from the declared type of the
    /// property's values (see [`FullGenerate`]).
    pub fn for_none_inferred<T: FullGenerate + fmt::Debug, P: Prove, F: FnMut(T) -> P>(
        &self,
        property: F,
    ) -> Result<(), Error<T>>
    where
        T::Generator: Arguments<Values = T>,
    {
        self.for_none(T::generator(), property)
    }

    fn run<G: Arguments, F: FnMut(G::Values) -> bool>(
        &self,
        generators: &G,
        mut expected: F,
    ) -> Result<(), Error<G::Values>> {
        let count = match usize::try_from(self.attempts) {
            Ok(count) if count > 0 => count,
            _ => {
                warn!(attempts = self.attempts, "rejected a non-positive number of attempts");
                return Err(Error::Attempts(self.attempts));
            }
        };

        debug!(attempts = count, arity = G::ARITY, seed = self.seed, "checking property");
        for index in 0..count {
            let mut state = State::new(index, count, self.sizes, self.seed);
            trace!(attempt = index + 1, size = state.size(), "running trial");
            let values = generators.draw(&mut state);
            if expected(values.clone()) {
                continue;
            }

            let failure = Failure {
                lines: G::render(&values),
                values,
                attempts: index + 1,
                seed: self.seed,
            };
            debug!(attempts = failure.attempts, seed = self.seed, "property falsified");
            return Err(Error::Falsified(failure));
        }
        debug!(attempts = count, "property holds");
        Ok(())
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(ATTEMPTS)
    }
}

impl<T> Failure<T> {
    /// The values of the falsifying trial, in generator order.
    pub fn values(&self) -> &T {
        &self.values
    }

    pub fn into_values(self) -> T {
        self.values
    }

    /// The `Debug` rendering of each value.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The number of trials run, the falsifying one included.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// The seed of the run, from which the falsifying trial can be reproduced.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<T> fmt::Display for Failure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Property failed for")?;
        for line in self.lines.iter() {
            writeln!(f, "{line}")?;
        }
        write!(f, "after {} attempts", self.attempts)
    }
}

impl<T: fmt::Debug> Error<T> {
    pub fn failure(&self) -> Option<&Failure<T>> {
        match self {
            Error::Attempts(_) => None,
            Error::Falsified(failure) => Some(failure),
        }
    }
}

macro_rules! arguments {
    ($n:ident, $c:tt $(,$p:ident, $t:ident, $i:tt)*) => {
        impl<$($t: Generate,)*> Arguments for ($($t,)*)
        where
            $($t::Item: Clone + fmt::Debug,)*
        {
            type Values = ($($t::Item,)*);
            const ARITY: usize = $c;

            fn draw(&self, state: &mut State) -> Self::Values {
                Generate::generate(self, state)
            }

            fn render(values: &Self::Values) -> Vec<String> {
                vec![$(format!("{:?}", values.$i),)*]
            }
        }
    };
}

arities!(arguments);

#[doc(hidden)]
pub mod environment {
    use super::Checker;
    use crate::state::Sizes;
    use std::{env, str::FromStr};

    pub fn seed() -> Option<u64> {
        parse("PROPCHECK_SEED")
    }

    pub fn size() -> Option<f64> {
        parse("PROPCHECK_SIZE")
    }

    pub fn update(checker: &mut Checker) {
        if let Some(value) = seed() {
            checker.seed = value;
        }
        if let Some(value) = size() {
            checker.sizes = Sizes::from(value..=value);
        }
    }

    fn parse<T: FromStr>(key: &str) -> Option<T> {
        match env::var(key) {
            Ok(value) => value.trim().parse().ok(),
            Err(_) => None,
        }
    }
}
