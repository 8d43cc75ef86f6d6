//! A QuickCheck-inspired property runner.
//!
//! A property is a predicate over values drawn from generators. [`for_all`] samples the
//! generators a number of times (1000 by default) and reports the first counterexample along
//! with the number of attempts it took; [`for_none`] does the same for a predicate that must
//! never hold.
//!
//! ```
//! use propcheck::*;
//!
//! // Explicit generators, given as a tuple of 1 to 6 generators.
//! for_all((string(), string()), |(a, b)| (a.clone() + &b).starts_with(&a)).unwrap();
//!
//! // Generators resolved from the declared types of the values.
//! attempts(100)
//!     .for_all_inferred(|(a, b): (String, String)| (a.clone() + &b).len() == a.len() + b.len())
//!     .unwrap();
//!
//! // A falsified property reports its counterexample.
//! let error = for_all((integer(),), |(_,)| false).unwrap_err();
//! assert_eq!(error.failure().unwrap().attempts(), 1);
//! ```
#![forbid(unsafe_code)]

pub mod boxed;
pub mod check;
pub mod collect;
pub mod filter;
pub mod generate;
pub mod map;
mod prelude;
pub mod primitive;
pub mod prove;
pub mod same;
pub mod sample;
pub mod standard;
pub mod state;
mod utility;

pub use check::{Arguments, Checker, Error, Failure, ATTEMPTS};
pub use generate::{FullGenerate, Generate};
pub use prelude::*;
pub use prove::Prove;
pub use sample::Sample;

const SAMPLES: usize = 128;
const COLLECTS: usize = 256;
const RETRIES: usize = 256;
