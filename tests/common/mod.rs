pub use propcheck::{boxed::Boxed, state::State, *};
pub use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::{error, result};
use tracing_subscriber::filter::LevelFilter;

pub type Result = result::Result<(), Box<dyn error::Error>>;
pub const COUNT: usize = 1000;
pub const INVALID: &str = "Attempts should be a positive number";

/// Routes the runner's events to the test output.
pub fn trace() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::TRACE)
        .try_init();
}
