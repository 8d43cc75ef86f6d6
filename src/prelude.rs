use crate::{
    check::{Arguments, Checker, Error},
    generate::{FullGenerate, Generate},
    primitive::Full,
    prove::Prove,
    same::Same,
};
use core::{fmt, hash::Hash, ops::RangeFrom, ops::RangeToInclusive};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Resolves the default generator of `T`.
pub fn resolve<T: FullGenerate>() -> T::Generator {
    T::generator()
}

/// Always yields a clone of `value`.
pub const fn same<T>(value: T) -> Same<T> {
    Same(value)
}

/// Yields the result of a new call to `generator` on every draw.
pub fn with<T, F: Fn() -> T>(generator: F) -> impl Generate<Item = T> {
    ().map(move |_| generator())
}

/// Any value of the primitive number `T`.
pub fn number<T>() -> Full<T>
where
    Full<T>: Generate<Item = T>,
{
    Full::NEW
}

/// Values of `T` greater than or equal to zero.
pub fn positive<T: Default>() -> RangeFrom<T>
where
    RangeFrom<T>: Generate<Item = T>,
{
    T::default()..
}

/// Values of `T` lower than or equal to zero.
pub fn negative<T: Default>() -> RangeToInclusive<T>
where
    RangeToInclusive<T>: Generate<Item = T>,
{
    ..=T::default()
}

/// `true` or `false`.
pub fn boolean() -> Full<bool> {
    Full::NEW
}

/// Any `i32`, including negative numbers and zero.
pub fn integer() -> Full<i32> {
    Full::NEW
}

/// Any `i64`, including negative numbers and zero.
pub fn long() -> Full<i64> {
    Full::NEW
}

/// Any finite `f32`.
pub fn float() -> Full<f32> {
    Full::NEW
}

/// Any finite `f64`.
pub fn double() -> Full<f64> {
    Full::NEW
}

/// Any `char`, with occasional unusual characters.
pub fn character() -> Full<char> {
    Full::NEW
}

/// Strings of variable length and arbitrary characters.
pub fn string() -> impl Generate<Item = String> {
    String::generator()
}

/// `i32` values strictly greater than zero.
pub fn positive_integers() -> impl Generate<Item = i32> {
    integer().filter(|&value| value > 0)
}

/// An ASCII letter, lowercase or uppercase.
pub fn letter() -> impl Generate<Item = char> {
    // Ranges are also iterators, hence the explicit trait.
    Generate::map(0u8..52, |index| match index {
        0..26 => (b'a' + index) as char,
        _ => (b'A' + index - 26) as char,
    })
}

/// An ASCII digit.
pub fn digit() -> impl Generate<Item = char> {
    '0'..='9'
}

/// Any ASCII character.
pub fn ascii() -> impl Generate<Item = char> {
    '\0'..='\x7F'
}

/// Vectors of a size-dependent length.
pub fn vector<G: Generate>(generator: G) -> impl Generate<Item = Vec<G::Item>> {
    generator.collect()
}

/// Sets of unique items; duplicates collapse.
pub fn set<G: Generate>(generator: G) -> impl Generate<Item = HashSet<G::Item>>
where
    G::Item: Eq + Hash,
{
    generator.collect()
}

/// Ordered sets of unique items; duplicates collapse.
pub fn ordered_set<G: Generate>(generator: G) -> impl Generate<Item = BTreeSet<G::Item>>
where
    G::Item: Ord,
{
    generator.collect()
}

/// Maps with unique keys; a key generated twice keeps its last value.
pub fn map<K: Generate, V: Generate>(
    keys: K,
    values: V,
) -> impl Generate<Item = HashMap<K::Item, V::Item>>
where
    K::Item: Eq + Hash,
{
    (keys, values).collect()
}

/// Maps with unique keys; a key generated twice keeps its last value.
pub fn ordered_map<K: Generate, V: Generate>(
    keys: K,
    values: V,
) -> impl Generate<Item = BTreeMap<K::Item, V::Item>>
where
    K::Item: Ord,
{
    (keys, values).collect()
}

/// Pairs of values, the first drawn before the second.
pub fn pair<A: Generate, B: Generate>(first: A, second: B) -> (A, B) {
    (first, second)
}

/// Triples of values, drawn in order.
pub fn triple<A: Generate, B: Generate, C: Generate>(first: A, second: B, third: C) -> (A, B, C) {
    (first, second, third)
}

/// A [`Checker`] that runs `attempts` trials.
pub fn attempts(attempts: isize) -> Checker {
    Checker::new(attempts)
}

/// Checks that `property` holds for the values of `generators` on 1000 trials.
/// See [`Checker::for_all`].
pub fn for_all<G: Arguments, P: Prove, F: FnMut(G::Values) -> P>(
    generators: G,
    property: F,
) -> Result<(), Error<G::Values>> {
    Checker::default().for_all(generators, property)
}

/// Checks that `property` is disproved for the values of `generators` on 1000 trials.
/// See [`Checker::for_none`].
pub fn for_none<G: Arguments, P: Prove, F: FnMut(G::Values) -> P>(
    generators: G,
    property: F,
) -> Result<(), Error<G::Values>> {
    Checker::default().for_none(generators, property)
}

/// See [`Checker::for_all_inferred`].
pub fn for_all_inferred<T: FullGenerate + fmt::Debug, P: Prove, F: FnMut(T) -> P>(
    property: F,
) -> Result<(), Error<T>>
where
    T::Generator: Arguments<Values = T>,
{
    Checker::default().for_all_inferred(property)
}

/// See [`Checker::for_none_inferred`].
pub fn for_none_inferred<T: FullGenerate + fmt::Debug, P: Prove, F: FnMut(T) -> P>(
    property: F,
) -> Result<(), Error<T>>
where
    T::Generator: Arguments<Values = T>,
{
    Checker::default().for_none_inferred(property)
}
