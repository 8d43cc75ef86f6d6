pub mod common;
use common::*;

#[test]
fn strings_are_bounded() -> Result {
    let mut count = 0;
    for_all((string(),), |(text,)| {
        count += 1;
        text.chars().count() <= 256
    })?;
    assert_eq!(count, COUNT);
    Ok(())
}

#[test]
fn strings_start_empty() {
    let mut sampler = string().sampler();
    sampler.count = 10;
    assert_eq!(sampler.samples().next(), Some(String::new()));
}

#[test]
fn empty_string_is_a_neutral_element() -> Result {
    for_all_inferred(|(text,): (String,)| text.clone() + "" == text)?;
    Ok(())
}

#[test]
fn letters_digits_and_ascii() -> Result {
    for_all((letter(), digit(), ascii()), |(a, b, c)| {
        a.is_ascii_alphabetic() && b.is_ascii_digit() && c.is_ascii()
    })?;
    let letters = letter().samples(COUNT).collect::<HashSet<_>>();
    assert!(letters.iter().any(char::is_ascii_lowercase));
    assert!(letters.iter().any(char::is_ascii_uppercase));
    Ok(())
}

#[test]
fn words_are_made_of_letters() -> Result {
    let words = Generate::collect::<String>(letter());
    for_all((&words, &words), |(a, b)| {
        (a + &b).chars().all(|letter| letter.is_ascii_alphabetic())
    })?;
    Ok(())
}

#[test]
fn characters_are_valid() -> Result {
    for_all((character(),), |(value,)| char::from_u32(value as u32) == Some(value))?;
    for_all(('a'..='z',), |(value,)| value.is_ascii_lowercase())?;
    Ok(())
}
