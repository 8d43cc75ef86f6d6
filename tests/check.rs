pub mod common;
use common::*;
use std::cell::Cell;

#[test]
fn runs_all_attempts_by_default() -> Result {
    trace();
    let mut count = 0;
    for_all((string(), string()), |(a, b)| {
        count += 1;
        (a.clone() + &b).starts_with(&a)
    })?;
    assert_eq!(count, COUNT);
    Ok(())
}

#[test]
fn concatenation_ends_with_its_suffix() -> Result {
    let mut count = 0;
    for_all((string(), string()), |(a, b)| {
        count += 1;
        (a + &b).ends_with(&b)
    })?;
    assert_eq!(count, COUNT);
    Ok(())
}

#[test]
fn concatenation_adds_lengths() -> Result {
    let mut count = 0;
    attempts(50).for_all((string(), string()), |(a, b)| {
        count += 1;
        (a.clone() + &b).len() == a.len() + b.len()
    })?;
    assert_eq!(count, 50);
    Ok(())
}

#[test]
fn reports_the_values_of_the_failing_attempt() {
    let mut count = 0;
    let mut captured = None;
    let error = attempts(20)
        .for_all((string(), string()), |(a, b)| {
            count += 1;
            if count == 4 {
                captured = Some((a, b));
                false
            } else {
                true
            }
        })
        .unwrap_err();

    let (a, b) = captured.unwrap();
    assert_eq!(count, 4);
    assert_eq!(
        error.to_string(),
        format!("Property failed for\n{a:?}\n{b:?}\nafter 4 attempts")
    );
    let failure = error.failure().unwrap();
    assert_eq!(failure.attempts(), 4);
    assert_eq!(failure.values(), &(a, b));
}

#[test]
fn reports_the_values_the_property_received() {
    let counter = Cell::new(0);
    let next = with(|| {
        counter.set(counter.get() + 1);
        counter.get()
    });
    let mut seen = None;
    let error = attempts(20)
        .for_all((next,), |(value,)| {
            seen = Some(value);
            value != 4
        })
        .unwrap_err();

    assert_eq!(seen, Some(4));
    assert_eq!(counter.get(), 4);
    assert_eq!(error.failure().unwrap().values(), &(4,));
    assert_eq!(error.to_string(), "Property failed for\n4\nafter 4 attempts");
}

#[test]
fn draws_once_per_trial() {
    let draws = Cell::new(0);
    let counted = integer().map(|value| {
        draws.set(draws.get() + 1);
        value
    });
    let mut count = 0;
    let error = attempts(50)
        .for_all((counted,), |_| {
            count += 1;
            count < 7
        })
        .unwrap_err();

    assert_eq!(error.failure().unwrap().attempts(), 7);
    assert_eq!(draws.get(), 7);
}

#[test]
fn stops_at_the_first_failure() {
    let mut count = 0;
    let error = for_all((integer(),), |_| {
        count += 1;
        count < 10
    })
    .unwrap_err();
    assert_eq!(count, 10);
    assert_eq!(error.failure().unwrap().attempts(), 10);
}

#[test]
fn fails_on_the_first_attempt() {
    let error = for_all((integer(),), |(_,)| false).unwrap_err();
    let failure = error.failure().unwrap();
    assert_eq!(failure.attempts(), 1);
    assert_eq!(
        error.to_string(),
        format!("Property failed for\n{:?}\nafter 1 attempts", failure.values().0)
    );
}

#[test]
fn reports_failures_of_three_generators() {
    let mut count = 0;
    let mut captured = None;
    let error = attempts(100)
        .for_all((integer(), boolean(), string()), |values| {
            count += 1;
            if count == 37 {
                captured = Some(values);
                false
            } else {
                true
            }
        })
        .unwrap_err();

    let (a, b, c) = captured.unwrap();
    assert_eq!(
        error.to_string(),
        format!("Property failed for\n{a:?}\n{b:?}\n{c:?}\nafter 37 attempts")
    );
}

#[test]
fn reports_failures_of_four_generators() {
    let mut count = 0;
    let mut captured = None;
    let error = attempts(100)
        .for_all((integer(), long(), character(), double()), |values| {
            count += 1;
            if count == 12 {
                captured = Some(values);
                false
            } else {
                true
            }
        })
        .unwrap_err();

    let (a, b, c, d) = captured.unwrap();
    assert_eq!(
        error.to_string(),
        format!("Property failed for\n{a:?}\n{b:?}\n{c:?}\n{d:?}\nafter 12 attempts")
    );
}

#[test]
fn reports_failures_of_six_generators() {
    let mut count = 0;
    let mut captured = None;
    let error = attempts(1000)
        .for_all(
            (integer(), string(), boolean(), double(), character(), long()),
            |values| {
                count += 1;
                if count == 999 {
                    captured = Some(values);
                    false
                } else {
                    true
                }
            },
        )
        .unwrap_err();

    let (a, b, c, d, e, f) = captured.unwrap();
    assert_eq!(
        error.to_string(),
        format!("Property failed for\n{a:?}\n{b:?}\n{c:?}\n{d:?}\n{e:?}\n{f:?}\nafter 999 attempts")
    );
    assert_eq!(error.failure().unwrap().lines().len(), 6);
}

#[test]
fn unit_outcome_always_holds() -> Result {
    let mut count = 0;
    attempts(10).for_all((integer(),), |_| count += 1)?;
    assert_eq!(count, 10);
    Ok(())
}

#[test]
fn result_outcome_fails_on_error() {
    let error = attempts(100)
        .for_all((positive_integers(),), |(value,)| {
            u8::try_from(value).map(|_| ())
        })
        .unwrap_err();
    let (value,) = error.failure().unwrap().values();
    assert!(*value > u8::MAX as i32);
}

#[test]
fn failure_is_reproduced_from_its_seed() {
    let mut checker = attempts(COUNT as isize);
    checker.seed = 123_456_789;
    let run = || {
        checker
            .for_all((integer(), string()), |(a, b)| a < 1000 || b.is_empty())
            .unwrap_err()
    };
    let first = run();
    let second = run();
    assert_eq!(first, second);
    assert_eq!(first.failure().unwrap().seed(), 123_456_789);
}

#[test]
fn first_attempt_is_the_smallest() {
    let mut first = None;
    let _ = attempts(10).for_all((0..100i32, string()), |values| {
        first.get_or_insert(values);
        true
    });
    assert_eq!(first, Some((0, String::new())));
}

mod none {
    use super::*;

    #[test]
    fn passes_when_never_proved() -> Result {
        let mut count = 0;
        for_none((string(), string()), |(a, b)| {
            count += 1;
            (a.clone() + &b).len() < a.len()
        })?;
        assert_eq!(count, COUNT);
        Ok(())
    }

    #[test]
    fn floats_are_never_nan() -> Result {
        for_none((boolean(), double()), |(_, value)| value.is_nan())?;
        Ok(())
    }

    #[test]
    fn fails_on_the_first_proof() {
        let mut count = 0;
        let mut captured = None;
        let error = for_none((integer(), boolean()), |values| {
            count += 1;
            if count == 21 {
                captured = Some(values);
                true
            } else {
                false
            }
        })
        .unwrap_err();

        let (a, b) = captured.unwrap();
        assert_eq!(
            error.to_string(),
            format!("Property failed for\n{a:?}\n{b:?}\nafter 21 attempts")
        );
    }

    #[test]
    fn unit_outcome_fails_immediately() {
        let error = for_none((boolean(),), |_| ()).unwrap_err();
        assert_eq!(error.failure().unwrap().attempts(), 1);
    }

    #[test]
    fn inferred_runs_all_attempts() -> Result {
        let mut count = 0;
        for_none_inferred(|(a, b): (bool, f64)| {
            count += 1;
            a && b.is_infinite()
        })?;
        assert_eq!(count, COUNT);
        Ok(())
    }
}
