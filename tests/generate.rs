pub mod common;
use common::*;

#[test]
fn same_always_yields_its_value() -> Result {
    for_all((same(42), same("constant")), |(a, b)| a == 42 && b == "constant")?;
    Ok(())
}

#[test]
fn with_calls_its_function() -> Result {
    for_all((with(|| vec![1, 2, 3]),), |(value,)| value == [1, 2, 3])?;
    Ok(())
}

#[test]
fn map_transforms_values() -> Result {
    let even = integer().map(|value| value.wrapping_mul(2));
    for_all((even,), |(value,)| value % 2 == 0)?;
    let length = string().map(|text| text.len());
    for_all((length,), |(value,)| value <= 256 * 4)?;
    Ok(())
}

#[test]
fn filter_retries_until_accepted() -> Result {
    let odd = integer().filter(|value| value % 2 != 0);
    let mut count = 0;
    for_all((odd,), |(value,)| {
        count += 1;
        value % 2 != 0
    })?;
    assert_eq!(count, COUNT);

    let long = string().filter(|text| text.chars().count() >= 3);
    for_all((long,), |(text,)| text.chars().count() >= 3)?;
    Ok(())
}

#[test]
fn boxed_generators_can_be_chosen_at_runtime() -> Result {
    fn choose(small: bool) -> Boxed<i32> {
        if small {
            (0..10i32).boxed()
        } else {
            same(1000).boxed()
        }
    }

    for_all((choose(true), choose(false)), |(a, b)| a < 10 && b == 1000)?;
    Ok(())
}

#[test]
fn options_are_both_some_and_none() {
    let values = resolve::<Option<bool>>().samples(COUNT).collect::<HashSet<_>>();
    assert!(values.contains(&None));
    assert!(values.contains(&Some(true)));
    assert!(values.contains(&Some(false)));
}

#[test]
fn booleans_are_both_true_and_false() {
    let values = boolean().samples(100).collect::<HashSet<_>>();
    assert_eq!(values.len(), 2);
}

#[test]
fn resolution_is_independent_per_slot() {
    let mut sampler = resolve::<(i64, i64)>().sampler();
    sampler.seed = 7;
    let different = sampler.samples().filter(|(a, b)| a != b).count();
    assert!(different > 0);
}

#[test]
fn samples_are_exact_and_reproducible() {
    let mut sampler = resolve::<String>().sampler();
    sampler.seed = 99;
    sampler.count = 25;
    let samples = sampler.clone().samples();
    assert_eq!(samples.len(), 25);
    assert_eq!(
        samples.collect::<Vec<_>>(),
        sampler.samples().collect::<Vec<_>>()
    );
    assert_eq!(integer().samples(12).count(), 12);
}

#[test]
fn full_size_sample_is_in_range() {
    for _ in 0..100 {
        let value = (10..20u8).sample(1.0);
        assert!((10..20).contains(&value));
    }
}

#[test]
fn constant_ranges_yield_their_bound() {
    let generator = (boolean(), 5..=5u8);
    let mut sampler = generator.sampler();
    sampler.count = 3;
    for (_, value) in sampler.samples() {
        assert_eq!(value, 5);
    }
}
