use std::env;

use once_cell::sync::Lazy;
use rand::distributions::Uniform;
use rand::prelude::*;
use zipf::ZipfDistribution;

pub const OVERRIDE_SEED_VAR: &str = "OVERRIDE_SEED";

/// Set `OVERRIDE_SEED=<u64>` to reproduce a failing run.
static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = parse_override_seed(env::var(OVERRIDE_SEED_VAR).ok().as_deref())
        .unwrap_or_else(|| thread_rng().gen());

    println!("Seed: {seed}");
    seed
});

/// Seed requested through `OVERRIDE_SEED`, `None` if unset or not a `u64`.
pub fn parse_override_seed(value: Option<&str>) -> Option<u64> {
    value.and_then(|seed| seed.trim().parse::<u64>().ok())
}

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_seed_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seed_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_seed_rng();
    let dist: Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seed_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("valid zipf parameters");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn random_binary(len: usize) -> Vec<i32> {
    random_uniform(len, 0..=1)
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    let mut v = random(len);
    for chunk in v.chunks_mut(chunk_len(len, saw_count)) {
        chunk.sort_unstable();
    }

    v
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    let mut v = random(len);
    for chunk in v.chunks_mut(chunk_len(len, saw_count)) {
        chunk.sort_unstable_by(|a, b| b.cmp(a));
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let first_half = len / 2;
    v[..first_half].sort_unstable();
    v[first_half..].sort_unstable_by(|a, b| b.cmp(a));

    v
}

fn chunk_len(len: usize, saw_count: usize) -> usize {
    let saw_count = saw_count.max(1);
    ((len + saw_count - 1) / saw_count).max(1)
}
