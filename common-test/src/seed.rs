use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{Mutex, OnceLock},
};

use rand::{random, rngs::StdRng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "PATTERNS_TEST_SEED";

static SEEDS: OnceLock<Mutex<HashMap<&'static str, u64>>> = OnceLock::new();

/// Resolves the seed of a scope once: from the env var named after the scope, or at random.
/// The chosen seed is printed so that a failing run can be replayed.
fn resolve_seed(scope: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = SEEDS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .map_err(|e| e.to_string())?;

    let seed = *seeds.entry(scope).or_insert_with(|| {
        let seed = env::var(scope)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {seed} for {scope}");
        seed
    });
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(scope: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(resolve_seed(scope)?))
}
