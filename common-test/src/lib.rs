mod recording_console;
mod seed;

pub use recording_console::RecordingConsole;
pub use seed::{get_seeded_rng, get_seeded_rng_from_scope, DEFAULT_TEST_SEED_ENV};
