pub mod fixtures;
pub mod utils;

pub use fixtures::{FixtureLoader, NormalizeCase};
pub use utils::*;

/// Test configuration constants
pub mod constants {
    /// Fixture directory of this crate
    pub const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

    /// Suffix of normalizer input fixtures
    pub const INPUT_SUFFIX: &str = ".input.json";

    /// Suffix of the expected output paired with an input fixture
    pub const EXPECTED_SUFFIX: &str = ".expected.json";
}

/// Initialize tracing for tests
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
