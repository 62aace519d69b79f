//! Random string generation.

use rand::RngExt;
use rand::distr::Alphanumeric;

/// Returns a uniformly random alphanumeric string of the given length.
pub fn random_string(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
