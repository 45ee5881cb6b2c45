//! Pseudo-random helpers
//!
//! Disposable identifiers and fixture values. Nothing here is suitable for
//! secrets: draws come from a `RandomSource`, which by default is the
//! thread-local generator from `rand`.

use crate::traits::RandomSource;
use serde::{Deserialize, Serialize};

/// Characters `random_string` draws from, blanks included
pub const CHARSET: &str = "ab cd efghi jklmnopqrst uvwxyz01234567 89";

pub const DEFAULT_MIN_LENGTH: usize = 12;
pub const DEFAULT_MAX_LENGTH: usize = 24;

/// Random source backed by `rand`'s thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_f64(&self) -> f64 {
        rand::random::<f64>()
    }
}

/// Length bounds passed to `random_string`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomStringOptions {
    pub min: usize,
    pub max: usize,
}

impl Default for RandomStringOptions {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

impl RandomStringOptions {
    /// Generates a string using these bounds and the default source
    pub fn generate(&self) -> String {
        random_string(self.min, self.max)
    }
}

/// Generates a random string from `CHARSET`
///
/// The length is `floor(r * (max - min + 1) + max)`, so with the defaults
/// (12, 24) it falls between 24 and 36 characters.
pub fn random_string(min: usize, max: usize) -> String {
    random_string_with(&ThreadRandomSource, min, max)
}

/// Same as `random_string` with an explicit random source
pub fn random_string_with(source: &impl RandomSource, min: usize, max: usize) -> String {
    let span = max as f64 - min as f64 + 1.0;
    let length = (source.next_f64() * span + max as f64).floor();
    let length = if length > 0.0 { length as usize } else { 0 };

    let charset = CHARSET.as_bytes();
    (0..length)
        .map(|_| {
            let index = (source.next_f64() * charset.len() as f64).floor() as usize;
            charset[index.min(charset.len() - 1)] as char
        })
        .collect()
}

/// Returns `true` half of the time
pub fn random_boolean() -> bool {
    random_boolean_with(&ThreadRandomSource)
}

/// Same as `random_boolean` with an explicit random source
pub fn random_boolean_with(source: &impl RandomSource) -> bool {
    source.next_f64() >= 0.5
}
