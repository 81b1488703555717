//! Password sampling, constraint validation, and the batch loop.

use zeroize::Zeroize;

use super::charset::{self, Category};
use crate::config::GenerationConfig;
use crate::rand::Source;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 100;

/// Attempts allowed per requested password before the batch gives up.
const ATTEMPTS_PER_PASSWORD: usize = 100;

/// Draw one candidate of `length` characters from `pool`.
///
/// Each character is an independent draw; the index is the raw 32-bit
/// value reduced modulo the pool size. The residual bias of that
/// reduction is negligible for the pool sizes this tool produces.
/// An empty pool yields an empty string.
pub fn sample(pool: &[char], length: usize, rng: &mut dyn Source) -> String {
    if pool.is_empty() {
        return String::new();
    }
    (0..length)
        .map(|_| pool[rng.next_u32() as usize % pool.len()])
        .collect()
}

/// Check that `candidate` contains at least one character from each
/// enabled category's full alphabet.
///
/// The test runs against the unfiltered alphabets: custom includes never
/// satisfy a category, and excluding characters does not shrink what
/// counts as a match. Always true when the requirement is switched off.
pub fn satisfies_categories(candidate: &str, config: &GenerationConfig) -> bool {
    if !config.require_all_categories {
        return true;
    }
    Category::ALL.into_iter().all(|category| {
        !config.category_enabled(category)
            || candidate.chars().any(|c| category.alphabet().contains(c))
    })
}

/// Generate a batch of validated passwords.
///
/// Length and count are clamped to their hard bounds before sampling,
/// even for pre-validated callers. The loop stops once the batch is full
/// or the attempt budget runs out; a short or empty batch is a normal,
/// silent outcome. Rejected candidates are zeroized before being dropped.
pub fn generate_batch(config: &GenerationConfig, rng: &mut dyn Source) -> Vec<String> {
    let pool = charset::build(config);
    let length = config.length.clamp(MIN_LENGTH, MAX_LENGTH);
    let count = config.count.clamp(MIN_COUNT, MAX_COUNT);

    let mut batch = Vec::with_capacity(count);
    let mut attempts = 0;
    while batch.len() < count && attempts < count * ATTEMPTS_PER_PASSWORD {
        attempts += 1;
        let mut candidate = sample(&pool, length, rng);
        if !candidate.is_empty() && satisfies_categories(&candidate, config) {
            batch.push(candidate);
        } else {
            candidate.zeroize();
        }
    }
    batch
}
