use rand::Rng;

use super::combine::combine;
use super::variation::{capitalize, normalize, variation};

/// Generate one username from a theme's character pool.
///
/// Picks a base character uniformly, then layers two independent 30%
/// draws: `keep_canonical` themes may return the normalized base name
/// verbatim, and pools with more than one member may splice the base with
/// another character. Whatever falls through gets a phonetic variation.
/// The two draws are sequential and independent, not a single weighted
/// three-way choice.
pub fn generate_from_theme(rng: &mut impl Rng, pool: &[&str], keep_canonical: bool) -> String {
    if pool.is_empty() {
        return String::new();
    }
    let base_idx = rng.random_range(0..pool.len());
    let base = pool[base_idx];

    if keep_canonical && rng.random_bool(0.3) {
        return capitalize(&normalize(base));
    }

    if pool.len() > 1 && rng.random_bool(0.3) {
        let mut other_idx = rng.random_range(0..pool.len() - 1);
        if other_idx >= base_idx {
            other_idx += 1;
        }
        return capitalize(&combine(base, pool[other_idx]));
    }

    variation(rng, base)
}
