//! Tier-biased sampling and distractor selection, shared by all quiz
//! families. Every function takes its random source as a parameter so
//! tests can seed it.

use std::collections::HashSet;

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::{Country, TierIndex};
use crate::quiz::Difficulty;

/// Pick `desired` entities for a quiz run. Entities matching the tier
/// predicate come first; if the tier is under-populated the deficit is
/// filled uniformly at random from the rest of the pool, so a sparse tier
/// still yields a full quiz. The final list is a uniform shuffle.
pub fn sample_entities<T, F, R>(pool: &[T], in_tier: F, desired: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
    R: Rng + ?Sized,
{
    let mut picked: Vec<T> = pool.iter().filter(|e| in_tier(e)).cloned().collect();

    if picked.len() < desired {
        warn!(
            "tier holds {} of {} requested entities; filling from the full pool",
            picked.len(),
            desired
        );
        let deficit = desired - picked.len();
        let mut rest: Vec<T> = pool.iter().filter(|e| !in_tier(e)).cloned().collect();
        rest.shuffle(rng);
        picked.extend(rest.into_iter().take(deficit));
    }

    picked.shuffle(rng);
    picked.truncate(desired);
    picked
}

/// Collect the candidate pool for grouped questions (4 countries per
/// question). When the requested tier cannot supply `needed` countries,
/// nearby tiers are borrowed from, nearest first, until enough are
/// collected or the tiers run out.
pub fn collect_group_pool<'a, R>(
    valid: &[&'a Country],
    tiers: &TierIndex,
    difficulty: Difficulty,
    needed: usize,
    rng: &mut R,
) -> Vec<&'a Country>
where
    R: Rng + ?Sized,
{
    let mut picked: Vec<&Country> = valid
        .iter()
        .copied()
        .filter(|c| tiers.contains(difficulty, &c.cca3))
        .collect();

    if picked.len() < needed {
        warn!(
            "{:?} tier holds {} of {} countries needed for grouped questions; borrowing from nearby tiers",
            difficulty,
            picked.len(),
            needed
        );
        for fallback in difficulty.fallback_order() {
            if picked.len() >= needed {
                break;
            }
            let mut extra: Vec<&Country> = valid
                .iter()
                .copied()
                .filter(|c| tiers.contains(fallback, &c.cca3))
                .filter(|c| !picked.iter().any(|p| p.cca3 == c.cca3))
                .collect();
            extra.shuffle(rng);
            let deficit = needed - picked.len();
            picked.extend(extra.into_iter().take(deficit));
        }
    }

    picked.shuffle(rng);
    picked
}

/// Draw up to `n` distinct values ≠ `correct`, uniformly without
/// replacement. Duplicates in the pool are collapsed first so an option
/// list can never repeat itself. A pool too small to supply `n` values
/// yields what it has.
pub fn pick_distractors<R>(pool: &[String], correct: &str, n: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut seen = HashSet::new();
    let mut candidates: Vec<&String> = Vec::new();
    for value in pool {
        if value.is_empty() || value == correct {
            continue;
        }
        if seen.insert(value.as_str()) {
            candidates.push(value);
        }
    }

    if candidates.len() < n {
        warn!(
            "only {} distinct distractors available of {} requested",
            candidates.len(),
            n
        );
    }

    candidates.shuffle(rng);
    candidates.into_iter().take(n).cloned().collect()
}
