// ABOUTME: Weighted and uniform selection over caller-supplied random sources
// ABOUTME: Cumulative-distribution pick is a pure function so it can be tested without an RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::Rng;

/// Select the first item whose cumulative weight reaches `r`
///
/// Items are walked in order; `r` is expected in `[0, total]`. A draw past the
/// last cumulative weight (floating point drift) selects the last positively
/// weighted item. Returns `None` when no item has a positive weight.
#[must_use]
pub fn pick_weighted<T>(items: &[(T, f64)], r: f64) -> Option<&T> {
    let mut cumulative = 0.0;
    let mut last_positive = None;

    for (item, weight) in items {
        if *weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        last_positive = Some(item);
        if cumulative >= r {
            return Some(item);
        }
    }

    last_positive
}

/// Draw one item with probability proportional to its weight
///
/// Returns `None` when the total weight is not positive.
pub fn sample_weighted<'a, T, R>(items: &'a [(T, f64)], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let total: f64 = items
        .iter()
        .map(|(_, weight)| weight.max(0.0))
        .sum();
    if total <= 0.0 {
        return None;
    }

    let r = rng.gen_range(0.0..=total);
    pick_weighted(items, r)
}

/// Draw one item uniformly, `None` for an empty slice
pub fn choose_uniform<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}
