//! Aggregate helpers shared by every container entity.
//!
//! Nothing here caches: aggregates are recomputed on each call.

use std::cmp::Ordering;

/// Arithmetic mean. An empty input averages to `0.0`.
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// The `n` items with the highest `metric`, highest first.
///
/// Ties keep their original order; the result has `min(n, len)` items.
pub fn top_n<T, F>(items: Vec<T>, n: usize, metric: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<(f64, T)> = items.into_iter().map(|item| (metric(&item), item)).collect();
    // sort_by is stable, so equal metrics stay in insertion order
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(n).map(|(_, item)| item).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
