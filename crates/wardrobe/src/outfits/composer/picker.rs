use std::collections::HashSet;

use super::super::domain::{Category, Item, ItemId};
use super::super::random::RandomSource;

/// Uniform draw among the items of `category` that are not excluded and pass `filter`.
///
/// Returns `None` when nothing qualifies.
pub(crate) fn pick_one<'a, R, F>(
    pool: &'a [Item],
    category: Category,
    filter: F,
    exclude: &HashSet<ItemId>,
    rng: &mut R,
) -> Option<&'a Item>
where
    R: RandomSource + ?Sized,
    F: Fn(&Item) -> bool,
{
    let candidates: Vec<&Item> = pool
        .iter()
        .filter(|item| item.category == category)
        .filter(|item| !exclude.contains(&item.id))
        .filter(|&item| filter(item))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    Some(candidates[rng.next_index(candidates.len())])
}

/// Like [`pick_one`] without an extra filter.
pub(crate) fn pick_any<'a, R>(
    pool: &'a [Item],
    category: Category,
    exclude: &HashSet<ItemId>,
    rng: &mut R,
) -> Option<&'a Item>
where
    R: RandomSource + ?Sized,
{
    pick_one(pool, category, |_| true, exclude, rng)
}

/// Filtered pick that falls back to any item of the category when the filter leaves nothing.
pub(crate) fn pick_preferring<'a, R, F>(
    pool: &'a [Item],
    category: Category,
    preferred: F,
    exclude: &HashSet<ItemId>,
    rng: &mut R,
) -> Option<&'a Item>
where
    R: RandomSource + ?Sized,
    F: Fn(&Item) -> bool,
{
    match pick_one(pool, category, preferred, exclude, rng) {
        Some(item) => Some(item),
        None => pick_any(pool, category, exclude, rng),
    }
}
