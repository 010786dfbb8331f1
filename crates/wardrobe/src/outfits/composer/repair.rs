use std::collections::HashSet;

use tracing::debug;

use super::super::domain::{Item, ItemId, OutfitRole};
use super::super::random::RandomSource;
use super::picker::pick_one;
use super::Selection;

/// Accessory roles swapped or dropped first, in this order.
const REPAIRABLE_ROLES: [OutfitRole; 2] = [OutfitRole::Jewelry, OutfitRole::Hairclip];

fn statement_count(selection: &[Selection<'_>]) -> usize {
    selection
        .iter()
        .filter(|entry| entry.item.is_statement())
        .count()
}

/// Leaves at most one statement piece in `selection`.
///
/// Statement accessories are swapped for a plain alternative from the whole pool when one
/// exists and dropped otherwise. Any surplus after that is trimmed from the end.
pub(crate) fn limit_statement_pieces<'a, R>(
    pool: &'a [Item],
    selection: &mut Vec<Selection<'a>>,
    rng: &mut R,
) where
    R: RandomSource + ?Sized,
{
    if statement_count(selection) <= 1 {
        return;
    }

    for role in REPAIRABLE_ROLES {
        if statement_count(selection) <= 1 {
            break;
        }

        let Some(index) = selection
            .iter()
            .position(|entry| entry.role == role && entry.item.is_statement())
        else {
            continue;
        };

        let in_outfit: HashSet<ItemId> = selection
            .iter()
            .map(|entry| entry.item.id.clone())
            .collect();
        match pick_one(
            pool,
            role.category(),
            |item| !item.is_statement(),
            &in_outfit,
            rng,
        ) {
            Some(replacement) => {
                debug!(
                    role = role.label(),
                    item = replacement.id.as_str(),
                    "swapped statement accessory"
                );
                selection[index].item = replacement;
            }
            None => {
                debug!(
                    role = role.label(),
                    "dropped statement accessory without plain alternative"
                );
                selection.remove(index);
            }
        }
    }

    while statement_count(selection) > 1 {
        let Some(index) = selection.iter().rposition(|entry| entry.item.is_statement()) else {
            break;
        };
        let removed = selection.remove(index);
        debug!(role = removed.role.label(), "removed surplus statement piece");
    }
}
