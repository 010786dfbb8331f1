mod config;
mod picker;
mod repair;

pub use config::ComposerConfig;

use std::collections::HashSet;

use super::domain::{Category, ChosenOutfitSlot, Item, ItemId, OutfitRole};
use super::random::RandomSource;
use super::style::{classify, compatible, StyleBucket};
use picker::{pick_any, pick_one, pick_preferring};
use repair::limit_statement_pieces;

/// Working entry while an outfit is assembled; turned into a slot at the end.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Selection<'a> {
    pub role: OutfitRole,
    pub item: &'a Item,
}

/// Which core the composer built the outfit around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Dress,
    Separates,
}

/// Stateless composer turning an item pool into a rule-compliant outfit.
///
/// Each call either builds around a dress (dress, shoes, jewelry, optional hairclip)
/// or around separates (top, bottom, shoes, jewelry, optional hairclip). Style-gated
/// picks fall back to any item of the category when nothing compatible is left, and a
/// final repair pass keeps at most one statement piece. Missing categories simply
/// shrink the outfit; the composer never fails.
#[derive(Debug, Clone, Default)]
pub struct OutfitComposer {
    config: ComposerConfig,
}

impl OutfitComposer {
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn generate<R>(&self, pool: &[Item], rng: &mut R) -> Vec<ChosenOutfitSlot>
    where
        R: RandomSource + ?Sized,
    {
        let mut outfit = Assembly::default();

        match self.choose_branch(pool, rng) {
            Branch::Dress => self.compose_dress(pool, &mut outfit, rng),
            Branch::Separates => self.compose_separates(pool, &mut outfit, rng),
        }

        let mut selection = outfit.selection;
        limit_statement_pieces(pool, &mut selection, rng);

        selection
            .into_iter()
            .map(|entry| ChosenOutfitSlot::for_item(entry.role, entry.item))
            .collect()
    }

    fn choose_branch<R>(&self, pool: &[Item], rng: &mut R) -> Branch
    where
        R: RandomSource + ?Sized,
    {
        let has_dress = pool.iter().any(Item::is_dress);
        if has_dress && rng.chance(self.config.dress_probability) {
            Branch::Dress
        } else {
            Branch::Separates
        }
    }

    fn compose_dress<'a, R>(&self, pool: &'a [Item], outfit: &mut Assembly<'a>, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        let Some(dress) = pick_one(pool, Category::Top, Item::is_dress, &outfit.used, rng) else {
            return;
        };
        outfit.push(OutfitRole::Dress, dress);

        let dress_style = classify(dress);
        if let Some(shoes) = pick_preferring(
            pool,
            Category::Shoes,
            matches_style(dress_style),
            &outfit.used,
            rng,
        ) {
            outfit.push(OutfitRole::Shoes, shoes);
        }

        if let Some(jewelry) = pick_preferring(
            pool,
            Category::Jewelry,
            |item| !item.is_statement(),
            &outfit.used,
            rng,
        ) {
            outfit.push(OutfitRole::Jewelry, jewelry);
        }

        if rng.chance(self.config.dress_hairclip_probability) {
            if let Some(clip) = pick_any(pool, Category::Hairclip, &outfit.used, rng) {
                outfit.push(OutfitRole::Hairclip, clip);
            }
        }
    }

    fn compose_separates<'a, R>(&self, pool: &'a [Item], outfit: &mut Assembly<'a>, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        let top = pick_one(
            pool,
            Category::Top,
            |item| !item.is_dress(),
            &outfit.used,
            rng,
        );
        if let Some(top) = top {
            outfit.push(OutfitRole::Top, top);
        }

        let bottom = match top {
            Some(top) => {
                let top_style = classify(top);
                let avoid_shades = self.config.avoid_matching_shades;
                pick_preferring(
                    pool,
                    Category::Bottom,
                    |item| {
                        if avoid_shades && shades_clash(top, item) {
                            return false;
                        }
                        compatible(top_style, classify(item))
                    },
                    &outfit.used,
                    rng,
                )
            }
            None => pick_any(pool, Category::Bottom, &outfit.used, rng),
        };
        if let Some(bottom) = bottom {
            outfit.push(OutfitRole::Bottom, bottom);
        }

        let shoes = match top.or(bottom) {
            Some(anchor) => pick_preferring(
                pool,
                Category::Shoes,
                matches_style(classify(anchor)),
                &outfit.used,
                rng,
            ),
            None => pick_any(pool, Category::Shoes, &outfit.used, rng),
        };
        if let Some(shoes) = shoes {
            outfit.push(OutfitRole::Shoes, shoes);
        }

        if let Some(jewelry) = pick_any(pool, Category::Jewelry, &outfit.used, rng) {
            outfit.push(OutfitRole::Jewelry, jewelry);
        }

        if rng.chance(self.config.separates_hairclip_probability) {
            if let Some(clip) = pick_any(pool, Category::Hairclip, &outfit.used, rng) {
                outfit.push(OutfitRole::Hairclip, clip);
            }
        }
    }
}

#[derive(Default)]
struct Assembly<'a> {
    selection: Vec<Selection<'a>>,
    used: HashSet<ItemId>,
}

impl<'a> Assembly<'a> {
    fn push(&mut self, role: OutfitRole, item: &'a Item) {
        self.used.insert(item.id.clone());
        self.selection.push(Selection { role, item });
    }
}

fn matches_style(anchor: StyleBucket) -> impl Fn(&Item) -> bool {
    move |item| compatible(anchor, classify(item))
}

fn shades_clash(top: &Item, bottom: &Item) -> bool {
    matches!((top.shade, bottom.shade), (Some(a), Some(b)) if a == b)
}
