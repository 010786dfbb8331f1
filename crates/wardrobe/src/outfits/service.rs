use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use super::composer::{ComposerConfig, OutfitComposer};
use super::domain::{
    Category, ChosenOutfitSlot, Item, ItemId, OutfitHeader, OutfitId, OutfitRole, SavedOutfit,
};
use super::random::RandomSource;
use super::store::{ItemStore, StoreError};

/// Service composing the item store with the outfit composer.
pub struct OutfitService<S> {
    store: Arc<S>,
    composer: Arc<OutfitComposer>,
}

impl<S> OutfitService<S>
where
    S: ItemStore + 'static,
{
    pub fn new(store: Arc<S>, config: ComposerConfig) -> Self {
        Self {
            store,
            composer: Arc::new(OutfitComposer::new(config)),
        }
    }

    pub fn composer(&self) -> &OutfitComposer {
        &self.composer
    }

    /// Generate an outfit from the active pool using thread-local randomness.
    pub fn generate(&self) -> Result<Vec<ChosenOutfitSlot>, OutfitServiceError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate an outfit from the active pool with a caller-provided random source.
    pub fn generate_with<R>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<ChosenOutfitSlot>, OutfitServiceError>
    where
        R: RandomSource + ?Sized,
    {
        let pool: Vec<Item> = self
            .store
            .active_items()?
            .into_iter()
            .filter(|item| item.active)
            .collect();

        let slots = self.composer.generate(&pool, rng);
        if slots.is_empty() {
            info!(pool_size = pool.len(), "no outfit could be composed from wardrobe");
        } else {
            debug!(pool_size = pool.len(), slots = slots.len(), "composed outfit");
        }
        Ok(slots)
    }

    /// Persist a generated outfit, defaulting the header when none is supplied.
    pub fn save(
        &self,
        header: Option<OutfitHeader>,
        slots: Vec<ChosenOutfitSlot>,
    ) -> Result<SavedOutfit, OutfitServiceError> {
        if slots.is_empty() {
            return Err(OutfitServiceError::EmptyOutfit);
        }

        let mut roles = HashSet::new();
        for slot in &slots {
            if !roles.insert(slot.role) {
                return Err(OutfitServiceError::DuplicateRole(slot.role));
            }
        }

        let catalog: HashMap<ItemId, Category> = self
            .store
            .items()?
            .into_iter()
            .map(|item| (item.id, item.category))
            .collect();
        for slot in &slots {
            let Some(&category) = catalog.get(&slot.item_id) else {
                return Err(OutfitServiceError::UnknownItem(slot.item_id.clone()));
            };
            if category != slot.role.category() {
                return Err(OutfitServiceError::RoleMismatch {
                    role: slot.role,
                    item_id: slot.item_id.clone(),
                    category,
                });
            }
        }

        let saved = self
            .store
            .save_outfit(header.unwrap_or_default(), &slots)?;
        info!(outfit_id = %saved.id.0, items = saved.items.len(), "saved outfit");
        Ok(saved)
    }

    pub fn get(&self, id: &OutfitId) -> Result<SavedOutfit, OutfitServiceError> {
        let outfit = self.store.outfit(id)?.ok_or(StoreError::NotFound)?;
        Ok(outfit)
    }

    pub fn list(&self) -> Result<Vec<SavedOutfit>, OutfitServiceError> {
        Ok(self.store.outfits()?)
    }

    pub fn items(&self) -> Result<Vec<Item>, OutfitServiceError> {
        Ok(self.store.items()?)
    }

    pub fn register_item(&self, item: Item) -> Result<Item, OutfitServiceError> {
        let stored = self.store.insert_item(item)?;
        debug!(
            item_id = stored.id.as_str(),
            category = stored.category.label(),
            "registered item"
        );
        Ok(stored)
    }

    /// Replace an existing item; the id in the path and in the payload must agree.
    pub fn update_item(&self, id: &ItemId, item: Item) -> Result<Item, OutfitServiceError> {
        if &item.id != id {
            return Err(OutfitServiceError::ItemIdMismatch {
                expected: id.clone(),
                found: item.id,
            });
        }

        let stored = self.store.update_item(item)?;
        debug!(
            item_id = stored.id.as_str(),
            active = stored.active,
            "updated item"
        );
        Ok(stored)
    }

    pub fn delete_item(&self, id: &ItemId) -> Result<(), OutfitServiceError> {
        self.store.delete_item(id)?;
        info!(item_id = id.as_str(), "deleted item");
        Ok(())
    }
}

/// Error raised by the outfit service.
#[derive(Debug, thiserror::Error)]
pub enum OutfitServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("an outfit needs at least one item")]
    EmptyOutfit,
    #[error("role '{}' appears more than once", .0.label())]
    DuplicateRole(OutfitRole),
    #[error("item '{}' is not in the wardrobe", .0.as_str())]
    UnknownItem(ItemId),
    #[error(
        "item '{}' is a {} and cannot fill the {} role",
        .item_id.as_str(),
        .category.label(),
        .role.label()
    )]
    RoleMismatch {
        role: OutfitRole,
        item_id: ItemId,
        category: Category,
    },
    #[error("item id '{}' does not match '{}'", .found.as_str(), .expected.as_str())]
    ItemIdMismatch { expected: ItemId, found: ItemId },
}
