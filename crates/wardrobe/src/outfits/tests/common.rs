use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::outfits::domain::{
    Category, ChosenOutfitSlot, Item, ItemId, OutfitHeader, OutfitId, OutfitRole, SavedOutfit,
    Shade,
};
use crate::outfits::random::RandomSource;
use crate::outfits::store::{ItemStore, StoreError};
use crate::outfits::{ComposerConfig, OutfitService};

/// Random source replaying scripted answers; coin flips default to `false`, indices to `0`.
#[derive(Debug, Default)]
pub(super) struct ScriptedRandom {
    chances: VecDeque<bool>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn with_chances(mut self, chances: &[bool]) -> Self {
        self.chances.extend(chances.iter().copied());
        self
    }

    pub(super) fn with_indices(mut self, indices: &[usize]) -> Self {
        self.indices.extend(indices.iter().copied());
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0).min(len - 1)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}

pub(super) fn top(id: &str, item_type: &str) -> Item {
    Item::new(id, Category::Top).with_type(item_type)
}

pub(super) fn bottom(id: &str, item_type: &str) -> Item {
    Item::new(id, Category::Bottom).with_type(item_type)
}

pub(super) fn shoes(id: &str, item_type: &str) -> Item {
    Item::new(id, Category::Shoes).with_type(item_type)
}

pub(super) fn jewelry(id: &str) -> Item {
    Item::new(id, Category::Jewelry).with_type("necklace")
}

pub(super) fn hairclip(id: &str) -> Item {
    Item::new(id, Category::Hairclip)
}

/// Wardrobe with every category populated and several statement pieces.
pub(super) fn full_wardrobe() -> Vec<Item> {
    vec![
        top("dress-1", "dress").statement().with_description("Red gown"),
        top("dress-2", "Dress"),
        top("top-1", "hoodie").with_shade(Shade::Light),
        top("top-2", "shirt").statement(),
        top("top-3", "blouse").with_shade(Shade::Dark),
        top("top-4", "t-shirt"),
        bottom("bottom-1", "jeans").with_shade(Shade::Dark),
        bottom("bottom-2", "skirt").statement(),
        bottom("bottom-3", "chinos").with_shade(Shade::Light),
        bottom("bottom-4", "shorts"),
        shoes("shoes-1", "sneakers"),
        shoes("shoes-2", "heels").statement(),
        shoes("shoes-3", "loafers"),
        jewelry("jewelry-1").statement(),
        jewelry("jewelry-2"),
        jewelry("jewelry-3").statement(),
        hairclip("clip-1").statement(),
        hairclip("clip-2"),
        Item::new("jacket-1", Category::Jacket).with_type("blazer"),
    ]
}

pub(super) fn find<'a>(pool: &'a [Item], slot: &ChosenOutfitSlot) -> &'a Item {
    pool.iter()
        .find(|item| item.id == slot.item_id)
        .expect("slot references pool item")
}

/// Casual separates that `generated_slots` refers to.
pub(super) fn casual_wardrobe() -> Vec<Item> {
    vec![
        top("top-1", "hoodie"),
        bottom("bottom-1", "jeans"),
        shoes("shoes-1", "sneakers"),
    ]
}

pub(super) fn generated_slots() -> Vec<ChosenOutfitSlot> {
    casual_wardrobe()
        .iter()
        .zip([OutfitRole::Top, OutfitRole::Bottom, OutfitRole::Shoes])
        .map(|(item, role)| ChosenOutfitSlot::for_item(role, item))
        .collect()
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    items: Arc<Mutex<Vec<Item>>>,
    outfits: Arc<Mutex<Vec<SavedOutfit>>>,
    sequence: Arc<AtomicU64>,
}

impl MemoryStore {
    pub(super) fn with_items(items: Vec<Item>) -> Self {
        let store = Self::default();
        *store.items.lock().expect("items mutex poisoned") = items;
        store
    }

    pub(super) fn saved(&self) -> Vec<SavedOutfit> {
        self.outfits.lock().expect("outfit mutex poisoned").clone()
    }
}

impl ItemStore for MemoryStore {
    fn active_items(&self) -> Result<Vec<Item>, StoreError> {
        let guard = self.items.lock().expect("items mutex poisoned");
        Ok(guard.iter().filter(|item| item.active).cloned().collect())
    }

    fn items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.lock().expect("items mutex poisoned").clone())
    }

    fn insert_item(&self, item: Item) -> Result<Item, StoreError> {
        let mut guard = self.items.lock().expect("items mutex poisoned");
        if guard.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::Conflict);
        }
        guard.push(item.clone());
        Ok(item)
    }

    fn update_item(&self, item: Item) -> Result<Item, StoreError> {
        let mut guard = self.items.lock().expect("items mutex poisoned");
        let existing = guard
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or(StoreError::NotFound)?;
        *existing = item.clone();
        Ok(item)
    }

    fn delete_item(&self, id: &ItemId) -> Result<(), StoreError> {
        let mut guard = self.items.lock().expect("items mutex poisoned");
        let index = guard
            .iter()
            .position(|item| &item.id == id)
            .ok_or(StoreError::NotFound)?;
        guard.remove(index);
        Ok(())
    }

    fn save_outfit(
        &self,
        header: OutfitHeader,
        slots: &[ChosenOutfitSlot],
    ) -> Result<SavedOutfit, StoreError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let saved = SavedOutfit::from_slots(
            OutfitId(format!("outfit-{id}")),
            header,
            slots,
            Utc::now(),
        );
        self.outfits
            .lock()
            .expect("outfit mutex poisoned")
            .push(saved.clone());
        Ok(saved)
    }

    fn outfit(&self, id: &OutfitId) -> Result<Option<SavedOutfit>, StoreError> {
        let guard = self.outfits.lock().expect("outfit mutex poisoned");
        Ok(guard.iter().find(|outfit| &outfit.id == id).cloned())
    }

    fn outfits(&self) -> Result<Vec<SavedOutfit>, StoreError> {
        let guard = self.outfits.lock().expect("outfit mutex poisoned");
        Ok(guard.iter().rev().cloned().collect())
    }
}

/// Store whose backend is always down.
pub(super) struct UnavailableStore;

impl ItemStore for UnavailableStore {
    fn active_items(&self) -> Result<Vec<Item>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn items(&self) -> Result<Vec<Item>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn insert_item(&self, _item: Item) -> Result<Item, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn update_item(&self, _item: Item) -> Result<Item, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn delete_item(&self, _id: &ItemId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn save_outfit(
        &self,
        _header: OutfitHeader,
        _slots: &[ChosenOutfitSlot],
    ) -> Result<SavedOutfit, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn outfit(&self, _id: &OutfitId) -> Result<Option<SavedOutfit>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn outfits(&self) -> Result<Vec<SavedOutfit>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub(super) fn service_with(items: Vec<Item>) -> (Arc<MemoryStore>, OutfitService<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_items(items));
    let service = OutfitService::new(store.clone(), ComposerConfig::default());
    (store, service)
}

pub(super) async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("valid json");
    (status, value)
}
