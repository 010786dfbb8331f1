use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use wardrobe::outfits::{
    ChosenOutfitSlot, Item, ItemId, ItemStore, OutfitHeader, OutfitId, SavedOutfit, StoreError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct Catalog {
    items: HashMap<ItemId, Item>,
    // insertion order for stable listings
    order: Vec<ItemId>,
    outfits: Vec<SavedOutfit>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryItemStore {
    catalog: Arc<Mutex<Catalog>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryItemStore {
    pub(crate) fn with_items(items: Vec<Item>) -> Result<Self, StoreError> {
        let store = Self::default();
        for item in items {
            store.insert_item(item)?;
        }
        Ok(store)
    }

    fn next_outfit_id(&self) -> OutfitId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        OutfitId(format!("outfit-{id:06}"))
    }
}

impl ItemStore for InMemoryItemStore {
    fn active_items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self
            .items()?
            .into_iter()
            .filter(|item| item.active)
            .collect())
    }

    fn items(&self) -> Result<Vec<Item>, StoreError> {
        let guard = self.catalog.lock().expect("catalog mutex poisoned");
        Ok(guard
            .order
            .iter()
            .filter_map(|id| guard.items.get(id).cloned())
            .collect())
    }

    fn insert_item(&self, item: Item) -> Result<Item, StoreError> {
        let mut guard = self.catalog.lock().expect("catalog mutex poisoned");
        if guard.items.contains_key(&item.id) {
            return Err(StoreError::Conflict);
        }
        guard.order.push(item.id.clone());
        guard.items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    fn update_item(&self, item: Item) -> Result<Item, StoreError> {
        let mut guard = self.catalog.lock().expect("catalog mutex poisoned");
        let existing = guard.items.get_mut(&item.id).ok_or(StoreError::NotFound)?;
        *existing = item.clone();
        Ok(item)
    }

    fn delete_item(&self, id: &ItemId) -> Result<(), StoreError> {
        let mut guard = self.catalog.lock().expect("catalog mutex poisoned");
        if guard.items.remove(id).is_none() {
            return Err(StoreError::NotFound);
        }
        guard.order.retain(|existing| existing != id);
        Ok(())
    }

    fn save_outfit(
        &self,
        header: OutfitHeader,
        slots: &[ChosenOutfitSlot],
    ) -> Result<SavedOutfit, StoreError> {
        let saved = SavedOutfit::from_slots(self.next_outfit_id(), header, slots, Utc::now());
        let mut guard = self.catalog.lock().expect("catalog mutex poisoned");
        guard.outfits.push(saved.clone());
        Ok(saved)
    }

    fn outfit(&self, id: &OutfitId) -> Result<Option<SavedOutfit>, StoreError> {
        let guard = self.catalog.lock().expect("catalog mutex poisoned");
        Ok(guard.outfits.iter().find(|outfit| &outfit.id == id).cloned())
    }

    fn outfits(&self) -> Result<Vec<SavedOutfit>, StoreError> {
        let guard = self.catalog.lock().expect("catalog mutex poisoned");
        Ok(guard.outfits.iter().rev().cloned().collect())
    }
}
