use super::domain::{ChosenOutfitSlot, Item, ItemId, OutfitHeader, OutfitId, SavedOutfit};

/// Storage abstraction for the wardrobe catalog and saved outfits.
///
/// The composer itself never touches the store; the service fetches a snapshot of the
/// active pool, composes in memory and only writes when the caller asks to keep an outfit.
pub trait ItemStore: Send + Sync {
    fn active_items(&self) -> Result<Vec<Item>, StoreError>;
    fn items(&self) -> Result<Vec<Item>, StoreError>;
    fn insert_item(&self, item: Item) -> Result<Item, StoreError>;
    /// Replaces the stored item with the same id; `NotFound` when it does not exist.
    fn update_item(&self, item: Item) -> Result<Item, StoreError>;
    /// Removes an item from the catalog. Saved outfit rows are left as they are.
    fn delete_item(&self, id: &ItemId) -> Result<(), StoreError>;
    /// Writes one header plus one row per slot and returns the stored outfit.
    fn save_outfit(
        &self,
        header: OutfitHeader,
        slots: &[ChosenOutfitSlot],
    ) -> Result<SavedOutfit, StoreError>;
    fn outfit(&self, id: &OutfitId) -> Result<Option<SavedOutfit>, StoreError>;
    /// Saved outfits, newest first.
    fn outfits(&self) -> Result<Vec<SavedOutfit>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("item store unavailable: {0}")]
    Unavailable(String),
}
