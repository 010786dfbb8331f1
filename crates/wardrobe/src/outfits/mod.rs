//! Wardrobe catalog types, outfit composition and the outfit service.
//!
//! The composer is a pure function of an item snapshot and a random source. Storage is
//! reached only through [`ItemStore`], so the service and HTTP router can be exercised
//! against any backend.

pub mod composer;
pub mod domain;
pub mod import;
pub mod random;
pub mod router;
pub mod service;
pub mod store;
pub mod style;

#[cfg(test)]
mod tests;

pub use composer::{ComposerConfig, OutfitComposer};
pub use domain::{
    Category, ChosenOutfitSlot, Item, ItemId, OutfitHeader, OutfitId, OutfitItemRow, OutfitRole,
    SavedOutfit, Season, Shade,
};
pub use import::{WardrobeImportError, WardrobeImporter};
pub use random::RandomSource;
pub use router::{
    outfit_router, service_error_status, GenerateRequest, GenerateResponse, SaveOutfitRequest,
};
pub use service::{OutfitService, OutfitServiceError};
pub use store::{ItemStore, StoreError};
pub use style::{classify, compatible, StyleBucket};
