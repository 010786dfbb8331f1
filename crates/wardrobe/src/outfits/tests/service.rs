use super::common::*;
use crate::outfits::domain::{
    Category, ChosenOutfitSlot, ItemId, OutfitHeader, OutfitId, OutfitRole,
};
use crate::outfits::store::StoreError;
use crate::outfits::{ComposerConfig, ItemStore, OutfitService, OutfitServiceError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[test]
fn generate_ignores_inactive_items() {
    let (_store, service) = service_with(vec![
        top("top-1", "hoodie").inactive(),
        top("top-2", "t-shirt"),
        bottom("bottom-1", "jeans").inactive(),
    ]);

    for seed in 0..20 {
        let slots = service
            .generate_with(&mut StdRng::seed_from_u64(seed))
            .expect("generation succeeds");
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].item_id.as_str(), "top-2");
    }
}

#[test]
fn generate_on_empty_wardrobe_returns_no_slots() {
    let (_store, service) = service_with(Vec::new());
    let slots = service.generate().expect("empty wardrobe is not an error");
    assert!(slots.is_empty());
}

#[test]
fn generate_surfaces_store_failures() {
    let service = OutfitService::new(Arc::new(UnavailableStore), ComposerConfig::default());

    match service.generate() {
        Err(OutfitServiceError::Store(StoreError::Unavailable(reason))) => {
            assert!(reason.contains("refused"));
        }
        other => panic!("expected unavailable store, got {other:?}"),
    }
}

#[test]
fn save_persists_header_and_positioned_rows() {
    let (store, service) = service_with(casual_wardrobe());

    let saved = service
        .save(None, generated_slots())
        .expect("outfit saves");

    assert_eq!(saved.header, OutfitHeader::default());
    assert_eq!(saved.header.description, "Auto-generated outfit");
    let positions: Vec<u32> = saved.items.iter().map(|row| row.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(saved.items[0].role, OutfitRole::Top);

    let stored = store.saved();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, saved.id);
}

#[test]
fn save_keeps_caller_header() {
    let (_store, service) = service_with(casual_wardrobe());
    let header = OutfitHeader {
        description: "Friday office".to_string(),
        outfit_type: "smart".to_string(),
        season: "autumn".to_string(),
    };

    let saved = service
        .save(Some(header.clone()), generated_slots())
        .expect("outfit saves");

    assert_eq!(saved.header, header);
}

#[test]
fn save_rejects_empty_outfits() {
    let (store, service) = service_with(Vec::new());

    match service.save(None, Vec::new()) {
        Err(OutfitServiceError::EmptyOutfit) => {}
        other => panic!("expected empty outfit error, got {other:?}"),
    }
    assert!(store.saved().is_empty());
}

#[test]
fn save_rejects_repeated_roles() {
    let (_store, service) = service_with(casual_wardrobe());
    let mut slots = generated_slots();
    slots.push(slots[0].clone());

    match service.save(None, slots) {
        Err(OutfitServiceError::DuplicateRole(OutfitRole::Top)) => {}
        other => panic!("expected duplicate role error, got {other:?}"),
    }
}

#[test]
fn get_propagates_not_found() {
    let (_store, service) = service_with(Vec::new());

    match service.get(&OutfitId("missing".to_string())) {
        Err(OutfitServiceError::Store(StoreError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn generated_outfits_round_trip_through_the_store() {
    let (_store, service) = service_with(full_wardrobe());

    let slots = service
        .generate_with(&mut StdRng::seed_from_u64(21))
        .expect("generation succeeds");
    assert!(!slots.is_empty());

    let saved = service.save(None, slots.clone()).expect("outfit saves");
    let fetched = service.get(&saved.id).expect("outfit fetched");

    let fetched_ids: Vec<_> = fetched.items.iter().map(|row| row.item_id.clone()).collect();
    let generated_ids: Vec<_> = slots.iter().map(|slot| slot.item_id.clone()).collect();
    assert_eq!(fetched_ids, generated_ids);
    assert_eq!(service.list().expect("list succeeds").len(), 1);
}

#[test]
fn list_returns_newest_first() {
    let (_store, service) = service_with(casual_wardrobe());
    let first = service.save(None, generated_slots()).expect("first saves");
    let second = service.save(None, generated_slots()).expect("second saves");

    let listed = service.list().expect("list succeeds");
    let ids: Vec<_> = listed.iter().map(|outfit| outfit.id.clone()).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[test]
fn register_item_rejects_duplicates() {
    let (store, service) = service_with(vec![top("top-1", "shirt")]);

    match service.register_item(top("top-1", "blouse")) {
        Err(OutfitServiceError::Store(StoreError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }

    service
        .register_item(shoes("shoes-1", "boots"))
        .expect("new item registers");
    assert_eq!(store.items().expect("items listed").len(), 2);
}

#[test]
fn save_rejects_items_missing_from_the_catalog() {
    let (store, service) = service_with(casual_wardrobe());
    let ghost = top("ghost-item", "shirt");
    let slots = vec![ChosenOutfitSlot::for_item(OutfitRole::Top, &ghost)];

    match service.save(None, slots) {
        Err(OutfitServiceError::UnknownItem(id)) => assert_eq!(id.as_str(), "ghost-item"),
        other => panic!("expected unknown item error, got {other:?}"),
    }
    assert!(store.saved().is_empty());
}

#[test]
fn save_rejects_items_in_the_wrong_role() {
    let (store, service) = service_with(casual_wardrobe());
    let sneakers = shoes("shoes-1", "sneakers");
    let slots = vec![ChosenOutfitSlot::for_item(OutfitRole::Top, &sneakers)];

    match service.save(None, slots) {
        Err(OutfitServiceError::RoleMismatch {
            role,
            item_id,
            category,
        }) => {
            assert_eq!(role, OutfitRole::Top);
            assert_eq!(item_id.as_str(), "shoes-1");
            assert_eq!(category, Category::Shoes);
        }
        other => panic!("expected role mismatch, got {other:?}"),
    }
    assert!(store.saved().is_empty());
}

#[test]
fn save_accepts_a_dress_in_the_dress_role() {
    let dress = top("dress-1", "dress");
    let (_store, service) = service_with(vec![dress.clone()]);

    let saved = service
        .save(None, vec![ChosenOutfitSlot::for_item(OutfitRole::Dress, &dress)])
        .expect("dress outfit saves");
    assert_eq!(saved.items[0].role, OutfitRole::Dress);
}

#[test]
fn deactivated_items_leave_the_generation_pool() {
    let (_store, service) =
        service_with(vec![top("top-1", "hoodie"), top("top-2", "t-shirt")]);

    service
        .update_item(&ItemId::new("top-1"), top("top-1", "hoodie").inactive())
        .expect("item updates");

    for seed in 0..20 {
        let slots = service
            .generate_with(&mut StdRng::seed_from_u64(seed))
            .expect("generation succeeds");
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].item_id.as_str(), "top-2");
    }
}

#[test]
fn update_item_checks_ids() {
    let (_store, service) = service_with(vec![top("top-1", "shirt")]);

    match service.update_item(&ItemId::new("top-1"), top("top-9", "shirt")) {
        Err(OutfitServiceError::ItemIdMismatch { expected, found }) => {
            assert_eq!(expected.as_str(), "top-1");
            assert_eq!(found.as_str(), "top-9");
        }
        other => panic!("expected id mismatch, got {other:?}"),
    }

    match service.update_item(&ItemId::new("top-9"), top("top-9", "shirt")) {
        Err(OutfitServiceError::Store(StoreError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn deleted_items_are_gone_from_catalog_and_generation() {
    let (store, service) =
        service_with(vec![top("top-1", "hoodie"), bottom("bottom-1", "jeans")]);

    service
        .delete_item(&ItemId::new("bottom-1"))
        .expect("item deletes");
    assert_eq!(store.items().expect("items listed").len(), 1);

    let slots = service
        .generate_with(&mut StdRng::seed_from_u64(4))
        .expect("generation succeeds");
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].role, OutfitRole::Top);

    match service.delete_item(&ItemId::new("bottom-1")) {
        Err(OutfitServiceError::Store(StoreError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}
