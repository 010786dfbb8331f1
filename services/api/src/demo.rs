use crate::infra::InMemoryItemStore;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use wardrobe::error::AppError;
use wardrobe::outfits::{
    classify, ChosenOutfitSlot, ComposerConfig, Item, OutfitComposer, OutfitHeader,
    OutfitService, OutfitServiceError, WardrobeImporter,
};

const SAMPLE_WARDROBE: &str = include_str!("../../../crates/wardrobe/sample_wardrobe.csv");

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for reproducible demo output. Defaults to fresh randomness.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Wardrobe CSV export (id,category,type,shade,statement_piece,description,season,active)
    #[arg(long)]
    pub(crate) items: PathBuf,
    /// Seed for reproducible outfits
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Number of outfits to generate
    #[arg(long, default_value_t = 1)]
    pub(crate) count: usize,
    /// Reject bottoms sharing the top's shade when another compatible bottom exists
    #[arg(long)]
    pub(crate) avoid_matching_shades: bool,
}

fn random_source(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let GenerateArgs {
        items,
        seed,
        count,
        avoid_matching_shades,
    } = args;

    let pool: Vec<Item> = WardrobeImporter::from_path(&items)?
        .into_iter()
        .filter(|item| item.active)
        .collect();
    let composer = OutfitComposer::new(ComposerConfig {
        avoid_matching_shades,
        ..ComposerConfig::default()
    });

    println!(
        "Wardrobe {} ({} active items)",
        items.display(),
        pool.len()
    );
    let mut rng = random_source(seed);
    for index in 1..=count.max(1) {
        let slots = composer.generate(&pool, &mut rng);
        println!("\nOutfit {index}");
        render_outfit(&pool, &slots);
    }

    Ok(())
}

fn render_outfit(pool: &[Item], slots: &[ChosenOutfitSlot]) {
    if slots.is_empty() {
        println!("- no outfit could be composed from this wardrobe");
        return;
    }

    for slot in slots {
        let item = pool.iter().find(|item| item.id == slot.item_id);
        let style = item.map(|item| classify(item).label()).unwrap_or("unknown");
        let marker = if item.is_some_and(Item::is_statement) {
            " [statement]"
        } else {
            ""
        };
        println!(
            "- {}: {} ({}, {}){}",
            slot.role.label(),
            slot.display_text,
            slot.item_id.as_str(),
            style,
            marker
        );
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let items = WardrobeImporter::from_reader(SAMPLE_WARDROBE.as_bytes())?;
    let active: Vec<Item> = items.iter().filter(|item| item.active).cloned().collect();
    let store = InMemoryItemStore::with_items(items).map_err(OutfitServiceError::from)?;
    let service = Arc::new(OutfitService::new(
        Arc::new(store),
        ComposerConfig::default(),
    ));

    println!("Outfit picker demo");
    println!("- sample wardrobe: {} active items", active.len());

    let mut rng = random_source(args.seed);
    let slots = service.generate_with(&mut rng)?;
    println!("\nSuggested outfit");
    render_outfit(&active, &slots);

    if slots.is_empty() {
        return Ok(());
    }

    let saved = service.save(
        Some(OutfitHeader {
            description: "Demo outfit".to_string(),
            ..OutfitHeader::default()
        }),
        slots,
    )?;
    println!("\nSaved outfit {} with {} items", saved.id.0, saved.items.len());

    let second = service.generate_with(&mut rng)?;
    if !second.is_empty() {
        service.save(None, second)?;
    }

    println!("\nSaved outfits (newest first)");
    for outfit in service.list()? {
        let roles: Vec<&str> = outfit.items.iter().map(|row| row.role.label()).collect();
        println!(
            "- {} | {} | {}",
            outfit.id.0,
            outfit.header.description,
            roles.join(", ")
        );
    }

    match serde_json::to_string_pretty(&service.get(&saved.id)?) {
        Ok(json) => println!("\nStored payload:\n{}", json),
        Err(err) => println!("\nStored payload unavailable: {}", err),
    }

    Ok(())
}
