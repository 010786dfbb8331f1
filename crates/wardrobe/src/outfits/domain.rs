use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for wardrobe items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier wrapper for persisted outfits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutfitId(pub String);

/// Closed set of wardrobe categories an item can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Top,
    Bottom,
    Jacket,
    Shoes,
    Hairclip,
    Jewelry,
}

impl Category {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Top,
            Self::Bottom,
            Self::Jacket,
            Self::Shoes,
            Self::Hairclip,
            Self::Jewelry,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Jacket => "jacket",
            Self::Shoes => "shoes",
            Self::Hairclip => "hairclip",
            Self::Jewelry => "jewelry",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|category| category.label() == normalized)
    }
}

/// Coarse color bucket recorded for most garments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shade {
    Light,
    Medium,
    Dark,
}

impl Shade {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "medium" => Some(Self::Medium),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    AllSeason,
}

impl Season {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            "winter" => Some(Self::Winter),
            "all-season" | "all_season" => Some(Self::AllSeason),
            _ => None,
        }
    }
}

/// A single wardrobe entry as supplied by the item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub category: Category,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default, alias = "tone")]
    pub shade: Option<Shade>,
    #[serde(default)]
    pub statement_piece: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Item {
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        Self {
            id: ItemId::new(id),
            category,
            item_type: None,
            shade: None,
            statement_piece: None,
            description: None,
            season: None,
            active: true,
        }
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_shade(mut self, shade: Shade) -> Self {
        self.shade = Some(shade);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn statement(mut self) -> Self {
        self.statement_piece = Some(true);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Lowercased subtype label; empty when the item has none.
    pub fn normalized_type(&self) -> String {
        self.item_type
            .as_deref()
            .map(|value| value.trim().to_ascii_lowercase())
            .unwrap_or_default()
    }

    pub fn is_statement(&self) -> bool {
        self.statement_piece.unwrap_or(false)
    }

    pub fn is_dress(&self) -> bool {
        self.category == Category::Top && self.normalized_type() == "dress"
    }
}

/// Role an item fills inside a generated outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitRole {
    Dress,
    Top,
    Bottom,
    Jacket,
    Shoes,
    Hairclip,
    Jewelry,
}

impl OutfitRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dress => "Dress",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Jacket => "Jacket",
            Self::Shoes => "Shoes",
            Self::Hairclip => "Hairclip",
            Self::Jewelry => "Jewelry",
        }
    }

    /// Catalog category items for this role are drawn from.
    pub const fn category(self) -> Category {
        match self {
            Self::Dress | Self::Top => Category::Top,
            Self::Bottom => Category::Bottom,
            Self::Jacket => Category::Jacket,
            Self::Shoes => Category::Shoes,
            Self::Hairclip => Category::Hairclip,
            Self::Jewelry => Category::Jewelry,
        }
    }
}

/// One role to item assignment of a generated outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenOutfitSlot {
    pub role: OutfitRole,
    pub item_id: ItemId,
    pub display_text: String,
}

impl ChosenOutfitSlot {
    pub fn for_item(role: OutfitRole, item: &Item) -> Self {
        Self {
            role,
            item_id: item.id.clone(),
            display_text: item
                .description
                .clone()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| role.label().to_string()),
        }
    }
}

/// Header fields written alongside a persisted outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitHeader {
    pub description: String,
    #[serde(rename = "type")]
    pub outfit_type: String,
    pub season: String,
}

impl Default for OutfitHeader {
    fn default() -> Self {
        Self {
            description: "Auto-generated outfit".to_string(),
            outfit_type: "casual".to_string(),
            season: "all-season".to_string(),
        }
    }
}

/// Child row linking a persisted outfit to one of its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitItemRow {
    pub item_id: ItemId,
    pub role: OutfitRole,
    pub display_text: String,
    pub position: u32,
}

/// Outfit as recorded by the item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedOutfit {
    pub id: OutfitId,
    pub header: OutfitHeader,
    pub items: Vec<OutfitItemRow>,
    pub created_at: DateTime<Utc>,
}

impl SavedOutfit {
    /// Builds the header plus one row per slot, positioned in generation order.
    pub fn from_slots(
        id: OutfitId,
        header: OutfitHeader,
        slots: &[ChosenOutfitSlot],
        created_at: DateTime<Utc>,
    ) -> Self {
        let items = slots
            .iter()
            .zip(1u32..)
            .map(|(slot, position)| OutfitItemRow {
                item_id: slot.item_id.clone(),
                role: slot.role,
                display_text: slot.display_text.clone(),
                position,
            })
            .collect();

        Self {
            id,
            header,
            items,
            created_at,
        }
    }
}
