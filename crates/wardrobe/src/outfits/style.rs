use serde::{Deserialize, Serialize};

use super::domain::{Category, Item};

/// Coarse style tag used to decide which garments can be worn together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleBucket {
    Casual,
    Smart,
    Formal,
}

impl StyleBucket {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Smart => "smart",
            Self::Formal => "formal",
        }
    }

    /// Same bucket, or smart mixed with formal. Casual only pairs with casual.
    pub fn compatible_with(self, other: StyleBucket) -> bool {
        matches!(
            (self, other),
            (Self::Casual, Self::Casual)
                | (Self::Smart, Self::Smart)
                | (Self::Formal, Self::Formal)
                | (Self::Smart, Self::Formal)
                | (Self::Formal, Self::Smart)
        )
    }
}

struct StyleTable {
    formal: &'static [&'static str],
    smart: &'static [&'static str],
    casual: &'static [&'static str],
}

const TOP_STYLES: StyleTable = StyleTable {
    formal: &["dress"],
    smart: &["blouse", "shirt", "vest", "cardigan"],
    casual: &[
        "t-shirt", "tshirt", "tanktop", "croptop", "hoodie", "sweater", "cardigan",
    ],
};

const BOTTOM_STYLES: StyleTable = StyleTable {
    formal: &[],
    smart: &["pants", "chinos", "skirt"],
    casual: &["jeans", "shorts", "leggings"],
};

const SHOE_STYLES: StyleTable = StyleTable {
    formal: &["heels"],
    smart: &["boots", "loafers"],
    casual: &["sneakers", "sandals", "flats", "slippers"],
};

const DEFAULT_BUCKET: StyleBucket = StyleBucket::Smart;

impl StyleTable {
    // formal, then smart, then casual: a type listed twice takes the first hit
    fn lookup(&self, item_type: &str) -> Option<StyleBucket> {
        if self.formal.contains(&item_type) {
            Some(StyleBucket::Formal)
        } else if self.smart.contains(&item_type) {
            Some(StyleBucket::Smart)
        } else if self.casual.contains(&item_type) {
            Some(StyleBucket::Casual)
        } else {
            None
        }
    }
}

/// Maps an item to its style bucket from its category and subtype.
///
/// Accessories and jackets are style neutral and always land in
/// [`StyleBucket::Smart`], which is also the fallback for unknown subtypes.
pub fn classify(item: &Item) -> StyleBucket {
    let table = match item.category {
        Category::Top => &TOP_STYLES,
        Category::Bottom => &BOTTOM_STYLES,
        Category::Shoes => &SHOE_STYLES,
        Category::Jacket | Category::Hairclip | Category::Jewelry => return DEFAULT_BUCKET,
    };

    table
        .lookup(&item.normalized_type())
        .unwrap_or(DEFAULT_BUCKET)
}

pub fn compatible(a: StyleBucket, b: StyleBucket) -> bool {
    a.compatible_with(b)
}
