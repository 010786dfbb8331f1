use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::domain::{Category, Item, ItemId, Season, Shade};

#[derive(Debug)]
pub enum WardrobeImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: u64, reason: String },
}

impl std::fmt::Display for WardrobeImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WardrobeImportError::Io(err) => write!(f, "failed to read wardrobe export: {}", err),
            WardrobeImportError::Csv(err) => write!(f, "invalid wardrobe CSV data: {}", err),
            WardrobeImportError::InvalidRow { line, reason } => {
                write!(f, "invalid wardrobe row on line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for WardrobeImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WardrobeImportError::Io(err) => Some(err),
            WardrobeImportError::Csv(err) => Some(err),
            WardrobeImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for WardrobeImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for WardrobeImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct WardrobeRow {
    id: String,
    category: String,
    #[serde(rename = "type", default, deserialize_with = "empty_string_as_none")]
    item_type: Option<String>,
    #[serde(
        default,
        alias = "tone",
        deserialize_with = "empty_string_as_none"
    )]
    shade: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    statement_piece: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    season: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    active: Option<String>,
}

impl WardrobeRow {
    fn into_item(self, line: u64) -> Result<Item, WardrobeImportError> {
        let invalid = |reason: String| WardrobeImportError::InvalidRow { line, reason };

        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err(invalid("missing item id".to_string()));
        }

        let category = Category::parse(&self.category)
            .ok_or_else(|| invalid(format!("unknown category '{}'", self.category)))?;

        let shade = match self.shade.as_deref() {
            Some(raw) => Some(
                Shade::parse(raw).ok_or_else(|| invalid(format!("unknown shade '{raw}'")))?,
            ),
            None => None,
        };

        // Unrecognized seasons are not fatal; the composer ignores season anyway.
        let season = self.season.as_deref().and_then(Season::parse);

        let statement_piece = match self.statement_piece.as_deref() {
            Some(raw) => Some(
                parse_flag(raw)
                    .ok_or_else(|| invalid(format!("statement_piece must be a flag, got '{raw}'")))?,
            ),
            None => None,
        };

        let active = match self.active.as_deref() {
            Some(raw) => {
                parse_flag(raw).ok_or_else(|| invalid(format!("active must be a flag, got '{raw}'")))?
            }
            None => true,
        };

        Ok(Item {
            id: ItemId(id),
            category,
            item_type: self.item_type,
            shade,
            statement_piece,
            description: self.description,
            season,
            active,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Loads a wardrobe snapshot from a CSV export.
///
/// Expected header: `id,category,type,shade,statement_piece,description,season,active`.
/// Only `id` and `category` are required; `tone` is accepted in place of `shade`.
pub struct WardrobeImporter;

impl WardrobeImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Item>, WardrobeImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Item>, WardrobeImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for row in csv_reader.deserialize::<WardrobeRow>() {
            let row = row?;
            let line = items.len() as u64 + 2;
            let item = row.into_item(line)?;
            if !seen.insert(item.id.clone()) {
                return Err(WardrobeImportError::InvalidRow {
                    line,
                    reason: format!("duplicate item id '{}'", item.id.as_str()),
                });
            }
            items.push(item);
        }

        Ok(items)
    }
}
