use serde::{Deserialize, Serialize};

/// Tunables for outfit composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Chance of building around a dress when the pool holds at least one.
    pub dress_probability: f64,
    pub dress_hairclip_probability: f64,
    pub separates_hairclip_probability: f64,
    /// Reject bottoms sharing the top's shade during the compatible pick.
    pub avoid_matching_shades: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            dress_probability: 0.10,
            dress_hairclip_probability: 0.35,
            separates_hairclip_probability: 0.25,
            avoid_matching_shades: false,
        }
    }
}
