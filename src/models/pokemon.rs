//! Client-facing Pokemon record.

use serde::{Deserialize, Serialize};

/// Simplified view of one upstream Pokemon resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    /// Type names joined with ", " in upstream order
    #[serde(rename = "type")]
    pub kind: String,
    /// Front sprite URL, None when upstream has none
    pub image: Option<String>,
}

impl PokemonSummary {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            image,
        }
    }
}
