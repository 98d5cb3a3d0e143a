//! Knowledge source selector

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Documentation set the external script is asked to search.
///
/// The set is closed: the script only knows these three `--db` values, so
/// free-form strings are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeSource {
    /// PrimeVue component documentation
    PrimeVue,
    /// Nuxt framework documentation
    Nuxt,
    /// Both documentation sets combined
    Both,
}

impl KnowledgeSource {
    /// All sources, in the order the selection menu lists them.
    pub const MENU_ORDER: [KnowledgeSource; 3] = [
        KnowledgeSource::Both,
        KnowledgeSource::PrimeVue,
        KnowledgeSource::Nuxt,
    ];

    /// Value passed to the script's `--db` flag
    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeSource::PrimeVue => "primevue",
            KnowledgeSource::Nuxt => "nuxt",
            KnowledgeSource::Both => "both",
        }
    }

    /// Human-readable menu label
    pub fn label(&self) -> &'static str {
        match self {
            KnowledgeSource::PrimeVue => "🎨 PrimeVue Only",
            KnowledgeSource::Nuxt => "⚡ Nuxt Only",
            KnowledgeSource::Both => "📘 Both (Nuxt + PrimeVue)",
        }
    }
}

impl std::fmt::Display for KnowledgeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KnowledgeSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primevue" => Ok(KnowledgeSource::PrimeVue),
            "nuxt" => Ok(KnowledgeSource::Nuxt),
            "both" => Ok(KnowledgeSource::Both),
            _ => Err(DomainError::UnknownSource(s.to_string())),
        }
    }
}
