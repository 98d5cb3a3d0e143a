//! Trigger table
//!
//! Hosts invoke the tool through stable identifiers. Each identifier only
//! pre-binds the knowledge source; all of them run the same query flow.
//!
//! | Identifier | Preset source |
//! |------------|---------------|
//! | `rag-copilot.query` | ask the user |
//! | `rag-copilot.queryPrimeVue` | `primevue` |
//! | `rag-copilot.queryNuxt` | `nuxt` |
//! | `rag-copilot.queryBoth` | `both` |

use crate::core::error::DomainError;
use crate::query::source::KnowledgeSource;
use std::str::FromStr;

/// Identifier of a host-facing entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerId {
    Query,
    QueryPrimeVue,
    QueryNuxt,
    QueryBoth,
}

const TRIGGERS: [(TriggerId, &str, Option<KnowledgeSource>); 4] = [
    (TriggerId::Query, "rag-copilot.query", None),
    (
        TriggerId::QueryPrimeVue,
        "rag-copilot.queryPrimeVue",
        Some(KnowledgeSource::PrimeVue),
    ),
    (
        TriggerId::QueryNuxt,
        "rag-copilot.queryNuxt",
        Some(KnowledgeSource::Nuxt),
    ),
    (
        TriggerId::QueryBoth,
        "rag-copilot.queryBoth",
        Some(KnowledgeSource::Both),
    ),
];

impl TriggerId {
    pub fn all() -> impl Iterator<Item = TriggerId> {
        TRIGGERS.iter().map(|(id, _, _)| *id)
    }

    fn entry(&self) -> &'static (TriggerId, &'static str, Option<KnowledgeSource>) {
        // The table covers every variant.
        match self {
            TriggerId::Query => &TRIGGERS[0],
            TriggerId::QueryPrimeVue => &TRIGGERS[1],
            TriggerId::QueryNuxt => &TRIGGERS[2],
            TriggerId::QueryBoth => &TRIGGERS[3],
        }
    }

    /// Stable external identifier
    pub fn as_str(&self) -> &'static str {
        self.entry().1
    }

    /// Knowledge source pre-bound by this trigger, `None` to ask the user
    pub fn preset(&self) -> Option<KnowledgeSource> {
        self.entry().2
    }
}

impl std::fmt::Display for TriggerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TriggerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TRIGGERS
            .iter()
            .find(|(_, name, _)| *name == s.trim())
            .map(|(id, _, _)| *id)
            .ok_or_else(|| DomainError::UnknownTrigger(s.to_string()))
    }
}
