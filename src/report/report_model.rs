use serde::{Deserialize, Serialize};

use crate::action::action_model::ActionId;

// ============================================================================
// Resolution report: outcome of resolving a batch of action ids
// ============================================================================

/// One requested id and what it resolved to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedEntry {
    /// Canonical `kind-id[-tag]` string
    pub id: String,

    pub name: Option<String>,

    pub icon_url: Option<String>,

    /// Wowhead link for items and spells
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Resolution failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolvedEntry {
    pub fn resolved(filled: &ActionId, lang_prefix: &str) -> Self {
        Self {
            id: filled.to_id_string().unwrap_or_default(),
            name: Some(filled.name().to_string()),
            icon_url: Some(filled.icon_url().to_string()),
            href: filled.href(lang_prefix),
            error: None,
        }
    }

    pub fn failed(id: &ActionId, error: impl ToString) -> Self {
        Self {
            id: id.to_id_string().unwrap_or_default(),
            name: None,
            icon_url: None,
            href: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregated results, consumed by the console reporter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub resolved: usize,
    pub failed: usize,
    pub entries: Vec<ResolvedEntry>,
}

impl ResolutionReport {
    pub fn from_entries(entries: Vec<ResolvedEntry>) -> Self {
        let resolved = entries.iter().filter(|e| e.is_resolved()).count();
        Self {
            resolved,
            failed: entries.len() - resolved,
            entries,
        }
    }

    pub fn all_resolved(&self) -> bool {
        self.failed == 0
    }
}
