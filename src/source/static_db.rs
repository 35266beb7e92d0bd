use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    action::error::{ActionError, Result},
    source::source_model::{DataSource, IconData},
};

/// On-disk icon database, e.g. `icons.yaml`:
///
/// ```yaml
/// items:
///   29035: { name: "Cyclone Faceguard", icon: inv_helmet_15 }
/// spells:
///   30451: { name: "Arcane Blast", icon: spell_arcane_blast, rank: 1 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconDatabase {
    #[serde(default)]
    pub items: HashMap<i32, IconData>,
    #[serde(default)]
    pub spells: HashMap<i32, IconData>,
}

/// In-memory data source. Counts lookups so callers can check how many
/// round trips a resolution took.
#[derive(Debug, Default)]
pub struct StaticDataSource {
    db: IconDatabase,
    lookups: AtomicUsize,
}

impl StaticDataSource {
    pub fn new(db: IconDatabase) -> Self {
        Self {
            db,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ActionError::DatabaseIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|e| match e {
            ActionError::DatabaseParse { source, .. } => ActionError::DatabaseParse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let db: IconDatabase = serde_yaml::from_str(content).map_err(|source| ActionError::DatabaseParse {
            path: "<inline>".to_string(),
            source,
        })?;
        Ok(Self::new(db))
    }

    pub fn with_item(mut self, id: i32, name: &str, icon: &str) -> Self {
        self.db.items.insert(
            id,
            IconData {
                name: name.to_string(),
                icon: icon.to_string(),
                rank: 0,
            },
        );
        self
    }

    pub fn with_spell(mut self, id: i32, name: &str, icon: &str, rank: i32) -> Self {
        self.db.spells.insert(
            id,
            IconData {
                name: name.to_string(),
                icon: icon.to_string(),
                rank,
            },
        );
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn item_icon_data(&self, item_id: i32) -> Result<IconData> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.db
            .items
            .get(&item_id)
            .cloned()
            .ok_or(ActionError::NotFound { kind: "item", id: item_id })
    }

    async fn spell_icon_data(&self, spell_id: i32) -> Result<IconData> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.db
            .spells
            .get(&spell_id)
            .cloned()
            .ok_or(ActionError::NotFound { kind: "spell", id: spell_id })
    }
}
