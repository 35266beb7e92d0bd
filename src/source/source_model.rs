use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::action::error::Result;

/// Display metadata for one item or spell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IconData {
    pub name: String,
    /// Icon label, e.g. `spell_arcane_blast`. Turned into a URL by the resolver.
    pub icon: String,
    /// Spell rank; zero for items and unranked spells.
    #[serde(default)]
    pub rank: i32,
}

/// Where item/spell names and icons come from. Implementations may hit the
/// network; failures propagate to whoever asked for the resolution.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn item_icon_data(&self, item_id: i32) -> Result<IconData>;

    async fn spell_icon_data(&self, spell_id: i32) -> Result<IconData>;
}
