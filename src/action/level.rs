use serde::{Deserialize, Serialize};

use crate::action::action_model::ActionId;

/// Item id gated to a character level window (inclusive bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionIdConfig {
    pub id: i32,
    #[serde(default)]
    pub min_level: Option<i32>,
    #[serde(default)]
    pub max_level: Option<i32>,
}

impl ActionIdConfig {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            min_level: None,
            max_level: None,
        }
    }

    pub fn with_min_level(mut self, level: i32) -> Self {
        self.min_level = Some(level);
        self
    }

    pub fn with_max_level(mut self, level: i32) -> Self {
        self.max_level = Some(level);
        self
    }

    pub fn allows(&self, level: i32) -> bool {
        self.min_level.is_none_or(|min| level >= min) && self.max_level.is_none_or(|max| level <= max)
    }
}

/// First item in `configs` usable at `level`.
pub fn matching_item_action_id(configs: &[ActionIdConfig], level: i32) -> Option<ActionId> {
    configs
        .iter()
        .find(|c| c.allows(level))
        .map(|c| ActionId::from_item_id(c.id, 0, 0))
}

/// Same as [`matching_item_action_id`] for spell ids.
pub fn matching_spell_action_id(configs: &[ActionIdConfig], level: i32) -> Option<ActionId> {
    configs
        .iter()
        .find(|c| c.allows(level))
        .map(|c| ActionId::from_spell_id(c.id, 0, 0))
}
