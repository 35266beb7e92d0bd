use crate::action::action_model::ActionId;

pub const MAX_CHARACTER_LEVEL: i32 = 60;

const WOWHEAD_BASE_URL: &str = "https://wowhead.com/classic";

pub fn make_item_url(id: i32, random_suffix_id: i32, lang_prefix: &str) -> String {
    format!(
        "{}/{}item={}?lvl={}?rand={}",
        WOWHEAD_BASE_URL, lang_prefix, id, MAX_CHARACTER_LEVEL, random_suffix_id
    )
}

pub fn make_spell_url(id: i32, lang_prefix: &str) -> String {
    format!("{}/{}spell={}", WOWHEAD_BASE_URL, lang_prefix, id)
}

pub fn make_quest_url(id: i32, lang_prefix: &str) -> String {
    format!("{}/{}quest={}", WOWHEAD_BASE_URL, lang_prefix, id)
}

pub fn make_npc_url(id: i32, lang_prefix: &str) -> String {
    format!("{}/{}npc={}", WOWHEAD_BASE_URL, lang_prefix, id)
}

pub fn make_zone_url(id: i32, lang_prefix: &str) -> String {
    format!("{}/{}zone={}", WOWHEAD_BASE_URL, lang_prefix, id)
}

/// Language prefix path segment for wowhead links, e.g. `"de/"`.
/// English uses no prefix.
pub fn wowhead_lang_prefix(lang: &str) -> String {
    match lang {
        "" | "en" => String::new(),
        other => format!("{}/", other),
    }
}

impl ActionId {
    /// Wowhead link for items and spells; other actions have none.
    pub fn href(&self, lang_prefix: &str) -> Option<String> {
        if self.item_id() != 0 {
            Some(make_item_url(self.item_id(), self.random_suffix_id(), lang_prefix))
        } else if self.spell_id() != 0 {
            Some(make_spell_url(self.spell_id(), lang_prefix))
        } else {
            None
        }
    }
}
