use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action::error::{ActionError, Result};
use crate::action::overrides::{pet_action_id, pet_icon_url, resource_icon_url};

const ICON_BASE_URL: &str = "https://wow.zamimg.com/images/wow/icons/large";

// ============================================================================
// Other actions and resources
// ============================================================================

/// Game actions that are neither items nor spells. Display data for these is
/// known up front, so they never need a data-source lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OtherAction {
    #[default]
    None,
    Wait,
    ManaRegen,
    Attack,
    Shoot,
    EnergyRegen,
    FocusRegen,
    Pet,
    Refund,
    DamageTaken,
    ManaGain,
    RageGain,
    HealingModel,
    Potion,
    Move,
}

impl OtherAction {
    pub const ALL: [OtherAction; 15] = [
        OtherAction::None,
        OtherAction::Wait,
        OtherAction::ManaRegen,
        OtherAction::Attack,
        OtherAction::Shoot,
        OtherAction::EnergyRegen,
        OtherAction::FocusRegen,
        OtherAction::Pet,
        OtherAction::Refund,
        OtherAction::DamageTaken,
        OtherAction::ManaGain,
        OtherAction::RageGain,
        OtherAction::HealingModel,
        OtherAction::Potion,
        OtherAction::Move,
    ];

    /// Numeric code used in log lines, canonical strings and keys.
    pub fn code(self) -> i32 {
        match self {
            OtherAction::None => 0,
            OtherAction::Wait => 1,
            OtherAction::ManaRegen => 2,
            OtherAction::Attack => 3,
            OtherAction::Shoot => 4,
            OtherAction::EnergyRegen => 5,
            OtherAction::FocusRegen => 6,
            OtherAction::Pet => 7,
            OtherAction::Refund => 8,
            OtherAction::DamageTaken => 9,
            OtherAction::ManaGain => 10,
            OtherAction::RageGain => 11,
            OtherAction::HealingModel => 12,
            OtherAction::Potion => 13,
            OtherAction::Move => 14,
        }
    }

    pub fn from_code(code: i32) -> Option<OtherAction> {
        OtherAction::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Static `(name, icon)` for this kind, with tag annotations applied.
    /// `None` and `Pet` have no static display data.
    fn display(self, tag: i32) -> Option<(String, String)> {
        let (name, icon) = match self {
            OtherAction::None | OtherAction::Pet => return None,
            OtherAction::Wait => ("Wait", icon_url("inv_misc_pocketwatch_01")),
            OtherAction::ManaRegen => {
                let name = match tag {
                    1 => "Mana Tick (Casting)",
                    2 => "Mana Tick (Not Casting)",
                    _ => "Mana Tick",
                };
                (name, resource_icon_url(ResourceType::Mana).to_string())
            }
            OtherAction::EnergyRegen => ("Energy Tick", resource_icon_url(ResourceType::Energy).to_string()),
            OtherAction::FocusRegen => ("Focus Tick", resource_icon_url(ResourceType::Focus).to_string()),
            OtherAction::ManaGain => ("Mana Gain", resource_icon_url(ResourceType::Mana).to_string()),
            OtherAction::RageGain => ("Rage Gain", resource_icon_url(ResourceType::Rage).to_string()),
            OtherAction::Attack => {
                let name = match tag {
                    1 => "Attack (Main Hand)",
                    2 => "Attack (Off Hand)",
                    _ => "Attack",
                };
                (name, icon_url("inv_sword_04"))
            }
            OtherAction::Shoot => ("Shoot", icon_url("ability_marksmanship")),
            OtherAction::Move => ("Move", icon_url("inv_boots_02")),
            OtherAction::Refund => ("Refund", icon_url("inv_misc_coin_01")),
            OtherAction::DamageTaken => ("Damage Taken", icon_url("inv_sword_04")),
            OtherAction::HealingModel => ("Incoming HPS", icon_url("spell_holy_renew")),
            OtherAction::Potion => ("Potion", icon_url("inv_alchemy_elixir_04")),
        };
        Some((name.to_string(), icon))
    }

    /// Untagged display name.
    fn base_name(self) -> &'static str {
        match self {
            OtherAction::None | OtherAction::Pet => "",
            OtherAction::Wait => "Wait",
            OtherAction::ManaRegen => "Mana Tick",
            OtherAction::EnergyRegen => "Energy Tick",
            OtherAction::FocusRegen => "Focus Tick",
            OtherAction::ManaGain => "Mana Gain",
            OtherAction::RageGain => "Rage Gain",
            OtherAction::Attack => "Attack",
            OtherAction::Shoot => "Shoot",
            OtherAction::Move => "Move",
            OtherAction::Refund => "Refund",
            OtherAction::DamageTaken => "Damage Taken",
            OtherAction::HealingModel => "Incoming HPS",
            OtherAction::Potion => "Potion",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    None,
    Health,
    Mana,
    Energy,
    Rage,
    ComboPoints,
    Focus,
}

/// Full icon URL for a data-source icon label.
pub fn icon_url(label: &str) -> String {
    format!("{}/{}.jpg", ICON_BASE_URL, label)
}

// ============================================================================
// Structured key
// ============================================================================

/// Which numeric id field is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RawId {
    ItemId(i32),
    SpellId(i32),
    OtherId(i32),
}

/// Structured form of an [`ActionId`], serialized as compact JSON such as
/// `{"spellId":37212}` or `{"itemId":29035,"tag":1}`. Zero tag and rank are
/// omitted. Used as override-table and cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ActionIdKey {
    #[serde(flatten)]
    pub raw_id: Option<RawId>,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub tag: i32,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub rank: i32,
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}

impl ActionIdKey {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| ActionError::InvalidKey {
            key: json.to_string(),
            source,
        })
    }
}

// ============================================================================
// ActionId
// ============================================================================

/// Uniquely identifies an item, spell or other game action. Immutable: filling
/// in the name and icon produces a new value.
#[derive(Debug, Clone, Default)]
pub struct ActionId {
    item_id: i32,
    random_suffix_id: i32,
    spell_id: i32,
    other_id: OtherAction,
    tag: i32,
    rank: i32,

    base_name: String,
    name: String,
    icon_url: String,
}

impl ActionId {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn build(
        item_id: i32,
        spell_id: i32,
        other_id: OtherAction,
        tag: i32,
        base_name: String,
        name: String,
        icon_url: String,
        rank: i32,
        random_suffix_id: i32,
    ) -> ActionId {
        let (base_name, mut name, icon_url) = match other_id.display(tag) {
            Some((static_name, static_icon)) => {
                (other_id.base_name().to_string(), static_name, static_icon)
            }
            None => {
                let name = if name.is_empty() { base_name.clone() } else { name };
                (base_name, name, icon_url)
            }
        };

        // Unfilled ids keep an empty name so they still read as unresolved.
        if rank != 0 && !name.is_empty() {
            name.push_str(&format!(" (Rank {})", rank));
        }

        ActionId {
            item_id,
            random_suffix_id,
            spell_id,
            other_id,
            tag,
            rank,
            base_name,
            name,
            icon_url,
        }
    }

    pub fn from_empty() -> ActionId {
        ActionId::default()
    }

    pub fn from_item_id(item_id: i32, tag: i32, random_suffix_id: i32) -> ActionId {
        ActionId::build(item_id, 0, OtherAction::None, tag, String::new(), String::new(), String::new(), 0, random_suffix_id)
    }

    pub fn from_spell_id(spell_id: i32, rank: i32, tag: i32) -> ActionId {
        ActionId::build(0, spell_id, OtherAction::None, tag, String::new(), String::new(), String::new(), rank, 0)
    }

    pub fn from_other_id(other_id: OtherAction, tag: i32) -> ActionId {
        ActionId::build(0, 0, other_id, tag, String::new(), String::new(), String::new(), 0, 0)
    }

    /// Pets with a known summoning item or spell map to that id; any other
    /// pet becomes an `OtherAction::Pet` id carrying the pet name.
    pub fn from_pet_name(pet_name: &str) -> ActionId {
        if let Some(id) = pet_action_id(pet_name) {
            return id;
        }
        ActionId::build(
            0,
            0,
            OtherAction::Pet,
            0,
            pet_name.to_string(),
            pet_name.to_string(),
            pet_icon_url(pet_name).unwrap_or_default().to_string(),
            0,
            0,
        )
    }

    pub fn from_key(key: &ActionIdKey) -> ActionId {
        match key.raw_id {
            Some(RawId::SpellId(id)) => ActionId::from_spell_id(id, key.rank, key.tag),
            Some(RawId::ItemId(id)) => ActionId::from_item_id(id, key.tag, 0),
            Some(RawId::OtherId(code)) => match OtherAction::from_code(code) {
                Some(kind) if kind != OtherAction::None => ActionId::from_other_id(kind, key.tag),
                _ => ActionId::from_empty(),
            },
            None => ActionId::from_empty(),
        }
    }

    // ---- Accessors ----

    pub fn item_id(&self) -> i32 {
        self.item_id
    }

    pub fn random_suffix_id(&self) -> i32 {
        self.random_suffix_id
    }

    pub fn spell_id(&self) -> i32 {
        self.spell_id
    }

    pub fn other_id(&self) -> OtherAction {
        self.other_id
    }

    pub fn tag(&self) -> i32 {
        self.tag
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// Name without any tag annotations.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    /// True for the all-zero sentinel.
    pub fn is_empty(&self) -> bool {
        self.item_id == 0 && self.spell_id == 0 && self.other_id == OtherAction::None
    }

    pub fn is_filled(&self) -> bool {
        !self.name.is_empty() || !self.icon_url.is_empty()
    }

    pub fn any_id(&self) -> i32 {
        if self.item_id != 0 {
            self.item_id
        } else if self.spell_id != 0 {
            self.spell_id
        } else {
            self.other_id.code()
        }
    }

    // ---- Equality ----

    pub fn equals(&self, other: &ActionId) -> bool {
        self.equals_ignoring_tag(other) && self.tag == other.tag
    }

    pub fn equals_ignoring_tag(&self, other: &ActionId) -> bool {
        self.item_id == other.item_id
            && self.random_suffix_id == other.random_suffix_id
            && self.spell_id == other.spell_id
            && self.other_id == other.other_id
    }

    pub fn without_tag(&self) -> ActionId {
        ActionId::build(
            self.item_id,
            self.spell_id,
            self.other_id,
            0,
            self.base_name.clone(),
            self.base_name.clone(),
            self.icon_url.clone(),
            self.rank,
            self.random_suffix_id,
        )
    }

    /// Copy of this id carrying resolved display data.
    pub(crate) fn with_display(&self, base_name: String, name: String, icon_url: String, rank: i32) -> ActionId {
        ActionId::build(
            self.item_id,
            self.spell_id,
            self.other_id,
            self.tag,
            base_name,
            name,
            icon_url,
            rank,
            self.random_suffix_id,
        )
    }

    // ---- Serialization ----

    /// `item-N`, `spell-N` or `other-N`, plus `-T` for a nonzero tag.
    pub fn to_id_string(&self) -> Result<String> {
        let mut s = self.to_id_string_ignoring_tag()?;
        if self.tag != 0 {
            s.push_str(&format!("-{}", self.tag));
        }
        Ok(s)
    }

    pub fn to_id_string_ignoring_tag(&self) -> Result<String> {
        if self.item_id != 0 {
            Ok(format!("item-{}", self.item_id))
        } else if self.spell_id != 0 {
            Ok(format!("spell-{}", self.spell_id))
        } else if self.other_id != OtherAction::None {
            Ok(format!("other-{}", self.other_id.code()))
        } else {
            Err(ActionError::EmptyActionId)
        }
    }

    pub fn to_key(&self) -> ActionIdKey {
        let mut key = ActionIdKey {
            raw_id: None,
            tag: self.tag,
            rank: 0,
        };
        if self.item_id != 0 {
            key.raw_id = Some(RawId::ItemId(self.item_id));
        } else if self.spell_id != 0 {
            key.raw_id = Some(RawId::SpellId(self.spell_id));
            key.rank = self.rank;
        } else if self.other_id != OtherAction::None {
            key.raw_id = Some(RawId::OtherId(self.other_id.code()));
        }
        key
    }

    pub fn to_key_string(&self) -> String {
        self.to_key().to_json()
    }
}

impl PartialEq for ActionId {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for ActionId {}

impl Hash for ActionId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item_id.hash(state);
        self.random_suffix_id.hash(state);
        self.spell_id.hash(state);
        self.other_id.hash(state);
        self.tag.hash(state);
    }
}

impl fmt::Display for ActionId {
    /// Display name when filled, canonical string otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            return write!(f, "{}", self.name);
        }
        match self.to_id_string() {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "<empty action id>"),
        }
    }
}

impl FromStr for ActionId {
    type Err = ActionError;

    /// Parses the canonical `kind-id[-tag]` form.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ActionError::InvalidIdString(s.to_string());

        let (kind, rest) = s.split_once('-').ok_or_else(invalid)?;
        let (id_str, tag_str) = match rest.split_once('-') {
            Some((id, tag)) => (id, Some(tag)),
            None => (rest, None),
        };

        let id: i32 = id_str.parse().map_err(|_| invalid())?;
        let tag: i32 = match tag_str {
            Some(t) => t.parse().map_err(|_| invalid())?,
            None => 0,
        };
        if id <= 0 {
            return Err(invalid());
        }

        match kind {
            "item" => Ok(ActionId::from_item_id(id, tag, 0)),
            "spell" => Ok(ActionId::from_spell_id(id, 0, tag)),
            "other" => {
                let kind = OtherAction::from_code(id).ok_or_else(invalid)?;
                Ok(ActionId::from_other_id(kind, tag))
            }
            _ => Err(invalid()),
        }
    }
}
