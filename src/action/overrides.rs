use std::collections::HashMap;
use std::sync::LazyLock;

use crate::action::action_model::{ActionId, ResourceType};

const MEDIUM_ICON_BASE_URL: &str = "https://wow.zamimg.com/images/wow/icons/medium";

pub const DEFAULT_TARGET_ICON: &str =
    "https://wow.zamimg.com/images/wow/icons/large/spell_shadow_metamorphosis.jpg";

// ============================================================================
// Icon overrides
// ============================================================================

/// Some items/spells have odd icons; these show another id's icon instead.
/// Keyed by the structured key string, so the tag is part of the match.
static ICON_OVERRIDES: LazyLock<HashMap<String, ActionId>> = LazyLock::new(|| {
    [
        // Improved Wrath of Air Totem
        (ActionId::from_spell_id(37212, 0, 0), ActionId::from_item_id(29035, 0, 0)),
        // Improved Strength of Earth Totem
        (ActionId::from_spell_id(37223, 0, 0), ActionId::from_item_id(29040, 0, 0)),
        // Serpent-Coil Braid
        (ActionId::from_spell_id(37447, 0, 0), ActionId::from_item_id(30720, 0, 0)),
        // Robes of Tirisfal (4pc bonus)
        (ActionId::from_spell_id(37443, 0, 0), ActionId::from_item_id(30196, 0, 0)),
    ]
    .into_iter()
    .map(|(from, to)| (from.to_key_string(), to))
    .collect()
});

pub fn icon_override(id: &ActionId) -> Option<&'static ActionId> {
    ICON_OVERRIDES.get(&id.to_key_string())
}

// ============================================================================
// Pets
// ============================================================================

/// Pets whose icon comes from the item or spell that summons them.
pub fn pet_action_id(pet_name: &str) -> Option<ActionId> {
    let id = match pet_name {
        "Gnomish Flame Turret" => ActionId::from_item_id(23841, 0, 0),
        "Mirror Image" => ActionId::from_spell_id(55342, 0, 0),
        "Water Elemental" => ActionId::from_spell_id(31687, 0, 0),
        "Greater Fire Elemental" => ActionId::from_spell_id(2894, 0, 0),
        "Shadowfiend" => ActionId::from_spell_id(401977, 0, 0),
        "Homunculi" => ActionId::from_spell_id(402799, 0, 0),
        "Spirit Wolf 1" | "Spirit Wolf 2" => ActionId::from_spell_id(51533, 0, 0),
        "Rune Weapon" => ActionId::from_spell_id(49028, 0, 0),
        "Bloodworm" => ActionId::from_spell_id(50452, 0, 0),
        "Gargoyle" => ActionId::from_spell_id(49206, 0, 0),
        "Ghoul" => ActionId::from_spell_id(46584, 0, 0),
        "Army of the Dead" => ActionId::from_spell_id(42650, 0, 0),
        "Valkyr" => ActionId::from_spell_id(71844, 0, 0),
        _ => return None,
    };
    Some(id)
}

static PET_ICONS: LazyLock<HashMap<&'static str, String>> = LazyLock::new(|| {
    let medium = |label: &str| format!("{}/{}.jpg", MEDIUM_ICON_BASE_URL, label);
    let large = |label: &str| crate::action::action_model::icon_url(label);

    HashMap::from([
        ("Bat", medium("ability_hunter_pet_bat")),
        ("Bear", medium("ability_hunter_pet_bear")),
        ("Bird of Prey", medium("ability_hunter_pet_owl")),
        ("Boar", medium("ability_hunter_pet_boar")),
        ("Carrion Bird", medium("ability_hunter_pet_vulture")),
        ("Cat", medium("ability_hunter_pet_cat")),
        ("Chimaera", medium("ability_hunter_pet_chimera")),
        ("Core Hound", medium("ability_hunter_pet_corehound")),
        ("Crab", medium("ability_hunter_pet_crab")),
        ("Crocolisk", medium("ability_hunter_pet_crocolisk")),
        ("Devilsaur", medium("ability_hunter_pet_devilsaur")),
        ("Dragonhawk", medium("ability_hunter_pet_dragonhawk")),
        ("Felguard", large("spell_shadow_summonfelguard")),
        ("Felhunter", large("spell_shadow_summonfelhunter")),
        ("Infernal", large("spell_shadow_summoninfernal")),
        ("Gorilla", medium("ability_hunter_pet_gorilla")),
        ("Hyena", medium("ability_hunter_pet_hyena")),
        ("Imp", large("spell_shadow_summonimp")),
        ("Mirror Image", large("spell_magic_lesserinvisibilty")),
        ("Moth", medium("ability_hunter_pet_moth")),
        ("Nether Ray", medium("ability_hunter_pet_netherray")),
        ("Owl", medium("ability_hunter_pet_owl")),
        ("Raptor", medium("ability_hunter_pet_raptor")),
        ("Ravager", medium("ability_hunter_pet_ravager")),
        ("Rhino", medium("ability_hunter_pet_rhino")),
        ("Scorpid", medium("ability_hunter_pet_scorpid")),
        ("Serpent", medium("spell_nature_guardianward")),
        ("Silithid", medium("ability_hunter_pet_silithid")),
        ("Spider", medium("ability_hunter_pet_spider")),
        ("Spirit Beast", medium("ability_druid_primalprecision")),
        ("Spore Bat", medium("ability_hunter_pet_sporebat")),
        ("Succubus", large("spell_shadow_summonsuccubus")),
        ("Tallstrider", medium("ability_hunter_pet_tallstrider")),
        ("Turtle", medium("ability_hunter_pet_turtle")),
        ("Warp Stalker", medium("ability_hunter_pet_warpstalker")),
        ("Wasp", medium("ability_hunter_pet_wasp")),
        ("Wind Serpent", medium("ability_hunter_pet_windserpent")),
        ("Wolf", medium("ability_hunter_pet_wolf")),
        ("Worm", medium("ability_hunter_pet_worm")),
    ])
});

pub fn pet_icon_url(pet_name: &str) -> Option<&'static str> {
    PET_ICONS.get(pet_name).map(String::as_str)
}

/// What a pet's icon should come from.
#[derive(Debug, Clone, PartialEq)]
pub enum PetIcon {
    Action(ActionId),
    Url(&'static str),
}

pub fn pet_icon_from_name(pet_name: &str) -> Option<PetIcon> {
    pet_action_id(pet_name)
        .map(PetIcon::Action)
        .or_else(|| pet_icon_url(pet_name).map(PetIcon::Url))
}

// ============================================================================
// Resources
// ============================================================================

pub fn resource_icon_url(resource: ResourceType) -> &'static str {
    match resource {
        ResourceType::None => "",
        ResourceType::Health => "https://wow.zamimg.com/images/wow/icons/medium/inv_elemental_mote_life01.jpg",
        ResourceType::Mana => "https://wow.zamimg.com/images/wow/icons/medium/inv_elemental_mote_mana.jpg",
        ResourceType::Energy => "https://wow.zamimg.com/images/wow/icons/medium/spell_shadow_shadowworddominate.jpg",
        ResourceType::Rage => "https://wow.zamimg.com/images/wow/icons/medium/spell_misc_emotionangry.jpg",
        ResourceType::ComboPoints => "https://wow.zamimg.com/images/wow/icons/medium/inv_mace_2h_pvp410_c_01.jpg",
        ResourceType::Focus => "https://wow.zamimg.com/images/wow/icons/medium/ability_hunter_focusfire.jpg",
    }
}
