use std::collections::HashSet;

use action_icons::action::{
    action_model::{ActionId, ActionIdKey, OtherAction, RawId, ResourceType, icon_url},
    error::ActionError,
    level::{ActionIdConfig, matching_item_action_id, matching_spell_action_id},
    links::{make_item_url, make_spell_url, wowhead_lang_prefix},
    log_parse::{find_all, from_log_string, to_log_string},
    overrides::{PetIcon, pet_icon_from_name, resource_icon_url},
};

// ============================================================================
// Equality
// ============================================================================

#[test]
fn equality_includes_tag() {
    let a = ActionId::from_spell_id(30451, 0, 1);
    let b = ActionId::from_spell_id(30451, 0, 2);

    assert!(!a.equals(&b));
    assert!(a.equals_ignoring_tag(&b));
    assert_ne!(a, b);
}

#[test]
fn equality_ignores_display_data() {
    let unfilled = ActionId::from_other_id(OtherAction::Attack, 1);
    let again = ActionId::from_other_id(OtherAction::Attack, 1);
    assert_eq!(unfilled, again);
    assert!(ActionId::from_spell_id(116, 3, 0).equals(&ActionId::from_spell_id(116, 0, 0)));
}

#[test]
fn random_suffix_distinguishes_items() {
    let a = ActionId::from_item_id(29035, 0, 5);
    let b = ActionId::from_item_id(29035, 0, 6);
    assert!(!a.equals_ignoring_tag(&b));
}

#[test]
fn items_and_spells_with_same_number_differ() {
    assert_ne!(ActionId::from_item_id(100, 0, 0), ActionId::from_spell_id(100, 0, 0));
}

#[test]
fn hash_agrees_with_equality() {
    let mut set = HashSet::new();
    set.insert(ActionId::from_spell_id(30451, 0, 2));
    set.insert(ActionId::from_spell_id(30451, 0, 2));
    set.insert(ActionId::from_spell_id(30451, 0, 3));
    assert_eq!(set.len(), 2);
}

#[test]
fn without_tag_clears_tag_only() {
    let id = ActionId::from_spell_id(30451, 0, 4);
    let untagged = id.without_tag();
    assert_eq!(untagged.tag(), 0);
    assert!(untagged.equals_ignoring_tag(&id));
}

// ============================================================================
// Empty sentinel
// ============================================================================

#[test]
fn empty_id_is_empty() {
    let empty = ActionId::from_empty();
    assert!(empty.is_empty());
    assert!(!empty.is_filled());
    assert!(!ActionId::from_item_id(1, 0, 0).is_empty());
    assert!(!ActionId::from_other_id(OtherAction::Wait, 0).is_empty());
}

#[test]
fn empty_id_has_no_canonical_string() {
    let err = ActionId::from_empty().to_id_string().unwrap_err();
    assert!(matches!(err, ActionError::EmptyActionId));
    assert_eq!(err.to_string(), "Empty action id!");
    assert!(ActionId::from_empty().to_id_string_ignoring_tag().is_err());
}

#[test]
fn empty_id_displays_placeholder() {
    assert_eq!(ActionId::from_empty().to_string(), "<empty action id>");
}

// ============================================================================
// Canonical strings
// ============================================================================

#[test]
fn canonical_strings() {
    assert_eq!(ActionId::from_item_id(29035, 0, 0).to_id_string().unwrap(), "item-29035");
    assert_eq!(ActionId::from_spell_id(30451, 0, 3).to_id_string().unwrap(), "spell-30451-3");
    assert_eq!(
        ActionId::from_spell_id(30451, 0, 3).to_id_string_ignoring_tag().unwrap(),
        "spell-30451"
    );
    assert_eq!(
        ActionId::from_other_id(OtherAction::Attack, 1).to_id_string().unwrap(),
        "other-3-1"
    );
}

#[test]
fn parse_canonical_string() {
    let id: ActionId = "spell-30451-3".parse().unwrap();
    assert_eq!(id, ActionId::from_spell_id(30451, 0, 3));

    let item: ActionId = "item-29035".parse().unwrap();
    assert_eq!(item.item_id(), 29035);
    assert_eq!(item.tag(), 0);

    let other: ActionId = "other-3-2".parse().unwrap();
    assert_eq!(other.other_id(), OtherAction::Attack);
    assert_eq!(other.tag(), 2);
}

#[test]
fn parse_negative_tag() {
    let id: ActionId = "spell-2825--1".parse().unwrap();
    assert_eq!(id.tag(), -1);
    assert_eq!(id.to_id_string().unwrap(), "spell-2825--1");
}

#[test]
fn parse_rejects_garbage() {
    for bad in ["", "spell", "spell-", "spell-abc", "spell-0", "potion-5", "other-999", "item-5-x"] {
        let result = bad.parse::<ActionId>();
        assert!(
            matches!(result, Err(ActionError::InvalidIdString(_))),
            "expected '{}' to be rejected",
            bad
        );
    }
}

#[test]
fn display_prefers_name() {
    let unfilled = ActionId::from_spell_id(30451, 0, 3);
    assert_eq!(unfilled.to_string(), "spell-30451-3");

    let attack = ActionId::from_other_id(OtherAction::Attack, 2);
    assert_eq!(attack.to_string(), "Attack (Off Hand)");
}

// ============================================================================
// Structured keys
// ============================================================================

#[test]
fn key_json_is_compact() {
    assert_eq!(ActionId::from_spell_id(37212, 0, 0).to_key_string(), r#"{"spellId":37212}"#);
    assert_eq!(ActionId::from_item_id(29035, 1, 0).to_key_string(), r#"{"itemId":29035,"tag":1}"#);
    assert_eq!(ActionId::from_spell_id(116, 2, 0).to_key_string(), r#"{"spellId":116,"rank":2}"#);
    assert_eq!(ActionId::from_other_id(OtherAction::Wait, 0).to_key_string(), r#"{"otherId":1}"#);
}

#[test]
fn key_rank_only_for_spells() {
    let key = ActionId::from_item_id(29035, 0, 0).to_key();
    assert_eq!(key.raw_id, Some(RawId::ItemId(29035)));
    assert_eq!(key.rank, 0);
}

#[test]
fn key_json_parses_back() {
    let key = ActionIdKey::from_json(r#"{"spellId":30451,"tag":3}"#).unwrap();
    assert_eq!(key.raw_id, Some(RawId::SpellId(30451)));
    assert_eq!(key.tag, 3);
    assert_eq!(ActionId::from_key(&key), ActionId::from_spell_id(30451, 0, 3));
}

#[test]
fn key_json_rejects_garbage() {
    let err = ActionIdKey::from_json("not json").unwrap_err();
    assert!(matches!(err, ActionError::InvalidKey { .. }));
}

#[test]
fn from_key_without_id_is_empty() {
    assert!(ActionId::from_key(&ActionIdKey::default()).is_empty());
}

// ============================================================================
// Log strings
// ============================================================================

#[test]
fn parse_log_tokens() {
    assert_eq!(from_log_string("{SpellID: 30451, Tag: 3}"), ActionId::from_spell_id(30451, 0, 3));
    assert_eq!(from_log_string("{ItemID: 29035}"), ActionId::from_item_id(29035, 0, 0));
    assert_eq!(
        from_log_string("{OtherID: 3, Tag: 1}"),
        ActionId::from_other_id(OtherAction::Attack, 1)
    );
    assert_eq!(from_log_string("{SpellID: 2825, Tag: -1}").tag(), -1);
}

#[test]
fn parse_log_token_inside_line() {
    let id = from_log_string("[12.50] Player cast {SpellID: 116} on Target");
    assert_eq!(id.spell_id(), 116);
}

#[test]
fn unparseable_log_yields_empty() {
    assert!(from_log_string("no ids here").is_empty());
    assert!(from_log_string("{SpellID: }").is_empty());
    assert!(from_log_string("{SpellID: 99999999999}").is_empty());
}

#[test]
fn find_all_reports_offsets() {
    let text = "cast {SpellID: 116} then {ItemID: 22838, Tag: 1}";
    let matches = find_all(text);

    assert_eq!(matches.len(), 2);
    assert_eq!(&text[matches[0].start..matches[0].start + matches[0].len], "{SpellID: 116}");
    assert_eq!(matches[1].action_id, ActionId::from_item_id(22838, 1, 0));
    assert_eq!(matches[1].start + matches[1].len, text.len());
}

#[test]
fn find_all_skips_unrelated_braces() {
    let matches = find_all("{not an id} {SpellID: 1}");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start, 12);
}

#[test]
fn find_all_skips_out_of_range_tokens() {
    let text = "{SpellID: 99999999999} then {SpellID: 116, Tag: 99999999999} then {ItemID: 7}";
    let matches = find_all(text);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].action_id, ActionId::from_item_id(7, 0, 0));
    assert_eq!(&text[matches[0].start..], "{ItemID: 7}");
}

#[test]
fn parse_log_tag_extremes() {
    assert_eq!(from_log_string("{SpellID: 1, Tag: 2147483647}").tag(), i32::MAX);
    assert_eq!(from_log_string("{SpellID: 1, Tag: -2147483648}").tag(), i32::MIN);
}

#[test]
fn log_string_round_trip() {
    for id in [
        ActionId::from_spell_id(30451, 0, 3),
        ActionId::from_item_id(29035, 0, 0),
        ActionId::from_other_id(OtherAction::ManaRegen, 2),
        ActionId::from_spell_id(2825, 0, -1),
    ] {
        let log = to_log_string(&id).unwrap();
        assert_eq!(from_log_string(&log), id, "round trip through '{}'", log);
    }
    assert_eq!(to_log_string(&ActionId::from_empty()), None);
}

// ============================================================================
// Other actions, pets, resources
// ============================================================================

#[test]
fn other_actions_carry_static_display() {
    let tick = ActionId::from_other_id(OtherAction::ManaRegen, 1);
    assert_eq!(tick.name(), "Mana Tick (Casting)");
    assert_eq!(tick.base_name(), "Mana Tick");
    assert_eq!(tick.icon_url(), resource_icon_url(ResourceType::Mana));
    assert!(tick.is_filled());

    let wait = ActionId::from_other_id(OtherAction::Wait, 0);
    assert_eq!(wait.icon_url(), icon_url("inv_misc_pocketwatch_01"));
}

#[test]
fn other_action_codes_round_trip() {
    for kind in OtherAction::ALL {
        assert_eq!(OtherAction::from_code(kind.code()), Some(kind));
    }
    assert_eq!(OtherAction::from_code(-4), None);
}

#[test]
fn unfilled_ranked_spell_stays_unfilled() {
    let id = ActionId::from_spell_id(116, 3, 0);
    assert_eq!(id.rank(), 3);
    assert_eq!(id.name(), "");
    assert!(!id.is_filled());
}

#[test]
fn pet_with_summon_spell_maps_to_spell() {
    assert_eq!(ActionId::from_pet_name("Water Elemental"), ActionId::from_spell_id(31687, 0, 0));
    assert_eq!(ActionId::from_pet_name("Gnomish Flame Turret"), ActionId::from_item_id(23841, 0, 0));
}

#[test]
fn other_pets_use_pet_icon() {
    let wolf = ActionId::from_pet_name("Wolf");
    assert_eq!(wolf.other_id(), OtherAction::Pet);
    assert_eq!(wolf.name(), "Wolf");
    assert!(wolf.icon_url().ends_with("ability_hunter_pet_wolf.jpg"));

    let unknown = ActionId::from_pet_name("Mechanical Squirrel");
    assert_eq!(unknown.name(), "Mechanical Squirrel");
    assert_eq!(unknown.icon_url(), "");
}

#[test]
fn pet_icon_lookup() {
    assert_eq!(
        pet_icon_from_name("Shadowfiend"),
        Some(PetIcon::Action(ActionId::from_spell_id(401977, 0, 0)))
    );
    assert!(matches!(pet_icon_from_name("Imp"), Some(PetIcon::Url(url)) if url.contains("summonimp")));
    assert_eq!(pet_icon_from_name("Nobody"), None);
}

#[test]
fn any_id_picks_meaningful_field() {
    assert_eq!(ActionId::from_item_id(29035, 0, 0).any_id(), 29035);
    assert_eq!(ActionId::from_spell_id(116, 0, 0).any_id(), 116);
    assert_eq!(ActionId::from_other_id(OtherAction::Move, 0).any_id(), OtherAction::Move.code());
}

// ============================================================================
// Links and level-gated configs
// ============================================================================

#[test]
fn wowhead_links() {
    assert_eq!(make_spell_url(30451, ""), "https://wowhead.com/classic/spell=30451");
    assert_eq!(
        make_item_url(29035, 7, "de/"),
        "https://wowhead.com/classic/de/item=29035?lvl=60?rand=7"
    );
    assert_eq!(wowhead_lang_prefix("en"), "");
    assert_eq!(wowhead_lang_prefix("fr"), "fr/");

    assert_eq!(
        ActionId::from_spell_id(116, 0, 0).href("").as_deref(),
        Some("https://wowhead.com/classic/spell=116")
    );
    assert_eq!(ActionId::from_other_id(OtherAction::Wait, 0).href(""), None);
}

#[test]
fn level_gated_ids() {
    let configs = [
        ActionIdConfig::new(13444).with_min_level(49),
        ActionIdConfig::new(3385).with_min_level(22).with_max_level(48),
        ActionIdConfig::new(2455).with_max_level(21),
    ];

    assert_eq!(matching_item_action_id(&configs, 60), Some(ActionId::from_item_id(13444, 0, 0)));
    assert_eq!(matching_item_action_id(&configs, 48), Some(ActionId::from_item_id(3385, 0, 0)));
    assert_eq!(matching_item_action_id(&configs, 10), Some(ActionId::from_item_id(2455, 0, 0)));
    assert_eq!(
        matching_spell_action_id(&configs[..1], 60),
        Some(ActionId::from_spell_id(13444, 0, 0))
    );
    assert_eq!(matching_item_action_id(&configs[..1], 20), None);
}
