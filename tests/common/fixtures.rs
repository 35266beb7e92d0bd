use std::sync::Arc;

use action_icons::{
    action::action_model::icon_url, resolve::resolver::ActionResolver,
    source::static_db::StaticDataSource,
};

/// Small icon database covering the ids used across the tests.
pub fn sample_source() -> StaticDataSource {
    StaticDataSource::default()
        .with_spell(30451, "Arcane Blast", "spell_arcane_blast", 0)
        .with_spell(37212, "Improved Wrath of Air Totem", "spell_nature_slowingtotem", 0)
        .with_spell(116, "Frostbolt", "spell_frost_frostbolt02", 1)
        .with_spell(2825, "Bloodlust", "spell_nature_bloodlust", 0)
        .with_spell(10060, "Power Infusion", "spell_holy_powerinfusion", 0)
        .with_spell(12042, "Arcane Power", "spell_nature_lightning", 0)
        .with_spell(12043, "Presence of Mind", "spell_nature_enchantarmor", 0)
        .with_item(29035, "Cyclone Faceguard", "inv_helmet_15")
        .with_item(22838, "Haste Potion", "inv_potion_108")
}

/// Resolver over [`sample_source`], plus a handle for counting lookups.
pub fn sample_resolver() -> (ActionResolver, Arc<StaticDataSource>) {
    let source = Arc::new(sample_source());
    (ActionResolver::new(source.clone()), source)
}

pub fn large_icon(label: &str) -> String {
    icon_url(label)
}
