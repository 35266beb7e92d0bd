//! Tag-driven display-name disambiguation.
//!
//! The same spell or item id can be logged with different tags (stack counts,
//! DoT vs explosion, main hand vs off hand, who cast a targeted buff, ...).
//! This table maps a base name to the rule that turns a tag into a suffix.

/// How a tag modifies a base name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TagRule {
    /// Exact tag values mapped to a suffix; other tags leave the name alone.
    Suffixes(&'static [(i32, &'static str)]),
    /// Tags are internal only and never shown.
    Untagged,
    /// Arcane Blast style stack counter, tag 1 meaning zero stacks.
    Stacks,
    /// Nonzero tag shown as a percentage of `tag * factor`.
    Percent(i32),
    /// Nonzero tag replaces the whole name.
    RenameWhenTagged(&'static str),
    /// Positive tag shown as a tick number.
    Ticks,
    /// Exact suffixes first, then any other nonzero tag as `"<tag> <unit>"`.
    Count {
        fixed: &'static [(i32, &'static str)],
        unit: &'static str,
    },
    /// `(self)` when the tag equals the viewer index.
    SelfWhenViewer,
    /// Targeted buff whose tag is the caster's raid index, or -1 for a raid buff.
    SourcePlayer,
}

const MAIN_OFF_HAND: &[(i32, &str)] = &[(1, "Main Hand"), (2, "Off Hand")];
const APPLICATION_DOT: &[(i32, &str)] = &[(1, "Application"), (2, "DoT")];
const POISON: &[(i32, &str)] = &[(1, "Shiv"), (2, "Deadly Brew"), (100, "Tick")];
const QUEUE: &[(i32, &str)] = &[(1, "Queue")];

pub static NAME_RULES: &[(&[&str], TagRule)] = &[
    (&["Arcane Blast"], TagRule::Stacks),
    // Missile hits and Balefire's aura share the cast's id; the tag only splits metrics.
    (&["Arcane Missiles", "Balefire Bolt"], TagRule::Untagged),
    (&["Berserking"], TagRule::Percent(5)),
    (&["Explosive Trap"], TagRule::Suffixes(&[(1, "Weaving")])),
    (&["Hot Streak"], TagRule::RenameWhenTagged("Heating Up")),
    (&["Living Bomb", "Seed of Corruption"], TagRule::Suffixes(&[(0, "DoT"), (1, "Explosion")])),
    (&["Fireball", "Frostfire Bolt", "Pyroblast"], TagRule::Suffixes(&[(1, "DoT")])),
    (&["Evocation", "Mind Flay", "Mind Sear"], TagRule::Ticks),
    (&["Shattering Throw"], TagRule::SelfWhenViewer),
    (
        &["Envenom", "Eviscerate", "Expose Armor", "Rupture", "Slice and Dice"],
        TagRule::Count { fixed: &[], unit: "CP" },
    ),
    (
        &[
            "Deadly Poison",
            "Deadly Poison II",
            "Deadly Poison III",
            "Deadly Poison IV",
            "Deadly Poison V",
            "Instant Poison",
            "Instant Poison II",
            "Instant Poison III",
            "Instant Poison IV",
            "Instant Poison V",
            "Instant Poison VI",
            "Wound Poison",
        ],
        TagRule::Suffixes(POISON),
    ),
    (&["Saber Slash"], TagRule::Suffixes(&[(100, "Tick")])),
    (&["Mutilate", "Stormstrike"], TagRule::Suffixes(MAIN_OFF_HAND)),
    (
        &["Chain Lightning", "Lava Burst", "Lightning Bolt"],
        TagRule::Count { fixed: &[(6, "Overload")], unit: "MW" },
    ),
    (&["Holy Shield"], TagRule::Suffixes(&[(1, "Proc")])),
    (&["Righteous Vengeance", "Holy Vengeance"], TagRule::Suffixes(APPLICATION_DOT)),
    (
        &[
            "Bloodlust",
            "Ferocious Inspiration",
            "Innervate",
            "Focus Magic",
            "Mana Tide Totem",
            "Power Infusion",
        ],
        TagRule::SourcePlayer,
    ),
    (&["Darkmoon Card: Crusade"], TagRule::Suffixes(&[(1, "Melee"), (2, "Spell")])),
    (&["Lightning Speed", "Windfury Weapon", "Berserk"], TagRule::Suffixes(MAIN_OFF_HAND)),
    (&["Battle Shout"], TagRule::Suffixes(&[(1, "Snapshot")])),
    (&["Heroic Strike", "Cleave", "Maul"], TagRule::Suffixes(QUEUE)),
    (&["Raptor Strike"], TagRule::Suffixes(&[(0, "Main Hand"), (1, "Queue"), (2, "Off Hand")])),
    (&["Carve", "Whirlwind"], TagRule::Suffixes(&[(1, "OH")])),
    (&["Thunderfury"], TagRule::Suffixes(&[(1, "ST"), (2, "MT")])),
];

pub fn rule_for(base_name: &str) -> Option<TagRule> {
    NAME_RULES
        .iter()
        .find(|(names, _)| names.contains(&base_name))
        .map(|(_, rule)| *rule)
}

fn lookup(table: &[(i32, &'static str)], tag: i32) -> Option<&'static str> {
    table.iter().find(|(t, _)| *t == tag).map(|(_, s)| *s)
}

impl TagRule {
    /// Suffix (without parentheses) for `tag`, or a replacement name.
    fn apply(self, tag: i32, viewer_index: Option<i32>) -> Annotation {
        match self {
            TagRule::Suffixes(table) => lookup(table, tag).map_or(Annotation::Keep, |s| Annotation::Suffix(s.to_string())),
            TagRule::Untagged => Annotation::Keep,
            TagRule::Stacks => match tag {
                1 => Annotation::Suffix("No Stacks".to_string()),
                2 => Annotation::Suffix("1 Stack".to_string()),
                t if t > 2 => Annotation::Suffix(format!("{} Stacks", i64::from(t) - 1)),
                _ => Annotation::Keep,
            },
            TagRule::Percent(factor) if tag != 0 => Annotation::Suffix(format!("{}%", i64::from(tag) * i64::from(factor))),
            TagRule::Percent(_) => Annotation::Keep,
            TagRule::RenameWhenTagged(name) if tag != 0 => Annotation::Replace(name.to_string()),
            TagRule::RenameWhenTagged(_) => Annotation::Keep,
            TagRule::Ticks if tag > 0 => Annotation::Suffix(format!("{} Tick", tag)),
            TagRule::Ticks => Annotation::Keep,
            TagRule::Count { fixed, unit } => match lookup(fixed, tag) {
                Some(s) => Annotation::Suffix(s.to_string()),
                None if tag != 0 => Annotation::Suffix(format!("{} {}", tag, unit)),
                None => Annotation::Keep,
            },
            TagRule::SelfWhenViewer if viewer_index == Some(tag) => Annotation::Suffix("self".to_string()),
            TagRule::SelfWhenViewer => Annotation::Keep,
            TagRule::SourcePlayer => {
                if tag == -1 {
                    Annotation::Suffix("raid".to_string())
                } else if viewer_index.is_none_or(|viewer| viewer == tag) {
                    Annotation::Suffix("self".to_string())
                } else {
                    Annotation::Suffix(format!("from #{}", i64::from(tag) + 1))
                }
            }
        }
    }
}

enum Annotation {
    Keep,
    Suffix(String),
    Replace(String),
}

/// Final display name for `base_name` logged with `tag`, as seen by the
/// player at `viewer_index` (if any). Unknown names with a nonzero tag get a
/// generic `(??)` marker.
pub fn disambiguate(base_name: &str, tag: i32, viewer_index: Option<i32>) -> String {
    let annotation = match rule_for(base_name) {
        Some(rule) => rule.apply(tag, viewer_index),
        None if tag != 0 => Annotation::Suffix("??".to_string()),
        None => Annotation::Keep,
    };

    match annotation {
        Annotation::Keep => base_name.to_string(),
        Annotation::Suffix(suffix) => format!("{} ({})", base_name, suffix),
        Annotation::Replace(name) => name,
    }
}
