//! Action ids embedded in simulator log lines.
//!
//! Log format: `{SpellID: 123}`, `{ItemID: 456}` or `{OtherID: 7}`,
//! optionally with a tag inside the same braces: `{SpellID: 123, Tag: -1}`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::action::action_model::{ActionId, OtherAction};

static LOG_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(SpellID|ItemID|OtherID): (\d+)(?:, Tag: (-?\d+))?\}")
        .unwrap_or_else(|e| unreachable!("log token pattern: {e}"))
});

/// One action id occurrence inside a string.
#[derive(Debug, Clone, PartialEq)]
pub struct LogMatch {
    /// Byte offset of the opening brace.
    pub start: usize,
    /// Byte length of the whole `{...}` token.
    pub len: usize,
    pub action_id: ActionId,
}

/// Parse the first action id in `s`. Unparseable input logs a warning and
/// yields the empty sentinel.
pub fn from_log_string(s: &str) -> ActionId {
    let Some(caps) = LOG_TOKEN.captures(s) else {
        tracing::warn!("Failed to parse action id from log: {}", s);
        return ActionId::from_empty();
    };
    build(&caps).unwrap_or_else(ActionId::from_empty)
}

/// All non-overlapping action id tokens in `s`, in order of appearance.
/// Tokens whose numbers do not fit an `i32` are skipped and stay as text.
pub fn find_all(s: &str) -> Vec<LogMatch> {
    LOG_TOKEN
        .captures_iter(s)
        .filter_map(|caps| {
            let token = caps.get(0)?;
            Some(LogMatch {
                start: token.start(),
                len: token.len(),
                action_id: build(&caps)?,
            })
        })
        .collect()
}

/// Id for a matched token, or `None` (with a warning) when a number
/// overflows.
fn build(caps: &Captures<'_>) -> Option<ActionId> {
    let token = &caps[0];
    let parse = |text: &str| match text.parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Action id out of range in log token {}", token);
            None
        }
    };

    let id = parse(&caps[2])?;
    let tag = match caps.get(3) {
        Some(t) => parse(t.as_str())?,
        None => 0,
    };

    let action_id = match &caps[1] {
        "SpellID" => ActionId::from_spell_id(id, 0, tag),
        "ItemID" => ActionId::from_item_id(id, tag, 0),
        _ => {
            let other = OtherAction::from_code(id).unwrap_or_else(|| {
                tracing::warn!("Unknown other action code {} in log", id);
                OtherAction::None
            });
            ActionId::from_other_id(other, tag)
        }
    };
    Some(action_id)
}

const TAG_PREFIX: &str = ", Tag: ";

/// Write the log token for `id`, the inverse of [`from_log_string`].
/// Returns `None` for the empty sentinel.
pub fn to_log_string(id: &ActionId) -> Option<String> {
    let (label, value) = if id.item_id() != 0 {
        ("ItemID", id.item_id())
    } else if id.spell_id() != 0 {
        ("SpellID", id.spell_id())
    } else if id.other_id() != OtherAction::None {
        ("OtherID", id.other_id().code())
    } else {
        return None;
    };

    Some(if id.tag() != 0 {
        format!("{{{}: {}{}{}}}", label, value, TAG_PREFIX, id.tag())
    } else {
        format!("{{{}: {}}}", label, value)
    })
}
