use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::action::action_model::ActionId;

/// One resolved action id, written as a JSON line.
#[derive(Debug, Serialize)]
pub struct ResolveTraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub id: String,
    pub key: String,

    pub name: Option<String>,
    pub icon_url: Option<String>,
    pub error: Option<String>,
}

impl ResolveTraceEvent {
    pub fn now(step: u64, id: &ActionId) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            step,
            id: id.to_id_string().unwrap_or_default(),
            key: id.to_key_string(),
            name: None,
            icon_url: None,
            error: None,
        }
    }

    pub fn with_filled(mut self, filled: &ActionId) -> Self {
        self.name = Some(filled.name().to_string());
        self.icon_url = Some(filled.icon_url().to_string());
        self
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }
}
