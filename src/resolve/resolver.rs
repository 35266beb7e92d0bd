use std::sync::Arc;

use crate::{
    action::{
        action_model::{ActionId, OtherAction, icon_url},
        error::Result,
        log_parse::find_all,
        names::disambiguate,
        overrides::icon_override,
    },
    source::source_model::{DataSource, IconData},
};

/// Fills action ids with names and icons from a [`DataSource`].
#[derive(Clone)]
pub struct ActionResolver {
    source: Arc<dyn DataSource>,
}

impl ActionResolver {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &Arc<dyn DataSource> {
        &self.source
    }

    /// Raw data-source entry: the item if there is an item id, else the spell.
    pub async fn icon_data(&self, id: &ActionId) -> Result<IconData> {
        if id.item_id() != 0 {
            self.source.item_icon_data(id.item_id()).await
        } else {
            self.source.spell_icon_data(id.spell_id()).await
        }
    }

    /// Returns `id` with name and icon populated.
    ///
    /// Already-filled ids, other actions and the empty sentinel come back
    /// unchanged without touching the data source. `viewer_index` is the raid
    /// index of the player looking at the result, used by per-caster names.
    pub async fn fill(&self, id: &ActionId, viewer_index: Option<i32>) -> Result<ActionId> {
        if id.is_filled() || id.other_id() != OtherAction::None || id.is_empty() {
            return Ok(id.clone());
        }

        let data = self.icon_data(id).await?;
        let name = disambiguate(&data.name, id.tag(), viewer_index);

        let mut icon = icon_url(&data.icon);
        if let Some(override_id) = icon_override(id) {
            tracing::debug!("Using icon of {} for {}", override_id, name);
            let override_data = self.icon_data(override_id).await?;
            icon = icon_url(&override_data.icon);
        }

        let rank = if id.rank() != 0 { id.rank() } else { data.rank };
        Ok(id.with_display(data.name, name, icon, rank))
    }

    /// Replace every log token (`{SpellID: N, Tag: T}` etc.) in `text` with
    /// the display name of the id it refers to. Lookups run concurrently; any
    /// failure fails the whole call.
    pub async fn replace_all_in_string(&self, text: &str) -> Result<String> {
        let matches = find_all(text);
        if matches.is_empty() {
            return Ok(text.to_string());
        }

        let handles: Vec<_> = matches
            .iter()
            .map(|m| {
                let resolver = self.clone();
                let id = m.action_id.clone();
                tokio::spawn(async move { resolver.fill(&id, None).await })
            })
            .collect();

        let mut filled = Vec::with_capacity(handles.len());
        for handle in handles {
            filled.push(handle.await??);
        }

        // Splice from the back so earlier offsets stay valid.
        let mut out = text.to_string();
        for (m, id) in matches.iter().zip(filled.iter()).rev() {
            out.replace_range(m.start..m.start + m.len, id.name());
        }
        Ok(out)
    }
}
