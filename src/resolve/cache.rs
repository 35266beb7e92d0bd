use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    action::{action_model::ActionId, error::Result},
    resolve::resolver::ActionResolver,
};

type CacheKey = (String, i32, Option<i32>);

/// Memoizes [`ActionResolver::fill`] by structured key, random suffix and
/// viewer index. Failed lookups are not cached.
pub struct ResolveCache {
    resolver: ActionResolver,
    filled: Mutex<HashMap<CacheKey, ActionId>>,
}

impl ResolveCache {
    pub fn new(resolver: ActionResolver) -> Self {
        Self {
            resolver,
            filled: Mutex::new(HashMap::new()),
        }
    }

    pub fn resolver(&self) -> &ActionResolver {
        &self.resolver
    }

    pub async fn fill(&self, id: &ActionId, viewer_index: Option<i32>) -> Result<ActionId> {
        let key = (id.to_key_string(), id.random_suffix_id(), viewer_index);

        let cached = self.lock().get(&key).cloned();
        if let Some(hit) = cached {
            return Ok(hit);
        }

        let filled = self.resolver.fill(id, viewer_index).await?;
        self.lock().insert(key, filled.clone());
        Ok(filled)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, ActionId>> {
        match self.filled.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("resolve cache lock poisoned, reusing contents");
                poisoned.into_inner()
            }
        }
    }
}
