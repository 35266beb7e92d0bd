use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    action::error::{ActionError, Result},
    source::source_model::{DataSource, IconData},
};

/// Fetches icon data as JSON from `<endpoint>/item/<id>` and
/// `<endpoint>/spell/<id>`.
pub struct HttpDataSource {
    pub endpoint: String,
    client: reqwest::Client,
}

impl Default for HttpDataSource {
    fn default() -> Self {
        Self::new("http://localhost:3333/icons")
    }
}

impl HttpDataSource {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url_for(&self, kind: &str, id: i32) -> String {
        format!("{}/{}/{}", self.endpoint, kind, id)
    }

    async fn fetch(&self, kind: &'static str, id: i32) -> Result<IconData> {
        let url = self.url_for(kind, id);
        tracing::debug!("Fetching icon data from {}", url);

        let request_err = |source| ActionError::Request { kind, id, source };

        let response = self.client.get(&url).send().await.map_err(request_err)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ActionError::NotFound { kind, id });
        }

        response
            .error_for_status()
            .map_err(request_err)?
            .json::<IconData>()
            .await
            .map_err(request_err)
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn item_icon_data(&self, item_id: i32) -> Result<IconData> {
        self.fetch("item", item_id).await
    }

    async fn spell_icon_data(&self, spell_id: i32) -> Result<IconData> {
        self.fetch("spell", spell_id).await
    }
}
