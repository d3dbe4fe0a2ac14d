use anyhow::Context;
use async_trait::async_trait;

use super::{RecordStore, StoreResponse};
use crate::config::GristConfig;

pub struct GristRecordStore {
    records_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GristRecordStore {
    pub fn new(config: &GristConfig) -> Self {
        Self {
            records_url: config.records_url(),
            api_key: config.api_key.clone(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RecordStore for GristRecordStore {
    async fn create_records(&self, payload: &serde_json::Value) -> anyhow::Result<StoreResponse> {
        let resp = self
            .client
            .post(&self.records_url)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
            .context("failed to call Grist API")?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .context("failed to read Grist response")?;

        if !status.is_success() {
            // Grist error bodies are JSON, but a proxy in front of it may not be.
            let detail = serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::Value::String(text));
            return Ok(StoreResponse::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let data = serde_json::from_str(&text).context("failed to parse Grist response")?;
        Ok(StoreResponse::Accepted(data))
    }
}
