pub mod grist;

use async_trait::async_trait;

/// What the record store said about a create request.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreResponse {
    Accepted(serde_json::Value),
    Rejected {
        status: u16,
        detail: serde_json::Value,
    },
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Sends `payload` as the request body, as is. Transport and decoding
    /// failures are errors; a non-2xx answer is a `Rejected` response.
    async fn create_records(&self, payload: &serde_json::Value) -> anyhow::Result<StoreResponse>;
}
