use std::env;
use std::fmt;

/// Where bookings end up. Never sent to the browser or the wizard.
#[derive(Clone)]
pub struct GristConfig {
    pub base_url: String,
    pub doc_id: String,
    pub table_id: String,
    pub api_key: String,
}

impl GristConfig {
    pub fn records_url(&self) -> String {
        format!(
            "{}/api/docs/{}/tables/{}/records",
            self.base_url.trim_end_matches('/'),
            self.doc_id,
            self.table_id
        )
    }
}

impl fmt::Debug for GristConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GristConfig")
            .field("base_url", &self.base_url)
            .field("doc_id", &self.doc_id)
            .field("table_id", &self.table_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub grist: GristConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            grist: GristConfig {
                base_url: env::var("GRIST_BASE_URL")
                    .unwrap_or_else(|_| "https://docs.getgrist.com".to_string()),
                doc_id: env::var("GRIST_DOC_ID").unwrap_or_default(),
                table_id: env::var("GRIST_TABLE_ID").unwrap_or_default(),
                api_key: env::var("GRIST_API_KEY").unwrap_or_default(),
            },
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.grist.doc_id.is_empty(), "GRIST_DOC_ID must be set");
        anyhow::ensure!(!self.grist.table_id.is_empty(), "GRIST_TABLE_ID must be set");
        anyhow::ensure!(!self.grist.api_key.is_empty(), "GRIST_API_KEY must be set");
        Ok(())
    }
}
