use serde::Deserialize;

use crate::errors::SubmitError;
use crate::models::BookingRecord;

pub const BOOK_PATH: &str = "/api/book";

const FALLBACK_MESSAGE: &str = "Something went wrong with the booking submission.";

#[derive(Deserialize)]
struct ProxyReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

/// Talks to the booking proxy on behalf of the wizard.
pub struct BookingClient {
    book_url: String,
    client: reqwest::Client,
}

impl BookingClient {
    pub fn new(proxy_url: &str) -> Self {
        Self {
            book_url: format!("{}{BOOK_PATH}", proxy_url.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }

    /// One POST, no retries. Returns the store's result on success.
    pub async fn submit(&self, record: &BookingRecord) -> Result<serde_json::Value, SubmitError> {
        let resp = self.client.post(&self.book_url).json(record).send().await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ProxyReply>(&text)
                .ok()
                .and_then(|r| r.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ProxyReply = serde_json::from_str(&text)
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
        tracing::info!(message = reply.message.as_deref().unwrap_or(""), "booking API response");
        Ok(reply.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_url() {
        let client = BookingClient::new("http://localhost:3000/");
        assert_eq!(client.book_url, "http://localhost:3000/api/book");
    }
}
