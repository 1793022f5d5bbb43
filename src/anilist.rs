use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use time::format_description::well_known;
use time::OffsetDateTime;

use crate::config::AnilistConfig;
use crate::constants::anilist::READING_LIST_QUERY;
use crate::models::anilist::{GraphqlResponse, ReadingData};

#[derive(Clone)]
pub struct AnilistClient {
    client: reqwest::Client,
    config: AnilistConfig,
}

impl AnilistClient {
    pub fn new(config: AnilistConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(AnilistClient { client, config })
    }

    /// Fetches the configured user's manga lists. An unavailable or
    /// misbehaving API degrades to `None` so the build can go on without a
    /// reading list section.
    #[tracing::instrument(skip_all)]
    pub async fn fetch_reading_list(&self) -> Option<ReadingData> {
        tracing::info!(username = %self.config.username, "started fetching anilist reading list!");

        let data = match self.request_reading_list().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(err = ?e, "an error occurred when fetching the reading list");
                return None;
            }
        };

        if let Some(data) = &data {
            let last_updated = data
                .manga_list
                .last_updated()
                .and_then(|ts| OffsetDateTime::from_unix_timestamp(ts).ok())
                .and_then(|dt| dt.format(&well_known::Rfc3339).ok());

            tracing::info!(
                entries = data.manga_list.total_entries(),
                lists = data.manga_list.lists.len(),
                last_updated = last_updated.as_deref().unwrap_or("never"),
                "finished fetching anilist reading list!"
            );
        }

        data
    }

    async fn request_reading_list(&self) -> anyhow::Result<Option<ReadingData>> {
        let body = serde_json::json!({
            "query": READING_LIST_QUERY,
            "variables": { "userName": self.config.username },
        });

        let resp = self
            .client
            .post(&self.config.graphql_endpoint)
            .json(&body)
            .send()
            .await
            .inspect_err(
                |e| tracing::error!(err = ?e, "an error occurred when sending graphql request"),
            )?
            .error_for_status()?;

        let text = resp.text().await.inspect_err(
            |e| tracing::error!(err = ?e, "an error occurred when receiving response text"),
        )?;

        let body: GraphqlResponse<ReadingData> = serde_json::from_str(&text).inspect_err(
            |e| tracing::error!(err = ?e, text = %text, "an error occurred when parsing response body"),
        )?;

        for error in &body.errors {
            tracing::warn!(message = %error.message, "graphql error in reading list response");
        }

        Ok(body.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_errors_still_parse() {
        let raw = r#"{
            "data": null,
            "errors": [{ "message": "User not found", "status": 404 }]
        }"#;

        let resp: GraphqlResponse<ReadingData> = serde_json::from_str(raw).unwrap();

        assert!(resp.data.is_none());
        assert_eq!(resp.errors.len(), 1);
        assert_eq!(resp.errors[0].message, "User not found");
    }

    #[test]
    fn query_excludes_inactive_statuses() {
        for status in ["PLANNING", "DROPPED", "REPEATING", "PAUSED"] {
            assert!(READING_LIST_QUERY.contains(status));
        }
        assert!(READING_LIST_QUERY.contains("status_not_in"));
        assert!(READING_LIST_QUERY.contains("$userName"));
    }
}
