use reqwest::StatusCode;

use crate::config::SpotifyConfig;
use crate::constants::spotify::TOP_TRACKS_TIME_RANGE;
use crate::models::spotify::{TokenResponse, TrackBundle};

#[derive(Clone)]
pub struct SpotifyClient {
    client: reqwest::Client,
    config: SpotifyConfig,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig) -> Self {
        SpotifyClient {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Mints a fresh access token and pulls both track collections with it.
    /// Every failure along the way degrades to an absent collection instead
    /// of failing the build - the site just renders without music data.
    #[tracing::instrument(skip_all)]
    pub async fn fetch_tracks(&self) -> TrackBundle {
        tracing::info!("started fetching spotify tracks!");

        let token = match self.refresh_access_token().await {
            Ok(Some(token)) => token,
            Ok(None) => return TrackBundle::default(),
            Err(e) => {
                tracing::warn!(err = ?e, "an error occurred when refreshing the spotify token");
                return TrackBundle::default();
            }
        };

        let top_tracks_url = format!(
            "{}/me/top/tracks?time_range={}",
            self.config.api_base, TOP_TRACKS_TIME_RANGE
        );
        let liked_tracks_url = format!("{}/me/tracks", self.config.api_base);

        let tracks = match self.fetch_authenticated(&top_tracks_url, &token).await {
            Ok(tracks) => Some(tracks),
            Err(e) => {
                tracing::warn!(err = ?e, "an error occurred when fetching top tracks");
                None
            }
        };

        let liked_tracks = match self.fetch_authenticated(&liked_tracks_url, &token).await {
            Ok(tracks) => Some(tracks),
            Err(e) => {
                tracing::warn!(err = ?e, "an error occurred when fetching liked tracks");
                None
            }
        };

        tracing::info!(
            tracks = tracks.is_some(),
            liked_tracks = liked_tracks.is_some(),
            "finished fetching spotify tracks!"
        );

        TrackBundle {
            tracks,
            liked_tracks,
        }
    }

    /// Token exchange against the accounts service. The refresh token is
    /// long-lived and minted by hand; every run trades it for a short-lived
    /// bearer token that is reused for exactly the two track requests.
    async fn refresh_access_token(&self) -> anyhow::Result<Option<String>> {
        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", self.config.refresh_token.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", self.config.scope.as_str()),
        ];

        let resp = self
            .client
            .post(&self.config.token_endpoint)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&params)
            .send()
            .await
            .inspect_err(
                |e| tracing::error!(err = ?e, "an error occurred when sending token request"),
            )?;

        let status = resp.status();
        let text = resp.text().await.inspect_err(
            |e| tracing::error!(err = ?e, "an error occurred when receiving token response text"),
        )?;

        Ok(access_token_from_response(status, &text))
    }

    async fn fetch_authenticated(
        &self,
        url: &str,
        token: &str,
    ) -> anyhow::Result<serde_json::Value> {
        let resp = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let body = resp.json().await?;

        Ok(body)
    }
}

/// Pulls the access token out of a token endpoint response, degrading to
/// `None` on an error status or an unparseable body.
fn access_token_from_response(status: StatusCode, body: &str) -> Option<String> {
    if !status.is_success() {
        tracing::warn!(%status, body, "spotify token endpoint response was not ok");
        return None;
    }

    match serde_json::from_str::<TokenResponse>(body) {
        Ok(token) => Some(token.access_token),
        Err(e) => {
            tracing::warn!(err = ?e, body, "an error occurred when parsing token response body");
            None
        }
    }
}
