use std::path::PathBuf;

use crate::constants::{anilist, spotify};

/// Everything the aggregator needs for one run, built once in `main` and
/// passed down. Nothing in here is read from the environment after startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Absent when the spotify credentials are not configured; the music
    /// source is skipped entirely in that case.
    pub spotify: Option<SpotifyConfig>,
    pub anilist: AnilistConfig,
    /// Where to write the content records. Stdout when unset.
    pub output_path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub redirect_uri: String,
    pub scope: String,
    pub token_endpoint: String,
    pub api_base: String,
}

#[derive(Clone, Debug)]
pub struct AnilistConfig {
    pub username: String,
    pub user_agent: String,
    pub graphql_endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        let spotify = SpotifyConfig::from_env();

        if spotify.is_none() {
            tracing::warn!(
                "missing spotify credentials - music data will not be fetched"
            );
        }

        let output_path = std::env::var("SITEFEED_OUTPUT_PATH")
            .ok()
            .map(PathBuf::from);

        Config {
            spotify,
            anilist: AnilistConfig::from_env(),
            output_path,
        }
    }
}

impl SpotifyConfig {
    /// All three secrets are required; a partially configured source is
    /// treated the same as an unconfigured one.
    pub fn from_env() -> Option<Self> {
        match (
            std::env::var("SPOTIFY_CLIENT_ID"),
            std::env::var("SPOTIFY_CLIENT_SECRET"),
            std::env::var("SPOTIFY_REFRESH_TOKEN"),
        ) {
            (Ok(client_id), Ok(client_secret), Ok(refresh_token)) => Some(SpotifyConfig {
                client_id,
                client_secret,
                refresh_token,
                redirect_uri: std::env::var("SPOTIFY_REDIRECT_URI")
                    .unwrap_or_else(|_| spotify::DEFAULT_REDIRECT_URI.to_string()),
                scope: std::env::var("SPOTIFY_SCOPE")
                    .unwrap_or_else(|_| spotify::DEFAULT_SCOPE.to_string()),
                token_endpoint: spotify::TOKEN_ENDPOINT.to_string(),
                api_base: spotify::API_BASE.to_string(),
            }),
            _ => None,
        }
    }
}

impl AnilistConfig {
    pub fn from_env() -> Self {
        AnilistConfig {
            username: std::env::var("ANILIST_USERNAME")
                .unwrap_or_else(|_| anilist::DEFAULT_USERNAME.to_string()),
            user_agent: std::env::var("ANILIST_USER_AGENT")
                .unwrap_or_else(|_| anilist::DEFAULT_USER_AGENT.to_string()),
            graphql_endpoint: anilist::GRAPHQL_ENDPOINT.to_string(),
        }
    }
}
