use serde::Deserialize;

/// Successful response from the accounts service token endpoint. Only the
/// access token is interesting; everything else is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Track payloads stay opaque - they're handed to the site pipeline exactly
/// as the API returned them, so there's nothing to model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackBundle {
    pub tracks: Option<serde_json::Value>,
    pub liked_tracks: Option<serde_json::Value>,
}

impl TrackBundle {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_none() && self.liked_tracks.is_none()
    }
}
