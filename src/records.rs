use anyhow::Context;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::models::anilist::ReadingData;
use crate::models::spotify::TrackBundle;

pub static READING_LIST_ID: &str = "user-information-anilist";
pub static TOP_TRACKS_ID: &str = "user-information-spotify-top-tracks";
pub static LIKED_TRACKS_ID: &str = "user-information-spotify-liked-tracks";

/// One content node for the site pipeline. The digest lets the pipeline
/// detect unchanged data across builds and skip regeneration downstream.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContentRecord {
    pub id: String,
    pub kind: RecordKind,
    pub digest: String,
    pub data: serde_json::Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    Anilist,
    SpotifyTopTracks,
    SpotifyLikedTracks,
}

impl ContentRecord {
    fn new(id: &str, kind: RecordKind, data: serde_json::Value) -> Self {
        ContentRecord {
            id: id.to_string(),
            kind,
            digest: content_digest(&data),
            data,
        }
    }
}

/// SHA-256 over the payload's JSON serialization, lowercase hex. serde_json
/// keeps object keys sorted, so identical payloads always digest the same.
pub fn content_digest(data: &serde_json::Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Packages whatever the two sources produced into content records. An
/// absent source contributes nothing; the music source only contributes
/// when both collections came back, never a half-filled pair.
pub fn build_records(
    reading: Option<ReadingData>,
    bundle: TrackBundle,
) -> anyhow::Result<Vec<ContentRecord>> {
    let mut records = Vec::with_capacity(3);

    match reading {
        Some(reading) => {
            let data = serde_json::to_value(&reading)
                .context("failed to serialize the reading list")?;
            records.push(ContentRecord::new(READING_LIST_ID, RecordKind::Anilist, data));
        }
        None => {
            tracing::warn!("no reading list data - skipping the anilist record");
        }
    }

    match (bundle.tracks, bundle.liked_tracks) {
        (Some(tracks), Some(liked_tracks)) => {
            records.push(ContentRecord::new(
                TOP_TRACKS_ID,
                RecordKind::SpotifyTopTracks,
                tracks,
            ));
            records.push(ContentRecord::new(
                LIKED_TRACKS_ID,
                RecordKind::SpotifyLikedTracks,
                liked_tracks,
            ));
        }
        (None, None) => {
            tracing::warn!("no spotify data - skipping both track records");
        }
        (tracks, liked_tracks) => {
            tracing::warn!(
                tracks = tracks.is_some(),
                liked_tracks = liked_tracks.is_some(),
                "spotify data is incomplete - skipping both track records"
            );
        }
    }

    Ok(records)
}
