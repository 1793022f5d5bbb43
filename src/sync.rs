use crate::anilist::AnilistClient;
use crate::config::Config;
use crate::models::spotify::TrackBundle;
use crate::records::{self, ContentRecord};
use crate::spotify::SpotifyClient;

/// One aggregation run: both sources in parallel, then packaging. Sources
/// degrade to absent on failure, so this only errors on local problems
/// (client construction, serialization).
#[tracing::instrument(skip_all)]
pub async fn run(config: &Config) -> anyhow::Result<Vec<ContentRecord>> {
    let anilist = AnilistClient::new(config.anilist.clone())?;
    let spotify = config.spotify.clone().map(SpotifyClient::new);

    let (reading, bundle) = tokio::join!(anilist.fetch_reading_list(), async {
        match &spotify {
            Some(spotify) => spotify.fetch_tracks().await,
            None => TrackBundle::default(),
        }
    });

    let records = records::build_records(reading, bundle)?;

    tracing::info!(count = records.len(), "finished building content records!");

    Ok(records)
}
