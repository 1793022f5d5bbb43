use config::Config;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod anilist;
mod config;
mod constants;
mod models;
mod records;
mod spotify;
mod sync;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // logs on stderr, records on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("starting external data sync...");

    let config = Config::from_env();
    let records = sync::run(&config).await?;

    let json = serde_json::to_string_pretty(&records)?;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, json)?;
            tracing::info!(path = %path.display(), "wrote content records");
        }
        None => println!("{json}"),
    }

    Ok(())
}
