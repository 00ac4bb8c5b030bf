use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use ddragon_api::{DDragonClient, DDragonError, models::ChampionDetail};
use error::AppError;

mod cli;
mod config;
mod error;
mod logging;
mod view;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // .env may carry RUST_LOG and LOG_DIR, load it before the subscriber.
    dotenvy::dotenv().ok();
    logging::init(logging::LogSettings::from_env());
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let client = DDragonClient::with_options(config.client_options());
    let output = run(&client, cli.command).await?;
    println!("{}", output);

    tracing::debug!(
        "{} CDN requests, {} failed",
        client.metrics.count(),
        client.metrics.failures()
    );

    Ok(())
}

async fn run(client: &DDragonClient, command: Command) -> Result<String, AppError> {
    match command {
        Command::Version => Ok(client.resolve_latest_version().await.to_string()),
        Command::Champions { tag } => {
            let champions = client.get_champions().await?;
            Ok(view::champion_list(client, &champions, tag.as_deref()))
        }
        Command::Champion { id } => {
            let champion = champion_detail(client, &id).await?;
            Ok(view::champion_detail(client, &champion))
        }
        Command::Skin {
            champion_id,
            skin_num,
        } => {
            let champion = champion_detail(client, &champion_id).await?;
            view::skin_preview(client, &champion, skin_num)
        }
        Command::Icons { limit } => {
            let icons = client.get_profile_icons().await?;
            Ok(view::profile_icons(client, &icons, limit))
        }
    }
}

/// Fetch a champion, turning both a missing document and a missing entry into [`AppError::ChampionNotFound`].
async fn champion_detail(client: &DDragonClient, id: &str) -> Result<ChampionDetail, AppError> {
    match client.get_champion_detail(id).await {
        Ok(Some(champion)) => Ok(champion),
        Ok(None) => Err(AppError::ChampionNotFound(id.to_string())),
        // The CDN answers 403 rather than 404 for files it does not have.
        Err(DDragonError::Status(status)) if matches!(status.as_u16(), 403 | 404) => {
            Err(AppError::ChampionNotFound(id.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
