use ddragon_api::DDragonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Data Dragon error: {0}")]
    DDragon(#[from] DDragonError),

    #[error("Champion not found: {0}")]
    ChampionNotFound(String),

    #[error("Skin {skin_num} not found for {champion_id}")]
    SkinNotFound { champion_id: String, skin_num: u32 },

    #[error("Configuration error: {0}")]
    Config(String),
}
