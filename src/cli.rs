use clap::{Parser, Subcommand};

/// Browse champions, skins and profile icons from Riot's Data Dragon CDN.
#[derive(Debug, Parser)]
#[command(name = "champion-codex", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the latest published game-data version
    Version,
    /// List every champion
    Champions {
        /// Only keep champions with this role tag (e.g. Mage)
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show a champion's abilities and skins
    Champion {
        /// Champion id as used by the CDN (e.g. MonkeyKing)
        id: String,
    },
    /// Show the splash art of a single skin
    Skin {
        champion_id: String,
        skin_num: u32,
    },
    /// List profile icons
    Icons {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}
