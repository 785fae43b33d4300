pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "travel-assistant")]
#[command(about = "Smart travel assistant: place search, reviews, recommendation scores and chat")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(long)]
    pub geocoder_url: Option<String>,

    #[arg(long)]
    pub wiki_url: Option<String>,

    /// Country appended to geocoding queries
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Look up a place and score it from reviews
    Search { place: String },
    /// Look up two places and score the destination
    Route {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Show the most recent search result
    Result,
    /// Score, recommendation and tags for a place
    Score { place: String },
    #[command(subcommand)]
    Review(ReviewCommand),
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Whoami,
    /// Ask the assistant about the current place
    Chat {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum ReviewCommand {
    Add {
        #[arg(long)]
        place: String,
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        text: String,
        /// Defaults to the signed-in user
        #[arg(long)]
        author: Option<String>,
    },
    List {
        #[arg(long)]
        place: Option<String>,
    },
    Delete { index: usize },
    Reset,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }
        if let Some(url) = &self.geocoder_url {
            config.lookup.geocoder_url = url.clone();
        }
        if let Some(url) = &self.wiki_url {
            config.lookup.wiki_url = url.clone();
        }
        if let Some(country) = &self.country {
            config.lookup.country = country.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.lookup.timeout_seconds = timeout;
        }
    }

    pub fn load_config(&self) -> crate::utils::error::Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }
}
