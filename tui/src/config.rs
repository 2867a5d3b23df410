use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use tracing::Level;

pub const DEFAULT_SERVER_ADDR: &str = "localhost:8080";

/// A band room offered in the band list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub id: String,
    pub name: String,
}

impl Band {
    pub fn new(id: &str, name: &str) -> Self {
        Band {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

impl FromStr for Band {
    type Err = String;

    /// Parses `ID=NAME`, both sides trimmed and non-empty
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (id, name) = value
            .split_once('=')
            .ok_or_else(|| format!("expected ID=NAME, got {value:?}"))?;
        let (id, name) = (id.trim(), name.trim());

        if id.is_empty() || name.is_empty() {
            return Err(format!("band id and name must not be empty, got {value:?}"));
        }

        Ok(Band::new(id, name))
    }
}

fn default_bands() -> Vec<Band> {
    vec![
        Band::new("1", "Jazz Band"),
        Band::new("2", "Rock Band"),
        Band::new("3", "Brass Ensemble"),
    ]
}

/// Terminal client for the band chat
#[derive(Debug, Parser)]
#[command(name = "band-chat", version, about)]
pub struct Args {
    /// Host and port of the chat server
    #[arg(long, env = "BAND_CHAT_ADDR", default_value = DEFAULT_SERVER_ADDR)]
    pub addr: String,

    /// Band offered in the band list, repeat for more bands
    #[arg(long = "band", value_name = "ID=NAME")]
    pub bands: Vec<Band>,

    /// File the logs are written to, the terminal is taken by the UI
    #[arg(long, default_value = "band-chat.log")]
    pub log_file: PathBuf,

    /// Minimum level of the logs written
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

impl Args {
    /// The bands given on the command line, or the built-in set when none were given
    pub fn bands_or_default(&self) -> Vec<Band> {
        if self.bands.is_empty() {
            default_bands()
        } else {
            self.bands.clone()
        }
    }
}
