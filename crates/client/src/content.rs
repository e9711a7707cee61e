//! Content and game configuration assembly.
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use game_content::{CharacterRegistry, ConfigLoader};
use game_core::{CharacterId, Game, GameConfig};

/// Where content comes from and who fights.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// RON roster file. `None` uses the built-in roster.
    pub roster: Option<PathBuf>,
    /// TOML game config file. `None` uses the defaults.
    pub game_config: Option<PathBuf>,
    pub player: Option<CharacterId>,
    pub opponent: Option<CharacterId>,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CVD_ROSTER` - Path to a roster RON file
    /// - `CVD_CONFIG` - Path to a game config TOML file
    /// - `CVD_PLAYER` - Player's roster id (overrides the config file)
    /// - `CVD_OPPONENT` - Opponent's roster id (overrides the config file)
    pub fn from_env() -> Self {
        Self {
            roster: read_env_path("CVD_ROSTER"),
            game_config: read_env_path("CVD_CONFIG"),
            player: read_env_id("CVD_PLAYER"),
            opponent: read_env_id("CVD_OPPONENT"),
        }
    }
}

/// Loaded roster and game configuration.
#[derive(Clone, Debug)]
pub struct ContentSetup {
    pub config: GameConfig,
    pub registry: Arc<CharacterRegistry>,
}

impl ContentSetup {
    /// Loads the roster and config, applies matchup overrides and checks that
    /// both fighters exist in the roster.
    pub fn load(client: &ClientConfig) -> Result<Self> {
        let registry = match &client.roster {
            Some(path) => CharacterRegistry::load(path)?,
            None => CharacterRegistry::builtin().context("built-in roster is invalid")?,
        };

        let mut config = match &client.game_config {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("failed to load game config {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(player) = &client.player {
            config.matchup.player = player.clone();
        }
        if let Some(opponent) = &client.opponent {
            config.matchup.opponent = opponent.clone();
        }

        for id in [&config.matchup.player, &config.matchup.opponent] {
            if registry.get(id).is_none() {
                let known: Vec<&str> = registry.ids().map(CharacterId::as_str).collect();
                bail!("unknown fighter '{}' (roster has: {})", id, known.join(", "));
            }
        }

        tracing::info!(
            player = %config.matchup.player,
            opponent = %config.matchup.opponent,
            fighters = registry.len(),
            "content loaded"
        );

        Ok(Self {
            config,
            registry: Arc::new(registry),
        })
    }

    /// A fresh game in the main menu backed by this roster.
    pub fn new_game(&self) -> Game {
        Game::new(self.config.clone(), self.registry.clone())
    }
}

fn read_env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn read_env_id(key: &str) -> Option<CharacterId> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(CharacterId::new)
}
