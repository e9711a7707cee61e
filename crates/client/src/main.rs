//! Cats Vs. Dogs client binary.
//!
//! Main entry point and composition root. It assembles:
//! 1. Content (roster + game config) via `ContentSetup`
//! 2. Game (phase machine) backed by the roster
//! 3. Frontend (UI) - CLI today
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! CVD_PLAYER=cat2 CVD_OPPONENT=dog2 cargo run -p catsvsdogs-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use catsvsdogs_client::{Client, ClientConfig, ContentSetup};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (guard flushes the file writer on exit)
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting Cats Vs. Dogs client");
    tracing::debug!(?client_config, ?frontend_config, "configuration");

    // 3. Load content and build the game
    let content = ContentSetup::load(&client_config)?;
    let game = content.new_game();

    // 4. Build Frontend
    let frontend = CliFrontend::new(frontend_config, cli_config, content.registry.clone());

    // 5. Build and run
    let client = Client::builder().game(game).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
