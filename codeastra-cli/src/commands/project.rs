use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use shared::{client::ProjectClient, config::ClientConfig};
use tracing::info;

use crate::logging;

#[derive(Args, Debug)]
pub struct CreateProjectArgs {
    /// Backend origin, e.g. http://localhost:8080
    #[arg(
        long,
        short,
        help = "Backend origin (e.g., http://localhost:8080). Overrides the config file and CODEASTRA_API_URL."
    )]
    pub server: Option<String>,

    /// Path to the configuration file (optional)
    #[arg(
        long,
        short,
        help = "Path to the configuration file (e.g., codeastra.yaml or codeastra.json). If not provided, defaults will be used."
    )]
    pub config: Option<PathBuf>,
}

/// Creates a project on the configured backend and prints the response as
/// pretty JSON.
///
/// # Errors
/// Fails when the configuration cannot be loaded, the request cannot be
/// sent, or the backend rejects it.
pub async fn create_project(args: CreateProjectArgs) -> Result<()> {
    let config = ClientConfig::load_config(args.config, args.server)
        .context("failed to load client configuration")?;
    logging::init(&config.log_level);

    let client = ProjectClient::from_config(&config);
    let result = client.create_project().await?;

    if let Some(project) = result.project() {
        info!(project_id = %project.id, name = %project.name, files = project.files.len(), "project ready");
    }

    println!("{}", serde_json::to_string_pretty(result.as_value())?);
    Ok(())
}
