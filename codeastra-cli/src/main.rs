//! Main entry point for the CodeAstra command-line client.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::Path;

mod commands;
mod logging;

/// CodeAstra CLI
#[derive(Parser)]
#[command(name = "codeastra")]
#[command(about = "Command-line client for CodeAstra", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the CodeAstra CLI
#[derive(Subcommand)]
enum Commands {
    /// Ask the backend to create a new project
    CreateProject(commands::project::CreateProjectArgs),

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)
        #[arg(
            long,
            short,
            value_enum,
            help = "The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)"
        )]
        shell: clap_complete::Shell,
    },

    /// Generate a client configuration file
    Config {
        /// Format of the configuration file to generate (yaml or json). Defaults to yaml.
        #[arg(
            long,
            short,
            help = "Format of the configuration file to generate (yaml or json). Defaults to yaml."
        )]
        format: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::CreateProject(args) => {
            commands::project::create_project(args).await?;
        }
        Commands::Completion { shell } => {
            commands::completion::generate_completion(shell);
        }
        Commands::Config { format } => {
            let format = format.unwrap_or_else(|| "yaml".to_string());
            let path = commands::config::generate_config(&format, Path::new("."))?;
            println!(
                "Configuration file '{}' generated successfully.",
                path.display()
            );
        }
    }

    Ok(())
}
