use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "globed-menu")]
#[command(about = "Globed client settings and server switcher")]
#[command(version)]
struct Cli {
    /// Path to the settings file (defaults to ~/.globed/settings.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the settings and server switcher window
    Gui,

    /// Check whether an address is a valid direct-connect target
    Check {
        /// Address in the form host[:port]
        address: String,
    },

    /// Switch to a standalone server and try to connect to it
    Connect {
        /// Address in the form host[:port]
        address: String,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// List every setting with its current value
    List,

    /// Set a setting, e.g. `settings set overlay.opacity 0.5`
    Set { key: String, value: String },

    /// Print the settings file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(globed_menu::config::Config::global_config_path);

    match cli.command {
        Some(Commands::Check { address }) => {
            cli::connect::check_command(&address)?;
        }
        Some(Commands::Connect { address }) => {
            cli::connect::connect_command(&config_path, &address)?;
        }
        Some(Commands::Settings { command }) => match command {
            SettingsCommands::List => cli::settings::list_command(&config_path)?,
            SettingsCommands::Set { key, value } => {
                cli::settings::set_command(&config_path, &key, &value)?
            }
            SettingsCommands::Path => println!("{}", config_path.display()),
        },
        Some(Commands::Gui) | None => {
            // Default: run the GUI
            globed_menu::gui::run_gui(config_path)?;
        }
    }

    Ok(())
}
