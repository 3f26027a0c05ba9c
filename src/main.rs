use std::path::Path;

use anyhow::Result;
use clap::Parser;
use labflow::cli::args::{Cli, Commands, ConfigAction};
use labflow::cli::commands;
use labflow::config::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_path = cli.runtime.config.as_deref().map(Path::new);
    let settings = commands::apply_overrides(Settings::load_with(config_path)?, &cli.runtime);

    match &cli.command {
        Some(Commands::Interactive) => commands::handle_interactive(&settings).await?,
        Some(Commands::Chat) => {
            let prompt = if !cli.prompt.is_empty() {
                Some(cli.prompt.join(" "))
            } else {
                None
            };
            commands::handle_chat(&settings, prompt, &cli.io).await?
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::List => commands::handle_config_list(&settings).await?,
            ConfigAction::Set { key, value } => {
                commands::handle_config_set(config_path, key, value).await?
            }
            ConfigAction::Init { force } => commands::handle_config_init(config_path, *force).await?,
        },
        Some(Commands::Forms) => commands::handle_forms().await?,
        Some(Commands::Dashboard) => commands::handle_dashboard().await?,
        None => {
            if !cli.prompt.is_empty() || cli.io.input_file.is_some() {
                let prompt = Some(cli.prompt.join(" "));
                commands::handle_chat(&settings, prompt, &cli.io).await?
            } else {
                // No command and no prompt: open the chat shell
                commands::handle_interactive(&settings).await?
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
