use anyhow::Result;
use clap::Parser;

use launcher::config::{ConfigOverrides, LauncherConfig};
use launcher::logging::{self, LogTarget};
use launcher::store::SessionStore;

use crate::Commands;
use crate::cli_commands::GlobalArgs;

#[derive(Parser)]
#[command(name = "launcher")]
#[command(about = "Sign in and jump to your establishments", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = resolve_config(&cli.global)?;

    match cli.command {
        None => {
            logging::init(LogTarget::File(config.log_file()))?;
            let opened = launcher::tui::run_with_options(launcher::tui::TuiRunOptions {
                api_url: config.api_url.clone(),
                store: open_store(&config, cli.global.ephemeral),
            })?;
            if let Some(target) = opened {
                println!("Opened {}", target);
            }
        }
        Some(command) => {
            logging::init(LogTarget::Stderr)?;
            crate::cli_exec::handle_command(&config, cli.global.ephemeral, command)?
        }
    }

    Ok(())
}

pub(crate) fn resolve_config(global: &GlobalArgs) -> Result<LauncherConfig> {
    LauncherConfig::resolve(ConfigOverrides {
        api_url: global.api_url.clone(),
        state_dir: global.state_dir.clone(),
    })
}

pub(crate) fn open_store(config: &LauncherConfig, ephemeral: bool) -> SessionStore {
    if ephemeral {
        SessionStore::memory()
    } else {
        SessionStore::file(&config.state_dir)
    }
}
