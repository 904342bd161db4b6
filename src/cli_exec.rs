use anyhow::{Context, Result};

use launcher::config::LauncherConfig;
use launcher::controller::{Controller, Effect};
use launcher::remote::RemoteClient;
use launcher::runtime::run_to_idle;

use crate::Commands;
use crate::cli_runtime::open_store;

mod dispatch;
mod establishments;
mod session;

pub(crate) use self::dispatch::handle_command;

/// Controller plus client for a single CLI invocation.
pub(crate) struct Launcher {
    pub(crate) ctl: Controller,
    client: RemoteClient,
    startup: Vec<Effect>,
}

impl Launcher {
    pub(crate) fn open(config: &LauncherConfig, ephemeral: bool) -> Result<Self> {
        let client = RemoteClient::new(&config.api_url)?;
        let (ctl, startup) = Controller::start(open_store(config, ephemeral));
        Ok(Self {
            ctl,
            client,
            startup,
        })
    }

    /// Runs the startup catalog fetch, if the stored session asked for one.
    pub(crate) fn sync(&mut self) {
        let effects = std::mem::take(&mut self.startup);
        self.run(effects);
    }

    pub(crate) fn run(&mut self, effects: Vec<Effect>) -> Option<String> {
        run_to_idle(&mut self.ctl, &self.client, effects)
    }

    pub(crate) fn require_login(&self) -> Result<()> {
        if !self.ctl.is_logged_in() {
            anyhow::bail!("not logged in (run `launcher login --username ...`)");
        }
        Ok(())
    }
}

pub(crate) fn with_launcher(
    config: &LauncherConfig,
    ephemeral: bool,
    f: impl FnOnce(&mut Launcher) -> Result<()>,
) -> Result<()> {
    let mut launcher = Launcher::open(config, ephemeral).context("start launcher")?;
    f(&mut launcher)
}
