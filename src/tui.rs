use anyhow::Result;

use crate::store::SessionStore;

pub struct TuiRunOptions {
    pub api_url: String,
    pub store: SessionStore,
}

/// Runs the interactive launcher. Returns the URL that was opened, if the
/// user picked an establishment.
pub fn run_with_options(opts: TuiRunOptions) -> Result<Option<String>> {
    crate::tui_shell::run_with_options(opts)
}
