use std::path::PathBuf;

use clap::Args;

#[derive(Args, Clone, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Base URL of the authentication/establishment service
    #[arg(long, global = true)]
    pub(crate) api_url: Option<String>,
    /// Directory holding session.json, config.json and launcher.log
    #[arg(long, global = true)]
    pub(crate) state_dir: Option<PathBuf>,
    /// Keep the session in memory only
    #[arg(long, global = true)]
    pub(crate) ephemeral: bool,
}

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long, short = 'u')]
    pub(crate) username: String,
    /// Password (defaults to $LAUNCHER_PASSWORD)
    #[arg(long, short = 'p')]
    pub(crate) password: Option<String>,
}

#[derive(Args)]
pub(crate) struct JsonArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct RenameArgs {
    /// Establishment id
    pub(crate) id: String,
    /// New display name
    pub(crate) name: String,
}

#[derive(Args)]
pub(crate) struct ProfileArgs {
    /// New display name
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// New password
    #[arg(long)]
    pub(crate) password: Option<String>,
}

#[derive(Args)]
pub(crate) struct OpenArgs {
    /// Establishment id
    pub(crate) id: String,
    /// Print the target URL instead of opening it
    #[arg(long)]
    pub(crate) print: bool,
}
