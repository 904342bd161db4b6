use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Optional `config.json` inside the state directory.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Base URL of the authentication/establishment service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LauncherConfig {
    pub api_url: String,
    pub state_dir: PathBuf,
}
