use anyhow::{Context, Result};

use crate::model::Establishment;

mod http_client;

mod types;
pub use self::types::*;
mod auth;
mod establishments;

/// Blocking client for the authentication/establishment service.
///
/// Every call is a single request; nothing is retried.
#[derive(Clone)]
pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("launcher/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// The operations the controller needs from the service.
pub trait LauncherService {
    fn login(&self, username: &str, password: &str) -> Result<LoginGrant>;
    fn update_profile(&self, username: &str, update: &ProfileUpdate) -> Result<ProfileView>;
    fn list_establishments(&self, token: &str) -> Result<Vec<Establishment>>;
    fn rename_establishment(&self, token: &str, id: &str, name: &str) -> Result<()>;
}

impl LauncherService for RemoteClient {
    fn login(&self, username: &str, password: &str) -> Result<LoginGrant> {
        RemoteClient::login(self, username, password)
    }

    fn update_profile(&self, username: &str, update: &ProfileUpdate) -> Result<ProfileView> {
        RemoteClient::update_profile(self, username, update)
    }

    fn list_establishments(&self, token: &str) -> Result<Vec<Establishment>> {
        RemoteClient::list_establishments(self, token)
    }

    fn rename_establishment(&self, token: &str, id: &str, name: &str) -> Result<()> {
        RemoteClient::rename_establishment(self, token, id, name).map(|_| ())
    }
}
