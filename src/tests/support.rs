//! In-memory stand-in for the service, shared by the unit tests.

use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};

use crate::model::Establishment;
use crate::remote::{LauncherService, LoginGrant, ProfileUpdate, ProfileView};

#[derive(Debug, Default)]
pub(crate) struct FakeState {
    pub(crate) establishments: Vec<Establishment>,
    pub(crate) calls: Vec<String>,
    pub(crate) login_error: Option<String>,
    pub(crate) rename_error: Option<String>,
    pub(crate) list_error: Option<String>,
    pub(crate) profile_error: Option<String>,
    pub(crate) last_profile: Option<(String, ProfileUpdate)>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeService {
    pub(crate) state: Arc<Mutex<FakeState>>,
}

impl FakeService {
    pub(crate) fn with_establishments(list: Vec<Establishment>) -> Self {
        let svc = Self::default();
        svc.state.lock().unwrap().establishments = list;
        svc
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut FakeState)) {
        f(&mut self.state.lock().unwrap());
    }
}

pub(crate) fn server_list() -> Vec<Establishment> {
    vec![
        Establishment::new("neopdv1", "NeoPDV 1", None, "https://neopdv1.vercel.app/"),
        Establishment::new("neopdv2", "NeoPDV 2", None, "https://neopdv2.vercel.app/"),
        Establishment::new("loja9", "Loja Nove", Some("filial"), "https://loja9.example/"),
    ]
}

impl LauncherService for FakeService {
    fn login(&self, username: &str, password: &str) -> Result<LoginGrant> {
        let mut st = self.state.lock().unwrap();
        st.calls.push(format!("login {}", username));
        if let Some(msg) = st.login_error.clone() {
            bail!(msg);
        }
        if username == "ana" && password == "123" {
            return Ok(LoginGrant {
                access_token: "T1".to_string(),
                usuario: Some("Ana".to_string()),
            });
        }
        bail!("failed to start session")
    }

    fn update_profile(&self, username: &str, update: &ProfileUpdate) -> Result<ProfileView> {
        let mut st = self.state.lock().unwrap();
        st.calls.push(format!("profile {}", username));
        st.last_profile = Some((username.to_string(), update.clone()));
        if let Some(msg) = st.profile_error.clone() {
            bail!(msg);
        }
        Ok(ProfileView {
            nome: update.nome.clone(),
        })
    }

    fn list_establishments(&self, token: &str) -> Result<Vec<Establishment>> {
        let mut st = self.state.lock().unwrap();
        st.calls.push(format!("list {}", token));
        if let Some(msg) = st.list_error.clone() {
            bail!(msg);
        }
        Ok(st.establishments.clone())
    }

    fn rename_establishment(&self, token: &str, id: &str, name: &str) -> Result<()> {
        let mut st = self.state.lock().unwrap();
        st.calls.push(format!("rename {} {} {}", token, id, name));
        if let Some(msg) = st.rename_error.clone() {
            bail!(msg);
        }
        match st.establishments.iter_mut().find(|e| e.id == id) {
            Some(e) => {
                e.display_name = name.to_string();
                Ok(())
            }
            None => bail!("establishment not found"),
        }
    }
}
