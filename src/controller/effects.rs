use crate::model::Establishment;
use crate::remote::{LoginGrant, ProfileUpdate, ProfileView};

/// Identifies a job: the session epoch it was issued in and its sequence
/// number within the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub epoch: u64,
    pub seq: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Login {
        username: String,
        password: String,
    },
    UpdateProfile {
        username: String,
        update: ProfileUpdate,
    },
    FetchCatalog {
        token: String,
    },
    Rename {
        token: String,
        id: String,
        name: String,
    },
}

impl Request {
    pub fn label(&self) -> &'static str {
        match self {
            Request::Login { .. } => "login",
            Request::UpdateProfile { .. } => "update profile",
            Request::FetchCatalog { .. } => "fetch establishments",
            Request::Rename { .. } => "rename establishment",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub ticket: Ticket,
    pub request: Request,
}

/// Result of a job, with errors already reduced to the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Login(Result<LoginGrant, String>),
    Profile(Result<ProfileView, String>),
    Catalog(Result<Vec<Establishment>, String>),
    Rename(Result<(), String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Outcome,
}

/// Side effects the controller asks its driver to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Call(Job),
    /// Leave the launcher for this URL.
    Redirect(String),
}

impl Effect {
    pub fn as_call(&self) -> Option<&Job> {
        match self {
            Effect::Call(job) => Some(job),
            Effect::Redirect(_) => None,
        }
    }
}
