//! DTOs and payload types for remote API requests/responses.

#[derive(Debug, serde::Serialize)]
pub(super) struct LoginRequest<'a> {
    pub(super) username: &'a str,
    pub(super) password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginGrant {
    pub access_token: String,

    /// Display name of the user.
    #[serde(default)]
    pub usuario: Option<String>,
}

/// Fields of a profile change; absent fields are left as they are.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.nome.is_none() && self.password.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProfileView {
    #[serde(default)]
    pub nome: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct RenameRequest<'a> {
    pub(super) nome: &'a str,
}
