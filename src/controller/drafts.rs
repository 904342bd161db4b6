#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,

    /// Trimmed username of the login request in flight.
    pub(super) pending: Option<String>,
}

impl LoginForm {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameDraft {
    pub target_id: String,
    pub proposed_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub proposed_display_name: String,
    pub proposed_password: String,
    pub error: Option<String>,

    /// Sequence number of the save this dialog is waiting on.
    pub(super) pending: Option<u64>,
}

impl ProfileDraft {
    pub fn is_saving(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    Rename(RenameDraft),
    Profile(ProfileDraft),
}
