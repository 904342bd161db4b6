//! The launcher state machine.
//!
//! The controller is the only writer of the session and the catalog. UI
//! actions and job completions go in; [`Effect`]s come out for a driver to
//! perform (see [`crate::runtime`]). Jobs carry a [`Ticket`] so completions
//! that arrive after a logout, or after a newer catalog fetch was issued,
//! are dropped instead of overwriting fresher state.

use crate::catalog::Catalog;
use crate::model::Session;
use crate::navigate;
use crate::remote::ProfileUpdate;
use crate::store::SessionStore;

mod drafts;
mod effects;
pub use self::drafts::*;
pub use self::effects::*;

const MISSING_CREDENTIALS: &str = "enter username and password";
const MISSING_PROFILE_USER: &str = "no user to update was found in the session";
const NOTHING_TO_SAVE: &str = "change the name and/or the password to save";
const NO_TOKEN_GRANTED: &str = "failed to start session";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    LoggedOut,
    LoggedIn,
    /// A redirect is in flight; further selections are ignored.
    Navigating,
}

pub struct Controller {
    store: SessionStore,
    session: Session,
    catalog: Catalog,
    phase: Phase,
    login: LoginForm,
    dialog: Option<Dialog>,
    alert: Option<String>,

    epoch: u64,
    next_seq: u64,
    latest_fetch: Option<u64>,
    latest_profile: Option<u64>,
}

impl Controller {
    /// Restores the persisted session. A stored token is trusted as-is and
    /// an initial catalog fetch is returned.
    pub fn start(store: SessionStore) -> (Self, Vec<Effect>) {
        let session = store.load().normalized();
        let phase = if session.is_authenticated() {
            Phase::LoggedIn
        } else {
            Phase::LoggedOut
        };
        let mut ctl = Self {
            store,
            session,
            catalog: Catalog::default(),
            phase,
            login: LoginForm::default(),
            dialog: None,
            alert: None,
            epoch: 0,
            next_seq: 0,
            latest_fetch: None,
            latest_profile: None,
        };
        tracing::debug!(phase = ?ctl.phase, "controller started");
        let effects = ctl.refresh();
        (ctl, effects)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.phase, Phase::LoggedIn | Phase::Navigating)
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn rename_draft_mut(&mut self) -> Option<&mut RenameDraft> {
        match self.dialog.as_mut() {
            Some(Dialog::Rename(d)) => Some(d),
            _ => None,
        }
    }

    pub fn profile_draft_mut(&mut self) -> Option<&mut ProfileDraft> {
        match self.dialog.as_mut() {
            Some(Dialog::Profile(d)) => Some(d),
            _ => None,
        }
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    fn job(&mut self, request: Request) -> Job {
        self.next_seq += 1;
        Job {
            ticket: Ticket {
                epoch: self.epoch,
                seq: self.next_seq,
            },
            request,
        }
    }

    pub fn login(&mut self, username: &str, password: &str) -> Vec<Effect> {
        self.login.username = username.to_string();
        self.login.password = password.to_string();
        self.submit_login()
    }

    pub fn submit_login(&mut self) -> Vec<Effect> {
        if self.phase != Phase::LoggedOut || self.login.is_pending() {
            return Vec::new();
        }
        let username = self.login.username.trim().to_string();
        let password = self.login.password.clone();
        if username.is_empty() || password.is_empty() {
            self.login.error = Some(MISSING_CREDENTIALS.to_string());
            return Vec::new();
        }

        self.login.error = None;
        self.login.pending = Some(username.clone());
        let job = self.job(Request::Login { username, password });
        vec![Effect::Call(job)]
    }

    pub fn logout(&mut self) {
        tracing::info!("logging out");
        self.session = Session::default();
        self.store.clear();
        self.catalog.reset();
        self.dialog = None;
        self.alert = None;
        self.login = LoginForm::default();
        self.phase = Phase::LoggedOut;
        self.epoch += 1;
        self.latest_fetch = None;
        self.latest_profile = None;
    }

    /// Fetches the catalog with the current token. Without a token this does
    /// nothing at all.
    pub fn refresh(&mut self) -> Vec<Effect> {
        let Some(token) = self.session.token().map(str::to_string) else {
            return Vec::new();
        };
        let job = self.job(Request::FetchCatalog { token });
        self.latest_fetch = Some(job.ticket.seq);
        vec![Effect::Call(job)]
    }

    pub fn select(&mut self, id: &str) -> Vec<Effect> {
        if self.phase != Phase::LoggedIn || self.dialog.is_some() {
            return Vec::new();
        }
        let Some(estab) = self.catalog.find(id) else {
            return Vec::new();
        };
        if estab.url.is_empty() {
            return Vec::new();
        }
        let target = navigate::redirect_target(&estab.url, &estab.display_name);
        self.phase = Phase::Navigating;
        vec![Effect::Redirect(target)]
    }

    /// The redirect could not be performed; the list becomes usable again.
    pub fn navigation_failed(&mut self, message: &str) {
        if self.phase == Phase::Navigating {
            self.phase = Phase::LoggedIn;
            self.alert = Some(message.to_string());
        }
    }

    pub fn open_rename(&mut self, id: &str) -> bool {
        if self.phase != Phase::LoggedIn {
            return false;
        }
        let Some(estab) = self.catalog.find(id) else {
            return false;
        };
        self.dialog = Some(Dialog::Rename(RenameDraft {
            target_id: estab.id.clone(),
            proposed_name: estab.display_name.clone(),
        }));
        true
    }

    pub fn cancel_rename(&mut self) {
        if matches!(self.dialog, Some(Dialog::Rename(_))) {
            self.dialog = None;
        }
    }

    /// Closes the dialog before the server answers. A blank name just closes
    /// it.
    pub fn confirm_rename(&mut self) -> Vec<Effect> {
        let draft = match self.dialog.take() {
            Some(Dialog::Rename(d)) => d,
            other => {
                self.dialog = other;
                return Vec::new();
            }
        };
        let name = draft.proposed_name.trim().to_string();
        if name.is_empty() {
            return Vec::new();
        }
        let Some(token) = self.session.token().map(str::to_string) else {
            return Vec::new();
        };
        let job = self.job(Request::Rename {
            token,
            id: draft.target_id,
            name,
        });
        vec![Effect::Call(job)]
    }

    pub fn open_profile(&mut self) -> bool {
        if self.phase != Phase::LoggedIn {
            return false;
        }
        self.dialog = Some(Dialog::Profile(ProfileDraft {
            proposed_display_name: self.session.display_name.clone().unwrap_or_default(),
            ..ProfileDraft::default()
        }));
        true
    }

    pub fn close_profile(&mut self) {
        if matches!(self.dialog, Some(Dialog::Profile(_))) {
            self.dialog = None;
        }
    }

    pub fn save_profile(&mut self) -> Vec<Effect> {
        let username = self.session.username.clone().filter(|u| !u.is_empty());
        let Some(Dialog::Profile(draft)) = self.dialog.as_mut() else {
            return Vec::new();
        };
        if draft.is_saving() {
            return Vec::new();
        }
        let Some(username) = username else {
            draft.error = Some(MISSING_PROFILE_USER.to_string());
            return Vec::new();
        };

        let nome = Some(draft.proposed_display_name.trim().to_string()).filter(|s| !s.is_empty());
        let password = Some(draft.proposed_password.trim().to_string()).filter(|s| !s.is_empty());
        let update = ProfileUpdate { nome, password };
        if update.is_empty() {
            draft.error = Some(NOTHING_TO_SAVE.to_string());
            return Vec::new();
        }

        draft.error = None;
        let job = self.job(Request::UpdateProfile { username, update });
        if let Some(Dialog::Profile(draft)) = self.dialog.as_mut() {
            draft.pending = Some(job.ticket.seq);
        }
        self.latest_profile = Some(job.ticket.seq);
        vec![Effect::Call(job)]
    }

    /// Applies the result of a job and returns any follow-up effects.
    pub fn complete(&mut self, completion: Completion) -> Vec<Effect> {
        let Completion { ticket, outcome } = completion;
        if ticket.epoch != self.epoch {
            tracing::debug!(?ticket, current = self.epoch, "dropping completion from an earlier session");
            return Vec::new();
        }

        match outcome {
            Outcome::Login(res) => self.finish_login(res),
            Outcome::Profile(res) => {
                self.finish_profile(ticket, res);
                Vec::new()
            }
            Outcome::Catalog(res) => {
                self.finish_fetch(ticket, res);
                Vec::new()
            }
            Outcome::Rename(Ok(())) => self.refresh(),
            Outcome::Rename(Err(message)) => {
                tracing::warn!(%message, "rename rejected");
                self.alert = Some(message);
                Vec::new()
            }
        }
    }

    fn finish_login(&mut self, res: Result<crate::remote::LoginGrant, String>) -> Vec<Effect> {
        let Some(username) = self.login.pending.take() else {
            return Vec::new();
        };
        if self.phase != Phase::LoggedOut {
            return Vec::new();
        }
        match res {
            Ok(grant) => {
                let session = Session::new(&grant.access_token, &username, grant.usuario);
                if !session.is_authenticated() {
                    tracing::warn!(%username, "login response carried no token");
                    self.login.error = Some(NO_TOKEN_GRANTED.to_string());
                    return Vec::new();
                }
                tracing::info!(%username, "logged in");
                self.session = session;
                self.store.save(&self.session);
                self.login.password.clear();
                self.login.error = None;
                self.phase = Phase::LoggedIn;
                self.epoch += 1;
                self.refresh()
            }
            Err(message) => {
                self.login.error = Some(message);
                Vec::new()
            }
        }
    }

    /// Only the most recent save counts. The dialog is touched only while it
    /// is still the one that issued the save.
    fn finish_profile(&mut self, ticket: Ticket, res: Result<crate::remote::ProfileView, String>) {
        if self.latest_profile != Some(ticket.seq) {
            tracing::debug!(?ticket, "dropping superseded profile update");
            return;
        }
        self.latest_profile = None;
        let owns_dialog = matches!(
            &self.dialog,
            Some(Dialog::Profile(d)) if d.pending == Some(ticket.seq)
        );
        match res {
            Ok(view) => {
                if let Some(nome) = view.nome.filter(|n| !n.is_empty()) {
                    self.session.display_name = Some(nome);
                    self.store.save(&self.session);
                }
                if owns_dialog {
                    self.dialog = None;
                }
            }
            Err(message) => match self.dialog.as_mut() {
                Some(Dialog::Profile(draft)) if owns_dialog => {
                    draft.pending = None;
                    draft.error = Some(message);
                }
                _ => tracing::warn!(%message, "profile update failed after dialog closed"),
            },
        }
    }

    fn finish_fetch(&mut self, ticket: Ticket, res: Result<Vec<crate::model::Establishment>, String>) {
        if self.latest_fetch != Some(ticket.seq) {
            tracing::debug!(?ticket, "dropping superseded catalog fetch");
            return;
        }
        match res {
            Ok(list) => {
                tracing::debug!(count = list.len(), "catalog replaced");
                self.catalog.replace(list);
            }
            Err(message) => {
                tracing::warn!(%message, "could not load establishments, keeping current list");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
