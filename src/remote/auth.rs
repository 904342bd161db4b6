//! Login and profile operations.

use super::*;

const LOGIN_FAILED: &str = "failed to start session";
const PROFILE_FAILED: &str = "failed to update user";
const UNREACHABLE: &str = "could not reach the authentication service";

impl RemoteClient {
    pub fn login(&self, username: &str, password: &str) -> Result<LoginGrant> {
        let resp = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest { username, password })
            .send()
            .context(UNREACHABLE)?;
        let grant: LoginGrant = self
            .ensure_ok(resp, LOGIN_FAILED)?
            .json()
            .context("parse login response")?;
        Ok(grant)
    }

    pub fn update_profile(&self, username: &str, update: &ProfileUpdate) -> Result<ProfileView> {
        let resp = self
            .client
            .put(self.url(&format!("/users/{}", urlencoding::encode(username))))
            .json(update)
            .send()
            .context(UNREACHABLE)?;
        let out: ProfileView = self
            .ensure_ok(resp, PROFILE_FAILED)?
            .json()
            .context("parse profile response")?;
        Ok(out)
    }
}
