//! Establishment list and rename operations.

use super::*;

const LIST_FAILED: &str = "failed to load establishments";
const RENAME_FAILED: &str = "failed to update establishment name on the server";

impl RemoteClient {
    pub fn list_establishments(&self, token: &str) -> Result<Vec<Establishment>> {
        let resp = self
            .client
            .get(self.url("/estabelecimentos"))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .send()
            .context("list establishments")?;
        let out: Vec<Establishment> = self
            .ensure_ok(resp, LIST_FAILED)?
            .json()
            .context("parse establishments")?;
        Ok(out)
    }

    /// Returns the server's copy of the record when it sends one back.
    pub fn rename_establishment(
        &self,
        token: &str,
        id: &str,
        name: &str,
    ) -> Result<Option<Establishment>> {
        let resp = self
            .client
            .put(self.url(&format!("/estabelecimentos/{}", urlencoding::encode(id))))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .json(&RenameRequest { nome: name })
            .send()
            .context(RENAME_FAILED)?;
        let resp = self.ensure_ok(resp, RENAME_FAILED)?;
        Ok(resp.json::<Establishment>().ok())
    }
}
