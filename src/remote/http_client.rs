use super::*;

impl RemoteClient {
    /// Passes successful responses through; anything else becomes an error
    /// carrying the server's `detail` message or `fallback`.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        fallback: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body: Option<serde_json::Value> = resp.json().ok();
        let message = body
            .as_ref()
            .and_then(detail_message)
            .unwrap_or(fallback)
            .to_string();
        tracing::debug!(%status, %message, "service returned an error");
        anyhow::bail!(message)
    }

    pub(super) fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// The `detail` field of an error body, when it is a non-empty string.
pub(super) fn detail_message(body: &serde_json::Value) -> Option<&str> {
    body.get("detail")
        .and_then(|d| d.as_str())
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
