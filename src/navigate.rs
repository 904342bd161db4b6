use anyhow::{Context, Result};
use url::Url;

/// Query parameter the storefront reads to show which establishment the
/// user picked.
pub const NAME_PARAM: &str = "launcher_estab_nome";

/// Builds the URL the user is sent to for an establishment.
///
/// Existing query pairs are kept and an existing `launcher_estab_nome` is
/// replaced. A URL that does not parse is returned unchanged.
pub fn redirect_target(url: &str, display_name: &str) -> String {
    let Ok(mut target) = Url::parse(url) else {
        return url.to_string();
    };
    if display_name.is_empty() {
        return target.to_string();
    }

    let mut pairs: Vec<String> = target
        .query()
        .map(|q| {
            q.split('&')
                .filter(|p| !p.is_empty())
                .filter(|p| p.split('=').next() != Some(NAME_PARAM))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    pairs.push(format!(
        "{}={}",
        NAME_PARAM,
        urlencoding::encode(display_name)
    ));
    target.set_query(Some(&pairs.join("&")));
    target.to_string()
}

/// Hands the target to the system's default URL opener.
pub fn open_target(target: &str) -> Result<()> {
    tracing::info!(url = target, "opening establishment");
    open::that(target).with_context(|| format!("open {}", target))
}

#[cfg(test)]
#[path = "tests/navigate_tests.rs"]
mod tests;
