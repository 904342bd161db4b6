mod common;

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};

fn launcher(state_dir: &Path, api_url: &str, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_launcher"))
        .args(args)
        .arg("--state-dir")
        .arg(state_dir)
        .arg("--api-url")
        .arg(api_url)
        .current_dir(state_dir)
        .env_remove("LAUNCHER_API_URL")
        .env_remove("LAUNCHER_STATE_DIR")
        .env_remove("LAUNCHER_PASSWORD")
        .env("LAUNCHER_LOG", "off")
        .output()
        .with_context(|| format!("run launcher {:?}", args))
}

fn run_ok(state_dir: &Path, api_url: &str, args: &[&str]) -> Result<String> {
    let out = launcher(state_dir, api_url, args)?;
    if !out.status.success() {
        anyhow::bail!(
            "launcher {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

#[test]
fn cli_help_lists_commands() -> Result<()> {
    let out = Command::new(env!("CARGO_BIN_EXE_launcher"))
        .arg("--help")
        .output()
        .context("run launcher --help")?;
    assert!(out.status.success());
    let help = String::from_utf8_lossy(&out.stdout);
    for cmd in ["login", "logout", "whoami", "list", "rename", "profile", "open"] {
        assert!(help.contains(cmd), "missing {} in help:\n{}", cmd, help);
    }
    Ok(())
}

#[test]
fn cli_session_lifecycle() -> Result<()> {
    let server = common::spawn_mock()?;
    let dir = tempfile::tempdir()?;
    let state = dir.path();
    let api = server.base_url.as_str();

    // Signed out: built-in list, no network.
    let listed = run_ok(state, api, &["list", "--json"])?;
    let v: serde_json::Value = serde_json::from_str(&listed).context("parse list json")?;
    assert_eq!(v.as_array().map(|a| a.len()), Some(5));
    assert!(server.hits().is_empty());

    let whoami = launcher(state, api, &["whoami"])?;
    assert!(!whoami.status.success());

    let bad = launcher(state, api, &["login", "-u", "ana", "-p", "nope"])?;
    assert!(!bad.status.success());
    assert!(String::from_utf8_lossy(&bad.stderr).contains("Usuário ou senha inválidos"));

    let out = run_ok(state, api, &["login", "-u", "ana", "-p", "123"])?;
    assert!(out.contains("Logged in as Ana"));
    assert!(state.join("session.json").exists());

    let who = run_ok(state, api, &["whoami", "--json"])?;
    let v: serde_json::Value = serde_json::from_str(&who).context("parse whoami json")?;
    assert_eq!(v["username"], "ana");
    assert_eq!(v["display_name"], "Ana");

    let listed = run_ok(state, api, &["list"])?;
    assert!(listed.contains("neopdv2 NeoPDV 2"));
    assert!(!listed.contains("(built-in list)"));

    let renamed = run_ok(state, api, &["rename", "neopdv2", "Loja Centro"])?;
    assert!(renamed.contains("neopdv2 Loja Centro"));

    let target = run_ok(state, api, &["open", "neopdv2", "--print"])?;
    assert_eq!(
        target.trim(),
        "https://neopdv2.vercel.app/?launcher_estab_nome=Loja%20Centro"
    );

    let missing = launcher(state, api, &["open", "nowhere", "--print"])?;
    assert!(!missing.status.success());

    run_ok(state, api, &["logout"])?;
    let whoami = launcher(state, api, &["whoami"])?;
    assert!(!whoami.status.success());
    Ok(())
}

#[test]
fn cli_rename_failure_exits_nonzero_with_message() -> Result<()> {
    let server = common::spawn_mock()?;
    server.fail_renames(axum::http::StatusCode::FORBIDDEN, Some("Sem permissão"));
    let dir = tempfile::tempdir()?;
    let state = dir.path();
    let api = server.base_url.as_str();

    run_ok(state, api, &["login", "-u", "ana", "-p", "123"])?;
    let out = launcher(state, api, &["rename", "neopdv1", "X"])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Sem permissão"));
    Ok(())
}

#[test]
fn cli_profile_updates_display_name() -> Result<()> {
    let server = common::spawn_mock()?;
    let dir = tempfile::tempdir()?;
    let state = dir.path();
    let api = server.base_url.as_str();

    run_ok(state, api, &["login", "-u", "ana", "-p", "123"])?;
    let nothing = launcher(state, api, &["profile"])?;
    assert!(!nothing.status.success());

    let out = run_ok(state, api, &["profile", "--name", "Ana Maria"])?;
    assert!(out.contains("Profile updated: Ana Maria"));

    let who = run_ok(state, api, &["whoami"])?;
    assert!(who.contains("name: Ana Maria"));
    Ok(())
}
