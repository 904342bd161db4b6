use launcher::controller::Dialog;

use super::*;

const PASSWORD_ENV: &str = "LAUNCHER_PASSWORD";

pub(super) fn handle_login_command(
    l: &mut Launcher,
    username: String,
    password: Option<String>,
) -> Result<()> {
    if l.ctl.is_logged_in() {
        l.ctl.logout();
    }
    let password = password
        .or_else(|| std::env::var(PASSWORD_ENV).ok())
        .unwrap_or_default();
    let effects = l.ctl.login(&username, &password);
    l.run(effects);

    if let Some(err) = l.ctl.login_form().error.as_deref() {
        anyhow::bail!(err.to_string());
    }
    let name = l.ctl.session().display_name.as_deref().unwrap_or(&username);
    println!("Logged in as {}", name);
    Ok(())
}

pub(super) fn handle_logout_command(l: &mut Launcher) -> Result<()> {
    l.ctl.logout();
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(l: &mut Launcher, json: bool) -> Result<()> {
    l.require_login()?;
    let session = l.ctl.session();
    if json {
        let view = serde_json::json!({
            "username": session.username,
            "display_name": session.display_name,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("serialize whoami json")?
        );
    } else {
        println!("user: {}", session.username.as_deref().unwrap_or("-"));
        println!("name: {}", session.display_name.as_deref().unwrap_or("-"));
    }
    Ok(())
}

pub(super) fn handle_profile_command(
    l: &mut Launcher,
    name: Option<String>,
    password: Option<String>,
) -> Result<()> {
    l.require_login()?;
    l.ctl.open_profile();
    if let Some(draft) = l.ctl.profile_draft_mut() {
        draft.proposed_display_name = name.unwrap_or_default();
        draft.proposed_password = password.unwrap_or_default();
    }
    let effects = l.ctl.save_profile();
    l.run(effects);

    if let Some(Dialog::Profile(draft)) = l.ctl.dialog() {
        let msg = draft.error.clone().unwrap_or_else(|| "profile not saved".to_string());
        anyhow::bail!(msg);
    }
    println!(
        "Profile updated: {}",
        l.ctl.session().display_name.as_deref().unwrap_or("-")
    );
    Ok(())
}
