use launcher::navigate;

use super::*;

pub(super) fn handle_list_command(l: &mut Launcher, json: bool) -> Result<()> {
    l.sync();
    let catalog = l.ctl.catalog();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(catalog.entries()).context("serialize establishments json")?
        );
        return Ok(());
    }

    if catalog.is_fallback() {
        println!("(built-in list)");
    }
    for e in catalog.iter() {
        println!("{} {}", e.id, e.display_name);
        if let Some(desc) = e.description.as_deref().filter(|d| !d.is_empty()) {
            println!("  {}", desc);
        }
        println!("  {}", e.url);
    }
    Ok(())
}

pub(super) fn handle_rename_command(l: &mut Launcher, id: String, name: String) -> Result<()> {
    l.require_login()?;
    l.sync();
    if !l.ctl.open_rename(&id) {
        anyhow::bail!("establishment {} not found", id);
    }
    if let Some(draft) = l.ctl.rename_draft_mut() {
        draft.proposed_name = name;
    }
    let effects = l.ctl.confirm_rename();
    if effects.is_empty() {
        println!("Name is empty; nothing renamed");
        return Ok(());
    }
    l.run(effects);

    if let Some(alert) = l.ctl.alert() {
        anyhow::bail!(alert.to_string());
    }
    let shown = l
        .ctl
        .catalog()
        .find(&id)
        .map(|e| e.display_name.clone())
        .unwrap_or_default();
    println!("{} {}", id, shown);
    Ok(())
}

pub(super) fn handle_open_command(l: &mut Launcher, id: String, print: bool) -> Result<()> {
    l.require_login()?;
    l.sync();
    let effects = l.ctl.select(&id);
    let Some(target) = l.run(effects) else {
        anyhow::bail!("establishment {} not found or has no url", id);
    };
    if print {
        println!("{}", target);
        return Ok(());
    }
    navigate::open_target(&target)?;
    println!("Opened {}", target);
    Ok(())
}
