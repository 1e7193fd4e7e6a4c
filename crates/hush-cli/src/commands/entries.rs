use secrecy::ExposeSecret;

use hush_core::{EntryName, EntryStore, FileVault, HushError};

use crate::app::AppContext;
use crate::cli::{AddArgs, GetArgs, ListArgs, RemoveArgs};
use crate::helpers::{prompt_master, read_entry_secret, reveal_secret};
use crate::output::{entry_json, names_json, print_json};
use crate::ui::{header, hint, print_status, receipt, with_spinner};

/// Fail before any prompt when there is no vault to talk to.
fn require_initialized(vault: &FileVault) -> anyhow::Result<()> {
    if vault.is_initialized() {
        Ok(())
    } else {
        Err(HushError::NotInitialized.into())
    }
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let vault = ctx.vault()?;
    let ui = ctx.ui_context(false);
    let name = EntryName::parse(&args.name)?;
    require_initialized(&vault)?;

    let secret = read_entry_secret(name.as_str(), vault.policy())?;
    let master = prompt_master(ui.is_interactive())?;
    with_spinner(&ui, "Encrypting", || {
        vault.put(name.as_str(), &secret, &master)
    })?;

    print_status(&ui, &receipt(&ui, "Stored", &[("Name", name.as_str())]));
    Ok(())
}

pub fn handle_get(ctx: &AppContext, args: &GetArgs) -> anyhow::Result<()> {
    let vault = ctx.vault()?;
    let ui = ctx.ui_context(args.json);
    let name = EntryName::parse(&args.name)?;
    require_initialized(&vault)?;

    let master = prompt_master(ui.is_interactive())?;
    let value = with_spinner(&ui, "Unlocking", || vault.get(name.as_str(), &master))?;

    if ui.mode.is_json() {
        print_json(&entry_json(name.as_str(), value.expose_secret()))?;
    } else {
        reveal_secret(&ui, args.display, value.expose_secret());
    }
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let vault = ctx.vault()?;
    let ui = ctx.ui_context(false);
    let name = EntryName::parse(&args.name)?;
    require_initialized(&vault)?;

    let master = prompt_master(ui.is_interactive())?;
    with_spinner(&ui, "Unlocking", || vault.remove(name.as_str(), &master))?;

    print_status(&ui, &receipt(&ui, "Removed", &[("Name", name.as_str())]));
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let vault = ctx.vault()?;
    let ui = ctx.ui_context(args.json);
    let names = vault.list()?;

    if ui.mode.is_json() {
        return print_json(&names_json(&names));
    }

    if ui.mode.is_pretty() {
        let count = match names.len() {
            1 => "1 entry".to_string(),
            n => format!("{} entries", n),
        };
        print_status(&ui, &header(&ui, "list", Some(&count)));
    }
    for name in &names {
        println!("{}", name);
    }
    if names.is_empty() {
        print_status(&ui, &hint(&ui, "hush add <name>"));
    }
    Ok(())
}
