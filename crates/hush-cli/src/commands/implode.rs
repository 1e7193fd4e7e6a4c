use hush_core::{EntryStore, HushError};

use crate::app::AppContext;
use crate::cli::ImplodeArgs;
use crate::errors::CliError;
use crate::helpers::{confirm, prompt_master};
use crate::ui::{badge, print_status, receipt, with_spinner, Badge};

pub fn handle_implode(ctx: &AppContext, args: &ImplodeArgs) -> anyhow::Result<()> {
    let vault = ctx.vault()?;
    let ui = ctx.ui_context(false);

    if !vault.is_initialized() {
        return Err(HushError::NotInitialized.into());
    }

    if !args.yes {
        if !ui.is_interactive() {
            return Err(CliError::invalid_input_with_hint(
                "Refusing to delete the vault without confirmation",
                "Pass --yes to confirm non-interactively.",
            )
            .into());
        }
        eprintln!(
            "{}",
            badge(
                &ui,
                Badge::Warn,
                &format!(
                    "This deletes {} and every entry in it.",
                    vault.root().display()
                )
            )
        );
        if !confirm("Delete the vault?")? {
            print_status(&ui, &badge(&ui, Badge::Info, "Aborted"));
            return Ok(());
        }
    }

    let master = prompt_master(ui.is_interactive())?;
    with_spinner(&ui, "Unlocking", || vault.implode(&master))?;

    let path = vault.root().display().to_string();
    print_status(&ui, &receipt(&ui, "Vault deleted", &[("Path", path.as_str())]));
    Ok(())
}
