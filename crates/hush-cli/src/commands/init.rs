use hush_core::{EntryStore, HushError};

use crate::app::AppContext;
use crate::helpers::prompt_new_master;
use crate::ui::{hint, print_status, receipt, with_spinner};

pub fn handle_init(ctx: &AppContext) -> anyhow::Result<()> {
    let vault = ctx.vault()?;
    let ui = ctx.ui_context(false);

    // Checked again by the vault; this only avoids prompting for nothing.
    if vault.is_initialized() {
        return Err(HushError::AlreadyInitialized.into());
    }

    let master = prompt_new_master(ui.is_interactive(), vault.policy())?;
    with_spinner(&ui, "Creating vault", || vault.init(&master))?;

    let path = vault.root().display().to_string();
    print_status(&ui, &receipt(&ui, "Vault created", &[("Path", path.as_str())]));
    print_status(&ui, &hint(&ui, "hush add <name>"));
    Ok(())
}
