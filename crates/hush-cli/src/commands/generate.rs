use zeroize::Zeroizing;

use hush_core::crypto::generate_password;
use hush_core::EntryStore;

use crate::app::AppContext;
use crate::cli::GenerateArgs;
use crate::helpers::{confirm, prompt_master, prompt_name, reveal_secret};
use crate::ui::{print_status, receipt, with_spinner};

pub fn handle_generate(ctx: &AppContext, args: &GenerateArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false);
    let length = match args.length {
        Some(length) => length,
        None => ctx.config()?.generate.length,
    };

    let password = Zeroizing::new(generate_password(length)?);
    reveal_secret(&ui, args.display, password.as_str());

    let name = match &args.save {
        Some(name) => Some(name.clone()),
        None if ui.is_interactive() && !ctx.quiet() => {
            if confirm("Save this password?")? {
                Some(prompt_name()?)
            } else {
                None
            }
        }
        None => None,
    };

    let Some(name) = name else {
        return Ok(());
    };

    let vault = ctx.vault()?;
    let master = prompt_master(ui.is_interactive())?;
    with_spinner(&ui, "Encrypting", || vault.put(&name, &password, &master))?;
    print_status(&ui, &receipt(&ui, "Stored", &[("Name", name.trim())]));
    Ok(())
}
