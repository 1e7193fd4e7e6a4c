//! Helper functions for the CLI.

mod clipboard;
mod input;

pub use clipboard::reveal_secret;
pub use input::{confirm, prompt_master, prompt_name, prompt_new_master, read_entry_secret};
