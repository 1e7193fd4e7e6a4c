//! UI primitives for the Hush CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode, quiet)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, owo-colors styles, spinner frames
//! - **Render**: Headers, receipts, hints, errors
//! - **Progress**: Spinner around slow key derivations
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, Badge};
//! use crate::ui::render::{badge, hint};
//!
//! let ctx = UiContext::from_env(args.json, cli.no_color, cli.quiet);
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", badge(&ctx, Badge::Ok, "Stored bank"));
//! println!("{}", hint(&ctx, "hush get bank"));
//! ```

mod context;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use progress::with_spinner;
pub use render::{badge, header, hint, print_error, print_status, receipt};
