//! Command handlers for the CLI.

pub mod entries;
pub mod generate;
pub mod implode;
pub mod init;
pub mod misc;
