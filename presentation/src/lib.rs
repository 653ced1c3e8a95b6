//! Presentation layer for atiende
//!
//! This crate contains the CLI definitions and the HTTP chat boundary.

pub mod cli;
pub mod web;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use web::{AppState, create_router, serve};
