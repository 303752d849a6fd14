//! Library crate for user-dashboard.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state and update loop (`app`)
//! - HTTP access to the user endpoint (`client`)
//! - Command-line configuration (`config`)
//! - Error and result types (`error`)
//! - User records (`model`)
//! - Case-insensitive filtering of the loaded users (`search`)
//! - The one-shot loading state machine (`source`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `user-dashboard` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod source;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, FetchError, Result};
pub use model::User;
pub use source::{LoadState, UserSource};
