//! Simple Browser - a minimal desktop browser shell.
//!
//! This crate wires an embedded web view to its window chrome:
//! - Settings file with defaults
//! - Engine launch flags
//! - Per-day visit logging and retention
//! - Toolbar and URL field handling
//! - Headless and native window front ends

pub mod config;
pub mod controller;
pub mod flags;
pub mod headless;
pub mod launch;
pub mod logging;
pub mod retention;
#[cfg(feature = "webview")]
pub mod shell;
pub mod visit_log;

pub use config::{BrowserConfig, ConfigStore};
pub use controller::BrowserController;
pub use flags::build_flags;
pub use launch::LaunchPlan;
pub use visit_log::VisitLog;

/// Browser version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
