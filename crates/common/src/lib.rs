//! Common types shared by the browser shell crates.

pub mod color;
pub mod error;

pub use color::Color;
pub use error::{ShellError, ShellResult};
