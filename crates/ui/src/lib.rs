//! Browser UI shell.
//!
//! This crate models the window chrome independently of any toolkit:
//! - Address bar and URL normalization
//! - Navigation actions and the in-page search prompt
//! - Dark palette
//! - Toolbar markup and its message protocol
//! - The navigation surface and window chrome interfaces

pub mod address_bar;
pub mod find_bar;
pub mod history;
pub mod navigation;
pub mod surface;
pub mod theme;
pub mod toolbar;
pub mod window;

pub use address_bar::{normalize_url, UrlBar};
pub use find_bar::SearchPrompt;
pub use history::NavigationHistory;
pub use navigation::NavigationAction;
pub use surface::{
    parse_location_message, EventSink, LocationTracker, NavigationSurface, SurfaceEvent,
    SurfaceOptions, LOCATION_SCRIPT,
};
pub use theme::{ColorRole, Palette};
pub use toolbar::{render_toolbar_html, ToolbarCommand};
pub use window::{ChromeOptions, WindowChrome, WindowDimensions};
