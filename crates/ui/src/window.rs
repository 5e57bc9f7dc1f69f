//! Browser window chrome.

use crate::theme::Palette;

/// Default window title.
pub const DEFAULT_TITLE: &str = "Simple Browser";

/// Window dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowDimensions {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowDimensions {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            width: 1280,
            height: 800,
        }
    }
}

/// Construction parameters for the window chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChromeOptions {
    pub title: String,
    pub dimensions: WindowDimensions,
    /// Palette applied to the whole chrome, `None` for the platform default.
    pub palette: Option<Palette>,
}

impl ChromeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the chrome to the dark palette.
    ///
    /// Calling this again has no further effect, and there is no way back to
    /// the default palette.
    pub fn enable_dark_mode(&mut self) {
        if self.palette.is_none() {
            self.palette = Some(Palette::dark());
        }
    }

    /// Check if the dark palette is in use.
    pub fn is_dark(&self) -> bool {
        self.palette.is_some()
    }
}

impl Default for ChromeOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            dimensions: WindowDimensions::default(),
            palette: None,
        }
    }
}

/// Window chrome surrounding the navigation surface.
pub trait WindowChrome {
    /// Show `text` in the URL field.
    fn set_url_text(&mut self, text: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ChromeOptions::new();

        assert_eq!(options.title, "Simple Browser");
        assert_eq!(
            options.dimensions,
            WindowDimensions {
                x: 100,
                y: 100,
                width: 1280,
                height: 800,
            }
        );
        assert!(!options.is_dark());
    }

    #[test]
    fn test_enable_dark_mode_is_idempotent() {
        let mut options = ChromeOptions::new();

        options.enable_dark_mode();
        let first = options.palette.clone();
        options.enable_dark_mode();

        assert!(options.is_dark());
        assert_eq!(options.palette, first);
        assert_eq!(options.palette, Some(Palette::dark()));
    }
}
