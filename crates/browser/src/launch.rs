//! Startup parameters derived from the configuration.

use ui::{normalize_url, ChromeOptions, SurfaceOptions};

use crate::config::BrowserConfig;
use crate::flags::build_flags;

/// Everything needed to construct the surface and the chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchPlan {
    pub surface: SurfaceOptions,
    pub chrome: ChromeOptions,
}

impl LaunchPlan {
    /// Derive the launch plan. `initial_url` overrides the homepage for the
    /// first load and is normalized like URL field input.
    pub fn from_config(config: &BrowserConfig, initial_url: Option<&str>) -> Self {
        let initial_url = match initial_url {
            Some(url) => normalize_url(url),
            None => config.homepage.clone(),
        };

        let surface = SurfaceOptions::new(&initial_url, &config.user_agent)
            .with_launch_flags(&build_flags(config));

        let mut chrome = ChromeOptions::new();
        if config.dark_mode {
            chrome.enable_dark_mode();
        }

        Self { surface, chrome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_defaults() {
        let plan = LaunchPlan::from_config(&BrowserConfig::default(), None);

        assert_eq!(plan.surface.initial_url, "http://127.0.0.1:7860/");
        assert_eq!(plan.surface.user_agent, "SimpleBrowser/1.0");
        assert_eq!(
            plan.surface.launch_flags,
            "--disable-gpu --disable-software-rasterizer"
        );
        assert!(!plan.chrome.is_dark());
    }

    #[test]
    fn test_dark_mode_sets_palette() {
        let config = BrowserConfig::new().with_dark_mode(true);
        let plan = LaunchPlan::from_config(&config, None);

        assert!(plan.chrome.is_dark());
    }

    #[test]
    fn test_initial_url_override() {
        let plan = LaunchPlan::from_config(&BrowserConfig::default(), Some("example.com"));
        assert_eq!(plan.surface.initial_url, "http://example.com");
    }
}
