//! Browser shell controller.
//!
//! Connects the toolbar and URL field to the navigation surface, and the
//! surface's location changes back to the URL field and the visit log.

use tracing::{debug, info, warn};
use ui::{
    NavigationAction, NavigationSurface, SearchPrompt, SurfaceEvent, ToolbarCommand, UrlBar,
    WindowChrome,
};

use crate::config::BrowserConfig;
use crate::visit_log::VisitLog;

/// The browser shell controller.
pub struct BrowserController<S, C> {
    /// Browser configuration, read-only for the session.
    config: BrowserConfig,
    /// Embedded web view.
    surface: S,
    /// Window chrome.
    chrome: C,
    /// URL field model.
    url_bar: UrlBar,
    /// Visit log.
    visit_log: VisitLog,
}

impl<S: NavigationSurface, C: WindowChrome> BrowserController<S, C> {
    /// Create a controller over an already constructed surface and chrome.
    pub fn new(config: BrowserConfig, surface: S, chrome: C, visit_log: VisitLog) -> Self {
        Self {
            config,
            surface,
            chrome,
            url_bar: UrlBar::new(),
            visit_log,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Get the navigation surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get the window chrome.
    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    /// Get the URL field model.
    pub fn url_bar(&self) -> &UrlBar {
        &self.url_bar
    }

    /// Handle a toolbar navigation button.
    pub fn run_action(&mut self, action: NavigationAction) {
        let result = match action {
            NavigationAction::Back => self.surface.back(),
            NavigationAction::Forward => self.surface.forward(),
            NavigationAction::Reload => self.surface.reload(),
            NavigationAction::Home => self.surface.load_url(&self.config.homepage),
        };

        if let Err(e) = result {
            warn!("{} failed: {}", action.label(), e);
        }
    }

    /// Handle text confirmed in the URL field.
    pub fn submit_url(&mut self, text: &str) {
        self.url_bar.set_input(text);
        let url = self.url_bar.submit();
        debug!("Navigating to {}", url);

        if let Err(e) = self.surface.load_url(&url) {
            warn!("Failed to load {}: {}", url, e);
        }
    }

    /// Handle the search prompt result. Cancelled or empty input does nothing.
    pub fn search(&mut self, input: Option<&str>) {
        let Some(query) = SearchPrompt::accept(input) else {
            return;
        };

        // Clear the previous highlight before searching again.
        let result = self
            .surface
            .find_text("")
            .and_then(|()| self.surface.find_text(&query));
        if let Err(e) = result {
            warn!("Search for {:?} failed: {}", query, e);
        }
    }

    /// Handle a location change reported by the surface.
    pub fn on_location_changed(&mut self, url: &str) {
        self.url_bar.set_url(url);
        self.chrome.set_url_text(url);
        info!("Visited: {}", url);

        if let Err(e) = self.visit_log.record(url) {
            warn!("Failed to append visit log entry for {}: {}", url, e);
        }
    }

    /// Dispatch a surface notification.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::LocationChanged(url) => self.on_location_changed(&url),
        }
    }

    /// Dispatch a toolbar command.
    pub fn handle_toolbar(&mut self, command: ToolbarCommand) {
        match command {
            ToolbarCommand::Navigation(action) => self.run_action(action),
            ToolbarCommand::Navigate(text) => self.submit_url(&text),
            ToolbarCommand::Search(input) => self.search(input.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use common::{ShellError, ShellResult};
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Load(String),
        Back,
        Forward,
        Reload,
        Find(String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
        fail: bool,
    }

    impl RecordingSurface {
        fn record(&mut self, call: Call) -> ShellResult<()> {
            self.calls.push(call);
            if self.fail {
                Err(ShellError::window("engine gone"))
            } else {
                Ok(())
            }
        }
    }

    impl NavigationSurface for RecordingSurface {
        fn load_url(&mut self, url: &str) -> ShellResult<()> {
            self.record(Call::Load(url.to_string()))
        }

        fn back(&mut self) -> ShellResult<()> {
            self.record(Call::Back)
        }

        fn forward(&mut self) -> ShellResult<()> {
            self.record(Call::Forward)
        }

        fn reload(&mut self) -> ShellResult<()> {
            self.record(Call::Reload)
        }

        fn find_text(&mut self, query: &str) -> ShellResult<()> {
            self.record(Call::Find(query.to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingChrome {
        url_text: Vec<String>,
    }

    impl WindowChrome for RecordingChrome {
        fn set_url_text(&mut self, text: &str) {
            self.url_text.push(text.to_string());
        }
    }

    fn controller(dir: &TempDir) -> BrowserController<RecordingSurface, RecordingChrome> {
        BrowserController::new(
            BrowserConfig::new().with_homepage("http://home.test/"),
            RecordingSurface::default(),
            RecordingChrome::default(),
            VisitLog::new(dir.path().join("logs")),
        )
    }

    #[test]
    fn test_navigation_buttons_delegate() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);

        controller.run_action(NavigationAction::Back);
        controller.run_action(NavigationAction::Forward);
        controller.run_action(NavigationAction::Reload);
        controller.run_action(NavigationAction::Home);

        assert_eq!(
            controller.surface().calls,
            vec![
                Call::Back,
                Call::Forward,
                Call::Reload,
                Call::Load("http://home.test/".to_string()),
            ]
        );
    }

    #[test]
    fn test_submit_url_adds_scheme() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);

        controller.submit_url("example.com");
        controller.submit_url("https://example.com");

        assert_eq!(
            controller.surface().calls,
            vec![
                Call::Load("http://example.com".to_string()),
                Call::Load("https://example.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_clears_then_searches() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);

        controller.search(Some("needle"));

        assert_eq!(
            controller.surface().calls,
            vec![Call::Find(String::new()), Call::Find("needle".to_string())]
        );
    }

    #[test]
    fn test_search_cancel_or_empty_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);

        controller.search(None);
        controller.search(Some(""));

        assert!(controller.surface().calls.is_empty());
    }

    #[test]
    fn test_location_change_updates_field_and_log() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);

        controller.handle_event(SurfaceEvent::LocationChanged("http://x.test/".to_string()));

        assert_eq!(controller.chrome().url_text, vec!["http://x.test/"]);
        assert_eq!(controller.url_bar().input(), "http://x.test/");

        let path = VisitLog::new(dir.path().join("logs")).path_for(Local::now().date_naive());
        let contents = fs::read_to_string(path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" - http://x.test/"));
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(lines[0].find(" - "), Some(19));
    }

    #[test]
    fn test_log_failure_does_not_stop_ui_update() {
        let dir = TempDir::new().unwrap();
        // A plain file where the log directory should be.
        let blocked = dir.path().join("logs");
        fs::write(&blocked, "").unwrap();

        let mut controller = controller(&dir);
        controller.on_location_changed("http://x.test/");

        assert_eq!(controller.chrome().url_text, vec!["http://x.test/"]);
    }

    #[test]
    fn test_surface_errors_are_swallowed() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);
        controller.surface.fail = true;

        controller.run_action(NavigationAction::Reload);
        controller.submit_url("example.com");
        controller.search(Some("needle"));

        // The failed clear stops the search from being issued.
        assert_eq!(
            controller.surface().calls,
            vec![
                Call::Reload,
                Call::Load("http://example.com".to_string()),
                Call::Find(String::new()),
            ]
        );
    }

    #[test]
    fn test_toolbar_dispatch() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);

        for message in ["home", "navigate:example.com", "search:abc", "search-cancel"] {
            controller.handle_toolbar(ToolbarCommand::parse(message).unwrap());
        }

        assert_eq!(
            controller.surface().calls,
            vec![
                Call::Load("http://home.test/".to_string()),
                Call::Load("http://example.com".to_string()),
                Call::Find(String::new()),
                Call::Find("abc".to_string()),
            ]
        );
    }
}
