//! Navigation surface interface.
//!
//! The navigation surface is the embedded web engine view. It loads and
//! renders pages on its own; the shell only issues commands to it and
//! listens for location changes through an [`EventSink`].

use common::ShellResult;
use std::sync::Arc;

/// Notification emitted by a navigation surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The surface committed a new location.
    LocationChanged(String),
}

/// Callback through which a surface delivers its notifications.
pub type EventSink = Arc<dyn Fn(SurfaceEvent) + Send + Sync>;

/// Prefix of the page message reporting a same-document location change.
pub const LOCATION_MESSAGE_PREFIX: &str = "location:";

/// Script injected into the page so fragment and `history` API changes,
/// which never trigger a page load, are reported as `location:<url>`.
pub const LOCATION_SCRIPT: &str = r#"(function () {
  if (window.top !== window || !window.ipc) return;
  var report = function () {
    window.ipc.postMessage('location:' + window.location.href);
  };
  ['pushState', 'replaceState'].forEach(function (name) {
    var native = history[name];
    history[name] = function () {
      var result = native.apply(this, arguments);
      report();
      return result;
    };
  });
  window.addEventListener('hashchange', report);
  window.addEventListener('popstate', report);
})();"#;

/// Decode a `location:<url>` page message.
pub fn parse_location_message(message: &str) -> Option<&str> {
    message
        .strip_prefix(LOCATION_MESSAGE_PREFIX)
        .filter(|url| !url.is_empty())
}

/// Turns raw location reports into [`SurfaceEvent::LocationChanged`].
///
/// A report repeating the last reported URL is dropped, so a reload or a
/// page announcing its own location twice stays silent.
#[derive(Debug, Default)]
pub struct LocationTracker {
    last: Option<String>,
}

impl LocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last reported location.
    pub fn current(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Record `url`, returning the event to emit if the location changed.
    pub fn observe(&mut self, url: &str) -> Option<SurfaceEvent> {
        if self.last.as_deref() == Some(url) {
            return None;
        }
        self.last = Some(url.to_string());
        Some(SurfaceEvent::LocationChanged(url.to_string()))
    }
}

/// Construction parameters for a navigation surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// URL loaded once the surface exists.
    pub initial_url: String,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Space separated engine launch flags, possibly empty.
    pub launch_flags: String,
}

impl SurfaceOptions {
    pub fn new(initial_url: &str, user_agent: &str) -> Self {
        Self {
            initial_url: initial_url.to_string(),
            user_agent: user_agent.to_string(),
            launch_flags: String::new(),
        }
    }

    /// Set the engine launch flags.
    pub fn with_launch_flags(mut self, flags: &str) -> Self {
        self.launch_flags = flags.to_string();
        self
    }

    /// Launch flags split into individual arguments.
    pub fn launch_args(&self) -> impl Iterator<Item = &str> {
        self.launch_flags.split_whitespace()
    }
}

/// Embedded web view commands used by the shell.
pub trait NavigationSurface {
    /// Start loading a URL.
    fn load_url(&mut self, url: &str) -> ShellResult<()>;

    /// Go back in session history.
    fn back(&mut self) -> ShellResult<()>;

    /// Go forward in session history.
    fn forward(&mut self) -> ShellResult<()>;

    /// Reload the current page.
    fn reload(&mut self) -> ShellResult<()>;

    /// Highlight `query` in the current page. An empty query clears the highlight.
    fn find_text(&mut self, query: &str) -> ShellResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_args() {
        let options = SurfaceOptions::new("http://home.test/", "Agent/1.0")
            .with_launch_flags("--disable-gpu --enable-logging");

        let args: Vec<_> = options.launch_args().collect();
        assert_eq!(args, vec!["--disable-gpu", "--enable-logging"]);
    }

    #[test]
    fn test_no_launch_args() {
        let options = SurfaceOptions::new("http://home.test/", "Agent/1.0");
        assert_eq!(options.launch_args().count(), 0);
    }

    #[test]
    fn test_tracker_drops_repeated_location() {
        let mut tracker = LocationTracker::new();
        let changed = |url: &str| Some(SurfaceEvent::LocationChanged(url.to_string()));

        assert_eq!(tracker.observe("http://a.test/"), changed("http://a.test/"));
        // Reload reports the same URL again.
        assert_eq!(tracker.observe("http://a.test/"), None);
        assert_eq!(tracker.observe("http://a.test/#top"), changed("http://a.test/#top"));
        assert_eq!(tracker.observe("http://a.test/"), changed("http://a.test/"));
        assert_eq!(tracker.current(), Some("http://a.test/"));
    }

    #[test]
    fn test_parse_location_message() {
        assert_eq!(
            parse_location_message("location:http://a.test/#b"),
            Some("http://a.test/#b")
        );
        assert_eq!(parse_location_message("location:"), None);
        assert_eq!(parse_location_message("back"), None);
    }

    #[test]
    fn test_location_script_reports_history_changes() {
        assert!(LOCATION_SCRIPT.contains(LOCATION_MESSAGE_PREFIX));
        for hook in ["pushState", "replaceState", "hashchange", "popstate"] {
            assert!(LOCATION_SCRIPT.contains(hook), "missing {}", hook);
        }
    }
}
