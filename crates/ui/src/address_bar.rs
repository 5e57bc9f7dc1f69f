//! Address bar component.

/// Scheme prefix assumed when typed input has none.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Turn typed address bar input into a navigable URL.
///
/// Input that does not begin with `http` gets `http://` prepended. Nothing
/// else is checked: malformed input is handed to the navigation surface as is.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, input)
    }
}

/// Single-line URL field.
#[derive(Debug, Default)]
pub struct UrlBar {
    /// Committed URL of the current page.
    url: String,
    /// Text currently in the field.
    input: String,
}

impl UrlBar {
    /// Create an empty URL bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the committed URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Show a committed URL, replacing whatever was typed.
    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
        self.input = url.to_string();
    }

    /// Get the field text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the field text.
    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    /// Confirm the field, returning the URL to navigate to.
    pub fn submit(&self) -> String {
        normalize_url(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_host() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_keeps_scheme() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com/a?b"), "http://example.com/a?b");
    }

    #[test]
    fn test_normalize_passes_malformed_input() {
        assert_eq!(normalize_url("not a url"), "http://not a url");
        assert_eq!(normalize_url(""), "http://");
        // Only the literal prefix is checked.
        assert_eq!(normalize_url("httpbin.org"), "httpbin.org");
    }

    #[test]
    fn test_submit_uses_typed_input() {
        let mut bar = UrlBar::new();
        bar.set_url("http://start.test/");
        bar.set_input("example.com");

        assert_eq!(bar.url(), "http://start.test/");
        assert_eq!(bar.submit(), "http://example.com");
    }

    #[test]
    fn test_set_url_replaces_input() {
        let mut bar = UrlBar::new();
        bar.set_input("half-typed");
        bar.set_url("http://x.test/");

        assert_eq!(bar.input(), "http://x.test/");
    }
}
