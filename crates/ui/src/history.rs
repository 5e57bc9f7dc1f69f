//! Session history.

/// Back/forward list of visited URLs.
pub struct NavigationHistory {
    /// History entries.
    entries: Vec<String>,
    /// Index of the current entry.
    current: Option<usize>,
    /// Maximum history size.
    max_size: usize,
}

impl NavigationHistory {
    /// Create a new navigation history.
    pub fn new() -> Self {
        Self::with_max_size(50)
    }

    /// Create a history that keeps at most `max_size` entries.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            max_size: max_size.max(1),
        }
    }

    /// Push a new entry, dropping any forward entries.
    pub fn push(&mut self, url: String) {
        if let Some(current) = self.current {
            self.entries.truncate(current + 1);
        }

        self.entries.push(url);
        if self.entries.len() > self.max_size {
            self.entries.remove(0);
        }
        self.current = Some(self.entries.len() - 1);
    }

    /// Go back and return the URL.
    pub fn go_back(&mut self) -> Option<&str> {
        match self.current {
            Some(current) if current > 0 => {
                self.current = Some(current - 1);
                self.entries.get(current - 1).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Go forward and return the URL.
    pub fn go_forward(&mut self) -> Option<&str> {
        match self.current {
            Some(current) if current + 1 < self.entries.len() => {
                self.current = Some(current + 1);
                self.entries.get(current + 1).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Check if can go back.
    pub fn can_go_back(&self) -> bool {
        matches!(self.current, Some(current) if current > 0)
    }

    /// Check if can go forward.
    pub fn can_go_forward(&self) -> bool {
        matches!(self.current, Some(current) if current + 1 < self.entries.len())
    }

    /// Get the current entry.
    pub fn current(&self) -> Option<&str> {
        self.current
            .and_then(|current| self.entries.get(current))
            .map(String::as_str)
    }

    /// Get all entries.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}
