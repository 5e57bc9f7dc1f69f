//! In-page search prompt.

/// Outcome handling for the modal search prompt.
pub struct SearchPrompt;

impl SearchPrompt {
    /// Title shown on the modal.
    pub const TITLE: &'static str = "Search";
    /// Label shown next to the input.
    pub const LABEL: &'static str = "Search text:";

    /// Accept the prompt result.
    ///
    /// Returns the query to search for, or `None` when the prompt was
    /// cancelled or confirmed empty.
    pub fn accept(input: Option<&str>) -> Option<String> {
        match input {
            Some(text) if !text.is_empty() => Some(text.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_text() {
        assert_eq!(SearchPrompt::accept(Some("rust")), Some("rust".to_string()));
    }

    #[test]
    fn test_cancel_and_empty() {
        assert_eq!(SearchPrompt::accept(None), None);
        assert_eq!(SearchPrompt::accept(Some("")), None);
    }
}
