//! Navigation toolbar actions.

/// Toolbar navigation action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationAction {
    Back,
    Forward,
    Reload,
    Home,
}

impl NavigationAction {
    /// Toolbar button label.
    pub fn label(&self) -> &'static str {
        match self {
            NavigationAction::Back => "Back",
            NavigationAction::Forward => "Forward",
            NavigationAction::Reload => "Reload",
            NavigationAction::Home => "Home",
        }
    }
}
