use super::screen::{Screen, Tab};

/// Where a route key leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Screen(Screen),
    /// A tab key; implies `Screen::MainApp`.
    Tab(Tab),
}

impl Destination {
    pub fn screen(self) -> Screen {
        match self {
            Destination::Screen(screen) => screen,
            Destination::Tab(_) => Screen::MainApp,
        }
    }
}

/// A route key that is not part of the graph.
///
/// Keys are fixed at build time, so hitting one of these is a wiring bug,
/// not something the user can cause or recover from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown screen '{0}'")]
    UnknownScreen(String),
    #[error("unknown tab '{0}' for MainApp")]
    UnknownTab(String),
}

/// Fixed description of the app's screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGraph {
    screens: &'static [Screen],
    tabs: &'static [Tab],
}

impl RouteGraph {
    /// `Welcome`, `Login`, `Register`, and `MainApp` with its three tabs.
    pub fn standard() -> Self {
        Self {
            screens: Screen::all(),
            tabs: Tab::all(),
        }
    }

    /// Resolves a screen or tab key.
    ///
    /// # Errors
    /// Returns `RouteError::UnknownScreen` for keys outside the graph.
    pub fn resolve(&self, key: &str) -> Result<Destination, RouteError> {
        if let Some(screen) = self.screens.iter().find(|s| s.key() == key) {
            return Ok(Destination::Screen(*screen));
        }
        if let Some(tab) = self.tabs.iter().find(|t| t.key() == key) {
            return Ok(Destination::Tab(*tab));
        }
        Err(RouteError::UnknownScreen(key.to_string()))
    }

    /// Resolves a tab key of `MainApp`.
    ///
    /// # Errors
    /// Returns `RouteError::UnknownTab` if `key` names no tab.
    pub fn resolve_tab(&self, key: &str) -> Result<Tab, RouteError> {
        self.tabs
            .iter()
            .find(|t| t.key() == key)
            .copied()
            .ok_or_else(|| RouteError::UnknownTab(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_screens() {
        let graph = RouteGraph::standard();
        for screen in Screen::all() {
            assert_eq!(graph.resolve(screen.key()), Ok(Destination::Screen(*screen)));
        }
    }

    #[test]
    fn test_resolve_tab_keys_lead_to_main_app() {
        let graph = RouteGraph::standard();
        let destination = graph.resolve("Encrypt").unwrap();
        assert_eq!(destination, Destination::Tab(Tab::Encrypt));
        assert_eq!(destination.screen(), Screen::MainApp);
    }

    #[test]
    fn test_unknown_key_is_error() {
        let graph = RouteGraph::standard();
        assert_eq!(
            graph.resolve("ForgotPassword"),
            Err(RouteError::UnknownScreen("ForgotPassword".to_string()))
        );
        // Keys are case-sensitive.
        assert!(graph.resolve("welcome").is_err());
    }

    #[test]
    fn test_resolve_tab_rejects_screens() {
        let graph = RouteGraph::standard();
        assert_eq!(graph.resolve_tab("Profile"), Ok(Tab::Profile));
        assert_eq!(
            graph.resolve_tab("Login"),
            Err(RouteError::UnknownTab("Login".to_string()))
        );
    }
}
