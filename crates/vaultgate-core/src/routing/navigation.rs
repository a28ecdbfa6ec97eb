use std::collections::BTreeMap;

use super::graph::{Destination, RouteError, RouteGraph};
use super::screen::{Screen, Tab};

/// Optional navigation parameters.
pub type NavParams = BTreeMap<String, String>;

/// `MainApp` param selecting the tab to show.
pub const TAB_PARAM: &str = "screen";

/// Navigation capability handed to screens.
pub trait Navigator {
    /// Navigates to the screen or tab named `key`.
    ///
    /// # Errors
    /// Returns a `RouteError` if `key` (or a tab param) is not in the graph.
    /// Nothing changes in that case.
    fn navigate(&mut self, key: &str, params: Option<NavParams>) -> Result<(), RouteError>;

    /// Pops the current screen. Returns false at the root.
    fn go_back(&mut self) -> bool;
}

/// One entry of the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub screen: Screen,
    pub params: NavParams,
}

impl Route {
    fn new(screen: Screen, params: NavParams) -> Self {
        Self { screen, params }
    }
}

/// Stack navigator over the route graph.
///
/// Navigating to a screen that is already on the stack pops back to it
/// instead of pushing a duplicate. The stack is never empty.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    graph: RouteGraph,
    routes: Vec<Route>,
    tab: Tab,
}

impl NavigationStack {
    pub fn new(graph: RouteGraph, initial: Screen) -> Self {
        Self {
            graph,
            routes: vec![Route::new(initial, NavParams::new())],
            tab: Tab::default(),
        }
    }

    pub fn current(&self) -> &Route {
        // Invariant: never empty.
        &self.routes[self.routes.len() - 1]
    }

    pub fn screen(&self) -> Screen {
        self.current().screen
    }

    /// Active tab of `MainApp` (kept while other screens are on top).
    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    fn push_or_pop_to(&mut self, screen: Screen, params: NavParams) {
        if let Some(pos) = self.routes.iter().position(|r| r.screen == screen) {
            self.routes.truncate(pos + 1);
            self.routes[pos].params = params;
        } else {
            self.routes.push(Route::new(screen, params));
        }
        tracing::debug!(screen = %screen, tab = %self.tab, depth = self.routes.len(), "navigated");
    }
}

impl Navigator for NavigationStack {
    fn navigate(&mut self, key: &str, params: Option<NavParams>) -> Result<(), RouteError> {
        let params = params.unwrap_or_default();
        match self.graph.resolve(key)? {
            Destination::Screen(Screen::MainApp) => {
                if let Some(tab_key) = params.get(TAB_PARAM) {
                    self.tab = self.graph.resolve_tab(tab_key)?;
                }
                self.push_or_pop_to(Screen::MainApp, params);
            }
            Destination::Screen(screen) => self.push_or_pop_to(screen, params),
            Destination::Tab(tab) => {
                self.tab = tab;
                self.push_or_pop_to(Screen::MainApp, params);
            }
        }
        Ok(())
    }

    fn go_back(&mut self) -> bool {
        if self.routes.len() <= 1 {
            return false;
        }
        self.routes.pop();
        tracing::debug!(screen = %self.screen(), "went back");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(initial: Screen) -> NavigationStack {
        NavigationStack::new(RouteGraph::standard(), initial)
    }

    fn screens(stack: &NavigationStack) -> Vec<Screen> {
        stack.routes().iter().map(|r| r.screen).collect()
    }

    #[test]
    fn test_navigate_pushes() {
        let mut nav = stack(Screen::Welcome);
        nav.navigate("Login", None).unwrap();
        assert_eq!(screens(&nav), vec![Screen::Welcome, Screen::Login]);
    }

    #[test]
    fn test_navigate_to_existing_pops_back() {
        let mut nav = stack(Screen::Welcome);
        nav.navigate("Login", None).unwrap();
        nav.navigate("Register", None).unwrap();
        nav.navigate("Welcome", None).unwrap();
        assert_eq!(screens(&nav), vec![Screen::Welcome]);
    }

    #[test]
    fn test_navigate_to_current_keeps_depth() {
        let mut nav = stack(Screen::Welcome);
        nav.navigate("Welcome", None).unwrap();
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_go_back_stops_at_root() {
        let mut nav = stack(Screen::Welcome);
        nav.navigate("Login", None).unwrap();
        assert!(nav.go_back());
        assert!(!nav.go_back());
        assert_eq!(nav.screen(), Screen::Welcome);
    }

    #[test]
    fn test_tab_key_selects_tab() {
        let mut nav = stack(Screen::MainApp);
        nav.navigate("Profile", None).unwrap();
        assert_eq!(nav.screen(), Screen::MainApp);
        assert_eq!(nav.tab(), Tab::Profile);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_main_app_screen_param_selects_tab() {
        let mut nav = stack(Screen::Login);
        let params = NavParams::from([(TAB_PARAM.to_string(), "Encrypt".to_string())]);
        nav.navigate("MainApp", Some(params.clone())).unwrap();
        assert_eq!(nav.tab(), Tab::Encrypt);
        assert_eq!(nav.current().params, params);
    }

    #[test]
    fn test_invalid_keys_leave_stack_untouched() {
        let mut nav = stack(Screen::Login);
        assert_eq!(
            nav.navigate("ForgotPassword", None),
            Err(RouteError::UnknownScreen("ForgotPassword".to_string()))
        );
        let params = NavParams::from([(TAB_PARAM.to_string(), "Settings".to_string())]);
        assert_eq!(
            nav.navigate("MainApp", Some(params)),
            Err(RouteError::UnknownTab("Settings".to_string()))
        );
        assert_eq!(screens(&nav), vec![Screen::Login]);
        assert_eq!(nav.tab(), Tab::MyFiles);
    }
}
