use super::graph::RouteGraph;
use super::navigation::NavigationStack;
use super::screen::Screen;
use crate::session::SessionState;

/// What the router currently shows.
#[derive(Debug, Clone)]
pub enum RouterView {
    /// Session not resolved yet; nothing is mounted.
    Suspended,
    Mounted(NavigationStack),
}

/// Picks the entry screen once and then owns the navigation stack.
///
/// Later session changes never remount the graph: getting back to
/// `Welcome` after a sign-out takes an explicit navigation.
#[derive(Debug, Clone)]
pub struct Router {
    graph: RouteGraph,
    view: RouterView,
}

impl Router {
    pub fn new(graph: RouteGraph) -> Self {
        Self {
            graph,
            view: RouterView::Suspended,
        }
    }

    /// Entry screen for `state`; `None` while still initializing.
    pub fn initial_route(state: &SessionState) -> Option<Screen> {
        match state {
            SessionState::Initializing => None,
            SessionState::Authenticated(_) => Some(Screen::MainApp),
            SessionState::Unauthenticated => Some(Screen::Welcome),
        }
    }

    /// Mounts the graph the first time `state` is resolved.
    ///
    /// Returns the chosen initial route on that call only.
    pub fn on_session_state(&mut self, state: &SessionState) -> Option<Screen> {
        if self.is_mounted() {
            return None;
        }
        let initial = Self::initial_route(state)?;
        self.view = RouterView::Mounted(NavigationStack::new(self.graph, initial));
        tracing::info!(initial = %initial, session = state.label(), "mounted screen graph");
        Some(initial)
    }

    pub fn view(&self) -> &RouterView {
        &self.view
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.view, RouterView::Mounted(_))
    }

    pub fn navigator(&self) -> Option<&NavigationStack> {
        match &self.view {
            RouterView::Mounted(stack) => Some(stack),
            RouterView::Suspended => None,
        }
    }

    pub fn navigator_mut(&mut self) -> Option<&mut NavigationStack> {
        match &mut self.view {
            RouterView::Mounted(stack) => Some(stack),
            RouterView::Suspended => None,
        }
    }

    pub fn current_screen(&self) -> Option<Screen> {
        self.navigator().map(NavigationStack::screen)
    }
}
