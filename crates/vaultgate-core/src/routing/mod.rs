//! Screen graph and navigation.
//!
//! - `screen.rs`: screen and tab names
//! - `graph.rs`: the fixed route graph and key resolution
//! - `navigation.rs`: the navigation capability and the stack implementing it
//! - `router.rs`: one-time initial route selection from session state

mod graph;
mod navigation;
mod router;
mod screen;

pub use graph::{Destination, RouteError, RouteGraph};
pub use navigation::{NavParams, NavigationStack, Navigator, Route, TAB_PARAM};
pub use router::{Router, RouterView};
pub use screen::{Screen, Tab};
