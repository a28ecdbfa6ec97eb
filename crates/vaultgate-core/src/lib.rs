//! Core vaultgate library (session, routing, login form, providers, config).

pub mod config;
pub mod identity;
pub mod login;
pub mod logging;
pub mod providers;
pub mod routing;
pub mod session;
pub mod shell;
pub mod validation;

pub use identity::Identity;
