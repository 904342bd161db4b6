//! Establishment launcher: session, catalog and controller core plus the
//! remote client and the terminal front end that drive it.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod navigate;
pub mod remote;
pub mod runtime;
pub mod store;
pub mod tui;

mod tui_shell;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
