//! UI-independent state machines and server plumbing

pub mod auth_dialog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod menu;
pub mod reveal;
#[cfg(feature = "ssr")]
pub mod server;

pub use auth_dialog::{AuthDialogState, AuthFields, AuthMode, CallToAction, Credentials};
pub use menu::MenuState;
pub use reveal::{ObserverTable, RevealConfig, RevealController, RevealState, RevealStyle, WatchId};
