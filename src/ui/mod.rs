pub mod auth_dialog;
pub mod common;
pub mod icon;
pub mod pages;
pub mod reveal;

pub use auth_dialog::AuthDialog;
pub use icon::{Icon, icons};
pub use reveal::{AnimatedSection, RevealError, RevealItem, StaggerGroup};
