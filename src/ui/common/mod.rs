//! Common reusable UI components
//!
//! Button, text field and modal dialog primitives shared by the landing
//! page and the auth dialog.

pub mod button;
pub mod form;
pub mod modal;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use form::{FormField, INPUT_CLASS};
pub use modal::Dialog;
