//! Sign-in / sign-up dialog state machine
//!
//! ```text
//! Closed ──open(mode)──▶ Open(SignIn | SignUp) ──close() / submit()──▶ Closed
//! ```
//!
//! Every return to `Closed` clears the three text fields. Submission is
//! unconditionally successful: there is no backend here, the captured
//! [`Credentials`] are handed back to the caller to log or forward.

use serde::Serialize;
use std::fmt;

/// Which form the dialog shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMode {
    SignIn,
    #[default]
    SignUp,
}

impl AuthMode {
    /// Dialog heading and submit button label
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }

    /// Whether the sign-up-only name field is shown
    pub fn shows_name(&self) -> bool {
        matches!(self, AuthMode::SignUp)
    }

    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

/// Every clickable control on the page that opens the dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallToAction {
    HeaderSignIn,
    HeaderSignUp,
    MobileSignIn,
    MobileSignUp,
    Hero,
    /// "Choose Plan" on the named pricing tier
    PricingTier(&'static str),
    ContactSection,
}

impl CallToAction {
    /// The mode this affordance opens the dialog in
    pub fn mode(&self) -> AuthMode {
        match self {
            CallToAction::HeaderSignIn | CallToAction::MobileSignIn => AuthMode::SignIn,
            CallToAction::HeaderSignUp
            | CallToAction::MobileSignUp
            | CallToAction::Hero
            | CallToAction::PricingTier(_)
            | CallToAction::ContactSection => AuthMode::SignUp,
        }
    }
}

/// The three ephemeral text fields of the form
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
impl AuthFields {
    fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.password.is_empty()
    }
}

/// Payload captured by a submit; what a real backend would receive
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Open/closed state, mode and field values of the auth dialog
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthDialogState {
    is_open: bool,
    mode: AuthMode,
    fields: AuthFields,
}

impl AuthDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn fields(&self) -> &AuthFields {
        &self.fields
    }

    /// Open the dialog in `mode`.
    ///
    /// If it is already open in the other mode, the mode flips and the
    /// sign-up-only name field is cleared.
    pub fn open(&mut self, mode: AuthMode) {
        if self.is_open && self.mode != mode {
            self.fields.name.clear();
        }
        self.mode = mode;
        self.is_open = true;
    }

    /// Close the dialog and clear all fields
    pub fn close(&mut self) {
        self.is_open = false;
        self.fields = AuthFields::default();
    }

    /// Flip between sign-in and sign-up while open.
    ///
    /// The sign-up-only name field is cleared; email and password are kept.
    pub fn switch_mode(&mut self) {
        if !self.is_open {
            return;
        }
        self.mode = self.mode.toggled();
        self.fields.name.clear();
    }

    /// Field edits are ignored while the dialog is closed, so nothing typed
    /// into a hidden form survives into the next `open()`.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.is_open {
            self.fields.name = name.into();
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.is_open {
            self.fields.email = email.into();
        }
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        if self.is_open {
            self.fields.password = password.into();
        }
    }

    /// Capture the form, clear it and close the dialog.
    ///
    /// Returns `None` when the dialog is not open, so one open dialog yields
    /// at most one capture.
    pub fn submit(&mut self) -> Option<Credentials> {
        if !self.is_open {
            return None;
        }

        let fields = std::mem::take(&mut self.fields);
        let credentials = Credentials {
            email: fields.email,
            password: fields.password,
            name: self.mode.shows_name().then_some(fields.name),
        };
        self.close();
        Some(credentials)
    }
}
