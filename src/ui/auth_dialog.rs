//! Sign-in / sign-up modal
//!
//! Renders an [`AuthDialogState`] owned by the page. There is no backend:
//! submitting hands the captured [`Credentials`] to `on_submit` and closes.

use leptos::prelude::*;

use crate::core::auth_dialog::{AuthDialogState, AuthMode, Credentials};
use crate::ui::common::{Button, ButtonVariant, Dialog, FormField};

/// Auth dialog component
#[component]
pub fn AuthDialog(
    /// Dialog state shared with the page
    state: RwSignal<AuthDialogState>,
    /// Receives the credentials of every successful submit
    #[prop(optional, into)]
    on_submit: Option<Callback<Credentials>>,
) -> impl IntoView {
    let mode = Memo::new(move |_| state.with(|s| s.mode()));
    let is_open = Signal::derive(move || state.with(|s| s.is_open()));
    let title = Signal::derive(move || mode.get().title());

    let close = Callback::new(move |_: ()| state.update(|s| s.close()));

    // Handle form submission
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let captured = state.try_update(|s| s.submit()).flatten();
        if let (Some(credentials), Some(callback)) = (captured, on_submit.as_ref()) {
            callback.run(credentials);
        }
    };

    let name = Signal::derive(move || state.with(|s| s.fields().name.clone()));
    let email = Signal::derive(move || state.with(|s| s.fields().email.clone()));
    let password = Signal::derive(move || state.with(|s| s.fields().password.clone()));

    view! {
        <Dialog title=title is_open=is_open on_close=close>
            <form on:submit=handle_submit class="space-y-4 mt-4">
                {move || {
                    mode.get().shows_name().then(|| view! {
                        <FormField
                            id="name"
                            label="Name"
                            placeholder="Enter your name"
                            autocomplete="name"
                            required=true
                            value=name
                            on_input=Callback::new(move |value: String| state.update(|s| s.set_name(value)))
                        />
                    })
                }}

                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="Enter your email"
                    autocomplete="email"
                    required=true
                    value=email
                    on_input=Callback::new(move |value: String| state.update(|s| s.set_email(value)))
                />

                <FormField
                    id="password"
                    label="Password"
                    input_type="password"
                    placeholder="Enter your password"
                    autocomplete="current-password"
                    required=true
                    value=password
                    on_input=Callback::new(move |value: String| state.update(|s| s.set_password(value)))
                />

                <Button button_type="submit" class="w-full">
                    {move || mode.get().title()}
                </Button>

                // Mode switch link
                <div class="text-center text-sm text-gray-400">
                    {move || match mode.get() {
                        AuthMode::SignIn => "Don't have an account? ",
                        AuthMode::SignUp => "Already have an account? ",
                    }}
                    <Button
                        variant=ButtonVariant::Ghost
                        class="h-auto px-1 py-0 underline"
                        on_click=Callback::new(move |_: ()| state.update(|s| s.switch_mode()))
                    >
                        {move || mode.get().toggled().title()}
                    </Button>
                </div>
            </form>
        </Dialog>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(state: AuthDialogState) -> String {
        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(state);
        view! { <AuthDialog state=state/> }.to_html()
    }

    #[test]
    fn test_closed_dialog_is_hidden() {
        let html = render(AuthDialogState::new());
        assert!(html.contains("opacity-0 pointer-events-none"));
        assert!(!html.contains(r#"aria-hidden="false""#));
    }

    #[test]
    fn test_closed_dialog_form_is_inert() {
        let html = render(AuthDialogState::new());
        assert!(html.contains(r#"id="email""#));
        assert!(html.contains(" inert"));

        let mut state = AuthDialogState::new();
        state.open(AuthMode::SignIn);
        assert!(!render(state).contains(" inert"));
    }

    #[test]
    fn test_signup_dialog_shows_name_field() {
        let mut state = AuthDialogState::new();
        state.open(AuthMode::SignUp);
        let html = render(state);

        assert!(html.contains("Sign Up"));
        assert!(html.contains(r#"id="name""#));
        assert!(html.contains(r#"id="email""#));
        assert!(html.contains(r#"id="password""#));
        assert!(html.contains("Already have an account?"));
        assert!(html.contains(r#"aria-hidden="false""#));
    }

    #[test]
    fn test_signin_dialog_hides_name_field() {
        let mut state = AuthDialogState::new();
        state.open(AuthMode::SignIn);
        let html = render(state);

        assert!(html.contains("Sign In"));
        assert!(!html.contains(r#"id="name""#));
        assert!(html.contains(r#"id="email""#));
        assert!(!html.contains("Already have an account?"));
    }
}
