use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Modal dialog with overlay, header and close affordances.
///
/// Always mounted; visibility follows `is_open`, and a closed dialog is
/// `inert` so its controls cannot be focused. The close button, a click
/// on the backdrop and the Escape key all call `on_close`.
#[component]
pub fn Dialog(
    /// Dialog title
    #[prop(into)]
    title: Signal<&'static str>,
    /// Whether the dialog is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close the dialog
    on_close: Callback<()>,
    /// Dialog content
    children: Children,
    /// Maximum width class
    #[prop(default = "sm:max-w-[425px]")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-[60] flex items-center justify-center p-4 transition-opacity duration-200"
                } else {
                    "fixed inset-0 z-[60] flex items-center justify-center p-4 opacity-0 pointer-events-none transition-opacity duration-200"
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            // Keeps the hidden form out of the tab order
            inert=move || !is_open.get()
        >
            // Backdrop
            <div
                class="absolute inset-0 bg-black/80 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>

            <div class=format!(
                "relative w-full {} rounded-lg bg-black/90 p-6 text-white border border-gray-800 shadow-lg",
                max_width
            )>
                // Header
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold">{move || title.get()}</h2>
                    <button
                        type="button"
                        class="rounded-sm opacity-70 hover:opacity-100 transition-opacity"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="h-4 w-4"/>
                    </button>
                </div>

                // Content
                {children()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(open: bool) -> String {
        let owner = Owner::new();
        owner.set();

        view! {
            <Dialog title="Sign Up" is_open=open on_close=Callback::new(|_: ()| {})>
                <p>"body"</p>
            </Dialog>
        }
        .to_html()
    }

    #[test]
    fn test_open_dialog_is_visible() {
        let html = render(true);
        assert!(html.contains(r#"aria-hidden="false""#));
        assert!(!html.contains("inert"));
        assert!(html.contains("Sign Up"));
        assert!(html.contains("body"));
    }

    #[test]
    fn test_closed_dialog_stays_mounted_but_hidden() {
        let html = render(false);
        assert!(html.contains("opacity-0 pointer-events-none"));
        assert!(html.contains(" inert"));
        assert!(html.contains("body"));
    }
}
