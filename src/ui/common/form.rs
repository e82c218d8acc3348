use leptos::prelude::*;

/// Labelled text input bound to a signal
#[component]
pub fn FormField(
    /// Element id; also links the label to the input
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser-level required validation; the only check the form gets
    #[prop(default = false)]
    required: bool,
    /// Autocomplete hint
    #[prop(optional)]
    autocomplete: Option<&'static str>,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium text-gray-200">
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Shared look of text inputs on the dark glass background
pub const INPUT_CLASS: &str = "flex h-10 w-full rounded-md border border-gray-700 bg-black/50 px-3 py-2 \
                               text-sm text-white placeholder-gray-400 focus-visible:outline-none \
                               focus-visible:ring-2 focus-visible:ring-white/40";
