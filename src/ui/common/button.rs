use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    /// Solid white button, the main call-to-action look
    Solid,
    /// Transparent button that lights up on hover
    Ghost,
    /// Square icon-only button
    Icon,
}

/// Button size options
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
    ExtraLarge,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => "bg-white text-black hover:bg-gray-200",
            ButtonVariant::Ghost => "bg-transparent text-white hover:bg-white/10",
            ButtonVariant::Icon => "bg-transparent text-white hover:bg-white/10 h-10 w-10",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "h-10 px-4 py-2 text-sm",
            ButtonSize::Large => "text-lg px-8 py-3",
            ButtonSize::ExtraLarge => "text-lg px-8 py-6",
        }
    }
}

const BASE_CLASS: &str = "inline-flex items-center justify-center rounded-md font-medium \
                          transition-colors focus-visible:outline-none focus-visible:ring-2 \
                          focus-visible:ring-white/50 disabled:pointer-events-none disabled:opacity-50";

/// Full class list of a button, extra classes last
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let size = if variant == ButtonVariant::Icon {
        ""
    } else {
        size.class()
    };

    [BASE_CLASS, variant.class(), size, extra]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Solid)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler; submit buttons usually leave it empty
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// HTML button type ("button" or "submit")
    #[prop(default = "button")]
    button_type: &'static str,
    /// Accessible label for icon-only buttons
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name to show after text
    #[prop(optional)]
    trailing_icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_class(variant, size, class)
            aria-label=aria_label
            on:click=move |_| {
                if let Some(callback) = on_click.as_ref() {
                    callback.run(());
                }
            }
        >
            {children()}
            {trailing_icon.map(|name| view! { <Icon name=name class="ml-2 h-5 w-5"/> })}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_button_class() {
        let class = button_class(ButtonVariant::Solid, ButtonSize::Medium, "");
        assert!(class.starts_with("inline-flex"));
        assert!(class.contains("bg-white text-black"));
        assert!(class.contains("h-10 px-4 py-2"));
        assert!(!class.ends_with(' '));
    }

    #[test]
    fn test_extra_classes_come_last() {
        let class = button_class(ButtonVariant::Ghost, ButtonSize::Large, "w-full");
        assert!(class.contains("hover:bg-white/10"));
        assert!(class.contains("text-lg px-8 py-3"));
        assert!(class.ends_with("w-full"));
    }

    #[test]
    fn test_icon_button_ignores_size() {
        let class = button_class(ButtonVariant::Icon, ButtonSize::ExtraLarge, "");
        assert!(class.contains("h-10 w-10"));
        assert!(!class.contains("py-6"));
    }
}
