use leptos::prelude::*;

/// Inline stroke icon; inherits `currentColor`, so text color classes tint it
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=glyph(name)
        ></svg>
    }
}

/// SVG body of a named icon; unknown names render nothing
pub fn glyph(name: &str) -> &'static str {
    match name {
        icons::ARROW_RIGHT => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
        icons::CHECK_CIRCLE => r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
        icons::GLOBE => {
            r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#
        }
        icons::ZAP => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
        icons::SHIELD => r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#,
        icons::BAR_CHART => {
            r#"<path d="M3 3v18h18"/><path d="M18 17V9"/><path d="M13 17V5"/><path d="M8 17v-3"/>"#
        }
        icons::USERS => {
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
        }
        icons::LAPTOP => {
            r#"<path d="M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16"/>"#
        }
        icons::HEADPHONES => {
            r#"<path d="M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3"/>"#
        }
        icons::MENU => {
            r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
        }
        icons::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        _ => "",
    }
}

/// Icon names used across the page
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const GLOBE: &str = "globe";
    pub const ZAP: &str = "zap";
    pub const SHIELD: &str = "shield";
    pub const BAR_CHART: &str = "bar-chart";
    pub const USERS: &str = "users";
    pub const LAPTOP: &str = "laptop";
    pub const HEADPHONES: &str = "headphones";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_icon_has_a_glyph() {
        let all = [
            icons::ARROW_RIGHT,
            icons::CHECK_CIRCLE,
            icons::GLOBE,
            icons::ZAP,
            icons::SHIELD,
            icons::BAR_CHART,
            icons::USERS,
            icons::LAPTOP,
            icons::HEADPHONES,
            icons::MENU,
            icons::X,
        ];
        for name in all {
            assert!(!glyph(name).is_empty(), "missing glyph for {name}");
        }
    }

    #[test]
    fn test_unknown_icon_is_empty() {
        assert_eq!(glyph("does-not-exist"), "");
    }
}
