//! Landing page component
//!
//! The GlassSaaS marketing page:
//! - SEO meta tags
//! - Fixed glass header with a collapsible mobile menu
//! - Hero, features, pricing, bento grid and call-to-action sections, each
//!   fading in the first time it scrolls into view
//! - Footer
//! - Sign-in / sign-up dialog opened by every call-to-action

use leptos::logging::log;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::content::{
    BENTO_ITEMS, BRAND, BentoItem, CONTACT_ACTION, COPYRIGHT, CTA_SUBTITLE, CTA_TITLE,
    DialogAction, FEATURES, FOOTER_LINKS, Feature, HEADER_ACTIONS, HERO_ACTION, HERO_SUBTITLE,
    HERO_TITLE, META_DESCRIPTION, MOBILE_ACTIONS, NAV_LINKS, PRICING_TIERS, PricingTier,
};
use crate::core::auth_dialog::{AuthDialogState, AuthMode, CallToAction, Credentials};
use crate::core::menu::MenuState;
use crate::ui::auth_dialog::AuthDialog;
use crate::ui::common::{Button, ButtonSize, ButtonVariant, INPUT_CLASS};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{AnimatedSection, RevealItem, StaggerGroup};

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let dialog = RwSignal::new(AuthDialogState::new());

    // Shared by every call-to-action on the page
    let open_dialog = Callback::new(move |cta: CallToAction| {
        dialog.update(|d| d.open(cta.mode()));
    });

    // No backend: the captured credentials are only logged
    let on_submit = Callback::new(move |credentials: Credentials| {
        log!("Form submitted: {:?}", credentials);
    });

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-black to-gray-800 text-gray-100 overflow-hidden">
            <AuthDialog state=dialog on_submit=on_submit />

            <Header open_dialog=open_dialog />

            <main class="pt-20">
                <HeroSection open_dialog=open_dialog />
                <FeaturesSection />
                <PricingSection open_dialog=open_dialog />
                <BentoSection />
                <CtaSection open_dialog=open_dialog />
            </main>

            <Footer />

            // CSS Animations
            <LandingStyles />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="GlassSaaS - Transform Your Workflow" />
        <Meta name="description" content=META_DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="GlassSaaS - Transform Your Workflow" />
        <Meta property="og:description" content=META_DESCRIPTION />
    }
}

/// Header component with mobile menu support
#[component]
fn Header(open_dialog: Callback<CallToAction>) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let toggle_menu = move || menu.update(|m| m.toggle());

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-black/30 border-b border-gray-800">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <div class="text-2xl font-bold text-white">{BRAND}</div>

                // Desktop Navigation
                <nav class="hidden md:flex space-x-8">
                    {NAV_LINKS.into_iter().map(|link| view! {
                        <a href=link.href class="text-gray-300 hover:text-white transition-colors">
                            {link.label}
                        </a>
                    }).collect_view()}
                </nav>

                // Mobile menu button
                <div class="md:hidden">
                    <Button
                        variant=ButtonVariant::Icon
                        aria_label="Toggle menu"
                        on_click=Callback::new(move |_: ()| toggle_menu())
                    >
                        {move || {
                            if menu.get().is_open() {
                                view! { <Icon name=icons::X class="h-6 w-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="h-6 w-6" /> }.into_any()
                            }
                        }}
                    </Button>
                </div>

                <div class="hidden md:flex space-x-4">
                    {HEADER_ACTIONS.into_iter().map(|action| view! {
                        <Button
                            variant=action_variant(action)
                            on_click=Callback::new(move |_: ()| open_dialog.run(action.cta))
                        >
                            {action.label}
                        </Button>
                    }).collect_view()}
                </div>
            </div>

            // Mobile menu
            {move || menu.get().is_open().then(|| view! {
                <div class="md:hidden glass-menu-enter">
                    <nav class="flex flex-col space-y-4 p-4 bg-black/50 backdrop-blur-md">
                        {NAV_LINKS.into_iter().map(|link| view! {
                            <a
                                href=link.href
                                class="text-gray-300 hover:text-white transition-colors"
                                on:click=move |_| toggle_menu()
                            >
                                {link.label}
                            </a>
                        }).collect_view()}
                        {MOBILE_ACTIONS.into_iter().map(|action| view! {
                            <Button
                                variant=action_variant(action)
                                class="w-full"
                                on_click=Callback::new(move |_: ()| {
                                    open_dialog.run(action.cta);
                                    toggle_menu();
                                })
                            >
                                {action.label}
                            </Button>
                        }).collect_view()}
                    </nav>
                </div>
            })}
        </header>
    }
}

/// Sign In buttons are ghost buttons, everything else is solid
fn action_variant(action: DialogAction) -> ButtonVariant {
    match action.cta.mode() {
        AuthMode::SignIn => ButtonVariant::Ghost,
        AuthMode::SignUp => ButtonVariant::Solid,
    }
}

/// Hero section with the primary call-to-action
#[component]
fn HeroSection(open_dialog: Callback<CallToAction>) -> impl IntoView {
    view! {
        <AnimatedSection class="py-20 text-center relative">
            <div class="container mx-auto px-4">
                <div class="glass-pop-in backdrop-blur-xl bg-black/30 rounded-2xl p-8 shadow-lg max-w-4xl mx-auto
                            border border-gray-800 relative overflow-hidden">
                    <div class="absolute inset-0 bg-gradient-to-r from-blue-500/10 to-purple-500/10 animate-gradient-x"></div>
                    <h1 class="text-5xl font-bold text-white mb-6 relative z-10">{HERO_TITLE}</h1>
                    <p class="text-xl text-gray-300 mb-8 relative z-10">{HERO_SUBTITLE}</p>
                    <div class="flex flex-col sm:flex-row justify-center space-y-4 sm:space-y-0 sm:space-x-4 relative z-10">
                        <Button
                            size=ButtonSize::Large
                            on_click=Callback::new(move |_: ()| open_dialog.run(HERO_ACTION.cta))
                        >
                            {HERO_ACTION.label}
                        </Button>
                    </div>
                </div>
            </div>
        </AnimatedSection>
    }
}

/// Features section with staggered cards
#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <AnimatedSection id="features" class="py-20">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold text-white text-center mb-16">"Key Features"</h2>
                <StaggerGroup class="grid md:grid-cols-3 gap-12">
                    {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </StaggerGroup>
            </div>
        </AnimatedSection>
    }
}

/// Feature card component
#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <RevealItem class="h-full">
            <div class="h-full backdrop-blur-md bg-black/20 rounded-xl p-8 text-white text-center border border-gray-800
                        hover:border-gray-600 transition-all duration-300 hover:shadow-lg hover:scale-105">
                <div class="flex justify-center items-center mb-6">
                    <div class="rounded-full bg-gradient-to-r from-blue-500 to-purple-500 p-3">
                        <Icon name=feature.icon class="h-10 w-12 mb-1" />
                    </div>
                </div>
                <h3 class="text-2xl font-semibold mb-4">{feature.title}</h3>
                <p class="text-gray-300">{feature.description}</p>
            </div>
        </RevealItem>
    }
}

/// Pricing section component
#[component]
fn PricingSection(open_dialog: Callback<CallToAction>) -> impl IntoView {
    view! {
        <AnimatedSection id="pricing" class="py-20 bg-black/20">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold text-white text-center mb-16">"Simple Pricing"</h2>
                <StaggerGroup class="grid md:grid-cols-3 gap-12">
                    {PRICING_TIERS.into_iter().map(|tier| view! {
                        <PricingCard tier=tier open_dialog=open_dialog />
                    }).collect_view()}
                </StaggerGroup>
            </div>
        </AnimatedSection>
    }
}

/// Pricing card component
#[component]
fn PricingCard(tier: PricingTier, open_dialog: Callback<CallToAction>) -> impl IntoView {
    let plan = tier.plan;
    let action = tier.action();

    view! {
        <RevealItem class="h-full">
            <div class="h-full backdrop-blur-md bg-black/30 rounded-xl p-8 text-white text-center border border-gray-800
                        hover:border-gray-600 transition-all duration-300 hover:shadow-lg hover:scale-105">
                <h3 class="text-2xl font-semibold mb-4">{plan}</h3>
                <p class="text-5xl font-bold mb-6">
                    {tier.price}
                    <span class="text-xl font-normal">"/mo"</span>
                </p>
                <ul class="mb-8 space-y-4">
                    {tier.features.into_iter().map(|feature| view! {
                        <li class="flex items-center justify-center">
                            <Icon name=icons::CHECK_CIRCLE class="h-5 w-5 mr-2 text-green-400" />
                            <span>{feature}</span>
                        </li>
                    }).collect_view()}
                </ul>
                <Button
                    size=ButtonSize::Large
                    class="w-full"
                    on_click=Callback::new(move |_: ()| open_dialog.run(action.cta))
                >
                    {action.label}
                </Button>
            </div>
        </RevealItem>
    }
}

/// "Why Choose" bento grid
#[component]
fn BentoSection() -> impl IntoView {
    view! {
        <AnimatedSection class="py-20">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold text-white text-center mb-16">
                    {format!("Why Choose {}?", BRAND)}
                </h2>
                <StaggerGroup class="grid grid-cols-1 gap-8 sm:grid-cols-2 lg:grid-cols-3">
                    {BENTO_ITEMS.into_iter().map(|item| view! { <BentoTile item=item /> }).collect_view()}
                </StaggerGroup>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn BentoTile(item: BentoItem) -> impl IntoView {
    let span = if item.wide {
        "col-span-1 sm:col-span-2 lg:col-span-2"
    } else {
        "col-span-1"
    };

    view! {
        <RevealItem class=span>
            <div class="h-auto sm:h-80 backdrop-blur-md bg-black/30 rounded-xl p-8 text-white border border-gray-800
                        transition-transform duration-300 hover:scale-[1.02]">
                <Icon name=item.icon class=bento_icon_class(item.accent) />
                <h3 class="text-2xl font-semibold mb-4">{item.title}</h3>
                <p class="text-gray-300">{item.description}</p>
            </div>
        </RevealItem>
    }
}

fn bento_icon_class(accent: &'static str) -> &'static str {
    match accent {
        "text-blue-400" => "h-16 w-16 mb-6 text-blue-400",
        "text-green-400" => "h-16 w-16 mb-6 text-green-400",
        "text-yellow-400" => "h-16 w-16 mb-6 text-yellow-400",
        "text-purple-400" => "h-16 w-16 mb-6 text-purple-400",
        _ => "h-16 w-16 mb-6",
    }
}

/// Closing call-to-action with an email field
#[component]
fn CtaSection(open_dialog: Callback<CallToAction>) -> impl IntoView {
    view! {
        <AnimatedSection id="contact" class="py-20 bg-black/20">
            <div class="container mx-auto px-4">
                <div class="glass-pop-in-subtle backdrop-blur-xl bg-black/30 rounded-xl p-12 shadow-lg max-w-4xl mx-auto
                            text-center border border-gray-800 relative overflow-hidden">
                    <div class="absolute inset-0 bg-gradient-to-r from-blue-500/10 to-purple-500/10 animate-gradient-x"></div>
                    <h2 class="text-4xl font-bold text-white mb-6 relative z-10">{CTA_TITLE}</h2>
                    <p class="text-xl text-gray-300 mb-10 relative z-10">{CTA_SUBTITLE}</p>
                    <div class="flex flex-col sm:flex-row justify-center space-y-4 sm:space-y-0 sm:space-x-4 relative z-10">
                        <input
                            type="email"
                            placeholder="Enter your email"
                            class=format!("{INPUT_CLASS} max-w-xs text-lg py-6")
                        />
                        <Button
                            size=ButtonSize::ExtraLarge
                            trailing_icon=icons::ARROW_RIGHT
                            on_click=Callback::new(move |_: ()| open_dialog.run(CONTACT_ACTION.cta))
                        >
                            {CONTACT_ACTION.label}
                        </Button>
                    </div>
                </div>
            </div>
        </AnimatedSection>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 text-center text-gray-400 border-t border-gray-800">
            <div class="container mx-auto px-4">
                <p class="mb-4">{COPYRIGHT}</p>
                <div class="flex justify-center space-x-6">
                    {FOOTER_LINKS.into_iter().map(|link| view! {
                        <a href=link.href class="hover:text-white transition-colors">{link.label}</a>
                    }).collect_view()}
                </div>
            </div>
        </footer>
    }
}

/// CSS keyframes the utility classes don't cover
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Moving gradient behind the hero and CTA cards */
            @keyframes gradient-x {
                0%, 100% { background-position: 0% 50%; }
                50% { background-position: 100% 50%; }
            }
            .animate-gradient-x {
                background-size: 200% 200%;
                animation: gradient-x 15s ease infinite;
            }

            /* Card scale-in on mount */
            @keyframes glass-pop-in {
                from { opacity: 0; transform: scale(0.9); }
                to { opacity: 1; transform: scale(1); }
            }
            .glass-pop-in {
                animation: glass-pop-in 0.8s ease-out both;
            }

            @keyframes glass-pop-in-subtle {
                from { opacity: 0; transform: scale(0.95); }
                to { opacity: 1; transform: scale(1); }
            }
            .glass-pop-in-subtle {
                animation: glass-pop-in-subtle 0.8s ease-out both;
            }

            /* Mobile menu slide-down */
            @keyframes glass-menu-enter {
                from { opacity: 0; transform: translateY(-20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .glass-menu-enter {
                animation: glass-menu-enter 0.3s ease-out both;
            }
            "#
        </style>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_landing() -> String {
        let owner = Owner::new();
        owner.set();
        leptos_meta::provide_meta_context();

        view! { <LandingPage /> }.to_html()
    }

    #[test]
    fn test_landing_renders_every_section() {
        let html = render_landing();

        assert!(html.contains(HERO_TITLE));
        assert!(html.contains("Key Features"));
        assert!(html.contains("Simple Pricing"));
        assert!(html.contains("Why Choose GlassSaaS?"));
        assert!(html.contains(CTA_TITLE));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn test_landing_sections_have_anchor_ids() {
        let html = render_landing();

        for link in NAV_LINKS {
            let id = link.href.trim_start_matches('#');
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
        }
    }

    #[test]
    fn test_landing_lists_all_pricing_tiers() {
        let html = render_landing();

        for tier in PRICING_TIERS {
            assert!(html.contains(tier.plan));
            assert!(html.contains(tier.price));
        }
        assert_eq!(html.matches("Choose Plan").count(), PRICING_TIERS.len());
    }

    #[test]
    fn test_landing_starts_with_dialog_and_menu_closed() {
        let html = render_landing();

        assert!(!html.contains(r#"aria-hidden="false""#));
        assert!(!html.contains("glass-menu-enter\""));
    }

    #[test]
    fn test_sign_in_actions_are_ghost_buttons() {
        for action in HEADER_ACTIONS.into_iter().chain(MOBILE_ACTIONS) {
            let expected = if action.cta.mode() == AuthMode::SignIn {
                ButtonVariant::Ghost
            } else {
                ButtonVariant::Solid
            };
            assert_eq!(action_variant(action), expected);
        }
    }

    #[test]
    fn test_bento_icon_class_keeps_accent() {
        assert_eq!(bento_icon_class("text-blue-400"), "h-16 w-16 mb-6 text-blue-400");
        assert_eq!(bento_icon_class("unknown"), "h-16 w-16 mb-6");
    }
}
