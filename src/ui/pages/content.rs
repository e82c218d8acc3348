//! Marketing copy of the landing page

use crate::core::auth_dialog::CallToAction;
use crate::ui::icon::icons;

pub const BRAND: &str = "GlassSaaS";

/// In-page anchor link
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "Pricing", href: "#pricing" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const FOOTER_LINKS: [NavLink; 3] = [
    NavLink { label: "Privacy Policy", href: "#" },
    NavLink { label: "Terms of Service", href: "#" },
    NavLink { label: "Contact Us", href: "#" },
];

/// Labelled button that opens the auth dialog
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialogAction {
    pub label: &'static str,
    pub cta: CallToAction,
}

pub const HEADER_ACTIONS: [DialogAction; 2] = [
    DialogAction { label: "Sign In", cta: CallToAction::HeaderSignIn },
    DialogAction { label: "Sign Up", cta: CallToAction::HeaderSignUp },
];

pub const MOBILE_ACTIONS: [DialogAction; 2] = [
    DialogAction { label: "Sign In", cta: CallToAction::MobileSignIn },
    DialogAction { label: "Sign Up", cta: CallToAction::MobileSignUp },
];

pub const HERO_ACTION: DialogAction = DialogAction {
    label: "Get Started",
    cta: CallToAction::Hero,
};

pub const CONTACT_ACTION: DialogAction = DialogAction {
    label: "Sign Up",
    cta: CallToAction::ContactSection,
};

pub const HERO_TITLE: &str = "Transform Your Workflow with GlassSaaS";
pub const HERO_SUBTITLE: &str = "Streamline your business processes with our cutting-edge SaaS solution";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: icons::GLOBE,
        title: "Global Access",
        description: "Access your data from anywhere in the world",
    },
    Feature {
        icon: icons::ZAP,
        title: "Lightning Fast",
        description: "Optimized for speed and efficiency",
    },
    Feature {
        icon: icons::SHIELD,
        title: "Secure & Reliable",
        description: "Bank-grade security with 99.99% uptime",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingTier {
    pub plan: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 4],
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        plan: "Basic",
        price: "$9",
        features: ["1 User", "10 Projects", "5GB Storage", "Basic Support"],
    },
    PricingTier {
        plan: "Pro",
        price: "$29",
        features: ["5 Users", "50 Projects", "100GB Storage", "Priority Support"],
    },
    PricingTier {
        plan: "Enterprise",
        price: "$99",
        features: ["Unlimited Users", "Unlimited Projects", "1TB Storage", "24/7 Support"],
    },
];

impl PricingTier {
    pub fn action(&self) -> DialogAction {
        DialogAction {
            label: "Choose Plan",
            cta: CallToAction::PricingTier(self.plan),
        }
    }
}

/// Tile of the "Why Choose" bento grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BentoItem {
    pub icon: &'static str,
    /// Tailwind text color of the icon
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Spans two columns on larger screens
    pub wide: bool,
}

pub const BENTO_ITEMS: [BentoItem; 4] = [
    BentoItem {
        icon: icons::BAR_CHART,
        accent: "text-blue-400",
        title: "Advanced Analytics",
        description: "Gain deep insights into your business performance with our powerful analytics tools. Visualize trends, track KPIs, and make data-driven decisions to propel your business forward.",
        wide: true,
    },
    BentoItem {
        icon: icons::USERS,
        accent: "text-green-400",
        title: "Team Collaboration",
        description: "Seamlessly work together with your team members in real-time. Share documents, assign tasks, and communicate effortlessly within our intuitive platform.",
        wide: false,
    },
    BentoItem {
        icon: icons::LAPTOP,
        accent: "text-yellow-400",
        title: "Cross-Platform",
        description: "Access your work from any device, anywhere, anytime. Our responsive design ensures a seamless experience across desktop, tablet, and mobile devices.",
        wide: false,
    },
    BentoItem {
        icon: icons::HEADPHONES,
        accent: "text-purple-400",
        title: "24/7 Customer Support",
        description: "Our dedicated support team is always ready to assist you with any questions or issues. Enjoy peace of mind knowing that expert help is just a click away, day or night.",
        wide: true,
    },
];

pub const CTA_TITLE: &str = "Ready to Get Started?";
pub const CTA_SUBTITLE: &str = "Join thousands of satisfied customers and transform your business today";

pub const COPYRIGHT: &str = "© 2024 GlassSaaS. All rights reserved.";

pub const META_DESCRIPTION: &str = "Streamline your business processes with GlassSaaS: global access, \
                                    lightning-fast performance and bank-grade security.";
