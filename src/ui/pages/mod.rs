//! Application pages module
//!
//! - Landing page (`/`)
//! - Not found page (router fallback)

pub mod content;
mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
