//! Application pages module
//!
//! This module contains the page components for the application:
//! - Contact page (home)
//! - Not found fallback

mod contact;
mod not_found;

pub use contact::ContactPage;
pub use not_found::NotFoundPage;
