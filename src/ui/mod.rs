pub mod common;
pub mod contact_info;
pub mod footer;
pub mod header;
pub mod icon;
pub mod map;
pub mod pages;
pub mod reveal;

pub use contact_info::ContactInfo;
pub use footer::Footer;
pub use header::Header;
pub use icon::{Icon, icons};
pub use map::ContactMap;
pub use reveal::ScrollReveal;
