//! Core form-state and presentation logic for the contact page

pub mod contact;
pub mod reveal;

pub use contact::{ContactField, ContactForm, FormStatus};
pub use reveal::{REVEAL_THRESHOLD, Reveal, RevealPhase};
