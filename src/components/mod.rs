mod contact;
mod nav;
mod scroll;

pub use contact::ContactSection;
pub use nav::Nav;
pub use scroll::{ScrollHint, ScrollToTop};
