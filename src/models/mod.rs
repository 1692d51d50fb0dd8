mod contact;
mod profile;

pub use contact::{ContactField, ContactForm, ContactSubmission, FieldError};
pub use profile::{Platform, DISPLAY_NAME};
