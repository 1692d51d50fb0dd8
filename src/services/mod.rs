pub mod email;

pub use email::EmailJs;
