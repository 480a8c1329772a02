pub mod contact;
pub mod entry;
pub mod store;

pub use crate::errors::AppError;
pub use contact::Contact;
