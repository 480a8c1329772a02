pub use crate::cli::{command, run_app};
pub use crate::config::StoreConfig;
pub use crate::domain::{
    contact::{self, Contact},
    entry::{ContactEntry, ValidationReq},
    store::{CONTACTS_KEY, ContactStore},
};
pub use crate::errors::AppError;
pub use crate::storage::{FileStorage, KeyValueStore, MemoryStorage, StorageMediums};
