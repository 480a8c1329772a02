use crate::storage::DEFAULT_STORAGE_DIR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage choice (mem, file) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("file"))]
    pub storage_choice: String,

    /// Directory the contact list is saved in
    #[arg(long, env = "CONTACTS_STORAGE_DIR", default_value = DEFAULT_STORAGE_DIR)]
    pub storage_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: Option<String>,

        /// Contact phone number (digits only)
        #[arg(long)]
        phone: Option<String>,

        /// Contact surname
        #[arg(long)]
        surname: Option<String>,

        /// Contact company
        #[arg(long)]
        company: Option<String>,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,
    },
    /// List contacts in the order they were added
    List,
    /// Replace an existing contact, picked by its position in `list`
    /// Fields left out keep their current value
    Edit {
        /// Position of the contact as shown by `list` (starting at 1)
        #[arg(long)]
        index: usize,

        /// Update name
        #[arg(long)]
        name: Option<String>,

        /// Update surname
        #[arg(long)]
        surname: Option<String>,

        /// Update company
        #[arg(long)]
        company: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Search contacts by name, ignoring case
    /// Without a name every contact is listed
    Search {
        /// Part of the contact name
        #[arg(long)]
        name: Option<String>,
    },
}
