use crate::prelude::{
    AppError, Contact, ContactEntry, ContactStore, StoreConfig,
    command::{Cli, Commands},
};
use clap::Parser;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = StoreConfig::new(&cli.storage_choice, &cli.storage_dir)?;
    let mut storage = config.open_store();

    log::info!(
        "using {} storage at {}",
        config.medium.is_which(),
        config.storage_dir.display()
    );

    match cli.command {
        Commands::Add {
            name,
            phone,
            surname,
            company,
            email,
        } => {
            let form = ContactEntry {
                name,
                surname,
                company,
                phone_number: phone,
                email,
            };

            form.submit(&mut storage, None)?;

            println!("Contact added successfully");
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            if storage.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            print_contacts(storage.contacts().iter().enumerate());
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            index,
            name,
            surname,
            company,
            phone,
            email,
        } => {
            let position = index_from_listing(index, &storage)?;

            let mut form = storage
                .get(position)
                .map(ContactEntry::from_contact)
                .ok_or(AppError::IndexOutOfBounds {
                    index: position,
                    len: storage.len(),
                })?;

            if name.is_some() {
                form.name = name;
            }
            if surname.is_some() {
                form.surname = surname;
            }
            if company.is_some() {
                form.company = company;
            }
            if phone.is_some() {
                form.phone_number = phone;
            }
            if email.is_some() {
                form.email = email;
            }

            form.submit(&mut storage, Some(position))?;

            println!("Contact updated successfully");
            Ok(())
        }

        // Search for a contact
        Commands::Search { name } => {
            let query = name.unwrap_or_default();

            if storage.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            // A blank search shows the whole list. Rows keep their `list`
            // positions so they can be passed to `edit --index`.
            let found: Vec<(usize, &Contact)> = if query.trim().is_empty() {
                storage.contacts().iter().enumerate().collect()
            } else {
                storage.filter_indexed(&query)
            };

            if found.is_empty() {
                println!("Found no contact matching \"{query}\"");
                return Ok(());
            }

            print_contacts(found.into_iter());
            Ok(())
        }
    }
}

/// Turns a 1-based position from `list` into a store index.
fn index_from_listing(index: usize, storage: &ContactStore) -> Result<usize, AppError> {
    index
        .checked_sub(1)
        .ok_or(AppError::IndexOutOfBounds {
            index,
            len: storage.len(),
        })
}

/// Prints one line per contact, numbered by its 0-based store index plus one.
fn print_contacts<'a>(contacts: impl Iterator<Item = (usize, &'a Contact)>) {
    for (index, c) in contacts {
        let i = index + 1;
        println!(
            "{i:>3}. {:<20} {:<15} {:<15} {:15} {}",
            c.name(),
            c.surname(),
            c.company(),
            c.phone_number(),
            c.email()
        );
    }
}
