use super::*;
use crate::domain::store::ContactStore;
use once_cell::sync::Lazy;
use regex::Regex;

// Digits only: no separators, no leading "+"
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn required_req() -> String {
        "Name and Phone Number are required.".to_string()
    }

    pub fn phone_req() -> String {
        "Phone Number must contain digits only.".to_string()
    }
}

/// Raw input of the add/edit contact form. A field left blank is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactEntry {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub company: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl ContactEntry {
    /// Prefills the form with an existing contact, for editing.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: Some(contact.name().to_string()),
            surname: Some(contact.surname().to_string()),
            company: Some(contact.company().to_string()),
            phone_number: Some(contact.phone_number().to_string()),
            email: Some(contact.email().to_string()),
        }
    }

    pub fn validate_number(phone: &str) -> bool {
        PHONE_RE.is_match(phone)
    }

    /// Checks the form and builds the contact it describes.
    pub fn into_contact(self) -> Result<Contact, AppError> {
        let (Some(name), Some(phone_number)) = (
            self.name.filter(|n| !n.is_empty()),
            self.phone_number.filter(|p| !p.is_empty()),
        ) else {
            return Err(AppError::Validation(ValidationReq::required_req()));
        };

        if !Self::validate_number(&phone_number) {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }

        Ok(Contact::new(name, phone_number)
            .with_surname(self.surname.unwrap_or_default())
            .with_company(self.company.unwrap_or_default())
            .with_email(self.email.unwrap_or_default()))
    }

    /// Validates the form and hands the contact to `store`: appended when
    /// `target` is `None`, otherwise replacing the contact at `target`.
    ///
    /// A form that fails validation leaves the store untouched.
    pub fn submit(self, store: &mut ContactStore, target: Option<usize>) -> Result<(), AppError> {
        let contact = self.into_contact()?;

        match target {
            Some(index) => store.update_contact(index, contact),
            None => {
                store.add_contact(contact);
                Ok(())
            }
        }
    }
}
