use serde::{Deserialize, Serialize};

/// A stored contact record.
///
/// Contacts are never edited field by field: an edit builds a new `Contact`
/// and replaces the old one in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    name: String,

    #[serde(default)]
    surname: String,

    #[serde(default)]
    company: String,

    phone_number: String,

    #[serde(default)]
    email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            surname: String::new(),
            company: String::new(),
            phone_number: phone_number.into(),
            email: String::new(),
        }
    }

    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Case-insensitive substring match against the name only.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
