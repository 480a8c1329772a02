use super::*;
use crate::storage::KeyValueStore;

/// Key the whole contact list is persisted under.
pub const CONTACTS_KEY: &str = "contacts";

/// The authoritative, ordered contact list and its persisted mirror.
///
/// Insertion order is display order and persisted order. Every successful
/// mutation writes the full list back to storage before returning.
pub struct ContactStore {
    mem: Vec<Contact>,
    storage: Box<dyn KeyValueStore>,
}

impl ContactStore {
    /// Creates an empty store over `storage`. Call [`ContactStore::restore`]
    /// to load what was persisted before.
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    /// Creates a store and restores it from `storage` in one step.
    pub fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.mem
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.mem.get(index)
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn get_medium(&self) -> &str {
        self.storage.get_medium()
    }

    /// Appends `contact`. No duplicate check is made.
    pub fn add_contact(&mut self, contact: Contact) {
        log::debug!("adding contact at index {}", self.mem.len());
        self.mem.push(contact);
        self.persist();
    }

    /// Replaces the contact at `index` wholesale.
    pub fn update_contact(&mut self, index: usize, contact: Contact) -> Result<(), AppError> {
        let len = self.mem.len();
        let Some(slot) = self.mem.get_mut(index) else {
            return Err(AppError::IndexOutOfBounds { index, len });
        };

        log::debug!("updating contact at index {index}");
        *slot = contact;
        self.persist();
        Ok(())
    }

    /// Contacts whose name contains `query`, ignoring case, in list order.
    /// An empty query matches every contact.
    pub fn filter(&self, query: &str) -> Vec<&Contact> {
        self.mem.iter().filter(|c| c.name_contains(query)).collect()
    }

    /// Same matches as [`ContactStore::filter`], each paired with its index
    /// in the full list.
    pub fn filter_indexed(&self, query: &str) -> Vec<(usize, &Contact)> {
        self.mem
            .iter()
            .enumerate()
            .filter(|(_, c)| c.name_contains(query))
            .collect()
    }

    /// Writes the full list to storage. Failures are logged and dropped.
    pub fn persist(&mut self) {
        if let Err(e) = self.save() {
            log::warn!(
                "failed to persist {} contacts to {} storage: {e}",
                self.mem.len(),
                self.storage.get_medium()
            );
        }
    }

    /// Replaces the in-memory list with what storage holds.
    ///
    /// A missing, unreadable or undecodable blob leaves the list empty.
    pub fn restore(&mut self) {
        self.mem = match self.load() {
            Ok(contacts) => {
                log::info!(
                    "restored {} contacts from {} storage",
                    contacts.len(),
                    self.storage.get_medium()
                );
                contacts
            }
            Err(e) => {
                log::warn!("discarding stored contacts: {e}");
                Vec::new()
            }
        };
    }

    fn save(&mut self) -> Result<(), AppError> {
        let json_contacts = serde_json::to_vec(&self.mem)?;
        self.storage.set(CONTACTS_KEY, &json_contacts)
    }

    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let Some(data) = self.storage.get(CONTACTS_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_slice(&data)?)
    }
}
