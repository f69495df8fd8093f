//! Item store - the authoritative, ordered list of wheel entries
//!
//! Every mutation bumps the revision, overwrites the storage record with the
//! full list and notifies subscribers. Invalid arguments are ignored.

use tracing::{debug, info, warn};

use crate::share::decode_fragment;
use crate::snapshot;
use crate::storage::ItemStorage;

/// Longest label kept, in characters
pub const MAX_ITEM_CHARS: usize = 22;

/// Where the list came from at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSource {
    Fragment,
    Storage,
    Empty,
}

/// Read-only view handed to subscribers
#[derive(Debug, Clone, Copy)]
pub struct ItemsSnapshot<'a> {
    pub items: &'a [String],
    pub revision: u64,
}

type Listener = Box<dyn FnMut(&ItemsSnapshot<'_>)>;

pub struct ItemStore<S: ItemStorage> {
    items: Vec<String>,
    storage: S,
    source: ItemSource,
    revision: u64,
    listeners: Vec<Listener>,
}

impl<S: ItemStorage> ItemStore<S> {
    /// An empty store; nothing is read from storage
    pub fn new(storage: S) -> Self {
        Self {
            items: Vec::new(),
            storage,
            source: ItemSource::Empty,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Build the startup list
    ///
    /// A non-empty, well-formed fragment wins over storage, storage wins over
    /// an empty list. Loading does not write storage.
    pub fn load_initial(storage: S, fragment: Option<&str>) -> Self {
        let mut store = Self::new(storage);

        if let Some(items) = fragment.and_then(items_from_fragment) {
            store.items = items;
            store.source = ItemSource::Fragment;
        } else if let Some(items) = items_from_storage(&store.storage) {
            store.items = items;
            store.source = ItemSource::Storage;
        }

        info!(source = ?store.source, count = store.items.len(), "item list loaded");
        store
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn source(&self) -> ItemSource {
        self.source
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn snapshot(&self) -> ItemsSnapshot<'_> {
        ItemsSnapshot {
            items: &self.items,
            revision: self.revision,
        }
    }

    /// Call `listener` after every change
    pub fn subscribe(&mut self, listener: impl FnMut(&ItemsSnapshot<'_>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Append an entry; returns false for blank text
    pub fn add_item(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("ignoring blank item");
            return false;
        }

        let label: String = trimmed.chars().take(MAX_ITEM_CHARS).collect();
        self.items.push(label);
        self.commit();
        true
    }

    /// Remove the entry at `index`; out-of-range indices are ignored
    pub fn remove_item(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "ignoring out-of-range removal");
            return None;
        }

        let removed = self.items.remove(index);
        self.commit();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.commit();
    }

    fn commit(&mut self) {
        self.revision += 1;

        let record = snapshot::encode(&self.items);
        if let Err(e) = self.storage.write(&record) {
            warn!(error = %e, "failed to persist item list");
        }

        let view = ItemsSnapshot {
            items: &self.items,
            revision: self.revision,
        };
        for listener in &mut self.listeners {
            listener(&view);
        }
    }
}

fn items_from_fragment(fragment: &str) -> Option<Vec<String>> {
    match decode_fragment(fragment) {
        Ok(items) if !items.is_empty() => Some(items),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "ignoring malformed link fragment");
            None
        }
    }
}

fn items_from_storage<S: ItemStorage>(storage: &S) -> Option<Vec<String>> {
    let record = match storage.read() {
        Ok(Some(record)) => record,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "failed to read stored items");
            return None;
        }
    };

    match snapshot::decode(&record) {
        Ok(items) if !items.is_empty() => Some(items),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "ignoring malformed stored items");
            None
        }
    }
}
