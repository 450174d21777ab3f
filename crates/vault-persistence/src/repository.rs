//! Create/read/update/delete for saved entries.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use vault_model::{EntryId, ProcessingType, TextEntry};
use vault_transform::apply;

use crate::clock::{Clock, SystemClock};
use crate::error::{PersistenceError, Result};
use crate::store::KeyValueStore;

/// Storage key the entry collection lives under.
pub const DEFAULT_NAMESPACE: &str = "text-vault-entries";

/// Saved entries, kept as one JSON array under a single storage key.
///
/// New entries are stored first, so the raw collection is newest-created
/// first. [`EntryRepository::list`] additionally orders by last update.
pub struct EntryRepository<S, C = SystemClock> {
    store: S,
    clock: C,
    namespace: String,
}

impl<S: KeyValueStore> EntryRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> EntryRepository<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All entries in stored order.
    ///
    /// Fails when the store cannot be read or holds malformed data.
    pub fn load(&self) -> Result<Vec<TextEntry>> {
        let Some(raw) = self.store.get(&self.namespace)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| PersistenceError::Deserialization {
            key: self.namespace.clone(),
            source: Box::new(e),
        })
    }

    /// All entries, most recently created or updated first.
    ///
    /// A store that cannot be read yields an empty list.
    pub fn list(&self) -> Vec<TextEntry> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(error) => {
                tracing::error!(error = %error, "Failed to load saved entries");
                return Vec::new();
            }
        };
        entries.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
        entries
    }

    pub fn get(&self, id: &EntryId) -> Result<Option<TextEntry>> {
        Ok(self.load()?.into_iter().find(|entry| entry.id() == id))
    }

    /// Entry whose id equals `prefix` or is the only one starting with it.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<TextEntry> {
        let prefix = prefix.trim();
        let entries = self.load()?;
        if let Some(exact) = entries.iter().find(|entry| entry.id().as_str() == prefix) {
            return Ok(exact.clone());
        }

        let mut matches: Vec<TextEntry> = if prefix.is_empty() {
            Vec::new()
        } else {
            entries
                .into_iter()
                .filter(|entry| entry.id().as_str().starts_with(prefix))
                .collect()
        };
        match matches.len() {
            0 => Err(PersistenceError::EntryNotFound {
                id: prefix.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            n => Err(PersistenceError::AmbiguousId {
                prefix: prefix.to_string(),
                matches: n,
            }),
        }
    }

    /// Process `original_text` with `selector` and store it as a new entry.
    pub fn save(&mut self, original_text: &str, selector: ProcessingType) -> Result<TextEntry> {
        if original_text.trim().is_empty() {
            return Err(PersistenceError::EmptyText);
        }
        let mut entries = self.load()?;
        let processed = apply(original_text, &selector);
        let entry = TextEntry::new(
            EntryId::generate(),
            original_text,
            processed.text,
            selector,
            self.timestamp(),
        );

        entries.insert(0, entry.clone());
        self.persist(&entries)?;

        tracing::info!(
            id = %entry.id(),
            processing_type = %entry.processing_type(),
            "Saved entry"
        );
        Ok(entry)
    }

    /// Reprocess the stored original text of `id` with `selector`.
    ///
    /// The new update time is always strictly later than the previous one.
    pub fn update(&mut self, id: &EntryId, selector: ProcessingType) -> Result<TextEntry> {
        let mut entries = self.load()?;
        let now = self.timestamp();
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id() == id)
            .ok_or_else(|| PersistenceError::EntryNotFound {
                id: id.to_string(),
            })?;

        let processed = apply(entry.original_text(), &selector);
        let at = if now > entry.updated_at() {
            now
        } else {
            entry.updated_at() + Duration::milliseconds(1)
        };
        entry.revise(processed.text, selector, at);
        let updated = entry.clone();

        self.persist(&entries)?;

        tracing::info!(
            id = %updated.id(),
            processing_type = %updated.processing_type(),
            "Updated entry"
        );
        Ok(updated)
    }

    /// Remove `id`. Returns whether an entry was removed.
    pub fn delete(&mut self, id: &EntryId) -> Result<bool> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|entry| entry.id() != id);
        if entries.len() == before {
            tracing::warn!(id = %id, "No entry to delete");
            return Ok(false);
        }

        self.persist(&entries)?;
        tracing::info!(id = %id, "Deleted entry");
        Ok(true)
    }

    fn persist(&mut self, entries: &[TextEntry]) -> Result<()> {
        let json = serde_json::to_string(entries).map_err(|e| PersistenceError::Serialization {
            source: Box::new(e),
        })?;
        self.store.put(&self.namespace, &json)
    }

    /// Current time at the precision timestamps are stored with.
    fn timestamp(&self) -> DateTime<Utc> {
        self.clock.now().trunc_subsecs(3)
    }
}
