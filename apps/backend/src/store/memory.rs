//! In-memory record store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::{FlashcardStore, StoreError, StoreResult};
use crate::models::{AiContent, FlashcardRecord, NewFlashcard};

struct Inner {
    next_id: i64,
    cards: BTreeMap<i64, FlashcardRecord>,
}

/// Process-local store. Contents are lost on restart.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                cards: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| StoreError::Unavailable)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashcardStore for MemoryStore {
    fn list(&self) -> StoreResult<Vec<FlashcardRecord>> {
        Ok(self.lock()?.cards.values().cloned().collect())
    }

    fn get(&self, id: i64) -> StoreResult<FlashcardRecord> {
        self.lock()?
            .cards
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&self, card: NewFlashcard) -> StoreResult<FlashcardRecord> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let record = FlashcardRecord {
            id,
            word: card.word,
            context: card.context,
            ai_content: None,
        };
        inner.cards.insert(id, record.clone());
        Ok(record)
    }

    fn set_ai_content(&self, id: i64, content: AiContent) -> StoreResult<FlashcardRecord> {
        let mut inner = self.lock()?;
        let record = inner.cards.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        record.ai_content = Some(content);
        Ok(record.clone())
    }

    fn delete_all(&self) -> StoreResult<()> {
        self.lock()?.cards.clear();
        Ok(())
    }

    fn delete_one(&self, id: i64) -> StoreResult<()> {
        self.lock()?
            .cards
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
