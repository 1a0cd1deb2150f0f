//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring an in-memory store and a scripted AI provider
//! - StubProvider that replays queued responses and records prompts
//!
//! No external services are needed.

#![allow(dead_code)]

pub mod fixtures;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use flashcard_core::{AiContent, CsvExporter, ExportConfig, FlashcardRecord, NewFlashcard};

use vocab_flashcards_backend::services::ai::{AiProvider, ProviderError};
use vocab_flashcards_backend::store::{FlashcardStore, MemoryStore};
use vocab_flashcards_backend::{router, AppState};

/// AI provider that replays queued responses in order.
#[derive(Default)]
pub struct StubProvider {
    responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl StubProvider {
    /// Queue a raw text response.
    pub fn respond(&self, body: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(body.into()));
    }

    /// Queue a provider failure.
    pub fn fail(&self, error: ProviderError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// (system instructions, prompt) pairs received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for StubProvider {
    async fn complete(
        &self,
        system_instructions: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system_instructions.to_string(), prompt.to_string()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ProviderError::EmptyResponse))
    }
}

/// Test context containing the store, the stub provider and the router.
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub provider: Arc<StubProvider>,
    app: Router,
}

impl TestContext {
    /// Create a context with the default export configuration.
    pub fn new() -> Self {
        Self::with_export(ExportConfig::default(), false)
    }

    /// Create a context with custom export settings.
    pub fn with_export(export: ExportConfig, timestamped_filename: bool) -> Self {
        let store = Arc::new(MemoryStore::new());
        let provider = Arc::new(StubProvider::default());

        let state = AppState {
            store: store.clone(),
            ai: provider.clone(),
            exporter: CsvExporter::new(export),
            timestamped_filename,
        };

        Self {
            store,
            provider,
            app: router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }

    /// Insert a record directly into the store.
    pub fn seed(&self, word: &str, context: Option<&str>) -> FlashcardRecord {
        self.store
            .create(NewFlashcard::new(word, context))
            .expect("Failed to seed flashcard")
    }

    /// Insert a record that already has AI content.
    pub fn seed_generated(&self, word: &str, content: AiContent) -> FlashcardRecord {
        let card = self.seed(word, None);
        self.store
            .set_ai_content(card.id, content)
            .expect("Failed to seed AI content")
    }

    /// Whether the store holds no records.
    pub fn store_is_empty(&self) -> bool {
        self.store.list().expect("Failed to list flashcards").is_empty()
    }

    /// Current stored state of a record.
    pub fn stored(&self, id: i64) -> FlashcardRecord {
        self.store.get(id).expect("Flashcard missing from store")
    }
}
