//! Application state wiring the engine and the session registry.
//!
//! `AppState` pins the engine to the concrete infra implementations
//! (Gemini provider, lexicon classifier) and owns the in-memory session
//! registry. Each session sits behind its own async mutex: turns within a
//! session are strictly sequential, while independent sessions proceed
//! concurrently.

use std::sync::Arc;

use anyhow::Context;
use dashmap::DashMap;
use secrecy::ExposeSecret;
use tokio::sync::Mutex;
use uuid::Uuid;

use talentscout_core::chat::engine::{ScreeningConfig, ScreeningEngine};
use talentscout_core::chat::session::ScreeningSession;
use talentscout_core::emotion::annotator::SentimentAnnotator;
use talentscout_core::llm::box_provider::BoxLlmProvider;
use talentscout_infra::emotion::LexiconClassifier;
use talentscout_infra::llm::OpenAiCompatibleProvider;
use talentscout_infra::secret::env::{GEMINI_API_KEY_VAR, gemini_api_key};

/// Shared application state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScreeningEngine>,
    pub sessions: Arc<DashMap<Uuid, Arc<Mutex<ScreeningSession>>>>,
}

impl AppState {
    /// Initialize the application state against the Gemini backend.
    ///
    /// Fails fast when the API key is missing: the model is a hard
    /// dependency and there is nothing useful to serve without it.
    pub fn init(config: ScreeningConfig) -> anyhow::Result<Self> {
        let api_key = gemini_api_key()
            .with_context(|| format!("{GEMINI_API_KEY_VAR} not set"))?;
        let provider =
            OpenAiCompatibleProvider::gemini(api_key.expose_secret(), &config.model);

        let engine = ScreeningEngine::new(
            BoxLlmProvider::new(provider),
            SentimentAnnotator::new(Box::new(LexiconClassifier::new())),
            config,
        );

        Ok(Self::from_engine(engine))
    }

    /// Build state around an already-wired engine (used by tests with
    /// stub providers).
    pub fn from_engine(engine: ScreeningEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Look up a session by id, cloning the handle out of the registry.
    pub fn session(&self, id: &Uuid) -> Option<Arc<Mutex<ScreeningSession>>> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }
}
