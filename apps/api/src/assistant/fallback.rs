//! Backend selection: which adapters exist, and in what order a request tries them.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::{
    gemini::GeminiClient, groq::GroqClient, Backend, BackendError, LanguageModel,
};

/// The configured adapters, keyed by backend. A backend without credentials is absent.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    models: HashMap<Backend, Arc<dyn LanguageModel>>,
}

impl BackendRegistry {
    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        let mut registry = Self::default();

        if let Some(key) = &config.gemini_api_key {
            registry = registry.with(Arc::new(GeminiClient::new(
                key.clone(),
                config.gemini_api_base.clone(),
                config.backend_timeout,
            )?));
        }
        if let Some(key) = &config.groq_api_key {
            registry = registry.with(Arc::new(GroqClient::new(
                key.clone(),
                config.groq_api_base.clone(),
                config.backend_timeout,
            )?));
        }

        Ok(registry)
    }

    pub fn with(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.models.insert(model.backend(), model);
        self
    }

    pub fn get(&self, backend: Backend) -> Option<&Arc<dyn LanguageModel>> {
        self.models.get(&backend)
    }

    pub fn is_available(&self, backend: Backend) -> bool {
        self.models.contains_key(&backend)
    }

    /// Attempt order for a request naming `requested`.
    pub fn attempt_order(&self, requested: Backend) -> Vec<Backend> {
        attempt_order(requested, |b| self.is_available(b))
    }
}

/// Walks the fallback chain from `requested`, keeping only available backends.
///
/// Groq resolves to `[Groq, Gemini]`; Gemini never falls back.
pub fn attempt_order(requested: Backend, is_available: impl Fn(Backend) -> bool) -> Vec<Backend> {
    let mut order = Vec::new();
    let mut next = Some(requested);
    while let Some(backend) = next {
        if order.contains(&backend) {
            break;
        }
        order.push(backend);
        next = backend.fallback();
    }
    order.retain(|b| is_available(*b));
    order
}

/// The backend that would serve the first attempt, if any.
pub fn resolve_backend(requested: Backend, is_available: impl Fn(Backend) -> bool) -> Option<Backend> {
    attempt_order(requested, is_available).into_iter().next()
}
