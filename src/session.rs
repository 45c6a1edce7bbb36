//! Session-scoped agent state.
//!
//! Each submission replaces the previous results wholesale. Submissions are
//! numbered; a completion whose number is no longer the latest is dropped, so
//! a slow response can never overwrite a newer one.

use anyhow::Result;
use log::{debug, error, info};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::api::ApiClient;
use crate::core::catalog;
use crate::core::config::AppConfig;
use crate::core::model::{Mode, Preference, ProductResult, SearchRequest, SearchResponse};
use crate::ranking::score::rank;

/// Where product listings come from.
pub enum Backend {
    Remote(ApiClient),
    Offline,
}

impl Backend {
    pub fn from_config(config: &AppConfig, force_offline: bool) -> Result<Self> {
        if force_offline || config.offline {
            return Ok(Backend::Offline);
        }
        Ok(Backend::Remote(ApiClient::new(&config.backend_url, config.timeout())?))
    }

    pub fn describe(&self) -> String {
        match self {
            Backend::Remote(client) => client.base_url().to_string(),
            Backend::Offline => "offline catalog".to_string(),
        }
    }

    async fn fetch(&self, request: &SearchRequest) -> Result<SearchResponse> {
        match self {
            Backend::Remote(client) => client.search(request).await,
            Backend::Offline => Ok(catalog::search()),
        }
    }
}

/// Pipeline stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStage {
    Parsing,
    Navigating,
    Extracting,
    Ranking,
    Summarizing,
    Done,
}

impl AgentStage {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            AgentStage::Parsing => "parsing query",
            AgentStage::Navigating => "fetching listings",
            AgentStage::Extracting => "extracting products",
            AgentStage::Ranking => "ranking results",
            AgentStage::Summarizing => "summarizing",
            AgentStage::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AgentState {
    pub query: String,
    pub mode: Mode,
    pub preference: Preference,
    pub is_processing: bool,
    pub agent_step: usize,
    pub results: Vec<ProductResult>,
    pub summary: Option<String>,
    generation: u64,
}

/// Handle for one submission.
#[derive(Debug)]
pub struct Ticket {
    generation: u64,
    query: String,
    preference: Preference,
}

pub fn overview(results: &[ProductResult]) -> String {
    match results.first() {
        Some(top) => format!("Top recommendation: {}.", top.name),
        None => "No results found.".to_string(),
    }
}

#[derive(Clone, Default)]
pub struct Session {
    state: Arc<RwLock<AgentState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> AgentState {
        self.state.read().await.clone()
    }

    /// Start a submission. Any submission still in flight becomes stale.
    pub async fn begin(&self, query: &str, mode: Mode, preference: Preference) -> Ticket {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.query = query.to_string();
        state.mode = mode;
        state.preference = preference;
        state.is_processing = true;
        state.agent_step = AgentStage::Parsing.index();

        Ticket {
            generation: state.generation,
            query: query.to_string(),
            preference,
        }
    }

    pub async fn advance(&self, ticket: &Ticket, stage: AgentStage) -> bool {
        let mut state = self.state.write().await;
        if state.generation != ticket.generation {
            return false;
        }
        state.agent_step = stage.index();
        info!("[{}] {}", ticket.generation, stage.label());
        true
    }

    /// Apply a fetch outcome. Returns false when the ticket is stale and the
    /// outcome was discarded.
    pub async fn complete(&self, ticket: &Ticket, outcome: Result<SearchResponse>) -> bool {
        let mut state = self.state.write().await;
        if state.generation != ticket.generation {
            debug!(
                "Discarding stale response for {:?} (generation {} < {})",
                ticket.query, ticket.generation, state.generation
            );
            return false;
        }

        match outcome {
            Ok(resp) => {
                state.agent_step = AgentStage::Ranking.index();
                let ranked = rank(resp.products, &ticket.query, ticket.preference);

                state.agent_step = AgentStage::Summarizing.index();
                state.summary = Some(resp.summary.unwrap_or_else(|| overview(&ranked)));
                state.results = ranked;
            }
            Err(e) => {
                error!("Error in agents pipeline: {:#}", e);
                state.results = Vec::new();
                state.summary = Some(overview(&[]));
            }
        }

        state.agent_step = AgentStage::Done.index();
        state.is_processing = false;
        true
    }

    /// Run one full submission against `backend` and return the resulting state.
    pub async fn submit(
        &self,
        backend: &Backend,
        query: &str,
        mode: Mode,
        preference: Preference,
    ) -> AgentState {
        let ticket = self.begin(query, mode, preference).await;

        let request = SearchRequest {
            query: query.to_string(),
            mode,
            preference: Some(preference),
        };

        self.advance(&ticket, AgentStage::Navigating).await;
        let outcome = backend.fetch(&request).await;
        self.advance(&ticket, AgentStage::Extracting).await;

        self.complete(&ticket, outcome).await;
        self.snapshot().await
    }
}
