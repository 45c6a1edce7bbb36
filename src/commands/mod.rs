pub mod compare;
pub mod insights;
pub mod search;

use anyhow::Result;
use log::{debug, info};

use crate::core::config::load_config;
use crate::core::model::{Mode, Preference};
use crate::session::{AgentState, Backend, Session};

/// Load config, pick a backend and run one submission.
pub(crate) async fn submit(
    query: &str,
    mode: Mode,
    preference: Option<Preference>,
    offline: bool,
) -> Result<AgentState> {
    let config = load_config()?;
    let backend = Backend::from_config(&config, offline)?;
    let preference = preference.unwrap_or(config.default_preference);

    info!("Searching {:?} via {} ({:?})", query, backend.describe(), preference);
    let session = Session::new();
    let state = session.submit(&backend, query, mode, preference).await;
    debug!(
        "Pipeline step {} (processing: {}), {} results",
        state.agent_step,
        state.is_processing,
        state.results.len()
    );
    Ok(state)
}
