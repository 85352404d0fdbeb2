use crate::{
    error::GatewayResult,
    gateway::{LayoutGateway, LayoutSummary},
};
use log::{info, warn};
use planner::PlanningState;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Name under which the periodic save is stored
pub const AUTOSAVE_LAYOUT_NAME: &str = "Autosave";

/// The board state shared with the autosave task
pub type SharedState = Arc<Mutex<PlanningState>>;

/// Starts a session: loads the catalog, then picks up the newest autosave.
///
/// A missing catalog is an error. A failed restore is logged and the fresh
/// catalog state is kept.
pub async fn boot(gateway: &dyn LayoutGateway) -> GatewayResult<PlanningState> {
    let catalog = gateway.fetch_catalog().await?;
    let mut state = PlanningState::initialize(catalog);
    info!(
        "Loaded catalog: {} courses, {} professors, {} IS electives",
        state.courses().len(),
        state.professors().len(),
        state.catalog().len()
    );

    match restore_autosave(gateway, &mut state).await {
        Ok(true) => info!("Session restored"),
        Ok(false) => {}
        Err(e) => warn!("Auto-restore failed: {e}"),
    }

    Ok(state)
}

async fn restore_autosave(
    gateway: &dyn LayoutGateway,
    state: &mut PlanningState,
) -> GatewayResult<bool> {
    let layouts = gateway.list_layouts().await?;
    let Some(latest) = layouts.iter().find(|l| l.name == AUTOSAVE_LAYOUT_NAME) else {
        return Ok(false);
    };

    load_layout(gateway, state, latest.id).await?;
    Ok(true)
}

/// Replaces the board with a saved layout.
///
/// The state is untouched unless the layout was fetched and parsed.
pub async fn load_layout(
    gateway: &dyn LayoutGateway,
    state: &mut PlanningState,
    id: Uuid,
) -> GatewayResult<()> {
    let layout = gateway.fetch_layout(id).await?;
    state.restore_value(layout)?;
    info!("Loaded layout {id}");
    Ok(())
}

/// Saves the current board under a name
pub async fn save_layout(
    gateway: &dyn LayoutGateway,
    state: &SharedState,
    name: &str,
    saved_by: &str,
) -> GatewayResult<LayoutSummary> {
    // Only hold the lock for the copy
    let snapshot = state.lock().await.snapshot();
    let summary = gateway.save_layout(name, saved_by, &snapshot).await?;
    info!("Layout \"{}\" saved", summary.name);
    Ok(summary)
}
