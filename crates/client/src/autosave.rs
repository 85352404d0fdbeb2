use crate::{
    error::GatewayResult,
    gateway::{LayoutGateway, LayoutSummary},
    session::{AUTOSAVE_LAYOUT_NAME, SharedState},
};
use log::{debug, warn};
use std::{sync::Arc, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};

pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(60);

/// Saves the board once under [`AUTOSAVE_LAYOUT_NAME`] and drops the
/// saver's older autosaves.
///
/// Failures are logged and reported as `false`; the state is never touched.
/// A failed cleanup is logged but the save still counts.
pub async fn autosave_tick(gateway: &dyn LayoutGateway, state: &SharedState, saved_by: &str) -> bool {
    let snapshot = state.lock().await.snapshot();

    match gateway
        .save_layout(AUTOSAVE_LAYOUT_NAME, saved_by, &snapshot)
        .await
    {
        Ok(summary) => {
            debug!("Autosaved layout {}", summary.id);
            match prune_autosaves(gateway, &summary).await {
                Ok(0) => {}
                Ok(n) => debug!("Removed {n} stale autosaves"),
                Err(e) => warn!("Autosave cleanup failed: {e}"),
            }
            true
        }
        Err(e) => {
            warn!("Autosave failed: {e}");
            false
        }
    }
}

/// Deletes every autosave of the same saver except `keep`
async fn prune_autosaves(
    gateway: &dyn LayoutGateway,
    keep: &LayoutSummary,
) -> GatewayResult<usize> {
    let stale: Vec<_> = gateway
        .list_layouts()
        .await?
        .into_iter()
        .filter(|l| {
            l.name == AUTOSAVE_LAYOUT_NAME && l.saved_by == keep.saved_by && l.id != keep.id
        })
        .map(|l| l.id)
        .collect();

    for id in &stale {
        gateway.delete_layout(*id).await?;
    }
    Ok(stale.len())
}

/// Runs [`autosave_tick`] every [`AUTOSAVE_INTERVAL`] until the handle is
/// aborted. The first save happens one interval after spawning.
pub fn spawn_autosave(
    gateway: Arc<dyn LayoutGateway>,
    state: SharedState,
    saved_by: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + AUTOSAVE_INTERVAL, AUTOSAVE_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            autosave_tick(gateway.as_ref(), &state, &saved_by).await;
        }
    })
}
