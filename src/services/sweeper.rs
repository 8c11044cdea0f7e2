//! Session sweeper — periodic eviction of idle sessions.
//!
//! DESIGN
//! ======
//! A background task wakes on a fixed interval and drops every session whose
//! last activity is older than the configured TTL. Evicted sessions lose
//! their local appends; the store keeps whatever was inserted.

use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::info;

use crate::state::AppState;

/// Spawn the background sweeper. Returns a handle for shutdown.
pub fn spawn_session_sweeper(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            sweep_idle_sessions(&state).await;
        }
    })
}

/// Evict idle sessions now. Returns how many were dropped.
pub async fn sweep_idle_sessions(state: &AppState) -> usize {
    let now = Instant::now();
    let mut sessions = state.sessions.write().await;
    let before = sessions.len();
    sessions.retain(|_, session| now.duration_since(session.last_seen) < state.session_ttl);
    let evicted = before - sessions.len();

    if evicted > 0 {
        info!(evicted, remaining = sessions.len(), "idle gallery sessions evicted");
    }
    evicted
}

#[cfg(test)]
#[path = "sweeper_test.rs"]
mod tests;
