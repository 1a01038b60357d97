//! Explicit app-state subscriptions.
//!
//! The embedding shell reports foreground/background transitions here;
//! screens subscribe and decide for themselves when to refetch. Keeping the
//! subscription explicit leaves the core crates stateless.

use std::future::Future;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::debug;

/// Coarse application state as reported by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Active,
    Inactive,
    Background,
}

impl AppState {
    fn is_dormant(self) -> bool {
        matches!(self, AppState::Inactive | AppState::Background)
    }
}

/// Broadcast point for app-state transitions.
#[derive(Clone)]
pub struct Lifecycle {
    events: broadcast::Sender<AppState>,
}

impl Lifecycle {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self { events }
    }

    /// Reports a transition. Emitting with no subscribers is fine.
    pub fn emit(&self, state: AppState) {
        let _ = self.events.send(state);
    }

    /// Raw subscription, for callers that want every transition.
    pub fn subscribe(&self) -> broadcast::Receiver<AppState> {
        self.events.subscribe()
    }

    /// Runs `callback` each time the app comes back to the foreground,
    /// meaning a transition from inactive or background to active.
    ///
    /// The returned handle can be aborted to stop watching; transitions
    /// emitted after this call are never missed.
    pub fn on_foreground<F, Fut>(&self, callback: F) -> JoinHandle<()>
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let mut events = self.events.subscribe();
        tokio::spawn(async move {
            let mut previous = AppState::Active;
            loop {
                match events.recv().await {
                    Ok(state) => {
                        if previous.is_dormant() && state == AppState::Active {
                            debug!("app foregrounded");
                            callback().await;
                        }
                        previous = state;
                    }
                    Err(RecvError::Lagged(missed)) => {
                        debug!(missed, "dropped app-state transitions");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    async fn fired(rx: &mut mpsc::UnboundedReceiver<()>) -> bool {
        timeout(Duration::from_millis(500), rx.recv()).await.is_ok()
    }

    #[tokio::test]
    async fn foreground_transition_invokes_the_callback() {
        let lifecycle = Lifecycle::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        lifecycle.on_foreground(move || {
            let tx = tx.clone();
            async move {
                tx.send(()).unwrap();
            }
        });

        lifecycle.emit(AppState::Background);
        lifecycle.emit(AppState::Active);
        assert!(fired(&mut rx).await);

        lifecycle.emit(AppState::Inactive);
        lifecycle.emit(AppState::Active);
        assert!(fired(&mut rx).await);
    }

    #[tokio::test]
    async fn active_to_active_does_not_refire() {
        let lifecycle = Lifecycle::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        lifecycle.on_foreground(move || {
            let tx = tx.clone();
            async move {
                tx.send(()).unwrap();
            }
        });

        // Repeated active reports without a dormant phase in between.
        lifecycle.emit(AppState::Active);
        lifecycle.emit(AppState::Active);

        // Flush the watcher with a real transition, then check only that one
        // callback landed.
        lifecycle.emit(AppState::Background);
        lifecycle.emit(AppState::Active);
        assert!(fired(&mut rx).await);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn going_dormant_alone_does_not_fire() {
        let lifecycle = Lifecycle::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        lifecycle.on_foreground(move || {
            let tx = tx.clone();
            async move {
                tx.send(()).unwrap();
            }
        });

        lifecycle.emit(AppState::Inactive);
        lifecycle.emit(AppState::Background);
        assert!(!fired(&mut rx).await);
    }
}
