//! Single-flight adapter between one-shot fetches and synchronous rendering.
//!
//! A screen that polls for data on every frame cannot await a fetch in the
//! middle of rendering. [`Resource`] starts the fetch once, up front, and
//! lets any number of readers poll its outcome synchronously; a reader that
//! finds the fetch still in flight receives a handle it can await before
//! polling again.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

enum State<T, E> {
    Pending,
    Ready(Arc<T>),
    Failed(Arc<E>),
}

/// Outcome of polling a [`Resource`].
pub enum ReadState<T, E> {
    /// The producer has not settled yet. Await the settlement handle, then
    /// read again.
    Pending(Settlement<T, E>),
    /// The producer resolved; every later read returns the same value.
    Ready(Arc<T>),
    /// The producer failed; every later read returns the same error,
    /// unwrapped, so callers can inspect the original failure.
    Failed(Arc<E>),
}

/// A cached asynchronous value whose producer runs at most once.
///
/// The producer starts immediately on construction, not on first read, so
/// readers arriving at any point all observe the same in-flight operation.
/// The state moves from pending to exactly one terminal outcome and stays
/// there; a caller wanting a retry builds a new resource. There is no
/// cancellation: dropping every handle leaves the producer running to
/// completion, its outcome simply unobserved.
pub struct Resource<T, E> {
    state: watch::Receiver<State<T, E>>,
}

impl<T, E> Clone for Resource<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T, E> Resource<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Starts `producer` on the ambient runtime and returns the handle
    /// readers poll.
    pub fn new<F>(producer: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (sender, state) = watch::channel(State::Pending);
        tokio::spawn(async move {
            let outcome = match producer.await {
                Ok(value) => State::Ready(Arc::new(value)),
                Err(error) => State::Failed(Arc::new(error)),
            };
            // Nobody left to read the outcome is fine.
            let _ = sender.send(outcome);
        });

        Self { state }
    }

    /// Polls the resource without blocking.
    pub fn read(&self) -> ReadState<T, E> {
        match &*self.state.borrow() {
            State::Pending => ReadState::Pending(Settlement {
                state: self.state.clone(),
            }),
            State::Ready(value) => ReadState::Ready(Arc::clone(value)),
            State::Failed(error) => ReadState::Failed(Arc::clone(error)),
        }
    }
}

/// Handle for awaiting a pending resource's settlement.
pub struct Settlement<T, E> {
    state: watch::Receiver<State<T, E>>,
}

impl<T, E> Settlement<T, E> {
    /// Completes once the resource has reached a terminal state.
    pub async fn wait(mut self) {
        while matches!(&*self.state.borrow(), State::Pending) {
            if self.state.changed().await.is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn producer_runs_exactly_once_across_reads_and_clones() {
        let runs = Arc::new(AtomicUsize::new(0));
        let (release, gate) = oneshot::channel::<()>();

        let counted = Arc::clone(&runs);
        let resource: Resource<u32, ()> = Resource::new(async move {
            counted.fetch_add(1, Ordering::SeqCst);
            gate.await.unwrap();
            Ok(7)
        });
        let sibling = resource.clone();

        for _ in 0..5 {
            assert!(matches!(resource.read(), ReadState::Pending(_)));
            assert!(matches!(sibling.read(), ReadState::Pending(_)));
        }

        release.send(()).unwrap();
        if let ReadState::Pending(settlement) = resource.read() {
            settlement.wait().await;
        }

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        for handle in [&resource, &sibling] {
            match handle.read() {
                ReadState::Ready(value) => assert_eq!(*value, 7),
                _ => panic!("expected the resolved value"),
            }
        }
    }

    #[tokio::test]
    async fn every_read_after_settlement_returns_the_same_value() {
        let resource: Resource<Vec<u32>, ()> = Resource::new(async { Ok(vec![1, 2, 3]) });
        if let ReadState::Pending(settlement) = resource.read() {
            settlement.wait().await;
        }

        let first = match resource.read() {
            ReadState::Ready(value) => value,
            _ => panic!("expected the resolved value"),
        };
        let second = match resource.read() {
            ReadState::Ready(value) => value,
            _ => panic!("expected the resolved value"),
        };
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn failure_is_preserved_verbatim_on_every_read() {
        let resource: Resource<u32, String> =
            Resource::new(async { Err("status 502".to_string()) });
        if let ReadState::Pending(settlement) = resource.read() {
            settlement.wait().await;
        }

        let first = match resource.read() {
            ReadState::Failed(error) => error,
            _ => panic!("expected the failure"),
        };
        assert_eq!(*first, "status 502");

        let second = match resource.read() {
            ReadState::Failed(error) => error,
            _ => panic!("expected the failure"),
        };
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn settlement_wait_is_immediate_once_settled() {
        let resource: Resource<u32, ()> = Resource::new(async { Ok(1) });
        if let ReadState::Pending(settlement) = resource.read() {
            settlement.wait().await;
        }

        // A settlement handle taken before the transition still completes.
        let (release, gate) = oneshot::channel::<()>();
        let slow: Resource<u32, ()> = Resource::new(async move {
            gate.await.unwrap();
            Ok(2)
        });
        let pending = match slow.read() {
            ReadState::Pending(settlement) => settlement,
            _ => panic!("resource settled before its gate opened"),
        };
        release.send(()).unwrap();
        pending.wait().await;
        assert!(matches!(slow.read(), ReadState::Ready(_)));
    }
}
