//! Background polling for watched queries
//!
//! A watched query runs in its own tokio task. The task refetches when the
//! query's poll interval elapses and immediately when an invalidation
//! touches its key, publishing each result on a `watch` channel. Dropping
//! the [`Subscription`] aborts the task, so a result that arrives after the
//! view is gone is never delivered, and discards the cached entry once no
//! other subscription reads the same key.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

use super::{Query, QueryCache, QueryClient, QueryKey, QuerySnapshot};
use crate::client::DashboardApi;
use crate::error::ApiError;

/// Live view of one query
pub struct Subscription<T> {
    key: QueryKey,
    rx: watch::Receiver<Option<QuerySnapshot<Value>>>,
    handle: JoinHandle<()>,
    cache: Arc<QueryCache>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Subscription<T> {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Wait for the next published result.
    ///
    /// Returns `None` once polling has stopped (the session ended).
    pub async fn next(&mut self) -> Option<QuerySnapshot<T>> {
        self.rx.changed().await.ok()?;
        self.rx.borrow_and_update().clone().map(QuerySnapshot::decode)
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.handle.abort();
        self.cache.unwatch_key(&self.key);
    }
}

enum Trigger {
    Tick,
    Invalidated,
    Closed,
}

/// Wait for the poll deadline or an invalidation that touches `key`.
async fn next_trigger(
    deadline: Option<Instant>,
    events: &mut broadcast::Receiver<super::QueryGroup>,
    key: &QueryKey,
) -> Trigger {
    loop {
        let tick = async {
            match deadline {
                Some(at) => sleep_until(at).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            _ = tick => return Trigger::Tick,
            event = events.recv() => match event {
                Ok(group) if key.belongs_to(group) => return Trigger::Invalidated,
                Ok(_) => continue,
                // Missed notices may have included ours
                Err(broadcast::error::RecvError::Lagged(_)) => return Trigger::Invalidated,
                Err(broadcast::error::RecvError::Closed) => return Trigger::Closed,
            },
        }
    }
}

pub(super) fn spawn<C, T>(
    client: QueryClient<C>,
    query: Query,
    _marker: PhantomData<T>,
) -> Subscription<T>
where
    C: DashboardApi + 'static,
{
    let key = query.key();
    let (tx, rx) = watch::channel(None);
    let cache = Arc::clone(client.cache());
    cache.watch_key(&key);
    let mut events = cache.subscribe();
    let task_key = key.clone();

    let handle = tokio::spawn(async move {
        let mut snapshot = client.fetch_value(&query).await;
        loop {
            let unauthorized = snapshot.error == Some(ApiError::Unauthorized);
            if tx.send(Some(snapshot)).is_err() || unauthorized {
                break;
            }

            let deadline = query.poll_interval().map(|every| Instant::now() + every);
            match next_trigger(deadline, &mut events, &task_key).await {
                Trigger::Tick => log::debug!("Poll tick: {}", task_key),
                Trigger::Invalidated => log::debug!("Refetch after invalidation: {}", task_key),
                Trigger::Closed => break,
            }
            snapshot = client.refetch_value(&query).await;
        }
    });

    Subscription {
        key,
        rx,
        handle,
        cache,
        _marker: PhantomData,
    }
}
