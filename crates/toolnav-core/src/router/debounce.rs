//! Per-source debouncing
//!
//! Each key owns at most one pending timer. Scheduling again for the same key
//! cancels the pending timer and starts a new one, so only the last value in a
//! burst is delivered, once the key has been quiet for `delay`.
//!
//! Timers run as tokio tasks and deliver into a channel; the owner pulls
//! fired values with [`Debouncer::next`] or [`Debouncer::try_next`] and handles
//! them on its own task, so no state is shared with the timers.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::types::CancellationToken;

struct Pending {
    generation: u64,
    token: CancellationToken,
}

pub struct Debouncer<K, V> {
    delay: Duration,
    pending: HashMap<K, Pending>,
    next_generation: u64,
    tx: mpsc::UnboundedSender<(K, u64, V)>,
    rx: mpsc::UnboundedReceiver<(K, u64, V)>,
}

impl<K, V> Debouncer<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Send + 'static,
{
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            pending: HashMap::new(),
            next_generation: 0,
            tx,
            rx,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re)start the timer for `key`
    ///
    /// Timers run on the current tokio runtime. Outside one nothing is
    /// scheduled, the value is dropped and `false` is returned.
    pub fn schedule(&mut self, key: K, value: V) -> bool {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return false;
        };
        let generation = self.next_generation;
        self.next_generation += 1;

        let token = CancellationToken::new();
        if let Some(previous) = self.pending.insert(
            key.clone(),
            Pending {
                generation,
                token: token.clone(),
            },
        ) {
            previous.token.cancel();
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        handle.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send((key, generation, value));
                }
            }
        });
        true
    }

    /// Drop the pending timer for `key`, if any
    pub fn cancel(&mut self, key: &K) {
        if let Some(pending) = self.pending.remove(key) {
            pending.token.cancel();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, pending) in self.pending.drain() {
            pending.token.cancel();
        }
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Wait for the next timer to fire; `None` once nothing is pending
    pub async fn next(&mut self) -> Option<(K, V)> {
        while !self.pending.is_empty() {
            let (key, generation, value) = self.rx.recv().await?;
            if let Some(fired) = self.accept(key, generation, value) {
                return Some(fired);
            }
        }
        None
    }

    /// A value whose timer has already fired, without waiting
    pub fn try_next(&mut self) -> Option<(K, V)> {
        while let Ok((key, generation, value)) = self.rx.try_recv() {
            if let Some(fired) = self.accept(key, generation, value) {
                return Some(fired);
            }
        }
        None
    }

    // A value from a superseded timer is dropped
    fn accept(&mut self, key: K, generation: u64, value: V) -> Option<(K, V)> {
        match self.pending.get(&key) {
            Some(pending) if pending.generation == generation => {
                self.pending.remove(&key);
                Some((key, value))
            }
            _ => None,
        }
    }
}

impl<K, V> Drop for Debouncer<K, V> {
    fn drop(&mut self) {
        for pending in self.pending.values() {
            pending.token.cancel();
        }
    }
}

impl<K, V> std::fmt::Debug for Debouncer<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending.len())
            .finish()
    }
}
