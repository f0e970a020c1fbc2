//! Bounded console log store
//!
//! Holds the console entries shown in the log panel. Producers share the
//! store through an `Arc<LogStore>`; every mutation is serialized through a
//! single mutex and published to subscribers over `tokio::sync::watch`
//! channels, so observers always converge on the latest state without the
//! producer waiting on them.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

/// Default number of entries kept before the oldest are evicted
pub const DEFAULT_CAPACITY: usize = 1000;

/// A single console entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Wall-clock time of the append call
    pub timestamp: DateTime<Utc>,
    /// Message text as given by the producer
    pub message: String,
}

impl LogEntry {
    fn new(message: String) -> Self {
        Self {
            timestamp: Utc::now(),
            message,
        }
    }
}

/// Immutable view of the store contents, oldest entry first
///
/// Entries are shared between snapshots, so publishing only copies pointers.
pub type Snapshot = Arc<[Arc<LogEntry>]>;

/// Identifies a subscription for [`LogStore::unsubscribe`]
pub type SubscriptionId = u64;

/// Receiving side of a store subscription
///
/// Updates may be coalesced: if several mutations land between two reads,
/// only the latest state is seen.
#[derive(Debug)]
pub struct LogSubscription {
    id: SubscriptionId,
    receiver: watch::Receiver<Snapshot>,
}

impl LogSubscription {
    /// Token to pass to [`LogStore::unsubscribe`]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the store changed since the last call to [`Self::latest`]
    ///
    /// Returns false once the subscription has been removed from the store.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Take the latest published state and mark it as seen
    pub fn latest(&mut self) -> Snapshot {
        self.receiver.borrow_and_update().clone()
    }

    /// Wait for the next change
    ///
    /// Returns false if the subscription was removed from the store.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}

struct Inner {
    entries: VecDeque<Arc<LogEntry>>,
    subscribers: HashMap<SubscriptionId, watch::Sender<Snapshot>>,
    next_subscription_id: SubscriptionId,
}

impl Inner {
    fn snapshot(&self) -> Snapshot {
        self.entries.iter().cloned().collect()
    }

    /// Push the current state to every live subscriber, pruning dropped ones
    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.subscribers.retain(|_, sender| {
            if sender.is_closed() {
                return false;
            }
            sender.send_replace(Arc::clone(&snapshot));
            true
        });
    }
}

/// Thread-safe bounded store of console entries
pub struct LogStore {
    inner: Mutex<Inner>,
    capacity: usize,
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl LogStore {
    /// Create a store keeping at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Mutex::new(Inner {
                entries: VecDeque::with_capacity(capacity),
                subscribers: HashMap::new(),
                next_subscription_id: 0,
            }),
            capacity,
        }
    }

    // append/clear must never fail, so a poisoned lock is recovered as-is.
    // The entry sequence is only ever mutated by whole push/pop operations.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a message, evicting the oldest entries past capacity
    pub fn append(&self, message: impl Into<String>) {
        let entry = Arc::new(LogEntry::new(message.into()));
        let mut inner = self.lock();
        inner.entries.push_back(entry);
        while inner.entries.len() > self.capacity {
            inner.entries.pop_front();
        }
        inner.publish();
    }

    /// Remove every entry
    pub fn clear(&self) {
        let mut inner = self.lock();
        let removed = inner.entries.len();
        inner.entries.clear();
        inner.publish();
        tracing::debug!(removed, "Console log cleared");
    }

    /// Copy of the current entries, oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.lock()
            .entries
            .iter()
            .map(|entry| LogEntry::clone(entry))
            .collect()
    }

    /// Subscribe to changes
    ///
    /// The subscription starts out holding the current state, marked as seen.
    pub fn subscribe(&self) -> LogSubscription {
        let mut inner = self.lock();
        let id = inner.next_subscription_id;
        inner.next_subscription_id += 1;

        let (sender, receiver) = watch::channel(inner.snapshot());
        inner.subscribers.insert(id, sender);
        tracing::debug!(subscription = id, "Console subscriber added");

        LogSubscription { id, receiver }
    }

    /// Stop delivering updates to a subscription; unknown ids are ignored
    pub fn unsubscribe(&self, id: SubscriptionId) {
        if self.lock().subscribers.remove(&id).is_some() {
            tracing::debug!(subscription = id, "Console subscriber removed");
        }
    }

    /// Maximum number of entries kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Check if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Borrow;
    use std::collections::HashSet;
    use std::thread;

    fn messages<E: Borrow<LogEntry>>(entries: &[E]) -> Vec<&str> {
        entries.iter().map(|e| e.borrow().message.as_str()).collect()
    }

    #[test]
    fn test_append_keeps_arrival_order() {
        let store = LogStore::new(10);
        store.append("first");
        store.append(String::from("second"));
        store.append("");

        assert_eq!(store.len(), 3);
        assert_eq!(messages(&store.snapshot()), vec!["first", "second", ""]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let store = LogStore::new(3);
        for message in ["A", "B", "C", "D"] {
            store.append(message);
        }

        assert_eq!(messages(&store.snapshot()), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_capacity_holds_last_entries_after_many_appends() {
        let store = LogStore::new(5);
        for i in 0..100 {
            store.append(format!("msg {}", i));
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 5);
        assert_eq!(
            messages(&snapshot),
            vec!["msg 95", "msg 96", "msg 97", "msg 98", "msg 99"]
        );
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let store = LogStore::new(0);
        assert_eq!(store.capacity(), 1);
        store.append("a");
        store.append("b");
        assert_eq!(messages(&store.snapshot()), vec!["b"]);
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(LogStore::default().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_timestamps_are_taken_at_append() {
        let before = Utc::now();
        let store = LogStore::new(10);
        store.append("one");
        store.append("two");
        let after = Utc::now();

        let snapshot = store.snapshot();
        assert!(snapshot[0].timestamp >= before);
        assert!(snapshot[0].timestamp <= snapshot[1].timestamp);
        assert!(snapshot[1].timestamp <= after);
    }

    #[test]
    fn test_clear_empties_store() {
        let store = LogStore::new(10);
        store.append("a");
        store.append("b");
        store.clear();

        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());

        store.append("c");
        assert_eq!(messages(&store.snapshot()), vec!["c"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = LogStore::new(10);
        store.append("a");
        let snapshot = store.snapshot();
        store.append("b");
        store.clear();

        assert_eq!(messages(&snapshot), vec!["a"]);
    }

    #[test]
    fn test_concurrent_appends_below_capacity() {
        let store = Arc::new(LogStore::new(1000));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        store.append(format!("t{}-{}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 400);
        let unique: HashSet<_> = snapshot.iter().map(|e| e.message.clone()).collect();
        assert_eq!(unique.len(), 400);

        // Each producer's own messages keep their relative order
        for t in 0..8 {
            let prefix = format!("t{}-", t);
            let seen: Vec<usize> = snapshot
                .iter()
                .filter_map(|e| e.message.strip_prefix(&prefix))
                .map(|n| n.parse().unwrap())
                .collect();
            assert_eq!(seen, (0..50).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_concurrent_appends_over_capacity() {
        let store = Arc::new(LogStore::new(64));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..100 {
                        store.append(format!("t{}-{}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 64);
        let unique: HashSet<_> = snapshot.iter().map(|e| e.message.clone()).collect();
        assert_eq!(unique.len(), 64);

        // FIFO eviction: whatever survives from a producer is a suffix of
        // what it appended, still in order.
        for t in 0..4 {
            let prefix = format!("t{}-", t);
            let seen: Vec<usize> = snapshot
                .iter()
                .filter_map(|e| e.message.strip_prefix(&prefix))
                .map(|n| n.parse().unwrap())
                .collect();
            let expected: Vec<usize> = (100 - seen.len()..100).collect();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn test_subscription_starts_with_current_state() {
        let store = LogStore::new(10);
        store.append("before");

        let mut sub = store.subscribe();
        assert!(!sub.has_changed());
        assert_eq!(messages(&sub.latest()), vec!["before"]);
    }

    #[test]
    fn test_subscription_sees_final_state_of_burst() {
        let store = LogStore::new(3);
        let mut sub = store.subscribe();

        for message in ["A", "B", "C", "D", "E"] {
            store.append(message);
        }

        assert!(sub.has_changed());
        assert_eq!(messages(&sub.latest()), vec!["C", "D", "E"]);
        assert!(!sub.has_changed());
    }

    #[test]
    fn test_subscription_notified_on_clear() {
        let store = LogStore::new(10);
        store.append("a");
        let mut sub = store.subscribe();

        store.clear();
        assert!(tokio_test::block_on(sub.changed()));
        assert!(sub.latest().is_empty());
    }

    #[test]
    fn test_multiple_subscribers() {
        let store = LogStore::new(10);
        let mut first = store.subscribe();
        let mut second = store.subscribe();
        assert_ne!(first.id(), second.id());

        store.append("x");
        assert_eq!(messages(&first.latest()), vec!["x"]);
        assert_eq!(messages(&second.latest()), vec!["x"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let store = LogStore::new(10);
        let mut sub = store.subscribe();
        store.unsubscribe(sub.id());
        assert_eq!(store.subscriber_count(), 0);

        store.append("after");
        assert!(!sub.has_changed());
        assert!(!tokio_test::block_on(sub.changed()));
        assert!(sub.latest().is_empty());

        // Unknown ids are ignored
        store.unsubscribe(sub.id());
        store.unsubscribe(9999);
    }

    #[test]
    fn test_dropped_subscription_is_pruned() {
        let store = LogStore::new(10);
        let sub = store.subscribe();
        let _kept = store.subscribe();
        drop(sub);
        assert_eq!(store.subscriber_count(), 2);

        store.append("prune");
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_subscriber_across_threads_converges() {
        let store = Arc::new(LogStore::new(50));
        let mut sub = store.subscribe();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..25 {
                        store.append(format!("{}:{}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let latest: Vec<LogEntry> = sub.latest().iter().map(|e| LogEntry::clone(e)).collect();
        assert_eq!(latest, store.snapshot());
    }

    #[test]
    fn test_published_snapshots_share_entries() {
        let store = LogStore::new(10);
        let mut sub = store.subscribe();

        store.append("shared");
        let first = sub.latest();
        store.append("next");
        let second = sub.latest();

        assert_eq!(second.len(), 2);
        assert!(Arc::ptr_eq(&first[0], &second[0]));
    }
}
