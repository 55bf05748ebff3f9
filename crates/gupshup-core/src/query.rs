//! Keyed query cache
//!
//! Each query result is stored under the parameters that produced it. A
//! fetch is bracketed by [`QueryCache::begin`] and [`QueryCache::complete`];
//! the ticket returned by `begin` carries a per-key generation so that a
//! response overtaken by a newer fetch of the same key is dropped instead of
//! overwriting fresher data. Tickets also carry the cache epoch, which
//! [`QueryCache::clear`] bumps, so a fetch started before a logout can never
//! land in the next session. Reads always go through the caller's current
//! key, so results for a key the UI moved away from are never shown.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, Utc};

/// When a mounted view should fetch even though data is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefetchPolicy {
    /// Refetch every time the consuming view mounts
    pub on_mount: bool,
}

impl RefetchPolicy {
    pub const ALWAYS_ON_MOUNT: RefetchPolicy = RefetchPolicy { on_mount: true };
    pub const EXPLICIT_ONLY: RefetchPolicy = RefetchPolicy { on_mount: false };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// Never fetched
    #[default]
    Idle,
    Fetching,
    Ready,
    Failed,
}

/// Proof of an in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<K> {
    key: K,
    epoch: u64,
    generation: u64,
}

impl<K> FetchTicket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    data: Option<V>,
    status: QueryStatus,
    generation: u64,
    stale: bool,
    revision: u64,
    fetched_at: Option<DateTime<Utc>>,
}

impl<V> Default for Entry<V> {
    fn default() -> Self {
        Self {
            data: None,
            status: QueryStatus::Idle,
            generation: 0,
            stale: false,
            revision: 0,
            fetched_at: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    policy: RefetchPolicy,
    epoch: u64,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    pub fn new(policy: RefetchPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
            epoch: 0,
        }
    }

    pub fn policy(&self) -> RefetchPolicy {
        self.policy
    }

    /// Whether a view mounting with `key` should issue a fetch.
    pub fn should_fetch_on_mount(&self, key: &K) -> bool {
        match self.entries.get(key) {
            None => true,
            Some(entry) => {
                self.policy.on_mount
                    || entry.stale
                    || (entry.data.is_none() && entry.status != QueryStatus::Fetching)
            }
        }
    }

    /// Start a fetch for `key`. Any earlier ticket for the same key is now stale.
    pub fn begin(&mut self, key: K) -> FetchTicket<K> {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.generation += 1;
        entry.status = QueryStatus::Fetching;
        FetchTicket {
            key,
            epoch: self.epoch,
            generation: entry.generation,
        }
    }

    fn is_current(&self, ticket: &FetchTicket<K>) -> bool {
        ticket.epoch == self.epoch
            && self
                .entries
            .get(&ticket.key)
                .is_some_and(|entry| entry.generation == ticket.generation)
    }

    /// Store a result. Returns `false` (and stores nothing) for a superseded ticket.
    pub fn complete(&mut self, ticket: FetchTicket<K>, value: V) -> bool {
        if !self.is_current(&ticket) {
            tracing::debug!(key = ?ticket.key, "Discarding superseded query result");
            return false;
        }
        if let Some(entry) = self.entries.get_mut(&ticket.key) {
            entry.data = Some(value);
            entry.status = QueryStatus::Ready;
            entry.stale = false;
            entry.revision += 1;
            entry.fetched_at = Some(Utc::now());
        }
        true
    }

    /// Record a failed fetch. Previously cached data is kept.
    pub fn fail(&mut self, ticket: FetchTicket<K>) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }
        if let Some(entry) = self.entries.get_mut(&ticket.key) {
            entry.status = QueryStatus::Failed;
        }
        true
    }

    /// Mark cached data as needing a refetch.
    pub fn invalidate(&mut self, key: &K) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stale = true;
        }
    }

    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.stale = true;
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key).and_then(|entry| entry.data.as_ref())
    }

    pub fn status(&self, key: &K) -> QueryStatus {
        self.entries
            .get(key)
            .map(|entry| entry.status)
            .unwrap_or_default()
    }

    pub fn is_stale(&self, key: &K) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.stale)
    }

    /// Bumped on every stored result; lets views react to new data only.
    pub fn revision(&self, key: &K) -> u64 {
        self.entries.get(key).map(|entry| entry.revision).unwrap_or(0)
    }

    pub fn fetched_at(&self, key: &K) -> Option<DateTime<Utc>> {
        self.entries.get(key).and_then(|entry| entry.fetched_at)
    }

    /// Drop everything (logout). Tickets issued before this are dead.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }
}
