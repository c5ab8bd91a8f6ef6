//! Session store: owns the mutable state and broadcasts snapshots.

use std::sync::{Arc, Mutex};

use super::{SessionSnapshot, SessionState};
use crate::store::session_model::HintSeverity;

/// Trait for receiving state snapshots.
///
/// The store broadcasts a fresh snapshot after every mutation. Fan-out is
/// synchronous and observer order is unspecified.
///
/// # Design Rules
///
/// - `on_snapshot()` must be fast and non-blocking (renderers should queue)
/// - Observer failure must not affect the mutation that triggered it
pub trait SnapshotObserver: Send + Sync {
    /// Receive an immutable snapshot of the session state.
    fn on_snapshot(&self, snapshot: SessionSnapshot);
}

/// Single owner of [`SessionState`].
///
/// All components request mutation through [`update`](Self::update); no shared
/// mutable copies exist. Lock scopes never cross an `.await` point.
pub struct SessionStore {
    state: Mutex<SessionState>,
    observers: Mutex<Vec<Arc<dyn SnapshotObserver>>>,
}

impl SessionStore {
    pub fn new(cluster: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(SessionState::new(cluster, endpoint)),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Register an observer for broadcast-on-mutation.
    pub fn subscribe(&self, observer: Arc<dyn SnapshotObserver>) {
        self.observers.lock().unwrap().push(observer);
    }

    /// Returns a deep, independent copy of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().unwrap().clone()
    }

    /// Apply a mutation and broadcast the resulting snapshot.
    pub fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut SessionState),
    {
        let snapshot = {
            let mut state = self.state.lock().unwrap();
            mutate(&mut state);
            state.clone()
        };
        self.broadcast(snapshot);
    }

    /// Shorthand for a hint-only mutation.
    pub fn set_hint(&self, severity: HintSeverity, message: impl Into<String>) {
        let message = message.into();
        self.update(|state| state.set_hint(severity, message));
    }

    fn broadcast(&self, snapshot: SessionSnapshot) {
        let observers = self.observers.lock().unwrap();
        for observer in observers.iter() {
            observer.on_snapshot(snapshot.clone());
        }
    }
}

/// Observer that records every snapshot it receives. Used in tests and by
/// diagnostic tooling.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    snapshots: Arc<Mutex<Vec<SessionSnapshot>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded snapshots.
    pub fn snapshots(&self) -> Vec<SessionSnapshot> {
        self.snapshots.lock().unwrap().clone()
    }

    /// Returns the most recent snapshot, if any.
    pub fn last(&self) -> Option<SessionSnapshot> {
        self.snapshots.lock().unwrap().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.lock().unwrap().is_empty()
    }
}

impl SnapshotObserver for RecordingObserver {
    fn on_snapshot(&self, snapshot: SessionSnapshot) {
        self.snapshots.lock().unwrap().push(snapshot);
    }
}
