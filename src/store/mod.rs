//! Session state store and snapshot notifier.

mod session_model;
mod session_store;

pub use session_model::{HintSeverity, SessionSnapshot, SessionState};
pub use session_store::{RecordingObserver, SessionStore, SnapshotObserver};
