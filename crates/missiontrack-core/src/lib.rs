//! # Mission Tracker Core Library
//!
//! This library provides the core business logic for the Mission Tracker
//! habit app. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary; any GUI is a thin layer over the
//! same core library.
//!
//! ## Architecture
//!
//! - **Tracker Session**: an owned state object (habit list + level) whose
//!   commands return events instead of performing side effects
//! - **Completion/Progress**: pure evaluation of entries against goals and
//!   aggregation over date ranges
//! - **Storage**: SQLite-based session persistence and TOML-based
//!   configuration
//! - **Backend**: optional JSON-over-HTTP remote store
//!
//! ## Key Components
//!
//! - [`TrackerSession`]: habit list and level state machine
//! - [`Habit`]: one tracked behavior with goal, unit, and per-date entries
//! - [`Database`]: local session and entry-history persistence
//! - [`Config`]: application configuration management
//! - [`RemoteBackend`]: remote habit store client

pub mod backend;
pub mod error;
pub mod events;
pub mod habit;
pub mod notify;
pub mod quotes;
pub mod storage;
pub mod tracker;
pub mod view;

pub use backend::{RemoteBackend, SaveOutcome};
pub use error::{
    BackendError, ConfigError, CoreError, StorageError, ValidationError,
};
pub use events::Event;
pub use habit::{
    chunk_fill, default_habits, habit_progress, is_completed, overall_progress, ChunkFill,
    GoalKind, Habit,
};
pub use notify::{BufferNotifier, ConsoleNotifier, Notifier};
pub use storage::{Config, Database};
pub use tracker::TrackerSession;
pub use view::{date_range, navigate, ViewMode};
