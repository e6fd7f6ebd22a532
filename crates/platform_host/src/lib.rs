//! Typed host-service contracts consumed by shell widgets.
//!
//! This crate is the boundary between widgets and the backends that own brightness and audio
//! levels. It exposes the level service trait, an observer registry services use to push
//! snapshots, no-op and in-memory adapters, and small time helpers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod callbacks;
pub mod host;
pub mod level;
pub mod time;

pub use callbacks::{CallbackId, Callbacks};
pub use host::HostServices;
pub use level::{clamp_level, LevelService, LevelSnapshot, MemoryLevelService, NoopLevelService};
pub use time::{elapsed_ms, unix_time_ms_now};
