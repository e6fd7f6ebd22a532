//! Level service contracts for brightness and audio volume backends.
//!
//! A level service exposes one value in `[0, 1]` (screen brightness, sink volume, source volume)
//! together with a setter. Hosts without an active device report an unavailable snapshot and
//! ignore writes.

use std::cell::{Cell, RefCell};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::callbacks::{CallbackId, Callbacks};

/// Clamps a raw level into the unit interval. Non-finite input becomes `0.0`.
pub fn clamp_level(level: f64) -> f64 {
    if level.is_finite() {
        level.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
/// Point-in-time state of a level service.
pub struct LevelSnapshot {
    /// Current level, or `None` when no device backs the service.
    pub level: Option<f64>,
}

impl LevelSnapshot {
    /// Snapshot for a service with an active device.
    pub fn available(level: f64) -> Self {
        Self {
            level: Some(clamp_level(level)),
        }
    }

    /// Snapshot for a service with no active device.
    pub fn unavailable() -> Self {
        Self { level: None }
    }

    /// Whether a device currently backs the service.
    pub fn is_available(&self) -> bool {
        self.level.is_some()
    }

    /// Level to render. Missing devices render as zero.
    pub fn display_level(&self) -> f64 {
        self.level.unwrap_or(0.0)
    }
}

/// Host service exposing a single adjustable level.
pub trait LevelService {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Returns the current snapshot.
    fn snapshot(&self) -> LevelSnapshot;

    /// Requests a new level. Implementations clamp the value and ignore the call when no device
    /// is available.
    fn set_level(&self, level: f64);

    /// Subscribes to snapshot changes. The callback is invoked once immediately with the current
    /// snapshot.
    fn connect(&self, callback: Box<dyn Fn(&LevelSnapshot)>) -> CallbackId;

    /// Removes a subscription created by [`LevelService::connect`].
    fn disconnect(&self, id: CallbackId);
}

#[derive(Debug, Clone, Copy, Default)]
/// Level service for hosts without the corresponding hardware.
pub struct NoopLevelService;

impl LevelService for NoopLevelService {
    fn name(&self) -> &str {
        "noop"
    }

    fn snapshot(&self) -> LevelSnapshot {
        LevelSnapshot::unavailable()
    }

    fn set_level(&self, _level: f64) {}

    fn connect(&self, callback: Box<dyn Fn(&LevelSnapshot)>) -> CallbackId {
        callback(&LevelSnapshot::unavailable());
        CallbackId::next()
    }

    fn disconnect(&self, _id: CallbackId) {}
}

/// In-memory level service used by demos, the browser build, and tests.
pub struct MemoryLevelService {
    name: String,
    snapshot: RefCell<LevelSnapshot>,
    callbacks: Callbacks<LevelSnapshot>,
    writes: Cell<usize>,
}

impl MemoryLevelService {
    /// Creates a service backed by an active device at `level`.
    pub fn new(name: impl Into<String>, level: f64) -> Self {
        Self::with_snapshot(name, LevelSnapshot::available(level))
    }

    /// Creates a service with no active device.
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self::with_snapshot(name, LevelSnapshot::unavailable())
    }

    fn with_snapshot(name: impl Into<String>, snapshot: LevelSnapshot) -> Self {
        Self {
            name: name.into(),
            snapshot: RefCell::new(snapshot),
            callbacks: Callbacks::new(),
            writes: Cell::new(0),
        }
    }

    /// Simulates a backend-originated change such as a hardware key or device hotplug.
    pub fn publish(&self, snapshot: LevelSnapshot) {
        let snapshot = LevelSnapshot {
            level: snapshot.level.map(clamp_level),
        };
        *self.snapshot.borrow_mut() = snapshot;
        self.callbacks.notify(&snapshot);
    }

    /// Number of accepted `set_level` calls.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.callbacks.len()
    }
}

impl LevelService for MemoryLevelService {
    fn name(&self) -> &str {
        &self.name
    }

    fn snapshot(&self) -> LevelSnapshot {
        *self.snapshot.borrow()
    }

    fn set_level(&self, level: f64) {
        if !self.snapshot.borrow().is_available() {
            debug!(service = %self.name, "set_level ignored: no active device");
            return;
        }
        self.writes.set(self.writes.get() + 1);
        self.publish(LevelSnapshot::available(level));
    }

    fn connect(&self, callback: Box<dyn Fn(&LevelSnapshot)>) -> CallbackId {
        let id = self.callbacks.register(callback);
        let snapshot = self.snapshot();
        self.callbacks.notify_single(id, &snapshot);
        id
    }

    fn disconnect(&self, id: CallbackId) {
        self.callbacks.unregister(id);
    }
}
