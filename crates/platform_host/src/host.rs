//! Bundle of host services handed to widget panels.

use std::rc::Rc;

use crate::level::{LevelService, MemoryLevelService};

#[derive(Clone, Default)]
/// Level services the shell host currently exposes. A `None` slot means the host has no such
/// service at all; widgets bound to it render at zero and ignore drags.
pub struct HostServices {
    /// Screen backlight.
    pub brightness: Option<Rc<dyn LevelService>>,
    /// Default audio sink volume.
    pub output_volume: Option<Rc<dyn LevelService>>,
    /// Default audio source volume.
    pub input_volume: Option<Rc<dyn LevelService>>,
}

impl HostServices {
    /// Host with no services.
    pub fn empty() -> Self {
        Self::default()
    }

    /// In-memory services at fixed starting levels, used by the browser build and demos.
    pub fn in_memory(brightness: f64, output_volume: f64, input_volume: f64) -> Self {
        Self {
            brightness: Some(Rc::new(MemoryLevelService::new("brightness", brightness))),
            output_volume: Some(Rc::new(MemoryLevelService::new("output-volume", output_volume))),
            input_volume: Some(Rc::new(MemoryLevelService::new("input-volume", input_volume))),
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = |slot: &Option<Rc<dyn LevelService>>| {
            slot.as_ref()
                .map(|service| service.name().to_string())
                .unwrap_or_else(|| "<none>".to_string())
        };
        f.debug_struct("HostServices")
            .field("brightness", &name(&self.brightness))
            .field("output_volume", &name(&self.output_volume))
            .field("input_volume", &name(&self.input_volume))
            .finish()
    }
}
