//! QuickSliders panel model: conditional slider construction and live service binding.
//!
//! The panel owns one [`SliderBinding`] per enabled kind. A binding subscribes to its level
//! service on construction and unsubscribes when dropped, so tearing a slider down is just
//! removing it from the panel.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use platform_host::{clamp_level, CallbackId, Callbacks, HostServices, LevelService};
use system_ui::{SliderConfig, SliderKind};
use tracing::{debug, info};

use crate::config::QuickSlidersConfig;

/// Looks up the host service backing `kind`.
pub fn service_for(services: &HostServices, kind: SliderKind) -> Option<Rc<dyn LevelService>> {
    match kind {
        SliderKind::Brightness => services.brightness.clone(),
        SliderKind::OutputVolume => services.output_volume.clone(),
        SliderKind::InputVolume => services.input_volume.clone(),
    }
}

/// One live slider bound to a level service.
pub struct SliderBinding {
    kind: SliderKind,
    service: Option<Rc<dyn LevelService>>,
    subscription: Option<CallbackId>,
    level: Rc<Cell<f64>>,
    available: Rc<Cell<bool>>,
    watchers: Rc<Callbacks<f64>>,
}

impl SliderBinding {
    /// Subscribes to `service`. A missing service yields a slider fixed at zero.
    pub fn bind(kind: SliderKind, service: Option<Rc<dyn LevelService>>) -> Self {
        let level = Rc::new(Cell::new(0.0));
        let available = Rc::new(Cell::new(false));
        let watchers: Rc<Callbacks<f64>> = Rc::new(Callbacks::new());

        let subscription = service.as_ref().map(|service| {
            let level = Rc::clone(&level);
            let available = Rc::clone(&available);
            let watchers = Rc::clone(&watchers);
            service.connect(Box::new(move |snapshot| {
                let value = snapshot.display_level();
                let was_available = available.replace(snapshot.is_available());
                if level.get() != value || was_available != snapshot.is_available() {
                    level.set(value);
                    watchers.notify(&value);
                }
            }))
        });
        if service.is_none() {
            debug!(%kind, "no host service; slider renders at zero");
        }

        Self {
            kind,
            service,
            subscription,
            level,
            available,
            watchers,
        }
    }

    /// Slider kind.
    pub fn kind(&self) -> SliderKind {
        self.kind
    }

    /// Value to render.
    pub fn value(&self) -> f64 {
        self.level.get()
    }

    /// Whether drags currently reach a device.
    pub fn is_live(&self) -> bool {
        self.service.is_some() && self.available.get()
    }

    /// User dragged to `value`. Returns whether the setter was invoked.
    pub fn drag(&self, value: f64) -> bool {
        let Some(service) = self.service.as_ref().filter(|_| self.available.get()) else {
            debug!(kind = %self.kind, "drag ignored: no active device");
            return false;
        };
        service.set_level(clamp_level(value));
        true
    }

    /// Observes rendered value and liveness changes.
    pub fn watch(&self, callback: impl Fn(&f64) + 'static) -> CallbackId {
        self.watchers.register(callback)
    }

    /// Stops a [`SliderBinding::watch`] observer.
    pub fn unwatch(&self, id: CallbackId) -> bool {
        self.watchers.unregister(id)
    }

    /// Draw-time snapshot. Only live bindings carry a drag handler routed to the service.
    pub fn config(&self) -> SliderConfig {
        let config = SliderConfig::new(self.kind.icon(), self.value());
        match self.service.clone() {
            Some(service) if self.is_live() => {
                config.with_on_change(move |value| service.set_level(value))
            }
            _ => config,
        }
    }
}

impl Drop for SliderBinding {
    fn drop(&mut self) {
        if let (Some(service), Some(id)) = (self.service.as_ref(), self.subscription.take()) {
            service.disconnect(id);
        }
    }
}

impl fmt::Debug for SliderBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderBinding")
            .field("kind", &self.kind)
            .field("value", &self.value())
            .field("live", &self.is_live())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Structural change produced by [`QuickSlidersPanel::apply_config`].
pub enum PanelChange {
    /// A slider was constructed and bound.
    Mounted(SliderKind),
    /// A slider was unbound and destroyed.
    Unmounted(SliderKind),
}

#[derive(Debug)]
/// Vertical stack of up to three optional level sliders.
pub struct QuickSlidersPanel {
    services: HostServices,
    config: QuickSlidersConfig,
    sliders: Vec<SliderBinding>,
}

impl QuickSlidersPanel {
    /// Builds the panel and binds every slider `config` enables.
    pub fn new(config: &QuickSlidersConfig, services: HostServices) -> Self {
        let mut panel = Self {
            services,
            config: *config,
            sliders: Vec::new(),
        };
        panel.apply_config(config);
        panel
    }

    /// Reconciles sliders with `config`.
    ///
    /// Newly enabled kinds are bound, disabled kinds are dropped, and unchanged kinds keep their
    /// existing binding. Panel order is always brightness, output volume, input volume.
    pub fn apply_config(&mut self, config: &QuickSlidersConfig) -> Vec<PanelChange> {
        let mut previous = std::mem::take(&mut self.sliders);
        let mut changes = Vec::new();

        for kind in SliderKind::ALL {
            if !config.shows(kind) {
                continue;
            }
            match previous.iter().position(|slider| slider.kind() == kind) {
                Some(index) => self.sliders.push(previous.remove(index)),
                None => {
                    let service = service_for(&self.services, kind);
                    self.sliders.push(SliderBinding::bind(kind, service));
                    changes.push(PanelChange::Mounted(kind));
                }
            }
        }
        for slider in previous {
            changes.push(PanelChange::Unmounted(slider.kind()));
        }

        for change in &changes {
            match change {
                PanelChange::Mounted(kind) => info!(%kind, "quick slider mounted"),
                PanelChange::Unmounted(kind) => info!(%kind, "quick slider unmounted"),
            }
        }
        self.config = *config;
        changes
    }

    /// Active configuration.
    pub fn config(&self) -> &QuickSlidersConfig {
        &self.config
    }

    /// Bound sliders in panel order.
    pub fn sliders(&self) -> &[SliderBinding] {
        &self.sliders
    }

    /// Binding for `kind`, if mounted.
    pub fn slider(&self, kind: SliderKind) -> Option<&SliderBinding> {
        self.sliders.iter().find(|slider| slider.kind() == kind)
    }

    /// Mounted kinds in panel order.
    pub fn mounted_kinds(&self) -> Vec<SliderKind> {
        self.sliders.iter().map(SliderBinding::kind).collect()
    }

    /// Whether the panel has anything to draw.
    pub fn is_visible(&self) -> bool {
        !self.sliders.is_empty()
    }

    /// Forwards a drag on `kind`. Returns whether a service setter ran.
    pub fn drag(&self, kind: SliderKind, value: f64) -> bool {
        self.slider(kind).is_some_and(|slider| slider.drag(value))
    }
}
