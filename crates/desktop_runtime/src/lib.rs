//! Quick controls runtime: configuration, logging, and the QuickSliders panel.

pub mod components;
pub mod config;
pub mod logging;
pub mod quick_sliders;

pub use components::{use_quick_sliders_config, QuickSlidersView, WidgetsRoot};
pub use config::{ButtonConfig, ConfigError, QuickSlidersConfig, WidgetConfig, DEFAULT_CONFIG_TOML};
pub use quick_sliders::{service_for, PanelChange, QuickSlidersPanel, SliderBinding};
