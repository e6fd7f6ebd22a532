//! Shared UI primitives and theming for shell widgets.
//!
//! The crate owns the pure widget state machines (button colors, tooltip gate, slider overlay),
//! the theme palette and tokens, a centralized icon API, and the Leptos primitives that render
//! them with the stable `data-ui-*` DOM contract consumed by shell CSS.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button_state;
mod icon;
mod pointer;
mod primitives;
mod slider;
mod theme;
mod tooltip;

pub use button_state::{BackgroundRole, ButtonColors, ButtonState, ColorPair, ForegroundRole};
pub use icon::{Icon, IconName, IconSize};
pub use pointer::{ButtonAction, ButtonActions, PointerButton};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, LayoutGap, LayoutPadding, QuickSlider, Stack, Tooltip,
};
pub use slider::{
    IconOverlay, OverlayAnchor, SliderConfig, SliderKind, EDGE_MARGIN_PX, HANDLE_MARGIN_PX,
    NEAR_FULL_THRESHOLD,
};
pub use theme::{Color, ColorParseError, Theme, ThemePalette, ThemeTokens, TransitionCurve};
pub use tooltip::{TimerCommand, TooltipGate, TooltipPhase, DEFAULT_TOOLTIP_DELAY_MS};

/// Convenience imports for crates composing shell widgets.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, Icon, IconName, IconSize, LayoutGap, LayoutPadding,
        QuickSlider, SliderKind, Stack, Theme, Tooltip,
    };
}
