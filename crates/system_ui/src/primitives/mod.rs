//! Shared control, overlay, and layout primitives.

use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use platform_host::{clamp_level, unix_time_ms_now};

use crate::button_state::{ButtonColors, ButtonState, ColorPair};
use crate::icon::{Icon, IconName, IconSize};
use crate::pointer::{ButtonAction, ButtonActions, PointerButton};
use crate::slider::{IconOverlay, SliderConfig};
use crate::theme::Theme;
use crate::tooltip::{TimerCommand, TooltipGate};

mod controls;
mod layout;
mod overlays;

pub use controls::{Button, QuickSlider};
pub use layout::Stack;
pub use overlays::Tooltip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Surface-colored button.
    #[default]
    Standard,
    /// Secondary-container button.
    Tonal,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Tonal => "tonal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    #[default]
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn button_style(theme: &Theme, pair: ColorPair) -> String {
    let tokens = &theme.tokens;
    format!(
        "background-color: {}; color: {}; border-radius: {}px; font-family: '{}'; transition: {}, {};",
        pair.background.to_css(),
        pair.foreground.to_css(),
        tokens.radius_full,
        tokens.font_main,
        tokens.effects.css("background-color"),
        tokens.effects.css("color")
    )
}

pub(crate) fn slider_style(theme: &Theme) -> String {
    format!(
        "--ui-slider-track: {}; --ui-slider-fill: {}; --ui-slider-surface: {}; border-radius: {}px;",
        theme.palette.outline.to_css(),
        theme.palette.primary.to_css(),
        theme.palette.layer.to_css(),
        theme.tokens.radius_normal
    )
}

pub(crate) fn slider_icon_style(theme: &Theme, overlay: IconOverlay, value: f64) -> String {
    format!(
        "right: {}; color: {}; transition: {};",
        overlay.css_right(value),
        theme.palette.on_layer.to_css(),
        theme.tokens.spatial.css("right")
    )
}

pub(crate) fn tooltip_style(theme: &Theme) -> String {
    format!(
        "background-color: {}; color: {}; border-radius: {}px; font-family: '{}';",
        theme.palette.on_layer.to_css(),
        theme.palette.layer.to_css(),
        theme.tokens.radius_small,
        theme.tokens.font_main
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::theme::Color;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("quick-toggle")),
            "ui-button quick-toggle"
        );
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(LayoutGap::Sm.token(), "sm");
        assert_eq!(LayoutPadding::default().token(), "none");
        assert_eq!(bool_token(true), "true");
    }

    #[test]
    fn button_style_uses_pill_radius_and_main_font() {
        let theme = Theme::default();
        let pair = ColorPair {
            background: Color::rgb(0, 0, 0),
            foreground: Color::rgb(255, 255, 255),
        };
        let style = button_style(&theme, pair);
        assert!(style.starts_with(
            "background-color: rgba(0, 0, 0, 1.000); color: rgba(255, 255, 255, 1.000);"
        ));
        assert!(style.contains("border-radius: 9999px;"));
        assert!(style.contains("font-family: 'Rubik';"));
        assert!(style.contains("background-color 200ms"));
    }

    #[test]
    fn slider_style_paints_track_with_outline() {
        let mut theme = Theme::default();
        theme.palette.outline = Color::rgb(1, 2, 3);
        let style = slider_style(&theme);
        assert!(style.starts_with("--ui-slider-track: rgba(1, 2, 3, 1.000);"));
        assert!(style.ends_with("border-radius: 12px;"));
    }

    #[test]
    fn slider_icon_follows_overlay() {
        let theme = Theme::default();
        let near_full = slider_icon_style(&theme, IconOverlay::for_value(0.95), 0.95);
        assert!(near_full.starts_with("right: calc(5.00% + 14px);"));
        assert!(near_full.contains("right 350ms"));
        let mid = slider_icon_style(&theme, IconOverlay::for_value(0.5), 0.5);
        assert!(mid.starts_with("right: 8px;"));
    }

    #[test]
    fn tooltip_style_uses_small_radius() {
        let style = tooltip_style(&Theme::default());
        assert!(style.contains("border-radius: 8px;"));
        assert!(style.contains("font-family: 'Rubik';"));
    }
}
