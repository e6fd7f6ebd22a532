//! Button interaction state and its resolved colors.
//!
//! Colors are a pure function of the four state flags. Background precedence, highest first:
//! disabled, checked+pressed, checked+hovered, checked, pressed, hovered, plain. Foreground is
//! dimmed when disabled, the checked tone when checked, plain otherwise.

use crate::primitives::ButtonVariant;
use crate::theme::{Color, ThemePalette};

const HOVER_OVERLAY: f32 = 0.08;
const PRESSED_OVERLAY: f32 = 0.16;
const DISABLED_CONTAINER_ALPHA: f32 = 0.12;
const DISABLED_CONTENT_ALPHA: f32 = 0.38;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Inputs the host sets from pointer and focus events.
pub struct ButtonState {
    /// Whether the button accepts input.
    pub enabled: bool,
    /// Toggle state for checkable buttons.
    pub checked: bool,
    /// Pointer is over the button.
    pub hovered: bool,
    /// A pointer button is held down on the button.
    pub pressed: bool,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self {
            enabled: true,
            checked: false,
            hovered: false,
            pressed: false,
        }
    }
}

impl ButtonState {
    /// Which background slot applies.
    pub fn background_role(self) -> BackgroundRole {
        match self {
            Self { enabled: false, .. } => BackgroundRole::Disabled,
            Self {
                checked: true,
                pressed: true,
                ..
            } => BackgroundRole::CheckedPressed,
            Self {
                checked: true,
                hovered: true,
                ..
            } => BackgroundRole::CheckedHover,
            Self { checked: true, .. } => BackgroundRole::Checked,
            Self { pressed: true, .. } => BackgroundRole::Pressed,
            Self { hovered: true, .. } => BackgroundRole::Hover,
            _ => BackgroundRole::Base,
        }
    }

    /// Which foreground slot applies.
    pub fn foreground_role(self) -> ForegroundRole {
        if !self.enabled {
            ForegroundRole::Disabled
        } else if self.checked {
            ForegroundRole::Checked
        } else {
            ForegroundRole::Base
        }
    }

    pub(crate) fn token(self) -> &'static str {
        self.background_role().token()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Resolved background slot.
pub enum BackgroundRole {
    /// Resting background.
    Base,
    /// Hovered.
    Hover,
    /// Pressed.
    Pressed,
    /// Checked at rest.
    Checked,
    /// Checked and hovered.
    CheckedHover,
    /// Checked and pressed.
    CheckedPressed,
    /// Disabled, regardless of other flags.
    Disabled,
}

impl BackgroundRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Base => "idle",
            Self::Hover => "hover",
            Self::Pressed => "pressed",
            Self::Checked => "checked",
            Self::CheckedHover => "checked-hover",
            Self::CheckedPressed => "checked-pressed",
            Self::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Resolved foreground slot.
pub enum ForegroundRole {
    /// Plain content color.
    Base,
    /// Content on the checked background.
    Checked,
    /// Dimmed content.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Background and foreground resolved for one state.
pub struct ColorPair {
    /// Fill color.
    pub background: Color,
    /// Text and icon color.
    pub foreground: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Every color a button can show, one per role.
pub struct ButtonColors {
    /// Resting fill.
    pub background: Color,
    /// Hovered fill.
    pub background_hover: Color,
    /// Pressed fill.
    pub background_pressed: Color,
    /// Checked fill.
    pub background_checked: Color,
    /// Checked and hovered fill.
    pub background_checked_hover: Color,
    /// Checked and pressed fill.
    pub background_checked_pressed: Color,
    /// Disabled fill.
    pub background_disabled: Color,
    /// Resting content.
    pub foreground: Color,
    /// Content while checked.
    pub foreground_checked: Color,
    /// Dimmed content while disabled.
    pub foreground_disabled: Color,
}

impl ButtonColors {
    /// Derives the state colors of `variant` from a palette.
    pub fn from_palette(palette: &ThemePalette, variant: ButtonVariant) -> Self {
        let (surface, content) = match variant {
            ButtonVariant::Standard => (palette.layer, palette.on_layer),
            ButtonVariant::Tonal => (
                palette.secondary_container,
                palette.on_secondary_container,
            ),
        };
        Self {
            background: surface,
            background_hover: surface.mix(content, HOVER_OVERLAY),
            background_pressed: surface.mix(content, PRESSED_OVERLAY),
            background_checked: palette.primary,
            background_checked_hover: palette.primary.mix(palette.on_primary, HOVER_OVERLAY),
            background_checked_pressed: palette.primary.mix(palette.on_primary, PRESSED_OVERLAY),
            background_disabled: content.with_alpha(DISABLED_CONTAINER_ALPHA),
            foreground: content,
            foreground_checked: palette.on_primary,
            foreground_disabled: content.with_alpha(DISABLED_CONTENT_ALPHA),
        }
    }

    /// Color for a background slot.
    pub fn background_for(&self, role: BackgroundRole) -> Color {
        match role {
            BackgroundRole::Base => self.background,
            BackgroundRole::Hover => self.background_hover,
            BackgroundRole::Pressed => self.background_pressed,
            BackgroundRole::Checked => self.background_checked,
            BackgroundRole::CheckedHover => self.background_checked_hover,
            BackgroundRole::CheckedPressed => self.background_checked_pressed,
            BackgroundRole::Disabled => self.background_disabled,
        }
    }

    /// Color for a foreground slot.
    pub fn foreground_for(&self, role: ForegroundRole) -> Color {
        match role {
            ForegroundRole::Base => self.foreground,
            ForegroundRole::Checked => self.foreground_checked,
            ForegroundRole::Disabled => self.foreground_disabled,
        }
    }

    /// Resolves the pair shown for `state`.
    pub fn resolve(&self, state: ButtonState) -> ColorPair {
        ColorPair {
            background: self.background_for(state.background_role()),
            foreground: self.foreground_for(state.foreground_role()),
        }
    }
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self::from_palette(&ThemePalette::default(), ButtonVariant::Standard)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::BackgroundRole as Bg;
    use super::ForegroundRole as Fg;
    use super::*;

    fn state(enabled: bool, checked: bool, hovered: bool, pressed: bool) -> ButtonState {
        ButtonState {
            enabled,
            checked,
            hovered,
            pressed,
        }
    }

    #[test]
    fn every_state_combination_follows_precedence_table() {
        // (enabled, checked, hovered, pressed) -> (background, foreground)
        let table = [
            ((false, false, false, false), (Bg::Disabled, Fg::Disabled)),
            ((false, false, false, true), (Bg::Disabled, Fg::Disabled)),
            ((false, false, true, false), (Bg::Disabled, Fg::Disabled)),
            ((false, false, true, true), (Bg::Disabled, Fg::Disabled)),
            ((false, true, false, false), (Bg::Disabled, Fg::Disabled)),
            ((false, true, false, true), (Bg::Disabled, Fg::Disabled)),
            ((false, true, true, false), (Bg::Disabled, Fg::Disabled)),
            ((false, true, true, true), (Bg::Disabled, Fg::Disabled)),
            ((true, false, false, false), (Bg::Base, Fg::Base)),
            ((true, false, false, true), (Bg::Pressed, Fg::Base)),
            ((true, false, true, false), (Bg::Hover, Fg::Base)),
            ((true, false, true, true), (Bg::Pressed, Fg::Base)),
            ((true, true, false, false), (Bg::Checked, Fg::Checked)),
            ((true, true, false, true), (Bg::CheckedPressed, Fg::Checked)),
            ((true, true, true, false), (Bg::CheckedHover, Fg::Checked)),
            ((true, true, true, true), (Bg::CheckedPressed, Fg::Checked)),
        ];

        let colors = ButtonColors::default();
        for ((enabled, checked, hovered, pressed), (bg, fg)) in table {
            let input = state(enabled, checked, hovered, pressed);
            assert_eq!(
                (input.background_role(), input.foreground_role()),
                (bg, fg),
                "roles for {input:?}"
            );
            assert_eq!(
                colors.resolve(input),
                ColorPair {
                    background: colors.background_for(bg),
                    foreground: colors.foreground_for(fg),
                },
                "colors for {input:?}"
            );
        }
    }

    #[test]
    fn derived_slots_are_distinct_for_default_palette() {
        let colors = ButtonColors::default();
        let backgrounds = [
            colors.background,
            colors.background_hover,
            colors.background_pressed,
            colors.background_checked,
            colors.background_checked_hover,
            colors.background_checked_pressed,
            colors.background_disabled,
        ];
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_ne!(colors.foreground_disabled, colors.foreground);
    }

    #[test]
    fn interaction_shades_derive_from_base_roles() {
        let palette = ThemePalette::default();
        let colors = ButtonColors::from_palette(&palette, ButtonVariant::Standard);
        assert_eq!(colors.background_hover, palette.layer.mix(palette.on_layer, 0.08));
        assert_eq!(colors.background_pressed, palette.layer.mix(palette.on_layer, 0.16));
        assert_eq!(
            colors.background_checked_hover,
            palette.primary.mix(palette.on_primary, 0.08)
        );
        assert_eq!(colors.background_disabled, palette.on_layer.with_alpha(0.12));
        assert_eq!(colors.foreground_disabled, palette.on_layer.with_alpha(0.38));
    }

    #[test]
    fn tonal_variant_uses_secondary_container() {
        let palette = ThemePalette::default();
        let colors = ButtonColors::from_palette(&palette, ButtonVariant::Tonal);
        assert_eq!(colors.background, palette.secondary_container);
        assert_eq!(colors.foreground, palette.on_secondary_container);
        assert_eq!(colors.background_checked, palette.primary);
    }

    #[test]
    fn resolution_is_stateless() {
        let colors = ButtonColors::default();
        let pressed = state(true, false, true, true);
        let rest = ButtonState::default();
        let first = colors.resolve(rest);
        let _ = colors.resolve(pressed);
        assert_eq!(colors.resolve(rest), first);
    }
}
