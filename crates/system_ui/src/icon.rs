//! Centralized icon API backed by an icon font with ligature glyph names.

use leptos::*;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icons used by shell widgets.
pub enum IconName {
    /// Screen brightness.
    LightMode,
    /// Speaker volume.
    VolumeUp,
    /// Microphone input.
    Mic,
}

impl IconName {
    /// Ligature understood by the icon font.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::LightMode => "light_mode",
            Self::VolumeUp => "volume_up",
            Self::Mic => "mic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline with dense text.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Slider and hero icons.
    Lg,
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Inline style selecting the theme's icon font.
pub(crate) fn icon_style(theme: &Theme) -> String {
    format!("font-family: '{}';", theme.tokens.font_icon)
}

#[component]
/// Decorative icon glyph rendered with the theme's icon font.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let theme = use_context::<Theme>().unwrap_or_default();
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            style=icon_style(&theme)
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.glyph()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_style_uses_theme_icon_font() {
        let mut theme = Theme::default();
        assert_eq!(icon_style(&theme), "font-family: 'Material Symbols Rounded';");
        theme.tokens.font_icon = "Symbols Sharp".to_string();
        assert_eq!(icon_style(&theme), "font-family: 'Symbols Sharp';");
    }

    #[test]
    fn glyphs_are_ligature_names() {
        assert_eq!(IconName::LightMode.glyph(), "light_mode");
        assert_eq!(IconName::VolumeUp.glyph(), "volume_up");
        assert_eq!(IconName::Mic.glyph(), "mic");
    }
}
