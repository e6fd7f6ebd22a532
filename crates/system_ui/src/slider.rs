//! Level slider model: kinds, value handling, and the icon overlay position.

use std::fmt;
use std::rc::Rc;

use platform_host::clamp_level;

use crate::icon::IconName;

/// Value above which the icon moves from the panel edge onto the handle.
pub const NEAR_FULL_THRESHOLD: f64 = 0.9;
/// Icon margin while anchored to the panel edge.
pub const EDGE_MARGIN_PX: u16 = 8;
/// Icon margin while riding on the handle.
pub const HANDLE_MARGIN_PX: u16 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Level a quick slider controls. Declaration order is the panel's stacking order.
pub enum SliderKind {
    /// Screen brightness.
    Brightness,
    /// Speaker volume.
    OutputVolume,
    /// Microphone volume.
    InputVolume,
}

impl SliderKind {
    /// Every kind in panel order.
    pub const ALL: [Self; 3] = [Self::Brightness, Self::OutputVolume, Self::InputVolume];

    /// Icon drawn over the slider.
    pub fn icon(self) -> IconName {
        match self {
            Self::Brightness => IconName::LightMode,
            Self::OutputVolume => IconName::VolumeUp,
            Self::InputVolume => IconName::Mic,
        }
    }

    /// Accessible label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Brightness => "Brightness",
            Self::OutputVolume => "Volume",
            Self::InputVolume => "Microphone",
        }
    }

    /// Stable identifier for DOM attributes and logs.
    pub fn token(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::OutputVolume => "output-volume",
            Self::InputVolume => "input-volume",
        }
    }
}

impl fmt::Display for SliderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the slider icon is positioned against.
pub enum OverlayAnchor {
    /// Fixed distance from the panel's right edge.
    PanelEdge,
    /// Overlapping the slider handle.
    Handle,
}

impl OverlayAnchor {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::PanelEdge => "edge",
            Self::Handle => "handle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon placement for a slider value.
pub struct IconOverlay {
    /// Reference the margin is measured from.
    pub anchor: OverlayAnchor,
    /// Margin in px.
    pub margin_px: u16,
}

impl IconOverlay {
    /// Placement for `value`.
    pub fn for_value(value: f64) -> Self {
        if clamp_level(value) > NEAR_FULL_THRESHOLD {
            Self {
                anchor: OverlayAnchor::Handle,
                margin_px: HANDLE_MARGIN_PX,
            }
        } else {
            Self {
                anchor: OverlayAnchor::PanelEdge,
                margin_px: EDGE_MARGIN_PX,
            }
        }
    }

    /// CSS `right` offset of the icon for `value`.
    pub fn css_right(self, value: f64) -> String {
        match self.anchor {
            OverlayAnchor::PanelEdge => format!("{}px", self.margin_px),
            OverlayAnchor::Handle => format!(
                "calc({:.2}% + {}px)",
                (1.0 - clamp_level(value)) * 100.0,
                self.margin_px
            ),
        }
    }
}

type ChangeHandler = Rc<dyn Fn(f64)>;

#[derive(Clone)]
/// Everything needed to draw one slider and route its drags.
pub struct SliderConfig {
    /// Overlay icon.
    pub icon: IconName,
    /// Current value in `[0, 1]`.
    pub value: f64,
    on_change: Option<ChangeHandler>,
}

impl SliderConfig {
    /// Read-only slider at `value`.
    pub fn new(icon: IconName, value: f64) -> Self {
        Self {
            icon,
            value: clamp_level(value),
            on_change: None,
        }
    }

    /// Routes drags to `handler`.
    pub fn with_on_change(mut self, handler: impl Fn(f64) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    /// Whether drags reach a handler. Read-only sliders render disabled.
    pub fn is_interactive(&self) -> bool {
        self.on_change.is_some()
    }

    /// Icon placement for the current value.
    pub fn overlay(&self) -> IconOverlay {
        IconOverlay::for_value(self.value)
    }

    /// User dragged to `value`. Returns whether a handler received it.
    pub fn drag(&mut self, value: f64) -> bool {
        let value = clamp_level(value);
        self.value = value;
        match self.on_change.as_ref() {
            Some(handler) => {
                handler(value);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for SliderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderConfig")
            .field("icon", &self.icon)
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn near_full_value_moves_icon_onto_handle() {
        assert_eq!(
            IconOverlay::for_value(0.95),
            IconOverlay {
                anchor: OverlayAnchor::Handle,
                margin_px: 14
            }
        );
        assert_eq!(
            IconOverlay::for_value(0.5),
            IconOverlay {
                anchor: OverlayAnchor::PanelEdge,
                margin_px: 8
            }
        );
    }

    #[test]
    fn threshold_itself_stays_on_panel_edge() {
        assert_eq!(
            IconOverlay::for_value(NEAR_FULL_THRESHOLD).anchor,
            OverlayAnchor::PanelEdge
        );
        assert_eq!(IconOverlay::for_value(7.0).anchor, OverlayAnchor::Handle);
    }

    #[test]
    fn css_right_tracks_handle_when_near_full() {
        assert_eq!(IconOverlay::for_value(0.5).css_right(0.5), "8px");
        assert_eq!(
            IconOverlay::for_value(0.95).css_right(0.95),
            "calc(5.00% + 14px)"
        );
    }

    #[test]
    fn drag_clamps_and_forwards() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let mut slider = SliderConfig::new(IconName::VolumeUp, 0.2)
            .with_on_change(move |value| sink.borrow_mut().push(value));

        assert!(slider.is_interactive());
        assert!(slider.drag(1.4));
        assert!(slider.drag(0.25));
        assert_eq!(*received.borrow(), vec![1.0, 0.25]);
        assert_eq!(slider.value, 0.25);
    }

    #[test]
    fn construction_clamps_like_the_host() {
        assert_eq!(SliderConfig::new(IconName::Mic, 1.7).value, clamp_level(1.7));
        assert_eq!(SliderConfig::new(IconName::Mic, f64::NAN).value, 0.0);
        assert_eq!(SliderConfig::new(IconName::Mic, -0.2).value, 0.0);
    }

    #[test]
    fn drag_without_handler_is_a_no_op() {
        let mut slider = SliderConfig::new(IconName::Mic, 0.0);
        assert!(!slider.is_interactive());
        assert!(!slider.drag(0.7));
        assert_eq!(slider.overlay().margin_px, EDGE_MARGIN_PX);
    }

    #[test]
    fn kinds_expose_icons_in_panel_order() {
        let icons: Vec<_> = SliderKind::ALL.iter().map(|kind| kind.icon()).collect();
        assert_eq!(
            icons,
            vec![IconName::LightMode, IconName::VolumeUp, IconName::Mic]
        );
        assert_eq!(SliderKind::InputVolume.to_string(), "input-volume");
    }
}
