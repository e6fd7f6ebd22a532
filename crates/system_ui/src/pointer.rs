//! Pointer-button to action routing for clickable primitives.

use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Physical pointer button that completed a click.
pub enum PointerButton {
    /// Left button.
    Primary,
    /// Right button.
    Secondary,
    /// Wheel button.
    Middle,
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` code. Back/forward and unknown buttons map to `None`.
    pub fn from_dom_button(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }

    /// Whether pressing this button shows the pressed color. A secondary press may never see its
    /// `mouseup` once the context menu opens.
    pub fn shows_pressed(self) -> bool {
        matches!(self, Self::Primary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// User action a click resolves to.
pub enum ButtonAction {
    /// Primary click.
    Click,
    /// Secondary ("alt") action.
    AltAction,
    /// Middle click.
    MiddleClick,
}

impl From<PointerButton> for ButtonAction {
    fn from(button: PointerButton) -> Self {
        match button {
            PointerButton::Primary => Self::Click,
            PointerButton::Secondary => Self::AltAction,
            PointerButton::Middle => Self::MiddleClick,
        }
    }
}

type ActionHandler = Rc<dyn Fn()>;

#[derive(Clone, Default)]
/// Independently assignable handlers for the three click actions.
pub struct ButtonActions {
    on_click: Option<ActionHandler>,
    on_alt_action: Option<ActionHandler>,
    on_middle_click: Option<ActionHandler>,
}

impl ButtonActions {
    /// No handlers assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the primary click handler.
    pub fn with_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Assigns the secondary action handler.
    pub fn with_alt_action(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_alt_action = Some(Rc::new(handler));
        self
    }

    /// Assigns the middle click handler.
    pub fn with_middle_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_middle_click = Some(Rc::new(handler));
        self
    }

    /// Whether `action` has a handler.
    pub fn has(&self, action: ButtonAction) -> bool {
        self.handler(action).is_some()
    }

    fn handler(&self, action: ButtonAction) -> Option<&ActionHandler> {
        match action {
            ButtonAction::Click => self.on_click.as_ref(),
            ButtonAction::AltAction => self.on_alt_action.as_ref(),
            ButtonAction::MiddleClick => self.on_middle_click.as_ref(),
        }
    }

    /// Runs the handler matching `button` and returns the action that ran.
    ///
    /// Disabled buttons and unassigned actions run nothing.
    pub fn dispatch(&self, enabled: bool, button: PointerButton) -> Option<ButtonAction> {
        if !enabled {
            return None;
        }
        let action = ButtonAction::from(button);
        let handler = self.handler(action)?;
        handler();
        Some(action)
    }
}

impl fmt::Debug for ButtonActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonActions")
            .field("on_click", &self.on_click.is_some())
            .field("on_alt_action", &self.on_alt_action.is_some())
            .field("on_middle_click", &self.on_middle_click.is_some())
            .finish()
    }
}
