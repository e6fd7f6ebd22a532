//! Hover-delay gate deciding when a tooltip becomes visible.
//!
//! The gate moves `Idle -> Pending -> Visible` and drops back to `Idle` whenever the hover ends.
//! It owns no timer itself: transitions return a [`TimerCommand`] the host executes, and the
//! host reports back through [`TooltipGate::timer_fired`] or drives the clock with
//! [`TooltipGate::tick`].

use platform_host::elapsed_ms;

/// Hover delay used when the theme does not override it.
pub const DEFAULT_TOOLTIP_DELAY_MS: u64 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Gate phase.
pub enum TooltipPhase {
    /// Not hovered.
    Idle,
    /// Hovered, waiting for the delay to elapse.
    Pending {
        /// Timestamp the current hover began.
        hover_started_at_ms: u64,
    },
    /// Hovered long enough; tooltip shown.
    Visible {
        /// Timestamp the current hover began.
        hover_started_at_ms: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Timer work the host must perform after a transition.
pub enum TimerCommand {
    /// Nothing to do.
    None,
    /// Schedule a one-shot timer and report it back with `generation`.
    Start {
        /// Delay before firing.
        delay_ms: u64,
        /// Identifies the hover this timer belongs to.
        generation: u64,
    },
    /// Cancel the outstanding timer.
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Delay-then-show state machine for one widget's tooltip.
pub struct TooltipGate {
    delay_ms: u64,
    phase: TooltipPhase,
    generation: u64,
}

impl Default for TooltipGate {
    fn default() -> Self {
        Self::new(DEFAULT_TOOLTIP_DELAY_MS)
    }
}

impl TooltipGate {
    /// Gate that shows after `delay_ms` of continuous hover.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            phase: TooltipPhase::Idle,
            generation: 0,
        }
    }

    /// Configured delay.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Current phase.
    pub fn phase(&self) -> TooltipPhase {
        self.phase
    }

    /// Whether the tooltip should be visible.
    pub fn should_show(&self) -> bool {
        matches!(self.phase, TooltipPhase::Visible { .. })
    }

    /// Start of the hover in progress, if any.
    pub fn hover_started_at_ms(&self) -> Option<u64> {
        match self.phase {
            TooltipPhase::Idle => None,
            TooltipPhase::Pending {
                hover_started_at_ms,
            }
            | TooltipPhase::Visible {
                hover_started_at_ms,
            } => Some(hover_started_at_ms),
        }
    }

    /// Pointer entered. Repeated enters during one hover keep the original start time.
    pub fn hover_start(&mut self, now_ms: u64) -> TimerCommand {
        if self.phase != TooltipPhase::Idle {
            return TimerCommand::None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.phase = TooltipPhase::Pending {
            hover_started_at_ms: now_ms,
        };
        TimerCommand::Start {
            delay_ms: self.delay_ms,
            generation: self.generation,
        }
    }

    /// Pointer left. Hides immediately and cancels any pending timer.
    pub fn hover_end(&mut self) -> TimerCommand {
        let previous = std::mem::replace(&mut self.phase, TooltipPhase::Idle);
        match previous {
            TooltipPhase::Pending { .. } => TimerCommand::Cancel,
            TooltipPhase::Idle | TooltipPhase::Visible { .. } => TimerCommand::None,
        }
    }

    /// Host timer for `generation` fired. Timers from an earlier hover are ignored.
    ///
    /// Returns `true` when the tooltip became visible.
    pub fn timer_fired(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.phase {
            TooltipPhase::Pending {
                hover_started_at_ms,
            } => {
                self.phase = TooltipPhase::Visible {
                    hover_started_at_ms,
                };
                true
            }
            TooltipPhase::Idle | TooltipPhase::Visible { .. } => false,
        }
    }

    /// Clock-driven alternative to host timers: reveals once `now_ms` is at least the delay
    /// past the hover start.
    ///
    /// Returns `true` when the tooltip became visible.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.phase {
            TooltipPhase::Pending {
                hover_started_at_ms,
            } if elapsed_ms(hover_started_at_ms, now_ms) >= self.delay_ms => {
                self.phase = TooltipPhase::Visible {
                    hover_started_at_ms,
                };
                true
            }
            _ => false,
        }
    }
}
