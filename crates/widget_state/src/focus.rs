//! Focus-trap controller state machine.
//!
//! The trap is a two-phase machine: events go in, state mutates, and a list of
//! [`TrapCommand`] values comes out for the DOM layer to execute. The machine
//! never touches the DOM itself; the element-handle type is a generic
//! parameter, so containment and restore behavior are testable natively with
//! plain string handles.

use thiserror::Error;

/// Commands emitted by the trap for the DOM layer to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrapCommand<H> {
    /// Focus the trap container element itself.
    FocusContainer,
    /// Schedule the deferred first-content focus (next tick, cancellable).
    ScheduleInitialFocus,
    /// Focus the focusable descendant at this scan index.
    FocusItem(usize),
    /// Restore focus to the element that held it before activation.
    RestoreFocus(H),
}

/// Events observed by the trap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrapEvent<H> {
    /// The owning overlay opened with trapping enabled.
    Activate {
        /// Snapshot of the element holding focus at activation time.
        prior_focus: Option<H>,
    },
    /// A Tab keydown was observed while the overlay is open.
    TabKey {
        /// Whether Shift was held (backward traversal).
        backward: bool,
        /// Position of the currently focused element in the scan, if inside.
        focus_index: Option<usize>,
        /// Number of focusable descendants found by the scan.
        focusable_count: usize,
    },
    /// The owning overlay closed or trapping was disabled.
    Deactivate,
}

/// Errors for out-of-phase trap events.
///
/// The component layer is structured so these cannot normally occur (the key
/// listener only exists while the trap is active); they exist so misuse is
/// reported instead of silently corrupting the focus snapshot.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrapError {
    /// `Activate` arrived while the trap was already active.
    #[error("focus trap is already active")]
    AlreadyActive,
    /// A key event arrived while the trap was inactive.
    #[error("focus trap is not active")]
    NotActive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TrapPhase<H> {
    Inactive,
    Active { restore_to: Option<H> },
}

/// Outcome of a Tab keydown at the trap boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome {
    /// Focus is mid-sequence; the browser advances it natively.
    Native,
    /// Wrap (or re-enter) to the focusable at this index.
    Jump(usize),
    /// No focusable content; the container is the self-loop target.
    Container,
}

/// Pure wrap decision for a Tab keydown inside an active trap.
///
/// Wraps forward from the last element and backward from the first. A focus
/// position outside the scanned set re-enters at the first element, and an
/// empty set self-loops on the container.
pub fn wrap_target(backward: bool, focus_index: Option<usize>, count: usize) -> TabOutcome {
    if count == 0 {
        return TabOutcome::Container;
    }
    let Some(index) = focus_index else {
        return TabOutcome::Jump(0);
    };
    if backward && index == 0 {
        TabOutcome::Jump(count - 1)
    } else if !backward && index + 1 >= count {
        TabOutcome::Jump(0)
    } else {
        TabOutcome::Native
    }
}

/// The focus-trap controller.
#[derive(Debug, Clone)]
pub struct FocusTrap<H> {
    phase: TrapPhase<H>,
}

impl<H> Default for FocusTrap<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FocusTrap<H> {
    /// Creates an inactive trap.
    pub fn new() -> Self {
        Self {
            phase: TrapPhase::Inactive,
        }
    }

    /// Whether the trap currently holds a snapshot and intercepts Tab.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, TrapPhase::Active { .. })
    }

    /// Applies one event and returns the commands the DOM layer must run.
    ///
    /// Command order is part of the contract: on deactivation the restore
    /// command is emitted (and must run) before the snapshot is gone, so a
    /// caller can never observe a cleared snapshot with focus still inside.
    pub fn handle(&mut self, event: TrapEvent<H>) -> Result<Vec<TrapCommand<H>>, TrapError> {
        match event {
            TrapEvent::Activate { prior_focus } => {
                if self.is_active() {
                    return Err(TrapError::AlreadyActive);
                }
                self.phase = TrapPhase::Active {
                    restore_to: prior_focus,
                };
                Ok(vec![
                    TrapCommand::FocusContainer,
                    TrapCommand::ScheduleInitialFocus,
                ])
            }
            TrapEvent::TabKey {
                backward,
                focus_index,
                focusable_count,
            } => {
                if !self.is_active() {
                    return Err(TrapError::NotActive);
                }
                Ok(match wrap_target(backward, focus_index, focusable_count) {
                    TabOutcome::Native => Vec::new(),
                    TabOutcome::Jump(index) => vec![TrapCommand::FocusItem(index)],
                    TabOutcome::Container => vec![TrapCommand::FocusContainer],
                })
            }
            TrapEvent::Deactivate => {
                let phase = std::mem::replace(&mut self.phase, TrapPhase::Inactive);
                let TrapPhase::Active { restore_to } = phase else {
                    return Ok(Vec::new());
                };
                Ok(restore_to.into_iter().map(TrapCommand::RestoreFocus).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn active_trap(prior: Option<&str>) -> FocusTrap<String> {
        let mut trap = FocusTrap::new();
        trap.handle(TrapEvent::Activate {
            prior_focus: prior.map(str::to_string),
        })
        .expect("activate");
        trap
    }

    /// Applies browser-equivalent Tab semantics on top of the wrap decision.
    fn advance(index: usize, count: usize, backward: bool) -> usize {
        match wrap_target(backward, Some(index), count) {
            TabOutcome::Jump(target) => target,
            TabOutcome::Native => {
                if backward {
                    index - 1
                } else {
                    index + 1
                }
            }
            TabOutcome::Container => index,
        }
    }

    #[test]
    fn forward_tab_cycles_with_period_equal_to_focusable_count() {
        let count = 3;
        for presses in 0..12 {
            let mut index = 0;
            for _ in 0..presses {
                index = advance(index, count, false);
            }
            assert_eq!(index, presses % count, "after {presses} forward tabs");
        }
    }

    #[test]
    fn four_forward_tabs_over_three_elements_land_on_the_second() {
        // input, button, input: starting at index 0, (0 + 4) mod 3 = 1.
        let mut index = 0;
        for _ in 0..4 {
            index = advance(index, 3, false);
        }
        assert_eq!(index, 1);
    }

    #[test]
    fn shift_tab_from_first_element_wraps_to_last() {
        assert_eq!(wrap_target(true, Some(0), 3), TabOutcome::Jump(2));
    }

    #[test]
    fn mid_sequence_tabs_stay_native() {
        assert_eq!(wrap_target(false, Some(0), 3), TabOutcome::Native);
        assert_eq!(wrap_target(true, Some(2), 3), TabOutcome::Native);
    }

    #[test]
    fn empty_container_self_loops_on_the_container() {
        assert_eq!(wrap_target(false, None, 0), TabOutcome::Container);
        assert_eq!(wrap_target(true, Some(0), 0), TabOutcome::Container);
    }

    #[test]
    fn focus_outside_the_scan_reenters_at_the_first_element() {
        assert_eq!(wrap_target(false, None, 4), TabOutcome::Jump(0));
    }

    #[test]
    fn activation_snapshots_and_orders_initial_focus_commands() {
        let mut trap = FocusTrap::<String>::new();
        let commands = trap
            .handle(TrapEvent::Activate {
                prior_focus: Some("trigger".to_string()),
            })
            .expect("activate");
        assert_eq!(
            commands,
            vec![TrapCommand::FocusContainer, TrapCommand::ScheduleInitialFocus]
        );
        assert!(trap.is_active());
    }

    #[test]
    fn deactivation_restores_exactly_the_snapshotted_element() {
        let mut trap = active_trap(Some("trigger"));
        let commands = trap.handle(TrapEvent::Deactivate).expect("deactivate");
        assert_eq!(commands, vec![TrapCommand::RestoreFocus("trigger".to_string())]);
        assert!(!trap.is_active());
    }

    #[test]
    fn deactivation_without_a_snapshot_restores_nothing() {
        let mut trap = active_trap(None);
        assert_eq!(trap.handle(TrapEvent::Deactivate), Ok(Vec::new()));
    }

    #[test]
    fn double_activation_is_refused_and_keeps_the_original_snapshot() {
        let mut trap = active_trap(Some("original"));
        assert_eq!(
            trap.handle(TrapEvent::Activate {
                prior_focus: Some("clobber".to_string()),
            }),
            Err(TrapError::AlreadyActive)
        );
        let commands = trap.handle(TrapEvent::Deactivate).expect("deactivate");
        assert_eq!(
            commands,
            vec![TrapCommand::RestoreFocus("original".to_string())]
        );
    }

    #[test]
    fn key_events_on_an_inactive_trap_are_reported() {
        let mut trap = FocusTrap::<String>::new();
        assert_eq!(
            trap.handle(TrapEvent::TabKey {
                backward: false,
                focus_index: Some(0),
                focusable_count: 3,
            }),
            Err(TrapError::NotActive)
        );
    }

    #[test]
    fn repeated_deactivation_is_a_tolerated_no_op() {
        let mut trap = active_trap(Some("trigger"));
        trap.handle(TrapEvent::Deactivate).expect("first deactivate");
        assert_eq!(trap.handle(TrapEvent::Deactivate), Ok(Vec::new()));
    }
}
