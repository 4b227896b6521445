//! Controlled/uncontrolled state ownership for stateful widgets.

use leptos::*;

/// Where a widget's state lives: with the caller, or inside the widget.
///
/// Built once per widget from its prop pair. Supplying the state signal makes
/// the widget controlled: writes only notify `on_change` and the caller is
/// expected to feed the new value back in. Without it the widget owns a local
/// signal, and `on_change` (if any) is notification only.
pub enum StateBinding<T: Clone + 'static> {
    /// Caller-owned state.
    Controlled {
        /// The caller's state signal.
        value: Signal<T>,
        /// Invoked with each requested change.
        on_change: Option<Callback<T>>,
    },
    /// Widget-owned state.
    Uncontrolled {
        /// The widget's local state signal.
        value: RwSignal<T>,
        /// Change notification for observers.
        on_change: Option<Callback<T>>,
    },
}

// Signals and callbacks are id-backed handles, so the binding is copyable for
// any state type; the std derives would demand `T: Copy`.
impl<T: Clone + 'static> Clone for StateBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + 'static> Copy for StateBinding<T> {}

impl<T: Clone + 'static> StateBinding<T> {
    /// Resolves the ownership mode from the widget's prop pair.
    pub fn from_props(
        external: Option<Signal<T>>,
        initial: T,
        on_change: Option<Callback<T>>,
    ) -> Self {
        match external {
            Some(value) => Self::Controlled { value, on_change },
            None => Self::Uncontrolled {
                value: create_rw_signal(initial),
                on_change,
            },
        }
    }

    /// Reads the current value, tracking the underlying signal.
    pub fn read(&self) -> T {
        match self {
            Self::Controlled { value, .. } => value.get(),
            Self::Uncontrolled { value, .. } => value.get(),
        }
    }

    /// Reads the current value without tracking (for event handlers).
    pub fn read_untracked(&self) -> T {
        match self {
            Self::Controlled { value, .. } => value.get_untracked(),
            Self::Uncontrolled { value, .. } => value.get_untracked(),
        }
    }

    /// Requests a state change.
    pub fn write(&self, next: T) {
        match self {
            Self::Controlled { on_change, .. } => {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(next);
                }
            }
            Self::Uncontrolled { value, on_change } => {
                value.set(next.clone());
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(next);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn uncontrolled_writes_land_in_the_owned_signal() {
        let runtime = create_runtime();
        let binding = StateBinding::from_props(None, 1_i32, None);
        assert_eq!(binding.read(), 1);
        binding.write(5);
        assert_eq!(binding.read(), 5);
        runtime.dispose();
    }

    #[test]
    fn controlled_writes_only_notify_the_caller() {
        let runtime = create_runtime();
        let (value, set_value) = create_signal(1_i32);
        let requested = create_rw_signal(None::<i32>);
        let binding = StateBinding::from_props(
            Some(value.into()),
            0,
            Some(Callback::new(move |next| requested.set(Some(next)))),
        );

        binding.write(7);
        // The widget does not mutate caller state on its own.
        assert_eq!(binding.read(), 1);
        assert_eq!(requested.get_untracked(), Some(7));

        set_value.set(7);
        assert_eq!(binding.read(), 7);
        runtime.dispose();
    }
}
