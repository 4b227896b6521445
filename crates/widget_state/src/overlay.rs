//! Reference-counted scroll-lock ledger for overlay surfaces.
//!
//! The document body's scroll-blocking style is a single global resource.
//! Overlapping overlay activations are counted here so the pre-lock style
//! value is captured exactly once (outermost lock) and written back exactly
//! once (final unlock), regardless of how activations interleave.

/// Scroll-lock bookkeeping for the document body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLockLedger {
    depth: usize,
    saved: Option<String>,
}

impl ScrollLockLedger {
    /// Creates an unlocked ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any overlay currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.depth > 0
    }

    /// Registers a lock.
    ///
    /// Returns `true` when this is the outermost lock, in which case
    /// `current_value` has been stored and the caller should apply the
    /// blocking style value. Deeper locks only increment the count; the
    /// already-stored prior value is never overwritten.
    pub fn lock(&mut self, current_value: impl Into<String>) -> bool {
        self.depth += 1;
        if self.depth == 1 {
            self.saved = Some(current_value.into());
            true
        } else {
            false
        }
    }

    /// Releases a lock.
    ///
    /// Returns the saved prior value when the outermost lock is released; the
    /// caller writes it back (an empty string means the property was unset).
    /// Unbalanced releases on an unlocked ledger are tolerated no-ops.
    pub fn unlock(&mut self) -> Option<String> {
        match self.depth {
            0 => None,
            1 => {
                self.depth = 0;
                self.saved.take()
            }
            _ => {
                self.depth -= 1;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn outermost_lock_stores_the_prior_value_and_asks_for_blocking() {
        let mut ledger = ScrollLockLedger::new();
        assert!(ledger.lock("auto"));
        assert!(ledger.is_locked());
    }

    #[test]
    fn balanced_sequence_restores_the_value_from_before_the_first_lock() {
        let mut ledger = ScrollLockLedger::new();
        assert!(ledger.lock("auto"));
        assert!(!ledger.lock("hidden"));
        assert_eq!(ledger.unlock(), None);
        assert_eq!(ledger.unlock(), Some("auto".to_string()));
        assert!(!ledger.is_locked());
    }

    #[test]
    fn relocking_while_locked_never_overwrites_the_snapshot() {
        let mut ledger = ScrollLockLedger::new();
        ledger.lock("");
        ledger.lock("hidden");
        ledger.lock("hidden");
        ledger.unlock();
        ledger.unlock();
        assert_eq!(ledger.unlock(), Some(String::new()));
    }

    #[test]
    fn unbalanced_unlock_is_a_no_op() {
        let mut ledger = ScrollLockLedger::new();
        assert_eq!(ledger.unlock(), None);
        ledger.lock("scroll");
        assert_eq!(ledger.unlock(), Some("scroll".to_string()));
        assert_eq!(ledger.unlock(), None);
    }

    #[test]
    fn every_balanced_interleaving_ends_restored() {
        // Lock/unlock orderings paired with how many outermost spans they form.
        let sequences: &[(&[bool], usize)] = &[
            (&[true, false], 1),
            (&[true, true, false, false], 1),
            (&[true, false, true, false], 2),
            (&[true, true, false, true, false, false], 1),
        ];
        for &(ops, spans) in sequences {
            let mut ledger = ScrollLockLedger::new();
            let mut restored = Vec::new();
            for &is_lock in ops.iter() {
                if is_lock {
                    ledger.lock("auto");
                } else if let Some(value) = ledger.unlock() {
                    restored.push(value);
                }
            }
            assert!(!ledger.is_locked(), "sequence {ops:?} left the lock held");
            assert_eq!(restored.len(), spans, "sequence {ops:?}");
            assert!(restored.iter().all(|value| value == "auto"));
        }
    }
}
