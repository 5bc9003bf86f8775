//! One-shot reveal bookkeeping for scroll animations.
//!
//! Every animatable element walks `Pending -> Observing -> Revealed` exactly
//! once per page load. Only an `Observing` element can reveal, and a
//! revealed element never goes back, so re-entering the viewport is inert.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Handle for an element registered with a [`RevealTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealId(usize);

impl RevealId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Rebuild a handle from an index stored on the element (`data-reveal-id`).
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    /// Tagged but not yet handed to the intersection observer.
    #[default]
    Pending,
    Observing,
    Revealed,
}

/// What the caller should do in response to an intersection entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the visible class and stop observing the element.
    Reveal,
    Ignore,
}

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    phases: Vec<RevealPhase>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element in the `Pending` phase.
    pub fn register(&mut self) -> RevealId {
        self.phases.push(RevealPhase::Pending);
        RevealId(self.phases.len() - 1)
    }

    /// Mark an element as handed to the observer. Returns `false` unless it
    /// was `Pending`.
    pub fn observe(&mut self, id: RevealId) -> bool {
        match self.phases.get_mut(id.0) {
            Some(phase @ RevealPhase::Pending) => {
                *phase = RevealPhase::Observing;
                true
            }
            _ => false,
        }
    }

    /// Handle an intersection entry for `id`.
    pub fn on_intersection(&mut self, id: RevealId, is_intersecting: bool) -> RevealAction {
        if !is_intersecting {
            return RevealAction::Ignore;
        }
        match self.phases.get_mut(id.0) {
            Some(phase @ RevealPhase::Observing) => {
                *phase = RevealPhase::Revealed;
                RevealAction::Reveal
            }
            _ => RevealAction::Ignore,
        }
    }

    #[must_use]
    pub fn phase(&self, id: RevealId) -> Option<RevealPhase> {
        self.phases.get(id.0).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.phases
            .iter()
            .filter(|p| **p == RevealPhase::Revealed)
            .count()
    }
}
