use super::*;

fn observed(count: usize) -> (RevealTracker, Vec<RevealId>) {
    let mut tracker = RevealTracker::new();
    let ids: Vec<_> = (0..count).map(|_| tracker.register()).collect();
    for &id in &ids {
        assert!(tracker.observe(id));
    }
    (tracker, ids)
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_starts_pending() {
    let mut tracker = RevealTracker::new();
    let id = tracker.register();
    assert_eq!(tracker.phase(id), Some(RevealPhase::Pending));
    assert_eq!(tracker.len(), 1);
}

#[test]
fn ids_are_sequential_indices() {
    let mut tracker = RevealTracker::new();
    let a = tracker.register();
    let b = tracker.register();
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(RevealId::from_index(1), b);
}

#[test]
fn observe_only_from_pending() {
    let mut tracker = RevealTracker::new();
    let id = tracker.register();
    assert!(tracker.observe(id));
    assert!(!tracker.observe(id));
    assert_eq!(tracker.phase(id), Some(RevealPhase::Observing));
}

#[test]
fn unknown_id_is_ignored() {
    let mut tracker = RevealTracker::new();
    let stray = RevealId::from_index(3);
    assert!(!tracker.observe(stray));
    assert_eq!(tracker.on_intersection(stray, true), RevealAction::Ignore);
    assert_eq!(tracker.phase(stray), None);
}

// =============================================================
// Intersection handling
// =============================================================

#[test]
fn pending_element_does_not_reveal() {
    let mut tracker = RevealTracker::new();
    let id = tracker.register();
    assert_eq!(tracker.on_intersection(id, true), RevealAction::Ignore);
    assert_eq!(tracker.phase(id), Some(RevealPhase::Pending));
}

#[test]
fn non_intersecting_entry_is_ignored() {
    let (mut tracker, ids) = observed(1);
    assert_eq!(tracker.on_intersection(ids[0], false), RevealAction::Ignore);
    assert_eq!(tracker.phase(ids[0]), Some(RevealPhase::Observing));
}

#[test]
fn first_intersection_reveals() {
    let (mut tracker, ids) = observed(1);
    assert_eq!(tracker.on_intersection(ids[0], true), RevealAction::Reveal);
    assert_eq!(tracker.phase(ids[0]), Some(RevealPhase::Revealed));
}

#[test]
fn reentering_viewport_reveals_at_most_once() {
    let (mut tracker, ids) = observed(1);
    let reveals = [true, false, true, false, true]
        .into_iter()
        .filter(|&hit| tracker.on_intersection(ids[0], hit) == RevealAction::Reveal)
        .count();
    assert_eq!(reveals, 1);
    assert_eq!(tracker.phase(ids[0]), Some(RevealPhase::Revealed));
}

#[test]
fn elements_reveal_independently() {
    let (mut tracker, ids) = observed(3);
    tracker.on_intersection(ids[2], true);
    assert_eq!(tracker.revealed_count(), 1);
    assert_eq!(tracker.phase(ids[0]), Some(RevealPhase::Observing));
    tracker.on_intersection(ids[0], true);
    tracker.on_intersection(ids[0], true);
    assert_eq!(tracker.revealed_count(), 2);
}
