#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use pomo::libs::cycle::{Cycle, CycleStatus};
    use pomo::libs::state::CyclesState;
    use pomo::libs::store::{CycleStore, StateListener};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every state notification it receives.
    struct RecordingListener {
        notifications: Rc<RefCell<Vec<CyclesState>>>,
    }

    impl StateListener for RecordingListener {
        fn state_changed(&mut self, state: &CyclesState) {
            self.notifications.borrow_mut().push(state.clone());
        }
    }

    #[test]
    fn test_empty_store() {
        let store = CycleStore::new(None);

        assert!(store.cycles().is_empty());
        assert!(store.active_cycle().is_none());
        assert!(store.active_cycle_id().is_none());
        assert_eq!(store.amount_seconds_passed(), 0);
    }

    #[test]
    fn test_create_new_cycle_activates_it() {
        let mut store = CycleStore::new(None);

        let cycle = store.create_new_cycle("Write report", 25);

        assert_eq!(store.cycles().len(), 1);
        assert_eq!(store.active_cycle_id(), Some(cycle.id.as_str()));
        assert_eq!(store.active_cycle().unwrap().task, "Write report");
        assert_eq!(store.active_cycle().unwrap().minutes_amount, 25);
        assert_eq!(store.amount_seconds_passed(), 0);
    }

    #[test]
    fn test_interrupt_scenario() {
        // create -> tick to 10 seconds -> interrupt
        let mut store = CycleStore::new(None);
        let cycle = store.create_new_cycle("Write report", 25);

        store.set_seconds_passed(10);
        assert_eq!(store.amount_seconds_passed(), 10);
        assert_eq!(store.active_cycle().unwrap().id, cycle.id);

        store.interrupt_cycle();

        assert_eq!(store.active_cycle_id(), None);
        let record = store.cycles().iter().find(|c| c.id == cycle.id).unwrap();
        assert!(record.interrupted_date.is_some());
        assert!(record.finished_date.is_none());
    }

    #[test]
    fn test_finish_keeps_active_pointer() {
        let mut store = CycleStore::new(None);
        let cycle = store.create_new_cycle("Focus", 25);

        store.mark_current_cycle_as_finished();

        assert_eq!(store.active_cycle_id(), Some(cycle.id.as_str()));
        assert_eq!(store.active_cycle().unwrap().status(), CycleStatus::Finished);
    }

    #[test]
    fn test_superseding_leaves_orphaned_running_record() {
        let mut store = CycleStore::new(None);
        let first = store.create_new_cycle("A", 25);
        store.set_seconds_passed(42);

        let second = store.create_new_cycle("B", 30);

        assert_eq!(store.active_cycle_id(), Some(second.id.as_str()));
        // Creating a cycle resets the elapsed counter.
        assert_eq!(store.amount_seconds_passed(), 0);
        let orphan = store.cycles().iter().find(|c| c.id == first.id).unwrap();
        assert_eq!(orphan.status(), CycleStatus::Running);
    }

    #[test]
    fn test_set_seconds_passed_is_unchecked_overwrite() {
        let mut store = CycleStore::new(None);
        store.create_new_cycle("Focus", 5);

        // Far beyond the cycle duration; the store does not care.
        store.set_seconds_passed(99_999);
        assert_eq!(store.amount_seconds_passed(), 99_999);

        store.set_seconds_passed(3);
        assert_eq!(store.amount_seconds_passed(), 3);
    }

    #[test]
    fn test_no_op_transitions_when_idle() {
        let mut store = CycleStore::new(None);

        store.mark_current_cycle_as_finished();
        store.interrupt_cycle();

        assert!(store.cycles().is_empty());
        assert!(store.active_cycle_id().is_none());
    }

    #[test]
    fn test_snapshot_resumes_elapsed_seconds() {
        let mut cycle = Cycle::new("Resumed", 25);
        cycle.start_date = Utc::now() - Duration::seconds(30);
        let snapshot = CyclesState {
            active_cycle_id: Some(cycle.id.clone()),
            cycles: vec![cycle],
        };

        let store = CycleStore::new(Some(snapshot));

        // Within tick granularity of the 30 seconds that already passed.
        let resumed = store.amount_seconds_passed();
        assert!((29..=31).contains(&resumed), "resumed {} seconds", resumed);
    }

    #[test]
    fn test_snapshot_without_active_cycle_starts_at_zero() {
        let mut cycle = Cycle::new("Old", 25);
        cycle.start_date = Utc::now() - Duration::seconds(500);
        cycle.interrupted_date = Some(Utc::now() - Duration::seconds(400));
        let snapshot = CyclesState {
            cycles: vec![cycle],
            active_cycle_id: None,
        };

        let store = CycleStore::new(Some(snapshot));

        assert_eq!(store.amount_seconds_passed(), 0);
    }

    #[test]
    fn test_listeners_notified_on_every_mutation() {
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let mut store = CycleStore::new(None);
        store.subscribe(Box::new(RecordingListener {
            notifications: notifications.clone(),
        }));

        let cycle = store.create_new_cycle("Focus", 25);
        store.set_seconds_passed(5); // counter only, no state change
        store.interrupt_cycle();

        let seen = notifications.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].active_cycle_id.as_deref(), Some(cycle.id.as_str()));
        assert_eq!(seen[1].active_cycle_id, None);
        assert!(seen[1].cycles[0].interrupted_date.is_some());
        // Listeners always receive the full current state.
        assert_eq!(&seen[1], store.state());
    }
}
