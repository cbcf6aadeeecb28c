#[cfg(test)]
mod tests {
    use crate::cyclic::cyclic_value;
    use crate::debounce::debounced_value;
    use crate::delayed::delayed_value;
    use crate::persisted::{PersistedStateProps, StoredValue, persisted_state};
    use lull_core::{Composition, TestClock, pending_timers, pump_timers};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use web_time::Duration;

    // In-memory store double that records every write it sees.
    #[derive(Default)]
    struct RecordingStore {
        values: RefCell<HashMap<String, StoredValue>>,
        writes: RefCell<Vec<(String, Option<StoredValue>)>>,
    }

    fn store_props(store: &Rc<RecordingStore>) -> PersistedStateProps {
        let get = {
            let store = store.clone();
            move |key: &str| store.values.borrow().get(key).cloned()
        };
        let set = {
            let store = store.clone();
            move |key: &str, value: Option<StoredValue>| {
                store
                    .writes
                    .borrow_mut()
                    .push((key.to_string(), value.clone()));
                match value {
                    Some(v) => {
                        store.values.borrow_mut().insert(key.to_string(), v);
                    }
                    None => {
                        store.values.borrow_mut().remove(key);
                    }
                }
            }
        };
        PersistedStateProps {
            get_item: Some(Rc::new(get)),
            set_item: Some(Rc::new(set)),
        }
    }

    impl RecordingStore {
        fn write_at(&self, index: usize) -> (String, Option<i32>) {
            let writes = self.writes.borrow();
            let (key, value) = &writes[index];
            (
                key.clone(),
                value
                    .as_ref()
                    .and_then(|v| v.downcast_ref::<i32>().copied()),
            )
        }
    }

    #[test]
    fn debounce_burst_collapses_to_final_value() {
        let clock = TestClock::install();
        let ui = Composition::new();
        let delay = Duration::from_millis(100);

        let observe = |input: i32| ui.compose(move || debounced_value(input, delay));

        // seeded with the first input
        assert_eq!(observe(1), 1);

        // rapid changes inside the window keep the old mirror
        clock.advance(Duration::from_millis(30));
        pump_timers();
        assert_eq!(observe(2), 1);
        clock.advance(Duration::from_millis(30));
        pump_timers();
        assert_eq!(observe(3), 1);

        // quiescence counts from the last change
        clock.advance(Duration::from_millis(99));
        assert_eq!(pump_timers(), 0);
        assert_eq!(observe(3), 1);

        clock.advance(Duration::from_millis(1));
        assert_eq!(pump_timers(), 1);
        assert_eq!(observe(3), 3);
    }

    #[test]
    fn debounce_teardown_cancels_pending_update() {
        let clock = TestClock::install();
        let ui = Composition::new();

        ui.compose(|| {
            debounced_value(1, Duration::from_millis(100));
        });
        ui.compose(|| {
            debounced_value(2, Duration::from_millis(100));
        });
        ui.dispose();

        // nothing outlives the composition
        assert_eq!(pending_timers(), 0);
        clock.advance(Duration::from_millis(200));
        assert_eq!(pump_timers(), 0);
    }

    #[test]
    fn delayed_value_flips_after_default_delay() {
        let clock = TestClock::install();
        let ui = Composition::new();

        assert!(!ui.compose(|| delayed_value(None)));

        clock.advance(Duration::from_millis(500));
        pump_timers();
        assert!(ui.compose(|| delayed_value(None)));

        // and stays up
        clock.advance(Duration::from_millis(1000));
        pump_timers();
        assert!(ui.compose(|| delayed_value(None)));
    }

    #[test]
    fn delayed_value_honors_custom_delay() {
        let clock = TestClock::install();
        let ui = Composition::new();
        let delay = Some(Duration::from_millis(100));

        assert!(!ui.compose(move || delayed_value(delay)));
        clock.advance(Duration::from_millis(100));
        pump_timers();
        assert!(ui.compose(move || delayed_value(delay)));
    }

    #[test]
    fn delayed_value_rearms_on_every_pass() {
        let clock = TestClock::install();
        let ui = Composition::new();

        assert!(!ui.compose(|| delayed_value(None)));
        clock.advance(Duration::from_millis(499));
        pump_timers();

        // recomposing before expiry restarts the full window (documented quirk)
        assert!(!ui.compose(|| delayed_value(None)));
        clock.advance(Duration::from_millis(1));
        assert_eq!(pump_timers(), 0);
        assert!(!ui.compose(|| delayed_value(None)));

        clock.advance(Duration::from_millis(500));
        pump_timers();
        assert!(ui.compose(|| delayed_value(None)));

        // many passes, still a single pending timer
        for _ in 0..5 {
            ui.compose(|| delayed_value(None));
        }
        assert_eq!(pending_timers(), 1);
    }

    #[test]
    fn delayed_value_teardown_cancels() {
        let clock = TestClock::install();
        let ui = Composition::new();

        ui.compose(|| delayed_value(None));
        ui.dispose();

        assert_eq!(pending_timers(), 0);
        clock.advance(Duration::from_millis(1000));
        assert_eq!(pump_timers(), 0);
    }

    #[test]
    fn cyclic_value_wraps_through_zero() {
        let clock = TestClock::install();
        let ui = Composition::new();
        let pause = Duration::from_millis(100);

        let mut seen = vec![ui.compose(move || cyclic_value(2, 5, Some(pause)))];
        for _ in 0..9 {
            clock.advance(pause);
            pump_timers();
            seen.push(ui.compose(move || cyclic_value(2, 5, Some(pause))));
        }

        // nonzero start only pins the first value; the wrap passes through 0
        assert_eq!(seen, vec![2, 3, 4, 5, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn cyclic_value_default_pause_is_200ms() {
        let clock = TestClock::install();
        let ui = Composition::new();

        assert_eq!(ui.compose(|| cyclic_value(0, 2, None)), 0);

        clock.advance(Duration::from_millis(199));
        pump_timers();
        assert_eq!(ui.compose(|| cyclic_value(0, 2, None)), 0);

        clock.advance(Duration::from_millis(200));
        pump_timers();
        assert_eq!(ui.compose(|| cyclic_value(0, 2, None)), 1);
    }

    #[test]
    fn cyclic_value_teardown_stops_interval() {
        let clock = TestClock::install();
        let ui = Composition::new();

        ui.compose(|| cyclic_value(0, 5, Some(Duration::from_millis(100))));
        ui.dispose();

        assert_eq!(pending_timers(), 0);
        clock.advance(Duration::from_millis(500));
        assert_eq!(pump_timers(), 0);
    }

    #[test]
    fn cyclic_value_degenerate_range_holds_start() {
        let clock = TestClock::install();
        let pause = Duration::from_millis(10);

        // end + 1 is zero: there is no modulus to step with
        let ui = Composition::new();
        assert_eq!(ui.compose(move || cyclic_value(-1, -1, Some(pause))), -1);
        clock.advance(pause);
        pump_timers();
        assert_eq!(ui.compose(move || cyclic_value(-1, -1, Some(pause))), -1);

        // end + 1 overflows: same outcome
        let ui2 = Composition::new();
        assert_eq!(
            ui2.compose(move || cyclic_value(7, i64::MAX, Some(pause))),
            7
        );
        clock.advance(pause);
        pump_timers();
        assert_eq!(
            ui2.compose(move || cyclic_value(7, i64::MAX, Some(pause))),
            7
        );
    }

    #[test]
    fn persisted_state_seeds_from_store() {
        let _clock = TestClock::install();
        let store = Rc::new(RecordingStore::default());
        store
            .values
            .borrow_mut()
            .insert("x".to_string(), Rc::new(7i32) as StoredValue);
        let props = store_props(&store);
        let ui = Composition::new();

        let value = ui.compose(|| persisted_state(&props, "x", 0i32).0);
        assert_eq!(value, 7);
    }

    #[test]
    fn persisted_state_seeds_from_initial_when_key_missing() {
        let _clock = TestClock::install();
        let store = Rc::new(RecordingStore::default());
        let props = store_props(&store);
        let ui = Composition::new();

        let value = ui.compose(|| persisted_state(&props, "missing", 12i32).0);
        assert_eq!(value, 12);
    }

    #[test]
    fn persisted_state_seeds_from_initial_on_type_mismatch() {
        let _clock = TestClock::install();
        let store = Rc::new(RecordingStore::default());
        store
            .values
            .borrow_mut()
            .insert("x".to_string(), Rc::new("stale".to_string()) as StoredValue);
        let props = store_props(&store);
        let ui = Composition::new();

        let value = ui.compose(|| persisted_state(&props, "x", 3i32).0);
        assert_eq!(value, 3);
    }

    #[test]
    fn persisted_state_writes_once_per_quiet_burst() {
        let clock = TestClock::install();
        let store = Rc::new(RecordingStore::default());
        let props = store_props(&store);
        let ui = Composition::new();

        let pass = || ui.compose(|| persisted_state(&props, "draft", 0i32));

        let (value, set_value) = pass();
        assert_eq!(value, 0);

        // the write-through fires once on mount, with the seed value
        assert_eq!(store.writes.borrow().len(), 1);
        assert_eq!(store.write_at(0), ("draft".to_string(), Some(0)));

        // a burst of writes inside the quiescence window reaches the store
        // zero times
        for i in 1..=5 {
            set_value(i);
            clock.advance(Duration::from_millis(50));
            pump_timers();
            pass();
        }
        assert_eq!(store.writes.borrow().len(), 1);

        // one write once the burst goes quiet, with the last value
        clock.advance(Duration::from_millis(500));
        pump_timers();
        pass();
        assert_eq!(store.writes.borrow().len(), 2);
        assert_eq!(store.write_at(1), ("draft".to_string(), Some(5)));
    }

    #[test]
    fn persisted_state_clears_slot_once_on_teardown() {
        let clock = TestClock::install();
        let store = Rc::new(RecordingStore::default());
        let props = store_props(&store);
        let ui = Composition::new();

        let (_, set_value) = ui.compose(|| persisted_state(&props, "draft", 0i32));
        set_value(9);
        ui.compose(|| persisted_state(&props, "draft", 0i32));

        // torn down before the quiescence window: the pending write is
        // cancelled, the clear still happens, exactly once
        ui.dispose();

        let writes = store.writes.borrow();
        assert_eq!(writes.len(), 2); // mount write + clear
        assert!(writes[1].1.is_none());
        assert_eq!(writes.iter().filter(|(_, v)| v.is_none()).count(), 1);
        drop(writes);

        assert!(!store.values.borrow().contains_key("draft"));
        assert_eq!(pending_timers(), 0);
        clock.advance(Duration::from_millis(1000));
        assert_eq!(pump_timers(), 0);
    }

    #[test]
    fn persisted_state_key_change_clears_old_slot() {
        let _clock = TestClock::install();
        let store = Rc::new(RecordingStore::default());
        let props = store_props(&store);
        let ui = Composition::new();

        ui.compose(|| persisted_state(&props, "a", 0i32));
        ui.compose(|| persisted_state(&props, "b", 0i32));

        assert_eq!(store.write_at(0), ("a".to_string(), Some(0)));
        assert_eq!(store.write_at(1), ("b".to_string(), Some(0)));
        assert_eq!(store.write_at(2), ("a".to_string(), None));
        assert_eq!(store.writes.borrow().len(), 3);
    }

    #[test]
    fn persisted_state_setter_change_clears_via_old_setter() {
        let _clock = TestClock::install();
        let old_store = Rc::new(RecordingStore::default());
        let new_store = Rc::new(RecordingStore::default());
        let old_props = store_props(&old_store);
        let new_props = store_props(&new_store);
        let ui = Composition::new();

        ui.compose(|| persisted_state(&old_props, "draft", 0i32));
        assert_eq!(old_store.write_at(0), ("draft".to_string(), Some(0)));

        // same key, fresh setter identity
        ui.compose(|| persisted_state(&new_props, "draft", 0i32));

        // the write-through moves to the new setter; the clear goes to the
        // old one, exactly once
        assert_eq!(new_store.write_at(0), ("draft".to_string(), Some(0)));
        assert_eq!(new_store.writes.borrow().len(), 1);
        assert_eq!(old_store.write_at(1), ("draft".to_string(), None));
        assert_eq!(old_store.writes.borrow().len(), 2);
        assert!(!old_store.values.borrow().contains_key("draft"));
    }

    #[test]
    fn persisted_state_without_store_is_plain_state() {
        let clock = TestClock::install();
        let props = PersistedStateProps::default();
        let ui = Composition::new();

        let (value, set_value) = ui.compose(|| persisted_state(&props, "k", 10i32));
        assert_eq!(value, 10);

        set_value(11);
        let (value, _) = ui.compose(|| persisted_state(&props, "k", 10i32));
        assert_eq!(value, 11);

        // no store, no writes, no stray effects on teardown
        clock.advance(Duration::from_millis(1000));
        pump_timers();
        ui.dispose();
        assert_eq!(pending_timers(), 0);
    }
}
