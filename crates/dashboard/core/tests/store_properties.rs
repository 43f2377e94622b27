use std::{cell::RefCell, rc::Rc};

use dashboard_core::{Dataset, Patch, SeriesPoint, Snapshot, Store, Summary, Theme};

#[test]
fn listener_mutations_do_not_leak_into_store_or_peers() {
    let store = Store::default();
    let peer_seen = Rc::new(RefCell::new(Vec::new()));

    let _mutator = store.subscribe(|mut snapshot| {
        snapshot.filters.insert("specialty".into(), "Cardiology".into());
        snapshot.series.clear();
        snapshot.loading = !snapshot.loading;
    });
    let sink = Rc::clone(&peer_seen);
    let _peer = store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot));

    store.set_state(Patch::new().series(vec![SeriesPoint::new("Jan", 10.0, 8.0)]));

    let state = store.get_state();
    assert!(state.filters.is_empty());
    assert_eq!(state.series.len(), 1);
    assert!(state.loading);

    let seen = peer_seen.borrow();
    let last = seen.last().unwrap();
    assert!(last.filters.is_empty());
    assert_eq!(last.series.len(), 1);
}

#[test]
fn earlier_snapshots_are_unaffected_by_later_merges() {
    let store = Store::default();
    let before = store.get_state();

    store.set_state(Patch::new().dataset(Dataset::Surgical).theme(Theme::OnCall));
    let mut middle = store.get_state();
    middle.records.clear();
    middle.dataset = Dataset::Ambulatory;

    store.set_state(Patch::new().loading(false));

    assert_eq!(before, Snapshot::default());
    assert_eq!(store.get_state().dataset, Dataset::Surgical);
    assert_eq!(store.get_state().theme, Theme::OnCall);
}

#[test]
fn merge_keeps_every_other_field() {
    let mut initial = Snapshot::default();
    initial.filters.insert("team".into(), "1".into());
    initial.summary = Some(Summary::Ambulatory(Default::default()));
    let store = Store::new(initial.clone());

    store.set_state(Patch::new().loading(false));

    let state = store.get_state();
    assert_eq!(
        state,
        Snapshot {
            loading: false,
            ..initial
        }
    );
}

#[test]
fn late_subscriber_sees_state_without_separate_read() {
    let store = Store::default();
    store.set_state(Patch::new().dataset(Dataset::Surgical));

    let first = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&first);
    let _late = store.subscribe(move |snapshot| {
        sink.borrow_mut().get_or_insert(snapshot);
    });

    assert_eq!(first.borrow().as_ref().unwrap().dataset, Dataset::Surgical);
}

#[test]
fn queued_functional_updates_see_state_at_their_turn() {
    let store = Store::default();
    let trigger = store.clone();
    let _chain = store.subscribe(move |snapshot| {
        if snapshot.dataset == Dataset::Surgical && snapshot.filters.is_empty() {
            trigger.update_state(|current| {
                let mut filters = current.filters;
                filters.insert("team".into(), "2".into());
                Patch::new().filters(filters)
            });
            trigger.set_state(Patch::new().loading(false));
        }
    });

    store.set_state(Patch::new().dataset(Dataset::Surgical));

    let state = store.get_state();
    assert_eq!(state.filters.get("team").map(String::as_str), Some("2"));
    assert!(!state.loading);
}
