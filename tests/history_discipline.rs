use easel::history::{HISTORY_CAPACITY, SnapshotHistory};
use easel::raster::RasterBuffer;
use egui::Color32;

/// Paint pixel (i, 0) black and return the resulting snapshot, so each
/// edit produces a distinct, recognizable state.
fn edit(buf: &mut RasterBuffer, i: i32) -> easel::Snapshot {
    buf.set(i, 0, Color32::BLACK).unwrap();
    buf.snapshot()
}

#[test]
fn undo_redo_round_trip_is_bit_for_bit() {
    let mut buf = RasterBuffer::new(30, 4, Color32::WHITE);
    let blank = buf.snapshot();
    let mut history = SnapshotHistory::new(buf.snapshot());

    let n = 5;
    for i in 0..n {
        let snap = edit(&mut buf, i);
        history.push(snap);
    }
    let final_state = buf.snapshot();

    for _ in 0..n {
        let restored = history.undo().expect("undo available");
        buf.restore(restored);
    }
    assert!(buf.snapshot() == blank, "n undos must return to blank");

    for _ in 0..n {
        let restored = history.redo().expect("redo available");
        buf.restore(restored);
    }
    assert!(
        buf.snapshot() == final_state,
        "n redos must return to the final state"
    );
}

#[test]
fn undo_at_the_initial_state_is_a_noop() {
    let buf = RasterBuffer::new(4, 4, Color32::WHITE);
    let mut history = SnapshotHistory::new(buf.snapshot());

    assert!(!history.can_undo());
    assert!(history.undo().is_none());
    assert!(history.undo().is_none());
}

#[test]
fn history_is_bounded_and_evicts_the_oldest_states() {
    let mut buf = RasterBuffer::new(64, 4, Color32::WHITE);
    let mut history = SnapshotHistory::new(buf.snapshot());

    // far more edits than the capacity retains
    for i in 0..40 {
        let snap = edit(&mut buf, i);
        history.push(snap);
    }

    let mut undos = 0;
    while history.undo().is_some() {
        undos += 1;
    }
    // the top slot holds the current state, so a saturated stack offers
    // capacity - 1 steps back
    assert_eq!(undos, HISTORY_CAPACITY - 1);
    assert!(!history.can_undo());
}

#[test]
fn fresh_commit_after_undo_discards_pending_redos() {
    let mut buf = RasterBuffer::new(30, 4, Color32::WHITE);
    let mut history = SnapshotHistory::new(buf.snapshot());

    for i in 0..3 {
        let snap = edit(&mut buf, i);
        history.push(snap);
    }

    let restored = history.undo().unwrap();
    buf.restore(restored);
    assert!(history.can_redo());

    // a new committed edit invalidates the undone future
    let snap = edit(&mut buf, 20);
    history.push(snap);

    assert!(!history.can_redo());
    assert!(history.redo().is_none());
}

#[test]
fn undo_then_redo_restores_the_same_state() {
    let mut buf = RasterBuffer::new(30, 4, Color32::WHITE);
    let mut history = SnapshotHistory::new(buf.snapshot());

    let snap = edit(&mut buf, 7);
    history.push(snap);
    let edited = buf.snapshot();

    let restored = history.undo().unwrap();
    buf.restore(restored);
    assert!(buf.get(7, 0).unwrap() == Color32::WHITE);

    let restored = history.redo().unwrap();
    buf.restore(restored);
    assert!(buf.snapshot() == edited);
}
