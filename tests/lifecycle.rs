//! Integration tests for the full design lifecycle
//!
//! Exercises save/load/update/delete end to end against a real
//! file-backed store in a temporary directory, including reopening the
//! store in a fresh session the way a restarted application would.

use tempfile::TempDir;

use tshirt_studio::{
    DesignSession, DesignStore, FontColor, FontSize, GarmentColor, GarmentSize, Offset, Side,
};

/// Create a session over a store in a temporary directory.
fn create_test_session() -> (DesignSession, TempDir) {
    init_tracing();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = DesignStore::new(dir.path().join("designs.json"));
    (DesignSession::new(store), dir)
}

/// Route library logs through the test harness (RUST_LOG to enable).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn save_load_round_trip_reproduces_every_field() {
    let (mut session, _dir) = create_test_session();

    session.set_garment_color(GarmentColor::Black);
    session.set_size(GarmentSize::Xl);
    session.set_active_text("Front print");
    session.views_mut().zoom_in();
    session.views_mut().begin_text_drag();
    session.views_mut().end_text_drag(Offset::new(14.0, -8.5));

    session.views_mut().toggle_side();
    session.set_active_text("Back print");
    session.views_mut().set_pan_mode(true);
    session.views_mut().begin_pan();
    session.views_mut().end_pan(Offset::new(-3.0, 6.0));

    session.style_mut().color = FontColor::Yellow;
    session.style_mut().size = FontSize::Large;
    session.style_mut().italic = true;
    session.profile_mut().weight_kg = 95;

    let id = session.save().expect("save should succeed");
    let saved = session.records()[0].clone();

    // Wipe the in-memory state entirely, then load the record back.
    session.new_design();
    session.load(id).expect("load should succeed");
    session.update().expect("update should succeed");

    let reloaded = &session.records()[0];
    assert_eq!(reloaded.id, saved.id);
    assert_eq!(reloaded.name, saved.name);
    assert_eq!(reloaded.created_at, saved.created_at);
    assert!(reloaded.updated_at >= saved.updated_at);
    // Everything except timestamps survives byte for byte.
    assert_eq!(reloaded.data, saved.data);
}

#[test]
fn collection_survives_session_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("designs.json");

    let first_id;
    {
        let mut session = DesignSession::new(DesignStore::new(path.clone()));
        session.set_active_text("persisted");
        first_id = session.save().unwrap();
        session.new_design();
        session.set_active_text("also persisted");
        session.save().unwrap();
    }

    // A fresh session over the same file sees both designs, in order.
    let mut session = DesignSession::new(DesignStore::new(path));
    assert_eq!(session.records().len(), 2);
    assert_eq!(session.records()[0].id, first_id);
    assert_eq!(session.records()[0].data.front_text, "persisted");
    assert_eq!(session.records()[1].data.front_text, "also persisted");

    session.load(first_id).unwrap();
    assert_eq!(session.text(Side::Front), "persisted");
}

#[test]
fn corrupt_store_file_starts_empty_and_recovers_on_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("designs.json");
    std::fs::write(&path, "not json at all {{{").unwrap();

    let mut session = DesignSession::new(DesignStore::new(path.clone()));
    assert!(session.records().is_empty());

    session.set_active_text("fresh start");
    session.save().unwrap();

    let session = DesignSession::new(DesignStore::new(path));
    assert_eq!(session.records().len(), 1);
    assert_eq!(session.records()[0].name, "fresh start");
}

#[test]
fn deleting_another_record_keeps_the_edit_in_progress() {
    let (mut session, _dir) = create_test_session();

    session.set_active_text("keep me");
    let keep = session.save().unwrap();
    session.new_design();
    session.set_active_text("remove me");
    let remove = session.save().unwrap();

    session.load(keep).unwrap();
    session.delete(remove).unwrap();

    // The unrelated delete must not reset the session.
    assert_eq!(session.editing_id(), Some(keep));
    assert_eq!(session.text(Side::Front), "keep me");
    assert_eq!(session.records().len(), 1);
}

#[test]
fn side_states_stay_independent_across_the_lifecycle() {
    let (mut session, _dir) = create_test_session();

    session.views_mut().zoom_in(); // front: 1.1
    session.views_mut().toggle_side();
    session.views_mut().zoom_out(); // back: 0.9
    let id = session.save().unwrap();

    session.new_design();
    session.load(id).unwrap();

    let front = session.views().view(Side::Front);
    let back = session.views().view(Side::Back);
    assert!((front.zoom - 1.1).abs() < 1e-6);
    assert!((back.zoom - 0.9).abs() < 1e-6);
}
