//! Design session model
//!
//! The heart of the configurator: a [`DesignSession`] aggregates the
//! per-side view state with the shared design attributes and owns the
//! persistence lifecycle against a [`DesignStore`]. The session is a two
//! mode state machine, Creating (no `editing_id`) versus Editing (saves
//! overwrite the record in place), with explicit transitions on save,
//! load, delete, and new-design.

mod validate;
mod view;

pub use validate::{
    validate, FieldError, HEIGHT_RANGE_CM, MAX_TEXT_CHARS, MAX_TEXT_LINES, WEIGHT_RANGE_KG,
};
pub use view::ViewStates;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{GarmentColor, GarmentSize, Side};
use crate::data::{BodyProfile, DesignData, DesignRecord, DesignStore, StorageError, TextStyle};
use crate::theme;

/// Characters of front text used for the derived record name.
const NAME_PREFIX_CHARS: usize = 20;

#[derive(Error, Debug)]
pub enum SessionError {
    /// One or more fields failed save-time validation.
    #[error("validation failed on {} field(s)", .0.len())]
    Invalid(Vec<FieldError>),
    /// `update()` was called with no design being edited.
    #[error("no design is being edited")]
    NotEditing,
    /// The requested record is not in the saved collection.
    #[error("design {0} not found")]
    NotFound(Uuid),
    /// The collection could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// An editable two-sided design plus the saved-design collection.
#[derive(Debug)]
pub struct DesignSession {
    store: DesignStore,
    records: Vec<DesignRecord>,
    /// Some while a saved record is open for editing.
    editing_id: Option<Uuid>,

    views: ViewStates,
    garment_color: GarmentColor,
    front_text: String,
    back_text: String,
    style: TextStyle,
    profile: BodyProfile,
    size: GarmentSize,
    theme_index: usize,
}

impl DesignSession {
    /// Start a session over the given store, loading any saved designs.
    pub fn new(store: DesignStore) -> Self {
        let records = store.load_all();
        Self {
            store,
            records,
            editing_id: None,
            views: ViewStates::new(),
            garment_color: GarmentColor::default(),
            front_text: String::new(),
            back_text: String::new(),
            style: TextStyle::default(),
            profile: BodyProfile::default(),
            size: GarmentSize::default(),
            theme_index: 0,
        }
    }

    /// Start a session over the default store location.
    pub fn open_default() -> Self {
        Self::new(DesignStore::open_default())
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Saved designs in insertion order.
    pub fn records(&self) -> &[DesignRecord] {
        &self.records
    }

    /// The id of the record currently open for editing, if any.
    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing_id
    }

    /// Whether the session is in Editing mode.
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// The per-side view state container.
    pub fn views(&self) -> &ViewStates {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut ViewStates {
        &mut self.views
    }

    /// Printed text for one side.
    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Front => &self.front_text,
            Side::Back => &self.back_text,
        }
    }

    /// Set the printed text for the currently active side.
    pub fn set_active_text(&mut self, text: impl Into<String>) {
        match self.views.current_side() {
            Side::Front => self.front_text = text.into(),
            Side::Back => self.back_text = text.into(),
        }
    }

    pub fn garment_color(&self) -> GarmentColor {
        self.garment_color
    }

    pub fn set_garment_color(&mut self, color: GarmentColor) {
        self.garment_color = color;
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut TextStyle {
        &mut self.style
    }

    pub fn profile(&self) -> &BodyProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut BodyProfile {
        &mut self.profile
    }

    pub fn size(&self) -> GarmentSize {
        self.size
    }

    pub fn set_size(&mut self, size: GarmentSize) {
        self.size = size;
    }

    /// Index of the active theme in the built-in catalog.
    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn set_theme_index(&mut self, index: usize) {
        self.theme_index = index % theme::theme_count();
    }

    /// Advance to the next theme, wrapping at the end of the catalog.
    pub fn cycle_theme(&mut self) {
        self.theme_index = theme::next_theme_index(self.theme_index);
    }

    // =========================================================================
    // Persistence lifecycle
    // =========================================================================

    /// Save the current design.
    ///
    /// In Creating mode this appends a new record and transitions to
    /// Editing for it, so a second save updates instead of duplicating
    /// (use [`new_design`](Self::new_design) to start a fresh copy). In
    /// Editing mode this is equivalent to [`update`](Self::update).
    ///
    /// Validation failures block persistence and leave both the session
    /// and the stored collection untouched.
    pub fn save(&mut self) -> Result<Uuid, SessionError> {
        if self.editing_id.is_some() {
            return self.update();
        }

        self.check_valid()?;

        let record = DesignRecord::new(self.derive_name(), self.snapshot());
        let id = record.id;
        self.records.push(record);
        if let Err(e) = self.store.save_all(&self.records) {
            // Keep the in-memory collection aligned with what is on disk.
            self.records.pop();
            return Err(e.into());
        }

        self.editing_id = Some(id);
        tracing::debug!(%id, "Saved new design");
        Ok(id)
    }

    /// Overwrite the record being edited in place: same id, same
    /// `created_at`, same position in the collection, fresh `updated_at`.
    pub fn update(&mut self) -> Result<Uuid, SessionError> {
        let id = self.editing_id.ok_or(SessionError::NotEditing)?;
        self.check_valid()?;

        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(SessionError::NotFound(id))?;

        let mut updated = self.records[idx].clone();
        updated.name = self.derive_name();
        updated.data = self.snapshot();
        updated.updated_at = Utc::now();

        let previous = std::mem::replace(&mut self.records[idx], updated);
        if let Err(e) = self.store.save_all(&self.records) {
            self.records[idx] = previous;
            return Err(e.into());
        }

        tracing::debug!(%id, "Updated design");
        Ok(id)
    }

    /// Open a saved record for editing, overwriting all session state
    /// from its snapshot. The current side selection is kept.
    pub fn load(&mut self, id: Uuid) -> Result<(), SessionError> {
        let record = self
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(SessionError::NotFound(id))?;

        let data = record.data;
        self.views = ViewStates::from_saved(data.front, data.back, self.views.current_side());
        self.garment_color = data.garment_color;
        self.front_text = data.front_text;
        self.back_text = data.back_text;
        self.style = data.style;
        self.profile = data.profile;
        self.size = data.size;
        self.theme_index = data.theme;
        self.editing_id = Some(id);

        tracing::debug!(%id, "Loaded design for editing");
        Ok(())
    }

    /// Remove a record from the collection. Returns whether a record was
    /// removed. Deleting the record currently open for editing resets the
    /// session to its default Creating state.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, SessionError> {
        let Some(idx) = self.records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };

        let removed = self.records.remove(idx);
        if let Err(e) = self.store.save_all(&self.records) {
            self.records.insert(idx, removed);
            return Err(e.into());
        }

        if self.editing_id == Some(id) {
            self.reset_to_defaults();
        }

        tracing::debug!(%id, "Deleted design");
        Ok(true)
    }

    /// Discard unsaved edits and start a fresh design with default
    /// attributes. Idempotent.
    pub fn new_design(&mut self) {
        self.reset_to_defaults();
        tracing::debug!("Started new design");
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn check_valid(&self) -> Result<(), SessionError> {
        let errors = validate(&self.profile, &self.front_text, &self.back_text);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SessionError::Invalid(errors))
        }
    }

    /// Snapshot all current state into a persistable record body.
    fn snapshot(&self) -> DesignData {
        DesignData {
            garment_color: self.garment_color,
            front: self.views.view(Side::Front).clone(),
            back: self.views.view(Side::Back).clone(),
            front_text: self.front_text.clone(),
            back_text: self.back_text.clone(),
            style: self.style,
            profile: self.profile,
            size: self.size,
            theme: self.theme_index,
        }
    }

    /// First 20 characters of the front text, or a positional fallback.
    fn derive_name(&self) -> String {
        if self.front_text.is_empty() {
            format!("Design {}", self.records.len() + 1)
        } else {
            self.front_text.chars().take(NAME_PREFIX_CHARS).collect()
        }
    }

    fn reset_to_defaults(&mut self) {
        self.editing_id = None;
        self.views = ViewStates::from_saved(
            Default::default(),
            Default::default(),
            self.views.current_side(),
        );
        self.garment_color = GarmentColor::default();
        self.front_text.clear();
        self.back_text.clear();
        self.style = TextStyle::default();
        self.profile = BodyProfile::default();
        self.size = GarmentSize::default();
        self.theme_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn session_in(dir: &tempfile::TempDir) -> DesignSession {
        DesignSession::new(DesignStore::new(dir.path().join("designs.json")))
    }

    #[test]
    fn save_enters_editing_mode() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        session.set_active_text("Hello");

        let id = session.save().unwrap();
        assert_eq!(session.editing_id(), Some(id));
        assert_eq!(session.records().len(), 1);

        // A second save updates rather than duplicating.
        session.set_active_text("Hello again");
        let second = session.save().unwrap();
        assert_eq!(second, id);
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].data.front_text, "Hello again");
    }

    #[test]
    fn name_derives_from_front_text_prefix() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        session.set_active_text("Hello\nWorld");
        session.save().unwrap();
        assert_eq!(session.records()[0].name, "Hello\nWorld");

        session.new_design();
        session.set_active_text("This text is definitely longer than twenty characters");
        session.save().unwrap();
        let name = &session.records()[1].name;
        assert_eq!(name.chars().count(), 20);
        assert!("This text is definitely longer".starts_with(name.as_str()));
    }

    #[test]
    fn empty_front_text_uses_positional_fallback() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        session.save().unwrap();
        assert_eq!(session.records()[0].name, "Design 1");

        session.new_design();
        session.save().unwrap();
        assert_eq!(session.records()[1].name, "Design 2");
    }

    #[test]
    fn update_preserves_created_at_and_position() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        session.set_active_text("first");
        session.save().unwrap();
        session.new_design();
        session.set_active_text("second");
        let id = session.save().unwrap();

        let created = session.records()[1].created_at;
        let updated_before = session.records()[1].updated_at;

        session.set_active_text("second, edited");
        session.update().unwrap();

        let record = &session.records()[1];
        assert_eq!(record.id, id);
        assert_eq!(record.created_at, created);
        assert!(record.updated_at >= updated_before);
        assert_eq!(session.records()[0].data.front_text, "first");
    }

    #[test]
    fn update_outside_editing_mode_is_rejected() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        assert!(matches!(session.update(), Err(SessionError::NotEditing)));
    }

    #[test]
    fn invalid_height_blocks_save_with_field_error() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        session.profile_mut().height_cm = 50;

        match session.save() {
            Err(SessionError::Invalid(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "height");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(session.records().is_empty());
        assert!(!session.is_editing());
    }

    #[test]
    fn load_restores_every_attribute() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);

        session.set_active_text("front line");
        session.views_mut().toggle_side();
        session.set_active_text("back line");
        session.views_mut().zoom_in();
        session.set_garment_color(GarmentColor::Navy);
        session.style_mut().bold = true;
        session.profile_mut().height_cm = 172;
        session.set_size(GarmentSize::L);
        session.cycle_theme();
        let id = session.save().unwrap();
        let saved = session.records()[0].clone();

        session.new_design();
        assert_eq!(session.text(Side::Front), "");

        session.load(id).unwrap();
        assert_eq!(session.editing_id(), Some(id));
        assert_eq!(session.text(Side::Front), "front line");
        assert_eq!(session.text(Side::Back), "back line");
        assert_eq!(session.garment_color(), GarmentColor::Navy);
        assert!(session.style().bold);
        assert_eq!(session.profile().height_cm, 172);
        assert_eq!(session.size(), GarmentSize::L);
        assert_eq!(session.theme_index(), 1);
        assert_eq!(session.views().view(Side::Back), &saved.data.back);
    }

    #[test]
    fn load_unknown_id_is_not_found() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        let missing = Uuid::new_v4();
        assert!(matches!(
            session.load(missing),
            Err(SessionError::NotFound(id)) if id == missing
        ));
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        session.set_active_text("a");
        let first = session.save().unwrap();
        session.new_design();
        session.set_active_text("b");
        session.save().unwrap();
        session.new_design();

        assert!(session.delete(first).unwrap());
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].data.front_text, "b");

        // Deleting again is a no-op.
        assert!(!session.delete(first).unwrap());
    }

    #[test]
    fn deleting_the_edited_record_resets_to_defaults() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        session.set_active_text("doomed");
        session.views_mut().zoom_in();
        session.cycle_theme();
        let id = session.save().unwrap();

        session.delete(id).unwrap();
        assert!(!session.is_editing());
        assert_eq!(session.text(Side::Front), "");
        assert_eq!(session.profile(), &BodyProfile::default());
        assert_eq!(session.views().active().zoom, 1.0);
        assert_eq!(session.theme_index(), 0);
        assert_eq!(session.size(), GarmentSize::M);
    }

    #[test]
    fn new_design_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        session.set_active_text("scratch");
        session.views_mut().zoom_in();

        session.new_design();
        let once = session.snapshot();
        session.new_design();
        assert_eq!(session.snapshot(), once);
        assert_eq!(once, DesignData::default());
    }

    #[test]
    fn cycle_theme_wraps() {
        let dir = tempdir().unwrap();
        let mut session = session_in(&dir);
        for _ in 0..theme::theme_count() {
            session.cycle_theme();
        }
        assert_eq!(session.theme_index(), 0);
    }
}
