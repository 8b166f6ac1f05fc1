//! View-scoped state for the two garment sides
//!
//! Holds one [`ViewState`] per side plus the active-side selector. Every
//! mutating operation targets the active side only; the other side is
//! never touched. Continuous pointer interactions (repositioning text,
//! panning) are modeled as discrete drag sessions: intermediate frames
//! are presentation-only, and the final position is committed exactly
//! once when the drag ends.

use crate::catalog::Side;
use crate::data::{Offset, ViewState};
use crate::image::EncodedImage;

/// Which drag interaction is currently in flight on the preview surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    Text,
    Pan,
}

/// Per-side view state with an active-side selector.
#[derive(Debug, Clone, Default)]
pub struct ViewStates {
    front: ViewState,
    back: ViewState,
    current: Side,
    /// Pan mode flag; while on, text dragging is disabled and vice versa.
    pan_mode: bool,
    drag: Option<Drag>,
}

impl ViewStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted state, e.g. when loading a saved design.
    /// Keeps the caller's current side selection; any in-flight drag and
    /// pan mode are cancelled.
    pub fn from_saved(front: ViewState, back: ViewState, current: Side) -> Self {
        Self {
            front,
            back,
            current,
            pan_mode: false,
            drag: None,
        }
    }

    /// The side mutations currently apply to.
    pub fn current_side(&self) -> Side {
        self.current
    }

    /// Select the side subsequent mutations apply to.
    pub fn set_side(&mut self, side: Side) {
        if self.current != side {
            self.current = side;
            self.drag = None;
        }
    }

    /// Switch to the other side.
    pub fn toggle_side(&mut self) {
        self.set_side(self.current.other());
    }

    /// Read-only view of either side.
    pub fn view(&self, side: Side) -> &ViewState {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    /// The active side's view state.
    pub fn active(&self) -> &ViewState {
        self.view(self.current)
    }

    fn active_mut(&mut self) -> &mut ViewState {
        match self.current {
            Side::Front => &mut self.front,
            Side::Back => &mut self.back,
        }
    }

    /// Whether pan mode is on.
    pub fn pan_mode(&self) -> bool {
        self.pan_mode
    }

    /// Toggle pan mode. Enabling it cancels a text drag in progress and
    /// vice versa: the two interactions share the preview surface.
    pub fn set_pan_mode(&mut self, on: bool) {
        self.pan_mode = on;
        self.drag = None;
    }

    /// Set or clear the active side's design image.
    pub fn set_image(&mut self, image: Option<EncodedImage>) {
        self.active_mut().image = image;
    }

    /// Step the active side's zoom up.
    pub fn zoom_in(&mut self) {
        self.active_mut().zoom_in();
    }

    /// Step the active side's zoom down.
    pub fn zoom_out(&mut self) {
        self.active_mut().zoom_out();
    }

    /// Reset the active side's zoom to 1.0 and recenter its pan.
    pub fn reset_zoom(&mut self) {
        self.active_mut().reset_zoom();
    }

    /// Begin a text-repositioning drag. No-op while pan mode is on.
    pub fn begin_text_drag(&mut self) {
        if !self.pan_mode {
            self.drag = Some(Drag::Text);
        }
    }

    /// Finish the text drag, committing the final anchor position once.
    /// Ignored when no text drag is in progress.
    pub fn end_text_drag(&mut self, at: Offset) {
        if self.drag.take() == Some(Drag::Text) {
            self.active_mut().text_anchor = at;
        }
    }

    /// Move the text anchor back to the origin.
    pub fn reset_text_anchor(&mut self) {
        self.active_mut().text_anchor = Offset::ZERO;
    }

    /// Begin a pan drag. No-op unless pan mode is on.
    pub fn begin_pan(&mut self) {
        if self.pan_mode {
            self.drag = Some(Drag::Pan);
        }
    }

    /// Finish the pan drag, committing the final pan offset once.
    pub fn end_pan(&mut self, at: Offset) {
        if self.drag.take() == Some(Drag::Pan) {
            self.active_mut().pan = at;
        }
    }
}
