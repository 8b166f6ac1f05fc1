//! Data models for saved designs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Build, FontColor, FontFamily, FontSize, GarmentColor, GarmentSize};
use crate::image::EncodedImage;

/// A 2D offset in preview coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Zoom bounds for the preview surface.
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 2.0;
/// Zoom change per step.
pub const ZOOM_STEP: f32 = 0.1;

fn default_zoom() -> f32 {
    1.0
}

/// Per-side view state: uploaded image, text anchor, zoom, and pan.
///
/// Every field has a serde default so records written before a field
/// existed still load (missing anchor/pan become {0,0}, missing zoom 1.0).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewState {
    /// Inline-encoded design image, if one has been uploaded for this side.
    #[serde(default)]
    pub image: Option<EncodedImage>,
    /// Committed position of the text overlay.
    #[serde(default)]
    pub text_anchor: Offset,
    /// Preview zoom factor, always within [`MIN_ZOOM`, `MAX_ZOOM`].
    #[serde(default = "default_zoom")]
    pub zoom: f32,
    /// Preview pan offset.
    #[serde(default)]
    pub pan: Offset,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            image: None,
            text_anchor: Offset::ZERO,
            zoom: 1.0,
            pan: Offset::ZERO,
        }
    }
}

impl ViewState {
    /// Step the zoom up, saturating at [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    /// Step the zoom down, saturating at [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Restore zoom to 1.0. Also recenters the pan.
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
        self.pan = Offset::ZERO;
    }
}

/// Text styling shared across both sides.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextStyle {
    #[serde(default)]
    pub family: FontFamily,
    #[serde(default)]
    pub size: FontSize,
    #[serde(default)]
    pub color: FontColor,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

/// Body measurements used for fit guidance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BodyProfile {
    pub height_cm: u32,
    pub weight_kg: u32,
    pub build: Build,
}

impl Default for BodyProfile {
    fn default() -> Self {
        Self {
            height_cm: 180,
            weight_kg: 80,
            build: Build::Athletic,
        }
    }
}

/// The complete snapshot persisted inside a [`DesignRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DesignData {
    #[serde(default)]
    pub garment_color: GarmentColor,
    #[serde(default)]
    pub front: ViewState,
    #[serde(default)]
    pub back: ViewState,
    #[serde(default)]
    pub front_text: String,
    #[serde(default)]
    pub back_text: String,
    #[serde(default)]
    pub style: TextStyle,
    #[serde(default)]
    pub profile: BodyProfile,
    #[serde(default)]
    pub size: GarmentSize,
    /// Index into the built-in theme catalog.
    #[serde(default)]
    pub theme: usize,
}

/// A saved, named design snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignRecord {
    /// Unique identifier, fixed at first save.
    pub id: Uuid,
    /// Display name derived from the front text (duplicates allowed).
    pub name: String,
    /// When the design was first saved. Never changes on update.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every save.
    pub updated_at: DateTime<Utc>,
    /// The design snapshot.
    pub data: DesignData,
}

impl DesignRecord {
    /// Create a new record with a fresh id and current timestamps.
    pub fn new(name: impl Into<String>, data: DesignData) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            data,
        }
    }
}
