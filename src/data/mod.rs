//! Data persistence layer
//!
//! This module provides the design record models and the file-backed
//! JSON store for the saved-design collection.

mod models;
mod store;

pub use models::{
    BodyProfile, DesignData, DesignRecord, Offset, TextStyle, ViewState, MAX_ZOOM, MIN_ZOOM,
    ZOOM_STEP,
};
pub use store::{DesignStore, StorageError};
