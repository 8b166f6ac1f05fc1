pub mod catalog;
pub mod data;
pub mod image;
pub mod session;
pub mod theme;
pub mod util;

pub use catalog::{Build, FontColor, FontFamily, FontSize, GarmentColor, GarmentSize, Side};
pub use data::{
    BodyProfile, DesignData, DesignRecord, DesignStore, Offset, StorageError, TextStyle, ViewState,
};
pub use image::{ingest, ingest_bytes, EncodedImage, IngestError, MAX_IMAGE_BYTES};
pub use session::{DesignSession, FieldError, SessionError, ViewStates};
pub use theme::{builtin_themes, next_theme_index, theme_at, Theme};
