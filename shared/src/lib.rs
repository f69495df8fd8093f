//! Shared core for the picker wheel
//!
//! Everything here is independent of the windowing stack: wedge geometry,
//! spin physics, the render display list, the item store and its
//! persistence/sharing formats.

pub mod config;
pub mod geometry;
pub mod physics;
pub mod render;
pub mod share;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod wheel;

pub use config::{load_config, save_config, ConfigError, WheelConfig};
pub use geometry::{
    colors, compute_wedges, normalize_degrees, wedge_at_pointer, CanvasMetrics, LayoutConfig,
    Point, Rgb, Wedge,
};
pub use physics::{clamp, PhysicsConfig, PhysicsConstants, PhysicsPreset, WheelState};
pub use render::{render, DisplayList, DrawCommand};
pub use share::{export_link, fragment_of};
pub use snapshot::SnapshotError;
pub use storage::{FileStorage, ItemStorage, MemoryStorage, StorageError};
pub use store::{ItemSource, ItemStore, ItemsSnapshot, MAX_ITEM_CHARS};
pub use wheel::{SpinOutcome, Wheel};
