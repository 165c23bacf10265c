// src/map/mod.rs
pub mod geofence;
pub mod polygon;
pub mod store;

pub use geofence::Geofence;
pub use polygon::Polygon;
pub use store::GeofenceStore;
