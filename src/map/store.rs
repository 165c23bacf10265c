// src/map/store.rs

use crate::error::Result;
use crate::map::Geofence;
use log::info;
use parking_lot::RwLock;
use std::sync::Arc;

/// Holds the current geofence snapshot.
///
/// Planners take a snapshot once per session and keep using it; installing a
/// new geofence never changes a snapshot that has already been handed out.
/// Clones share the same current geofence.
#[derive(Clone)]
pub struct GeofenceStore {
    current: Arc<RwLock<Arc<Geofence>>>,
}

impl GeofenceStore {
    pub fn new(geofence: Geofence) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(geofence))),
        }
    }

    pub fn snapshot(&self) -> Arc<Geofence> {
        Arc::clone(&*self.current.read())
    }

    /// Installs `geofence` and returns the snapshot it replaced.
    pub fn replace(&self, geofence: Geofence) -> Arc<Geofence> {
        info!(
            "Installing geofence with {} no-fly zones",
            geofence.no_fly_zones().len()
        );
        let mut current = self.current.write();
        std::mem::replace(&mut *current, Arc::new(geofence))
    }

    /// Parses and installs a geofence; the current one is kept on error.
    pub fn load_json(&self, json: &str) -> Result<()> {
        let geofence = Geofence::from_json_str(json)?;
        self.replace(geofence);
        Ok(())
    }
}
