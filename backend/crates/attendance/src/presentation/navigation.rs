//! Navigation
//!
//! Tracks the current screen. Leaving for any screen that does not own the
//! camera stops every camera track, so the device is free for the next
//! view that needs it.

use std::sync::Arc;

use crate::domain::repository::Camera;
use crate::domain::value_objects::Route;

/// Client navigator
pub struct Navigator<C>
where
    C: Camera,
{
    current: Route,
    camera: Arc<C>,
}

impl<C> Navigator<C>
where
    C: Camera,
{
    pub fn new(camera: Arc<C>, start: Route) -> Self {
        Self {
            current: start,
            camera,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Move to `to`, returning the previous route
    pub fn navigate(&mut self, to: Route) -> Route {
        if !to.uses_camera() {
            self.camera.stop_tracks();
            tracing::debug!(route = ?to, "Stopped all camera tracks");
        }
        tracing::debug!(from = ?self.current, to = ?to, "Navigate");
        std::mem::replace(&mut self.current, to)
    }
}
