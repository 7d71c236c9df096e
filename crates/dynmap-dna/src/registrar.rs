//! The rendering-asset registrar the builder reports to.

use std::cell::RefCell;

use dynmap_model::MapId;

/// Host hook for rendering assets.
///
/// Both calls are fire-and-forget: the builder never inspects a result.
pub trait AssetRegistrar {
    /// Requests that the map rendering library bundle be loaded on the page.
    fn preload_library(&self);

    /// Requests that the runtime initialize `map_id` once the page has loaded.
    fn register_init(&self, map_id: &MapId);
}

/// A registrar that ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRegistrar;

impl AssetRegistrar for NoopRegistrar {
    fn preload_library(&self) {}

    fn register_init(&self, _map_id: &MapId) {}
}

/// A request received by a [`RecordingRegistrar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrarCall {
    PreloadLibrary,
    RegisterInit(MapId),
}

/// A registrar that keeps every request in order.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    calls: RefCell<Vec<RegistrarCall>>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the requests received so far.
    pub fn calls(&self) -> Vec<RegistrarCall> {
        self.calls.borrow().clone()
    }

    /// Drains the requests received so far.
    pub fn take(&self) -> Vec<RegistrarCall> {
        self.calls.take()
    }
}

impl AssetRegistrar for RecordingRegistrar {
    fn preload_library(&self) {
        self.calls.borrow_mut().push(RegistrarCall::PreloadLibrary);
    }

    fn register_init(&self, map_id: &MapId) {
        self.calls
            .borrow_mut()
            .push(RegistrarCall::RegisterInit(map_id.clone()));
    }
}
