// SPDX-License-Identifier: MPL-2.0
//! Application-wide layer of floating surfaces.
//!
//! The layer is the app's [`OverlayHost`]: it records which surfaces are
//! mounted, where they are anchored and whether their content must be
//! redrawn. Screens render the mounted surfaces on top of their own content.

use crate::ui::zoom_viewer::overlay::{MountRequest, OverlayHandle, OverlayHost, SurfaceId};
use iced::widget::canvas;
use std::fmt;

/// A mounted surface and its render cache.
pub struct Surface {
    id: SurfaceId,
    request: MountRequest,
    /// Cleared whenever the owner reports a content change.
    cache: canvas::Cache,
    revision: u64,
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("id", &self.id)
            .field("request", &self.request)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Surface {
    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    #[must_use]
    pub fn request(&self) -> MountRequest {
        self.request
    }

    #[must_use]
    pub fn cache(&self) -> &canvas::Cache {
        &self.cache
    }

    /// Number of redraw requests received since mounting.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Floating surfaces mounted by widgets, in mount order.
#[derive(Debug, Default)]
pub struct FloatingLayer {
    surfaces: Vec<Surface>,
    next_id: u64,
}

impl FloatingLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.iter().find(|surface| surface.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl OverlayHost for FloatingLayer {
    fn mount(&mut self, request: MountRequest) -> OverlayHandle {
        self.next_id += 1;
        let id = SurfaceId::new(self.next_id);
        self.surfaces.push(Surface {
            id,
            request,
            cache: canvas::Cache::new(),
            revision: 0,
        });
        tracing::debug!(surface = id.value(), "floating surface mounted");
        OverlayHandle::new(id)
    }

    fn mark_needs_redraw(&mut self, handle: &OverlayHandle) {
        if let Some(surface) = self.surfaces.iter_mut().find(|s| s.id == handle.id()) {
            surface.cache.clear();
            surface.revision += 1;
        }
    }

    fn unmount(&mut self, handle: OverlayHandle) {
        let id = handle.id();
        let before = self.surfaces.len();
        self.surfaces.retain(|surface| surface.id != id);
        if self.surfaces.len() == before {
            tracing::warn!(surface = id.value(), "unmount of unknown floating surface");
        } else {
            tracing::debug!(surface = id.value(), "floating surface unmounted");
        }
    }
}
