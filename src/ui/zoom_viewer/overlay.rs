// SPDX-License-Identifier: MPL-2.0
//! Floating overlay ownership.
//!
//! The viewer never renders its magnifier into its own layout box. It asks an
//! [`OverlayHost`] to mount a floating surface and receives an
//! [`OverlayHandle`] in exchange. The handle is move-only: giving it back
//! through [`OverlayHost::unmount`] consumes it, so a surface cannot be
//! released twice and a released surface cannot be referenced again.

use iced::{Size, Vector};

/// Identifier of a mounted surface, unique within one host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Ownership token for a mounted surface.
///
/// Deliberately neither `Clone` nor `Copy`.
#[derive(Debug, PartialEq, Eq)]
pub struct OverlayHandle {
    id: SurfaceId,
}

impl OverlayHandle {
    /// Creates a token for a surface the host has just mounted.
    ///
    /// Only hosts should call this.
    #[must_use]
    pub fn new(id: SurfaceId) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.id
    }
}

/// Placement and size of a surface to mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountRequest {
    /// Offset of the surface's top-left corner from the thumbnail's top-left.
    pub origin: Vector,
    /// Surface size.
    pub size: Size,
}

impl MountRequest {
    /// A square surface of edge `dimension`, flush against the trailing edge
    /// of a thumbnail of the same size.
    #[must_use]
    pub fn trailing(dimension: f32) -> Self {
        Self {
            origin: Vector::new(dimension, 0.0),
            size: Size::new(dimension, dimension),
        }
    }
}

/// Capability supplied by the host UI layer to mount floating surfaces.
pub trait OverlayHost {
    /// Mounts a new surface and hands back its ownership token.
    fn mount(&mut self, request: MountRequest) -> OverlayHandle;

    /// Asks the host to re-render the surface's content.
    fn mark_needs_redraw(&mut self, handle: &OverlayHandle);

    /// Releases the surface. Consumes the token.
    fn unmount(&mut self, handle: OverlayHandle);
}
