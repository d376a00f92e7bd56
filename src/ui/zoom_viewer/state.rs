// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking and overlay lifecycle of the zoom viewer.
//!
//! [`State::handle`] is a reducer: it updates the state for one message and
//! returns the side effects the caller must apply to its [`OverlayHost`].
//! It never touches the host itself, which keeps the math and the lifecycle
//! testable without a UI.
//!
//! ## Lifecycle
//!
//! ```text
//!            enter                      fade reaches 1
//! Hidden ──────────────> FadingIn ─────────────────────> Shown
//!   ^    (mount overlay)   │  ^                            │
//!   │                 exit │  │ enter (re-target,          │ exit
//!   │                      v  │  reuse overlay)            v
//!   └──────────────────── FadingOut <──────────────────────┘
//!    fade reaches 0
//!   (unmount overlay)
//! ```
//!
//! [`OverlayHost`]: super::overlay::OverlayHost

use super::config::ZoomViewerConfig;
use super::geometry;
use super::overlay::{MountRequest, OverlayHandle};
use crate::ui::state::{Settled, Transition};
use iced::Point;
use std::time::Instant;

/// Zoom viewer runtime state.
///
/// Persists across hover sessions; pointer coordinates are never reset.
#[derive(Debug)]
pub struct State {
    /// Top-left of the preview box, clamped to the thumbnail.
    hover: Point,
    /// Pointer position normalized to `[-1, 1]` on each axis.
    zoom_hover: Point,
    /// Whether the preview box and magnifier are part of the render tree.
    preview_visible: bool,
    /// Floating magnifier surface, present from enter until fade-out ends.
    overlay: Option<OverlayHandle>,
    /// Shared opacity driver of the preview box and the magnifier.
    fade: Transition,
}

/// Messages for the zoom viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer moved, in thumbnail-local coordinates.
    PointerMoved(Point),
    /// Pointer entered the thumbnail.
    PointerEntered,
    /// Pointer left the thumbnail.
    PointerExited,
    /// Animation frame.
    Tick,
}

/// Side effects to apply to the overlay host, in order.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Mount a surface, then hand its token back through
    /// [`State::attach_overlay`].
    MountOverlay(MountRequest),
    /// Re-render the mounted surface.
    RedrawOverlay,
    /// Release this surface.
    UnmountOverlay(OverlayHandle),
}

impl State {
    #[must_use]
    pub fn new(config: &ZoomViewerConfig) -> Self {
        Self {
            hover: Point::ORIGIN,
            zoom_hover: Point::ORIGIN,
            preview_visible: false,
            overlay: None,
            fade: Transition::new(config.zoom_animation_duration),
        }
    }

    /// Handle a zoom viewer message.
    ///
    /// `config` must be the validated configuration the state was created
    /// with. `now` is the instant the message is processed at.
    pub fn handle(&mut self, config: &ZoomViewerConfig, msg: Message, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Message::PointerMoved(local) => {
                self.track_pointer(config, local);
                if self.overlay.is_some() {
                    effects.push(Effect::RedrawOverlay);
                }
            }
            Message::PointerEntered => {
                if self.overlay.is_none() {
                    effects.push(Effect::MountOverlay(MountRequest::trailing(
                        config.dimension,
                    )));
                }
                self.preview_visible = true;
                // A zero-length fade completes here; nothing else to do for a show
                let _ = self.fade.forward(now);
            }
            Message::PointerExited => {
                if let Some(Settled::Dismissed) = self.fade.reverse(now) {
                    self.finish_hide(&mut effects);
                }
            }
            Message::Tick => {
                let settled = self.fade.tick(now);
                if let Some(Settled::Dismissed) = settled {
                    self.finish_hide(&mut effects);
                } else if (settled.is_some() || self.fade.is_animating()) && self.overlay.is_some()
                {
                    effects.push(Effect::RedrawOverlay);
                }
            }
        }
        effects
    }

    /// Stores the token of a surface mounted for [`Effect::MountOverlay`].
    ///
    /// Returns a token that was already held, which the caller must unmount.
    /// This only happens if effects were applied out of order.
    #[must_use]
    pub fn attach_overlay(&mut self, handle: OverlayHandle) -> Option<OverlayHandle> {
        self.overlay.replace(handle)
    }

    /// Gives up the overlay for teardown, whatever the fade is doing.
    ///
    /// The fade is left as is; the state stays consistent because the
    /// preview is hidden at the same time.
    #[must_use]
    pub fn release_overlay(&mut self) -> Option<OverlayHandle> {
        self.preview_visible = false;
        self.overlay.take()
    }

    fn track_pointer(&mut self, config: &ZoomViewerConfig, local: Point) {
        let dimension = config.dimension;
        let preview_size = config.preview_size;
        self.hover = Point::new(
            geometry::preview_origin(local.x, dimension, preview_size),
            geometry::preview_origin(local.y, dimension, preview_size),
        );
        self.zoom_hover = Point::new(
            geometry::normalized(local.x, dimension),
            geometry::normalized(local.y, dimension),
        );
    }

    fn finish_hide(&mut self, effects: &mut Vec<Effect>) {
        self.preview_visible = false;
        if let Some(handle) = self.overlay.take() {
            effects.push(Effect::UnmountOverlay(handle));
        }
    }

    /// Top-left of the preview box.
    #[must_use]
    pub fn hover(&self) -> Point {
        self.hover
    }

    /// Normalized pointer position.
    #[must_use]
    pub fn zoom_hover(&self) -> Point {
        self.zoom_hover
    }

    #[must_use]
    pub fn is_preview_visible(&self) -> bool {
        self.preview_visible
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&OverlayHandle> {
        self.overlay.as_ref()
    }

    /// Fade progress in `[0, 1]`, used as opacity.
    #[must_use]
    pub fn animation_progress(&self) -> f32 {
        self.fade.progress()
    }

    /// Returns true while the fade needs animation ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fade.is_animating()
    }
}
