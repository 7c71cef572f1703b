//! Navigation/Selecting state machine.
//!
//! Holding the pointer pose for `enter_frames` consecutive frames switches
//! to Selecting: camera motion is braked, a smoothed cursor follows the
//! index fingertip and a tap (or flick) picks the object under it. Losing
//! the pose for `exit_frames` consecutive frames, or losing every hand,
//! returns to Navigation.

use glam::Vec2;

use super::cursor::{pixel_to_ndc, SmoothedCursor};
use super::highlight::Highlight;
use crate::camera::{Camera, ControlMode, HandCameraController};
use crate::gesture::{
    is_pointing, FlickDetector, FrameHysteresis, ThumbTapDetector, Transition,
};
use crate::hand::{Hand, INDEX_TIP};
use crate::options::{
    GestureOptions, PointerStyle, SelectAim, SelectTrigger, SelectionOptions,
};
use crate::scene::SceneHost;

/// Top-level interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Hands steer the camera.
    #[default]
    Navigation,
    /// Camera is held; the pointer picks objects.
    Selecting,
}

/// Outcome of a pick trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A registered object became the selection.
    Selected {
        /// Newly selected name.
        name: String,
        /// Name that was selected before, if any.
        previous: Option<String>,
    },
    /// The pick landed on the object that was already selected.
    AlreadySelected {
        /// Selected name.
        name: String,
    },
    /// The pick hit no registered object; the selection is unchanged.
    Missed,
}

/// Drives selection mode and the camera controller from one hand stream.
pub struct SelectionController {
    options: SelectionOptions,
    pointer_style: PointerStyle,
    mode: FrameHysteresis,
    cursor: SmoothedCursor,
    cursor_visible: bool,
    tap: ThumbTapDetector,
    flick: FlickDetector,
    highlight: Highlight,
}

impl SelectionController {
    /// Create a controller in Navigation mode.
    #[must_use]
    pub fn new(options: SelectionOptions, gestures: &GestureOptions) -> Self {
        Self {
            mode: FrameHysteresis::new(
                options.enter_frames,
                options.exit_frames,
            ),
            cursor: SmoothedCursor::new(
                options.cursor_smoothing,
                options.mirror_x,
            ),
            cursor_visible: false,
            pointer_style: gestures.pointer_style,
            tap: ThumbTapDetector::new(gestures.tap_enter, gestures.tap_exit),
            flick: FlickDetector::new(
                gestures.flick_velocity,
                gestures.flick_cooldown_ms,
                gestures.pointer_style,
            ),
            highlight: Highlight::new(),
            options,
        }
    }

    /// Replace tuning parameters. Debouncer state starts over; the
    /// selection and its highlight are kept.
    pub fn apply_options(
        &mut self,
        options: SelectionOptions,
        gestures: &GestureOptions,
    ) {
        let highlight = std::mem::take(&mut self.highlight);
        *self = Self::new(options, gestures);
        self.highlight = highlight;
    }

    /// Update the viewport the cursor maps into.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.options.viewport_width = width;
        self.options.viewport_height = height;
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.mode.is_active() {
            InteractionMode::Selecting
        } else {
            InteractionMode::Navigation
        }
    }

    /// Smoothed cursor in viewport pixels, while it is shown.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor.position().filter(|_| self.cursor_visible)
    }

    /// Advance one frame.
    ///
    /// Steers `camera` with the mode appropriate to this frame and returns
    /// the outcome of any pick that fired.
    pub fn update(
        &mut self,
        hands: &[Hand],
        now_ms: f64,
        camera: &mut HandCameraController,
        host: &mut dyn SceneHost,
    ) -> Option<SelectionEvent> {
        self.cursor_visible = false;
        self.drop_stale_highlight(host);

        if hands.is_empty() {
            if self.mode.is_active() {
                log::debug!("hands lost, leaving selection mode");
            }
            self.mode.reset();
            self.forget_pointer();
            self.tap.reset();
            camera.update(&[], ControlMode::Coast);
            return None;
        }

        let pointer = hands.iter().find(|h| is_pointing(h, self.pointer_style));

        match self.mode.update(pointer.is_some()) {
            Transition::Entered => log::debug!("entering selection mode"),
            Transition::Exited => {
                log::debug!("leaving selection mode");
                self.forget_pointer();
            }
            Transition::Unchanged => {}
        }

        let Some(hand) = pointer.filter(|_| self.mode.is_active()) else {
            self.flick.lose_track();
            camera.update(hands, ControlMode::Normal);
            return None;
        };

        camera.stop_inertia();
        self.track_cursor(hand);
        let fired = match self.options.trigger {
            SelectTrigger::ThumbTap => self.tap.check(hand),
            SelectTrigger::Flick => self.flick.check(Some(hand), now_ms),
        };
        let event = fired.then(|| self.pick(&camera.camera, host));
        camera.update(&[], ControlMode::Brake);
        event
    }

    /// Drop the selection and restore its materials.
    pub fn clear_selection(&mut self, host: &mut dyn SceneHost) {
        self.highlight.restore(host);
        host.set_selected_name(None);
    }

    /// Restore the highlight if the host no longer selects the object it
    /// was applied to, e.g. after the name was unregistered.
    fn drop_stale_highlight(&mut self, host: &mut dyn SceneHost) {
        let Some(target) = self.highlight.target() else {
            return;
        };
        let still_selected = host
            .resolve_registered_ancestor(target)
            .is_some_and(|object| {
                object.node == target
                    && host.selected_name() == Some(object.name.as_str())
            });
        if !still_selected {
            log::debug!("selection dropped by the scene, restoring materials");
            self.highlight.restore(host);
        }
    }

    fn viewport(&self) -> Vec2 {
        Vec2::new(self.options.viewport_width, self.options.viewport_height)
    }

    fn track_cursor(&mut self, hand: &Hand) {
        if let Some(points) = hand.landmarks() {
            let _ = self.cursor.update(points[INDEX_TIP].xy(), self.viewport());
            self.cursor_visible = true;
        }
    }

    fn forget_pointer(&mut self) {
        self.cursor.reset();
        self.flick.lose_track();
    }

    fn pick(
        &mut self,
        camera: &Camera,
        host: &mut dyn SceneHost,
    ) -> SelectionEvent {
        let ndc = match self.options.aim {
            SelectAim::Cursor => self
                .cursor
                .position()
                .map_or(Vec2::ZERO, |p| pixel_to_ndc(p, self.viewport())),
            SelectAim::ScreenCenter => Vec2::ZERO,
        };
        let ray = camera.ray_from_ndc(ndc);
        let found = host
            .raycast(&ray)
            .into_iter()
            .find_map(|hit| host.resolve_registered_ancestor(hit.node));

        let Some(found) = found else {
            log::debug!("pick at {ndc} hit nothing registered");
            return SelectionEvent::Missed;
        };

        let previous = host.selected_name().map(str::to_owned);
        if previous.as_deref() == Some(found.name.as_str())
            && self.highlight.target() == Some(found.node)
        {
            return SelectionEvent::AlreadySelected { name: found.name };
        }

        self.highlight.apply(
            host,
            found.node,
            self.options.highlight_emissive,
            self.options.highlight_intensity,
        );
        host.set_selected_name(Some(found.name.clone()));
        log::debug!("selected '{}' (was {:?})", found.name, previous);
        SelectionEvent::Selected {
            name: found.name,
            previous,
        }
    }
}
