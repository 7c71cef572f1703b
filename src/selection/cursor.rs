use glam::Vec2;

/// Low-pass filtered screen-space cursor.
///
/// The first sample seeds the position directly; later samples move it by
/// `(raw - smooth) * (1 - K)`.
#[derive(Debug, Clone)]
pub struct SmoothedCursor {
    smoothing: f32,
    mirror_x: bool,
    position: Option<Vec2>,
}

impl SmoothedCursor {
    /// Create an uninitialized cursor with low-pass factor `smoothing`
    /// (0 follows the raw sample, 1 never moves).
    #[must_use]
    pub fn new(smoothing: f32, mirror_x: bool) -> Self {
        Self {
            smoothing: smoothing.clamp(0.0, 1.0),
            mirror_x,
            position: None,
        }
    }

    /// Feed a normalized image point (`[0, 1]`, y down) and a viewport size
    /// in pixels. Returns the smoothed pixel position.
    pub fn update(&mut self, normalized: Vec2, viewport: Vec2) -> Vec2 {
        let x = if self.mirror_x {
            1.0 - normalized.x
        } else {
            normalized.x
        };
        let raw = Vec2::new(x, normalized.y) * viewport;
        let next = match self.position {
            None => raw,
            Some(smooth) => smooth + (raw - smooth) * (1.0 - self.smoothing),
        };
        self.position = Some(next);
        next
    }

    /// Smoothed pixel position, once seeded.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Whether a sample has seeded the cursor.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.position.is_some()
    }

    /// Forget the position; the next sample seeds it again.
    pub fn reset(&mut self) {
        self.position = None;
    }
}

/// Pixel position to normalized device coordinates (x right, y up).
#[must_use]
pub fn pixel_to_ndc(pixel: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        pixel.x / viewport.x * 2.0 - 1.0,
        -(pixel.y / viewport.y) * 2.0 + 1.0,
    )
}
