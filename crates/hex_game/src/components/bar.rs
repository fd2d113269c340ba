use hex_math::Vec2;

/// A horizontal fill bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    position: Vec2,
    width: f32,
    fill: f32,
}

impl ProgressBar {
    /// A full bar whose left end sits at `position`.
    #[must_use]
    pub fn new(position: Vec2, width: f32) -> Self {
        Self {
            position,
            width,
            fill: 1.0,
        }
    }

    /// Set the fill fraction, clamped to `0.0..=1.0`.
    pub fn set_fill(&mut self, fill: f32) {
        self.fill = fill.clamp(0.0, 1.0);
    }

    /// Move the bar's top-left corner to `position`.
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    #[must_use]
    pub fn fill(&self) -> f32 {
        self.fill
    }

    /// Width of the filled part in pixels.
    #[must_use]
    pub fn filled_width(&self) -> f32 {
        self.width * self.fill
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }
}
