//! Float limits and slider position mapping

/// Absolute range of a `Float` setting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub float_min: f32,
    pub float_max: f32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            float_min: 0.0,
            float_max: 1.0,
        }
    }
}

impl Limits {
    pub fn new(float_min: f32, float_max: f32) -> Self {
        Self {
            float_min,
            float_max,
        }
    }

    /// The range must be finite and non-empty, otherwise the mapping divides by zero
    pub fn is_valid(&self) -> bool {
        self.float_min.is_finite() && self.float_max.is_finite() && self.float_max > self.float_min
    }

    pub fn span(&self) -> f32 {
        self.float_max - self.float_min
    }

    /// Map a slider position in `[0, 1]` to the absolute value that gets stored
    pub fn to_absolute(&self, position: f32) -> f32 {
        self.float_min + self.span() * position
    }

    /// Slider position a row starts at for a stored value.
    ///
    /// This divides by the span without subtracting `float_min` first, so it
    /// only inverts [`Limits::to_absolute`] when `float_min` is 0. Existing
    /// settings files depend on the same starting positions.
    pub fn initial_position(&self, value: f32) -> f32 {
        value / self.span()
    }
}
