//! Progress indicator model (position label + scrub bar).
//!
//! The shell renders whatever this holds. Label and bar share a single
//! visibility flag so they can never be shown independently.

/// Resolution of the scrub bar value.
pub const PROGRESS_SCALE: u32 = 65536;

/// Scale a normalized position to `[0, PROGRESS_SCALE]`.
pub fn to_progress_value(fraction: f64) -> u32 {
    (fraction.clamp(0.0, 1.0) * PROGRESS_SCALE as f64).round() as u32
}

/// Inverse of [`to_progress_value`].
pub fn to_fraction(value: u32) -> f64 {
    value.min(PROGRESS_SCALE) as f64 / PROGRESS_SCALE as f64
}

/// Fraction of the bar under a pointer at `x` on a bar `width` wide.
pub fn pointer_fraction(x: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    (x / width).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Default)]
pub struct ProgressIndicator {
    label: String,
    value: u32,
    visible: bool,
}

impl ProgressIndicator {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            ..Self::default()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Scrub bar value in `[0, PROGRESS_SCALE]`.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn set_value(&mut self, value: u32) {
        self.value = value.min(PROGRESS_SCALE);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn label_visible(&self) -> bool {
        self.visible
    }

    pub fn bar_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide label and bar together.
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }
}
