//! Summary display state

use raven_view_types::VisualState;

/// Latest value of one display and whether it crossed its threshold
#[derive(Debug, Clone)]
pub struct DisplayState {
    threshold: f64,
    value: f64,
    visual: VisualState,
}

impl DisplayState {
    pub fn new(threshold: f64) -> Self {
        let mut state = Self {
            threshold,
            value: 0.0,
            visual: VisualState::Normal,
        };
        state.update(0.0);
        state
    }

    /// Store `value`; warning is inclusive of the threshold itself
    pub fn update(&mut self, value: f64) {
        self.value = value;
        self.visual = if value >= self.threshold {
            VisualState::Warning
        } else {
            VisualState::Normal
        };
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn visual(&self) -> VisualState {
        self.visual
    }
}
