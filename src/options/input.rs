use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer and wheel sensitivities plus the click/drag threshold.
pub struct InputOptions {
    /// Orbit angle change per horizontal pixel dragged (radians).
    #[schemars(title = "Rotate Speed", range(min = 0.0005, max = 0.02), extend("step" = 0.0005))]
    pub rotate_speed: f32,
    /// Height change per vertical pixel dragged.
    #[schemars(title = "Pan Speed", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Radius change per wheel unit.
    #[schemars(title = "Zoom Speed", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Pointer travel (pixels) below which a press/release is a click.
    #[schemars(title = "Click Threshold", range(min = 1.0, max = 30.0), extend("step" = 1.0))]
    pub click_threshold: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.004,
            pan_speed: 0.5,
            zoom_speed: 0.5,
            click_threshold: 5.0,
        }
    }
}
