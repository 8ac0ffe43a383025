use serde::{Deserialize, Serialize};

/// Largest width or height accepted for the chart image.
pub const MAX_DIMENSION: u32 = 8192;

/// How the chart is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChartOptions {
    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Plot each observation one day before it was taken
    #[serde(default = "default_shift_back_one_day")]
    pub shift_back_one_day: bool,
}

const fn default_width() -> u32 {
    1024
}

const fn default_height() -> u32 {
    400
}

const fn default_shift_back_one_day() -> bool {
    true
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            shift_back_one_day: default_shift_back_one_day(),
        }
    }
}
