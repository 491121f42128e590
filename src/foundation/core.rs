use crate::foundation::error::{VernissageError, VernissageResult};

pub use kurbo::{Rect, Vec2};

/// Absolute frame counter on the engine's update loop.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> VernissageResult<Self> {
        if den == 0 {
            return Err(VernissageError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(VernissageError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Nearest frame count for a duration in seconds. A positive duration
    /// never rounds down to zero frames.
    pub fn secs_to_frames(self, secs: f64) -> u64 {
        if secs <= 0.0 {
            return 0;
        }
        ((secs * self.as_f64()).round() as u64).max(1)
    }
}

/// Visible window dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> VernissageResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(VernissageError::validation(
                "Viewport dimensions must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }
}
