//! Device capability profiles.
//!
//! A profile stands in for the host browser environment: whether the device
//! reports touch support and how large the viewport is. Profiles load from
//! JSON so tests and the CLI can swap devices without code changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceProfile {
    pub name: String,
    /// Whether the environment exposes touch event handlers.
    pub touch_events: bool,
    /// Reported `navigator.maxTouchPoints`.
    pub max_touch_points: u32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::desktop()
    }
}

impl DeviceProfile {
    pub fn desktop() -> Self {
        Self {
            name: "desktop".to_owned(),
            touch_events: false,
            max_touch_points: 0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
        }
    }

    pub fn touch() -> Self {
        Self {
            name: "touch".to_owned(),
            touch_events: true,
            max_touch_points: 5,
            viewport_width: 390.0,
            viewport_height: 844.0,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Touch capability the way the page scripts probe for it: either touch
    /// event support or a nonzero touch point count counts as touch.
    pub fn supports_touch(&self) -> bool {
        self.touch_events || self.max_touch_points > 0
    }
}
