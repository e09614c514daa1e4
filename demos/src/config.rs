use serde::{Deserialize, Serialize};

use rayframe::{Camera3D, WindowConfig};

/// Everything a demo needs before its window opens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub camera: Camera3D,
}
