//! Data definitions for the motion content file.
//!
//! Mirrors assets/data/motion.ron and is used for deserialization.

use serde::{Deserialize, Serialize};

use crate::movement::MotionConfig;

/// Schema version this build understands.
pub const MOTION_SCHEMA_VERSION: u32 = 1;

fn default_fixed_hz() -> f64 {
    50.0
}

/// Top-level motion file (motion.ron / motion.json).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MotionFile {
    pub schema_version: u32,
    /// Fixed simulation rate the tuning was authored for.
    #[serde(default = "default_fixed_hz")]
    pub fixed_hz: f64,
    /// Player tuning. Missing fields take their defaults.
    #[serde(default)]
    pub player: MotionConfig,
}

impl Default for MotionFile {
    fn default() -> Self {
        Self {
            schema_version: MOTION_SCHEMA_VERSION,
            fixed_hz: default_fixed_hz(),
            player: MotionConfig::default(),
        }
    }
}
