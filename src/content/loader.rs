//! Loader for the motion content file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{MOTION_SCHEMA_VERSION, MotionFile};

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a motion file from RON text.
pub fn parse_motion_ron(file: &str, contents: &str) -> Result<MotionFile, ContentLoadError> {
    let data: MotionFile = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;
    check_motion_file(file, data)
}

/// Parse a motion file from JSON text.
pub fn parse_motion_json(file: &str, contents: &str) -> Result<MotionFile, ContentLoadError> {
    let data: MotionFile = serde_json::from_str(contents).map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })?;
    check_motion_file(file, data)
}

/// Reject files from another schema, or whose tuning breaks an invariant.
fn check_motion_file(file: &str, data: MotionFile) -> Result<MotionFile, ContentLoadError> {
    if data.schema_version != MOTION_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!(
                "schema_version {} is not supported (expected {})",
                data.schema_version, MOTION_SCHEMA_VERSION
            ),
        });
    }

    if !data.fixed_hz.is_finite() || data.fixed_hz <= 0.0 {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!("fixed_hz must be positive (got {})", data.fixed_hz),
        });
    }

    data.player.validate().map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Invalid player tuning: {}", e),
    })?;

    Ok(data)
}

/// Load a motion file, picking the format from its extension (.json, otherwise RON).
pub fn load_motion_file(path: &Path) -> Result<MotionFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_motion_json(&file_name, &contents),
        _ => parse_motion_ron(&file_name, &contents),
    }
}
