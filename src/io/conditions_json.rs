use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{AhbConditions, EdifactFormat};

/// File name used for the conditions of one EDIFACT format.
pub const CONDITIONS_FILE_NAME: &str = "conditions.json";

/// Location of the conditions file of `format` below `output_dir`.
pub fn conditions_path(output_dir: &Path, format: EdifactFormat) -> PathBuf {
    output_dir.join(format.as_str()).join(CONDITIONS_FILE_NAME)
}

/// Reads and validates a conditions document.
pub fn read_conditions(path: &Path) -> Result<AhbConditions> {
    let source = fs::read_to_string(path)?;
    AhbConditions::from_json(&source)
}

/// Writes the conditions as pretty printed JSON, creating missing parent
/// directories.
pub fn write_conditions(path: &Path, conditions: &AhbConditions) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json_string = serde_json::to_string_pretty(conditions)?;
    fs::write(path, json_string)?;
    Ok(())
}
