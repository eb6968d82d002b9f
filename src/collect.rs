use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::{KohlrahbiError, Result};
use crate::io::conditions_json;
use crate::model::{AhbConditions, ConditionsTable, EdifactFormat, Flavour};

/// Merges conditions documents per EDIFACT format and stores one
/// `<FORMAT>/conditions.json` per format below `output_dir`.
///
/// Conditions already stored in `output_dir` are kept unless an input
/// redefines their key. Among the inputs, later files win. Returns the
/// written paths in format order.
#[instrument(
    level = "info",
    skip_all,
    fields(flavour = %Flavour::Conditions, inputs = inputs.len(), output = %output_dir.display())
)]
pub fn collect_conditions(inputs: &[PathBuf], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut by_format: BTreeMap<EdifactFormat, ConditionsTable> = BTreeMap::new();

    for input in inputs {
        if !input.exists() {
            return Err(KohlrahbiError::MissingInput(input.clone()));
        }
        let (format, table) = conditions_json::read_conditions(input)?.into_parts();
        let format = format.ok_or_else(|| {
            KohlrahbiError::Validation(format!(
                "{} does not name an EDIFACT format",
                input.display()
            ))
        })?;
        debug!(input = %input.display(), %format, rows = table.len(), "read conditions");
        by_format.entry(format).or_default().append(table);
    }

    let mut merged = Vec::with_capacity(by_format.len());
    for (format, collected) in by_format {
        let path = conditions_json::conditions_path(output_dir, format);
        let mut table = if path.exists() {
            read_stored(&path, format)?
        } else {
            ConditionsTable::new()
        };
        table.append(collected);
        merged.push((format, path, table.merged()));
    }

    // Nothing is written until every stored file has been validated.
    let mut written = Vec::with_capacity(merged.len());
    for (format, path, table) in merged {
        info!(%format, conditions = table.len(), path = %path.display(), "storing conditions");
        conditions_json::write_conditions(&path, &AhbConditions::new(Some(format), table))?;
        written.push(path);
    }

    Ok(written)
}

/// Reads the stored conditions of `format`, rejecting files that belong to
/// another format.
fn read_stored(path: &Path, format: EdifactFormat) -> Result<ConditionsTable> {
    let (stored_format, existing) = conditions_json::read_conditions(path)?.into_parts();
    if stored_format != Some(format) {
        return Err(KohlrahbiError::Validation(format!(
            "{} holds conditions of {}, expected {format}",
            path.display(),
            stored_format.map_or("no EDIFACT format", |stored| stored.as_str())
        )));
    }
    debug!(%format, rows = existing.len(), "merging with stored conditions");
    Ok(existing)
}
