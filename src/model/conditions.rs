use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{KohlrahbiError, Result};
use crate::model::EdifactFormat;

/// Column holding the condition number.
pub const CONDITION_KEY_COLUMN: &str = "condition_key";
/// Column holding the condition text.
pub const CONDITION_TEXT_COLUMN: &str = "condition_text";
/// Columns of every conditions table, in their canonical order.
pub const CONDITION_COLUMNS: [&str; 2] = [CONDITION_KEY_COLUMN, CONDITION_TEXT_COLUMN];

/// A single condition, e.g. `[1] Wenn SG4 STS+7++ZE1 vorhanden`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionRow {
    /// Condition number without the surrounding brackets.
    pub condition_key: String,
    /// Text of the condition as written in the AHB.
    pub condition_text: String,
}

impl ConditionRow {
    pub fn new(condition_key: impl Into<String>, condition_text: impl Into<String>) -> Self {
        Self {
            condition_key: condition_key.into(),
            condition_text: condition_text.into(),
        }
    }
}

/// Ordered table of conditions with the fixed columns [`CONDITION_COLUMNS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionsTable {
    rows: Vec<ConditionRow>,
}

impl ConditionsTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<ConditionRow>) -> Self {
        Self { rows }
    }

    /// Coerces a generic table of named columns and string cells.
    ///
    /// The columns may come in any order but must be exactly
    /// `condition_key` and `condition_text`. Every row needs one cell per
    /// column.
    pub fn from_records<S: AsRef<str>>(columns: &[S], records: Vec<Vec<String>>) -> Result<Self> {
        let mut key_index = None;
        let mut text_index = None;

        for (index, column) in columns.iter().enumerate() {
            let slot = match column.as_ref() {
                CONDITION_KEY_COLUMN => &mut key_index,
                CONDITION_TEXT_COLUMN => &mut text_index,
                other => {
                    return Err(KohlrahbiError::Validation(format!(
                        "unexpected column '{other}' in conditions table"
                    )));
                }
            };
            if slot.replace(index).is_some() {
                return Err(KohlrahbiError::Validation(format!(
                    "duplicate column '{}' in conditions table",
                    column.as_ref()
                )));
            }
        }

        let (Some(key_index), Some(text_index)) = (key_index, text_index) else {
            return Err(KohlrahbiError::Validation(format!(
                "conditions table requires the columns {CONDITION_COLUMNS:?}"
            )));
        };

        let mut rows = Vec::with_capacity(records.len());
        for (row_idx, mut record) in records.into_iter().enumerate() {
            if record.len() != columns.len() {
                return Err(KohlrahbiError::Validation(format!(
                    "row {row_idx} has {} cells, expected {}",
                    record.len(),
                    columns.len()
                )));
            }
            let condition_text = std::mem::take(&mut record[text_index]);
            let condition_key = std::mem::take(&mut record[key_index]);
            rows.push(ConditionRow {
                condition_key,
                condition_text,
            });
        }

        Ok(Self { rows })
    }

    pub fn columns(&self) -> [&'static str; 2] {
        CONDITION_COLUMNS
    }

    pub fn rows(&self) -> &[ConditionRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConditionRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: ConditionRow) {
        self.rows.push(row);
    }

    /// Appends all rows of `other` after the rows already present.
    pub fn append(&mut self, other: ConditionsTable) {
        self.rows.extend(other.rows);
    }

    /// Returns the text of the last row carrying `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.rows
            .iter()
            .rev()
            .find(|row| row.condition_key == key)
            .map(|row| row.condition_text.as_str())
    }

    /// Collapses the table to one row per key, sorted by key.
    ///
    /// Later rows overwrite earlier rows with the same key.
    pub fn merged(self) -> ConditionsTable {
        let mut by_key: BTreeMap<ConditionKey, String> = BTreeMap::new();
        for row in self.rows {
            by_key.insert(ConditionKey(row.condition_key), row.condition_text);
        }
        let rows = by_key
            .into_iter()
            .map(|(key, text)| ConditionRow::new(key.0, text))
            .collect();
        Self { rows }
    }
}

impl IntoIterator for ConditionsTable {
    type Item = ConditionRow;
    type IntoIter = std::vec::IntoIter<ConditionRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConditionsTable {
    type Item = &'a ConditionRow;
    type IntoIter = std::slice::Iter<'a, ConditionRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<ConditionRow> for ConditionsTable {
    fn from_iter<I: IntoIterator<Item = ConditionRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Orders numeric keys numerically and before any non-numeric key.
#[derive(Debug, PartialEq, Eq)]
struct ConditionKey(String);

impl ConditionKey {
    /// Only plain ASCII digit keys count as numeric.
    fn numeric(&self) -> Option<u64> {
        if self.0.is_empty() || !self.0.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        self.0.parse().ok()
    }
}

impl Ord for ConditionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(lhs), Some(rhs)) => lhs.cmp(&rhs).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ConditionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The conditions extracted from the AHB of one EDIFACT format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAhbConditions")]
pub struct AhbConditions {
    edifact_format: Option<EdifactFormat>,
    conditions: ConditionsTable,
}

impl AhbConditions {
    pub fn new(edifact_format: Option<EdifactFormat>, conditions: ConditionsTable) -> Self {
        Self {
            edifact_format,
            conditions,
        }
    }

    /// Parses and validates a JSON document.
    ///
    /// Malformed JSON is reported as [`KohlrahbiError::Json`]; well-formed
    /// JSON without a usable `conditions` table as
    /// [`KohlrahbiError::Validation`].
    pub fn from_json(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawAhbConditions = serde_json::from_value(value)
            .map_err(|error| KohlrahbiError::Validation(error.to_string()))?;
        Self::try_from(raw)
    }

    pub fn edifact_format(&self) -> Option<EdifactFormat> {
        self.edifact_format
    }

    pub fn conditions(&self) -> &ConditionsTable {
        &self.conditions
    }

    pub fn into_parts(self) -> (Option<EdifactFormat>, ConditionsTable) {
        (self.edifact_format, self.conditions)
    }
}

/// Accepted on-disk shapes before validation.
#[derive(Deserialize)]
struct RawAhbConditions {
    #[serde(default)]
    edifact_format: Option<EdifactFormat>,
    #[serde(default)]
    conditions: Option<RawTable>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTable {
    Rows(Vec<ConditionRow>),
    Records {
        columns: Vec<String>,
        data: Vec<Vec<String>>,
    },
}

impl TryFrom<RawAhbConditions> for AhbConditions {
    type Error = KohlrahbiError;

    fn try_from(raw: RawAhbConditions) -> Result<Self> {
        let conditions = match raw.conditions {
            Some(RawTable::Rows(rows)) => ConditionsTable::from_rows(rows),
            Some(RawTable::Records { columns, data }) => {
                ConditionsTable::from_records(columns.as_slice(), data)?
            }
            None => {
                return Err(KohlrahbiError::Validation(
                    "missing required field 'conditions'".into(),
                ));
            }
        };
        Ok(Self::new(raw.edifact_format, conditions))
    }
}
