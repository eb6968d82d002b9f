//! Typed data model for AHB conditions and the selectors of an extraction run.

mod conditions;
mod enums;

pub use conditions::{
    AhbConditions, CONDITION_COLUMNS, CONDITION_KEY_COLUMN, CONDITION_TEXT_COLUMN, ConditionRow,
    ConditionsTable,
};
pub use enums::{EdifactFormat, Flavour, OutputFormat};
