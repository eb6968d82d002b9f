//! Closed, string-valued selectors used by the extraction tooling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KohlrahbiError;

/// Kind of extraction run that is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavour {
    /// Extract the AHB tables of single Pruefidentifikatoren.
    Pruefi,
    /// Extract the change history tables.
    ChangeHistory,
    /// Extract the conditions of each EDIFACT format.
    Conditions,
}

impl Flavour {
    /// Every flavour, in declaration order.
    pub const ALL: [Flavour; 3] = [Flavour::Pruefi, Flavour::ChangeHistory, Flavour::Conditions];

    /// Returns the string value used on the command line and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavour::Pruefi => "pruefi",
            Flavour::ChangeHistory => "changehistory",
            Flavour::Conditions => "conditions",
        }
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavour {
    type Err = KohlrahbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pruefi" => Ok(Flavour::Pruefi),
            "changehistory" => Ok(Flavour::ChangeHistory),
            "conditions" => Ok(Flavour::Conditions),
            _ => Err(KohlrahbiError::UnknownFlavour(s.to_string())),
        }
    }
}

/// Serialization target of an extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Comma separated values.
    #[serde(rename = "csv")]
    Csv,
    /// Excel workbook.
    #[serde(rename = "xlsx", alias = "excel")]
    Excel,
    /// Flat JSON extract consumed by the C# tooling.
    #[serde(rename = "flatahb", alias = "c_sharp_extract")]
    CSharpExtract,
}

impl OutputFormat {
    /// Every output format, in declaration order.
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Csv,
        OutputFormat::Excel,
        OutputFormat::CSharpExtract,
    ];

    /// Returns the string value used on the command line and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Excel => "xlsx",
            OutputFormat::CSharpExtract => "flatahb",
        }
    }

    /// File extension (without the dot) of files written in this format.
    pub fn file_extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Excel => "xlsx",
            OutputFormat::CSharpExtract => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = KohlrahbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "xlsx" | "excel" => Ok(OutputFormat::Excel),
            "flatahb" | "c_sharp_extract" => Ok(OutputFormat::CSharpExtract),
            _ => Err(KohlrahbiError::UnknownOutputFormat(s.to_string())),
        }
    }
}

/// EDIFACT message types covered by the application handbooks.
///
/// UTILMD is split into its gas (`UTILMDG`) and electricity (`UTILMDS`)
/// variants for the handbooks that distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EdifactFormat {
    Aperak,
    Comdis,
    Contrl,
    Iftsta,
    Insrpt,
    Invoic,
    Mscons,
    Ordchg,
    Orders,
    Ordrsp,
    Partin,
    Pricat,
    Quotes,
    Remadv,
    Reqote,
    Utilmd,
    Utilmdg,
    Utilmds,
    Utilts,
}

impl EdifactFormat {
    /// Every EDIFACT format, in declaration order.
    pub const ALL: [EdifactFormat; 19] = [
        EdifactFormat::Aperak,
        EdifactFormat::Comdis,
        EdifactFormat::Contrl,
        EdifactFormat::Iftsta,
        EdifactFormat::Insrpt,
        EdifactFormat::Invoic,
        EdifactFormat::Mscons,
        EdifactFormat::Ordchg,
        EdifactFormat::Orders,
        EdifactFormat::Ordrsp,
        EdifactFormat::Partin,
        EdifactFormat::Pricat,
        EdifactFormat::Quotes,
        EdifactFormat::Remadv,
        EdifactFormat::Reqote,
        EdifactFormat::Utilmd,
        EdifactFormat::Utilmdg,
        EdifactFormat::Utilmds,
        EdifactFormat::Utilts,
    ];

    /// Returns the upper-case message type name, e.g. `UTILMD`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdifactFormat::Aperak => "APERAK",
            EdifactFormat::Comdis => "COMDIS",
            EdifactFormat::Contrl => "CONTRL",
            EdifactFormat::Iftsta => "IFTSTA",
            EdifactFormat::Insrpt => "INSRPT",
            EdifactFormat::Invoic => "INVOIC",
            EdifactFormat::Mscons => "MSCONS",
            EdifactFormat::Ordchg => "ORDCHG",
            EdifactFormat::Orders => "ORDERS",
            EdifactFormat::Ordrsp => "ORDRSP",
            EdifactFormat::Partin => "PARTIN",
            EdifactFormat::Pricat => "PRICAT",
            EdifactFormat::Quotes => "QUOTES",
            EdifactFormat::Remadv => "REMADV",
            EdifactFormat::Reqote => "REQOTE",
            EdifactFormat::Utilmd => "UTILMD",
            EdifactFormat::Utilmdg => "UTILMDG",
            EdifactFormat::Utilmds => "UTILMDS",
            EdifactFormat::Utilts => "UTILTS",
        }
    }

    /// Determines the EDIFACT format a Pruefidentifikator belongs to.
    ///
    /// A Pruefidentifikator consists of exactly five ASCII digits and does
    /// not start with zero. Its first two digits select the format.
    pub fn from_pruefidentifikator(pruefi: &str) -> Result<Self, KohlrahbiError> {
        let pruefi = pruefi.trim();
        let well_formed = pruefi.len() == 5
            && pruefi.bytes().all(|byte| byte.is_ascii_digit())
            && !pruefi.starts_with('0');
        if !well_formed {
            return Err(KohlrahbiError::InvalidPruefidentifikator(pruefi.to_string()));
        }

        let format = match &pruefi[..2] {
            "99" => EdifactFormat::Aperak,
            "29" => EdifactFormat::Comdis,
            "21" => EdifactFormat::Iftsta,
            "23" => EdifactFormat::Insrpt,
            "31" => EdifactFormat::Invoic,
            "13" => EdifactFormat::Mscons,
            "39" => EdifactFormat::Ordchg,
            "17" => EdifactFormat::Orders,
            "19" => EdifactFormat::Ordrsp,
            "27" => EdifactFormat::Pricat,
            "15" => EdifactFormat::Quotes,
            "33" => EdifactFormat::Remadv,
            "35" => EdifactFormat::Reqote,
            "37" => EdifactFormat::Partin,
            "11" => EdifactFormat::Utilmd,
            "25" => EdifactFormat::Utilts,
            "44" => EdifactFormat::Utilmdg,
            "55" => EdifactFormat::Utilmds,
            _ => return Err(KohlrahbiError::UnknownPruefidentifikator(pruefi.to_string())),
        };
        Ok(format)
    }
}

impl fmt::Display for EdifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdifactFormat {
    type Err = KohlrahbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        EdifactFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| KohlrahbiError::UnknownEdifactFormat(s.to_string()))
    }
}
