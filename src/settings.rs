//! # Settings Module
//!
//! ## Purpose
//! Holds the user configuration of the kinetics: the units in which the fitted
//! coefficients of every rate-law kind are written and the log level.
//! Settings are read from a JSON file and resolved once into a [`RateLawUnits`]
//! table that is handed to the rate-law parsers.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "units": {
//!     "arrhenius":    { "a_units": "cm,mol,s,K", "e_units": "cal,mol,K" },
//!     "rational_exp": { "a_units": "m,mol,s,K",  "e_units": "K" }
//!   },
//!   "log_level": "info"
//! }
//! ```
//! Kinds missing from `"units"` use SI (`"m,mol,s,K"`, `"J,mol,K"`).
//!
//! ## Usage Pattern
//! ```ignore
//! use KiRate::settings::KineticsSettings;
//!
//! let settings = KineticsSettings::from_file("kinetics_settings.json")?;
//! let units = settings.resolve_units()?;
//! ```

use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::rate_law_units::{DEFAULT_A_UNITS, DEFAULT_E_UNITS, RateLawUnits};
use crate::Kinetics::rate_laws::RateLawKind;
use log::{LevelFilter, error, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// unit strings of one rate-law kind as written in the settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitStrings {
    pub a_units: String,
    pub e_units: String,
}

impl Default for UnitStrings {
    fn default() -> Self {
        Self {
            a_units: DEFAULT_A_UNITS.to_string(),
            e_units: DEFAULT_E_UNITS.to_string(),
        }
    }
}

/// Kinetics configuration.
///
/// # Fields
/// * `units` - unit strings per rate-law kind
/// * `log_level` - optional level name ("error", "warn", "info", "debug", "trace", "off")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticsSettings {
    pub units: BTreeMap<RateLawKind, UnitStrings>,
    pub log_level: Option<String>,
}

impl Default for KineticsSettings {
    /// SI units for every rate-law kind, no log level
    fn default() -> Self {
        let units = RateLawKind::ALL
            .iter()
            .map(|kind| (*kind, UnitStrings::default()))
            .collect();
        Self {
            units,
            log_level: None,
        }
    }
}

impl KineticsSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from a JSON string.
    ///
    /// # Errors
    /// `KineticsError::SerdeError` when the JSON is malformed or a rate-law kind is unknown
    pub fn from_json_str(json: &str) -> Result<Self, KineticsError> {
        serde_json::from_str(json).map_err(|e| {
            error!("failed to parse kinetics settings: {}", e);
            KineticsError::from(e)
        })
    }

    /// Loads settings from a JSON file.
    ///
    /// # Errors
    /// `KineticsError::IoError` when the file can not be read, otherwise as [`Self::from_json_str`]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, KineticsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            error!("failed to read kinetics settings {}: {}", path.display(), e);
            KineticsError::from(e)
        })?;
        let settings = Self::from_json_str(&content)?;
        info!("kinetics settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Writes settings as pretty JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), KineticsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Sets the unit strings of one rate-law kind, checking them first.
    pub fn set_units(&mut self, kind: RateLawKind, a_units: &str, e_units: &str) -> Result<(), KineticsError> {
        RateLawUnits::new().register(kind, a_units, e_units)?;
        self.units.insert(
            kind,
            UnitStrings {
                a_units: a_units.to_string(),
                e_units: e_units.to_string(),
            },
        );
        Ok(())
    }

    /// Resolves every unit string into the table used by the rate-law parsers.
    ///
    /// # Errors
    /// `UnknownUnit` or `MalformedUnits` for the first unit string that does not parse
    pub fn resolve_units(&self) -> Result<RateLawUnits, KineticsError> {
        let mut units = RateLawUnits::new();
        for (kind, strings) in &self.units {
            units
                .register(*kind, &strings.a_units, &strings.e_units)
                .inspect_err(|e| error!("units of {}: {}", kind, e))?;
        }
        Ok(units)
    }

    /// Log level filter, `None` when not configured.
    pub fn log_level(&self) -> Result<Option<LevelFilter>, KineticsError> {
        match &self.log_level {
            None => Ok(None),
            Some(level) => level
                .parse::<LevelFilter>()
                .map(Some)
                .map_err(|_| KineticsError::InvalidLogLevel(level.clone())),
        }
    }
}
