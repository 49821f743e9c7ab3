//! Units attached to fitted rate-law coefficients.
//!
//! Unit strings follow the comma separated convention of mechanism files:
//! the pre-exponential units are given as `"length,quantity,time,temperature"`
//! (for example `"cm,mol,s,K"`) and the activation energy units as
//! `"energy,quantity,temperature"` (for example `"cal,mol,K"`) or simply `"K"`
//! when the activation energy is already an activation temperature.
//! Strings are resolved once per rate-law kind into a [`RateLawUnits`] object
//! which is then handed to every rate-law parser.
use crate::Kinetics::constants::{CAL, NA, QE, RU};
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::rate_laws::RateLawKind;
use log::error;
use std::collections::BTreeMap;

pub const DEFAULT_A_UNITS: &str = "m,mol,s,K";
pub const DEFAULT_E_UNITS: &str = "J,mol,K";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthUnit {
    M,
    Cm,
    Mm,
}

impl LengthUnit {
    /// length of one unit in meters
    pub fn in_si(&self) -> f64 {
        match self {
            LengthUnit::M => 1.0,
            LengthUnit::Cm => 1.0e-2,
            LengthUnit::Mm => 1.0e-3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityUnit {
    Mol,
    Kmol,
    Molecule,
}

impl QuantityUnit {
    /// number of moles in one unit
    pub fn in_si(&self) -> f64 {
        match self {
            QuantityUnit::Mol => 1.0,
            QuantityUnit::Kmol => 1.0e3,
            QuantityUnit::Molecule => 1.0 / NA,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeUnit {
    S,
    Ms,
    Us,
}

impl TimeUnit {
    pub fn in_si(&self) -> f64 {
        match self {
            TimeUnit::S => 1.0,
            TimeUnit::Ms => 1.0e-3,
            TimeUnit::Us => 1.0e-6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnergyUnit {
    J,
    KJ,
    Cal,
    Kcal,
    EV,
}

impl EnergyUnit {
    pub fn in_si(&self) -> f64 {
        match self {
            EnergyUnit::J => 1.0,
            EnergyUnit::KJ => 1.0e3,
            EnergyUnit::Cal => CAL,
            EnergyUnit::Kcal => 1.0e3 * CAL,
            EnergyUnit::EV => QE,
        }
    }
}

fn unknown(unit: &str, units: &str) -> KineticsError {
    error!("unknown unit '{}' in '{}'", unit, units);
    KineticsError::UnknownUnit {
        unit: unit.to_owned(),
        units: units.to_owned(),
    }
}

fn split_units(units: &str) -> Vec<&str> {
    units
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_length(s: &str, units: &str) -> Result<LengthUnit, KineticsError> {
    match s {
        "m" => Ok(LengthUnit::M),
        "cm" => Ok(LengthUnit::Cm),
        "mm" => Ok(LengthUnit::Mm),
        _ => Err(unknown(s, units)),
    }
}

fn parse_quantity(s: &str, units: &str) -> Result<QuantityUnit, KineticsError> {
    match s {
        "mol" => Ok(QuantityUnit::Mol),
        "kmol" => Ok(QuantityUnit::Kmol),
        "molecule" | "molecules" => Ok(QuantityUnit::Molecule),
        _ => Err(unknown(s, units)),
    }
}

fn parse_time(s: &str, units: &str) -> Result<TimeUnit, KineticsError> {
    match s {
        "s" => Ok(TimeUnit::S),
        "ms" => Ok(TimeUnit::Ms),
        "us" => Ok(TimeUnit::Us),
        _ => Err(unknown(s, units)),
    }
}

fn parse_energy(s: &str, units: &str) -> Result<EnergyUnit, KineticsError> {
    match s {
        "J" => Ok(EnergyUnit::J),
        "kJ" => Ok(EnergyUnit::KJ),
        "cal" => Ok(EnergyUnit::Cal),
        "kcal" => Ok(EnergyUnit::Kcal),
        "eV" => Ok(EnergyUnit::EV),
        _ => Err(unknown(s, units)),
    }
}

fn check_kelvin(s: &str, units: &str) -> Result<(), KineticsError> {
    if s == "K" { Ok(()) } else { Err(unknown(s, units)) }
}

/// units of a pre-exponential factor, (L^3/Q)^(order-1)/t
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreExponentialUnits {
    pub length: LengthUnit,
    pub quantity: QuantityUnit,
    pub time: TimeUnit,
}

impl PreExponentialUnits {
    pub fn parse(units: &str) -> Result<Self, KineticsError> {
        let tokens = split_units(units);
        if tokens.len() != 4 {
            return Err(KineticsError::MalformedUnits(units.to_owned()));
        }
        let length = parse_length(tokens[0], units)?;
        let quantity = parse_quantity(tokens[1], units)?;
        let time = parse_time(tokens[2], units)?;
        check_kelvin(tokens[3], units)?;
        Ok(Self {
            length,
            quantity,
            time,
        })
    }
    /// factor converting a pre-exponential factor of a reaction of given order to SI (m, mol, s)
    pub fn factor(&self, order: i32) -> f64 {
        let volume_per_quantity = self.length.in_si().powi(3) / self.quantity.in_si();
        volume_per_quantity.powi(order - 1) / self.time.in_si()
    }
}

/// units of an activation energy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationUnits {
    /// the activation energy is already a temperature
    Kelvin,
    PerQuantity {
        energy: EnergyUnit,
        quantity: QuantityUnit,
    },
}

impl ActivationUnits {
    pub fn parse(units: &str) -> Result<Self, KineticsError> {
        let tokens = split_units(units);
        match tokens.len() {
            1 => {
                check_kelvin(tokens[0], units)?;
                Ok(ActivationUnits::Kelvin)
            }
            3 => {
                let energy = parse_energy(tokens[0], units)?;
                let quantity = parse_quantity(tokens[1], units)?;
                check_kelvin(tokens[2], units)?;
                Ok(ActivationUnits::PerQuantity { energy, quantity })
            }
            _ => Err(KineticsError::MalformedUnits(units.to_owned())),
        }
    }
    /// converts an activation energy into an activation temperature (K)
    pub fn to_temperature(&self, ea: f64) -> f64 {
        match self {
            ActivationUnits::Kelvin => ea,
            ActivationUnits::PerQuantity { energy, quantity } => {
                ea * energy.in_si() / quantity.in_si() / RU
            }
        }
    }
}

/// resolved units for one rate-law kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LawUnits {
    pub a_units: PreExponentialUnits,
    pub e_units: ActivationUnits,
}

impl LawUnits {
    pub fn parse(a_units: &str, e_units: &str) -> Result<Self, KineticsError> {
        Ok(Self {
            a_units: PreExponentialUnits::parse(a_units)?,
            e_units: ActivationUnits::parse(e_units)?,
        })
    }
}

impl Default for LawUnits {
    fn default() -> Self {
        Self {
            a_units: PreExponentialUnits {
                length: LengthUnit::M,
                quantity: QuantityUnit::Mol,
                time: TimeUnit::S,
            },
            e_units: ActivationUnits::PerQuantity {
                energy: EnergyUnit::J,
                quantity: QuantityUnit::Mol,
            },
        }
    }
}

/// unit table for every rate-law kind, resolved once and passed to the rate-law parsers
#[derive(Debug, Clone, Default)]
pub struct RateLawUnits {
    per_kind: BTreeMap<RateLawKind, LawUnits>,
}

impl RateLawUnits {
    pub fn new() -> Self {
        Self::default()
    }
    /// resolves the unit strings of one rate-law kind
    pub fn register(
        &mut self,
        kind: RateLawKind,
        a_units: &str,
        e_units: &str,
    ) -> Result<(), KineticsError> {
        let units = LawUnits::parse(a_units, e_units)?;
        self.per_kind.insert(kind, units);
        Ok(())
    }
    /// units of a rate-law kind, SI defaults when the kind was never registered
    pub fn get(&self, kind: RateLawKind) -> LawUnits {
        self.per_kind.get(&kind).copied().unwrap_or_default()
    }
}
