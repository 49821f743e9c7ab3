use crate::Thermodynamics::thermo_api::ThermoState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// which temperature of the state a forward or reverse rate coefficient is evaluated at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TemperatureSelector {
    /// translational temperature
    T,
    /// electron temperature
    Te,
    /// Park's average temperature sqrt(T*Tv)
    Park,
}

impl TemperatureSelector {
    pub fn temperature(&self, state: &ThermoState) -> f64 {
        match self {
            TemperatureSelector::T => state.T(),
            TemperatureSelector::Te => state.Te(),
            TemperatureSelector::Park => (state.T() * state.Tv()).sqrt(),
        }
    }
}

impl fmt::Display for TemperatureSelector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TemperatureSelector::T => write!(f, "T"),
            TemperatureSelector::Te => write!(f, "Te"),
            TemperatureSelector::Park => write!(f, "sqrt(T*Tv)"),
        }
    }
}

/// scalars derived from one selected temperature, shared by all members of a rate-law group
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_snake_case)]
pub struct TemperatureScalars {
    pub T: f64,
    pub lnT: f64,
    pub invT: f64,
    /// T squared
    pub sqT: f64,
}

impl TemperatureScalars {
    #[allow(non_snake_case)]
    pub fn new(T: f64) -> Self {
        Self {
            T,
            lnT: T.ln(),
            invT: 1.0 / T,
            sqT: T * T,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_selectors() {
        let state = ThermoState::new(10000.0, 4000.0, 8000.0, 101325.0);
        assert_eq!(TemperatureSelector::T.temperature(&state), 10000.0);
        assert_eq!(TemperatureSelector::Te.temperature(&state), 8000.0);
        assert_relative_eq!(
            TemperatureSelector::Park.temperature(&state),
            (4.0e7_f64).sqrt(),
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_park_in_equilibrium_is_t() {
        let state = ThermoState::equilibrium(3000.0, 1.0e5);
        assert_relative_eq!(
            TemperatureSelector::Park.temperature(&state),
            3000.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_scalars() {
        let s = TemperatureScalars::new(2000.0);
        assert_eq!(s.lnT, 2000.0_f64.ln());
        assert_eq!(s.invT, 1.0 / 2000.0);
        assert_eq!(s.sqT, 4.0e6);
    }
}
