//! Interface to the thermodynamic side of a mixture.
//!
//! The species database, the polynomial fits and the state model live outside of
//! this crate; the kinetics only needs a snapshot of the temperatures and a few
//! per-species quantities which are requested through the [`Thermodynamics`] trait.

/// snapshot of the thermodynamic state of a multi-temperature mixture
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_snake_case)]
pub struct ThermoState {
    /// translational temperature, K
    pub T: f64,
    /// vibrational temperature, K
    pub Tv: f64,
    /// electron temperature, K
    pub Te: f64,
    /// pressure, Pa
    pub P: f64,
}

#[allow(non_snake_case)]
impl ThermoState {
    pub fn new(T: f64, Tv: f64, Te: f64, P: f64) -> Self {
        Self { T, Tv, Te, P }
    }
    /// thermal equilibrium: every temperature equals T
    pub fn equilibrium(T: f64, P: f64) -> Self {
        Self::new(T, T, T, P)
    }
    pub fn T(&self) -> f64 {
        self.T
    }
    pub fn Tv(&self) -> f64 {
        self.Tv
    }
    pub fn Te(&self) -> f64 {
        self.Te
    }
    pub fn P(&self) -> f64 {
        self.P
    }
}

/// kind of particle a species represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleType {
    Electron,
    Atom,
    Molecule,
}

/// which part of the species enthalpy is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnthalpyComponent {
    /// formation enthalpy
    Formation,
    /// vibrational energy contribution
    Vibrational,
}

/// thermodynamic collaborator used by the rate manager, the third-body manager
/// and the energy transfer source terms
pub trait Thermodynamics {
    /// current state of the mixture
    fn state(&self) -> &ThermoState;
    /// number of species
    fn n_species(&self) -> usize;
    /// number of lumped species groups
    fn n_sgroups(&self) -> usize;
    /// type of species `i`
    fn species_type(&self, i: usize) -> ParticleType;
    /// species Gibbs free energies over RT evaluated at temperature `t`
    fn species_g_over_rt(&self, t: f64, g: &mut [f64]);
    /// one component of the species enthalpies over RT at the given state
    fn species_h_over_rt(&self, state: &ThermoState, component: EnthalpyComponent, h: &mut [f64]);
    /// sums species values over the members of every lumped species group
    fn sum_sgroup_members_values(&self, species_values: &[f64], group_values: &mut [f64]);
}
