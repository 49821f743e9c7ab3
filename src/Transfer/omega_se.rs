//! Energy source terms of spontaneous emission (bound-bound radiative) processes.
use crate::Kinetics::constants::RU;
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::mechanism::ReactionMechanism;
use crate::Kinetics::reaction::ReactionType;
use crate::Thermodynamics::thermo_api::{EnthalpyComponent, ParticleType, Thermodynamics};
use crate::Transfer::transfer_api::TransferModel;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// reactions of the mechanism of spontaneous emission type
fn emission_reactions(mech: &ReactionMechanism) -> Vec<usize> {
    mech.reactions()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.reaction_type() == ReactionType::BoundBoundEmission)
        .map(|(i, _)| i)
        .collect()
}

/// scratch arrays shared by both emission models
#[derive(Debug, Clone)]
struct EmissionBuffers {
    h: Vec<f64>,
    delta: Vec<f64>,
    rop: Vec<f64>,
}

impl EmissionBuffers {
    fn new(ns: usize, nr: usize) -> Self {
        Self {
            h: vec![0.0; ns],
            delta: vec![0.0; nr],
            rop: vec![0.0; nr],
        }
    }
    /// reaction change of one enthalpy component over RT and the net rates of progress
    fn fill(
        &mut self,
        mech: &mut ReactionMechanism,
        thermo: &dyn Thermodynamics,
        component: EnthalpyComponent,
        conc: &[f64],
    ) {
        thermo.species_h_over_rt(thermo.state(), component, &mut self.h);
        mech.reaction_delta(&self.h, &mut self.delta);
        mech.net_rates_of_progress(thermo, conc, &mut self.rop);
    }
}

/////////////////////////FORMATION ENTHALPY///////////////////////////////////////////////////////////////
/// energy released by spontaneous emission counting only formation enthalpies, J/(m^3 s).
/// Source term of the total energy equation.
#[derive(Debug, Clone)]
pub struct OmegaSEf {
    reactions: Vec<usize>,
    buffers: EmissionBuffers,
}

impl OmegaSEf {
    pub fn new(mech: &ReactionMechanism) -> Self {
        let reactions = emission_reactions(mech);
        info!("OmegaSEf: {} spontaneous emission reactions", reactions.len());
        Self {
            reactions,
            buffers: EmissionBuffers::new(mech.n_species(), mech.n_reactions()),
        }
    }
    pub fn reactions(&self) -> &[usize] {
        &self.reactions
    }
}

impl TransferModel for OmegaSEf {
    fn source(&mut self, mech: &mut ReactionMechanism, thermo: &dyn Thermodynamics, conc: &[f64]) -> f64 {
        if self.reactions.is_empty() {
            return 0.0;
        }
        self.buffers
            .fill(mech, thermo, EnthalpyComponent::Formation, conc);
        let src: f64 = self
            .reactions
            .iter()
            .map(|&j| self.buffers.delta[j] * self.buffers.rop[j])
            .sum();
        src * RU * thermo.state().T()
    }
}

/////////////////////////VIBRATIONAL ENERGY///////////////////////////////////////////////////////////////
/// average vibrational energy gained in one emission process as a rational
/// function of Tv, J/mol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedSEVibSourceTerm {
    pub formula: String,
    #[serde(default)]
    pub a0: f64,
    #[serde(default)]
    pub a1: f64,
    #[serde(default)]
    pub a2: f64,
    #[serde(default)]
    pub a3: f64,
    #[serde(default)]
    pub b0: f64,
    #[serde(default)]
    pub b1: f64,
    #[serde(default)]
    pub b2: f64,
}

#[allow(non_snake_case)]
impl FittedSEVibSourceTerm {
    pub fn rate(&self, Tv: f64) -> f64 {
        (self.a0 + (self.a1 + (self.a2 + self.a3 * Tv) * Tv) * Tv)
            / (self.b0 + (self.b1 + self.b2 * Tv) * Tv)
    }
}

/// fitted vibrational gain terms of every known emission transition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SEVibSourceData {
    pub transitions: Vec<FittedSEVibSourceTerm>,
}

impl SEVibSourceData {
    pub fn from_json_str(json: &str) -> Result<Self, KineticsError> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, KineticsError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
    pub fn find(&self, formula: &str) -> Option<&FittedSEVibSourceTerm> {
        self.transitions.iter().find(|t| t.formula == formula)
    }
}

/// vibrational energy removed by spontaneous emission of molecules, J/(m^3 s).
/// The vibrational energy change counted by the chemistry-vibration coupling is
/// replaced with the fitted gain of each transition.
#[derive(Debug, Clone)]
pub struct OmegaSEv {
    reactions: Vec<usize>,
    source_terms: Vec<FittedSEVibSourceTerm>,
    buffers: EmissionBuffers,
}

impl OmegaSEv {
    pub fn new(
        mech: &ReactionMechanism,
        thermo: &dyn Thermodynamics,
        data: &SEVibSourceData,
    ) -> Result<Self, KineticsError> {
        let reactions: Vec<usize> = emission_reactions(mech)
            .into_iter()
            .filter(|&i| {
                mech.reactions()[i]
                    .reactants()
                    .first()
                    .is_some_and(|(s, _)| thermo.species_type(*s) == ParticleType::Molecule)
            })
            .collect();
        let mut source_terms = Vec::with_capacity(reactions.len());
        for &i in &reactions {
            let formula = mech.reactions()[i].formula();
            match data.find(formula) {
                Some(term) => source_terms.push(term.clone()),
                None => {
                    error!("OmegaSEv: no fitted source term for transition {}", formula);
                    return Err(KineticsError::MissingTransferData(formula.to_owned()));
                }
            }
        }
        info!("OmegaSEv: {} molecular spontaneous emission reactions", reactions.len());
        Ok(Self {
            reactions,
            source_terms,
            buffers: EmissionBuffers::new(mech.n_species(), mech.n_reactions()),
        })
    }
    pub fn reactions(&self) -> &[usize] {
        &self.reactions
    }
}

impl TransferModel for OmegaSEv {
    fn source(&mut self, mech: &mut ReactionMechanism, thermo: &dyn Thermodynamics, conc: &[f64]) -> f64 {
        if self.reactions.is_empty() {
            return 0.0;
        }
        self.buffers
            .fill(mech, thermo, EnthalpyComponent::Vibrational, conc);
        let state = thermo.state();
        let mut src = 0.0;
        for (&j, term) in self.reactions.iter().zip(&self.source_terms) {
            let rop = self.buffers.rop[j];
            src -= self.buffers.delta[j] * rop * RU * state.T();
            src += term.rate(state.Tv()) * rop;
        }
        src
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::rate_laws::{ConstRate, RateLaw};
    use crate::Kinetics::reaction::Reaction;
    use crate::Thermodynamics::thermo_api::ThermoState;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// 0: N2(B), 1: N2(A), 2: N(2P), 3: N
    struct EmittingThermo {
        state: ThermoState,
    }

    impl Thermodynamics for EmittingThermo {
        fn state(&self) -> &ThermoState {
            &self.state
        }
        fn n_species(&self) -> usize {
            4
        }
        fn n_sgroups(&self) -> usize {
            0
        }
        fn species_type(&self, i: usize) -> ParticleType {
            if i < 2 { ParticleType::Molecule } else { ParticleType::Atom }
        }
        fn species_g_over_rt(&self, _t: f64, g: &mut [f64]) {
            g.iter_mut().for_each(|x| *x = 0.0);
        }
        fn species_h_over_rt(&self, _state: &ThermoState, component: EnthalpyComponent, h: &mut [f64]) {
            let values = match component {
                EnthalpyComponent::Formation => [30.0, 20.0, 15.0, 10.0],
                EnthalpyComponent::Vibrational => [3.0, 1.0, 0.0, 0.0],
            };
            h.copy_from_slice(&values);
        }
        fn sum_sgroup_members_values(&self, _species_values: &[f64], _group_values: &mut [f64]) {}
    }

    fn thermo() -> EmittingThermo {
        EmittingThermo {
            state: ThermoState::new(2000.0, 1500.0, 2000.0, 1.0e3),
        }
    }

    /// two irreversible emissions with constant rates and one exchange reaction
    fn mechanism(th: &EmittingThermo) -> ReactionMechanism {
        let reactions = vec![
            Reaction::new(
                "N2(B)=>N2(A)",
                ReactionType::BoundBoundEmission,
                false,
                vec![(0, 1.0)],
                vec![(1, 1.0)],
                RateLaw::ConstRate(ConstRate::new(2.0)),
            ),
            Reaction::new(
                "N(2P)=>N",
                ReactionType::BoundBoundEmission,
                false,
                vec![(2, 1.0)],
                vec![(3, 1.0)],
                RateLaw::ConstRate(ConstRate::new(3.0)),
            ),
            Reaction::new(
                "N2(A)=>N2(B)",
                ReactionType::Exchange,
                false,
                vec![(1, 1.0)],
                vec![(0, 1.0)],
                RateLaw::ConstRate(ConstRate::new(100.0)),
            ),
        ];
        ReactionMechanism::new(th, reactions).unwrap()
    }

    const CONC: [f64; 4] = [0.5, 1.0, 0.25, 1.0];

    fn vib_data() -> SEVibSourceData {
        SEVibSourceData::from_json_str(
            r#"{"transitions": [
                {"formula": "N2(B)=>N2(A)", "a0": 100.0, "a1": 2.0, "b0": 1.0, "b1": 0.001},
                {"formula": "O2(B)=>O2", "a0": 1.0, "b0": 1.0}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_fitted_term() {
        let term = FittedSEVibSourceTerm {
            formula: "X".to_string(),
            a0: 1.0,
            a1: 2.0,
            a2: 3.0,
            a3: 4.0,
            b0: 5.0,
            b1: 6.0,
            b2: 7.0,
        };
        // (1 + 4 + 12 + 32)/(5 + 12 + 28)
        assert_relative_eq!(term.rate(2.0), 49.0 / 45.0, max_relative = 1e-14);
    }

    #[test]
    fn test_omega_sef() {
        let th = thermo();
        let mut mech = mechanism(&th);
        let mut model = OmegaSEf::new(&mech);
        assert_eq!(model.reactions(), &[0, 1]);
        let src = model.source(&mut mech, &th, &CONC);
        // (20 - 30)*2*0.5 + (10 - 15)*3*0.25
        let expected = (-10.0 - 3.75) * RU * 2000.0;
        assert_relative_eq!(src, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_omega_sev() {
        let th = thermo();
        let mut mech = mechanism(&th);
        let mut model = OmegaSEv::new(&mech, &th, &vib_data()).unwrap();
        assert_eq!(model.reactions(), &[0]);
        let src = model.source(&mut mech, &th, &CONC);
        let rop = 2.0 * 0.5;
        let gain = (100.0 + 2.0 * 1500.0) / (1.0 + 0.001 * 1500.0);
        let expected = -(1.0 - 3.0) * rop * RU * 2000.0 + gain * rop;
        assert_relative_eq!(src, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_omega_sev_missing_transition() {
        let th = thermo();
        let mech = mechanism(&th);
        let result = OmegaSEv::new(&mech, &th, &SEVibSourceData::default());
        match result {
            Err(KineticsError::MissingTransferData(formula)) => assert_eq!(formula, "N2(B)=>N2(A)"),
            other => panic!("expected MissingTransferData, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_vib_data_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"transitions": [{{"formula": "N2(B)=>N2(A)", "a0": 5.0, "b0": 2.0}}]}}"#
        )
        .unwrap();
        let data = SEVibSourceData::from_file(file.path()).unwrap();
        let term = data.find("N2(B)=>N2(A)").unwrap();
        assert_eq!(term.a1, 0.0);
        assert_relative_eq!(term.rate(1234.0), 2.5, max_relative = 1e-14);
        assert!(data.find("N2(C)=>N2(B)").is_none());
    }
}
