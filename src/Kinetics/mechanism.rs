//! Reaction mechanism: the reactions of a mixture together with the rate manager
//! and the third-body manager built from them.
//!
//! Typical use once per solver iteration:
//! ```ignore
//! let mut mech = ReactionMechanism::new(&thermo, reactions)?;
//! // ... state of `thermo` changes ...
//! mech.net_production_rates(&thermo, &conc, &mut wdot);
//! ```
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::rate_manager::RateManager;
use crate::Kinetics::reaction::Reaction;
use crate::Kinetics::thirdbody_manager::ThirdbodyManager;
use crate::Thermodynamics::thermo_api::Thermodynamics;
use log::{error, info};
use prettytable::{Cell, Row, Table};

#[derive(Debug, Clone)]
pub struct ReactionMechanism {
    ns: usize,
    reactions: Vec<Reaction>,
    rate_manager: RateManager,
    thirdbodies: ThirdbodyManager,
    /// scratch for backward rates of progress
    rop_b: Vec<f64>,
}

fn check_species(rxn: usize, species: usize, ns: usize) -> Result<(), KineticsError> {
    if species >= ns {
        error!(
            "reaction {} refers to species {} but the mixture has {} species",
            rxn, species, ns
        );
        return Err(KineticsError::InvalidSpeciesIndex {
            reaction: rxn,
            species,
            n_species: ns,
        });
    }
    Ok(())
}

/// third-body indices; stoichiometry is checked by the rate manager
fn validate_thirdbody(rxn: usize, reaction: &Reaction, ns: usize, n_sgroups: usize) -> Result<(), KineticsError> {
    if let Some(thirdbody) = reaction.thirdbody() {
        for (species, _) in &thirdbody.efficiencies {
            check_species(rxn, *species, ns)?;
        }
        for (group, _) in &thirdbody.group_efficiencies {
            if *group >= n_sgroups {
                error!(
                    "reaction {} refers to species group {} but the mixture has {} groups",
                    rxn, group, n_sgroups
                );
                return Err(KineticsError::InvalidGroupIndex {
                    reaction: rxn,
                    group: *group,
                    n_sgroups,
                });
            }
        }
    }
    Ok(())
}

/// every species collides with efficiency 1 unless overridden; zero weights are dropped
fn dense_efficiencies(overrides: &[(usize, f64)], ns: usize) -> Vec<(usize, f64)> {
    let mut effs = vec![1.0; ns];
    for (species, w) in overrides {
        effs[*species] = *w;
    }
    effs.into_iter()
        .enumerate()
        .filter(|(_, w)| *w != 0.0)
        .collect()
}

/// c_1^nu_1 * c_2^nu_2 * ...
fn concentration_product(stoich: &[(usize, f64)], conc: &[f64]) -> f64 {
    stoich
        .iter()
        .fold(1.0, |acc, (species, nu)| acc * conc[*species].powf(*nu))
}

impl ReactionMechanism {
    pub fn new<Th: Thermodynamics + ?Sized>(thermo: &Th, reactions: Vec<Reaction>) -> Result<Self, KineticsError> {
        let ns = thermo.n_species();
        let n_sgroups = thermo.n_sgroups();
        for (rxn, reaction) in reactions.iter().enumerate() {
            validate_thirdbody(rxn, reaction, ns, n_sgroups)?;
        }
        let rate_manager = RateManager::new(ns, &reactions)?;
        let mut thirdbodies = ThirdbodyManager::new(ns, n_sgroups);
        for (rxn, reaction) in reactions.iter().enumerate() {
            if let Some(thirdbody) = reaction.thirdbody() {
                thirdbodies.add_reaction(
                    rxn,
                    dense_efficiencies(&thirdbody.efficiencies, ns),
                    thirdbody.group_efficiencies.clone(),
                );
            }
        }
        info!(
            "reaction mechanism: {} reactions, {} third-body reactions",
            reactions.len(),
            thirdbodies.n_reactions()
        );
        let nr = reactions.len();
        Ok(Self {
            ns,
            reactions,
            rate_manager,
            thirdbodies,
            rop_b: vec![0.0; nr],
        })
    }

    pub fn n_species(&self) -> usize {
        self.ns
    }
    pub fn n_reactions(&self) -> usize {
        self.reactions.len()
    }
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }
    pub fn rate_manager(&self) -> &RateManager {
        &self.rate_manager
    }
    pub fn thirdbody_manager(&self) -> &ThirdbodyManager {
        &self.thirdbodies
    }

    /// recomputes ln(kf) and ln(kb) at the current state of `thermo`
    pub fn update_rates<Th: Thermodynamics + ?Sized>(&mut self, thermo: &Th) {
        self.rate_manager.update(thermo);
    }

    /// kf of every reaction at the last updated state
    pub fn forward_rate_coefficients(&self, out: &mut [f64]) {
        for (k, ln_k) in out.iter_mut().zip(self.rate_manager.lnkf()) {
            *k = ln_k.exp();
        }
    }

    /// kb of every reaction at the last updated state, zero for irreversible reactions
    pub fn backward_rate_coefficients(&self, out: &mut [f64]) {
        for ((k, ln_k), reaction) in out
            .iter_mut()
            .zip(self.rate_manager.lnkb())
            .zip(&self.reactions)
        {
            *k = if reaction.is_reversible() { ln_k.exp() } else { 0.0 };
        }
    }

    /// kf * prod(c_r^nu_r), without third-body correction
    pub fn forward_rates_of_progress(&self, conc: &[f64], out: &mut [f64]) {
        for ((rop, ln_k), reaction) in out
            .iter_mut()
            .zip(self.rate_manager.lnkf())
            .zip(&self.reactions)
        {
            *rop = ln_k.exp() * concentration_product(reaction.reactants(), conc);
        }
    }

    /// kb * prod(c_p^nu_p), without third-body correction
    pub fn backward_rates_of_progress(&self, conc: &[f64], out: &mut [f64]) {
        for ((rop, ln_k), reaction) in out
            .iter_mut()
            .zip(self.rate_manager.lnkb())
            .zip(&self.reactions)
        {
            *rop = if reaction.is_reversible() {
                ln_k.exp() * concentration_product(reaction.products(), conc)
            } else {
                0.0
            };
        }
    }

    /// updates the rates at the state of `thermo` and returns forward minus backward
    /// rates of progress multiplied by the third-body concentrations
    pub fn net_rates_of_progress<Th: Thermodynamics + ?Sized>(
        &mut self,
        thermo: &Th,
        conc: &[f64],
        out: &mut [f64],
    ) {
        self.update_rates(thermo);
        self.forward_rates_of_progress(conc, out);
        let mut rop_b = std::mem::take(&mut self.rop_b);
        self.backward_rates_of_progress(conc, &mut rop_b);
        for (f, b) in out.iter_mut().zip(&rop_b) {
            *f -= b;
        }
        self.rop_b = rop_b;
        self.thirdbodies.multiply_thirdbodies(thermo, conc, out);
    }

    /// molar production rate of every species
    pub fn net_production_rates<Th: Thermodynamics + ?Sized>(
        &mut self,
        thermo: &Th,
        conc: &[f64],
        wdot: &mut [f64],
    ) {
        let mut rop = vec![0.0; self.reactions.len()];
        self.net_rates_of_progress(thermo, conc, &mut rop);
        wdot.iter_mut().for_each(|w| *w = 0.0);
        for (reaction, r) in self.reactions.iter().zip(&rop) {
            for (species, nu) in reaction.reactants() {
                wdot[*species] -= nu * r;
            }
            for (species, nu) in reaction.products() {
                wdot[*species] += nu * r;
            }
        }
    }

    /// change of a species quantity over every reaction, products minus reactants
    pub fn reaction_delta(&self, species_values: &[f64], out: &mut [f64]) {
        for (delta, reaction) in out.iter_mut().zip(&self.reactions) {
            *delta = reaction
                .products()
                .iter()
                .map(|(s, nu)| nu * species_values[*s])
                .sum::<f64>()
                - reaction
                    .reactants()
                    .iter()
                    .map(|(s, nu)| nu * species_values[*s])
                    .sum::<f64>();
        }
    }

    /// table of ln(kf) and ln(kb) of every reaction at the last updated state
    pub fn rate_table(&self) -> Table {
        let mut table = Table::new();
        let header = ["#", "reaction", "type", "rate law", "ln(kf)", "ln(kb)"];
        table.add_row(Row::new(header.iter().map(|h| Cell::new(h)).collect()));
        let lnkf = self.rate_manager.lnkf();
        let lnkb = self.rate_manager.lnkb();
        for (i, reaction) in self.reactions.iter().enumerate() {
            let lnkb_cell = if reaction.is_reversible() {
                format!("{:.6e}", lnkb[i])
            } else {
                "-".to_string()
            };
            table.add_row(Row::new(vec![
                Cell::new(&i.to_string()),
                Cell::new(reaction.formula()),
                Cell::new(&format!("{:?}", reaction.reaction_type())),
                Cell::new(&reaction.rate_law_kind().to_string()),
                Cell::new(&format!("{:.6e}", lnkf[i])),
                Cell::new(&lnkb_cell),
            ]));
        }
        table
    }
}
