//! Evaluation of forward and backward rate coefficients of a whole mechanism.
//!
//! Reactions are sorted once, at construction, into rate-law groups keyed by the
//! rate-law kind and by the temperature at which the forward or the reverse rate
//! is evaluated. When the reverse temperature equals the forward one the reverse
//! rate is not evaluated at all: ln(kf) is copied into ln(kb) before the
//! equilibrium constant is subtracted.
//!
//! Storage for ln(kf), ln(kb) and the species G/RT is one allocation of
//! `2*nr + ns` values:
//!
//! | range | content |
//! |---|---|
//! | `[0, nr)` | ln(kf) |
//! | `[nr, 2nr)` | ln(kb) |
//! | `[2nr, 2nr+ns)` | G/RT of every species at the current reverse temperature |
use crate::Kinetics::constants::{ONEATM, RU};
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::rate_law_group::{GroupKey, RateLawGroupCollection};
use crate::Kinetics::rate_laws::{RateLaw, RateLawCalculator, RateLawKind};
use crate::Kinetics::reaction::Reaction;
use crate::Kinetics::temperature_selector::TemperatureSelector;
use crate::Thermodynamics::thermo_api::Thermodynamics;
use log::{debug, error, info};
use std::collections::BTreeMap;

/// stoichiometry of one reversible reaction needed to form ln(Keq)
#[derive(Debug, Clone)]
struct EquilibriumEntry {
    rxn: usize,
    reactants: Vec<(usize, f64)>,
    products: Vec<(usize, f64)>,
    delta_nu: f64,
}

impl EquilibriumEntry {
    /// ln(Keq) in concentration units from the species G/RT at temperature `t`
    fn ln_keq(&self, g: &[f64], t: f64) -> f64 {
        let mut delta_g = 0.0;
        for (species, nu) in &self.products {
            delta_g += nu * g[*species];
        }
        for (species, nu) in &self.reactants {
            delta_g -= nu * g[*species];
        }
        let mut ln_keq = -delta_g;
        if self.delta_nu != 0.0 {
            ln_keq += self.delta_nu * (ONEATM / (RU * t)).ln();
        }
        ln_keq
    }
}

/// rate-law kinds which the rate manager knows how to place in a group
fn is_registered(rate_law: &RateLaw) -> bool {
    // ExpRat33 gives a raw rate, not a logarithm, and can not share the ln(k) arrays
    matches!(
        rate_law.kind(),
        RateLawKind::Arrhenius | RateLawKind::RationalExp | RateLawKind::ConstRate
    )
}

/// owns the rate-coefficient storage and the rate-law groups of a mechanism
#[derive(Debug, Clone)]
pub struct RateManager {
    ns: usize,
    nr: usize,
    rate_groups: RateLawGroupCollection,
    /// reversible reactions with equal forward and reverse temperatures
    to_copy: Vec<usize>,
    /// irreversible reactions, bookkeeping only
    irr: Vec<usize>,
    /// reversible reactions grouped by the temperature of their reverse rate
    keq_groups: BTreeMap<TemperatureSelector, Vec<EquilibriumEntry>>,
    storage: Vec<f64>,
}

impl RateManager {
    /// classifies every reaction and allocates the storage
    pub fn new(ns: usize, reactions: &[Reaction]) -> Result<Self, KineticsError> {
        let nr = reactions.len();
        let mut manager = Self {
            ns,
            nr,
            rate_groups: RateLawGroupCollection::new(),
            to_copy: Vec::new(),
            irr: Vec::new(),
            keq_groups: BTreeMap::new(),
            storage: Vec::new(),
        };
        for (rxn, reaction) in reactions.iter().enumerate() {
            manager.add_reaction(rxn, reaction)?;
        }
        manager.storage = vec![0.0; 2 * nr + ns];
        info!(
            "rate manager: {} reactions, {} species, {} rate law groups, {} copied reverse rates, {} irreversible",
            nr,
            ns,
            manager.rate_groups.n_groups(),
            manager.to_copy.len(),
            manager.irr.len()
        );
        for group in manager.rate_groups.groups() {
            let key = group.key();
            debug!("group {} at {}: {} members", key.kind, key.selector, group.len());
        }
        Ok(manager)
    }

    fn add_reaction(&mut self, rxn: usize, reaction: &Reaction) -> Result<(), KineticsError> {
        for (species, _) in reaction.reactants().iter().chain(reaction.products()) {
            if *species >= self.ns {
                error!(
                    "reaction {} ({}) refers to species {} but the mixture has {} species",
                    rxn,
                    reaction.formula(),
                    species,
                    self.ns
                );
                return Err(KineticsError::InvalidSpeciesIndex {
                    reaction: rxn,
                    species: *species,
                    n_species: self.ns,
                });
            }
        }
        let rate_law = reaction.rate_law();
        if !is_registered(rate_law) {
            error!(
                "rate law {} of reaction {} ({}) is not implemented in RateManager",
                rate_law.kind(),
                rxn,
                reaction.formula()
            );
            return Err(KineticsError::UnsupportedRateLaw {
                reaction: rxn,
                kind: rate_law.kind(),
            });
        }
        let (forward, reverse) = reaction.reaction_type().selectors();
        self.rate_groups.add_rate_coefficient(forward, rxn, rate_law)?;

        if reaction.is_reversible() {
            if forward == reverse {
                self.to_copy.push(rxn);
            } else {
                // slot rxn + nr is ln(kb)[rxn]
                self.rate_groups
                    .add_rate_coefficient(reverse, rxn + self.nr, rate_law)?;
            }
            self.keq_groups
                .entry(reverse)
                .or_default()
                .push(EquilibriumEntry {
                    rxn,
                    reactants: reaction.reactants().to_vec(),
                    products: reaction.products().to_vec(),
                    delta_nu: reaction.delta_nu(),
                });
        } else {
            self.irr.push(rxn);
        }
        Ok(())
    }

    /// evaluates ln(kf) and ln(kb) of every reaction at the current state
    pub fn update<Th: Thermodynamics + ?Sized>(&mut self, thermo: &Th) {
        let state = thermo.state();
        let nr = self.nr;
        let (rates, gibbs) = self.storage.split_at_mut(2 * nr);

        // forward rates everywhere, reverse rates where the temperature differs
        self.rate_groups.log_of_rate_coefficients(state, rates);

        // reverse rates evaluated at the forward temperature
        let (lnkf, lnkb) = rates.split_at_mut(nr);
        for &rxn in &self.to_copy {
            lnkb[rxn] = lnkf[rxn];
        }

        // lnkb = lnkf(Tb) - lnKeq(Tb)
        for (selector, entries) in &self.keq_groups {
            let tb = selector.temperature(state);
            thermo.species_g_over_rt(tb, gibbs);
            for entry in entries {
                lnkb[entry.rxn] -= entry.ln_keq(gibbs, tb);
            }
        }
    }

    pub fn n_species(&self) -> usize {
        self.ns
    }
    pub fn n_reactions(&self) -> usize {
        self.nr
    }
    /// ln of the forward rate coefficients
    pub fn lnkf(&self) -> &[f64] {
        &self.storage[..self.nr]
    }
    /// ln of the backward rate coefficients, meaningful for reversible reactions only
    pub fn lnkb(&self) -> &[f64] {
        &self.storage[self.nr..2 * self.nr]
    }
    /// species G/RT at the reverse temperature used last
    pub fn gibbs(&self) -> &[f64] {
        &self.storage[2 * self.nr..]
    }
    pub fn copied_reactions(&self) -> &[usize] {
        &self.to_copy
    }
    pub fn irreversible_reactions(&self) -> &[usize] {
        &self.irr
    }
    pub fn group_keys(&self) -> Vec<GroupKey> {
        self.rate_groups.groups().map(|g| g.key()).collect()
    }
    /// reactions whose forward rate is evaluated by a group
    pub fn forward_slots(&self) -> Vec<usize> {
        let mut slots: Vec<usize> = self
            .rate_groups
            .groups()
            .flat_map(|g| g.slots())
            .filter(|slot| *slot < self.nr)
            .collect();
        slots.sort_unstable();
        slots
    }
    /// reactions whose reverse rate is evaluated by a group at its own temperature
    pub fn reverse_slots(&self) -> Vec<usize> {
        let mut slots: Vec<usize> = self
            .rate_groups
            .groups()
            .flat_map(|g| g.slots())
            .filter(|slot| *slot >= self.nr)
            .map(|slot| slot - self.nr)
            .collect();
        slots.sort_unstable();
        slots
    }
}
