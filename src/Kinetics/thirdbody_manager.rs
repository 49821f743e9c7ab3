use crate::Thermodynamics::thermo_api::Thermodynamics;

/// collision efficiencies of one third-body reaction
#[derive(Debug, Clone, PartialEq)]
struct ThirdbodyEfficiencies {
    rxn: usize,
    species: Vec<(usize, f64)>,
    groups: Vec<(usize, f64)>,
}

impl ThirdbodyEfficiencies {
    #[inline]
    fn multiply(&self, conc: &[f64], group_conc: &[f64], rop: &mut [f64]) {
        let mut sum = 0.0;
        for (s, w) in &self.species {
            sum += conc[*s] * w;
        }
        for (g, w) in &self.groups {
            sum += group_conc[*g] * w;
        }
        rop[self.rxn] *= sum;
    }
}

/// multiplies rates of progress of third-body reactions by the efficiency
/// weighted concentration of the colliding partners
#[derive(Debug, Clone)]
pub struct ThirdbodyManager {
    ns: usize,
    reactions: Vec<ThirdbodyEfficiencies>,
    /// concentrations summed over the members of each species group
    group_conc: Vec<f64>,
}

impl ThirdbodyManager {
    pub fn new(ns: usize, n_sgroups: usize) -> Self {
        Self {
            ns,
            reactions: Vec::new(),
            group_conc: vec![0.0; n_sgroups],
        }
    }
    /// tracks reaction `rxn`. The sum starts from zero, so every species that
    /// collides must be listed in `species_effs`.
    pub fn add_reaction(&mut self, rxn: usize, species_effs: Vec<(usize, f64)>, group_effs: Vec<(usize, f64)>) {
        self.reactions.push(ThirdbodyEfficiencies {
            rxn,
            species: species_effs,
            groups: group_effs,
        });
    }
    pub fn n_species(&self) -> usize {
        self.ns
    }
    pub fn n_reactions(&self) -> usize {
        self.reactions.len()
    }
    /// indices of the tracked reactions, in insertion order
    pub fn reactions(&self) -> Vec<usize> {
        self.reactions.iter().map(|r| r.rxn).collect()
    }
    /// `rop[rxn] *= sum(conc[s]*w_s) + sum(group_conc[g]*w_g)` for every tracked reaction
    pub fn multiply_thirdbodies<Th: Thermodynamics + ?Sized>(&mut self, thermo: &Th, conc: &[f64], rop: &mut [f64]) {
        if self.reactions.is_empty() {
            return;
        }
        thermo.sum_sgroup_members_values(conc, &mut self.group_conc);
        for reaction in &self.reactions {
            reaction.multiply(conc, &self.group_conc, rop);
        }
    }
}
