use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::rate_law_units::RateLawUnits;
use crate::Kinetics::rate_laws::{RateLaw, RateLawCalculator, RateLawKind, RateLawSchema};
use crate::Kinetics::temperature_selector::TemperatureSelector;
use serde::{Deserialize, Serialize};

use TemperatureSelector::{Park, T, Te};

/// categories of reactions in a multi-temperature gas; the category decides at which
/// temperatures the forward and reverse rate coefficients are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    Exchange,
    AssociativeIonization,
    DissociativeRecombination,
    AssociativeDetachment,
    DissociativeAttachment,
    DissociationE,
    RecombinationE,
    DissociationM,
    RecombinationM,
    IonizationE,
    IonRecombinationE,
    IonizationM,
    IonRecombinationM,
    ElectronicAttachmentM,
    ElectronicDetachmentM,
    ElectronicAttachmentE,
    ElectronicDetachmentE,
    ExcitationM,
    ExcitationE,
    ChargeExchange,
    BoundBoundEmission,
}

pub const N_REACTION_TYPES: usize = 21;

/// (forward, reverse) temperature selectors indexed by `ReactionType as usize`
const RATE_SELECTORS: [(TemperatureSelector, TemperatureSelector); N_REACTION_TYPES] = [
    (T, T),       // Exchange
    (T, Te),      // AssociativeIonization
    (Te, T),      // DissociativeRecombination
    (T, Te),      // AssociativeDetachment
    (Te, T),      // DissociativeAttachment
    (Te, Te),     // DissociationE
    (Te, Te),     // RecombinationE
    (Park, T),    // DissociationM
    (T, Park),    // RecombinationM
    (Te, Te),     // IonizationE
    (Te, Te),     // IonRecombinationE
    (T, T),       // IonizationM
    (T, T),       // IonRecombinationM
    (Te, T),      // ElectronicAttachmentM
    (T, Te),      // ElectronicDetachmentM
    (Te, Te),     // ElectronicAttachmentE
    (Te, Te),     // ElectronicDetachmentE
    (T, T),       // ExcitationM
    (Te, Te),     // ExcitationE
    (T, T),       // ChargeExchange
    (T, T),       // BoundBoundEmission
];

impl ReactionType {
    pub fn forward_selector(&self) -> TemperatureSelector {
        RATE_SELECTORS[*self as usize].0
    }
    pub fn reverse_selector(&self) -> TemperatureSelector {
        RATE_SELECTORS[*self as usize].1
    }
    pub fn selectors(&self) -> (TemperatureSelector, TemperatureSelector) {
        RATE_SELECTORS[*self as usize]
    }
}

/// third-body data of a reaction: efficiencies of individual species (species not
/// listed collide with efficiency 1) and of lumped species groups
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Thirdbody {
    pub efficiencies: Vec<(usize, f64)>,
    pub group_efficiencies: Vec<(usize, f64)>,
}

/// reaction as seen by the kinetics: category, stoichiometry and rate law
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    formula: String,
    reaction_type: ReactionType,
    reversible: bool,
    reactants: Vec<(usize, f64)>,
    products: Vec<(usize, f64)>,
    rate_law: RateLaw,
    thirdbody: Option<Thirdbody>,
}

impl Reaction {
    /// `reactants` and `products` are (species index, stoichiometric coefficient) pairs
    pub fn new(
        formula: &str,
        reaction_type: ReactionType,
        reversible: bool,
        reactants: Vec<(usize, f64)>,
        products: Vec<(usize, f64)>,
        rate_law: RateLaw,
    ) -> Self {
        Self {
            formula: formula.to_owned(),
            reaction_type,
            reversible,
            reactants,
            products,
            rate_law,
            thirdbody: None,
        }
    }
    /// builds the rate law from its schema using the order implied by the stoichiometry
    pub fn from_schema(
        formula: &str,
        reaction_type: ReactionType,
        reversible: bool,
        reactants: Vec<(usize, f64)>,
        products: Vec<(usize, f64)>,
        thirdbody: Option<Thirdbody>,
        schema: &RateLawSchema,
        units: &RateLawUnits,
    ) -> Result<Self, KineticsError> {
        let order = reaction_order(&reactants, thirdbody.is_some());
        let rate_law = RateLaw::from_schema(schema, order, units)?;
        let mut reaction = Reaction::new(
            formula,
            reaction_type,
            reversible,
            reactants,
            products,
            rate_law,
        );
        reaction.thirdbody = thirdbody;
        Ok(reaction)
    }
    /// marks the reaction as third-body mediated
    pub fn with_thirdbody(mut self, thirdbody: Thirdbody) -> Self {
        self.thirdbody = Some(thirdbody);
        self
    }
    pub fn formula(&self) -> &str {
        &self.formula
    }
    pub fn reaction_type(&self) -> ReactionType {
        self.reaction_type
    }
    pub fn is_reversible(&self) -> bool {
        self.reversible
    }
    pub fn reactants(&self) -> &[(usize, f64)] {
        &self.reactants
    }
    pub fn products(&self) -> &[(usize, f64)] {
        &self.products
    }
    pub fn rate_law(&self) -> &RateLaw {
        &self.rate_law
    }
    pub fn rate_law_kind(&self) -> RateLawKind {
        self.rate_law.kind()
    }
    pub fn thirdbody(&self) -> Option<&Thirdbody> {
        self.thirdbody.as_ref()
    }
    pub fn is_thirdbody(&self) -> bool {
        self.thirdbody.is_some()
    }
    /// sum of reactant coefficients, plus one for the third body
    pub fn order(&self) -> i32 {
        reaction_order(&self.reactants, self.is_thirdbody())
    }
    /// change in number of moles, products minus reactants
    pub fn delta_nu(&self) -> f64 {
        self.products.iter().map(|(_, nu)| nu).sum::<f64>()
            - self.reactants.iter().map(|(_, nu)| nu).sum::<f64>()
    }
}

fn reaction_order(reactants: &[(usize, f64)], thirdbody: bool) -> i32 {
    let order: f64 = reactants.iter().map(|(_, nu)| nu).sum();
    order.round() as i32 + if thirdbody { 1 } else { 0 }
}
