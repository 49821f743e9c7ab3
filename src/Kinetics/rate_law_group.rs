//! Groups of rate laws sharing the same kind and the same temperature definition.
//!
//! A group computes its temperature scalars once and then evaluates all of its
//! members in one tight loop over a homogeneous vector, writing every result into
//! the member's slot of the output array. Slots of different groups never overlap,
//! so groups can be evaluated in any order.
//!
//! Groups hold only laws that produce ln(k). `ExpRat33` gives the rate itself and
//! has no group.
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::rate_laws::{
    Arrhenius, ConstRate, RateLaw, RateLawCalculator, RateLawKind, RationalExp,
};
use crate::Kinetics::temperature_selector::{TemperatureScalars, TemperatureSelector};
use crate::Thermodynamics::thermo_api::ThermoState;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// key of a rate-law group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub kind: RateLawKind,
    pub selector: TemperatureSelector,
}

impl GroupKey {
    pub fn new(kind: RateLawKind, selector: TemperatureSelector) -> Self {
        Self { kind, selector }
    }
}

/// homogeneous list of (slot, rate law) pairs
#[derive(Debug, Clone)]
enum GroupMembers {
    Arrhenius(Vec<(usize, Arrhenius)>),
    RationalExp(Vec<(usize, RationalExp)>),
    ConstRate(Vec<(usize, ConstRate)>),
}

impl GroupMembers {
    fn empty(kind: RateLawKind) -> Option<Self> {
        match kind {
            RateLawKind::Arrhenius => Some(GroupMembers::Arrhenius(Vec::new())),
            RateLawKind::RationalExp => Some(GroupMembers::RationalExp(Vec::new())),
            RateLawKind::ConstRate => Some(GroupMembers::ConstRate(Vec::new())),
            RateLawKind::ExpRat33 => None,
        }
    }
}

fn evaluate<L: RateLawCalculator>(members: &[(usize, L)], s: &TemperatureScalars, out: &mut [f64]) {
    for (slot, law) in members {
        out[*slot] = law.ln_rate(s);
    }
}

fn slots_of<L>(members: &[(usize, L)]) -> Vec<usize> {
    members.iter().map(|(slot, _)| *slot).collect()
}

/// rate laws of one kind evaluated at one temperature
#[derive(Debug, Clone)]
pub struct RateLawGroup {
    key: GroupKey,
    members: GroupMembers,
}

impl RateLawGroup {
    /// `None` for kinds whose value is not ln(k)
    pub fn new(key: GroupKey) -> Option<Self> {
        GroupMembers::empty(key.kind).map(|members| Self { key, members })
    }
    pub fn key(&self) -> GroupKey {
        self.key
    }
    /// adds a copy of `rate_law` whose result is written to `slot`
    pub fn add_rate_coefficient(&mut self, slot: usize, rate_law: &RateLaw) -> Result<(), KineticsError> {
        match (&mut self.members, rate_law) {
            (GroupMembers::Arrhenius(v), RateLaw::Arrhenius(law)) => v.push((slot, law.clone())),
            (GroupMembers::RationalExp(v), RateLaw::RationalExp(law)) => v.push((slot, law.clone())),
            (GroupMembers::ConstRate(v), RateLaw::ConstRate(law)) => v.push((slot, law.clone())),
            _ => {
                return Err(KineticsError::UnsupportedRateLaw {
                    reaction: slot,
                    kind: rate_law.kind(),
                });
            }
        }
        Ok(())
    }
    /// number of members
    pub fn len(&self) -> usize {
        match &self.members {
            GroupMembers::Arrhenius(v) => v.len(),
            GroupMembers::RationalExp(v) => v.len(),
            GroupMembers::ConstRate(v) => v.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// output slots written by this group, in insertion order
    pub fn slots(&self) -> Vec<usize> {
        match &self.members {
            GroupMembers::Arrhenius(v) => slots_of(v),
            GroupMembers::RationalExp(v) => slots_of(v),
            GroupMembers::ConstRate(v) => slots_of(v),
        }
    }
    /// evaluates every member at the group temperature and writes ln(k) into `out`
    pub fn log_of_rate_coefficients(&self, state: &ThermoState, out: &mut [f64]) {
        let s = TemperatureScalars::new(self.key.selector.temperature(state));
        match &self.members {
            GroupMembers::Arrhenius(v) => evaluate(v, &s, out),
            GroupMembers::RationalExp(v) => evaluate(v, &s, out),
            GroupMembers::ConstRate(v) => evaluate(v, &s, out),
        }
    }
}

/// all rate-law groups of a mechanism, created on demand by key
#[derive(Debug, Clone, Default)]
pub struct RateLawGroupCollection {
    groups: BTreeMap<GroupKey, RateLawGroup>,
}

impl RateLawGroupCollection {
    pub fn new() -> Self {
        Self::default()
    }
    /// adds `rate_law` to the group (kind of the law, `selector`) with output `slot`
    pub fn add_rate_coefficient(
        &mut self,
        selector: TemperatureSelector,
        slot: usize,
        rate_law: &RateLaw,
    ) -> Result<(), KineticsError> {
        let key = GroupKey::new(rate_law.kind(), selector);
        let group = match self.groups.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let group = RateLawGroup::new(key).ok_or(KineticsError::UnsupportedRateLaw {
                    reaction: slot,
                    kind: key.kind,
                })?;
                entry.insert(group)
            }
        };
        group.add_rate_coefficient(slot, rate_law)
    }
    pub fn log_of_rate_coefficients(&self, state: &ThermoState, out: &mut [f64]) {
        for group in self.groups.values() {
            group.log_of_rate_coefficients(state, out);
        }
    }
    pub fn groups(&self) -> impl Iterator<Item = &RateLawGroup> {
        self.groups.values()
    }
    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }
}
