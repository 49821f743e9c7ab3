//! Fitted rate laws.
//!
//! Every rate law is a small value type holding only its fitted coefficients.
//! Rate laws are evaluated from the [`TemperatureScalars`] shared by a rate-law
//! group, so `ln`, `1/T` and `T^2` are computed once per group and not once per
//! reaction. All laws return the natural log of the rate coefficient except
//! [`ExpRat33`], whose fit produces the rate itself.
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::rate_law_units::{LawUnits, RateLawUnits};
use crate::Kinetics::temperature_selector::TemperatureScalars;
use enum_dispatch::enum_dispatch;
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// enum for the kinds of rate laws
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLawKind {
    Arrhenius,
    RationalExp,
    ConstRate,
    ExpRat33,
}

impl RateLawKind {
    pub const ALL: [RateLawKind; 4] = [
        RateLawKind::Arrhenius,
        RateLawKind::RationalExp,
        RateLawKind::ConstRate,
        RateLawKind::ExpRat33,
    ];
    /// name used in the "type" field of a rate law schema
    pub fn name(&self) -> &'static str {
        match self {
            RateLawKind::Arrhenius => "arrhenius",
            RateLawKind::RationalExp => "rational_exp",
            RateLawKind::ConstRate => "const_rate",
            RateLawKind::ExpRat33 => "exp_rat33",
        }
    }
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "arrhenius" => Some(RateLawKind::Arrhenius),
            "rational_exp" => Some(RateLawKind::RationalExp),
            "const_rate" | "const" => Some(RateLawKind::ConstRate),
            "exp_rat33" => Some(RateLawKind::ExpRat33),
            _ => None,
        }
    }
}

impl fmt::Display for RateLawKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[enum_dispatch]
pub trait RateLawCalculator {
    fn kind(&self) -> RateLawKind;
    /// ln of the rate coefficient at the given temperature scalars
    /// (the rate itself for `ExpRat33`)
    fn ln_rate(&self, s: &TemperatureScalars) -> f64;
    /// derivative of the rate with respect to temperature, given the rate value `k`
    fn derivative(&self, k: f64, s: &TemperatureScalars) -> f64;
}

/// closed set of rate laws a reaction can own
#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch(RateLawCalculator)]
pub enum RateLaw {
    Arrhenius(Arrhenius),
    RationalExp(RationalExp),
    ConstRate(ConstRate),
    ExpRat33(ExpRat33),
}

/////////////////////////ARRHENIUS///////////////////////////////////////////////////////////////
/// Arrhenius rate law k(T) = A T^n exp(-Ea/(R T))
#[derive(Debug, Clone, PartialEq)]
pub struct Arrhenius {
    lnA: f64,
    n: f64,
    /// activation temperature Ea/R
    temp: f64,
}

#[allow(non_snake_case)]
impl Arrhenius {
    /// `A` in SI units, `T` is the activation temperature Ea/R
    pub fn new(A: f64, n: f64, T: f64) -> Self {
        Self {
            lnA: A.ln(),
            n,
            temp: T,
        }
    }
    pub fn A(&self) -> f64 {
        self.lnA.exp()
    }
    pub fn lnA(&self) -> f64 {
        self.lnA
    }
    pub fn n(&self) -> f64 {
        self.n
    }
    pub fn T(&self) -> f64 {
        self.temp
    }
}

impl RateLawCalculator for Arrhenius {
    fn kind(&self) -> RateLawKind {
        RateLawKind::Arrhenius
    }
    #[inline]
    fn ln_rate(&self, s: &TemperatureScalars) -> f64 {
        self.lnA + self.n * s.lnT - self.temp * s.invT
    }
    #[inline]
    fn derivative(&self, k: f64, s: &TemperatureScalars) -> f64 {
        k * s.invT * (self.n + self.temp * s.invT)
    }
}

/////////////////////////RATIONAL EXPONENTIAL///////////////////////////////////////////////////////////////
/// Arrhenius-like rate law with a rational pre-exponential term
/// k(T) = T^n exp(-Ta/T) (a0 + a1 T + a2 T^2)/(b0 + b1 T + b2 T^2 + b3 T^3)
#[derive(Debug, Clone, PartialEq)]
pub struct RationalExp {
    n: f64,
    temp: f64,
    a: [f64; 3],
    b: [f64; 4],
}

#[allow(non_snake_case)]
impl RationalExp {
    pub fn new(n: f64, T: f64, a: [f64; 3], b: [f64; 4]) -> Self {
        Self { n, temp: T, a, b }
    }
    pub fn n(&self) -> f64 {
        self.n
    }
    pub fn T(&self) -> f64 {
        self.temp
    }
    pub fn a0(&self) -> f64 {
        self.a[0]
    }
    pub fn a1(&self) -> f64 {
        self.a[1]
    }
    pub fn a2(&self) -> f64 {
        self.a[2]
    }
    pub fn b0(&self) -> f64 {
        self.b[0]
    }
    pub fn b1(&self) -> f64 {
        self.b[1]
    }
    pub fn b2(&self) -> f64 {
        self.b[2]
    }
    pub fn b3(&self) -> f64 {
        self.b[3]
    }
    fn numerator(&self, s: &TemperatureScalars) -> f64 {
        self.a[0] + self.a[1] * s.T + self.a[2] * s.sqT
    }
    fn denominator(&self, s: &TemperatureScalars) -> f64 {
        self.b[0] + self.b[1] * s.T + self.b[2] * s.sqT + self.b[3] * s.sqT * s.T
    }
}

impl RateLawCalculator for RationalExp {
    fn kind(&self) -> RateLawKind {
        RateLawKind::RationalExp
    }
    #[inline]
    fn ln_rate(&self, s: &TemperatureScalars) -> f64 {
        self.n * s.lnT - self.temp * s.invT + (self.numerator(s) / self.denominator(s)).ln()
    }
    fn derivative(&self, k: f64, s: &TemperatureScalars) -> f64 {
        let dp = self.a[1] + self.a[2] * 2.0 * s.T;
        let dq = self.b[1] + self.b[2] * 2.0 * s.T + self.b[3] * 3.0 * s.sqT;
        k * (s.invT * (self.n + self.temp * s.invT) + dp / self.numerator(s)
            - dq / self.denominator(s))
    }
}

/////////////////////////CONSTANT///////////////////////////////////////////////////////////////
/// temperature independent rate coefficient
#[derive(Debug, Clone, PartialEq)]
pub struct ConstRate {
    lnA: f64,
}

#[allow(non_snake_case)]
impl ConstRate {
    pub fn new(A: f64) -> Self {
        Self { lnA: A.ln() }
    }
    pub fn A(&self) -> f64 {
        self.lnA.exp()
    }
}

impl RateLawCalculator for ConstRate {
    fn kind(&self) -> RateLawKind {
        RateLawKind::ConstRate
    }
    #[inline]
    fn ln_rate(&self, _s: &TemperatureScalars) -> f64 {
        self.lnA
    }
    fn derivative(&self, _k: f64, _s: &TemperatureScalars) -> f64 {
        0.0
    }
}

/////////////////////////RATIONAL CUBIC///////////////////////////////////////////////////////////////
/// rational function of T: (a0 + a1 T + a2 T^2 + a3 T^3)/(b0 + b1 T + b2 T^2 + T^3).
/// The fit gives the rate directly, `ln_rate` does not take a logarithm.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpRat33 {
    a: [f64; 4],
    b: [f64; 3],
}

impl ExpRat33 {
    pub fn new(a: [f64; 4], b: [f64; 3]) -> Self {
        Self { a, b }
    }
    pub fn a0(&self) -> f64 {
        self.a[0]
    }
    pub fn a1(&self) -> f64 {
        self.a[1]
    }
    pub fn a2(&self) -> f64 {
        self.a[2]
    }
    pub fn a3(&self) -> f64 {
        self.a[3]
    }
    pub fn b0(&self) -> f64 {
        self.b[0]
    }
    pub fn b1(&self) -> f64 {
        self.b[1]
    }
    pub fn b2(&self) -> f64 {
        self.b[2]
    }
    fn denominator(&self, t: f64) -> f64 {
        self.b[0] + (self.b[1] + (self.b[2] + t) * t) * t
    }
}

impl RateLawCalculator for ExpRat33 {
    fn kind(&self) -> RateLawKind {
        RateLawKind::ExpRat33
    }
    #[inline]
    fn ln_rate(&self, s: &TemperatureScalars) -> f64 {
        let t = s.T;
        (self.a[0] + (self.a[1] + (self.a[2] + self.a[3] * t) * t) * t) / self.denominator(t)
    }
    fn derivative(&self, k: f64, s: &TemperatureScalars) -> f64 {
        let t = s.T;
        let dn = self.a[1] + (2.0 * self.a[2] + 3.0 * self.a[3] * t) * t;
        let dd = self.b[1] + (2.0 * self.b[2] + 3.0 * t) * t;
        (dn - k * dd) / self.denominator(t)
    }
}

/////////////////////////SCHEMA///////////////////////////////////////////////////////////////
/// serialized form of a rate law as written in mechanism files.
/// Coefficients that are not given default to zero; `A` is mandatory where it exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[allow(non_snake_case)]
pub enum RateLawSchema {
    Arrhenius {
        A: Option<f64>,
        #[serde(default)]
        n: f64,
        Ea: Option<f64>,
        T: Option<f64>,
    },
    RationalExp {
        #[serde(default)]
        n: f64,
        Ea: Option<f64>,
        T: Option<f64>,
        #[serde(default)]
        a0: f64,
        #[serde(default)]
        a1: f64,
        #[serde(default)]
        a2: f64,
        #[serde(default)]
        b0: f64,
        #[serde(default)]
        b1: f64,
        #[serde(default)]
        b2: f64,
        #[serde(default)]
        b3: f64,
    },
    #[serde(alias = "const")]
    ConstRate { A: Option<f64> },
    ExpRat33 {
        #[serde(default)]
        a0: f64,
        #[serde(default)]
        a1: f64,
        #[serde(default)]
        a2: f64,
        #[serde(default)]
        a3: f64,
        #[serde(default)]
        b0: f64,
        #[serde(default)]
        b1: f64,
        #[serde(default)]
        b2: f64,
    },
}

impl RateLawSchema {
    pub fn kind(&self) -> RateLawKind {
        match self {
            RateLawSchema::Arrhenius { .. } => RateLawKind::Arrhenius,
            RateLawSchema::RationalExp { .. } => RateLawKind::RationalExp,
            RateLawSchema::ConstRate { .. } => RateLawKind::ConstRate,
            RateLawSchema::ExpRat33 { .. } => RateLawKind::ExpRat33,
        }
    }
}

fn finite(kind: RateLawKind, coefficient: &'static str, value: f64) -> Result<f64, KineticsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        error!("coefficient {} of {} is not finite: {}", coefficient, kind, value);
        Err(KineticsError::InvalidCoefficient {
            kind,
            coefficient,
            value,
        })
    }
}

/// pre-exponential factor converted to SI, must be given and positive
#[allow(non_snake_case)]
fn pre_exponential(
    kind: RateLawKind,
    A: Option<f64>,
    units: &LawUnits,
    order: i32,
) -> Result<f64, KineticsError> {
    let A = A.ok_or(KineticsError::MissingCoefficient {
        kind,
        coefficient: "A",
    })?;
    let A = finite(kind, "A", A)?;
    if A <= 0.0 {
        error!("pre-exponential factor of {} must be positive, got {}", kind, A);
        return Err(KineticsError::InvalidCoefficient {
            kind,
            coefficient: "A",
            value: A,
        });
    }
    Ok(A * units.a_units.factor(order))
}

/// activation temperature from either `Ea` (converted with the E units) or `T`
#[allow(non_snake_case)]
fn activation_temperature(
    kind: RateLawKind,
    Ea: Option<f64>,
    T: Option<f64>,
    units: &LawUnits,
) -> Result<f64, KineticsError> {
    match (Ea, T) {
        (Some(_), Some(_)) => Err(KineticsError::ConflictingActivation(kind)),
        (Some(ea), None) => Ok(units.e_units.to_temperature(finite(kind, "Ea", ea)?)),
        (None, Some(t)) => finite(kind, "T", t),
        (None, None) => Ok(0.0),
    }
}

impl RateLaw {
    /// builds a rate law from its schema for a reaction of the given order.
    /// All unit handling and validation happens here, never during evaluation.
    #[allow(non_snake_case)]
    pub fn from_schema(
        schema: &RateLawSchema,
        order: i32,
        units: &RateLawUnits,
    ) -> Result<RateLaw, KineticsError> {
        let kind = schema.kind();
        let law_units = units.get(kind);
        let factor = law_units.a_units.factor(order);
        let rate_law = match *schema {
            RateLawSchema::Arrhenius { A, n, Ea, T } => {
                let A = pre_exponential(kind, A, &law_units, order)?;
                let n = finite(kind, "n", n)?;
                let T = activation_temperature(kind, Ea, T, &law_units)?;
                RateLaw::Arrhenius(Arrhenius::new(A, n, T))
            }
            RateLawSchema::RationalExp {
                n,
                Ea,
                T,
                a0,
                a1,
                a2,
                b0,
                b1,
                b2,
                b3,
            } => {
                let T = activation_temperature(kind, Ea, T, &law_units)?;
                let a = [
                    finite(kind, "a0", a0)? * factor,
                    finite(kind, "a1", a1)? * factor,
                    finite(kind, "a2", a2)? * factor,
                ];
                let b = [
                    finite(kind, "b0", b0)?,
                    finite(kind, "b1", b1)?,
                    finite(kind, "b2", b2)?,
                    finite(kind, "b3", b3)?,
                ];
                RateLaw::RationalExp(RationalExp::new(finite(kind, "n", n)?, T, a, b))
            }
            RateLawSchema::ConstRate { A } => {
                RateLaw::ConstRate(ConstRate::new(pre_exponential(kind, A, &law_units, order)?))
            }
            RateLawSchema::ExpRat33 {
                a0,
                a1,
                a2,
                a3,
                b0,
                b1,
                b2,
            } => {
                let a = [
                    finite(kind, "a0", a0)? * factor,
                    finite(kind, "a1", a1)? * factor,
                    finite(kind, "a2", a2)? * factor,
                    finite(kind, "a3", a3)? * factor,
                ];
                let b = [
                    finite(kind, "b0", b0)?,
                    finite(kind, "b1", b1)?,
                    finite(kind, "b2", b2)?,
                ];
                RateLaw::ExpRat33(ExpRat33::new(a, b))
            }
        };
        Ok(rate_law)
    }

    /// builds a rate law from a serde Value, checking the "type" tag first so that
    /// an unknown law is reported as such and not as a generic deserialization error
    pub fn from_value(
        value: &Value,
        order: i32,
        units: &RateLawUnits,
    ) -> Result<RateLaw, KineticsError> {
        let type_name = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| KineticsError::UnknownRateLaw(value.to_string()))?;
        if RateLawKind::from_name(type_name).is_none() {
            error!("unknown rate law type '{}'", type_name);
            return Err(KineticsError::UnknownRateLaw(type_name.to_owned()));
        }
        let schema: RateLawSchema = serde_json::from_value(value.clone())?;
        RateLaw::from_schema(&schema, order, units)
    }
}
