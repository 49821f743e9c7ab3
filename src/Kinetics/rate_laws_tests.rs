/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Kinetics::constants::{CAL, NA, RU};
    use crate::Kinetics::kinetics_error::KineticsError;
    use crate::Kinetics::rate_law_units::RateLawUnits;
    use crate::Kinetics::rate_laws::{
        Arrhenius, ConstRate, ExpRat33, RateLaw, RateLawCalculator, RateLawKind, RateLawSchema,
        RationalExp,
    };
    use crate::Kinetics::temperature_selector::TemperatureScalars;
    use approx::assert_relative_eq;
    use serde_json::json;

    /// central finite difference of exp(ln_rate)
    fn numeric_derivative(law: &RateLaw, t: f64) -> f64 {
        let h = t * 1e-6;
        let up = law.ln_rate(&TemperatureScalars::new(t + h)).exp();
        let down = law.ln_rate(&TemperatureScalars::new(t - h)).exp();
        (up - down) / (2.0 * h)
    }

    #[test]
    fn test_arrhenius_no_temperature_dependence() {
        let law = Arrhenius::new(1.0e10, 0.0, 0.0);
        let s = TemperatureScalars::new(1000.0);
        assert_relative_eq!(law.ln_rate(&s), 23.025850929940457, epsilon = 1e-12);
        assert_eq!(law.ln_rate(&s), law.ln_rate(&TemperatureScalars::new(5000.0)));
    }

    #[test]
    fn test_arrhenius_value() {
        let law = Arrhenius::new(7.0e15, -1.6, 113200.0);
        let t: f64 = 10000.0;
        let s = TemperatureScalars::new(t);
        let expected = 7.0e15 * t.powf(-1.6) * (-113200.0 / t).exp();
        assert_relative_eq!(law.ln_rate(&s).exp(), expected, max_relative = 1e-12);
        assert_relative_eq!(law.A(), 7.0e15, max_relative = 1e-14);
        assert_eq!(law.n(), -1.6);
        assert_eq!(law.T(), 113200.0);
    }

    #[test]
    fn test_arrhenius_increases_with_temperature() {
        let law = Arrhenius::new(1.0e8, 0.7, 20000.0);
        let mut previous = f64::NEG_INFINITY;
        for t in [300.0, 1000.0, 3000.0, 10000.0, 30000.0] {
            let ln_k = law.ln_rate(&TemperatureScalars::new(t));
            assert!(ln_k > previous);
            previous = ln_k;
        }
    }

    #[test]
    fn test_arrhenius_derivative() {
        let law = RateLaw::Arrhenius(Arrhenius::new(3.0e11, 0.5, 15000.0));
        for t in [500.0, 2000.0, 8000.0] {
            let s = TemperatureScalars::new(t);
            let k = law.ln_rate(&s).exp();
            assert_relative_eq!(
                law.derivative(k, &s),
                numeric_derivative(&law, t),
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn test_rational_exp_value_and_derivative() {
        let law = RationalExp::new(0.5, 12000.0, [1.0e6, 2.0e2, 0.03], [1.0, 1.0e-3, 2.0e-7, 1.0e-11]);
        let t: f64 = 4000.0;
        let s = TemperatureScalars::new(t);
        let p = 1.0e6 + 2.0e2 * t + 0.03 * t * t;
        let q = 1.0 + 1.0e-3 * t + 2.0e-7 * t * t + 1.0e-11 * t * t * t;
        let expected = t.powf(0.5) * (-12000.0 / t).exp() * p / q;
        assert_relative_eq!(law.ln_rate(&s).exp(), expected, max_relative = 1e-12);

        let law = RateLaw::RationalExp(law);
        let k = law.ln_rate(&s).exp();
        assert_relative_eq!(
            law.derivative(k, &s),
            numeric_derivative(&law, t),
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_rational_exp_zero_denominator_is_not_finite() {
        let law = RationalExp::new(0.0, 0.0, [1.0, 0.0, 0.0], [0.0, 0.0, 0.0, 0.0]);
        let ln_k = law.ln_rate(&TemperatureScalars::new(1000.0));
        assert!(!ln_k.is_finite());
    }

    #[test]
    fn test_const_rate() {
        let law = ConstRate::new(2.5e-10);
        let s = TemperatureScalars::new(777.0);
        assert_relative_eq!(law.ln_rate(&s), 2.5e-10_f64.ln(), max_relative = 1e-14);
        assert_eq!(law.derivative(1.0, &s), 0.0);
        assert_relative_eq!(law.A(), 2.5e-10, max_relative = 1e-14);
    }

    #[test]
    fn test_exp_rat33_is_raw_rate() {
        let law = ExpRat33::new([1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0]);
        let t: f64 = 2.0;
        let s = TemperatureScalars::new(t);
        // (1 + 4 + 12 + 32)/(5 + 12 + 28 + 8)
        let expected = 49.0 / 53.0;
        assert_relative_eq!(law.ln_rate(&s), expected, max_relative = 1e-14);
        assert_eq!(law.kind(), RateLawKind::ExpRat33);
    }

    #[test]
    fn test_exp_rat33_derivative() {
        let law = ExpRat33::new([1.0e3, 2.0, 3.0e-3, 1.0e-7], [5.0e3, 6.0e2, 7.0]);
        let t = 1500.0;
        let h = 1e-3;
        let k = law.ln_rate(&TemperatureScalars::new(t));
        let numeric = (law.ln_rate(&TemperatureScalars::new(t + h))
            - law.ln_rate(&TemperatureScalars::new(t - h)))
            / (2.0 * h);
        assert_relative_eq!(
            law.derivative(k, &TemperatureScalars::new(t)),
            numeric,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_dispatch_kind() {
        let laws = vec![
            RateLaw::Arrhenius(Arrhenius::new(1.0, 0.0, 0.0)),
            RateLaw::RationalExp(RationalExp::new(0.0, 0.0, [1.0, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0])),
            RateLaw::ConstRate(ConstRate::new(1.0)),
            RateLaw::ExpRat33(ExpRat33::new([0.0; 4], [1.0, 0.0, 0.0])),
        ];
        let kinds: Vec<RateLawKind> = laws.iter().map(|law| law.kind()).collect();
        assert_eq!(kinds, RateLawKind::ALL.to_vec());
    }

    #[test]
    fn test_schema_defaults() {
        let value = json!({"type": "arrhenius", "A": 1.0e10});
        let schema: RateLawSchema = serde_json::from_value(value).unwrap();
        assert_eq!(
            schema,
            RateLawSchema::Arrhenius {
                A: Some(1.0e10),
                n: 0.0,
                Ea: None,
                T: None
            }
        );
        let law = RateLaw::from_schema(&schema, 1, &RateLawUnits::new()).unwrap();
        assert_relative_eq!(
            law.ln_rate(&TemperatureScalars::new(1234.0)),
            1.0e10_f64.ln(),
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_schema_const_alias() {
        let value = json!({"type": "const", "A": 4.0});
        let law = RateLaw::from_value(&value, 1, &RateLawUnits::new()).unwrap();
        assert_eq!(law.kind(), RateLawKind::ConstRate);
    }

    #[test]
    fn test_from_value_unknown_type() {
        let value = json!({"type": "troe", "A": 1.0});
        let result = RateLaw::from_value(&value, 2, &RateLawUnits::new());
        match result {
            Err(KineticsError::UnknownRateLaw(name)) => assert_eq!(name, "troe"),
            other => panic!("expected UnknownRateLaw, got {:?}", other),
        }
        let no_type = json!({"A": 1.0});
        assert!(matches!(
            RateLaw::from_value(&no_type, 2, &RateLawUnits::new()),
            Err(KineticsError::UnknownRateLaw(_))
        ));
    }

    #[test]
    fn test_missing_pre_exponential() {
        let value = json!({"type": "arrhenius", "n": 1.0, "T": 100.0});
        assert!(matches!(
            RateLaw::from_value(&value, 2, &RateLawUnits::new()),
            Err(KineticsError::MissingCoefficient {
                kind: RateLawKind::Arrhenius,
                coefficient: "A"
            })
        ));
    }

    #[test]
    fn test_non_positive_pre_exponential() {
        let value = json!({"type": "const_rate", "A": -3.0});
        assert!(matches!(
            RateLaw::from_value(&value, 1, &RateLawUnits::new()),
            Err(KineticsError::InvalidCoefficient {
                coefficient: "A",
                ..
            })
        ));
    }

    #[test]
    fn test_conflicting_activation() {
        let value = json!({"type": "arrhenius", "A": 1.0, "Ea": 1000.0, "T": 100.0});
        assert!(matches!(
            RateLaw::from_value(&value, 2, &RateLawUnits::new()),
            Err(KineticsError::ConflictingActivation(RateLawKind::Arrhenius))
        ));
    }

    #[test]
    fn test_unit_conversion() {
        let mut units = RateLawUnits::new();
        units
            .register(RateLawKind::Arrhenius, "cm,mol,s,K", "cal,mol,K")
            .unwrap();
        let value = json!({"type": "arrhenius", "A": 2.0e13, "n": 0.0, "Ea": 10000.0});
        let law = RateLaw::from_value(&value, 2, &units).unwrap();
        match law {
            RateLaw::Arrhenius(arrhenius) => {
                assert_relative_eq!(arrhenius.A(), 2.0e7, max_relative = 1e-12);
                assert_relative_eq!(arrhenius.T(), 10000.0 * CAL / RU, max_relative = 1e-12);
            }
            other => panic!("unexpected rate law {:?}", other),
        }
    }

    #[test]
    fn test_molecule_units_for_third_order() {
        let mut units = RateLawUnits::new();
        units
            .register(RateLawKind::ConstRate, "cm,molecule,s,K", "K")
            .unwrap();
        let value = json!({"type": "const_rate", "A": 1.0e-32});
        let law = RateLaw::from_value(&value, 3, &units).unwrap();
        // (cm^3/molecule)^2/s
        let expected = 1.0e-32 * (1.0e-6 * NA).powi(2);
        match law {
            RateLaw::ConstRate(c) => assert_relative_eq!(c.A(), expected, max_relative = 1e-12),
            other => panic!("unexpected rate law {:?}", other),
        }
    }

    #[test]
    fn test_rational_exp_a_coefficients_scaled() {
        let mut units = RateLawUnits::new();
        units
            .register(RateLawKind::RationalExp, "cm,mol,s,K", "K")
            .unwrap();
        let value = json!({"type": "rational_exp", "a0": 1.0e6, "a1": 2.0, "b0": 1.0, "T": 500.0});
        let law = RateLaw::from_value(&value, 2, &units).unwrap();
        match law {
            RateLaw::RationalExp(r) => {
                assert_relative_eq!(r.a0(), 1.0, max_relative = 1e-12);
                assert_relative_eq!(r.a1(), 2.0e-6, max_relative = 1e-12);
                assert_eq!(r.a2(), 0.0);
                assert_eq!(r.b0(), 1.0);
                assert_eq!(r.b3(), 0.0);
                assert_eq!(r.T(), 500.0);
            }
            other => panic!("unexpected rate law {:?}", other),
        }
    }
}
