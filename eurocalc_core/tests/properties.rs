//! Properties every clause must satisfy, checked through the registry.

use proptest::prelude::*;

use eurocalc_core::codes::en_1992_1_1::PartialDiscontinuityTieForce;
use eurocalc_core::codes::en_1993_1_1::FrameSwayImperfectionCriterion;
use eurocalc_core::formula::latex::{VERDICT_NOT_OK, VERDICT_OK};
use eurocalc_core::registry::{Clause, Inputs, ALL_CLAUSES};
use eurocalc_core::{CalcError, FormulaOutput, FormulaResult};

/// Inputs whose sign is a convention and is not validated
fn is_signed_input(clause: Clause, field: &str) -> bool {
    clause == Clause::ImperfectionHorizontalForce && field == "n"
}

fn clause_inputs(clause: Clause, values: &[f64]) -> Inputs {
    clause
        .input_names()
        .iter()
        .zip(values.iter().cycle())
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

fn any_clause() -> impl Strategy<Value = Clause> {
    (0..ALL_CLAUSES.len()).prop_map(|i| ALL_CLAUSES[i])
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(c in 0.0_f64..1e4, h in 0.0_f64..1e4, n_ed in 0.0_f64..1e5) {
        let a = FormulaResult::new(PartialDiscontinuityTieForce { c, h, n_ed }).unwrap();
        let b = FormulaResult::new(PartialDiscontinuityTieForce { c, h, n_ed }).unwrap();
        prop_assert_eq!(a.value().to_bits(), b.value().to_bits());
        prop_assert_eq!(a.latex().complete(), b.latex().complete());
    }

    #[test]
    fn check_is_deterministic(h_ed in 0.0_f64..1e6, v_ed in 0.0_f64..1e6) {
        let a = FormulaResult::new(FrameSwayImperfectionCriterion { h_ed, v_ed }).unwrap();
        let b = FormulaResult::new(FrameSwayImperfectionCriterion { h_ed, v_ed }).unwrap();
        prop_assert_eq!(a.value(), b.value());
        prop_assert_eq!(a.value(), h_ed >= 0.15 * v_ed);
    }

    #[test]
    fn rendering_is_repeatable(clause in any_clause(), values in prop::collection::vec(0.1_f64..500.0, 6)) {
        let inputs = clause_inputs(clause, &values);
        let first = clause.evaluate(&inputs).unwrap();
        let second = clause.evaluate(&inputs).unwrap();
        prop_assert_eq!(&first.latex_complete, &second.latex_complete);
        prop_assert_eq!(&first.latex_short, &second.latex_short);
    }

    #[test]
    fn complete_rendering_ends_with_result(
        clause in any_clause(),
        values in prop::collection::vec(0.1_f64..500.0, 6),
    ) {
        let evaluation = clause.evaluate(&clause_inputs(clause, &values)).unwrap();
        match evaluation.value {
            FormulaOutput::Number(value) if value.is_finite() => {
                let last = evaluation.latex_complete.rsplit(" = ").next().unwrap_or_default();
                let rendered: f64 = last.parse().unwrap();
                prop_assert!((rendered - value).abs() <= 0.005_f64.max(value.abs() * 1e-12));
            }
            FormulaOutput::Number(_) => {}
            FormulaOutput::Check(passes) => {
                let verdict = if passes { VERDICT_OK } else { VERDICT_NOT_OK };
                prop_assert!(evaluation.latex_complete.ends_with(verdict));
                prop_assert!(evaluation.latex_short.ends_with(verdict));
            }
        }
    }

    #[test]
    fn negative_inputs_are_rejected(
        clause in any_clause(),
        values in prop::collection::vec(0.1_f64..500.0, 6),
        index in 0_usize..6,
        negative in -1e6_f64..-1e-9,
    ) {
        let names = clause.input_names();
        let field = names[index % names.len()];
        let mut inputs = clause_inputs(clause, &values);
        inputs.insert(field.to_string(), negative);

        let result = clause.evaluate(&inputs);
        if is_signed_input(clause, field) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), CalcError::negative_value(field, negative));
        }
    }
}
