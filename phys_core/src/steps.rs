//! # Solution Steps
//!
//! Human-readable walkthrough of a solved problem: the target, the equation,
//! the rearranged form, the substituted numbers and the final value.
//!
//! Substitution works on identifier tokens, so replacing `v` never touches
//! `v0` or `vf`, and function names such as `sqrt` or `cos` are left alone.

use serde::{Deserialize, Serialize};

use crate::equations::Equation;
use crate::values::{is_known, Values};

/// One line of a solution walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl SolutionStep {
    fn new(description: impl Into<String>, formula: Option<String>) -> Self {
        Self {
            description: description.into(),
            formula,
        }
    }
}

/// Build the walkthrough for `equation` solved for `target`.
///
/// `values` should be the normalized values the result was computed from.
pub fn solution_steps(
    equation: Equation,
    values: &Values,
    target: &str,
    result: f64,
    precision: usize,
) -> Vec<SolutionStep> {
    let meta = equation.metadata();
    let mut steps = Vec::with_capacity(5);

    let target_label = equation
        .variable(target)
        .map(|v| format!("{} ({}, {})", target, v.description, v.units))
        .unwrap_or_else(|| target.to_string());
    steps.push(SolutionStep::new(format!("Identify the target variable: {}", target_label), None));

    steps.push(SolutionStep::new(
        format!("Apply the equation: {}", meta.name),
        Some(meta.formula_plain.to_string()),
    ));

    if let Some(direction) = equation.direction(target) {
        if direction.formula != meta.formula_plain {
            steps.push(SolutionStep::new(
                format!("Rearrange for {}", target),
                Some(direction.formula.to_string()),
            ));
        }
        steps.push(SolutionStep::new(
            "Substitute known values",
            Some(substitute(direction.formula, equation, values)),
        ));
    }

    steps.push(SolutionStep::new(
        "Final result",
        Some(format!("{} = {:.*}", target, precision, result)),
    ));
    steps
}

/// Replace the right-hand side's equation variables with their values.
///
/// Symbols that are not variables of `equation`, or have no known value, are
/// kept as written.
pub fn substitute(formula: &str, equation: Equation, values: &Values) -> String {
    let (lhs, rhs) = match formula.split_once(" = ") {
        Some((lhs, rhs)) => (Some(lhs), rhs),
        None => (None, formula),
    };

    let mut out = String::with_capacity(rhs.len() * 2);
    let mut chars = rhs.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if c.is_ascii_alphabetic() || c == '_' {
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    end = i + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            let ident = &rhs[start..end];
            if equation.has_variable(ident) && is_known(values, ident) {
                out.push_str(&format!("({})", format_value(values[ident])));
            } else {
                out.push_str(ident);
            }
        } else if c.is_ascii_digit() || c == '.' {
            // Numeric literal, including any trailing identifier characters
            out.push(c);
            while let Some(&(_, next)) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '.' || next == '_' {
                    out.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    match lhs {
        Some(lhs) => format!("{} = {}", lhs, out),
        None => out,
    }
}

fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e9).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::values_from;

    #[test]
    fn test_substitute_whole_tokens_only() {
        let values = values_from(&[("v0", 3.0), ("a", 2.0), ("t", 4.0)]);
        let s = substitute("v = v0 + a*t", Equation::VelocityTime, &values);
        assert_eq!(s, "v = (3) + (2)*(4)");
    }

    #[test]
    fn test_substitute_keeps_functions_and_unknowns() {
        let values = values_from(&[("K", 50.0)]);
        let s = substitute("v = sqrt(2*K / m)", Equation::KineticEnergy, &values);
        assert_eq!(s, "v = sqrt(2*(50) / m)");
    }

    #[test]
    fn test_substitute_negative_and_small_values() {
        let values = values_from(&[("m", 0.5), ("vi", 30.0), ("vf", -40.0)]);
        assert_eq!(
            substitute("J = m*(vf - vi)", Equation::ImpulseMomentum, &values),
            "J = (0.5)*((-40) - (30))"
        );
        assert_eq!(format_value(1.380649e-23), "1.380649e-23");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn test_non_variable_symbols_untouched() {
        // R is a constant, not a variable of pv1
        let values = values_from(&[("n", 1.0), ("T", 300.0), ("V", 0.0224), ("R", 1.0)]);
        let s = substitute("P = n*R*T / V", Equation::IdealGasLaw, &values);
        assert_eq!(s, "P = (1)*R*(300) / (0.0224)");
    }

    #[test]
    fn test_solution_steps_sequence() {
        let values = values_from(&[("m", 0.5), ("vi", 30.0), ("vf", -40.0)]);
        let steps = solution_steps(Equation::ImpulseMomentum, &values, "J", -35.0, 3);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].description, "Identify the target variable: J (Impulse, N·s)");
        assert_eq!(steps[1].formula.as_deref(), Some("J = m*(vf - vi)"));
        assert_eq!(steps[2].description, "Substitute known values");
        assert_eq!(steps[3].formula.as_deref(), Some("J = -35.000"));
    }

    #[test]
    fn test_rearranged_direction_adds_step() {
        let values = values_from(&[("J", -35.0), ("vi", 30.0), ("vf", -40.0)]);
        let steps = solution_steps(Equation::ImpulseMomentum, &values, "m", 0.5, 2);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[2].formula.as_deref(), Some("m = J / (vf - vi)"));
        assert_eq!(steps[4].formula.as_deref(), Some("m = 0.50"));
    }
}
